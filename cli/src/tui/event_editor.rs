// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use monthcal_core::color::{PALETTE, palette_name};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input, RadioGroup};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};

type EventForm = Form<CalendarStore, Box<dyn FormItem<CalendarStore>>>;

/// The create/edit dialog.
pub struct EventEditor(SinglePage<CalendarStore, EventForm>);

impl EventEditor {
    pub fn new(default_color: &str) -> Self {
        let form = Form::new(vec![
            Box::new(new_title()) as Box<dyn FormItem<CalendarStore>>,
            Box::new(new_start()),
            Box::new(new_end()),
            Box::new(new_color(default_color)),
            Box::new(new_description()),
        ]);
        Self(SinglePage::new(page_title, instructions, form))
    }

    /// Rows needed by the dialog, borders included.
    pub fn height(&self) -> u16 {
        self.0.inner().height() + 2
    }
}

impl Component<CalendarStore> for EventEditor {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(
        &self,
        store: &RefCell<CalendarStore>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.code == KeyCode::Char('d') && event.modifiers.contains(KeyModifiers::CONTROL) {
            dispatcher.dispatch(Action::Delete);
            return Some(Message::Handled);
        }

        match self.0.on_key(dispatcher, store, area, event) {
            Some(Message::Exit) => {
                dispatcher.dispatch(Action::Cancel);
                Some(Message::Handled)
            }
            msg => msg,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<CalendarStore>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<CalendarStore>) {
        self.0.deactivate(dispatcher, store);
    }
}

fn page_title(store: &CalendarStore) -> String {
    if store.view.dialog().is_editing() {
        "Modifier l'évènement".to_string()
    } else {
        "Nouvel évènement".to_string()
    }
}

fn instructions(store: &CalendarStore) -> Line<'static> {
    if let Some(status) = &store.status {
        return Line::from(format!(" {status} ").red().bold());
    }

    let mut spans = vec![
        " Champ ".into(),
        "<Tab>".blue().bold(),
        " Enregistrer ".into(),
        "<Enter>".blue().bold(),
        " Annuler ".into(),
        "<Esc>".blue().bold(),
    ];
    if store.view.dialog().is_editing() {
        spans.push(" Supprimer ".into());
        spans.push("<Ctrl-D>".blue().bold());
    }
    spans.push(" ".into());
    Line::from(spans)
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $getter: expr, $action: ident) => {
        fn $fn() -> Input<CalendarStore, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<CalendarStore, String> for $acc {
            fn get(store: &RefCell<CalendarStore>) -> String {
                $getter(&store.borrow())
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

new_input!(
    new_title,
    "Titre",
    TitleAccess,
    CalendarStore::title,
    UpdateTitle
);
new_input!(
    new_start,
    "Début (AAAA-MM-JJTHH:MM)",
    StartAccess,
    |s: &CalendarStore| s.start_input.clone(),
    UpdateStart
);
new_input!(
    new_end,
    "Fin (AAAA-MM-JJTHH:MM)",
    EndAccess,
    |s: &CalendarStore| s.end_input.clone(),
    UpdateEnd
);
new_input!(
    new_description,
    "Description",
    DescriptionAccess,
    CalendarStore::description,
    UpdateDescription
);

/// The palette, preceded by the configured default when it is not a preset.
fn color_choices(default_color: &str) -> (Vec<String>, Vec<String>) {
    let mut values = Vec::new();
    let mut options = Vec::new();
    if palette_name(default_color).is_none() {
        values.push(default_color.to_string());
        options.push("défaut".to_string());
    }
    for (name, hex) in PALETTE {
        values.push((*hex).to_string());
        options.push((*name).to_string());
    }
    (values, options)
}

fn new_color(default_color: &str) -> RadioGroup<CalendarStore, String, ColorAccess> {
    let (values, options) = color_choices(default_color);
    RadioGroup::new("Couleur", values, options)
}

struct ColorAccess;

impl Access<CalendarStore, String> for ColorAccess {
    fn get(store: &RefCell<CalendarStore>) -> String {
        store.borrow().color()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::UpdateColor(value));
        true
    }
}

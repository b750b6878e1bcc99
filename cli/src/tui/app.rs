// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc, time::Duration};

use chrono::Local;
use monthcal_core::{CalendarView, Config, DisplayMonth, EventStore};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Flex;
use ratatui::prelude::*;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_editor::EventEditor;
use crate::tui::month_view::MonthView;

/// How long to wait for input before redrawing, so that "today" follows the
/// clock.
const TICK: Duration = Duration::from_secs(30);

const POPUP_WIDTH: u16 = 72;

/// Opens the month view until the user quits. Events live in memory only.
pub fn run_calendar(config: Config, month: Option<DisplayMonth>) -> Result<(), Box<dyn Error>> {
    let events = Rc::new(RefCell::new(EventStore::new()));
    let default_color = config.default_color.clone();
    let mut view = CalendarView::new(events, config, Local::now().naive_local());
    if let Some(month) = month {
        view.show_month(month);
    }
    let store = Rc::new(RefCell::new(CalendarStore::new(view)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(store.clone(), &mut dispatcher);
        let mut app = CalendarApp::new(dispatcher, &default_color);

        loop {
            let now = Local::now().naive_local();
            store.borrow_mut().view.refresh_now(now);

            if let Err(e) = app.draw(&store, &mut terminal) {
                break Err(e);
            }

            match app.read_event(&store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // Continue the loop to render the next frame
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();

    let count = store.borrow().view.events().len();
    tracing::debug!(count, "calendar closed, discarding events");
    result
}

/// Root component: the month view, with the event dialog on top while it is
/// open.
struct CalendarApp {
    dispatcher: Dispatcher,
    month: MonthView,
    editor: EventEditor,
    editor_active: bool,
    area: Rect,
}

impl CalendarApp {
    fn new(dispatcher: Dispatcher, default_color: &str) -> Self {
        Self {
            dispatcher,
            month: MonthView::new(),
            editor: EventEditor::new(default_color),
            editor_active: false,
            area: Rect::default(),
        }
    }

    fn draw(
        &mut self,
        store: &RefCell<CalendarStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        terminal.draw(|frame| {
            self.area = frame.area();
            self.render(store, self.area, frame.buffer_mut());
            if let Some(pos) = self.cursor_position(store, self.area) {
                frame.set_cursor_position(pos);
            }
        })?;
        Ok(())
    }

    fn read_event(
        &mut self,
        store: &RefCell<CalendarStore>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        if !event::poll(TICK)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.on_key(store, self.area, key))
            }
            _ => Ok(None),
        }
    }

    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        self.month.render(store, area, buf);
        if self.editor_active {
            self.editor.render(store, self.popup_area(area), buf);
        }
    }

    fn cursor_position(&self, store: &RefCell<CalendarStore>, area: Rect) -> Option<(u16, u16)> {
        match self.editor_active {
            true => self.editor.get_cursor_position(store, self.popup_area(area)),
            false => None,
        }
    }

    fn on_key(
        &mut self,
        store: &RefCell<CalendarStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let msg = if self.editor_active {
            let popup = self.popup_area(area);
            self.editor.on_key(&mut self.dispatcher, store, popup, event)
        } else {
            self.month.on_key(&mut self.dispatcher, store, area, event)
        };
        self.sync_editor(store);
        msg
    }

    /// Follows the dialog state, which actions may change from either side.
    fn sync_editor(&mut self, store: &RefCell<CalendarStore>) {
        let open = store.borrow().view.dialog().is_open();
        match (open, self.editor_active) {
            (true, false) => self.editor.activate(&mut self.dispatcher, store),
            (false, true) => self.editor.deactivate(&mut self.dispatcher, store),
            _ => {}
        }
        self.editor_active = open;
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let [area] = Layout::horizontal([Constraint::Length(POPUP_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::vertical([Constraint::Length(self.editor.height())])
            .flex(Flex::Center)
            .areas(area);
        area
    }
}

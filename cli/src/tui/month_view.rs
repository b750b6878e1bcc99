// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use monthcal_core::color::parse_hex_color;
use monthcal_core::locale::{month_title, weekday_label};
use monthcal_core::{DEFAULT_COLOR, Event, GridCell, Placement, SegmentRole};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::truncate_to_width;

/// The month grid with its title, weekday header and key hints.
#[derive(Debug, Default)]
pub struct MonthView;

impl MonthView {
    pub fn new() -> Self {
        Self
    }

    fn render_cell(store: &CalendarStore, cell: &GridCell, area: Rect, buf: &mut Buffer) {
        let view = &store.view;
        let selected = cell.date == view.selected();
        let border_style = if selected {
            Style::new().yellow().bold()
        } else {
            Style::new().dark_gray()
        };
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let day_style = if cell.is_today {
            Style::new().yellow().bold()
        } else if cell.in_month {
            Style::new().white()
        } else {
            Style::new().dark_gray()
        };
        buf.set_stringn(
            inner.x,
            inner.y,
            cell.date.format("%-d").to_string(),
            inner.width as usize,
            day_style,
        );

        let focused = if selected { store.focused } else { None };
        let rows = inner.height.saturating_sub(1) as usize;
        view.with_placements(cell.date, |placements| {
            let lines = bar_lines(placements, rows, inner.width as usize, focused);
            for (i, (text, style)) in lines.into_iter().enumerate() {
                buf.set_stringn(
                    inner.x,
                    inner.y + 1 + i as u16,
                    text,
                    inner.width as usize,
                    style,
                );
            }
        });
    }
}

impl Component<CalendarStore> for MonthView {
    fn render(&self, store: &RefCell<CalendarStore>, area: Rect, buf: &mut Buffer) {
        let s = store.borrow();
        let grid = s.view.grid();

        let [title_area, header_area, grid_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Line::from(month_title(grid.month).bold())
            .centered()
            .render(title_area, buf);

        let columns = Layout::horizontal([Constraint::Ratio(1, 7); 7]).split(header_area);
        for (day, col) in grid.weekdays().iter().zip(columns.iter()) {
            Line::from(weekday_label(*day).bold())
                .centered()
                .render(*col, buf);
        }

        let weeks = grid.week_count().max(1) as u32;
        let rows = Layout::vertical((0..weeks).map(|_| Constraint::Ratio(1, weeks)))
            .split(grid_area);
        for (week, row) in grid.weeks().zip(rows.iter()) {
            let cells = Layout::horizontal([Constraint::Ratio(1, 7); 7]).split(*row);
            for (cell, cell_area) in week.iter().zip(cells.iter()) {
                Self::render_cell(&s, cell, *cell_area, buf);
            }
        }

        footer(&s).render(footer_area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<CalendarStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let action = match event.code {
            KeyCode::Left | KeyCode::Char('h') => Action::MoveSelection(-1),
            KeyCode::Right | KeyCode::Char('l') => Action::MoveSelection(1),
            KeyCode::Up | KeyCode::Char('k') => Action::MoveSelection(-7),
            KeyCode::Down | KeyCode::Char('j') => Action::MoveSelection(7),
            KeyCode::PageDown | KeyCode::Char('n') => Action::NextMonth,
            KeyCode::PageUp | KeyCode::Char('p') => Action::PreviousMonth,
            KeyCode::Char('t') => Action::GoToToday,
            KeyCode::Tab => Action::CycleEvent,
            KeyCode::Enter => Action::OpenCreate,
            KeyCode::Char('e') => Action::EditFocused,
            KeyCode::Char('q') | KeyCode::Esc => return Some(Message::Exit),
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

fn footer(store: &CalendarStore) -> Line<'static> {
    if let Some(status) = &store.status {
        return Line::from(status.clone().red().bold());
    }

    Line::from(vec![
        " Jour ".into(),
        "<←↑↓→>".blue().bold(),
        " Mois ".into(),
        "<n/p>".blue().bold(),
        " Aujourd'hui ".into(),
        "<t>".blue().bold(),
        " Nouveau ".into(),
        "<Enter>".blue().bold(),
        " Évènement ".into(),
        "<Tab>".blue().bold(),
        " Modifier ".into(),
        "<e>".blue().bold(),
        " Quitter ".into(),
        "<q>".blue().bold(),
    ])
}

/// Lines drawn under the day number: one bar per event, the last row turning
/// into `+N` when they do not all fit.
fn bar_lines(
    placements: &[Placement<'_>],
    rows: usize,
    width: usize,
    focused: Option<usize>,
) -> Vec<(String, Style)> {
    if rows == 0 || width == 0 {
        return Vec::new();
    }

    let shown = if placements.len() > rows {
        rows - 1
    } else {
        placements.len()
    };

    let mut lines: Vec<(String, Style)> = placements
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, p)| {
            let label = truncate_to_width(&segment_label(p.event, p.role), width);
            let pad = width.saturating_sub(label.width());
            let mut style = bar_style(p.event);
            if focused == Some(i) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            (format!("{label}{}", " ".repeat(pad)), style)
        })
        .collect();

    let hidden = placements.len() - shown;
    if hidden > 0 {
        lines.push((format!("+{hidden}"), Style::new().dark_gray()));
    }
    lines
}

/// Text of an event bar. Arrows mark a bar continuing into the next or
/// previous day.
fn segment_label(event: &Event, role: SegmentRole) -> String {
    let time = event.start.format("%H:%M");
    match role {
        SegmentRole::Single => format!("{time} {}", event.title),
        SegmentRole::Start => format!("{time} {} ▸", event.title),
        SegmentRole::Middle => format!("◂ {} ▸", event.title),
        SegmentRole::End => format!("◂ {}", event.title),
    }
}

/// Event color as background, with black or white text for contrast.
fn bar_style(event: &Event) -> Style {
    let rgb = event
        .color
        .as_deref()
        .and_then(parse_hex_color)
        .or_else(|| parse_hex_color(DEFAULT_COLOR));

    match rgb {
        Some((r, g, b)) => {
            let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
            let fg = if luma > 150.0 { Color::Black } else { Color::White };
            Style::new().bg(Color::Rgb(r, g, b)).fg(fg)
        }
        None => Style::new().reversed(),
    }
}

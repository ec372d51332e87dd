use async_trait::async_trait;
use chrono::Local;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    calendar::{DAY_HEADERS, MonthView},
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

const CELL_WIDTH: usize = 5;

pub struct CalendarView {
    view: MonthView,
}

impl Default for CalendarView {
    fn default() -> Self {
        Self {
            view: MonthView::current(),
        }
    }
}

#[async_trait]
impl View for CalendarView {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let grid = self.view.grid(Local::now().date_naive());

        let week_count = grid.cell_count() / 7;
        let mut constraints = vec![Constraint::Length(2), Constraint::Length(1)];
        constraints.extend(vec![Constraint::Length(1); week_count]);
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        f.render_widget(
            Paragraph::new(Line::styled(
                format!("‹  {}  ›", self.view.title()),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            chunks[0],
        );

        let headers: String = DAY_HEADERS
            .iter()
            .map(|d| format!("{d:>width$}", width = CELL_WIDTH))
            .collect();
        f.render_widget(
            Paragraph::new(Line::styled(
                headers,
                Style::default().fg(colors::SECONDARY),
            ))
            .centered(),
            chunks[1],
        );

        let cells: Vec<Option<u32>> = grid.cells().collect();
        for (week_index, week) in cells.chunks(7).enumerate() {
            let mut line = Line::default();
            for cell in week {
                match cell {
                    Some(day) => {
                        let style = if grid.today == Some(*day) {
                            Style::default()
                                .fg(colors::ACCENT)
                                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                        } else {
                            Style::default()
                        };
                        line.push_span(Span::styled(
                            format!("{day:>width$}", width = CELL_WIDTH),
                            style,
                        ));
                    }
                    None => line.push_span(Span::raw(" ".repeat(CELL_WIDTH))),
                }
            }
            f.render_widget(
                Paragraph::new(line).centered(),
                chunks[2 + week_index],
            );
        }
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.view.prev_month();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.view.next_month();
                None
            }
            _ => None,
        }
    }
}

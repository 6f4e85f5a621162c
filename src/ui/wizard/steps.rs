//! Rendering for the input steps and the chrome shared by every step

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::WizardScreen;
use crate::ui::layout::centered_rect;

/// Rows used by one field: label, bordered input, error line
const FIELD_HEIGHT: u16 = 5;

impl WizardScreen {
    /// Draw the outer box titled with the step heading; returns the inside
    pub(crate) fn render_frame(&self, frame: &mut Frame) -> Rect {
        let area = centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.step()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }

    pub(crate) fn render_heading(&self, frame: &mut Frame, area: Rect) {
        let heading = Paragraph::new(Line::from(Span::styled(
            self.step().title(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(heading, area);
    }

    /// Back / Next / Submit hints plus the status line
    pub(crate) fn render_footer(&self, frame: &mut Frame, buttons_area: Rect, status_area: Rect) {
        let mut spans = Vec::new();
        if !self.step().is_first() {
            spans.push(Span::styled(
                " [Esc] Back ",
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
            spans.push(Span::raw("     "));
        }
        if self.step().is_last() {
            spans.push(Span::styled(
                " [Enter] Submit ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                " [Enter] Next ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        let buttons = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(buttons, buttons_area);

        let status = if let Some(ref alert) = self.alert {
            Line::from(Span::styled(alert.as_str(), Style::default().fg(Color::Red)))
        } else if let Some(ref status) = self.status {
            Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(Span::styled(
                "Tab: next field  Ctrl-C: quit",
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            status_area,
        );
    }

    pub(crate) fn render_input_step(&self, frame: &mut Frame) {
        let inner = self.render_frame(frame);
        let fields = self.step().fields();

        let mut constraints = vec![
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Spacer
        ];
        constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0)); // Filler
        constraints.push(Constraint::Length(1)); // Buttons
        constraints.push(Constraint::Length(1)); // Status

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner);

        self.render_heading(frame, chunks[0]);

        for (i, field) in fields.iter().enumerate() {
            let focused = i == self.focus;
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Label
                    Constraint::Length(3), // Input
                    Constraint::Length(1), // Error
                ])
                .split(chunks[2 + i]);

            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(field.label(), label_style)),
                rows[0],
            );

            let border_color = if self.controller.error_for(*field).is_some() {
                Color::Red
            } else if focused {
                Color::Cyan
            } else {
                Color::Gray
            };
            let input_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color));
            let input_area = input_block.inner(rows[1]);
            frame.render_widget(input_block, rows[1]);
            if let Some(input) = self.inputs.get(field) {
                input.render(frame, input_area, focused);
            }

            if let Some(message) = self.controller.error_for(*field) {
                frame.render_widget(
                    Paragraph::new(Span::styled(message, Style::default().fg(Color::Red))),
                    rows[2],
                );
            }
        }

        let n = chunks.len();
        self.render_footer(frame, chunks[n - 2], chunks[n - 1]);
    }
}

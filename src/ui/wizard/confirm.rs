//! Confirmation and success rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::WizardScreen;
use crate::form::Field;

impl WizardScreen {
    pub(crate) fn render_confirm_step(&self, frame: &mut Frame) {
        let inner = self.render_frame(frame);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(1), // Spacer
                Constraint::Length(Field::all().len() as u16), // Summary
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Status
            ])
            .split(inner);

        self.render_heading(frame, chunks[0]);

        // The confirmation screen reads the store, not the drafts
        let data = self.controller.store().read();
        let summary: Vec<Line> = Field::all()
            .iter()
            .map(|field| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", field.label()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        data.display_value(*field),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(summary), chunks[2]);

        self.render_footer(frame, chunks[4], chunks[5]);
    }

    pub(crate) fn render_success(&self, frame: &mut Frame) {
        let inner = self.render_frame(frame);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1), // Banner
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Reference
                Constraint::Min(0),
                Constraint::Length(1), // Hint
            ])
            .split(inner);

        let banner = Paragraph::new(Line::from(Span::styled(
            "Form Submitted Successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[1]);

        if let Some(submission) = self.controller.submission() {
            let reference = Paragraph::new(Line::from(vec![
                Span::styled("Reference: ", Style::default().fg(Color::Gray)),
                Span::raw(submission.id.to_string()),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(reference, chunks[3]);
        }

        let hint = Paragraph::new(Span::styled(
            "Press any key to exit",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[5]);
    }
}

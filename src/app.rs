use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::form::Submission;
use crate::sink::JsonSink;
use crate::ui::{TerminalGuard, WizardResult, WizardScreen};

pub struct App {
    config: Config,
    wizard: WizardScreen,
    should_quit: bool,
    /// Set once the form has been submitted
    submission: Option<Submission>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let sink = JsonSink::new(config.output_path());
        Self {
            wizard: WizardScreen::new(sink),
            config,
            should_quit: false,
            submission: None,
        }
    }

    /// Run the wizard until the user quits; returns what was submitted, if anything
    pub async fn run(mut self) -> Result<Option<Submission>> {
        let mut guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        tracing::info!("Wizard started");

        while !self.should_quit {
            terminal.draw(|f| self.wizard.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            self.wizard.drain_events();
        }

        guard.restore();
        terminal.show_cursor()?;

        if self.submission.is_none() {
            tracing::info!(step = self.wizard.step().index(), "Wizard closed without submitting");
        }
        Ok(self.submission)
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        match self.wizard.handle_key(key) {
            WizardResult::Continue => {}
            WizardResult::Submitted(submission) => {
                self.submission = Some(submission);
            }
            WizardResult::Quit => self.should_quit = true,
        }
    }
}

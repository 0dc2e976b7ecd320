use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};

/// How long to wait for input before re-checking toast expiry.
const TICK: Duration = Duration::from_millis(250);

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or drawn to,
    /// or reading terminal events fails.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - mailedit requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = self.initial_model((size.width, size.height));
        tracing::info!(documents = model.store.len(), "session started");

        let result = self.event_loop(&mut terminal, &mut model);

        ratatui::restore();
        tracing::info!(documents = model.store.len(), "session ended");
        result
    }

    /// Build the starting model: seeded store, CLI uploads, view settings.
    pub(super) fn initial_model(&self, terminal_size: (u16, u16)) -> Model {
        let mut model = Model::new(terminal_size);
        model.preview_visible = self.preview_visible;
        model.sidebar_width_percent = self.sidebar_width_percent;
        for path in &self.initial_files {
            super::effects::upload_file(&mut model, path);
        }
        model
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_redraw = false;
            }

            if event::poll(TICK)? {
                let ev = event::read()?;
                if let Some(msg) = self.handle_event(ev, model) {
                    tracing::trace!(?msg, "message");
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    self.handle_message_side_effects(model, &side_msg);
                    needs_redraw = true;
                }
            }

            if model.expire_toast(Instant::now()) {
                needs_redraw = true;
            }

            if model.should_quit {
                return Ok(());
            }
        }
    }
}

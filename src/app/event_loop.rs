use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

use crate::app::{App, Message, Model, ToastLevel, update};

/// Terminal mouse reporting, held for as long as the widget is mounted.
///
/// Acquiring enables press, drag, motion and release reports; dropping the
/// guard disables them again on every exit path, including errors and
/// panics that unwind through the event loop.
#[derive(Debug)]
pub(super) struct MouseCapture {
    _private: (),
}

impl MouseCapture {
    pub(super) fn acquire() -> Result<Self> {
        execute!(stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;
        debug!("mouse capture acquired");
        Ok(Self { _private: () })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if let Err(err) = execute!(stdout(), DisableMouseCapture) {
            warn!(%err, "failed to release mouse capture");
        } else {
            debug!("mouse capture released");
        }
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - dragbox requires an interactive terminal")?;
        let result = terminal
            .size()
            .context("Failed to read terminal size")
            .and_then(|size| {
                let mut model = self.initial_model((size.width, size.height));
                MouseCapture::acquire()
                    .and_then(|_capture| Self::event_loop(&mut terminal, &mut model))
            });

        ratatui::restore();
        result
    }

    /// Model for the first frame: seeded, with the box moved into view and
    /// the latest startup warning shown.
    pub(super) fn initial_model(&self, terminal_size: (u16, u16)) -> Model {
        let mut model = Model::new(self.seed.clone(), self.position, terminal_size);
        model
            .config_global_path
            .clone_from(&self.config_global_path);
        model.config_local_path.clone_from(&self.config_local_path);
        if model.bring_box_into_view() {
            info!(position = ?model.drag.position(), "box moved into view");
        }
        if let Some(warning) = self.startup_warnings.last() {
            model.show_toast(ToastLevel::Warning, warning.clone());
        }
        model
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::dispatch(model, msg);
                    needs_render = true;
                }

                // Coalesce drag motion bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::ZERO)? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        Self::dispatch(model, msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    tracing::trace!(frame = frame_idx, drained, "event.drain");
                }
            }

            if needs_render {
                frame_idx += 1;
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(model: &mut Model, msg: Message) {
        if !matches!(msg, Message::UpdateDrag(_)) {
            debug!(?msg, "event.message");
        }
        *model = update(std::mem::take(model), msg);
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

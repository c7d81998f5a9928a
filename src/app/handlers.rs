//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::flow::Completion;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::GenerationFinished(outcome) => {
                if self.flow.finish(outcome) == Completion::Rendered {
                    self.scroll = 0;
                    self.max_scroll = None;
                }
                self.mark_dirty();
            }
            AppMessage::HealthChecked(status) => {
                debug!(?status, "Health probe finished");
                self.health = status;
                self.mark_dirty();
            }
            AppMessage::CopyAckExpired { ticket } => {
                if self.copy.expire(ticket) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!(code = ?key.code, mods = ?key.modifiers, "Key event");
        self.mark_dirty();

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('y') if ctrl => self.copy_result(),
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Backspace => {
                self.input.backspace();
            }
            KeyCode::Delete => {
                self.input.delete();
            }
            KeyCode::Char(c) if !ctrl => self.input.insert_char(c),
            _ => {}
        }
    }

    /// Handle bracketed paste into the topic field
    pub fn handle_paste(&mut self, text: &str) {
        self.input.insert_str(text);
        self.mark_dirty();
    }
}

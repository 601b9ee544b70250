//! # InputBox Component
//!
//! The chat's single-line text input.
//!
//! ## Responsibilities
//!
//! - Capture text input (typed or pasted)
//! - Handle editing (backspace, delete, cursor movement)
//! - Handle submission (Enter) — empty or whitespace-only input never
//!   submits, which is how "empty input is filtered before send" holds
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. The cursor is a byte offset
//! that always sits on a `char` boundary; editing operations move it with
//! the boundary helpers below rather than raw arithmetic.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed on non-empty input)
    Submit(String),
    /// Text content or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Cursor byte position, always on a char boundary
    cursor: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos.saturating_sub(1);
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = (pos + 1).min(s.len());
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;

        // Keep the cursor visible: show the tail window that contains it
        let width_to_cursor = self.buffer[..self.cursor].width();
        let skip_cols = width_to_cursor.saturating_sub(inner_width.saturating_sub(1));
        let mut skipped = 0;
        let mut start = 0;
        for (i, c) in self.buffer.char_indices() {
            if skipped >= skip_cols {
                start = i;
                break;
            }
            skipped += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            start = i + c.len_utf8();
        }
        let visible = &self.buffer[start..];

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("Share how you're feeling...");

        let input = Paragraph::new(visible)
            .block(block)
            .style(Style::default().fg(Color::Cyan));

        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + self.buffer[start..self.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: newlines in pasted text become spaces
                let flat = text.replace(['\r', '\n'], " ");
                self.insert_str(&flat);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor = 0;
                    Some(InputEvent::Submit(text.trim().to_string()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::InputChar('é'));
        input.handle_event(&TuiEvent::InputChar('x'));
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "x");
    }

    #[test]
    fn test_submit_trims_and_clears() {
        let mut input = InputBox::new();
        for c in "  hello  ".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("hello".to_string())));
        assert!(input.buffer.is_empty(), "buffer cleared after submit");
    }

    #[test]
    fn test_empty_submit_is_filtered() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);

        input.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            None,
            "whitespace-only input never submits"
        );
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("two\nlines".to_string()));
        assert_eq!(input.buffer, "two lines");
    }

    #[test]
    fn test_render_does_not_panic_when_narrow() {
        let backend = TestBackend::new(4, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new();
        for c in "a long line of text".chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        terminal.draw(|f| input.render(f, f.area())).unwrap();
    }
}

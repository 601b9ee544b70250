//! # Chat View
//!
//! Scrollable view of the conversation, plus the animated typing indicator
//! shown while a reply is pending.
//!
//! ## Architecture
//!
//! `ChatView` is a transient component (created each frame) wrapping
//! `&mut ChatState` (persistent scroll state) and the transcript (props).
//! Message heights are measured up front with
//! [`Message::calculate_height`], which lets the scroll area be sized
//! without rendering anything twice.
//!
//! While `stick_to_bottom` is set, new content keeps the view pinned to
//! the latest message; any manual scroll releases the pin, and scrolling
//! back to the end re-engages it.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::responder::Transcript;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

/// Rows reserved for the typing indicator line.
const TYPING_INDICATOR_HEIGHT: u16 = 1;

/// Persistent scroll state for the chat view.
/// Must be persisted in the parent TuiState.
pub struct ChatState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for paging and re-pin checks)
    pub viewport_height: u16,
    /// Total content height from the last render
    pub content_height: u16,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            content_height: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset().y as i32;
        let new_y = (current + delta).clamp(0, self.max_scroll() as i32) as u16;
        self.scroll_state.set_offset(Position { x: 0, y: new_y });
        // Re-pin when the user scrolls back down to the end
        self.stick_to_bottom = new_y >= self.max_scroll();
    }
}

impl EventHandler for ChatState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        let page = self.viewport_height.max(1) as i32;
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-page),
            TuiEvent::ScrollPageDown => self.scroll_by(page),
            _ => return None,
        }
        Some(())
    }
}

/// Transient render wrapper for the conversation.
pub struct ChatView<'a> {
    state: &'a mut ChatState,
    transcript: &'a Transcript,
    is_replying: bool,
    spinner_frame: usize,
}

impl<'a> ChatView<'a> {
    pub fn new(
        state: &'a mut ChatState,
        transcript: &'a Transcript,
        is_replying: bool,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            transcript,
            is_replying,
            spinner_frame,
        }
    }
}

impl<'a> Component for ChatView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        let heights: Vec<u16> = self
            .transcript
            .messages
            .iter()
            .map(|m| Message::calculate_height(m, content_width))
            .collect();

        let mut total_height: u16 = heights.iter().sum();
        if self.is_replying {
            total_height += TYPING_INDICATOR_HEIGHT;
        }

        self.state.viewport_height = area.height;
        self.state.content_height = total_height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (message, height) in self.transcript.messages.iter().zip(&heights) {
            let rect = Rect::new(0, y, content_width, *height);
            scroll_view.render_widget(Message::new(message), rect);
            y += height;
        }

        if self.is_replying {
            let dots = match self.spinner_frame % 3 {
                0 => "·",
                1 => "· ·",
                _ => "· · ·",
            };
            let indicator = Span::styled(
                format!("sana is thinking {dots}"),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            scroll_view.render_widget(indicator, Rect::new(0, y, content_width, 1));
        }

        if self.state.stick_to_bottom {
            let max_y = total_height.saturating_sub(area.height);
            self.state
                .scroll_state
                .set_offset(Position { x: 0, y: max_y });
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(transcript: &Transcript, is_replying: bool) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ChatState::new();
        terminal
            .draw(|f| {
                ChatView::new(&mut state, transcript, is_replying, 2).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_greeting() {
        let transcript = Transcript::new();
        let text = render_to_text(&transcript, false);
        assert!(text.contains("wellness companion"));
        assert!(!text.contains("thinking"));
    }

    #[test]
    fn test_typing_indicator_shown_while_replying() {
        let transcript = Transcript::new();
        let text = render_to_text(&transcript, true);
        assert!(text.contains("sana is thinking"));
    }

    #[test]
    fn test_scroll_releases_and_repins_stick_to_bottom() {
        let mut state = ChatState::new();
        state.viewport_height = 10;
        state.content_height = 50;

        state.scroll_state.set_offset(Position { x: 0, y: 40 });
        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom, "scrolling up releases the pin");
        assert_eq!(state.scroll_state.offset().y, 39);

        state.handle_event(&TuiEvent::ScrollPageDown);
        state.handle_event(&TuiEvent::ScrollPageDown);
        state.handle_event(&TuiEvent::ScrollPageDown);
        assert!(state.stick_to_bottom, "paging to the end re-pins");
    }

    #[test]
    fn test_unrelated_events_not_consumed() {
        let mut state = ChatState::new();
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }
}

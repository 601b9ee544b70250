use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::responder::{ChatMessage, Role};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A transient component rendering one chat message with role-based styling.
///
/// Created fresh each frame by the chat view with the data it needs; holds
/// no mutable state. The user's messages render cyan, the companion's
/// green, matching their roles throughout the UI.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub message: &'a ChatMessage,
}

impl<'a> Message<'a> {
    pub fn new(message: &'a ChatMessage) -> Self {
        Self { message }
    }

    /// Calculate the height this message needs at the given width.
    ///
    /// Uses `textwrap` with options matching Ratatui's `Paragraph` wrapping
    /// so the chat view can lay out its scroll area without rendering
    /// anything first.
    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; still occupy a row
            return 1;
        }

        let content = message.content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn role_name(&self) -> &'static str {
        match self.message.role {
            Role::User => "you",
            Role::Companion => "sana",
        }
    }

    fn role_style(&self) -> Style {
        match self.message.role {
            Role::User => Style::default().fg(Color::Cyan),
            Role::Companion => Style::default().fg(Color::Green),
        }
    }
}

impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = self.role_style();
        let border_style = style.add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .title(self.role_name())
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        Paragraph::new(self.message.content.trim())
            .block(block)
            .style(style)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn msg(role: Role, content: &str) -> ChatMessage {
        ChatMessage::new(role, content)
    }

    #[test]
    fn test_height_includes_borders() {
        let message = msg(Role::User, "Single line");
        // 1 line of content + 2 for borders = 3
        assert_eq!(Message::calculate_height(&message, 80), 3);
    }

    #[test]
    fn test_height_wraps_long_content() {
        let message = msg(Role::Companion, &"word ".repeat(40));
        let height = Message::calculate_height(&message, 40);
        assert!(height > 3, "long content should wrap to multiple lines");
    }

    #[test]
    fn test_height_trims_content() {
        let message = msg(Role::Companion, "\n\n   Trim me   \n\n");
        assert_eq!(Message::calculate_height(&message, 80), 3);
    }

    #[test]
    fn test_degenerate_width() {
        let message = msg(Role::User, "text");
        assert_eq!(Message::calculate_height(&message, 2), 1);
    }

    #[test]
    fn test_render_shows_role_and_content() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let message = msg(Role::User, "hello there");

        terminal
            .draw(|f| f.render_widget(Message::new(&message), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("you"));
        assert!(text.contains("hello there"));
    }
}

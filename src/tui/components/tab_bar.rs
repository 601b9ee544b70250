//! # TabBar Component
//!
//! Top bar: application name, the five tabs, transient status text, and
//! the "Feeling <mood>" indicator once a mood is known.
//!
//! Purely presentational — all fields are props from the parent, so the
//! component is trivial to test: construct, render, inspect the buffer.
//! The active tab is highlighted; the mood indicator sits at the far
//! right and is dropped first when the terminal is too narrow.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::mood::Mood;
use crate::core::state::Tab;
use crate::tui::component::Component;

pub struct TabBar {
    /// Which tab is active (prop)
    pub active: Tab,
    /// Transient status text (prop)
    pub status_message: String,
    /// Last known mood, if any (prop)
    pub current_mood: Option<Mood>,
}

impl TabBar {
    pub fn new(active: Tab, status_message: String, current_mood: Option<Mood>) -> Self {
        Self {
            active,
            status_message,
            current_mood,
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" Sana ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("│"),
        ];

        for tab in Tab::ALL {
            let style = if tab == self.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", tab.label()), style));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        // Mood indicator, right-aligned when it fits
        if let Some(mood) = self.current_mood {
            let indicator = format!("Feeling {} ", mood.label());
            let used: usize = spans.iter().map(|s| s.content.width()).sum();
            let gap = (area.width as usize).saturating_sub(used + indicator.width());
            if gap > 0 {
                spans.push(Span::raw(" ".repeat(gap)));
                spans.push(Span::styled(
                    indicator,
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
        }

        frame.render_widget(Line::from(spans), area);
    }
}

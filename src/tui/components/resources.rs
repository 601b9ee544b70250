//! # Wellness Resources
//!
//! Static directory of crisis lines, apps, books and professional-help
//! pointers, plus the care disclaimer. No interaction beyond scrolling.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

struct CrisisLine {
    name: &'static str,
    contact: &'static str,
    description: &'static str,
}

const CRISIS_LINES: &[CrisisLine] = &[
    CrisisLine {
        name: "National Suicide Prevention Lifeline",
        contact: "988",
        description: "24/7 free and confidential emotional support",
    },
    CrisisLine {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        description: "Free, 24/7 crisis counseling via text message",
    },
    CrisisLine {
        name: "NAMI Helpline",
        contact: "1-800-950-NAMI (6264)",
        description: "Mental health support and resources",
    },
];

const CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Mindfulness Apps",
        &[
            ("Headspace", "Guided meditation and mindfulness"),
            ("Calm", "Sleep stories, meditation, and relaxation"),
            ("Ten Percent Happier", "Practical meditation courses"),
        ],
    ),
    (
        "Books & Articles",
        &[
            (
                "The Mindful Way Through Depression",
                "By Williams, Teasdale, Segal, and Kabat-Zinn",
            ),
            ("Wherever You Go, There You Are", "By Jon Kabat-Zinn"),
            ("The Happiness Trap", "By Russ Harris"),
        ],
    ),
    (
        "Professional Help",
        &[
            ("Psychology Today", "Find therapists and counselors near you"),
            ("BetterHelp", "Online therapy and counseling"),
            (
                "Your Healthcare Provider",
                "Speak with your doctor about mental health",
            ),
        ],
    ),
];

const DISCLAIMER: &str = "This app provides wellness support but is not a substitute for \
    professional mental health care. If you're experiencing a mental health crisis, please \
    contact emergency services or use the crisis resources above.";

/// Persistent scroll offset lives in TuiState; the view is rebuilt each frame.
pub struct ResourcesView<'a> {
    scroll: &'a mut u16,
}

impl<'a> ResourcesView<'a> {
    pub fn new(scroll: &'a mut u16) -> Self {
        Self { scroll }
    }

    fn lines() -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            "Crisis Support — Available 24/7",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))];

        for line in CRISIS_LINES {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}  ", line.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(line.contact, Style::default().fg(Color::Red)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("      {}", line.description),
                Style::default().fg(Color::DarkGray),
            )));
        }

        for (title, items) in CATEGORIES {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
            for (name, description) in *items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}  ", name), Style::default()),
                    Span::styled(*description, Style::default().fg(Color::DarkGray)),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Important Notice",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            DISCLAIMER,
            Style::default().fg(Color::Yellow),
        )));
        lines
    }

    /// Upper bound for the scroll offset given the rendered line count.
    fn max_scroll(viewport_height: u16) -> u16 {
        (Self::lines().len() as u16).saturating_sub(viewport_height.saturating_sub(2))
    }
}

impl<'a> Component for ResourcesView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        *self.scroll = (*self.scroll).min(Self::max_scroll(area.height));

        let paragraph = Paragraph::new(Self::lines())
            .wrap(Wrap { trim: false })
            .scroll((*self.scroll, 0))
            .block(
                Block::bordered()
                    .title(" Wellness Resources ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(paragraph, area);
    }
}

impl<'a> EventHandler for ResourcesView<'a> {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => {
                *self.scroll = self.scroll.saturating_sub(1);
            }
            TuiEvent::ScrollDown | TuiEvent::CursorDown => {
                // Clamped against content on the next render
                *self.scroll = self.scroll.saturating_add(1);
            }
            TuiEvent::ScrollPageUp => *self.scroll = self.scroll.saturating_sub(10),
            TuiEvent::ScrollPageDown => *self.scroll = self.scroll.saturating_add(10),
            _ => return None,
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(scroll: &mut u16) -> String {
        let backend = TestBackend::new(90, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ResourcesView::new(scroll).render(f, f.area()))
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
    fn test_lists_crisis_lines_first() {
        let mut scroll = 0;
        let text = render_to_text(&mut scroll);
        assert!(text.contains("Crisis Support"));
        assert!(text.contains("988"));
        assert!(text.contains("Text HOME to 741741"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut scroll = 500;
        render_to_text(&mut scroll);
        assert!(scroll < 30, "render clamps a runaway offset");
    }

    #[test]
    fn test_scroll_events() {
        let mut scroll = 5;
        let mut view = ResourcesView::new(&mut scroll);
        view.handle_event(&TuiEvent::ScrollUp);
        view.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(*view.scroll, 3);

        let consumed = view.handle_event(&TuiEvent::InputChar('q'));
        assert_eq!(consumed, None);
    }
}

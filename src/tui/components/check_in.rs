//! # Daily Check-In Form
//!
//! Collects a mood from the five-point scale, an energy level (1-10,
//! default 5) and optional free-text notes. Submission is gated on a mood
//! being selected; without one, Enter does nothing and the hint line says
//! so. Once the parent records the check-in, the form renders the
//! thank-you view for the rest of the session.
//!
//! ## Keys
//!
//! - Up/Down move focus between the mood row, the energy slider and notes
//! - Left/Right move the mood highlight or adjust energy
//! - Space selects the highlighted mood
//! - Typing goes into notes while they are focused
//! - Enter submits (once a mood is selected)

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::mood::Mood;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckInEvent {
    Submit {
        mood: Mood,
        energy: u8,
        notes: String,
    },
}

/// Which part of the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    MoodRow,
    Energy,
    Notes,
}

pub struct CheckInForm {
    /// Synced from `App.checkin_recorded` each frame (prop)
    pub recorded: bool,
    cursor: usize,
    selected: Option<usize>,
    energy: u8,
    notes: String,
    focus: Field,
}

impl Default for CheckInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckInForm {
    pub fn new() -> Self {
        Self {
            recorded: false,
            cursor: 0,
            selected: None,
            energy: 5,
            notes: String::new(),
            focus: Field::MoodRow,
        }
    }

    pub fn selected_mood(&self) -> Option<Mood> {
        self.selected.map(|i| Mood::SCALE[i])
    }

    /// True while typed characters belong to the notes field, so the
    /// caller must not give them a global meaning.
    pub fn captures_text(&self) -> bool {
        !self.recorded && self.focus == Field::Notes
    }

    fn focus_up(&mut self) {
        self.focus = match self.focus {
            Field::MoodRow => Field::Notes,
            Field::Energy => Field::MoodRow,
            Field::Notes => Field::Energy,
        };
    }

    fn focus_down(&mut self) {
        self.focus = match self.focus {
            Field::MoodRow => Field::Energy,
            Field::Energy => Field::Notes,
            Field::Notes => Field::MoodRow,
        };
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let [date_area, _, prompt_area, mood_area, _, energy_area, notes_area, hint_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .areas(area);

        let date = Local::now().format("%A, %B %-d, %Y").to_string();
        frame.render_widget(
            Span::styled(format!(" Daily Check-In — {date}"), Style::default().fg(Color::Gray)),
            date_area,
        );

        frame.render_widget(
            Span::styled(
                " How are you feeling today?",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            prompt_area,
        );

        // Mood row: five bordered cells
        let cells =
            Layout::horizontal([Constraint::Ratio(1, 5); 5]).areas::<5>(mood_area);
        for (i, (mood, cell)) in Mood::SCALE.iter().zip(cells).enumerate() {
            let is_selected = self.selected == Some(i);
            let is_cursor = self.focus == Field::MoodRow && self.cursor == i;

            let style = if is_selected {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if is_cursor {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let border_style = if is_cursor {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let label = Paragraph::new(Span::styled(mood.label(), style))
                .centered()
                .block(Block::bordered().border_style(border_style));
            frame.render_widget(label, cell);
        }

        // Energy slider
        let filled = "▮".repeat(self.energy as usize);
        let empty = "▯".repeat(10 - self.energy as usize);
        let energy_style = if self.focus == Field::Energy {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Line::from(vec![
                Span::raw(" Energy   Low "),
                Span::styled(filled, energy_style),
                Span::styled(empty, Style::default().fg(Color::DarkGray)),
                Span::raw(format!(" High   {}/10", self.energy)),
            ]),
            energy_area,
        );

        // Notes
        let notes_style = if self.focus == Field::Notes {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let notes_text = if self.notes.is_empty() && self.focus != Field::Notes {
            Span::styled(
                "Share any thoughts, goals, or concerns for today...",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(self.notes.as_str())
        };
        frame.render_widget(
            Paragraph::new(notes_text)
                .wrap(Wrap { trim: false })
                .block(
                    Block::bordered()
                        .title("What's on your mind? (Optional)")
                        .border_style(notes_style),
                ),
            notes_area,
        );

        let hint = if self.selected.is_some() {
            Span::styled(
                " Enter Complete Check-In",
                Style::default().fg(Color::Green),
            )
        } else {
            Span::styled(
                " Select a mood to complete your check-in",
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(hint, hint_area);
    }

    fn render_thank_you(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Thank You!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Your daily check-in has been recorded."),
            Line::from("Remember, every day is a new opportunity for wellness."),
            Line::from(""),
            Line::from(Span::styled(
                "See the Insights tab for your mood history.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), area);
    }
}

impl Component for CheckInForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.recorded {
            self.render_thank_you(frame, area);
        } else {
            self.render_form(frame, area);
        }
    }
}

impl EventHandler for CheckInForm {
    type Event = CheckInEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.recorded {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.focus_up();
                None
            }
            TuiEvent::CursorDown => {
                self.focus_down();
                None
            }
            TuiEvent::CursorLeft => {
                match self.focus {
                    Field::MoodRow => self.cursor = self.cursor.saturating_sub(1),
                    Field::Energy => self.energy = (self.energy - 1).max(1),
                    Field::Notes => {}
                }
                None
            }
            TuiEvent::CursorRight => {
                match self.focus {
                    Field::MoodRow => {
                        self.cursor = (self.cursor + 1).min(Mood::SCALE.len() - 1);
                    }
                    Field::Energy => self.energy = (self.energy + 1).min(10),
                    Field::Notes => {}
                }
                None
            }
            TuiEvent::InputChar(' ') if self.focus == Field::MoodRow => {
                self.selected = Some(self.cursor);
                None
            }
            TuiEvent::InputChar(c) if self.focus == Field::Notes => {
                self.notes.push(*c);
                None
            }
            TuiEvent::Paste(text) if self.focus == Field::Notes => {
                self.notes.push_str(text);
                None
            }
            TuiEvent::Backspace if self.focus == Field::Notes => {
                self.notes.pop();
                None
            }
            TuiEvent::Submit => {
                // No mood, no transition: the form stays editable
                let mood = self.selected_mood()?;
                Some(CheckInEvent::Submit {
                    mood,
                    energy: self.energy,
                    notes: self.notes.clone(),
                })
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

    fn render_to_text(form: &mut CheckInForm) -> String {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| form.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_defaults() {
        let form = CheckInForm::new();
        assert_eq!(form.selected_mood(), None);
        assert_eq!(form.energy, 5);
        assert!(form.notes.is_empty());
    }

    #[test]
    fn test_submit_without_mood_emits_nothing() {
        let mut form = CheckInForm::new();
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_select_mood_and_submit_defaults() {
        let mut form = CheckInForm::new();
        // Move to "good" and select it
        form.handle_event(&TuiEvent::CursorRight);
        form.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(form.selected_mood(), Some(Mood::Good));

        let event = form.handle_event(&TuiEvent::Submit);
        assert_eq!(
            event,
            Some(CheckInEvent::Submit {
                mood: Mood::Good,
                energy: 5,
                notes: String::new(),
            })
        );
    }

    #[test]
    fn test_energy_clamps_to_range() {
        let mut form = CheckInForm::new();
        form.handle_event(&TuiEvent::CursorDown); // focus energy
        for _ in 0..20 {
            form.handle_event(&TuiEvent::CursorRight);
        }
        assert_eq!(form.energy, 10);
        for _ in 0..20 {
            form.handle_event(&TuiEvent::CursorLeft);
        }
        assert_eq!(form.energy, 1);
    }

    #[test]
    fn test_notes_capture_text_only_when_focused() {
        let mut form = CheckInForm::new();
        assert_eq!(form.handle_event(&TuiEvent::InputChar('x')), None);
        assert!(form.notes.is_empty(), "chars ignored while mood row focused");

        assert!(!form.captures_text());
        form.handle_event(&TuiEvent::CursorUp); // MoodRow -> Notes
        assert!(form.captures_text());
        form.handle_event(&TuiEvent::InputChar('h'));
        form.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(form.notes, "hi");

        form.handle_event(&TuiEvent::Backspace);
        assert_eq!(form.notes, "h");
    }

    #[test]
    fn test_mood_cursor_stays_in_bounds() {
        let mut form = CheckInForm::new();
        for _ in 0..10 {
            form.handle_event(&TuiEvent::CursorRight);
        }
        form.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(form.selected_mood(), Some(Mood::Struggling));

        for _ in 0..10 {
            form.handle_event(&TuiEvent::CursorLeft);
        }
        form.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(form.selected_mood(), Some(Mood::Excellent));
    }

    #[test]
    fn test_recorded_form_is_inert_and_thanks() {
        let mut form = CheckInForm::new();
        form.recorded = true;
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);

        let text = render_to_text(&mut form);
        assert!(text.contains("Thank You!"));
    }

    #[test]
    fn test_form_renders_prompt_and_scale() {
        let mut form = CheckInForm::new();
        let text = render_to_text(&mut form);
        assert!(text.contains("How are you feeling today?"));
        for mood in Mood::SCALE {
            assert!(text.contains(mood.label()));
        }
        assert!(text.contains("5/10"));
    }
}

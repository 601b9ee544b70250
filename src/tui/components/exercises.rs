//! # Mindfulness Exercises
//!
//! Two views over the same tab: the catalog list when no session is
//! active, and the player (countdown, progress gauge, instructions) once
//! an exercise has been started.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ExerciseListState` lives in `TuiState`
//! - `ExerciseCatalog` / `ExercisePlayer` are created each frame with
//!   borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, List, ListItem, ListState, Padding, Paragraph};

use crate::core::exercise::{Exercise, ExerciseTimer, TimerPhase, format_duration};
use crate::tui::component::Component;

/// Selection state for the catalog list.
pub struct ExerciseListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for ExerciseListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseListState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.list_state.select(Some(self.selected));
    }

    pub fn down(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Transient render wrapper for the catalog list.
pub struct ExerciseCatalog<'a> {
    state: &'a mut ExerciseListState,
    exercises: &'a [Exercise],
}

impl<'a> ExerciseCatalog<'a> {
    pub fn new(state: &'a mut ExerciseListState, exercises: &'a [Exercise]) -> Self {
        Self { state, exercises }
    }
}

impl<'a> Component for ExerciseCatalog<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Mindfulness Exercises ")
            .title_bottom(Line::from(" ↑↓ Choose  Enter Start ").centered())
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| {
                let selected = i == self.state.selected;
                let title_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let minutes = exercise.duration_secs.div_ceil(60);
                let meta = format!(
                    "  {} · {} minutes — {}",
                    exercise.category.label(),
                    minutes,
                    exercise.description
                );
                ListItem::new(vec![
                    Line::from(Span::styled(exercise.title.clone(), title_style)),
                    Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))),
                ])
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Transient render wrapper for an active session.
pub struct ExercisePlayer<'a> {
    exercise: &'a Exercise,
    timer: &'a ExerciseTimer,
}

impl<'a> ExercisePlayer<'a> {
    pub fn new(exercise: &'a Exercise, timer: &'a ExerciseTimer) -> Self {
        Self { exercise, timer }
    }

    fn phase_line(&self) -> Span<'static> {
        match self.timer.phase {
            TimerPhase::Running => Span::styled("in session", Style::default().fg(Color::Green)),
            TimerPhase::Paused => Span::styled("paused", Style::default().fg(Color::Yellow)),
            TimerPhase::Finished => Span::styled(
                "complete — well done",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            TimerPhase::Idle => Span::raw(""),
        }
    }
}

impl<'a> Component for ExercisePlayer<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let instructions_height = self.exercise.instructions.len() as u16 + 2;
        let [header_area, timer_area, gauge_area, _, instructions_area, hint_area] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(instructions_height),
                Constraint::Length(1),
            ])
            .areas(area);

        let header = vec![
            Line::from(Span::styled(
                self.exercise.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.exercise.description.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), header_area);

        let timer = vec![
            Line::from(Span::styled(
                format_duration(self.timer.remaining),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(self.phase_line()),
        ];
        frame.render_widget(Paragraph::new(timer).alignment(Alignment::Center), timer_area);

        let gauge = Gauge::default()
            .ratio(self.timer.progress())
            .gauge_style(Style::default().fg(Color::Cyan))
            .use_unicode(true)
            .label("");
        frame.render_widget(gauge, gauge_area);

        let steps: Vec<Line> = self
            .exercise
            .instructions
            .iter()
            .enumerate()
            .map(|(i, step)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(step.clone()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(steps).block(Block::bordered().title("Instructions")),
            instructions_area,
        );

        frame.render_widget(
            Span::styled(
                " Space Pause/Resume  r Restart  Esc Back to exercises",
                Style::default().fg(Color::DarkGray),
            ),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exercise::builtin_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_list_navigation_clamps() {
        let mut state = ExerciseListState::new();
        state.up();
        assert_eq!(state.selected, 0);

        state.down(4);
        state.down(4);
        state.down(4);
        state.down(4);
        assert_eq!(state.selected, 3, "stops at the last entry");
    }

    #[test]
    fn test_catalog_lists_every_exercise() {
        let catalog = builtin_catalog();
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ExerciseListState::new();

        terminal
            .draw(|f| ExerciseCatalog::new(&mut state, &catalog).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("4-7-8 Breathing"));
        assert!(text.contains("Body Scan Meditation"));
        assert!(text.contains("Loving Kindness Meditation"));
        assert!(text.contains("Box Breathing"));
        assert!(text.contains("4 minutes"));
    }

    #[test]
    fn test_player_shows_countdown_and_steps() {
        let catalog = builtin_catalog();
        let mut timer = ExerciseTimer::default();
        timer.start(0, catalog[0].duration_secs);
        timer.tick();

        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ExercisePlayer::new(&catalog[0], &timer).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("3:59"));
        assert!(text.contains("Inhale through your nose for 4 counts"));
        assert!(text.contains("Space Pause/Resume"));
    }

    #[test]
    fn test_player_finished_state() {
        let catalog = builtin_catalog();
        let mut timer = ExerciseTimer::default();
        timer.start(0, 1);
        timer.tick();

        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ExercisePlayer::new(&catalog[0], &timer).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("0:00"));
        assert!(text.contains("complete"));
    }
}

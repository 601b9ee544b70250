//! # Mood Insights View
//!
//! Read-only summary over the mood history: trend, average energy, days
//! tracked, and the most recent entries. All numbers come from
//! `core::insights`; this component only formats them.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::insights::{Trend, average_energy, mood_trend};
use crate::core::mood::MoodEntry;
use crate::tui::component::Component;

/// How many history rows the listing shows, newest first.
const RECENT_ROWS: usize = 7;

pub struct InsightsView<'a> {
    history: &'a [MoodEntry],
}

impl<'a> InsightsView<'a> {
    pub fn new(history: &'a [MoodEntry]) -> Self {
        Self { history }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No mood data yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Complete a daily check-in to see insights here",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), area);
    }

    fn summary_card(title: &str, value: String, style: Style) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(value, style.add_modifier(Modifier::BOLD))),
        ])
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
    }

    fn trend_style(trend: Trend) -> Style {
        match trend {
            Trend::Improving => Style::default().fg(Color::Green),
            Trend::Declining => Style::default().fg(Color::Red),
            Trend::Stable => Style::default().fg(Color::Blue),
        }
    }
}

impl<'a> Component for InsightsView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.history.is_empty() {
            self.render_empty(frame, area);
            return;
        }

        let [cards_area, _, list_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let [trend_area, energy_area, days_area] =
            Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(cards_area);

        let trend = mood_trend(self.history);
        frame.render_widget(
            Self::summary_card(
                "Trend",
                format!("{} {}", trend.glyph(), trend.label()),
                Self::trend_style(trend),
            ),
            trend_area,
        );
        frame.render_widget(
            Self::summary_card(
                "Avg Energy",
                format!("{:.1}/10", average_energy(self.history)),
                Style::default().fg(Color::Yellow),
            ),
            energy_area,
        );
        frame.render_widget(
            Self::summary_card(
                "Days Tracked",
                self.history.len().to_string(),
                Style::default().fg(Color::Cyan),
            ),
            days_area,
        );

        // Most recent entries, newest first
        let rows: Vec<Line> = self
            .history
            .iter()
            .rev()
            .take(RECENT_ROWS)
            .map(|entry| {
                let bar: String = (0..10)
                    .map(|i| if i < entry.energy { '▮' } else { '▯' })
                    .collect();
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", entry.mood.glyph()),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::styled(
                        format!("{:<12}", entry.mood.label()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        entry.date.format("%Y-%m-%d  ").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("Energy "),
                    Span::styled(bar, Style::default().fg(Color::Yellow)),
                    Span::raw(format!(" {}", entry.energy)),
                ])
            })
            .collect();

        frame.render_widget(
            Paragraph::new(rows).block(Block::bordered().title("Recent Mood History")),
            list_area,
        );
    }
}

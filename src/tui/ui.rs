//! Top-level frame layout: tab bar on the first row, the active view in
//! the remaining space, and (on the chat tab only) the input box pinned to
//! the bottom.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Tab};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ChatView, ExerciseCatalog, ExercisePlayer, InsightsView, ResourcesView, TabBar,
};

/// Rows used by the chat input box (content + borders).
pub const INPUT_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let [bar_area, rest] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TabBar::new(
        app.active_tab,
        app.status_message.clone(),
        app.current_mood,
    )
    .render(frame, bar_area);

    match app.active_tab {
        Tab::Chat => {
            let [main_area, input_area] =
                Layout::vertical([Min(0), Length(INPUT_HEIGHT)]).areas(rest);
            ChatView::new(&mut tui.chat, &app.transcript, app.is_replying, spinner_frame)
                .render(frame, main_area);
            tui.input_box.render(frame, input_area);
        }
        Tab::CheckIn => {
            tui.check_in.render(frame, pad(rest));
        }
        Tab::Exercises => {
            if let Some(exercise) = app.selected_exercise() {
                ExercisePlayer::new(exercise, &app.timer).render(frame, pad(rest));
            } else {
                ExerciseCatalog::new(&mut tui.exercises, &app.catalog).render(frame, rest);
            }
        }
        Tab::Insights => {
            InsightsView::new(&app.mood_history).render(frame, pad(rest));
        }
        Tab::Resources => {
            ResourcesView::new(&mut tui.resources_scroll).render(frame, rest);
        }
    }
}

/// One-row breathing room under the tab bar for views without borders of
/// their own.
fn pad(area: Rect) -> Rect {
    Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may hold internal
/// state, and render into a `Frame` within a given `Rect`. Transient
/// components are rebuilt each frame around borrowed persistent state;
/// the persistent half lives in `TuiState`.
///
/// `render` takes `&mut self` so components can update internal caches
/// (layout measurements, scroll offsets) during the render pass, matching
/// Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level
    /// event. Returning `None` means the event was not consumed and the
    /// caller may give it a global meaning (e.g. digit tab switching).
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Layout**: Place component widgets into a [`Frame`]
//!
//! The plugin shim draws the frame; nothing here touches the terminal.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::frame::Frame;

/// Lays out the plugin UI for a pane of `rows` x `cols`.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> Frame {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::layout(&viewmodel, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn landing_frame_prompts_for_search() {
        let state = AppState::new(&Config::default());
        let frame = render(&state, 24, 80);

        assert_eq!(frame.line(0), "BOOKWorld");
        assert!(frame.contains("Search the catalog"));
        assert!(frame.table().is_none());
    }
}

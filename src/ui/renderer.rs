//! Top-level rendering coordinator.
//!
//! Two steps per frame: compute the view model from [`AppState`], then hand
//! it to the components. Nothing here reads the list model directly.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Called by Zellij after `update` returned `true`, and on pane resize.
/// Output is ANSI text positioned with absolute cursor moves.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols, items = state.list.len()).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_list_mode(&viewmodel, &state.theme, cols, rows);
}

//! Baut die read-only RenderScene aus dem AppState.

use super::AppState;
use crate::shared::RenderScene;

/// Erstellt den Frame-Schnappschuss für den Renderer.
///
/// Die Leinwand wird als Arc-Klon übergeben (O(1)); Optionen werden
/// kopiert, damit der Renderer nie auf mutierenden State zeigt.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        sketch: state.sketch.clone(),
        pen: state.pen,
        options: state.options.clone(),
    }
}

//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::SketchOptions;
use crate::core::{Pen, Sketch};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Schnappschuss der Leinwand (Arc für O(1)-Clone pro Frame)
    pub sketch: Arc<Sketch>,
    /// Stift-Zustand (Position + Blickrichtung) für den Cursor
    pub pen: Pen,
    /// Laufzeit-Optionen für Farben und Strichstärken
    pub options: SketchOptions,
}

impl RenderScene {
    /// Gibt die Anzahl der zu zeichnenden Segmente zurück.
    pub fn segment_count(&self) -> usize {
        self.sketch.segment_count()
    }
}

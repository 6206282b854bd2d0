//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Pen, Sketch};
use crate::shared::SketchOptions;
use std::sync::Arc;

/// Hauptzustand der Anwendung.
///
/// UI-Framework-unabhängig; Mutationen laufen ausschließlich über den
/// [`super::AppController`], der Renderer sieht nur Schnappschüsse.
pub struct AppState {
    /// Alle gezeichneten Segmente (Arc für O(1)-Clone in RenderScene)
    pub sketch: Arc<Sketch>,
    /// Stift: Position und Blickrichtung
    pub pen: Pen,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Strichstärken)
    pub options: SketchOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State: leere Leinwand, Stift am Ursprung.
    pub fn new() -> Self {
        Self {
            sketch: Arc::new(Sketch::new()),
            pen: Pen::at_origin(),
            command_log: CommandLog::new(),
            options: SketchOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt eine mutable Referenz auf die Leinwand zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Leinwand gehen über diese Methode, damit der
    /// Arc-Klon in `render_scene::build()` O(1) bleibt.
    #[inline]
    pub fn sketch_mut(&mut self) -> &mut Sketch {
        Arc::make_mut(&mut self.sketch)
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige).
    pub fn segment_count(&self) -> usize {
        self.sketch.segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

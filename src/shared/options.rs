//! Zentrale Konfiguration für das Turtle-Sketchpad.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren kosmetischen
//! Werte. Die `const`-Werte bleiben als Fallback/Default erhalten;
//! Schrittweite und Ursprung sind bewusst keine Optionen, sondern
//! feste Konstanten des Befehlsmodells.

use serde::{Deserialize, Serialize};

// ── Stift-Bewegung ──────────────────────────────────────────────────

/// Feste Distanz pro Forward/Backward-Befehl (Leinwand-Einheiten).
pub const STEP_SIZE: f32 = 20.0;

// ── Leinwand ────────────────────────────────────────────────────────

/// Maximale Höhe des Leinwand-Bereichs in Pixeln.
pub const CANVAS_MAX_HEIGHT: f32 = 400.0;
/// Hintergrundfarbe der Leinwand (RGBA: helles Grau).
pub const CANVAS_BACKGROUND: [f32; 4] = [0.95, 0.95, 0.96, 1.0];
/// Rahmenfarbe der Leinwand (RGBA: Schwarz).
pub const CANVAS_BORDER_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Strich-Rendering ────────────────────────────────────────────────

/// Linienstärke gezeichneter Segmente in Pixeln.
pub const STROKE_WIDTH: f32 = 2.0;
/// Strichfarbe (RGBA: Blau).
pub const STROKE_COLOR: [f32; 4] = [0.0, 0.48, 1.0, 1.0];

// ── Stift-Cursor ────────────────────────────────────────────────────

/// Kantenlänge des Stift-Cursor-Dreiecks in Pixeln.
pub const PEN_CURSOR_SIZE: f32 = 7.0;
/// Füllfarbe des Stift-Cursors (RGBA: Orange).
pub const PEN_CURSOR_COLOR: [f32; 4] = [1.0, 0.55, 0.1, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Sketchpad-Optionen.
/// Wird als `turtle_sketchpad.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchOptions {
    // ── Strich ──────────────────────────────────────────────────
    /// Linienstärke gezeichneter Segmente in Pixeln
    pub stroke_width: f32,
    /// Strichfarbe (RGBA)
    pub stroke_color: [f32; 4],

    // ── Leinwand ────────────────────────────────────────────────
    /// Hintergrundfarbe der Leinwand
    pub canvas_background: [f32; 4],
    /// Rahmenfarbe der Leinwand
    pub canvas_border_color: [f32; 4],

    // ── Stift-Cursor ────────────────────────────────────────────
    /// Stift-Cursor im Viewport anzeigen
    #[serde(default = "default_show_pen_cursor")]
    pub show_pen_cursor: bool,
    /// Kantenlänge des Cursor-Dreiecks in Pixeln
    #[serde(default = "default_pen_cursor_size")]
    pub pen_cursor_size: f32,
    /// Füllfarbe des Stift-Cursors
    #[serde(default = "default_pen_cursor_color")]
    pub pen_cursor_color: [f32; 4],
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            stroke_width: STROKE_WIDTH,
            stroke_color: STROKE_COLOR,

            canvas_background: CANVAS_BACKGROUND,
            canvas_border_color: CANVAS_BORDER_COLOR,

            show_pen_cursor: true,
            pen_cursor_size: PEN_CURSOR_SIZE,
            pen_cursor_color: PEN_CURSOR_COLOR,
        }
    }
}

/// Serde-Default für `show_pen_cursor` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_pen_cursor() -> bool {
    true
}

/// Serde-Default für `pen_cursor_size`.
fn default_pen_cursor_size() -> f32 {
    PEN_CURSOR_SIZE
}

/// Serde-Default für `pen_cursor_color`.
fn default_pen_cursor_color() -> [f32; 4] {
    PEN_CURSOR_COLOR
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("turtle_sketchpad"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("turtle_sketchpad.toml")
    }
}

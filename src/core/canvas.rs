//! Leinwand-Datenmodell: Segmente in Zeichenreihenfolge.

use glam::Vec2;

/// Ein gezeichnetes Liniensegment.
///
/// Wird bei jedem Forward/Backward-Befehl erzeugt und danach nie mehr
/// verändert; entfernt wird nur pauschal über [`Sketch::clear`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startpunkt (Stiftposition vor dem Befehl)
    pub start: Vec2,
    /// Endpunkt (Stiftposition nach dem Befehl)
    pub end: Vec2,
}

impl Segment {
    /// Erstellt ein Segment zwischen zwei Punkten.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Geordnete Folge aller gezeichneten Segmente.
///
/// Append-only; Einfügereihenfolge ist Zeichenreihenfolge. Schrumpft
/// ausschließlich auf null über [`Sketch::clear`].
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    segments: Vec<Segment>,
}

impl Sketch {
    /// Erstellt eine leere Leinwand.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Hängt ein Segment an.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Entfernt alle Segmente.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Read-only Sicht auf alle Segmente in Zeichenreihenfolge.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Gibt die Anzahl der Segmente zurück (für UI-Anzeige).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Gibt `true` zurück, wenn noch nichts gezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Zuletzt gezeichnetes Segment, falls vorhanden.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

//! Stift und Blickrichtung.
//!
//! Bildschirm-Koordinatensystem: y wächst nach unten. `Up` verringert
//! daher die y-Koordinate — diese Zuordnung ist fester Vertrag, damit
//! Zeichnungen visuell identisch bleiben.

use glam::Vec2;

/// Blickrichtung des Stifts (geschlossene Menge aus vier Kardinalrichtungen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// y-Koordinate verringern
    #[default]
    Up,
    /// y-Koordinate erhöhen
    Down,
    /// x-Koordinate verringern
    Left,
    /// x-Koordinate erhöhen
    Right,
}

impl Direction {
    /// Verschiebt einen Punkt um `step` entlang der Achse dieser Richtung.
    ///
    /// Pure Funktion ohne Seiteneffekte; negatives `step` bewegt entgegen
    /// der Blickrichtung. Alle vier Fälle sind vollständig behandelt,
    /// es gibt keine Fehlerbedingungen.
    pub fn step(self, from: Vec2, step: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(from.x, from.y - step),
            Direction::Down => Vec2::new(from.x, from.y + step),
            Direction::Left => Vec2::new(from.x - step, from.y),
            Direction::Right => Vec2::new(from.x + step, from.y),
        }
    }

    /// Einheitsvektor der Richtung (Bildschirmkonvention, y nach unten).
    pub fn unit(self) -> Vec2 {
        self.step(Vec2::ZERO, 1.0)
    }

    /// Anzeigename für Status-Bar und Logs.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// Stift-Zustand: Position und Blickrichtung.
///
/// Invariante: `position` entspricht immer dem `end` des zuletzt
/// angehängten Segments, bis ein Clear auf [`Pen::ORIGIN`] zurücksetzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Aktuelle Position auf der Leinwand
    pub position: Vec2,
    /// Aktuelle Blickrichtung
    pub facing: Direction,
}

impl Pen {
    /// Startposition des Stifts (und Rücksetzpunkt bei Clear).
    pub const ORIGIN: Vec2 = Vec2::new(200.0, 200.0);

    /// Erstellt den Stift im Startzustand: Ursprung, Blickrichtung `Up`.
    pub fn at_origin() -> Self {
        Self {
            position: Self::ORIGIN,
            facing: Direction::Up,
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::at_origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_up_decreases_y() {
        let p = Direction::Up.step(Vec2::new(200.0, 200.0), 20.0);
        assert_eq!(p, Vec2::new(200.0, 180.0));
    }

    #[test]
    fn step_down_increases_y() {
        let p = Direction::Down.step(Vec2::new(200.0, 200.0), 20.0);
        assert_eq!(p, Vec2::new(200.0, 220.0));
    }

    #[test]
    fn step_left_decreases_x_and_right_increases_x() {
        let from = Vec2::new(100.0, 50.0);
        assert_eq!(Direction::Left.step(from, 20.0), Vec2::new(80.0, 50.0));
        assert_eq!(Direction::Right.step(from, 20.0), Vec2::new(120.0, 50.0));
    }

    #[test]
    fn negative_step_moves_opposite_to_facing() {
        let from = Vec2::new(200.0, 200.0);
        assert_eq!(Direction::Up.step(from, -20.0), Vec2::new(200.0, 220.0));
    }

    #[test]
    fn step_does_not_mutate_input() {
        let from = Vec2::new(1.0, 2.0);
        let _ = Direction::Right.step(from, 5.0);
        assert_eq!(from, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn pen_starts_at_origin_facing_up() {
        let pen = Pen::at_origin();
        assert_eq!(pen.position, Vec2::new(200.0, 200.0));
        assert_eq!(pen.facing, Direction::Up);
    }
}

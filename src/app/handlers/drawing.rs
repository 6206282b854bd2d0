//! Handler für die Zeichenbefehle des Stifts.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Direction;

/// Zeichnet ein Segment in Blickrichtung und rückt den Stift vor.
pub fn forward(state: &mut AppState) {
    use_cases::drawing::forward(state);
}

/// Zeichnet ein Segment entgegen der Blickrichtung.
pub fn backward(state: &mut AppState) {
    use_cases::drawing::backward(state);
}

/// Setzt die Blickrichtung des Stifts.
pub fn face(state: &mut AppState, direction: Direction) {
    use_cases::drawing::face(state, direction);
}

/// Leert die Leinwand und setzt den Stift zurück.
pub fn clear(state: &mut AppState) {
    use_cases::drawing::clear(state);
}

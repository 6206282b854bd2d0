//! Use-Case-Funktionen für die Zeichenbefehle.
//!
//! Hier leben die eigentlichen Zustandsübergänge: jeder Befehl ist total
//! über jeden erreichbaren Zustand, kein Befehl wird je zurückgewiesen.

use crate::app::AppState;
use crate::core::{Direction, Pen, Segment};
use crate::shared::options::STEP_SIZE;

/// Zeichnet ein Segment in Blickrichtung und rückt den Stift auf dessen
/// Endpunkt vor.
pub fn forward(state: &mut AppState) {
    stroke(state, STEP_SIZE);
}

/// Zeichnet ein Segment entgegen der Blickrichtung (negative Schrittweite).
pub fn backward(state: &mut AppState) {
    stroke(state, -STEP_SIZE);
}

/// Setzt die Blickrichtung.
/// Reine Zuweisung: Position und Segmente bleiben unberührt.
pub fn face(state: &mut AppState, direction: Direction) {
    state.pen.facing = direction;
}

/// Leert die Leinwand und setzt den Stift auf Ursprung und `Up` zurück.
pub fn clear(state: &mut AppState) {
    state.sketch_mut().clear();
    state.pen = Pen::at_origin();
    log::debug!("Leinwand geleert, Stift zurückgesetzt");
}

/// Gemeinsamer Kern von Forward/Backward: Segment von der aktuellen
/// Position zum Zielpunkt anhängen, dann Stift nachziehen. Hält die
/// Invariante `pen.position == letztes Segment-Ende` per Konstruktion.
fn stroke(state: &mut AppState, step: f32) {
    let start = state.pen.position;
    let end = state.pen.facing.step(start, step);
    state.sketch_mut().push(Segment::new(start, end));
    state.pen.position = end;
}

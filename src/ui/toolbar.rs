//! Command-Bar mit den sieben Stift-Buttons.

use crate::app::{AppIntent, AppState};
use crate::core::Direction;

/// Rendert die Button-Leiste und gibt erzeugte Events zurück.
///
/// Jeder Button ist ein zustandsloser Trigger mit dem Ein-Buchstaben-
/// Mnemonik des Befehls; der Button der aktiven Blickrichtung wird
/// hervorgehoben.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("command_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button("F")
                .on_hover_text("Forward: Segment in Blickrichtung zeichnen")
                .clicked()
            {
                events.push(AppIntent::ForwardRequested);
            }

            if ui
                .button("B")
                .on_hover_text("Backward: Segment entgegen der Blickrichtung zeichnen")
                .clicked()
            {
                events.push(AppIntent::BackwardRequested);
            }

            ui.separator();

            let facing = state.pen.facing;
            let face_buttons = [
                ("L", Direction::Left, "Blickrichtung: links"),
                ("R", Direction::Right, "Blickrichtung: rechts"),
                ("U", Direction::Up, "Blickrichtung: oben"),
                ("D", Direction::Down, "Blickrichtung: unten"),
            ];
            for (label, direction, hint) in face_buttons {
                let btn = egui::Button::new(label).selected(facing == direction);
                if ui.add(btn).on_hover_text(hint).clicked() {
                    events.push(AppIntent::FaceRequested { direction });
                }
            }

            ui.separator();

            if ui
                .button("C")
                .on_hover_text("Clear: Leinwand leeren, Stift zurücksetzen")
                .clicked()
            {
                events.push(AppIntent::ClearRequested);
            }
        });
    });

    events
}

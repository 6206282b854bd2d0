//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Segmente: {}", state.segment_count()));

            ui.separator();

            ui.label(format!(
                "Stift: ({:.0}, {:.0})",
                state.pen.position.x, state.pen.position.y
            ));

            ui.separator();

            ui.label(format!("Richtung: {}", state.pen.facing.label()));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

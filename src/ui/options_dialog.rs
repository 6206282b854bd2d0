//! Optionen-Dialog für Farben und Strichstärken.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Strich ──────────────────────────────────────
            ui.collapsing("Strich", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Linienstärke (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.stroke_width)
                                .range(0.5..=10.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Strichfarbe:", &mut opts.stroke_color);
            });

            // ── Leinwand ────────────────────────────────────
            ui.collapsing("Leinwand", |ui| {
                changed |= color_edit(ui, "Hintergrund:", &mut opts.canvas_background);
                changed |= color_edit(ui, "Rahmen:", &mut opts.canvas_border_color);
            });

            // ── Stift-Cursor ────────────────────────────────
            ui.collapsing("Stift-Cursor", |ui| {
                changed |= ui
                    .checkbox(&mut opts.show_pen_cursor, "Cursor anzeigen")
                    .changed();
                ui.horizontal(|ui| {
                    ui.label("Größe (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.pen_cursor_size)
                                .range(3.0..=20.0)
                                .speed(0.5),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Farbe:", &mut opts.pen_cursor_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}

//! Painter-Renderer: deterministische Projektion der RenderScene.
//!
//! Zeichnet Leinwand-Hintergrund, Rahmen, Segmente und Stift-Cursor mit
//! dem egui-Painter. Der Renderer hält keinen eigenen Zustand und
//! validiert nichts; Weltkoordinaten werden 1:1 auf die linke obere
//! Ecke des Leinwand-Rechtecks abgebildet (y nach unten).

use crate::core::Pen;
use crate::shared::RenderScene;

/// Zeichnet die komplette Szene in das gegebene Leinwand-Rechteck.
pub fn draw_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    // Segmente außerhalb der Leinwand hart abschneiden
    let painter = painter.with_clip_rect(rect);

    painter.rect_filled(rect, 0.0, color32(scene.options.canvas_background));
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, color32(scene.options.canvas_border_color)),
        egui::StrokeKind::Inside,
    );

    let stroke = egui::Stroke::new(
        scene.options.stroke_width,
        color32(scene.options.stroke_color),
    );
    for segment in scene.sketch.segments() {
        painter.line_segment(
            [
                to_screen(rect, segment.start),
                to_screen(rect, segment.end),
            ],
            stroke,
        );
    }

    if scene.options.show_pen_cursor {
        draw_pen_cursor(&painter, rect, &scene.pen, scene);
    }
}

/// Zeichnet den Stift-Cursor als Dreieck in Blickrichtung.
fn draw_pen_cursor(painter: &egui::Painter, rect: egui::Rect, pen: &Pen, scene: &RenderScene) {
    let size = scene.options.pen_cursor_size;
    let dir = pen.facing.unit();
    let perp = glam::Vec2::new(-dir.y, dir.x);

    let tip = pen.position + dir * size;
    let base_a = pen.position - dir * (size * 0.4) + perp * (size * 0.5);
    let base_b = pen.position - dir * (size * 0.4) - perp * (size * 0.5);

    painter.add(egui::Shape::convex_polygon(
        vec![
            to_screen(rect, tip),
            to_screen(rect, base_a),
            to_screen(rect, base_b),
        ],
        color32(scene.options.pen_cursor_color),
        egui::Stroke::NONE,
    ));
}

/// Weltkoordinate → Bildschirmkoordinate (Ursprung links oben im Rect).
fn to_screen(rect: egui::Rect, world: glam::Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + world.x, rect.min.y + world.y)
}

/// Konvertiert eine RGBA-Farbe aus den Optionen in `egui::Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

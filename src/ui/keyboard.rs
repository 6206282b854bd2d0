//! Keyboard-Shortcuts für das Sketchpad.
//!
//! Die Tasten spiegeln die Button-Mnemonics; Pfeiltasten setzen die
//! Blickrichtung.

use crate::app::AppIntent;
use crate::core::Direction;

/// Mappt eine gedrückte Taste auf den zugehörigen Intent.
///
/// Pure Funktion, damit die Zuordnung ohne UI-Kontext testbar bleibt.
fn map_key(key: egui::Key) -> Option<AppIntent> {
    match key {
        egui::Key::F => Some(AppIntent::ForwardRequested),
        egui::Key::B => Some(AppIntent::BackwardRequested),
        egui::Key::L | egui::Key::ArrowLeft => Some(AppIntent::FaceRequested {
            direction: Direction::Left,
        }),
        egui::Key::R | egui::Key::ArrowRight => Some(AppIntent::FaceRequested {
            direction: Direction::Right,
        }),
        egui::Key::U | egui::Key::ArrowUp => Some(AppIntent::FaceRequested {
            direction: Direction::Up,
        }),
        egui::Key::D | egui::Key::ArrowDown => Some(AppIntent::FaceRequested {
            direction: Direction::Down,
        }),
        egui::Key::C => Some(AppIntent::ClearRequested),
        _ => None,
    }
}

/// Sammelt Keyboard-Intents aus dem egui-Input.
///
/// Auto-Repeat ist erlaubt (F gedrückt halten zeichnet weiter);
/// Tastenkombinationen mit Modifiern werden ignoriert.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    // Kein Shortcut-Handling, solange ein Eingabefeld den Fokus hält
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if modifiers.is_none() => map_key(*key),
                _ => None,
            })
            .collect()
    })
}

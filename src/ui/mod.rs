//! UI-Komponenten: Menü, Command-Bar, Status-Bar, Keyboard, Dialoge.
//!
//! Alle UI-Funktionen geben `Vec<AppIntent>` zurück und mutieren den
//! Domänen-State nie direkt.

mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

//! Geteilte Typen zwischen App-, UI- und Render-Layer.

pub mod options;
pub mod render_scene;

pub use options::SketchOptions;
pub use render_scene::RenderScene;

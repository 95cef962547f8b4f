pub mod braille;
pub mod overlay;
pub mod render;

pub use overlay::{OverlayMessage, OverlayStyle};
pub use render::BrailleRenderer;

//! Rendering interface
//!
//! Drawing itself belongs to the frontend. The core hands out a borrowed
//! `FrameSnapshot` each frame; `TextRenderer` is the built-in headless one.

pub mod snapshot;
pub mod text;

pub use snapshot::{EffectTimer, FrameSnapshot, Hud};
pub use text::TextRenderer;

/// Anything that can present a frame
pub trait Renderer {
    fn draw(&mut self, frame: &FrameSnapshot<'_>);
}

//! Easycap Render: glyphs, layout and resampling
//!
//! Everything between a loaded [`easycap_fontdb::Font`] and a finished
//! canvas lives here:
//!
//! - [`glyph`] rasterizes, rotates and crops one character via skrifa
//!   outlines and tiny-skia
//! - [`background`] fills solid canvases
//! - [`layout`] pastes glyphs left-to-right through their alpha masks
//! - [`resize`] brings the canvas to its output size

pub mod background;
pub mod glyph;
pub mod layout;
mod pen;
pub mod resize;

pub use background::make_background;
pub use glyph::{crop_to_content, rotate, GlyphRenderer};
pub use layout::{compose, compose_with_padding, paste_with_alpha, random_padding};
pub use resize::{random_resize, resize};

//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_rgba;
pub use save::{output_format, save_rgba};

/// Index of the alpha channel in an RGBA pixel.
pub const ALPHA_CHANNEL: usize = 3;

/// Alpha value for a fully transparent pixel.
pub const TRANSPARENT: u8 = 0;

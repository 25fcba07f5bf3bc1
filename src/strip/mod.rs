//! Near-black background removal.

mod mask;
mod stripper;

pub use mask::{is_black, strip_background};
pub use stripper::{StripConfig, StripReport, Stripper, DEFAULT_THRESHOLD};

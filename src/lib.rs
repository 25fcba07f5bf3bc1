//! # nilakkal
//!
//! Tooling behind the Nilakkal parking dashboard.
//!
//! - [`strip`] removes a near-black background from an image by zeroing the
//!   alpha of every pixel whose red, green and blue channels are all below a
//!   threshold. Used to turn a logo shot on black into a transparent PNG.
//! - [`server`] serves the backend's liveness endpoints over HTTP.
//!
//! ## Example
//!
//! ```no_run
//! use nilakkal::{StripConfig, Stripper};
//!
//! # fn main() -> nilakkal::Result<()> {
//! let stripper = Stripper::new(StripConfig::default())?;
//!
//! let report = stripper.process("logo.jpeg", "logo-transparent.png")?;
//! println!("stripped {} of {} pixels", report.stripped, report.total());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod server;
pub mod strip;

pub use error::{Error, Result};
pub use server::{Server, ServerConfig};
pub use strip::{StripConfig, StripReport, Stripper};

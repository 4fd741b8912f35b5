//! showcard
//!
//! Procedurally renders a fixed set of static PNG marketing cards: one
//! 1200x630 Open-Graph preview and one 1200x675 showcase card per project in
//! the built-in list. All content — dimensions, colors, text, the project
//! list — is a literal constant; the only runtime variability is which
//! system font the resolver finds.
//!
//! The two generators are independent: [`og`] writes
//! `public/og-image.png`, [`showcase`] writes
//! `public/screenshots/<slug>.png` per project. Rendering is fully
//! synchronous and single-threaded; the in-memory [`Canvas`] is the only
//! mutable resource.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> showcard::Result<()> {
//! let og = showcard::og::write_card(Path::new("public"))?;
//! println!("Saved to {}", og.display());
//!
//! let shots = showcard::showcase::write_cards(Path::new("public/screenshots"))?;
//! println!("{} cards written", shots.len());
//! # Ok(())
//! # }
//! ```

pub mod backdrop;
pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod og;
pub mod project;
pub mod showcase;

pub use canvas::{Canvas, Layer};
pub use error::{Error, Result};
pub use project::ProjectDescriptor;

//! # ghcon-paint - terminal output for color-tagged text
//!
//! Format rendering produces text like `[Issue_Open:12] Fix bug`. This crate
//! turns that into what the user sees:
//!
//! - [`ConsoleColor`]: the sixteen terminal colors, by name
//! - [`Palette`]: semantic color aliases (`Issue_Open` → `DarkYellow`)
//! - [`nearest_color`]: maps arbitrary RGB colors (label colors) onto the
//!   terminal palette; injected where needed as a [`ColorMatcher`]
//! - [`Painter`]: applies, strips or keeps color spans
//!
//! ```rust
//! use ghcon_paint::{PaintMode, Painter, Palette};
//!
//! let palette = Palette::new().alias("Issue_Closed", "DarkRed");
//! let painter = Painter::new(palette, PaintMode::Remove);
//!
//! let mut out = Vec::new();
//! painter.write_line(&mut out, "[Issue_Closed:7] Old bug").unwrap();
//! assert_eq!(out, b"7 Old bug\n");
//! ```

mod color;
mod error;
mod painter;
mod palette;

pub use color::{nearest_color, ColorMatcher, ConsoleColor, Rgb};
pub use error::{PaintError, PaletteError};
pub use painter::{escape, PaintMode, Painter};
pub use palette::Palette;

//! The 16-color terminal palette and nearest-color matching.
//!
//! Label colors arrive as hex strings (`d73a4a`), but a terminal only has
//! sixteen foreground colors. [`nearest_color`] picks the closest one by
//! Manhattan distance:
//!
//! ```rust
//! use ghcon_paint::{nearest_color, ConsoleColor, Rgb};
//!
//! let bug = Rgb::from_hex("#d73a4a").unwrap();
//! assert_eq!(nearest_color(bug), ConsoleColor::Red);
//! ```

use std::fmt;

use console::{Color, Style};

/// One of the sixteen terminal foreground colors.
///
/// Names follow the `Dark*` convention: `DarkRed` is the normal red,
/// `Red` the bright one. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl ConsoleColor {
    /// Every color, in palette order. Ties in [`nearest_color`] go to the
    /// earlier entry.
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    /// Canonical name, as accepted in color spans.
    pub fn name(self) -> &'static str {
        match self {
            ConsoleColor::Black => "Black",
            ConsoleColor::DarkBlue => "DarkBlue",
            ConsoleColor::DarkGreen => "DarkGreen",
            ConsoleColor::DarkCyan => "DarkCyan",
            ConsoleColor::DarkRed => "DarkRed",
            ConsoleColor::DarkMagenta => "DarkMagenta",
            ConsoleColor::DarkYellow => "DarkYellow",
            ConsoleColor::Gray => "Gray",
            ConsoleColor::DarkGray => "DarkGray",
            ConsoleColor::Blue => "Blue",
            ConsoleColor::Green => "Green",
            ConsoleColor::Cyan => "Cyan",
            ConsoleColor::Red => "Red",
            ConsoleColor::Magenta => "Magenta",
            ConsoleColor::Yellow => "Yellow",
            ConsoleColor::White => "White",
        }
    }

    /// Looks a color up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// Reference RGB value used for nearest-color matching.
    pub fn rgb(self) -> Rgb {
        let (r, g, b) = match self {
            ConsoleColor::Black => (0, 0, 0),
            ConsoleColor::DarkBlue => (0, 0, 139),
            ConsoleColor::DarkGreen => (0, 100, 0),
            ConsoleColor::DarkCyan => (0, 139, 139),
            ConsoleColor::DarkRed => (139, 0, 0),
            ConsoleColor::DarkMagenta => (139, 0, 139),
            ConsoleColor::DarkYellow => (128, 128, 0),
            ConsoleColor::Gray => (128, 128, 128),
            ConsoleColor::DarkGray => (169, 169, 169),
            ConsoleColor::Blue => (0, 0, 255),
            ConsoleColor::Green => (0, 128, 0),
            ConsoleColor::Cyan => (0, 255, 255),
            ConsoleColor::Red => (255, 0, 0),
            ConsoleColor::Magenta => (255, 0, 255),
            ConsoleColor::Yellow => (255, 255, 0),
            ConsoleColor::White => (255, 255, 255),
        };
        Rgb::new(r, g, b)
    }

    /// The foreground style for this color.
    ///
    /// `Dark*` colors are the eight normal ANSI colors; the others are their
    /// bright variants. `Gray` is normal white and `DarkGray` bright black.
    pub fn style(self) -> Style {
        let (color, bright) = match self {
            ConsoleColor::Black => (Color::Black, false),
            ConsoleColor::DarkBlue => (Color::Blue, false),
            ConsoleColor::DarkGreen => (Color::Green, false),
            ConsoleColor::DarkCyan => (Color::Cyan, false),
            ConsoleColor::DarkRed => (Color::Red, false),
            ConsoleColor::DarkMagenta => (Color::Magenta, false),
            ConsoleColor::DarkYellow => (Color::Yellow, false),
            ConsoleColor::Gray => (Color::White, false),
            ConsoleColor::DarkGray => (Color::Black, true),
            ConsoleColor::Blue => (Color::Blue, true),
            ConsoleColor::Green => (Color::Green, true),
            ConsoleColor::Cyan => (Color::Cyan, true),
            ConsoleColor::Red => (Color::Red, true),
            ConsoleColor::Magenta => (Color::Magenta, true),
            ConsoleColor::Yellow => (Color::Yellow, true),
            ConsoleColor::White => (Color::White, true),
        };
        let style = Style::new().fg(color);
        if bright {
            style.bright()
        } else {
            style
        }
    }

    // Too dark, too light or too neutral to tell labels apart.
    fn matchable(self) -> bool {
        !matches!(
            self,
            ConsoleColor::Black | ConsoleColor::DarkGray | ConsoleColor::Gray | ConsoleColor::White
        )
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `rrggbb`, `rgb`, with or without a leading `#`.
    ///
    /// Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => Some(Self::new(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Sum of the per-channel absolute differences.
    pub fn manhattan_distance(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| u32::from(a.abs_diff(b));
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

/// Maps an arbitrary color onto the terminal palette.
///
/// Resolvers take one of these instead of calling [`nearest_color`]
/// directly, so tests and alternative terminals can substitute their own.
pub type ColorMatcher = fn(Rgb) -> ConsoleColor;

/// The palette color closest to `color`, ignoring black, white and the grays.
pub fn nearest_color(color: Rgb) -> ConsoleColor {
    let mut best = ConsoleColor::Gray;
    let mut best_distance = u32::MAX;
    for candidate in ConsoleColor::ALL.into_iter().filter(|c| c.matchable()) {
        let distance = candidate.rgb().manhattan_distance(color);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(ConsoleColor::from_name("darkyellow"), Some(ConsoleColor::DarkYellow));
        assert_eq!(ConsoleColor::from_name("RED"), Some(ConsoleColor::Red));
        assert_eq!(ConsoleColor::from_name("Issue_Open"), None);
        assert_eq!(ConsoleColor::from_name(""), None);
    }

    #[test]
    fn test_names_round_trip() {
        for color in ConsoleColor::ALL {
            assert_eq!(ConsoleColor::from_name(&color.to_string()), Some(color));
        }
    }

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Rgb::from_hex("d73a4a"), Some(Rgb::new(0xd7, 0x3a, 0x4a)));
        assert_eq!(Rgb::from_hex("#D73A4A"), Some(Rgb::new(0xd7, 0x3a, 0x4a)));
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("f0a"), Some(Rgb::new(255, 0, 170)));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
        assert_eq!(Rgb::from_hex("ééé"), None);
        assert_eq!(Rgb::from_hex("+fffff"), None);
    }

    #[test]
    fn test_nearest_color_exact_matches() {
        assert_eq!(nearest_color(Rgb::new(255, 0, 0)), ConsoleColor::Red);
        assert_eq!(nearest_color(Rgb::new(0, 139, 139)), ConsoleColor::DarkCyan);
        assert_eq!(nearest_color(Rgb::new(255, 255, 0)), ConsoleColor::Yellow);
    }

    #[test]
    fn test_nearest_color_skips_neutrals() {
        let neutrals = [
            ConsoleColor::Black,
            ConsoleColor::DarkGray,
            ConsoleColor::Gray,
            ConsoleColor::White,
        ];
        for gray in [0u8, 64, 128, 169, 255] {
            let picked = nearest_color(Rgb::new(gray, gray, gray));
            assert!(!neutrals.contains(&picked), "{gray} mapped to {picked}");
        }
    }

    #[test]
    fn test_nearest_color_github_labels() {
        // bug, enhancement, documentation
        assert_eq!(nearest_color(Rgb::new(0xd7, 0x3a, 0x4a)), ConsoleColor::Red);
        assert_eq!(nearest_color(Rgb::new(0xa2, 0xee, 0xef)), ConsoleColor::Cyan);
        assert_eq!(nearest_color(Rgb::new(0x00, 0x75, 0xca)), ConsoleColor::DarkCyan);
    }

    #[test]
    fn test_style_brightness() {
        let plain = console::Style::new().fg(console::Color::Red).force_styling(true);
        let dark = ConsoleColor::DarkRed.style().force_styling(true);
        assert_eq!(
            dark.apply_to("x").to_string(),
            plain.apply_to("x").to_string()
        );
        let bright = ConsoleColor::Red.style().force_styling(true);
        assert_ne!(
            bright.apply_to("x").to_string(),
            plain.apply_to("x").to_string()
        );
    }
}

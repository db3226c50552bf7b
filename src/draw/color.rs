//! RGBA color type, predefined constants, and color parsing.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components (each 0.0 to 1.0).
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a color from a `#rrggbb` or `#rgb` hex string.
    ///
    /// Returns `None` for anything that is not a well-formed hex color.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;

        let (r, g, b) = match digits.len() {
            6 => (
                u8::from_str_radix(&digits[0..2], 16).ok()?,
                u8::from_str_radix(&digits[2..4], 16).ok()?,
                u8::from_str_radix(&digits[4..6], 16).ok()?,
            ),
            3 => {
                // Shorthand: each digit doubles (#f0a -> #ff00aa)
                let expand = |d: &str| -> Option<u8> {
                    let v = u8::from_str_radix(d, 16).ok()?;
                    Some(v * 16 + v)
                };
                (
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                )
            }
            _ => return None,
        };

        Some(Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        })
    }

    /// Parses a color from either a hex string or a palette color name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_hex(s).or_else(|| name_to_color(s))
    }
}

/// Maps color name strings to Color values.
///
/// These are the names the widget's default palette offers: red, blue,
/// green, black, white, and transparent (case-insensitive).
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "blue" => Some(BLUE),
        "green" => Some(GREEN),
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

// ============================================================================
// Predefined Color Constants (default widget palette)
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_handles_full_and_short_forms() {
        assert_eq!(Color::from_hex("#000000").unwrap(), BLACK);
        assert_eq!(Color::from_hex("#ffffff").unwrap(), WHITE);
        assert_eq!(Color::from_hex("#f00").unwrap(), RED);

        let orange = Color::from_hex("#ff8000").unwrap();
        assert!((orange.r - 1.0).abs() < f64::EPSILON);
        assert!((orange.g - 128.0 / 255.0).abs() < f64::EPSILON);
        assert_eq!(orange.b, 0.0);
        assert_eq!(orange.a, 1.0);
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert!(Color::from_hex("000000").is_none());
        assert!(Color::from_hex("#0000").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn parse_accepts_names_and_hex() {
        assert_eq!(Color::parse("white").unwrap(), WHITE);
        assert_eq!(Color::parse("Transparent").unwrap(), TRANSPARENT);
        assert_eq!(Color::parse("#0000ff").unwrap(), BLUE);
        assert!(Color::parse("chartreuse").is_none());
    }
}

//! Brand palette: the fixed named colours of the product theme.

use super::Colour;

/// Deep navy, the gradient's end colour.
pub const PRIMARY: Colour = Colour::rgb(0x1e, 0x3a, 0x5f);
/// Darker navy, the background and gradient start.
pub const PRIMARY_DARK: Colour = Colour::rgb(0x15, 0x2b, 0x47);
pub const PRIMARY_LIGHT: Colour = Colour::rgb(0x2d, 0x5a, 0x8e);
/// Gold highlight used for borders, accent bars and headline text.
pub const ACCENT_GOLD: Colour = Colour::rgb(0xd4, 0xa8, 0x53);
pub const ACCENT_DARK: Colour = Colour::rgb(0xb8, 0x92, 0x3d);
pub const ACCENT_LIGHT: Colour = Colour::rgb(0xe6, 0xc6, 0x80);
pub const WHITE: Colour = Colour::WHITE;
/// Slightly muted white for secondary copy.
pub const MUTED: Colour = Colour::rgb(200, 200, 200);

/// The named brand colours, in theme order.
#[derive(Debug, Clone)]
pub struct BrandPalette {
    entries: Vec<(&'static str, Colour)>,
}

impl BrandPalette {
    /// The product's brand palette.
    pub fn brand() -> Self {
        Self {
            entries: vec![
                ("primary", PRIMARY),
                ("primary-dark", PRIMARY_DARK),
                ("primary-light", PRIMARY_LIGHT),
                ("accent", ACCENT_GOLD),
                ("accent-dark", ACCENT_DARK),
                ("accent-light", ACCENT_LIGHT),
                ("white", WHITE),
                ("muted", MUTED),
            ],
        }
    }

    /// Get a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        // Strip $ prefix if present
        let name = name.strip_prefix('$').unwrap_or(name);
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    /// Iterate over `(name, colour)` pairs in theme order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Colour)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self::brand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_theme_hex() {
        assert_eq!(PRIMARY, Colour::from_hex("#1e3a5f").unwrap());
        assert_eq!(PRIMARY_DARK, Colour::from_hex("#152b47").unwrap());
        assert_eq!(ACCENT_GOLD, Colour::from_hex("#d4a853").unwrap());
        assert_eq!(ACCENT_GOLD, Colour::rgb(212, 168, 83));
    }

    #[test]
    fn test_get() {
        let palette = BrandPalette::brand();
        assert_eq!(palette.get("accent"), Some(ACCENT_GOLD));
        assert_eq!(palette.get("$primary-dark"), Some(PRIMARY_DARK));
        assert_eq!(palette.get("missing"), None);
    }

    #[test]
    fn test_order() {
        let palette = BrandPalette::brand();
        let names: Vec<_> = palette.iter().map(|(n, _)| n).collect();
        assert_eq!(names.first(), Some(&"primary"));
        assert_eq!(palette.len(), 8);
        assert!(!palette.is_empty());
    }
}

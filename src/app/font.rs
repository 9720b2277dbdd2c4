use std::ops::{BitOr, BitOrAssign};

/// Point size applied to the note area. Fixed; JotPad has no font-size UI.
pub const FONT_SIZE_PT: i32 = 12;

/// The three font families offered in the Font menu.
///
/// Exactly one family is active at a time; the menu presents them as an
/// exclusive radio group with `Monospaced` selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Monospaced,
    Serif,
    SansSerif,
}

impl FontFamily {
    /// Get the display label for this family.
    ///
    /// `SansSerif` gains a space: its label is "Sans Serif".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monospaced => "Monospaced",
            Self::Serif => "Serif",
            Self::SansSerif => "Sans Serif",
        }
    }

    /// Get all available families, in menu order
    pub fn all() -> &'static [FontFamily] {
        &[Self::Monospaced, Self::Serif, Self::SansSerif]
    }
}

/// Bitset over the bold and italic styles. The empty mask is Plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleMask(u8);

impl StyleMask {
    pub const PLAIN: StyleMask = StyleMask(0);
    pub const BOLD: StyleMask = StyleMask(1 << 0);
    pub const ITALIC: StyleMask = StyleMask(1 << 1);

    pub fn contains(self, other: StyleMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_plain(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for StyleMask {
    type Output = StyleMask;

    fn bitor(self, rhs: StyleMask) -> StyleMask {
        StyleMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for StyleMask {
    fn bitor_assign(&mut self, rhs: StyleMask) {
        self.0 |= rhs.0;
    }
}

/// Current state of the Font menu: one family, two independent toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSelection {
    pub family: FontFamily,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontSelection {
    fn default() -> Self {
        Self {
            family: FontFamily::Monospaced,
            bold: false,
            italic: false,
        }
    }
}

/// The single font descriptor applied to the whole note area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveFont {
    pub family: &'static str,
    pub style: StyleMask,
    pub size_pt: i32,
}

/// Compute the effective font for a selection.
///
/// Pure and deterministic; re-run from current state on every family or
/// toggle change. The result styles the entire buffer - there is no
/// per-range styling.
pub fn resolve(selection: FontSelection) -> EffectiveFont {
    let mut style = StyleMask::PLAIN;
    if selection.bold {
        style |= StyleMask::BOLD;
    }
    if selection.italic {
        style |= StyleMask::ITALIC;
    }

    EffectiveFont {
        family: selection.family.label(),
        style,
        size_pt: FONT_SIZE_PT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_plain_monospaced() {
        let font = resolve(FontSelection::default());
        assert_eq!(font.family, "Monospaced");
        assert_eq!(font.style, StyleMask::PLAIN);
        assert!(font.style.is_plain());
        assert_eq!(font.size_pt, 12);
    }

    #[test]
    fn test_style_mask_is_union_of_toggles() {
        let sel = FontSelection { family: FontFamily::Serif, bold: true, italic: false };
        assert_eq!(resolve(sel).style, StyleMask::BOLD);

        let sel = FontSelection { family: FontFamily::Serif, bold: false, italic: true };
        assert_eq!(resolve(sel).style, StyleMask::ITALIC);

        let sel = FontSelection { family: FontFamily::Serif, bold: true, italic: true };
        let style = resolve(sel).style;
        assert_eq!(style, StyleMask::BOLD | StyleMask::ITALIC);
        assert!(style.contains(StyleMask::BOLD));
        assert!(style.contains(StyleMask::ITALIC));
        assert!(!style.is_plain());
    }

    #[test]
    fn test_family_label_mapping_is_exact() {
        assert_eq!(FontFamily::Monospaced.label(), "Monospaced");
        assert_eq!(FontFamily::Serif.label(), "Serif");
        // Display label differs from the variant name by an inserted space
        assert_eq!(FontFamily::SansSerif.label(), "Sans Serif");
    }

    #[test]
    fn test_all_families_lead_with_default_and_label_distinctly() {
        // The Font menu is built by iterating this list; the startup default
        // must be present and every label must be a distinct menu entry.
        let families = FontFamily::all();
        assert_eq!(families.len(), 3);
        assert_eq!(families[0], FontSelection::default().family);

        let labels: Vec<&str> = families.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Monospaced", "Serif", "Sans Serif"]);
    }

    #[test]
    fn test_bold_toggle_on_default_family() {
        let sel = FontSelection { bold: true, ..Default::default() };
        let font = resolve(sel);
        assert_eq!(font.family, "Monospaced");
        assert_eq!(font.style, StyleMask::BOLD);
        assert_eq!(font.size_pt, 12);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let sel = FontSelection { family: FontFamily::SansSerif, bold: true, italic: true };
        let first = resolve(sel);
        // Unrelated calls in between must not affect the result
        let _ = resolve(FontSelection::default());
        assert_eq!(resolve(sel), first);
    }

    #[test]
    fn test_size_is_constant_for_all_selections() {
        for &family in FontFamily::all() {
            for bold in [false, true] {
                for italic in [false, true] {
                    let font = resolve(FontSelection { family, bold, italic });
                    assert_eq!(font.size_pt, FONT_SIZE_PT);
                }
            }
        }
    }
}

//! Peg colors and the active palette
//!
//! A Peg is one of twelve fixed colors, each with a one-letter abbreviation
//! used for guess entry. A Palette is the prefix of that list that is active
//! for a given game; secrets and guesses may only use active colors.

use rand::Rng;
use std::fmt;

/// One colored peg in a code
///
/// Equality is by variant identity. The declaration order is the canonical
/// palette order used everywhere (display, palette prefixes, enumeration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    Red,
    Blue,
    Yellow,
    Green,
    Orange,
    Violet,
    White,
    Black,
    Grey,
    Indigo,
    Pink,
    Brown,
}

impl Peg {
    /// Number of colors in the full palette
    pub const COUNT: usize = 12;

    /// All colors in canonical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Green,
        Self::Orange,
        Self::Violet,
        Self::White,
        Self::Black,
        Self::Grey,
        Self::Indigo,
        Self::Pink,
        Self::Brown,
    ];

    /// One-letter abbreviation used for guess entry
    ///
    /// Black is K and Grey is E to keep every abbreviation unique.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Orange => 'O',
            Self::Violet => 'V',
            Self::White => 'W',
            Self::Black => 'K',
            Self::Grey => 'E',
            Self::Indigo => 'I',
            Self::Pink => 'P',
            Self::Brown => 'N',
        }
    }

    /// Full display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Violet => "Violet",
            Self::White => "White",
            Self::Black => "Black",
            Self::Grey => "Grey",
            Self::Indigo => "Indigo",
            Self::Pink => "Pink",
            Self::Brown => "Brown",
        }
    }

    /// Look up a color by its abbreviation, case-insensitively
    ///
    /// Returns `None` for characters that abbreviate no color.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|peg| peg.letter() == upper)
    }

    /// Zero-based position in the canonical order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.letter())
    }
}

/// The active prefix of the color list for one game
///
/// A palette of size `n` activates the first `n` colors of [`Peg::ALL`].
/// Sizes are clamped to `1..=12`; configuration validation reports
/// out-of-bounds sizes to the user before a palette is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    size: usize,
}

impl Palette {
    /// Create a palette with the first `size` colors active
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size: size.clamp(1, Peg::COUNT),
        }
    }

    /// The palette with every color active
    #[must_use]
    pub const fn full() -> Self {
        Self { size: Peg::COUNT }
    }

    /// Number of active colors
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Whether a color is active in this palette
    #[must_use]
    pub const fn contains(self, peg: Peg) -> bool {
        peg.index() < self.size
    }

    /// The active colors, in canonical order
    #[must_use]
    pub fn pegs(self) -> &'static [Peg] {
        &Peg::ALL[..self.size]
    }

    /// Draw a uniformly random code of `slots` pegs from this palette
    ///
    /// Colors may repeat, matching the classic game's secret generation.
    pub fn random_code(self, slots: usize, rng: &mut impl Rng) -> super::Code {
        let pegs = (0..slots)
            .map(|_| Peg::ALL[rng.random_range(0..self.size)])
            .collect();
        super::Code::new(pegs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_letters_unique() {
        for (i, a) in Peg::ALL.iter().enumerate() {
            for b in &Peg::ALL[i + 1..] {
                assert_ne!(a.letter(), b.letter(), "{a} and {b} share a letter");
            }
        }
    }

    #[test]
    fn from_letter_round_trips() {
        for peg in Peg::ALL {
            assert_eq!(Peg::from_letter(peg.letter()), Some(peg));
            assert_eq!(Peg::from_letter(peg.letter().to_ascii_lowercase()), Some(peg));
        }
    }

    #[test]
    fn from_letter_rejects_unknown() {
        assert_eq!(Peg::from_letter('X'), None);
        assert_eq!(Peg::from_letter('1'), None);
        assert_eq!(Peg::from_letter(' '), None);
    }

    #[test]
    fn display_shows_name_and_letter() {
        assert_eq!(format!("{}", Peg::Red), "Red (R)");
        assert_eq!(format!("{}", Peg::Grey), "Grey (E)");
        assert_eq!(format!("{}", Peg::Brown), "Brown (N)");
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, peg) in Peg::ALL.iter().enumerate() {
            assert_eq!(peg.index(), i);
        }
    }

    #[test]
    fn palette_prefix_contains_only_active_colors() {
        let palette = Palette::new(6);
        assert_eq!(palette.size(), 6);
        assert!(palette.contains(Peg::Red));
        assert!(palette.contains(Peg::Violet));
        assert!(!palette.contains(Peg::White));
        assert!(!palette.contains(Peg::Brown));
        assert_eq!(palette.pegs().len(), 6);
    }

    #[test]
    fn palette_clamps_out_of_range_sizes() {
        assert_eq!(Palette::new(0).size(), 1);
        assert_eq!(Palette::new(100).size(), Peg::COUNT);
        assert_eq!(Palette::full().size(), Peg::COUNT);
    }

    #[test]
    fn random_code_stays_in_palette() {
        let palette = Palette::new(3);
        let mut rng = rand::rng();

        for _ in 0..20 {
            let code = palette.random_code(4, &mut rng);
            assert_eq!(code.len(), 4);
            assert!(code.pegs().iter().all(|&peg| palette.contains(peg)));
        }
    }

    #[test]
    fn random_code_single_color_palette() {
        let palette = Palette::new(1);
        let mut rng = rand::rng();

        let code = palette.random_code(5, &mut rng);
        assert!(code.pegs().iter().all(|&peg| peg == Peg::Red));
    }
}

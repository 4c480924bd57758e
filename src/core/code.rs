//! Code representation and guess-line parsing
//!
//! A Code is an ordered sequence of pegs: the secret being guarded or the
//! guess being scored. Parsing follows the classic entry rules: letters map
//! to colors, whitespace and unrecognized characters are dropped silently,
//! while a letter naming an inactive color is a loud error.

use super::{Palette, Peg};
use rustc_hash::FxHashMap;
use std::fmt;

/// An ordered sequence of pegs of fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pegs: Vec<Peg>,
}

/// Error type for invalid guess entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// The parsed code has the wrong number of pegs
    WrongLength { expected: usize, actual: usize },
    /// A letter named a color outside the active palette
    OutOfPalette(Peg),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} pegs, got {actual}")
            }
            Self::OutOfPalette(peg) => {
                write!(f, "{peg} is not in the active palette")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a peg sequence
    #[must_use]
    pub const fn new(pegs: Vec<Peg>) -> Self {
        Self { pegs }
    }

    /// Parse a raw input line into a code, without a length requirement
    ///
    /// Characters that abbreviate no color (digits, punctuation, whitespace)
    /// are discarded silently. A letter that names a color outside `palette`
    /// is rejected.
    ///
    /// # Errors
    /// Returns [`CodeError::OutOfPalette`] when a recognized color is not
    /// active in the palette.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Palette, Peg};
    ///
    /// let code = Code::parse("r b g y", Palette::new(6)).unwrap();
    /// assert_eq!(code.pegs(), &[Peg::Red, Peg::Blue, Peg::Green, Peg::Yellow]);
    ///
    /// // P (Pink) is color 11, inactive in a 6-color palette
    /// assert!(Code::parse("RBPY", Palette::new(6)).is_err());
    /// ```
    pub fn parse(input: &str, palette: Palette) -> Result<Self, CodeError> {
        let mut pegs = Vec::new();

        for ch in input.chars() {
            if let Some(peg) = Peg::from_letter(ch) {
                if !palette.contains(peg) {
                    return Err(CodeError::OutOfPalette(peg));
                }
                pegs.push(peg);
            }
        }

        Ok(Self { pegs })
    }

    /// Parse a guess line, enforcing the round's slot count
    ///
    /// # Errors
    /// Returns [`CodeError::OutOfPalette`] for an inactive color and
    /// [`CodeError::WrongLength`] when the surviving pegs do not fill the
    /// code exactly.
    pub fn parse_guess(input: &str, slots: usize, palette: Palette) -> Result<Self, CodeError> {
        let code = Self::parse(input, palette)?;

        if code.len() != slots {
            return Err(CodeError::WrongLength {
                expected: slots,
                actual: code.len(),
            });
        }

        Ok(code)
    }

    /// Number of pegs
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Whether the code holds no pegs
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// The pegs in order
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    /// The abbreviation letters, without separators
    #[must_use]
    pub fn letters(&self) -> String {
        self.pegs.iter().map(|peg| peg.letter()).collect()
    }

    /// Count of each color in the code
    ///
    /// The scoring engine decrements a copy of this map instead of touching
    /// the secret itself.
    #[must_use]
    pub(crate) fn color_counts(&self) -> FxHashMap<Peg, usize> {
        let mut counts = FxHashMap::default();
        for &peg in &self.pegs {
            *counts.entry(peg).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in self.pegs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", peg.letter())?;
        }
        Ok(())
    }
}

impl FromIterator<Peg> for Code {
    fn from_iter<I: IntoIterator<Item = Peg>>(iter: I) -> Self {
        Self {
            pegs: iter.into_iter().collect(),
        }
    }
}

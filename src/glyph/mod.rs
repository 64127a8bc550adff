//! Morphing alphabet
//!
//! Only the characters a clock or a date needs have glyphs: the ten digits,
//! the separators `:` and `/`, and the blank.

mod table;

pub use table::{GlyphSource, GlyphTable};

const GLYPH_NAME_ZERO: &str = "zero";
const GLYPH_NAME_ONE: &str = "one";
const GLYPH_NAME_TWO: &str = "two";
const GLYPH_NAME_THREE: &str = "three";
const GLYPH_NAME_FOUR: &str = "four";
const GLYPH_NAME_FIVE: &str = "five";
const GLYPH_NAME_SIX: &str = "six";
const GLYPH_NAME_SEVEN: &str = "seven";
const GLYPH_NAME_EIGHT: &str = "eight";
const GLYPH_NAME_NINE: &str = "nine";
const GLYPH_NAME_COLON: &str = "colon";
const GLYPH_NAME_SLASH: &str = "slash";
const GLYPH_NAME_SPACE: &str = "space";

/// Number of glyphs in the alphabet
pub const GLYPH_COUNT: usize = 13;

/// A character of the morphing alphabet
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Glyph {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Colon = 10,
    Slash = 11,
    /// Synthesized from the font's bounding box, never loaded
    Space = 12,
}

impl Glyph {
    /// Every glyph, in index order
    pub const ALL: [Self; GLYPH_COUNT] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Colon,
        Self::Slash,
        Self::Space,
    ];

    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '0' => Self::Zero,
            '1' => Self::One,
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            ':' => Self::Colon,
            '/' => Self::Slash,
            ' ' => Self::Space,
            _ => return None,
        })
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Colon => ':',
            Self::Slash => '/',
            Self::Space => ' ',
        }
    }

    /// Name of the bitmap source for this glyph (`"zero"`, `"colon"`, ...)
    pub const fn source_name(self) -> &'static str {
        match self {
            Self::Zero => GLYPH_NAME_ZERO,
            Self::One => GLYPH_NAME_ONE,
            Self::Two => GLYPH_NAME_TWO,
            Self::Three => GLYPH_NAME_THREE,
            Self::Four => GLYPH_NAME_FOUR,
            Self::Five => GLYPH_NAME_FIVE,
            Self::Six => GLYPH_NAME_SIX,
            Self::Seven => GLYPH_NAME_SEVEN,
            Self::Eight => GLYPH_NAME_EIGHT,
            Self::Nine => GLYPH_NAME_NINE,
            Self::Colon => GLYPH_NAME_COLON,
            Self::Slash => GLYPH_NAME_SLASH,
            Self::Space => GLYPH_NAME_SPACE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| glyph.source_name() == s)
    }

    /// Position in [`Glyph::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the glyph comes from the font source
    pub const fn is_loaded(self) -> bool {
        !matches!(self, Self::Space)
    }
}

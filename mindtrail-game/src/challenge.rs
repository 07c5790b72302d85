//! Shareable challenge codes.
//!
//! A code names the game kind, a word, and a two-digit number, e.g.
//! `QZ-PRIME-42` or `SR-PIVOT-07`. The code is the shared artifact: the
//! round seed is derived from its parts through a SplitMix64 finalizer,
//! and codes are never reconstructed from seeds. Two players who type
//! the same code therefore replay the same round.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::GameKind;

/// Words usable in challenge codes, addressed by the code's word index.
pub const WORD_LIST: [&str; 32] = [
    "PRIME", "DIGIT", "VECTOR", "MATRIX", "RADIAN", "FRACTION", "ABACUS", "TALLY",
    "PIVOT", "BUBBLE", "MERGE", "STACK", "QUEUE", "VERTEX", "LATTICE", "CURSOR",
    "PHOTON", "PRISM", "MAGNET", "ORBIT", "PLASMA", "COMET", "GLACIER", "DELTA",
    "FABLE", "RHYME", "GLYPH", "SYNTAX", "VOWEL", "LEXEME", "RIDDLE", "SCRIPT",
];

const DIGIT_SPAN: u64 = 100;

const fn kind_tag(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Quiz => "QZ",
        GameKind::Sorting => "SR",
        GameKind::Graph => "GR",
    }
}

fn kind_from_tag(tag: &str) -> Option<GameKind> {
    match tag {
        "QZ" => Some(GameKind::Quiz),
        "SR" => Some(GameKind::Sorting),
        "GR" => Some(GameKind::Graph),
        _ => None,
    }
}

// Sebastiano Vigna's SplitMix64 finalizer.
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChallengeCodeError {
    #[error("challenge codes look like QZ-PRIME-42")]
    Malformed,
    #[error("unknown game tag `{0}`")]
    UnknownTag(String),
    #[error("unknown code word `{0}`")]
    UnknownWord(String),
}

/// One parsed or freshly rolled challenge code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeCode {
    pub kind: GameKind,
    word: u8,
    digits: u8,
}

impl ChallengeCode {
    /// Roll a new code for `kind` from a caller-supplied entropy value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn roll(kind: GameKind, entropy: u64) -> Self {
        let words = WORD_LIST.len() as u64;
        Self {
            kind,
            word: (entropy % words) as u8,
            digits: ((entropy / words) % DIGIT_SPAN) as u8,
        }
    }

    /// The code's word as printed.
    #[must_use]
    pub fn word(&self) -> &'static str {
        WORD_LIST[usize::from(self.word)]
    }

    /// Round seed this code replays. Same code, same seed; the kind is
    /// mixed in so `QZ-PRIME-42` and `SR-PRIME-42` play unrelated
    /// rounds.
    #[must_use]
    pub fn seed(&self) -> u64 {
        let tag = kind_tag(self.kind).as_bytes();
        let packed = u64::from(tag[0]) << 24
            | u64::from(tag[1]) << 16
            | u64::from(self.word) << 8
            | u64::from(self.digits);
        splitmix64(packed)
    }
}

impl fmt::Display for ChallengeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{:02}", kind_tag(self.kind), self.word(), self.digits)
    }
}

impl FromStr for ChallengeCode {
    type Err = ChallengeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let mut parts = normalized.split('-');
        let (Some(tag), Some(word), Some(digits), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ChallengeCodeError::Malformed);
        };
        let kind =
            kind_from_tag(tag).ok_or_else(|| ChallengeCodeError::UnknownTag(tag.to_string()))?;
        let index = WORD_LIST
            .iter()
            .position(|w| *w == word)
            .ok_or_else(|| ChallengeCodeError::UnknownWord(word.to_string()))?;
        let digits: u8 = digits
            .parse()
            .map_err(|_| ChallengeCodeError::Malformed)?;
        if u64::from(digits) >= DIGIT_SPAN {
            return Err(ChallengeCodeError::Malformed);
        }
        Ok(Self {
            kind,
            word: u8::try_from(index).map_err(|_| ChallengeCodeError::Malformed)?,
            digits,
        })
    }
}

use crate::errors::SelectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const FINGER_COUNT: usize = 10;

/// A finger number in `1..=10`. Once constructed it is always valid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct FingerNumber(u8);

impl FingerNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = FINGER_COUNT as u8;

    pub fn new(value: i64) -> Result<Self, SelectionError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SelectionError::invalid(value))
        }
    }

    /// Accepts only finite, integral values in range.
    pub fn from_f64(value: f64) -> Result<Self, SelectionError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(SelectionError::invalid(value));
        }
        Self::new(value as i64).map_err(|_| SelectionError::invalid(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn hand(self) -> Hand {
        if self.0 <= 5 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    pub fn all() -> impl Iterator<Item = FingerNumber> {
        (Self::MIN..=Self::MAX).map(FingerNumber)
    }
}

impl TryFrom<i64> for FingerNumber {
    type Error = SelectionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FingerNumber> for u8 {
    fn from(n: FingerNumber) -> Self {
        n.0
    }
}

impl FromStr for FingerNumber {
    type Err = SelectionError;

    /// Plain integers, optionally with a zero fraction: `7`, `-2`, `7.0`.
    /// Exponents, signs other than `-`, and `7.` or `.7` forms are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || SelectionError::invalid(trimmed);
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (trimmed, None),
        };
        let digits = whole.strip_prefix('-').unwrap_or(whole);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|b| b == b'0') {
                return Err(invalid());
            }
        }
        let value: i64 = whole.parse().map_err(|_| invalid())?;
        Self::new(value).map_err(|_| invalid())
    }
}

impl fmt::Display for FingerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

// one hand, thumb side last; the right hand reuses the same curve
const HAND_CURVE: [Position; 5] = [
    Position { x: 50, y: 50 },
    Position { x: 120, y: 40 },
    Position { x: 190, y: 30 },
    Position { x: 260, y: 40 },
    Position { x: 330, y: 50 },
];

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Finger {
    number: FingerNumber,
    hand: Hand,
    position: Position,
    selected: bool,
}

impl Finger {
    pub fn new(number: FingerNumber) -> Self {
        let slot = (number.get() as usize - 1) % HAND_CURVE.len();
        Self {
            number,
            hand: number.hand(),
            position: HAND_CURVE[slot],
            selected: false,
        }
    }

    pub fn number(&self) -> FingerNumber {
        self.number
    }
    pub fn hand(&self) -> Hand {
        self.hand
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Strict guard: selecting an already-selected finger is an error.
    /// [`crate::selection::SelectionManager`] clears every finger first, so it never hits this.
    pub fn select(&mut self) -> Result<(), SelectionError> {
        if self.selected {
            return Err(SelectionError::AlreadySelected(self.number.get()));
        }
        self.selected = true;
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// Tens digit of `9 × number`.
    pub fn fingers_to_left(&self) -> u8 {
        self.number.get() - 1
    }

    /// Ones digit of `9 × number`.
    pub fn fingers_to_right(&self) -> u8 {
        FingerNumber::MAX - self.number.get()
    }

    pub fn validate(&self) -> bool {
        self.hand == self.number.hand()
    }
}

/// The ten fingers, left hand first, none selected.
pub fn layout() -> [Finger; FINGER_COUNT] {
    std::array::from_fn(|i| Finger::new(FingerNumber(i as u8 + 1)))
}

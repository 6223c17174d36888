//! The 9's table and the finger split that explains it.
//!
//! For finger `n`, the fingers to its left count the tens digit of `9 × n`
//! and the fingers to its right count the ones digit.

use crate::errors::SelectionError;
use crate::finger::{Finger, FingerNumber, FINGER_COUNT};
use serde::Serialize;

pub const MULTIPLICAND: u8 = 9;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct MultiplicationResult {
    multiplicand: u8,
    multiplier: u8,
    product: u32,
}

impl MultiplicationResult {
    pub fn new(multiplier: FingerNumber) -> Self {
        let multiplier = multiplier.get();
        Self {
            multiplicand: MULTIPLICAND,
            multiplier,
            product: MULTIPLICAND as u32 * multiplier as u32,
        }
    }

    pub fn multiplicand(&self) -> u8 {
        self.multiplicand
    }
    pub fn multiplier(&self) -> u8 {
        self.multiplier
    }
    pub fn product(&self) -> u32 {
        self.product
    }

    /// `9 × 3 = 27`
    pub fn formatted(&self) -> String {
        format!(
            "{} × {} = {}",
            self.multiplicand, self.multiplier, self.product
        )
    }

    /// Left-hand side as the popup shows it: `3 × 9 =`
    pub fn equation(&self) -> String {
        format!("{} × {} =", self.multiplier, self.multiplicand)
    }

    pub fn validate(&self) -> bool {
        self.multiplicand == MULTIPLICAND
            && (FingerNumber::MIN..=FingerNumber::MAX).contains(&self.multiplier)
            && self.product == self.multiplicand as u32 * self.multiplier as u32
    }
}

pub fn is_valid_multiplier(value: i64) -> bool {
    FingerNumber::new(value).is_ok()
}

pub fn compute(multiplier: i64) -> Result<MultiplicationResult, SelectionError> {
    let n = FingerNumber::new(multiplier)?;
    Ok(MultiplicationResult::new(n))
}

pub fn format_multiplication(multiplier: i64) -> Result<String, SelectionError> {
    compute(multiplier).map(|r| r.formatted())
}

pub fn multiplication_table() -> [(u8, u32); FINGER_COUNT] {
    let mut table = [(0u8, 0u32); FINGER_COUNT];
    for (slot, n) in table.iter_mut().zip(FingerNumber::all()) {
        let r = MultiplicationResult::new(n);
        *slot = (r.multiplier(), r.product());
    }
    table
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct Explanation {
    pub fingers_to_left: u8,
    pub fingers_to_right: u8,
}

pub fn explain(index: FingerNumber) -> Explanation {
    Explanation::for_finger(&Finger::new(index))
}

impl Explanation {
    /// Split around a folded finger.
    pub fn for_finger(finger: &Finger) -> Self {
        Self {
            fingers_to_left: finger.fingers_to_left(),
            fingers_to_right: finger.fingers_to_right(),
        }
    }

    /// (tens, ones) of the product.
    pub fn digits(&self) -> (u8, u8) {
        (self.fingers_to_left, self.fingers_to_right)
    }

    pub fn describe(&self) -> String {
        format!(
            "{} to the left (tens), {} to the right (ones)",
            count_fingers(self.fingers_to_left),
            count_fingers(self.fingers_to_right)
        )
    }

    /// Sentence shown under the result, naming the finger ranges.
    pub fn narrate(&self, number: FingerNumber) -> String {
        let n = number.get();
        format!(
            "Fingers 1-{} ({}) represent the tens digit, and fingers {}-10 ({}) represent the ones digit",
            n - 1,
            count_fingers(self.fingers_to_left),
            n + 1,
            count_fingers(self.fingers_to_right)
        )
    }
}

fn count_fingers(count: u8) -> String {
    if count == 1 {
        "1 finger".to_string()
    } else {
        format!("{} fingers", count)
    }
}

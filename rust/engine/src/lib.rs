//! nines-engine: finger selection and 9's table core

pub mod calculator;
pub mod errors;
pub mod finger;
pub mod selection;
pub mod trainer;

pub use calculator::{compute, explain, Explanation, MultiplicationResult, MULTIPLICAND};
pub use errors::SelectionError;
pub use finger::{Finger, FingerNumber, Hand, Position, FINGER_COUNT};
pub use selection::{SelectionManager, SelectionState};
pub use trainer::{SelectionOutcome, Trainer};

use crate::errors::SelectionError;
use crate::finger::{layout, Finger, FingerNumber, FINGER_COUNT};
use serde::Serialize;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "state", content = "finger", rename_all = "snake_case")]
pub enum SelectionState {
    Idle,
    Selected(FingerNumber),
}

/// Owns the ten fingers and keeps at most one of them selected.
#[derive(Debug, Clone)]
pub struct SelectionManager {
    fingers: [Finger; FINGER_COUNT],
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { fingers: layout() }
    }

    pub fn fingers(&self) -> &[Finger; FINGER_COUNT] {
        &self.fingers
    }

    pub fn select(&mut self, index: i64) -> Result<&Finger, SelectionError> {
        let finger: &Finger = select_in(&mut self.fingers, index)?;
        Ok(finger)
    }

    pub fn select_number(&mut self, number: FingerNumber) -> Result<&Finger, SelectionError> {
        self.select(number.get() as i64)
    }

    pub fn deselect_all(&mut self) {
        deselect_all_in(&mut self.fingers);
    }

    pub fn selected(&self) -> Option<&Finger> {
        selected_in(&self.fingers)
    }

    pub fn is_valid_state(&self) -> bool {
        is_valid_selection(&self.fingers)
    }

    pub fn state(&self) -> SelectionState {
        match self.selected() {
            Some(f) => SelectionState::Selected(f.number()),
            None => SelectionState::Idle,
        }
    }
}

/// Selects finger `index` in `fingers`, clearing every other finger first.
/// Re-selecting the current finger succeeds.
pub fn select_in(fingers: &mut [Finger], index: i64) -> Result<&mut Finger, SelectionError> {
    let number = FingerNumber::new(index)?;
    let slot = number.get() as usize - 1;
    if slot >= fingers.len() {
        return Err(SelectionError::OutOfRange {
            number: number.get(),
            len: fingers.len(),
        });
    }

    deselect_all_in(fingers);
    let finger = &mut fingers[slot];
    finger.select()?;
    Ok(finger)
}

pub fn deselect_all_in(fingers: &mut [Finger]) {
    fingers.iter_mut().for_each(Finger::deselect);
}

pub fn selected_in(fingers: &[Finger]) -> Option<&Finger> {
    fingers.iter().find(|f| f.is_selected())
}

pub fn is_valid_selection(fingers: &[Finger]) -> bool {
    fingers.iter().filter(|f| f.is_selected()).count() <= 1
}

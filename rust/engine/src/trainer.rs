use crate::calculator::{Explanation, MultiplicationResult};
use crate::errors::SelectionError;
use crate::finger::Finger;
use crate::selection::{SelectionManager, SelectionState};
use serde::Serialize;

/// Everything the display needs after a finger is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    pub finger: Finger,
    pub result: MultiplicationResult,
    pub explanation: Explanation,
}

impl SelectionOutcome {
    pub fn narration(&self) -> String {
        self.explanation.narrate(self.finger.number())
    }
}

/// Session context for one pair of hands. Construct one per UI and pass it
/// to whatever handles input events.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    selection: SelectionManager,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_select(&mut self, index: i64) -> Result<SelectionOutcome, SelectionError> {
        let finger = match self.selection.select(index) {
            Ok(f) => f.clone(),
            Err(err) => {
                tracing::warn!(index, error = %err, "finger selection rejected");
                return Err(err);
            }
        };
        let number = finger.number();
        let result = MultiplicationResult::new(number);
        let explanation = Explanation::for_finger(&finger);
        tracing::debug!(
            finger = number.get(),
            product = result.product(),
            left = explanation.fingers_to_left,
            right = explanation.fingers_to_right,
            "finger selected"
        );
        Ok(SelectionOutcome {
            finger,
            result,
            explanation,
        })
    }

    /// Clears the selection. Returns `false` when nothing was selected.
    pub fn on_deselect(&mut self) -> bool {
        let had_selection = self.selection.selected().is_some();
        self.selection.deselect_all();
        if had_selection {
            tracing::debug!("selection cleared");
        }
        had_selection
    }

    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }
}

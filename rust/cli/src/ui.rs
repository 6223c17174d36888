use nines_engine::calculator::multiplication_table;
use nines_engine::finger::{Finger, Position};
use nines_engine::trainer::SelectionOutcome;
use std::io::Write;

pub const PROMPT_MESSAGE: &str = "Click a number (1-10) to see the 9's multiplication result";
pub const RETRY_MESSAGE: &str = "Unable to select finger. Please try again.";

const CELL: usize = 4;
const HAND_GAP: &str = "    ";
const STEM_BASE_Y: u16 = 60;
const STEM_STEP: u16 = 10;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Both hands side by side. Taller fingers (smaller layout `y`) get longer
/// stems; the selected finger is drawn folded (`_`) with its number bracketed.
pub fn render_hands(fingers: &[Finger]) -> String {
    let rows = fingers
        .iter()
        .map(|f| stem_height(f.position()))
        .max()
        .unwrap_or(0);
    let mut stems = vec![String::new(); rows];
    let mut labels = String::new();
    let mut heading = String::new();
    for (i, f) in fingers.iter().enumerate() {
        let starts_hand = i == 0 || fingers[i - 1].hand() != f.hand();
        if i > 0 && starts_hand {
            stems.iter_mut().for_each(|row| row.push_str(HAND_GAP));
            labels.push_str(HAND_GAP);
            heading.push_str(HAND_GAP);
        }

        let height = stem_height(f.position());
        for (r, row) in stems.iter_mut().enumerate() {
            // row 0 is the top; a finger fills its lowest `height` rows
            let filled = r >= rows - height;
            let glyph = match (f.is_selected(), filled) {
                (true, _) if r == rows - 1 => "_",
                (false, true) => "|",
                _ => "",
            };
            row.push_str(&format!("{:^width$}", glyph, width = CELL));
        }

        let label = if f.is_selected() {
            format!("[{}]", f.number())
        } else {
            f.number().to_string()
        };
        labels.push_str(&format!("{:^width$}", label, width = CELL));
        if starts_hand {
            heading.push_str(&format!("{:<width$}", f.hand().as_str(), width = CELL));
        } else {
            heading.push_str(&" ".repeat(CELL));
        }
    }

    std::iter::once(heading)
        .chain(stems)
        .chain(std::iter::once(labels))
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rows of stem for a fingertip at `position`; at least one.
fn stem_height(position: Position) -> usize {
    let rise = STEM_BASE_Y.saturating_sub(position.y) / STEM_STEP;
    rise.max(1) as usize
}

pub fn render_outcome(outcome: &SelectionOutcome, explain: bool) -> String {
    let mut lines = vec![
        outcome.result.equation(),
        outcome.result.product().to_string(),
    ];
    if explain {
        lines.push(outcome.narration());
        lines.push(outcome.explanation.describe());
    }
    lines.join("\n")
}

pub fn render_table() -> String {
    multiplication_table()
        .iter()
        .map(|(m, p)| format!("9 × {} = {}", m, p))
        .collect::<Vec<_>>()
        .join("\n")
}

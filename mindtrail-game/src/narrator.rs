//! Narration scripts.
//!
//! Pure text derivation for the spoken narrator: the web layer decides
//! whether and how to speak these lines.

use crate::graph::{GraphFrame, GraphSpec};
use crate::progress::CompletionOutcome;
use crate::quiz::AnswerOutcome;
use crate::sorting::{SortFrame, SortOp};

/// Line spoken after answering a quiz question.
#[must_use]
pub fn narrate_answer(outcome: &AnswerOutcome) -> String {
    if outcome.correct {
        "Correct! Nice work.".to_string()
    } else if outcome.finished {
        "Not quite. That was the last question.".to_string()
    } else {
        "Not quite. Keep going!".to_string()
    }
}

/// Line spoken for one sorting-visualizer frame.
#[must_use]
pub fn narrate_sort_frame(frame: &SortFrame) -> String {
    match frame.op {
        SortOp::Compare { a, b } => format!("Comparing positions {a} and {b}."),
        SortOp::Swap { a, b } => format!("Swapping positions {a} and {b}."),
        SortOp::Write { index, value } => {
            format!("Writing {value} into position {index}.")
        }
        SortOp::Done => "The array is sorted!".to_string(),
    }
}

/// Line spoken for one graph-lab frame.
#[must_use]
pub fn narrate_graph_frame(graph: &GraphSpec, frame: &GraphFrame) -> String {
    let name = graph
        .nodes
        .get(frame.current)
        .map_or("?", String::as_str);
    let distance = frame
        .distances
        .get(frame.current)
        .copied()
        .flatten()
        .unwrap_or(0);
    if frame.frontier.is_empty() {
        format!("Visiting node {name} at distance {distance}. Every node is settled.")
    } else {
        format!("Visiting node {name} at distance {distance}.")
    }
}

/// Line spoken on the result screen once a round is recorded.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn narrate_completion(outcome: &CompletionOutcome) -> String {
    let pct = (outcome.accuracy * 100.0).round() as u32;
    let mut line = if outcome.first_completion {
        format!("You scored {pct} percent and completed a new subtopic!")
    } else if outcome.rewarded {
        format!("You scored {pct} percent. Excellent!")
    } else if outcome.punished {
        format!("You scored {pct} percent. Let's practice this one again.")
    } else {
        format!("You scored {pct} percent.")
    };
    for badge in &outcome.new_badges {
        line.push_str(&format!(" New badge earned: {badge}."));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::SortOp;

    #[test]
    fn answer_lines_match_outcome() {
        let right = AnswerOutcome {
            correct: true,
            answer: 0,
            finished: false,
        };
        assert!(narrate_answer(&right).starts_with("Correct"));
        let wrong = AnswerOutcome {
            correct: false,
            answer: 2,
            finished: true,
        };
        assert!(narrate_answer(&wrong).contains("last question"));
    }

    #[test]
    fn sort_lines_name_positions() {
        let frame = SortFrame {
            op: SortOp::Swap { a: 1, b: 2 },
            values: vec![1, 2, 3],
        };
        assert_eq!(narrate_sort_frame(&frame), "Swapping positions 1 and 2.");
    }

    #[test]
    fn completion_line_appends_new_badges() {
        let outcome = CompletionOutcome {
            accuracy: 0.8,
            xp_gained: 20,
            first_completion: true,
            rewarded: true,
            punished: false,
            new_badges: vec!["Quick Learner".to_string()],
        };
        let line = narrate_completion(&outcome);
        assert!(line.contains("80 percent"));
        assert!(line.contains("New badge earned: Quick Learner."));
    }
}

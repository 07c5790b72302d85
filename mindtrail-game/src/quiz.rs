//! The single configurable round-robin quiz engine.
//!
//! Every scored quiz in the catalog is this engine parameterized by a
//! question source: a JSON bank for knowledge subtopics, or the
//! procedural arithmetic generator for math drills.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Default number of questions per round.
pub const ROUND_LEN: usize = 5;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<String>,
    /// Index into `choices`.
    pub answer: usize,
    #[serde(default)]
    pub note: Option<String>,
}

/// Questions for one subtopic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub subtopic: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Container for all embedded question banks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BankData {
    pub banks: Vec<QuestionBank>,
}

impl BankData {
    /// Create empty bank data (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self { banks: Vec::new() }
    }

    /// Parse bank data from its embedded JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the bank shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Questions for the given subtopic id, empty when no bank exists.
    #[must_use]
    pub fn questions_for(&self, subtopic: &str) -> &[Question] {
        self.banks
            .iter()
            .find(|b| b.subtopic == subtopic)
            .map_or(&[], |b| b.questions.as_slice())
    }
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Index of the right choice, for highlighting after a miss.
    pub answer: usize,
    pub finished: bool,
}

/// One scored round of questions, drawn without replacement from a
/// seeded shuffle so a shared challenge code replays the same round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    correct: u32,
}

impl QuizSession {
    /// Build a round from a question bank. Rounds never exceed the bank
    /// size; an empty bank yields an already-finished session.
    #[must_use]
    pub fn from_bank(bank: &[Question], seed: u64, round_len: usize) -> Self {
        let mut questions = bank.to_vec();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        questions.shuffle(&mut rng);
        questions.truncate(round_len);
        Self {
            questions,
            index: 0,
            correct: 0,
        }
    }

    /// Build a procedurally generated arithmetic round.
    #[must_use]
    pub fn arithmetic(seed: u64, round_len: usize) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let questions = (0..round_len).map(|_| arithmetic_question(&mut rng)).collect();
        Self {
            questions,
            index: 0,
            correct: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// 1-based position of the current question and the round length.
    #[must_use]
    pub fn round_position(&self) -> (usize, usize) {
        (self.index + 1, self.questions.len())
    }

    /// Record an answer for the current question and advance.
    /// Returns `None` once the round is over.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        let question = self.questions.get(self.index)?;
        let correct = choice == question.answer;
        let answer = question.answer;
        if correct {
            self.correct += 1;
        }
        self.index += 1;
        Some(AnswerOutcome {
            correct,
            answer,
            finished: self.is_finished(),
        })
    }

    /// Raw score `(correct, total)` as passed to the progress tracker.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn score(&self) -> (u32, u32) {
        (self.correct, self.questions.len() as u32)
    }
}

/// One randomized times-table / sum question with three distractors.
fn arithmetic_question(rng: &mut ChaCha20Rng) -> Question {
    let (prompt, value) = if rng.gen_bool(0.5) {
        let a = rng.gen_range(2..=12);
        let b = rng.gen_range(2..=12);
        (format!("What is {a} x {b}?"), a * b)
    } else {
        let a = rng.gen_range(10..=99);
        let b = rng.gen_range(10..=99);
        (format!("What is {a} + {b}?"), a + b)
    };

    let mut choices = vec![value];
    while choices.len() < 4 {
        let offset = rng.gen_range(1..=10);
        let candidate = if rng.gen_bool(0.5) && value > offset {
            value - offset
        } else {
            value + offset
        };
        if !choices.contains(&candidate) {
            choices.push(candidate);
        }
    }
    choices.shuffle(rng);
    let answer = choices
        .iter()
        .position(|c| *c == value)
        .unwrap_or_default();

    Question {
        prompt,
        choices: choices.iter().map(ToString::to_string).collect(),
        answer,
        note: None,
    }
}

//! Mindtrail Game Engine
//!
//! Platform-agnostic core logic for the Mindtrail learning-games catalog.
//! This crate provides the progress model, game engines, and narration
//! scripts without UI or platform-specific dependencies.

pub mod catalog;
pub mod challenge;
pub mod graph;
pub mod narrator;
pub mod progress;
pub mod quiz;
pub mod sorting;
pub mod store;

// Re-export commonly used types
pub use catalog::{CatalogData, CatalogError, GameKind, Selection, Subject, Subtopic, Topic};
pub use challenge::{ChallengeCode, ChallengeCodeError};
pub use graph::{GraphAlgorithm, GraphFrame, GraphSpec, bfs_trace, dijkstra_trace};
pub use narrator::{narrate_answer, narrate_completion, narrate_graph_frame, narrate_sort_frame};
pub use progress::{
    ALL_BADGES, BADGE_GAME_EXPLORER, BADGE_GETTING_STARTED, BADGE_QUICK_LEARNER, BADGE_TOPIC_TAMER,
    CompletionOutcome, ProgressRecord,
};
pub use quiz::{AnswerOutcome, BankData, Question, QuestionBank, QuizSession};
pub use sorting::{SortAlgorithm, SortFrame, SortOp, random_values, trace_sort};
pub use store::{MemoryStore, ProgressStore, ProgressTracker};

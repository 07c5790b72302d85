//! The persisted progress record and its accumulation rules.

use serde::{Deserialize, Serialize};

use crate::catalog::Selection;

pub const BADGE_GETTING_STARTED: &str = "Getting Started";
pub const BADGE_QUICK_LEARNER: &str = "Quick Learner";
pub const BADGE_GAME_EXPLORER: &str = "Game Explorer";
pub const BADGE_TOPIC_TAMER: &str = "Topic Tamer";

/// Every badge the app can grant, in display order.
pub const ALL_BADGES: [&str; 4] = [
    BADGE_GETTING_STARTED,
    BADGE_QUICK_LEARNER,
    BADGE_GAME_EXPLORER,
    BADGE_TOPIC_TAMER,
];

const XP_GAME_START: u32 = 5;
const XP_FIRST_COMPLETION: u32 = 20;
const XP_PARTIAL_CREDIT: u32 = 10;
const COMPLETION_THRESHOLD: f64 = 0.6;
const REWARD_THRESHOLD: f64 = 0.8;
const PUNISHMENT_THRESHOLD: f64 = 0.4;
const EXPLORER_GAMES: u32 = 5;
const TAMER_TOPICS: u32 = 3;

/// The sole persisted entity: one record accumulating all progress.
///
/// Every field defaults so that records stored by an older schema merge
/// over defaults on read instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressRecord {
    #[serde(default)]
    pub topics_completed: u32,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub rewards: u32,
    #[serde(default)]
    pub punishments: u32,
    /// Insertion-ordered, membership-checked before insert.
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub last_played_at: Option<String>,
    /// Composite keys `"subject:topic:subtopic"`, insertion-ordered.
    #[serde(default)]
    pub completed_subtopics: Vec<String>,
}

/// Summary of what one finished game changed, for the result screen
/// and the narrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOutcome {
    pub accuracy: f64,
    pub xp_gained: u32,
    pub first_completion: bool,
    pub rewarded: bool,
    pub punished: bool,
    pub new_badges: Vec<String>,
}

impl ProgressRecord {
    /// Decode a stored record, falling back to defaults on malformed
    /// data. Storage failures are invisible by design.
    #[must_use]
    pub fn from_json_lossy(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    #[must_use]
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Grant a badge if absent. Returns true when the badge is new.
    pub fn grant_badge(&mut self, badge: &str) -> bool {
        if self.has_badge(badge) {
            false
        } else {
            self.badges.push(badge.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_completed(&self, key: &str) -> bool {
        self.completed_subtopics.iter().any(|k| k == key)
    }

    /// Apply the game-start rules: one more game played, 5 XP, fresh
    /// timestamp, and the "Getting Started" badge. The games-played
    /// milestone is checked here too, so five starts grant
    /// "Game Explorer" even when no round was ever finished.
    pub fn apply_game_start(&mut self, _selection: &Selection, now_iso: &str) {
        self.games_played += 1;
        self.xp += XP_GAME_START;
        self.last_played_at = Some(now_iso.to_string());
        self.grant_badge(BADGE_GETTING_STARTED);
        if self.games_played >= EXPLORER_GAMES {
            self.grant_badge(BADGE_GAME_EXPLORER);
        }
    }

    /// Apply the game-completion rules for a finished round.
    ///
    /// `total == 0` yields no accuracy, so the record is left untouched
    /// and `None` is returned. `correct` is clamped to `total`.
    pub fn apply_game_complete(
        &mut self,
        selection: &Selection,
        correct: u32,
        total: u32,
        now_iso: &str,
    ) -> Option<CompletionOutcome> {
        if total == 0 {
            return None;
        }
        let correct = correct.min(total);
        let accuracy = f64::from(correct) / f64::from(total);
        let mut new_badges = Vec::new();

        let key = selection.completion_key();
        let first_completion = !self.is_completed(&key) && accuracy >= COMPLETION_THRESHOLD;
        let xp_gained = if first_completion {
            self.completed_subtopics.push(key);
            self.topics_completed += 1;
            XP_FIRST_COMPLETION
        } else {
            XP_PARTIAL_CREDIT
        };
        self.xp += xp_gained;

        // Reward/punishment thresholds are independent of the
        // completion-key logic above.
        let rewarded = accuracy >= REWARD_THRESHOLD;
        let punished = accuracy < PUNISHMENT_THRESHOLD;
        if rewarded {
            self.rewards += 1;
            if self.grant_badge(BADGE_QUICK_LEARNER) {
                new_badges.push(BADGE_QUICK_LEARNER.to_string());
            }
        } else if punished {
            self.punishments += 1;
        }

        if self.games_played >= EXPLORER_GAMES && self.grant_badge(BADGE_GAME_EXPLORER) {
            new_badges.push(BADGE_GAME_EXPLORER.to_string());
        }
        if self.topics_completed >= TAMER_TOPICS && self.grant_badge(BADGE_TOPIC_TAMER) {
            new_badges.push(BADGE_TOPIC_TAMER.to_string());
        }

        self.last_played_at = Some(now_iso.to_string());

        Some(CompletionOutcome {
            accuracy,
            xp_gained,
            first_completion,
            rewarded,
            punished,
            new_badges,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel() -> Selection {
        Selection::new("cs", "sorting", "bubble", 1)
    }

    #[test]
    fn game_start_accumulates_and_grants_starter_badge() {
        let mut record = ProgressRecord::default();
        record.apply_game_start(&sel(), "2026-08-30T10:00:00Z");
        assert_eq!(record.games_played, 1);
        assert_eq!(record.xp, 5);
        assert!(record.has_badge(BADGE_GETTING_STARTED));
        assert_eq!(
            record.last_played_at.as_deref(),
            Some("2026-08-30T10:00:00Z")
        );
    }

    #[test]
    fn badge_grants_are_idempotent() {
        let mut record = ProgressRecord::default();
        record.apply_game_start(&sel(), "t1");
        record.apply_game_start(&sel(), "t2");
        assert_eq!(record.games_played, 2);
        assert_eq!(
            record.badges.iter().filter(|b| *b == BADGE_GETTING_STARTED).count(),
            1
        );
    }

    #[test]
    fn high_accuracy_completion_counts_topic_and_reward() {
        let mut record = ProgressRecord::default();
        let out = record.apply_game_complete(&sel(), 8, 10, "t").unwrap();
        assert_eq!(record.topics_completed, 1);
        assert_eq!(record.xp, 20);
        assert_eq!(record.rewards, 1);
        assert!(record.has_badge(BADGE_QUICK_LEARNER));
        assert!(record.is_completed("cs:sorting:bubble"));
        assert!(out.first_completion);
        assert!(out.rewarded);
        assert!(!out.punished);
    }

    #[test]
    fn low_accuracy_completion_punishes_without_completing() {
        let mut record = ProgressRecord::default();
        let out = record.apply_game_complete(&sel(), 2, 10, "t").unwrap();
        assert_eq!(record.topics_completed, 0);
        assert_eq!(record.xp, 10);
        assert_eq!(record.punishments, 1);
        assert_eq!(record.rewards, 0);
        assert!(out.punished);
    }

    #[test]
    fn middle_accuracy_changes_neither_reward_nor_punishment() {
        let mut record = ProgressRecord::default();
        record.apply_game_complete(&sel(), 6, 10, "t").unwrap();
        assert_eq!(record.rewards, 0);
        assert_eq!(record.punishments, 0);
        assert_eq!(record.topics_completed, 1);
    }

    #[test]
    fn repeat_completion_earns_partial_credit_only() {
        let mut record = ProgressRecord::default();
        record.apply_game_complete(&sel(), 7, 10, "t1").unwrap();
        let out = record.apply_game_complete(&sel(), 9, 10, "t2").unwrap();
        assert_eq!(record.topics_completed, 1);
        assert_eq!(record.completed_subtopics.len(), 1);
        assert!(!out.first_completion);
        assert_eq!(out.xp_gained, 10);
        assert_eq!(record.xp, 30);
    }

    #[test]
    fn zero_total_is_a_no_op() {
        let mut record = ProgressRecord::default();
        assert!(record.apply_game_complete(&sel(), 0, 0, "t").is_none());
        assert_eq!(record, ProgressRecord::default());
    }

    #[test]
    fn correct_above_total_is_clamped() {
        let mut record = ProgressRecord::default();
        let out = record.apply_game_complete(&sel(), 12, 10, "t").unwrap();
        assert!((out.accuracy - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn explorer_badge_after_five_starts_without_any_completion() {
        let mut record = ProgressRecord::default();
        for i in 0..4 {
            record.apply_game_start(&sel(), &format!("t{i}"));
        }
        assert!(!record.has_badge(BADGE_GAME_EXPLORER));
        record.apply_game_start(&sel(), "t4");
        assert!(record.has_badge(BADGE_GAME_EXPLORER));
        assert_eq!(record.topics_completed, 0);
    }

    #[test]
    fn explorer_badge_after_five_games() {
        let mut record = ProgressRecord::default();
        for i in 0..5 {
            record.apply_game_start(&sel(), &format!("t{i}"));
        }
        record.apply_game_complete(&sel(), 1, 10, "t").unwrap();
        assert!(record.has_badge(BADGE_GAME_EXPLORER));
    }

    #[test]
    fn tamer_badge_after_three_distinct_completions() {
        let mut record = ProgressRecord::default();
        for name in ["bubble", "merge", "quick"] {
            let sel = Selection::new("cs", "sorting", name, 1);
            record.apply_game_complete(&sel, 9, 10, "t").unwrap();
        }
        assert!(record.has_badge(BADGE_TOPIC_TAMER));
    }

    #[test]
    fn lossy_decode_merges_partial_records_over_defaults() {
        let record = ProgressRecord::from_json_lossy(r#"{"xp": 40, "gamesPlayed": 3}"#);
        // Unknown camelCase keys are ignored; known fields keep defaults.
        assert_eq!(record.xp, 40);
        assert_eq!(record.games_played, 0);
        assert!(record.badges.is_empty());
    }

    #[test]
    fn lossy_decode_of_garbage_yields_defaults() {
        assert_eq!(
            ProgressRecord::from_json_lossy("not json"),
            ProgressRecord::default()
        );
    }
}

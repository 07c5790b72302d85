//! End-to-end checks of the progress accumulation rules through the
//! tracker and an in-memory store, one per documented property.

use mindtrail_game::{
    BADGE_GAME_EXPLORER, BADGE_GETTING_STARTED, BADGE_QUICK_LEARNER, BADGE_TOPIC_TAMER,
    MemoryStore, ProgressRecord, ProgressTracker, Selection,
};

fn tracker() -> ProgressTracker<MemoryStore> {
    ProgressTracker::new(MemoryStore::new())
}

fn sel(subtopic: &str) -> Selection {
    Selection::new("cs", "sorting", subtopic, 1)
}

#[test]
fn game_start_adds_one_game_five_xp_and_starter_badge() {
    let tracker = tracker();
    for round in 1..=3_u32 {
        tracker.record_game_start(&sel("bubble-sort"), "2026-08-30T08:00:00Z");
        let record = tracker.progress();
        assert_eq!(record.games_played, round);
        assert_eq!(record.xp, round * 5);
        assert!(record.has_badge(BADGE_GETTING_STARTED));
    }
}

#[test]
fn badge_grants_never_grow_the_set_when_already_present() {
    let tracker = tracker();
    tracker.record_game_start(&sel("bubble-sort"), "t");
    let before = tracker.progress().badges.len();
    tracker.record_game_start(&sel("bubble-sort"), "t");
    assert_eq!(tracker.progress().badges.len(), before);
}

#[test]
fn eighty_percent_on_fresh_subtopic_completes_and_rewards() {
    let tracker = tracker();
    let out = tracker
        .record_game_complete(&sel("merge-sort"), 8, 10, "t")
        .unwrap();
    let record = tracker.progress();
    assert_eq!(record.topics_completed, 1);
    assert_eq!(record.xp, 20);
    assert_eq!(record.rewards, 1);
    assert!(record.has_badge(BADGE_QUICK_LEARNER));
    assert!(record.is_completed("cs:sorting:merge-sort"));
    assert!(out.first_completion && out.rewarded);
}

#[test]
fn twenty_percent_on_fresh_subtopic_only_punishes() {
    let tracker = tracker();
    tracker
        .record_game_complete(&sel("merge-sort"), 2, 10, "t")
        .unwrap();
    let record = tracker.progress();
    assert_eq!(record.topics_completed, 0);
    assert_eq!(record.xp, 10);
    assert_eq!(record.punishments, 1);
    assert!(!record.is_completed("cs:sorting:merge-sort"));
}

#[test]
fn passing_twice_completes_only_once() {
    let tracker = tracker();
    tracker
        .record_game_complete(&sel("quick-sort"), 7, 10, "t1")
        .unwrap();
    let out = tracker
        .record_game_complete(&sel("quick-sort"), 10, 10, "t2")
        .unwrap();
    let record = tracker.progress();
    assert_eq!(record.topics_completed, 1);
    assert_eq!(record.completed_subtopics.len(), 1);
    assert!(!out.first_completion);
}

#[test]
fn five_starts_alone_grant_explorer() {
    let tracker = tracker();
    for _ in 0..5 {
        tracker.record_game_start(&sel("bubble-sort"), "t");
    }
    let record = tracker.progress();
    assert!(record.has_badge(BADGE_GAME_EXPLORER));
    assert_eq!(record.topics_completed, 0);
}

#[test]
fn explorer_after_five_starts_tamer_after_three_topics() {
    let tracker = tracker();
    for _ in 0..5 {
        tracker.record_game_start(&sel("bubble-sort"), "t");
    }
    for subtopic in ["bubble-sort", "merge-sort", "quick-sort"] {
        tracker
            .record_game_complete(&sel(subtopic), 9, 10, "t")
            .unwrap();
    }
    let record = tracker.progress();
    assert!(record.has_badge(BADGE_GAME_EXPLORER));
    assert!(record.has_badge(BADGE_TOPIC_TAMER));
}

#[test]
fn reset_returns_the_exact_default_record() {
    let tracker = tracker();
    tracker.record_game_start(&sel("bubble-sort"), "t");
    tracker
        .record_game_complete(&sel("bubble-sort"), 9, 10, "t")
        .unwrap();
    tracker.reset();
    assert_eq!(tracker.progress(), ProgressRecord::default());
}

#[test]
fn older_schema_records_merge_over_defaults() {
    // A record stored before `completed_subtopics` existed still loads.
    let stored = r#"{"games_played": 2, "xp": 15, "badges": ["Getting Started"]}"#;
    let record = ProgressRecord::from_json_lossy(stored);
    assert_eq!(record.games_played, 2);
    assert_eq!(record.xp, 15);
    assert!(record.completed_subtopics.is_empty());
    assert!(record.last_played_at.is_none());
}

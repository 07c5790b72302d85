use std::rc::Rc;

use futures::executor::block_on;
use mindtrail_game::{ChallengeCode, GameKind, Selection};
use mindtrail_web::app::bootstrap::load_embedded;
use mindtrail_web::pages::{
    achievements::AchievementsPage,
    games::{GamesPage, GamesPageProps},
    graphs::{GraphsPage, GraphsPageProps},
    home::{HomePage, HomePageProps},
    not_found::NotFound,
    progress::{ProgressPage, ProgressPageProps},
    quiz::{QuizPage, QuizPageProps},
    sorting::{SortingPage, SortingPageProps},
};
use yew::{Callback, LocalServerRenderer};

#[test]
fn home_page_renders_dashboard_and_challenge_entry() {
    let props = HomePageProps {
        on_load_challenge: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Dashboard"));
    assert!(html.contains("Welcome! Pick a game to start earning XP."));
    assert!(html.contains("challenge-input"));
    assert!(html.contains("challenge-load"));
    assert!(html.contains("stats-bar"));
}

#[test]
fn games_page_lists_the_embedded_catalog() {
    let (catalog, _) = load_embedded();
    let props = GamesPageProps {
        catalog,
        on_pick: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamesPage>::with_props(props).render());
    assert!(html.contains("Learning Games"));
    assert!(html.contains("subject-math"));
    assert!(html.contains("subject-cs"));
    assert!(html.contains("Times Tables"));
    assert!(html.contains("game-primes"));
    assert!(html.contains("game-dijkstra"));
}

#[test]
fn quiz_page_shows_the_first_bank_question() {
    let (_, banks) = load_embedded();
    let props = QuizPageProps {
        selection: Selection::new("math", "number-sense", "primes", 1),
        questions: Rc::new(banks.questions_for("primes").to_vec()),
        code: ChallengeCode::roll(GameKind::Quiz, 7),
        on_exit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<QuizPage>::with_props(props).render());
    assert!(html.contains("Quiz: primes"));
    assert!(html.contains("Question 1 of 5"));
    assert!(html.contains("quiz-prompt"));
    assert!(html.contains("choice-0"));
    assert!(html.contains("Challenge code: QZ-"));
}

#[test]
fn quiz_page_falls_back_to_arithmetic_without_a_bank() {
    let props = QuizPageProps {
        selection: Selection::new("math", "arithmetic", "times-tables", 1),
        questions: Rc::new(Vec::new()),
        code: ChallengeCode::roll(GameKind::Quiz, 21),
        on_exit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<QuizPage>::with_props(props).render());
    assert!(html.contains("What is "));
    assert!(html.contains("Question 1 of 5"));
}

#[test]
fn sorting_page_starts_at_the_first_frame() {
    let props = SortingPageProps {
        selection: Selection::new("cs", "sorting", "bubble-sort", 1),
        code: ChallengeCode::roll(GameKind::Sorting, 9),
        on_exit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SortingPage>::with_props(props).render());
    assert!(html.contains("Sorting Lab: Bubble Sort"));
    assert!(html.contains("Step 1 of "));
    assert!(html.contains("sort-step"));
    assert!(html.contains("sort-skip"));
    assert!(html.contains("bar-0"));
    assert!(html.contains("Challenge code: SR-"));
}

#[test]
fn sorting_page_picks_the_algorithm_from_the_subtopic() {
    let props = SortingPageProps {
        selection: Selection::new("cs", "sorting", "merge-sort", 1),
        code: ChallengeCode::roll(GameKind::Sorting, 9),
        on_exit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SortingPage>::with_props(props).render());
    assert!(html.contains("Sorting Lab: Merge Sort"));
}

#[test]
fn graphs_page_renders_the_sample_network() {
    let props = GraphsPageProps {
        selection: Selection::new("cs", "graphs", "bfs", 1),
        on_exit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GraphsPage>::with_props(props).render());
    assert!(html.contains("Graph Lab: Breadth-First Search"));
    assert!(html.contains("node-A"));
    assert!(html.contains("node-H"));
    assert!(html.contains("Step 1 of "));
    assert!(html.contains("graph-step"));
}

#[test]
fn graphs_page_switches_to_dijkstra() {
    let props = GraphsPageProps {
        selection: Selection::new("cs", "graphs", "dijkstra", 1),
        on_exit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GraphsPage>::with_props(props).render());
    assert!(html.contains("Graph Lab: Dijkstra"));
}

#[test]
fn progress_page_shows_empty_state_and_reset() {
    let props = ProgressPageProps {
        on_reset: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ProgressPage>::with_props(props).render());
    assert!(html.contains("Your Progress"));
    assert!(html.contains("no-completions"));
    assert!(html.contains("reset-progress"));
    // The confirm step only appears after the first click.
    assert!(!html.contains("reset-confirm"));
}

#[test]
fn achievements_page_shows_all_badges_locked() {
    let html = block_on(LocalServerRenderer::<AchievementsPage>::new().render());
    assert!(html.contains("0 of 4 badges earned"));
    assert!(html.contains("Getting Started"));
    assert!(html.contains("Topic Tamer"));
    assert!(html.contains("Locked"));
    assert!(!html.contains("badge-earned"));
}

#[test]
fn not_found_renders_404() {
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("404"));
    assert!(html.contains("not-found-screen"));
}

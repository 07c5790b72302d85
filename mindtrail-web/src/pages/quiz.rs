use std::rc::Rc;

use mindtrail_game::quiz::ROUND_LEN;
use mindtrail_game::{
    AnswerOutcome, ChallengeCode, CompletionOutcome, Question, QuizSession, Selection,
    narrate_answer, narrate_completion,
};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct QuizPageProps {
    pub selection: Selection,
    /// Bank questions for this subtopic; empty means the procedural
    /// arithmetic generator supplies the round.
    pub questions: Rc<Vec<Question>>,
    pub code: ChallengeCode,
    pub on_exit: Callback<()>,
}

fn build_session(questions: &[Question], seed: u64) -> QuizSession {
    if questions.is_empty() {
        QuizSession::arithmetic(seed, ROUND_LEN)
    } else {
        QuizSession::from_bank(questions, seed, ROUND_LEN)
    }
}

#[function_component(QuizPage)]
pub fn quiz_page(props: &QuizPageProps) -> Html {
    let session = {
        let questions = props.questions.clone();
        let seed = props.code.seed();
        use_state(move || build_session(&questions, seed))
    };
    let last_answer = use_state(|| None::<AnswerOutcome>);
    let outcome = use_state(|| None::<CompletionOutcome>);

    // One game start per mounted session.
    {
        let selection = props.selection.clone();
        use_effect_with((), move |()| {
            crate::storage::tracker().record_game_start(&selection, &crate::dom::now_iso());
            crate::narrator::speak("Quiz time! Good luck.");
            || {}
        });
    }

    let on_answer = {
        let session = session.clone();
        let last_answer = last_answer.clone();
        let outcome = outcome.clone();
        let selection = props.selection.clone();
        Callback::from(move |choice: usize| {
            if outcome.is_some() {
                return;
            }
            let mut next = (*session).clone();
            let Some(answered) = next.answer(choice) else {
                return;
            };
            crate::narrator::speak(&narrate_answer(&answered));
            if answered.finished {
                let (correct, total) = next.score();
                let recorded = crate::storage::tracker().record_game_complete(
                    &selection,
                    correct,
                    total,
                    &crate::dom::now_iso(),
                );
                if let Some(recorded) = &recorded {
                    crate::narrator::speak(&narrate_completion(recorded));
                }
                outcome.set(recorded);
            }
            last_answer.set(Some(answered));
            session.set(next);
        })
    };

    let on_retry = {
        let session = session.clone();
        let last_answer = last_answer.clone();
        let outcome = outcome.clone();
        let questions = props.questions.clone();
        let seed = props.code.seed();
        let selection = props.selection.clone();
        Callback::from(move |_| {
            crate::storage::tracker().record_game_start(&selection, &crate::dom::now_iso());
            session.set(build_session(&questions, seed));
            last_answer.set(None);
            outcome.set(None);
        })
    };

    let share_code = props.code.to_string();
    let on_exit = {
        let on_exit = props.on_exit.clone();
        Callback::from(move |_| on_exit.emit(()))
    };

    html! {
        <div class="page page-quiz" data-testid="quiz-screen">
            <h2>{ format!("Quiz: {}", props.selection.subtopic) }</h2>
            <p class="share-code" data-testid="share-code">
                { format!("Challenge code: {share_code}") }
            </p>
            {
                if let Some(recorded) = outcome.as_ref() {
                    render_result(recorded, &session, on_retry, on_exit)
                } else {
                    render_round(&session, last_answer.as_ref(), on_answer, on_exit)
                }
            }
        </div>
    }
}

fn render_round(
    session: &QuizSession,
    last_answer: Option<&AnswerOutcome>,
    on_answer: Callback<usize>,
    on_exit: Callback<MouseEvent>,
) -> Html {
    let Some(question) = session.current() else {
        // Empty bank and zero-length round: nothing to play.
        return html! {
            <div class="quiz-empty" data-testid="quiz-empty">
                <p>{ "No questions available for this subtopic yet." }</p>
                <button onclick={on_exit}>{ "Back to games" }</button>
            </div>
        };
    };
    let (position, total) = session.round_position();
    let choices = question.choices.iter().enumerate().map(|(idx, choice)| {
        let on_answer = on_answer.clone();
        let onclick = Callback::from(move |_| on_answer.emit(idx));
        html! {
            <button class="quiz-choice" {onclick} data-testid={format!("choice-{idx}")}>
                { choice }
            </button>
        }
    });
    html! {
        <div class="quiz-round">
            <p class="quiz-position">{ format!("Question {position} of {total}") }</p>
            <p class="quiz-prompt" data-testid="quiz-prompt">{ &question.prompt }</p>
            <div class="quiz-choices">{ for choices }</div>
            { last_answer.map_or_else(Html::default, |answered| {
                let feedback = if answered.correct { "Correct!" } else { "Not quite." };
                html! { <p class="quiz-feedback" data-testid="quiz-feedback">{ feedback }</p> }
            }) }
            <button class="quiz-quit" onclick={on_exit}>{ "Quit round" }</button>
        </div>
    }
}

fn render_result(
    recorded: &CompletionOutcome,
    session: &QuizSession,
    on_retry: Callback<MouseEvent>,
    on_exit: Callback<MouseEvent>,
) -> Html {
    let (correct, total) = session.score();
    let badges = recorded.new_badges.iter().map(|badge| {
        html! { <li class="result-badge">{ badge }</li> }
    });
    html! {
        <div class="quiz-result" data-testid="quiz-result">
            <h3>{ "Round complete!" }</h3>
            <p data-testid="quiz-score">{ format!("Score: {correct} / {total}") }</p>
            <p>{ format!("XP earned: {}", recorded.xp_gained) }</p>
            { recorded.first_completion.then(|| html! {
                <p data-testid="quiz-first-completion">{ "New subtopic completed!" }</p>
            }) }
            <ul class="result-badges">{ for badges }</ul>
            <button onclick={on_retry} data-testid="quiz-retry">{ "Play again" }</button>
            <button onclick={on_exit} data-testid="quiz-exit">{ "Back to games" }</button>
        </div>
    }
}

use mindtrail_game::{
    ChallengeCode, CompletionOutcome, Selection, SortAlgorithm, SortFrame, narrate_completion,
    narrate_sort_frame, random_values, sorting::DEFAULT_ARRAY_LEN, trace_sort,
};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SortingPageProps {
    pub selection: Selection,
    pub code: ChallengeCode,
    pub on_exit: Callback<()>,
}

fn algorithm_for(subtopic: &str) -> SortAlgorithm {
    match subtopic {
        "bubble-sort" => SortAlgorithm::Bubble,
        "merge-sort" => SortAlgorithm::Merge,
        _ => SortAlgorithm::Quick,
    }
}

/// Sorting lab: step through a recorded trace one frame at a time.
/// Stepping all the way to the sorted array scores full marks; skipping
/// ahead scores only the frames actually watched.
#[function_component(SortingPage)]
pub fn sorting_page(props: &SortingPageProps) -> Html {
    let algorithm = algorithm_for(&props.selection.subtopic);
    let frames = {
        let seed = props.code.seed();
        use_memo((seed, algorithm), move |(seed, algorithm)| {
            trace_sort(&random_values(*seed, DEFAULT_ARRAY_LEN), *algorithm)
        })
    };
    let position = use_state(|| 0_usize);
    let outcome = use_state(|| None::<CompletionOutcome>);

    {
        let selection = props.selection.clone();
        use_effect_with((), move |()| {
            crate::storage::tracker().record_game_start(&selection, &crate::dom::now_iso());
            crate::narrator::speak("Let's sort! Step through the algorithm.");
            || {}
        });
    }

    let total = frames.len();
    let finish = {
        let outcome = outcome.clone();
        let selection = props.selection.clone();
        move |watched: usize| {
            if outcome.is_some() {
                return;
            }
            let watched = u32::try_from(watched).unwrap_or(u32::MAX);
            let total = u32::try_from(total).unwrap_or(u32::MAX);
            let recorded = crate::storage::tracker().record_game_complete(
                &selection,
                watched,
                total,
                &crate::dom::now_iso(),
            );
            if let Some(recorded) = &recorded {
                crate::narrator::speak(&narrate_completion(recorded));
            }
            outcome.set(recorded);
        }
    };

    let on_step = {
        let position = position.clone();
        let frames = frames.clone();
        let finish = finish.clone();
        Callback::from(move |_| {
            let next = (*position + 1).min(frames.len().saturating_sub(1));
            position.set(next);
            if let Some(frame) = frames.get(next) {
                crate::narrator::speak(&narrate_sort_frame(frame));
            }
            if next + 1 == frames.len() {
                finish(frames.len());
            }
        })
    };
    let on_skip = {
        let position = position.clone();
        let frames = frames.clone();
        let finish = finish.clone();
        Callback::from(move |_| {
            let watched = *position + 1;
            position.set(frames.len().saturating_sub(1));
            finish(watched);
        })
    };
    let on_exit = {
        let on_exit = props.on_exit.clone();
        Callback::from(move |_| on_exit.emit(()))
    };

    let frame = frames.get(*position);
    let share_code = props.code.to_string();

    html! {
        <div class="page page-sorting" data-testid="sorting-screen">
            <h2>{ format!("Sorting Lab: {}", algorithm.label()) }</h2>
            <p class="share-code" data-testid="share-code">
                { format!("Challenge code: {share_code}") }
            </p>
            { frame.map_or_else(Html::default, render_frame) }
            <p data-testid="sort-position">
                { format!("Step {} of {}", *position + 1, total) }
            </p>
            {
                if let Some(recorded) = outcome.as_ref() {
                    html! {
                        <div class="sort-result" data-testid="sort-result">
                            <p>{ format!("XP earned: {}", recorded.xp_gained) }</p>
                            { recorded.first_completion.then(|| html! {
                                <p>{ "New subtopic completed!" }</p>
                            }) }
                            <button onclick={on_exit}>{ "Back to games" }</button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="sort-controls">
                            <button onclick={on_step} data-testid="sort-step">{ "Step" }</button>
                            <button onclick={on_skip} data-testid="sort-skip">{ "Skip to end" }</button>
                            <button onclick={on_exit}>{ "Quit" }</button>
                        </div>
                    }
                }
            }
        </div>
    }
}

fn render_frame(frame: &SortFrame) -> Html {
    let bars = frame.values.iter().enumerate().map(|(idx, value)| {
        html! {
            <div
                class="sort-bar"
                style={format!("height: {}px", value * 2)}
                data-testid={format!("bar-{idx}")}
            >
                { value.to_string() }
            </div>
        }
    });
    html! {
        <div class="sort-frame">
            <p class="sort-narration">{ narrate_sort_frame(frame) }</p>
            <div class="sort-bars">{ for bars }</div>
        </div>
    }
}

use yew::prelude::*;

use crate::components::stats_bar::StatsBar;
use crate::hooks::use_progress;

#[derive(Properties, Clone, PartialEq)]
pub struct ProgressPageProps {
    pub on_reset: Callback<()>,
}

/// Full progress view with the reset control.
#[function_component(ProgressPage)]
pub fn progress_page(props: &ProgressPageProps) -> Html {
    let record = use_progress();
    let confirming = use_state(|| false);

    let on_reset_click = {
        let confirming = confirming.clone();
        Callback::from(move |_| confirming.set(true))
    };
    let on_confirm = {
        let confirming = confirming.clone();
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| {
            on_reset.emit(());
            confirming.set(false);
        })
    };
    let on_cancel = {
        let confirming = confirming.clone();
        Callback::from(move |_| confirming.set(false))
    };

    let completed = record.completed_subtopics.iter().map(|key| {
        html! { <li class="completed-key">{ key }</li> }
    });

    html! {
        <div class="page page-progress" data-testid="progress-screen">
            <h2>{ "Your Progress" }</h2>
            <StatsBar record={(*record).clone()} />
            { record.last_played_at.as_ref().map_or_else(Html::default, |ts| html! {
                <p data-testid="last-played">{ format!("Last played: {ts}") }</p>
            }) }
            <h3>{ "Completed subtopics" }</h3>
            {
                if record.completed_subtopics.is_empty() {
                    html! { <p data-testid="no-completions">{ "Nothing completed yet. Score 60% or better to complete a subtopic." }</p> }
                } else {
                    html! { <ul class="completed-list" data-testid="completed-list">{ for completed }</ul> }
                }
            }
            {
                if *confirming {
                    html! {
                        <div class="reset-confirm" data-testid="reset-confirm">
                            <p>{ "Clear all progress? This cannot be undone." }</p>
                            <button onclick={on_confirm} data-testid="reset-yes">{ "Yes, clear it" }</button>
                            <button onclick={on_cancel} data-testid="reset-no">{ "Keep my progress" }</button>
                        </div>
                    }
                } else {
                    html! {
                        <button class="reset-btn" onclick={on_reset_click} data-testid="reset-progress">
                            { "Reset progress" }
                        </button>
                    }
                }
            }
        </div>
    }
}

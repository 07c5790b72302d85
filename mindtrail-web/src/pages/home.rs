use yew::prelude::*;

use crate::components::stats_bar::StatsBar;
use crate::hooks::use_progress;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub on_load_challenge: Callback<String>,
}

/// Dashboard: live stats plus the challenge-code entry.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let record = use_progress();
    let code = use_state(String::new);

    let oninput = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target_dyn_into::<web_sys::HtmlInputElement>()
            {
                code.set(input.value());
            }
        })
    };
    let on_submit = {
        let code = code.clone();
        let on_load_challenge = props.on_load_challenge.clone();
        Callback::from(move |_| on_load_challenge.emit((*code).clone()))
    };

    let greeting = if record.games_played == 0 {
        "Welcome! Pick a game to start earning XP."
    } else {
        "Welcome back! Your progress is below."
    };

    html! {
        <div class="page page-home" data-testid="home-screen">
            <h2>{ "Dashboard" }</h2>
            <p class="home-greeting">{ greeting }</p>
            <StatsBar record={(*record).clone()} />
            { record.last_played_at.as_ref().map_or_else(Html::default, |ts| html! {
                <p class="home-last-played" data-testid="last-played">
                    { format!("Last played: {ts}") }
                </p>
            }) }
            <div class="challenge-entry">
                <label for="challenge-code">{ "Have a challenge code?" }</label>
                <input
                    id="challenge-code"
                    placeholder="QZ-PRIME-42"
                    value={(*code).clone()}
                    {oninput}
                    data-testid="challenge-input"
                />
                <button onclick={on_submit} data-testid="challenge-load">
                    { "Load challenge" }
                </button>
            </div>
        </div>
    }
}

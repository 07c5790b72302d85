#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::Home);

    if !*app_state.boot_ready {
        return html! {
            <div class="boot-screen" data-testid="boot-screen">
                <p>{ "Loading Mindtrail..." }</p>
            </div>
        };
    }

    let on_nav = {
        let navigator = navigator.clone();
        Callback::from(move |route: Route| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&route);
            }
        })
    };
    let on_toggle_voice = handlers::build_toggle_voice(&app_state);

    html! {
        <div class="app-shell">
            <crate::components::header::Header
                voice={*app_state.voice}
                on_toggle_voice={on_toggle_voice}
            />
            <div class="app-body">
                <crate::components::sidebar::Sidebar active={route} on_nav={on_nav} />
                <main class="app-main">
                    { render_page(&app_state, route, navigator) }
                </main>
            </div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn render_page(app_state: &state::AppState, route: Route, navigator: Option<Navigator>) -> Html {
    use std::rc::Rc;

    match route {
        Route::Home => {
            let on_load_challenge = handlers::build_load_challenge(app_state, navigator);
            html! { <crate::pages::home::HomePage {on_load_challenge} /> }
        }
        Route::Games | Route::NotFound => {
            let on_pick = handlers::build_pick_game(app_state, navigator);
            let catalog = (*app_state.catalog).clone();
            if matches!(route, Route::NotFound) {
                html! { <crate::pages::not_found::NotFound /> }
            } else {
                html! { <crate::pages::games::GamesPage {catalog} {on_pick} /> }
            }
        }
        Route::Quiz | Route::Sorting | Route::Graphs => {
            let Some(selection) = (*app_state.selection).clone() else {
                // Deep link without a picked game: back to the catalog.
                let on_pick = handlers::build_pick_game(app_state, navigator);
                let catalog = (*app_state.catalog).clone();
                return html! { <crate::pages::games::GamesPage {catalog} {on_pick} /> };
            };
            let on_exit = handlers::build_exit_game(app_state, navigator);
            let code = *app_state.challenge;
            match route {
                Route::Quiz => {
                    let questions =
                        Rc::new(app_state.banks.questions_for(&selection.subtopic).to_vec());
                    html! {
                        <crate::pages::quiz::QuizPage {selection} {questions} {code} {on_exit} />
                    }
                }
                Route::Sorting => html! {
                    <crate::pages::sorting::SortingPage {selection} {code} {on_exit} />
                },
                _ => html! {
                    <crate::pages::graphs::GraphsPage {selection} {on_exit} />
                },
            }
        }
        Route::Progress => {
            let on_reset = handlers::build_reset_progress();
            html! { <crate::pages::progress::ProgressPage {on_reset} /> }
        }
        Route::Achievements => html! { <crate::pages::achievements::AchievementsPage /> },
    }
}

use mindtrail_game::{CatalogData, GameKind, Selection};
use yew::prelude::*;

use crate::hooks::use_progress;

#[derive(Properties, Clone, PartialEq)]
pub struct GamesPageProps {
    pub catalog: CatalogData,
    pub on_pick: Callback<(Selection, GameKind)>,
}

/// Catalog grid: one card per subtopic, marked when already completed.
#[function_component(GamesPage)]
pub fn games_page(props: &GamesPageProps) -> Html {
    let record = use_progress();

    let subjects = props.catalog.subjects.iter().map(|subject| {
        let topics = subject.topics.iter().map(|topic| {
            let cards = topic.subtopics.iter().map(|subtopic| {
                let selection = Selection::new(&subject.id, &topic.id, &subtopic.id, 1);
                let done = record.is_completed(&selection.completion_key());
                let kind = subtopic.kind;
                let on_pick = props.on_pick.clone();
                let onclick =
                    Callback::from(move |_| on_pick.emit((selection.clone(), kind)));
                html! {
                    <button
                        class={if done { "game-card game-card-done" } else { "game-card" }}
                        {onclick}
                        data-testid={format!("game-{}", subtopic.id)}
                    >
                        <span class="game-name">{ &subtopic.name }</span>
                        <span class="game-kind">{ kind.label() }</span>
                        { done.then(|| html! {
                            <span class="game-done-mark">{ "Completed" }</span>
                        }) }
                    </button>
                }
            });
            html! {
                <section class="topic-section">
                    <h4>{ &topic.name }</h4>
                    <div class="game-grid">{ for cards }</div>
                </section>
            }
        });
        html! {
            <section class="subject-section" data-testid={format!("subject-{}", subject.id)}>
                <h3>{ &subject.name }</h3>
                { for topics }
            </section>
        }
    });

    html! {
        <div class="page page-games" data-testid="games-screen">
            <h2>{ "Learning Games" }</h2>
            { for subjects }
        </div>
    }
}

use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page page-not-found" data-testid="not-found-screen">
            <h2>{ "404" }</h2>
            <p>{ "That page wandered off the trail." }</p>
        </div>
    }
}

use yew::prelude::*;

use crate::hooks::use_progress;
use crate::router::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct SidebarProps {
    pub active: Route,
    pub on_nav: Callback<Route>,
}

/// Navigation rail. Shows live XP via the polling hook so scores earned
/// on a game screen show up here within one poll interval.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let record = use_progress();

    let items = Route::NAV.into_iter().map(|(route, label)| {
        let on_nav = props.on_nav.clone();
        let onclick = Callback::from(move |_| on_nav.emit(route));
        let class = if route == props.active {
            "nav-item nav-item-active"
        } else {
            "nav-item"
        };
        html! {
            <li>
                <button {class} {onclick} data-testid={format!("nav-{label}")}>
                    { label }
                </button>
            </li>
        }
    });

    html! {
        <nav class="sidebar" data-testid="sidebar">
            <ul class="nav-list">{ for items }</ul>
            <div class="sidebar-xp" data-testid="sidebar-xp">
                { format!("{} XP", record.xp) }
            </div>
        </nav>
    }
}

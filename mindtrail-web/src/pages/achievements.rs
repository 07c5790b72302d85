use yew::prelude::*;

use crate::components::badges::BadgeGrid;
use crate::hooks::use_progress;

/// Badge wall: every defined badge, earned or locked.
#[function_component(AchievementsPage)]
pub fn achievements_page() -> Html {
    let record = use_progress();
    html! {
        <div class="page page-achievements" data-testid="achievements-screen">
            <h2>{ "Achievements" }</h2>
            <p data-testid="badge-count">
                { format!("{} of {} badges earned", record.badges.len(), mindtrail_game::ALL_BADGES.len()) }
            </p>
            <BadgeGrid earned={record.badges.clone()} />
        </div>
    }
}

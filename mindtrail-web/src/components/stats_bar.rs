use mindtrail_game::ProgressRecord;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct StatsBarProps {
    pub record: ProgressRecord,
}

fn stat_chip(label: &str, value: String, testid: &str) -> Html {
    html! {
        <div class="stat-chip" data-testid={testid.to_string()}>
            <span class="stat-label">{ label.to_string() }</span>
            <span class="stat-value">{ value }</span>
        </div>
    }
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    let r = &props.record;
    html! {
        <div class="stats-bar" data-testid="stats-bar">
            { stat_chip("XP", r.xp.to_string(), "stat-xp") }
            { stat_chip("Games played", r.games_played.to_string(), "stat-games") }
            { stat_chip("Topics completed", r.topics_completed.to_string(), "stat-topics") }
            { stat_chip("Rewards", r.rewards.to_string(), "stat-rewards") }
            { stat_chip("Practice flags", r.punishments.to_string(), "stat-punishments") }
        </div>
    }
}

use mindtrail_game::ALL_BADGES;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BadgeGridProps {
    /// Badges actually earned, in grant order.
    pub earned: Vec<String>,
}

fn badge_hint(badge: &str) -> &'static str {
    match badge {
        "Getting Started" => "Play your first game.",
        "Quick Learner" => "Score 80% or better in one round.",
        "Game Explorer" => "Play five games.",
        "Topic Tamer" => "Complete three subtopics.",
        _ => "Keep playing to find out.",
    }
}

/// All defined badges with earned/locked state.
#[function_component(BadgeGrid)]
pub fn badge_grid(props: &BadgeGridProps) -> Html {
    let tiles = ALL_BADGES.into_iter().map(|badge| {
        let earned = props.earned.iter().any(|b| b == badge);
        let class = if earned {
            "badge-tile badge-earned"
        } else {
            "badge-tile badge-locked"
        };
        html! {
            <div {class} data-testid={format!("badge-{badge}")}>
                <span class="badge-name">{ badge }</span>
                <span class="badge-hint">{ badge_hint(badge) }</span>
                <span class="badge-state">{ if earned { "Earned" } else { "Locked" } }</span>
            </div>
        }
    });
    html! {
        <div class="badge-grid" data-testid="badge-grid">{ for tiles }</div>
    }
}

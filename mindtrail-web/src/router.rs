use mindtrail_game::GameKind;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/games")]
    Games,
    #[at("/quiz")]
    Quiz,
    #[at("/sorting")]
    Sorting,
    #[at("/graphs")]
    Graphs,
    #[at("/progress")]
    Progress,
    #[at("/achievements")]
    Achievements,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Game screen for a catalog entry's kind.
    #[must_use]
    pub const fn for_kind(kind: GameKind) -> Self {
        match kind {
            GameKind::Quiz => Self::Quiz,
            GameKind::Sorting => Self::Sorting,
            GameKind::Graph => Self::Graphs,
        }
    }

    /// Sidebar navigation entries in display order.
    pub const NAV: [(Self, &'static str); 4] = [
        (Self::Home, "Dashboard"),
        (Self::Games, "Games"),
        (Self::Progress, "Progress"),
        (Self::Achievements, "Achievements"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_game_kind_maps_to_a_game_route() {
        assert_eq!(Route::for_kind(GameKind::Quiz), Route::Quiz);
        assert_eq!(Route::for_kind(GameKind::Sorting), Route::Sorting);
        assert_eq!(Route::for_kind(GameKind::Graph), Route::Graphs);
    }

    #[test]
    fn nav_routes_are_distinct_pages() {
        for (route, label) in Route::NAV {
            assert!(!label.is_empty());
            assert!(!matches!(route, Route::NotFound));
        }
    }
}

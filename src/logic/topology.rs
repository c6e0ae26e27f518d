//! Static match graphs per bracket size.
//!
//! Each size has one table: where every match's winner goes, the traversal order used to
//! find the next match, the terminal match, and the slot plan used to lay entrants out.
//! Everything else looks the table up once instead of branching on the size.

use crate::models::Side::{Left as L, Right as R};
use crate::models::{BracketSize, MatchId, Side};

/// Destination of a match's winner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Route {
    pub to: MatchId,
    pub side: Side,
}

/// Match graph for one bracket size.
#[derive(Debug)]
pub struct Topology {
    pub size: BracketSize,
    routes: &'static [(MatchId, Route)],
    order: &'static [MatchId],
    terminal: MatchId,
    /// `slot_plan[i]` is where entrant `i` is placed when building.
    slot_plan: &'static [(MatchId, Side)],
    /// Bye markers appended after the real entrants.
    byes: usize,
}

const fn to(to: MatchId, side: Side) -> Route {
    Route { to, side }
}

static EIGHT: Topology = Topology {
    size: BracketSize::Eight,
    routes: &[
        (1, to(5, L)),
        (2, to(5, R)),
        (3, to(6, L)),
        (4, to(6, R)),
        (5, to(7, L)),
        (6, to(7, R)),
    ],
    order: &[1, 2, 3, 4, 5, 6, 7],
    terminal: 7,
    slot_plan: &[(1, L), (1, R), (2, L), (2, R), (3, L), (3, R), (4, L), (4, R)],
    byes: 0,
};

static TEN: Topology = Topology {
    size: BracketSize::Ten,
    routes: &[
        (1, to(3, L)),
        (2, to(4, L)),
        (3, to(7, L)),
        (4, to(7, R)),
        (5, to(8, L)),
        (6, to(8, R)),
        (7, to(9, L)),
        (8, to(9, R)),
    ],
    order: &[1, 2, 3, 4, 5, 6, 7, 8, 9],
    terminal: 9,
    slot_plan: &[
        (1, L),
        (1, R),
        (2, L),
        (2, R),
        (3, R),
        (4, R),
        (5, L),
        (5, R),
        (6, L),
        (6, R),
    ],
    byes: 0,
};

const PLAY_IN_ROUTES: &[(MatchId, Route)] = &[
    (1, to(3, L)),
    (2, to(4, L)),
    (3, to(7, L)),
    (4, to(7, R)),
    (5, to(8, L)),
    (6, to(8, R)),
    (7, to(9, L)),
    (8, to(9, R)),
    (10, to(5, L)),
    (11, to(6, L)),
];

const PLAY_IN_ORDER: &[MatchId] = &[1, 2, 10, 11, 3, 4, 5, 6, 7, 8, 9];

// The appended bye (entrant 11) sits opposite entrant 6 in play-in match 11, so it is
// resolved straight after seeding.
static ELEVEN: Topology = Topology {
    size: BracketSize::Eleven,
    routes: PLAY_IN_ROUTES,
    order: PLAY_IN_ORDER,
    terminal: 9,
    slot_plan: &[
        (1, L),
        (1, R),
        (2, L),
        (2, R),
        (10, L),
        (10, R),
        (11, L),
        (3, R),
        (4, R),
        (5, R),
        (6, R),
        (11, R),
    ],
    byes: 1,
};

static TWELVE: Topology = Topology {
    size: BracketSize::Twelve,
    routes: PLAY_IN_ROUTES,
    order: PLAY_IN_ORDER,
    terminal: 9,
    slot_plan: &[
        (1, L),
        (1, R),
        (2, L),
        (2, R),
        (10, L),
        (10, R),
        (11, L),
        (11, R),
        (3, R),
        (4, R),
        (5, R),
        (6, R),
    ],
    byes: 0,
};

impl Topology {
    pub fn for_size(size: BracketSize) -> &'static Topology {
        match size {
            BracketSize::Eight => &EIGHT,
            BracketSize::Ten => &TEN,
            BracketSize::Eleven => &ELEVEN,
            BracketSize::Twelve => &TWELVE,
        }
    }

    /// Where the winner of `id` goes. `None` for the terminal match and unknown ids.
    pub fn route(&self, id: MatchId) -> Option<Route> {
        self.routes
            .iter()
            .find(|(from, _)| *from == id)
            .map(|(_, route)| *route)
    }

    /// Canonical order in which matches become current.
    pub fn order(&self) -> &'static [MatchId] {
        self.order
    }

    pub fn terminal(&self) -> MatchId {
        self.terminal
    }

    pub fn contains(&self, id: MatchId) -> bool {
        self.order.contains(&id)
    }

    pub fn total_matches(&self) -> usize {
        self.order.len()
    }

    pub fn slot_plan(&self) -> &'static [(MatchId, Side)] {
        self.slot_plan
    }

    pub fn byes(&self) -> usize {
        self.byes
    }

    /// 1-based position of `id` in the traversal order.
    pub fn position(&self, id: MatchId) -> Option<usize> {
        self.order.iter().position(|m| *m == id).map(|i| i + 1)
    }

    /// Display name of the round `id` belongs to.
    pub fn round_name(&self, id: MatchId) -> &'static str {
        if id == self.terminal {
            return "Final";
        }
        match self.size {
            BracketSize::Eight => match id {
                1..=4 => "Quarter Final",
                _ => "Semi Final",
            },
            _ => match id {
                1 | 2 | 10 | 11 => "Play-In",
                3..=6 => "Quarter Final",
                _ => "Semi Final",
            },
        }
    }
}

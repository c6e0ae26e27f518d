//! Bracket sizes, match slots, and the live bracket instance.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a match within a bracket size's topology (1-based).
pub type MatchId = u8;

/// Supported entrant counts. Fixed once a bracket is seeded.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BracketSize {
    Eight,
    #[default]
    Ten,
    Eleven,
    Twelve,
}

impl BracketSize {
    pub const ALL: [BracketSize; 4] = [
        BracketSize::Eight,
        BracketSize::Ten,
        BracketSize::Eleven,
        BracketSize::Twelve,
    ];

    /// Number of real entrants this size draws from the pool.
    pub fn entrants(self) -> usize {
        match self {
            BracketSize::Eight => 8,
            BracketSize::Ten => 10,
            BracketSize::Eleven => 11,
            BracketSize::Twelve => 12,
        }
    }
}

impl From<BracketSize> for u8 {
    fn from(size: BracketSize) -> u8 {
        size.entrants() as u8
    }
}

impl TryFrom<u8> for BracketSize {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            8 => Ok(BracketSize::Eight),
            10 => Ok(BracketSize::Ten),
            11 => Ok(BracketSize::Eleven),
            12 => Ok(BracketSize::Twelve),
            other => Err(format!("unsupported bracket size {other} (expected 8, 10, 11 or 12)")),
        }
    }
}

impl std::fmt::Display for BracketSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entrants())
    }
}

/// Which of the two contender positions of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Occupant of one contender position.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contender {
    Entrant(String),
    /// Synthetic placeholder that always loses without a pick.
    Bye,
}

impl Contender {
    pub fn entrant(name: impl Into<String>) -> Self {
        Contender::Entrant(name.into())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Contender::Entrant(name) => Some(name),
            Contender::Bye => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Contender::Bye)
    }
}

/// One match of the bracket.
///
/// Only the terminal match ever becomes `Decided`; every other match keeps its two
/// positions and records progress by writing the winner into its destination.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum MatchSlot {
    Open {
        left: Option<Contender>,
        right: Option<Contender>,
    },
    Decided {
        winner: String,
    },
}

impl Default for MatchSlot {
    fn default() -> Self {
        MatchSlot::Open {
            left: None,
            right: None,
        }
    }
}

impl MatchSlot {
    pub fn new(left: Option<Contender>, right: Option<Contender>) -> Self {
        MatchSlot::Open { left, right }
    }

    pub fn contender(&self, side: Side) -> Option<&Contender> {
        match self {
            MatchSlot::Open { left, right } => match side {
                Side::Left => left.as_ref(),
                Side::Right => right.as_ref(),
            },
            MatchSlot::Decided { .. } => None,
        }
    }

    /// Write a contender into one position. A decided slot is reopened with only that position set.
    pub fn set(&mut self, side: Side, contender: Contender) {
        if let MatchSlot::Decided { .. } = self {
            *self = MatchSlot::default();
        }
        if let MatchSlot::Open { left, right } = self {
            match side {
                Side::Left => *left = Some(contender),
                Side::Right => *right = Some(contender),
            }
        }
    }

    /// Both positions, when both are filled.
    pub fn pair(&self) -> Option<(&Contender, &Contender)> {
        match self {
            MatchSlot::Open {
                left: Some(a),
                right: Some(b),
            } => Some((a, b)),
            _ => None,
        }
    }

    pub fn has_bye(&self) -> bool {
        match self {
            MatchSlot::Open { left, right } => {
                left.as_ref().is_some_and(Contender::is_bye)
                    || right.as_ref().is_some_and(Contender::is_bye)
            }
            MatchSlot::Decided { .. } => false,
        }
    }

    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchSlot::Decided { winner } => Some(winner),
            MatchSlot::Open { .. } => None,
        }
    }
}

/// Live state of one playthrough. Replaced, never partially reused.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketInstance {
    pub size: BracketSize,
    pub matches: BTreeMap<MatchId, MatchSlot>,
}

impl BracketInstance {
    pub fn slot(&self, id: MatchId) -> Option<&MatchSlot> {
        self.matches.get(&id)
    }
}

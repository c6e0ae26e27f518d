//! Match engine: push winners through the topology, auto-resolve byes, and find the
//! current match and the champion.
//!
//! All operations take a snapshot and return a new one; the input is never mutated.

use crate::logic::topology::Topology;
use crate::models::{BracketError, BracketInstance, Contender, MatchId, MatchSlot};

/// Result of pushing one winner onward.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Advance {
    pub instance: BracketInstance,
    /// Set when the pushed match was the terminal one.
    pub champion: Option<String>,
}

/// Result of auto-resolving byes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ByeResolution {
    pub instance: BracketInstance,
    /// Contenders advanced without a pick, in the order they were advanced.
    pub auto_winners: Vec<String>,
}

/// Result of a user pick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PickOutcome {
    pub instance: BracketInstance,
    pub champion: Option<String>,
    pub auto_advanced: Vec<String>,
}

/// Write `winner` of `match_id` into its destination.
///
/// The terminal match instead becomes `Decided` and `winner` is reported as champion.
/// A non-terminal id with no route is left as-is (no propagation).
pub fn push_winner(instance: &BracketInstance, match_id: MatchId, winner: &str) -> Advance {
    let topology = Topology::for_size(instance.size);
    let mut next = instance.clone();

    if match_id == topology.terminal() {
        next.matches.insert(
            match_id,
            MatchSlot::Decided {
                winner: winner.to_string(),
            },
        );
        return Advance {
            instance: next,
            champion: Some(winner.to_string()),
        };
    }

    if let Some(route) = topology.route(match_id) {
        next.matches
            .entry(route.to)
            .or_default()
            .set(route.side, Contender::entrant(winner));
    }

    Advance {
        instance: next,
        champion: None,
    }
}

/// True when `contender` already sits in the position `match_id`'s winner goes to.
fn has_advanced(instance: &BracketInstance, match_id: MatchId, contender: &Contender) -> bool {
    let topology = Topology::for_size(instance.size);
    let Some(route) = topology.route(match_id) else {
        return false;
    };
    instance
        .slot(route.to)
        .and_then(|slot| slot.contender(route.side))
        .is_some_and(|c| c == contender)
}

/// First match in traversal order where a real contender faces a bye and has not moved on.
fn find_auto_advance(instance: &BracketInstance) -> Option<(MatchId, String)> {
    let topology = Topology::for_size(instance.size);
    for &id in topology.order() {
        let Some((a, b)) = instance.slot(id).and_then(MatchSlot::pair) else {
            continue;
        };
        let survivor = match (a, b) {
            (Contender::Bye, Contender::Entrant(_)) => b,
            (Contender::Entrant(_), Contender::Bye) => a,
            _ => continue,
        };
        if !has_advanced(instance, id, survivor) {
            if let Some(name) = survivor.name() {
                return Some((id, name.to_string()));
            }
        }
    }
    None
}

/// Advance every contender paired with a bye, earliest in traversal order first, rescanning
/// from the top after each one. Stops when nothing is left or a champion is produced.
pub fn resolve_byes(instance: &BracketInstance) -> ByeResolution {
    let mut snapshot = instance.clone();
    let mut auto_winners = Vec::new();

    while let Some((match_id, winner)) = find_auto_advance(&snapshot) {
        let advance = push_winner(&snapshot, match_id, &winner);
        log::debug!("Auto-advanced {} from match {}", winner, match_id);
        auto_winners.push(winner);
        snapshot = advance.instance;
        if advance.champion.is_some() {
            break;
        }
    }

    ByeResolution {
        instance: snapshot,
        auto_winners,
    }
}

/// A match waiting on a user pick: two real contenders, neither moved on yet.
fn is_pickable(instance: &BracketInstance, id: MatchId) -> bool {
    let topology = Topology::for_size(instance.size);
    let Some((a, b)) = instance.slot(id).and_then(MatchSlot::pair) else {
        return false;
    };
    if a.is_bye() || b.is_bye() {
        return false;
    }
    if topology.route(id).is_none() {
        return true;
    }
    !has_advanced(instance, id, a) && !has_advanced(instance, id, b)
}

/// The match the user should pick next, or `None` while waiting or once decided.
pub fn current_match(instance: &BracketInstance) -> Option<MatchId> {
    if champion(instance).is_some() {
        return None;
    }
    Topology::for_size(instance.size)
        .order()
        .iter()
        .copied()
        .find(|&id| is_pickable(instance, id))
}

/// Sole occupant of the decided terminal match.
pub fn champion(instance: &BracketInstance) -> Option<&str> {
    let terminal = Topology::for_size(instance.size).terminal();
    instance.slot(terminal).and_then(MatchSlot::winner)
}

/// Apply a user pick: push the winner, then auto-resolve any byes it uncovered.
pub fn pick(
    instance: &BracketInstance,
    match_id: MatchId,
    winner: &str,
) -> Result<PickOutcome, BracketError> {
    let topology = Topology::for_size(instance.size);
    if !topology.contains(match_id) {
        return Err(BracketError::UnknownMatch(match_id));
    }
    if champion(instance).is_some() {
        return Err(BracketError::AlreadyDecided);
    }
    if !is_pickable(instance, match_id) {
        return Err(BracketError::MatchNotReady(match_id));
    }
    let in_match = instance
        .slot(match_id)
        .and_then(MatchSlot::pair)
        .is_some_and(|(a, b)| a.name() == Some(winner) || b.name() == Some(winner));
    if !in_match {
        return Err(BracketError::NotAContender {
            match_id,
            name: winner.to_string(),
        });
    }

    let advance = push_winner(instance, match_id, winner);
    if advance.champion.is_some() {
        return Ok(PickOutcome {
            instance: advance.instance,
            champion: advance.champion,
            auto_advanced: Vec::new(),
        });
    }

    let resolved = resolve_byes(&advance.instance);
    let decided = champion(&resolved.instance).map(str::to_string);
    Ok(PickOutcome {
        instance: resolved.instance,
        champion: decided,
        auto_advanced: resolved.auto_winners,
    })
}

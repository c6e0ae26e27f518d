//! Bracket builder: lay an ordered entrant list onto a size's slot plan.

use crate::logic::topology::Topology;
use crate::models::{BracketInstance, BracketSize, Contender, MatchSlot};
use std::collections::BTreeMap;

/// Turn drawn names into contenders, appending the bye markers the size needs.
pub fn with_byes(size: BracketSize, entrants: Vec<String>) -> Vec<Contender> {
    let byes = Topology::for_size(size).byes();
    entrants
        .into_iter()
        .map(Contender::Entrant)
        .chain(std::iter::repeat(Contender::Bye).take(byes))
        .collect()
}

/// Build the initial match state: every topology match starts empty, then `entrants[i]`
/// is written into the i-th slot of the plan. Unplanned entrants are ignored; unfilled
/// slots stay empty until a winner cascades into them.
pub fn build(size: BracketSize, entrants: Vec<Contender>) -> BracketInstance {
    let topology = Topology::for_size(size);
    let mut matches: BTreeMap<_, _> = topology
        .order()
        .iter()
        .map(|id| (*id, MatchSlot::default()))
        .collect();

    for (contender, (match_id, side)) in entrants.into_iter().zip(topology.slot_plan()) {
        if let Some(slot) = matches.get_mut(match_id) {
            slot.set(*side, contender);
        }
    }

    BracketInstance { size, matches }
}

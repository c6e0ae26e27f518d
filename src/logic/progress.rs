//! Labels shown alongside a bracket: round, progress, and the status line.

use crate::logic::engine::{champion, current_match, PickOutcome};
use crate::logic::topology::Topology;
use crate::models::BracketInstance;
use serde::Serialize;

/// Round and progress labels for the current state of a bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Progress {
    pub round_label: String,
    pub progress_label: String,
}

pub fn progress(instance: &BracketInstance) -> Progress {
    let topology = Topology::for_size(instance.size);
    if champion(instance).is_some() {
        return Progress {
            round_label: "Champion".to_string(),
            progress_label: "Done".to_string(),
        };
    }
    match current_match(instance) {
        Some(id) => Progress {
            round_label: topology.round_name(id).to_string(),
            progress_label: format!(
                "Match {} of {}",
                topology.position(id).unwrap_or_default(),
                topology.total_matches()
            ),
        },
        None => Progress {
            round_label: "Waiting…".to_string(),
            progress_label: "All set".to_string(),
        },
    }
}

fn champion_line(name: &str) -> String {
    format!("🏆 {} wins it all!", name)
}

/// Status after seeding (byes may already have produced a champion).
pub fn seeded_status(instance: &BracketInstance) -> String {
    match champion(instance) {
        Some(name) => champion_line(name),
        None => "Ready.".to_string(),
    }
}

impl PickOutcome {
    /// e.g. `Picked Mars → Auto-advanced Twix`.
    pub fn status_line(&self, picked: &str) -> String {
        if let Some(name) = &self.champion {
            return champion_line(name);
        }
        std::iter::once(format!("Picked {}", picked))
            .chain(self.auto_advanced.iter().map(|name| format!("Auto-advanced {}", name)))
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

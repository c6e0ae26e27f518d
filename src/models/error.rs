//! Errors raised while validating, seeding, or playing a bracket.

use crate::models::bracket::MatchId;

/// Errors that can occur during bracket operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Fewer non-blank option lines than the bracket size needs.
    TooFewOptions { required: usize, provided: usize },
    /// Bracket name is blank.
    MissingName,
    /// The same option appears twice.
    DuplicateOption(String),
    /// More than two must-start seeds.
    TooManyMustStart { max: usize, selected: usize },
    /// A must-start seed is not one of the options.
    MustStartNotInOptions(String),
    /// Pool cannot fill the bracket.
    InsufficientOptions { required: usize, available: usize },
    /// Pool has no options at all.
    EmptyPool,
    /// Match id not part of this bracket's topology.
    UnknownMatch(MatchId),
    /// Match is not waiting on a pick (not fully filled, contains a bye, or already played).
    MatchNotReady(MatchId),
    /// Picked winner is not one of the match's two contenders.
    NotAContender { match_id: MatchId, name: String },
    /// Bracket already has a champion.
    AlreadyDecided,
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::TooFewOptions { required, provided } => {
                write!(f, "Please enter at least {} options, one per line (got {})", required, provided)
            }
            BracketError::MissingName => write!(f, "Please enter a bracket name"),
            BracketError::DuplicateOption(name) => write!(f, "Option \"{}\" is listed more than once", name),
            BracketError::TooManyMustStart { max, selected } => {
                write!(f, "At most {} options can be marked must-start (selected {})", max, selected)
            }
            BracketError::MustStartNotInOptions(name) => {
                write!(f, "Must-start option \"{}\" is not in the option list", name)
            }
            BracketError::InsufficientOptions { required, available } => {
                write!(f, "Need {} options to seed this bracket but only {} are available", required, available)
            }
            BracketError::EmptyPool => write!(f, "Bracket has no options to seed from"),
            BracketError::UnknownMatch(id) => write!(f, "Match {} does not exist in this bracket", id),
            BracketError::MatchNotReady(id) => write!(f, "Match {} is not waiting on a pick", id),
            BracketError::NotAContender { match_id, name } => {
                write!(f, "\"{}\" is not playing in match {}", name, match_id)
            }
            BracketError::AlreadyDecided => write!(f, "Bracket already has a champion"),
        }
    }
}

impl std::error::Error for BracketError {}

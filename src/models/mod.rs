//! Data structures for the bracket picker: sizes, matches, definitions, errors.

mod bracket;
mod builtins;
mod definition;
mod error;

pub use bracket::{BracketInstance, BracketSize, Contender, MatchId, MatchSlot, Side};
pub use builtins::{built_in, BUILT_IN_BRACKETS};
pub use definition::{BracketDefinition, BuiltInBracket, CustomBracketDefinition};
pub use error::BracketError;

//! Bracket picker: library with models, bracket logic, and custom bracket stores.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    admin_listing, build, category_options, champion, current_match, pick, progress, push_winner,
    resolve_byes, resolve_definition, seed, seed_definition, seeded_status, select_entrants,
    with_byes, CustomBracketDraft, MustStartSelection, PickOutcome, RandomSource, SeededBracket,
    Topology,
};
pub use models::{
    BracketDefinition, BracketError, BracketInstance, BracketSize, BuiltInBracket, Contender,
    CustomBracketDefinition, MatchId, MatchSlot, Side, BUILT_IN_BRACKETS,
};
pub use store::{
    custom_definitions_or_empty, CustomBracketStore, JsonFileStore, MemoryStore, StoreError,
    TieredStore,
};

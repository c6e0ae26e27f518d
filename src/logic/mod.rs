//! Bracket business logic: topology, seeding, building, match engine, validation, catalog.

mod builder;
mod catalog;
mod engine;
mod progress;
mod seeding;
mod topology;
mod validate;

pub use builder::{build, with_byes};
pub use catalog::{
    admin_listing, category_options, resolve_definition, seed, seed_definition, BracketListing,
    CategoryOption, ListingKind, SeededBracket,
};
pub use engine::{
    champion, current_match, pick, push_winner, resolve_byes, Advance, ByeResolution, PickOutcome,
};
pub use progress::{progress, seeded_status, Progress};
pub use seeding::{select_entrants, RandomSource};
pub use topology::{Route, Topology};
pub use validate::{
    generate_bracket_id, parse_option_lines, validate_must_start, validate_name, validate_options,
    CustomBracketDraft, MustStartSelection, MAX_MUST_START,
};

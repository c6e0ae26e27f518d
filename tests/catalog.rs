//! Integration tests for category resolution, overrides, and seeding.

use bracket_picker::logic::{admin_listing, category_options, ListingKind};
use bracket_picker::{
    current_match, resolve_definition, seed, BracketDefinition, BracketError, BracketSize, Contender,
    CustomBracketDefinition, CustomBracketStore, MatchSlot, MemoryStore, BUILT_IN_BRACKETS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn custom(id: &str, name: &str, size: BracketSize, options: usize, must_start: &[&str]) -> CustomBracketDefinition {
    CustomBracketDefinition {
        id: id.to_string(),
        name: name.to_string(),
        size,
        options: (0..options).map(|i| format!("C{i}")).collect(),
        must_start: must_start.iter().map(|s| s.to_string()).collect(),
        updated_at: None,
    }
}

fn left_of(slot: Option<&MatchSlot>) -> Option<&Contender> {
    slot.and_then(|s| s.contender(bracket_picker::Side::Left))
}

#[test]
fn built_in_pools_can_fill_their_brackets() {
    for b in BUILT_IN_BRACKETS.iter() {
        assert!(b.options.len() >= b.size.entrants(), "{} is short", b.key);
        assert!(b.must_start.len() <= 2);
        assert!(b.must_start.iter().all(|m| b.options.contains(m)), "{} must-start not in pool", b.key);
    }
}

#[test]
fn unknown_keys_fall_back_to_the_first_built_in() {
    assert_eq!(resolve_definition("nope", &[]).key(), "fizzy");
    assert_eq!(resolve_definition("custom-gone", &[]).key(), "fizzy");
    assert_eq!(resolve_definition("gks", &[]).size(), BracketSize::Twelve);
}

#[test]
fn override_wins_and_deleting_it_restores_the_built_in() {
    let original: Vec<String> = BUILT_IN_BRACKETS[1].options.iter().map(|s| s.to_string()).collect();
    assert_eq!(BUILT_IN_BRACKETS[1].key, "choc");

    let mut store = MemoryStore::new();
    store
        .upsert(custom("choc", "My Chocolate", BracketSize::Eight, 8, &[]))
        .unwrap();

    let defs = store.list().unwrap();
    match resolve_definition("choc", &defs) {
        BracketDefinition::Custom(c) => assert_eq!(c.name, "My Chocolate"),
        other => panic!("expected override, got {other:?}"),
    }
    let seeded = seed("choc", &defs, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(seeded.title, "My Chocolate");
    assert_eq!(seeded.instance.size, BracketSize::Eight);

    store.delete("choc").unwrap();
    let restored = resolve_definition("choc", &store.list().unwrap());
    assert!(matches!(restored, BracketDefinition::BuiltIn(_)));
    assert_eq!(restored.pool(), original);
    assert_eq!(restored.size(), BracketSize::Ten);
}

#[test]
fn category_options_relabel_overrides_and_append_customs() {
    let defs = vec![
        custom("custom-1", "Crisps", BracketSize::Eight, 8, &[]),
        custom("pop", "Pop Icons", BracketSize::Ten, 10, &[]),
    ];
    let options = category_options(&defs);
    assert_eq!(options.len(), BUILT_IN_BRACKETS.len() + 1);
    assert_eq!(options[0].value, "fizzy");
    let pop = options.iter().find(|o| o.value == "pop").unwrap();
    assert_eq!(pop.label, "Pop Icons");
    assert_eq!(options.last().unwrap().value, "custom-1");
}

#[test]
fn admin_listing_marks_overrides() {
    let defs = vec![
        custom("pop", "Pop Icons", BracketSize::Ten, 10, &[]),
        custom("custom-1", "Crisps", BracketSize::Eight, 8, &[]),
    ];
    let listing = admin_listing(&defs);
    assert_eq!(listing.len(), BUILT_IN_BRACKETS.len() + 1);
    assert_eq!(listing.iter().filter(|l| l.id == "pop").count(), 1);
    assert_eq!(listing.iter().find(|l| l.id == "pop").unwrap().kind, ListingKind::Override);
    assert_eq!(listing.iter().find(|l| l.id == "custom-1").unwrap().kind, ListingKind::Custom);
    assert_eq!(listing.iter().find(|l| l.id == "fizzy").unwrap().kind, ListingKind::BuiltIn);
}

#[test]
fn built_in_ten_describes_its_draw() {
    let seeded = seed("fizzy", &[], &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(seeded.instance.size, BracketSize::Ten);
    assert_eq!(seeded.title, "Top 10 Bracket");
    assert_eq!(seeded.pool_description, "Using 10 of 16");
    assert!(seeded.auto_advanced.is_empty());
    assert_eq!(current_match(&seeded.instance), Some(1));
}

#[test]
fn guy_seeds_eleven_with_tall_guy_first_and_one_bye_resolved() {
    for s in 0..10 {
        let seeded = seed("guy", &[], &mut StdRng::seed_from_u64(s)).unwrap();
        assert_eq!(seeded.instance.size, BracketSize::Eleven);
        assert_eq!(seeded.pool_description, "Using all 11");
        assert_eq!(left_of(seeded.instance.slot(1)), Some(&Contender::entrant("Tall Guy")));
        assert_eq!(seeded.auto_advanced.len(), 1);
        assert_eq!(current_match(&seeded.instance), Some(1));
    }
}

#[test]
fn two_must_start_seeds_meet_in_the_first_match() {
    for s in 0..10 {
        let seeded = seed("matters", &[], &mut StdRng::seed_from_u64(s)).unwrap();
        assert_eq!(
            seeded.instance.slot(1),
            Some(&MatchSlot::new(
                Some(Contender::entrant("Looks 👀")),
                Some(Contender::entrant("Personality 💬"))
            ))
        );
    }
}

#[test]
fn custom_ten_with_one_must_start_plays_a_normal_first_match() {
    let defs = vec![custom("custom-x", "X first", BracketSize::Ten, 12, &["C7"])];
    for s in 0..10 {
        let seeded = seed("custom-x", &defs, &mut StdRng::seed_from_u64(s)).unwrap();
        assert_eq!(left_of(seeded.instance.slot(1)), Some(&Contender::entrant("C7")));
        assert!(seeded.auto_advanced.is_empty());
        assert_eq!(current_match(&seeded.instance), Some(1));
        assert_eq!(seeded.pool_description, "Using 10 of 12");
    }
}

#[test]
fn short_custom_pool_is_rejected_at_seeding() {
    let defs = vec![
        custom("custom-short", "Short", BracketSize::Twelve, 8, &[]),
        custom("custom-empty", "Empty", BracketSize::Eight, 0, &[]),
    ];
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        seed("custom-short", &defs, &mut rng),
        Err(BracketError::InsufficientOptions { required: 12, available: 8 })
    );
    assert_eq!(seed("custom-empty", &defs, &mut rng), Err(BracketError::EmptyPool));
}

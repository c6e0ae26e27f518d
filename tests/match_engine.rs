//! Integration tests for the match engine: pushing winners, byes, current match, champion.

use bracket_picker::{
    build, champion, current_match, pick, progress, push_winner, resolve_byes, seeded_status,
    with_byes, BracketError, BracketInstance, BracketSize, Contender, MatchSlot, Topology,
};

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("E{i}")).collect()
}

fn e(name: &str) -> Option<Contender> {
    Some(Contender::entrant(name))
}

fn seeded(size: BracketSize) -> BracketInstance {
    let instance = build(size, with_byes(size, names(size.entrants())));
    resolve_byes(&instance).instance
}

/// Pick until no match is current, always taking the left (or right) contender.
/// Returns the final instance and the number of user picks made.
fn play_out(mut instance: BracketInstance, take_left: bool) -> (BracketInstance, usize) {
    let mut picks = 0;
    while let Some(id) = current_match(&instance) {
        let slot = instance.slot(id).unwrap();
        assert!(!slot.has_bye(), "match {id} became current while holding a bye");
        let (a, b) = slot.pair().unwrap();
        let winner = (if take_left { a } else { b }).name().unwrap().to_string();
        instance = pick(&instance, id, &winner).unwrap().instance;
        picks += 1;
        assert!(picks <= 11, "bracket never finished");
    }
    (instance, picks)
}

#[test]
fn eight_builds_four_first_round_matches() {
    let letters: Vec<String> = "ABCDEFGH".chars().map(|c| c.to_string()).collect();
    let b = build(BracketSize::Eight, with_byes(BracketSize::Eight, letters));
    assert_eq!(b.slot(1), Some(&MatchSlot::new(e("A"), e("B"))));
    assert_eq!(b.slot(2), Some(&MatchSlot::new(e("C"), e("D"))));
    assert_eq!(b.slot(3), Some(&MatchSlot::new(e("E"), e("F"))));
    assert_eq!(b.slot(4), Some(&MatchSlot::new(e("G"), e("H"))));
    for id in 5..=7 {
        assert_eq!(b.slot(id), Some(&MatchSlot::default()));
    }
    assert_eq!(b.matches.len(), 7);
}

#[test]
fn eight_cascades_to_a_champion() {
    let letters: Vec<String> = "ABCDEFGH".chars().map(|c| c.to_string()).collect();
    let mut b = build(BracketSize::Eight, with_byes(BracketSize::Eight, letters));
    assert_eq!(current_match(&b), Some(1));

    for (id, winner) in [(1, "A"), (2, "D"), (3, "E"), (4, "H")] {
        assert_eq!(current_match(&b), Some(id));
        b = pick(&b, id, winner).unwrap().instance;
    }
    assert_eq!(b.slot(5), Some(&MatchSlot::new(e("A"), e("D"))));
    assert_eq!(b.slot(6), Some(&MatchSlot::new(e("E"), e("H"))));

    b = pick(&b, 5, "D").unwrap().instance;
    b = pick(&b, 6, "E").unwrap().instance;
    assert_eq!(b.slot(7), Some(&MatchSlot::new(e("D"), e("E"))));
    assert_eq!(current_match(&b), Some(7));

    let outcome = pick(&b, 7, "E").unwrap();
    assert_eq!(outcome.champion.as_deref(), Some("E"));
    assert_eq!(champion(&outcome.instance), Some("E"));
    assert_eq!(current_match(&outcome.instance), None);
}

#[test]
fn push_winner_on_terminal_reports_champion() {
    let b = seeded(BracketSize::Eight);
    let advance = push_winner(&b, 7, "Z");
    assert_eq!(advance.champion.as_deref(), Some("Z"));
    assert_eq!(
        advance.instance.slot(7),
        Some(&MatchSlot::Decided { winner: "Z".to_string() })
    );
    // input snapshot untouched
    assert_eq!(b.slot(7), Some(&MatchSlot::default()));
}

#[test]
fn push_winner_writes_only_the_destination_position() {
    let b = seeded(BracketSize::Ten);
    let advance = push_winner(&b, 1, "E0");
    assert_eq!(advance.champion, None);
    assert_eq!(advance.instance.slot(3), Some(&MatchSlot::new(e("E0"), e("E4"))));
    for id in [1, 2, 4, 5, 6, 7, 8, 9] {
        assert_eq!(advance.instance.slot(id), b.slot(id));
    }
}

#[test]
fn ten_layout_and_first_pick_order() {
    let b = seeded(BracketSize::Ten);
    assert_eq!(b.slot(1), Some(&MatchSlot::new(e("E0"), e("E1"))));
    assert_eq!(b.slot(3), Some(&MatchSlot::new(None, e("E4"))));
    assert_eq!(b.slot(4), Some(&MatchSlot::new(None, e("E5"))));
    assert_eq!(b.slot(6), Some(&MatchSlot::new(e("E8"), e("E9"))));
    assert_eq!(current_match(&b), Some(1));

    let b = pick(&b, 1, "E1").unwrap().instance;
    assert_eq!(current_match(&b), Some(2));
    let b = pick(&b, 2, "E2").unwrap().instance;
    assert_eq!(current_match(&b), Some(3));
}

#[test]
fn eleven_resolves_its_bye_before_any_pick() {
    let size = BracketSize::Eleven;
    let built = build(size, with_byes(size, names(11)));
    assert_eq!(built.slot(11), Some(&MatchSlot::new(e("E6"), Some(Contender::Bye))));
    assert_eq!(built.matches.values().filter(|s| s.has_bye()).count(), 1);

    let resolved = resolve_byes(&built);
    assert_eq!(resolved.auto_winners, vec!["E6"]);
    assert_eq!(resolved.instance.slot(6), Some(&MatchSlot::new(e("E6"), e("E10"))));
    assert_eq!(current_match(&resolved.instance), Some(1));

    let (done, picks) = play_out(resolved.instance, true);
    assert_eq!(picks, 10);
    assert!(champion(&done).is_some());
}

#[test]
fn resolve_byes_is_idempotent() {
    for size in BracketSize::ALL {
        let built = build(size, with_byes(size, names(size.entrants())));
        let once = resolve_byes(&built);
        let twice = resolve_byes(&once.instance);
        assert_eq!(twice.instance, once.instance);
        assert!(twice.auto_winners.is_empty());
    }
}

#[test]
fn byes_resolve_in_traversal_order() {
    let entrants = vec![
        Contender::entrant("A"),
        Contender::Bye,
        Contender::Bye,
        Contender::entrant("D"),
        Contender::entrant("E"),
        Contender::entrant("F"),
        Contender::entrant("G"),
        Contender::entrant("H"),
    ];
    let resolved = resolve_byes(&build(BracketSize::Eight, entrants));
    assert_eq!(resolved.auto_winners, vec!["A", "D"]);
    assert_eq!(resolved.instance.slot(5), Some(&MatchSlot::new(e("A"), e("D"))));
    assert_eq!(current_match(&resolved.instance), Some(3));
}

#[test]
fn pick_reports_byes_it_uncovers() {
    // entrant 4 sits in 3R: a bye there waits for match 1's winner
    let mut entrants: Vec<Contender> = names(10).into_iter().map(Contender::Entrant).collect();
    entrants[4] = Contender::Bye;
    let b = resolve_byes(&build(BracketSize::Ten, entrants)).instance;
    assert_eq!(current_match(&b), Some(1));

    let outcome = pick(&b, 1, "E0").unwrap();
    assert_eq!(outcome.auto_advanced, vec!["E0"]);
    assert_eq!(outcome.instance.slot(7), Some(&MatchSlot::new(e("E0"), None)));
    assert_eq!(outcome.status_line("E0"), "Picked E0 → Auto-advanced E0");
    assert_eq!(current_match(&outcome.instance), Some(2));
}

#[test]
fn every_size_finishes_with_one_champion_either_way() {
    for size in BracketSize::ALL {
        for take_left in [true, false] {
            let (done, picks) = play_out(seeded(size), take_left);
            let expected = Topology::for_size(size).total_matches() - Topology::for_size(size).byes();
            assert_eq!(picks, expected, "size {size}");
            let winner = champion(&done).expect("champion");
            assert!(names(size.entrants()).iter().any(|n| n == winner));
            assert_eq!(current_match(&done), None);
        }
    }
}

#[test]
fn pick_rejects_bad_input() {
    let b = seeded(BracketSize::Ten);
    assert_eq!(pick(&b, 10, "E0"), Err(BracketError::UnknownMatch(10)));
    assert_eq!(pick(&b, 7, "E0"), Err(BracketError::MatchNotReady(7)));
    assert_eq!(
        pick(&b, 1, "E5"),
        Err(BracketError::NotAContender { match_id: 1, name: "E5".to_string() })
    );

    let advanced = pick(&b, 1, "E0").unwrap().instance;
    assert_eq!(pick(&advanced, 1, "E1"), Err(BracketError::MatchNotReady(1)));

    let (done, _) = play_out(b, true);
    assert_eq!(pick(&done, 9, "E0"), Err(BracketError::AlreadyDecided));
}

#[test]
fn progress_and_status_labels() {
    let b = seeded(BracketSize::Twelve);
    let p = progress(&b);
    assert_eq!(p.round_label, "Play-In");
    assert_eq!(p.progress_label, "Match 1 of 11");
    assert_eq!(seeded_status(&b), "Ready.");

    let outcome = pick(&b, 1, "E0").unwrap();
    assert_eq!(outcome.status_line("E0"), "Picked E0");

    let (done, _) = play_out(b, false);
    let p = progress(&done);
    assert_eq!(p.round_label, "Champion");
    assert_eq!(p.progress_label, "Done");
    let name = champion(&done).unwrap().to_string();
    assert_eq!(seeded_status(&done), format!("🏆 {name} wins it all!"));
}

//! Integration tests for whole snapshots: seeding from groups, overlays, JSON input.

use pool_engine::{
    all_standings, build_seeds, group_standings, hypothetical, read_group_matches_csv,
    resolve_competition, Competition, CompetitionConfig, EngineError, GroupId, GroupMatch,
    KnockoutLeg, ManualOrder, PlaceholderCode, PredictionSet, Round, Score, Slot, Team, TeamId,
    TeamRegistry, Tie, TieId,
};

fn demo() -> Competition {
    let competition: Competition = serde_json::from_str(include_str!("../demos/world_cup.json")).unwrap();
    competition.validate().unwrap();
    competition
}

fn slot(competition: &Competition, code: &str) -> Option<String> {
    resolve_competition(competition)
        .unwrap()
        .slot(&PlaceholderCode::from(code))
        .map(|t| t.to_string())
}

#[test]
fn demo_snapshot_groups_and_seeds() {
    let competition = demo();
    let tables = all_standings(&competition).unwrap();
    let a: Vec<_> = tables[&GroupId::from("A")].iter().map(|r| r.team_id.as_str()).collect();
    let b: Vec<_> = tables[&GroupId::from("B")].iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(a, vec!["BRA", "CRO", "JPN"]);
    assert_eq!(b, vec!["ARG", "MAR", "FRA"]);

    let seeds = build_seeds(&competition).unwrap();
    assert_eq!(
        seeds.get(&"Winner:GroupA".into()),
        Some(Some(&TeamId::from("BRA")))
    );
    assert_eq!(
        seeds.get(&"RunnerUp:GroupB".into()),
        Some(Some(&TeamId::from("MAR")))
    );
    assert_eq!(seeds.get(&"Third:GroupA".into()), None);
}

#[test]
fn demo_snapshot_bracket() {
    let competition = demo();
    let res = resolve_competition(&competition).unwrap();
    assert_eq!(res.winner(&TieId::from("SF1")).map(TeamId::as_str), Some("MAR"));
    assert_eq!(res.winner(&TieId::from("SF2")).map(TeamId::as_str), Some("ARG"));
    assert_eq!(slot(&competition, "LSF1").as_deref(), Some("BRA"));
    assert!(res.tie_winners[&TieId::from("FINAL")].is_undecided());
    assert!(res.tie_winners[&TieId::from("THIRD")].is_undecided());
    assert_eq!(slot(&competition, "Champion"), None);
}

#[test]
fn predictions_fill_only_unplayed_fixtures() {
    let competition = demo();
    let predictions: PredictionSet = serde_json::from_str(include_str!("../demos/predictions.json")).unwrap();
    let what_if = hypothetical(&competition, &predictions);

    // A1 was played officially; the 0-3 prediction is ignored.
    let a1 = what_if.group_matches.iter().find(|m| m.id.as_str() == "A1").unwrap();
    assert_eq!(a1.score(), Some(Score::new(2, 0)));

    assert_eq!(slot(&what_if, "Champion").as_deref(), Some("ARG"));
    assert_eq!(slot(&what_if, "Third").as_deref(), Some("BRA"));
    // The official snapshot is untouched.
    assert_eq!(slot(&competition, "Champion"), None);
}

#[test]
fn incomplete_group_leaves_seeds_pending() {
    let mut competition = demo();
    let b3 = competition
        .group_matches
        .iter_mut()
        .find(|m| m.id.as_str() == "B3")
        .unwrap();
    b3.home_goals = None;
    b3.away_goals = None;

    let seeds = build_seeds(&competition).unwrap();
    assert_eq!(seeds.get(&"Winner:GroupB".into()), Some(None));

    let res = resolve_competition(&competition).unwrap();
    assert!(res.tie_winners[&TieId::from("SF1")].is_undecided());
    assert!(res.tie_winners[&TieId::from("SF2")].is_undecided());
    assert_eq!(slot(&competition, "Winner:GroupA").as_deref(), Some("BRA"));
}

#[test]
fn pending_duplicate_does_not_hold_back_group_seeds() {
    let mut competition = demo();
    let b3 = competition
        .group_matches
        .iter()
        .find(|m| m.id.as_str() == "B3")
        .unwrap()
        .clone();
    let mut pending = b3;
    pending.home_goals = None;
    pending.away_goals = None;
    competition.group_matches.insert(0, pending);

    assert!(competition.group_complete(&"B".into()));
    let seeds = build_seeds(&competition).unwrap();
    assert_eq!(seeds.get(&"Winner:GroupB".into()), Some(Some(&TeamId::from("ARG"))));
}

#[test]
fn extra_seed_clashing_with_group_seed_is_an_error() {
    let mut competition = demo();
    competition
        .extra_seeds
        .insert("Winner:GroupA".into(), "JPN".into());
    assert_eq!(
        build_seeds(&competition).unwrap_err(),
        EngineError::DuplicatePlaceholder("Winner:GroupA".into())
    );
}

#[test]
fn extra_seeds_feed_the_bracket() {
    let teams = TeamRegistry::new(vec![Team::new("ITA", None), Team::new("WAL", None)]).unwrap();
    let mut competition = Competition::new(CompetitionConfig::world_cup(), teams);
    competition.extra_seeds.insert("WP04".into(), "ITA".into());
    competition.rounds = vec![Round::new(
        "R1",
        vec![Tie::new(
            "T1",
            "W1",
            vec![KnockoutLeg::new(
                "T1-1",
                "R1",
                "T1",
                1,
                Slot::placeholder("WP04"),
                Slot::team("WAL"),
            )
            .with_score(2, 1)],
        )],
    )];
    assert_eq!(slot(&competition, "W1").as_deref(), Some("ITA"));
}

#[test]
fn manual_order_from_snapshot() {
    let teams = TeamRegistry::new(vec![
        Team::new("x", Some("A".into())),
        Team::new("y", Some("A".into())),
    ])
    .unwrap();
    let mut competition = Competition::new(CompetitionConfig::default(), teams);
    competition.group_matches = vec![GroupMatch::new("m1", "A", "x", "y").with_score(0, 0)];
    competition.overrides = vec![ManualOrder {
        group: "A".into(),
        order: vec!["y".into(), "x".into()],
    }];
    let table = group_standings(&competition, &"A".into()).unwrap();
    assert_eq!(table[0].team_id.as_str(), "y");
}

#[test]
fn registry_lookups() {
    let competition = demo();
    let morocco = competition.teams.get(&"MAR".into()).unwrap();
    assert_eq!(morocco.display_name, "Morocco");
    assert_eq!(morocco.group, Some(GroupId::from("B")));
    assert!(competition.teams.get(&"ITA".into()).is_none());
    assert_eq!(competition.teams.len(), 6);
    assert_eq!(competition.teams.groups(), vec![GroupId::from("A"), GroupId::from("B")]);
}

#[test]
fn duplicate_team_ids_are_rejected() {
    let err = TeamRegistry::new(vec![Team::new("x", None), Team::new("x", None)]).unwrap_err();
    assert_eq!(err, EngineError::DuplicateTeam("x".into()));
}

#[test]
fn csv_results_match_the_snapshot() {
    let imported = read_group_matches_csv(include_str!("../demos/results.csv").as_bytes()).unwrap();
    let competition = demo();
    for m in &imported {
        let existing = competition.group_matches.iter().find(|e| e.id == m.id).unwrap();
        assert_eq!(existing, m);
    }
}

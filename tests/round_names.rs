//! Integration tests for round display metadata: names, best-of and format strings.

use splat_bracket::{
    build, format_name, round_name_for, round_names, winners_round_names, BestOf, BracketError,
    BracketType,
};

#[test]
fn single_elimination_winners_names() {
    let cases: [(usize, &[&str]); 5] = [
        (2, &["Winners' Finals", "Grand Finals"]),
        (3, &["Winners' Semifinals", "Winners' Finals", "Grand Finals"]),
        (
            4,
            &["Winners' Round 1", "Winners' Semifinals", "Winners' Finals", "Grand Finals"],
        ),
        (
            5,
            &[
                "Winners' Round 1",
                "Winners' Round 2",
                "Winners' Semifinals",
                "Winners' Finals",
                "Grand Finals",
            ],
        ),
        (
            6,
            &[
                "Winners' Round 1",
                "Winners' Round 2",
                "Winners' Round 3",
                "Winners' Semifinals",
                "Winners' Finals",
                "Grand Finals",
            ],
        ),
    ];
    for (count, expected) in cases {
        assert_eq!(winners_round_names(count, true), expected, "count={count}");
    }
}

#[test]
fn double_elimination_winners_names() {
    let cases: [(usize, &[&str]); 5] = [
        (2, &["Grand Finals", "Bracket Reset"]),
        (3, &["Winners' Finals", "Grand Finals", "Bracket Reset"]),
        (
            4,
            &["Winners' Semifinals", "Winners' Finals", "Grand Finals", "Bracket Reset"],
        ),
        (
            5,
            &[
                "Winners' Round 1",
                "Winners' Semifinals",
                "Winners' Finals",
                "Grand Finals",
                "Bracket Reset",
            ],
        ),
        (
            6,
            &[
                "Winners' Round 1",
                "Winners' Round 2",
                "Winners' Semifinals",
                "Winners' Finals",
                "Grand Finals",
                "Bracket Reset",
            ],
        ),
    ];
    for (count, expected) in cases {
        assert_eq!(winners_round_names(count, false), expected, "count={count}");
    }
}

#[test]
fn eight_participants_single_elimination_names() {
    let b = build(8, BracketType::SingleElimination).unwrap();
    let names = round_names(&b);
    assert_eq!(
        names.winners,
        vec!["Winners' Semifinals", "Winners' Finals", "Grand Finals"]
    );
    assert!(names.losers.is_empty());
}

#[test]
fn sixteen_participants_double_elimination_names() {
    let b = build(16, BracketType::DoubleElimination).unwrap();
    let names = round_names(&b);
    assert_eq!(
        names.winners,
        vec![
            "Winners' Round 1",
            "Winners' Round 2",
            "Winners' Semifinals",
            "Winners' Finals",
            "Grand Finals",
            "Bracket Reset"
        ]
    );
    assert_eq!(
        names.losers,
        vec![
            "Losers' Round 1",
            "Losers' Round 2",
            "Losers' Round 3",
            "Losers' Round 4",
            "Losers' Round 5",
            "Losers' Finals"
        ]
    );
}

#[test]
fn round_name_by_position() {
    let positions = [1, 2, 3, 4, 5, -1, -2, -3, -4];
    assert_eq!(round_name_for(1, &positions).unwrap(), "Winners' Round 1");
    assert_eq!(round_name_for(4, &positions).unwrap(), "Grand Finals");
    assert_eq!(round_name_for(5, &positions).unwrap(), "Bracket Reset");
    assert_eq!(round_name_for(-3, &positions).unwrap(), "Losers' Round 3");
    assert_eq!(round_name_for(-4, &positions).unwrap(), "Losers' Finals");
}

#[test]
fn round_name_by_position_single_elimination() {
    let positions = [1, 2, 3];
    assert_eq!(round_name_for(3, &positions).unwrap(), "Grand Finals");
    assert_eq!(round_name_for(1, &positions).unwrap(), "Winners' Semifinals");
    assert!(matches!(
        round_name_for(-1, &positions),
        Err(BracketError::InvariantViolation(_))
    ));
}

#[test]
fn format_name_uses_first_bracket() {
    assert_eq!(
        format_name(&[BracketType::DoubleElimination, BracketType::SingleElimination]),
        Ok("Double Elimination")
    );
    assert_eq!(
        format_name(&[BracketType::SingleElimination]),
        Ok("Single Elimination")
    );
    assert!(matches!(format_name(&[]), Err(BracketError::InvalidInput(_))));
}

#[test]
fn bracket_type_parsing() {
    assert_eq!("SE".parse::<BracketType>(), Ok(BracketType::SingleElimination));
    assert_eq!("DE".parse::<BracketType>(), Ok(BracketType::DoubleElimination));
    assert!(matches!(
        "RR".parse::<BracketType>(),
        Err(BracketError::InvalidInput(_))
    ));
}

#[test]
fn best_of_accepts_only_organizer_options() {
    for value in [3u8, 5, 7, 9] {
        assert_eq!(BestOf::try_from(value).map(BestOf::get), Ok(value));
    }
    for value in [0u8, 1, 2, 4, 11] {
        assert!(BestOf::try_from(value).is_err());
    }
    assert!(serde_json::from_str::<BestOf>("4").is_err());
    assert_eq!(serde_json::from_str::<BestOf>("9").map(BestOf::get).ok(), Some(9));
}

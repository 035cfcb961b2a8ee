//! Integration tests for input validation, the invariant checker, and rest stats.

use badminton_schedule_web::{
    compute_rest_stats, generate_schedule, validate_schedule, GameMatch, MatchType, Round,
    ScheduleError,
};

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn round(id: &str, matches: Vec<GameMatch>, resting: &[&str]) -> Round {
    Round {
        id: id.to_string(),
        matches,
        resting: strings(resting),
        completed: false,
    }
}

fn game(id: &str, team_a: &[&str], team_b: &[&str]) -> GameMatch {
    GameMatch {
        id: id.to_string(),
        team_a: strings(team_a),
        team_b: strings(team_b),
    }
}

#[test]
fn duplicates_below_threshold_are_rejected() {
    let players = strings(&["A", "A", "B", "B", "C", "C"]);
    let err = generate_schedule(&players, 1, MatchType::Singles).unwrap_err();
    assert_eq!(err, ScheduleError::NotEnoughPlayers { unique: 3 });
    assert!(err.to_string().contains("unique players remain"));
}

#[test]
fn zero_courts_are_rejected() {
    let players = strings(&["A", "B", "C", "D", "E"]);
    let err = generate_schedule(&players, 0, MatchType::Singles).unwrap_err();
    assert_eq!(err, ScheduleError::NoCourts);
    assert_eq!(err.to_string(), "At least 1 court required");
}

#[test]
fn empty_names_do_not_count_toward_viability() {
    let players = strings(&["", "A", "B", "C", "D"]);
    assert!(matches!(
        generate_schedule(&players, 1, MatchType::Singles),
        Err(ScheduleError::NotEnoughPlayers { unique: 4 })
    ));
}

#[test]
fn validator_accepts_a_generated_schedule() {
    let players = strings(&["A", "B", "C", "D", "E", "F"]);
    let schedule = generate_schedule(&players, 1, MatchType::Doubles).unwrap();
    let report = validate_schedule(&schedule.rounds);
    assert!(report.valid);
    assert!(report.errors.is_empty());
}

#[test]
fn validator_flags_a_player_in_two_matches() {
    let rounds = vec![round(
        "r1",
        vec![game("m1", &["A"], &["B"]), game("m2", &["A"], &["C"])],
        &["D"],
    )];
    let report = validate_schedule(&rounds);
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("A")));
}

#[test]
fn validator_flags_duplicate_match_ids() {
    let rounds = vec![
        round("r1", vec![game("m1", &["A"], &["B"])], &["C", "D"]),
        round("r2", vec![game("m1", &["C"], &["D"])], &["A", "B"]),
    ];
    let report = validate_schedule(&rounds);
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("m1")));
}

#[test]
fn rest_stats_include_players_who_never_rest() {
    let rounds = vec![
        round("r1", vec![game("m1", &["A"], &["B"])], &["C"]),
        round("r2", vec![game("m2", &["A"], &["C"])], &["B"]),
    ];
    let players = strings(&["A", "B", "C"]);
    let stats = compute_rest_stats(&rounds, &players);
    assert_eq!(stats.rest_counts["A"], 0);
    assert_eq!(stats.rest_counts["B"], 1);
    assert_eq!(stats.rest_counts["C"], 1);
    assert_eq!(stats.max_diff, 1);
}

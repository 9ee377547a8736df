// tests/ranking.rs
//
// Ranking algorithm: sort key, tie groups, rank skipping, determinism.
//
use psl_table::league::League;
use psl_table::ranking::rank_teams;
use psl_table::team::Team;

/// Build a team with a given points total by feeding it wins/draws.
fn team_with_points(name: &str, points: u32) -> Team {
    let mut t = Team::new(name);
    for _ in 0..points / 3 {
        t.apply_match_result(1, 0);
    }
    for _ in 0..points % 3 {
        t.apply_match_result(0, 0);
    }
    assert_eq!(t.points(), points);
    t
}

#[test]
fn ties_share_rank_and_next_rank_skips() {
    // Points [10, 10, 7, 5, 5] → ranks [1, 1, 3, 4, 4].
    let teams = vec![
        team_with_points("A", 10),
        team_with_points("B", 10),
        team_with_points("C", 7),
        team_with_points("D", 5),
        team_with_points("E", 5),
    ];

    let ranks: Vec<u32> = rank_teams(teams).iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 1, 3, 4, 4]);
}

#[test]
fn ties_break_alphabetically_case_insensitive() {
    let teams = vec![
        team_with_points("Zeta", 10),
        team_with_points("Alpha", 10),
        team_with_points("Beta", 7),
    ];

    let rows = rank_teams(teams);
    let got: Vec<(u32, &str)> = rows.iter().map(|r| (r.rank, r.team.name())).collect();
    assert_eq!(got, vec![(1, "Alpha"), (1, "Zeta"), (3, "Beta")]);
}

#[test]
fn lowercase_names_sort_with_uppercase() {
    let teams = vec![
        team_with_points("bravo", 4),
        team_with_points("Alpha", 4),
        team_with_points("Charlie", 4),
    ];

    let rows = rank_teams(teams);
    let names: Vec<&str> = rows.iter().map(|r| r.team.name()).collect();
    assert_eq!(names, vec!["Alpha", "bravo", "Charlie"]);
}

#[test]
fn empty_input_ranks_to_empty() {
    assert!(rank_teams(Vec::new()).is_empty());
}

#[test]
fn ranking_is_deterministic_across_calls() {
    let mut league = League::new();
    for line in [
        "Chiefs 2, Pirates 1",
        "Sundowns 0, Chiefs 0",
        "Pirates 3, Sundowns 1",
        "Arrows 2, AmaZulu 2",
    ] {
        assert!(league.process_line(line));
    }

    let first = league.get_ranking();
    let second = league.get_ranking();
    assert_eq!(first, second);
}

#[test]
fn goal_difference_does_not_break_ties() {
    // Same points, wildly different goal difference: name still decides.
    let mut big_win = Team::new("Zulu");
    big_win.apply_match_result(9, 0);
    let mut narrow_win = Team::new("Alpha");
    narrow_win.apply_match_result(1, 0);

    let rows = rank_teams(vec![big_win, narrow_win]);
    assert_eq!(rows[0].team.name(), "Alpha");
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[1].team.name(), "Zulu");
    assert_eq!(rows[1].rank, 1);
}

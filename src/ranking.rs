// src/ranking.rs
//
// Pure ranking pass over a set of team records. Sort: points descending,
// then name ascending (case-insensitive). Competition ranking: a tie group
// shares one rank number and the next group's rank jumps by the group size,
// so points [10, 10, 7] rank [1, 1, 3].
//
// Goal difference plays no part in the ordering: points, then name.

use std::cmp::Reverse;

use crate::team::Team;

/// One row of the final table: 1-based rank plus a read-only copy of the
/// team record it ranks. Rebuilt from scratch on every computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankRow {
    pub rank: u32,
    pub team: Team,
}

/// Rank a snapshot of team records. Deterministic: equal inputs give equal
/// output, byte for byte.
pub fn rank_teams(mut teams: Vec<Team>) -> Vec<RankRow> {
    teams.sort_by_cached_key(|t| (Reverse(t.points()), t.name().to_lowercase()));

    let mut rows = Vec::with_capacity(teams.len());
    let mut rank = 1u32;
    let mut i = 0usize;

    while i < teams.len() {
        let points = teams[i].points();
        let tied = teams[i..]
            .iter()
            .take_while(|t| t.points() == points)
            .count();

        for team in &teams[i..i + tied] {
            rows.push(RankRow { rank, team: team.clone() });
        }

        i += tied;
        rank += tied as u32;
    }

    rows
}

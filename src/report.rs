// src/report.rs
//
// Rank-row rendering. Two audiences:
// - export_line / to_export_string: the plain-text export contract. Field
//   order and labels are load-bearing; downstream consumers parse these
//   lines, so the shape must not drift.
// - render_table: aligned table for terminal output, free to change.

use crate::ranking::RankRow;

/// One export line, exact shape:
/// `<rank>. <name> — <points> pts (GF:<gf> GA:<ga> GD:<gd>)`
///
/// The part after the rank is the team's `Display` form.
pub fn export_line(row: &RankRow) -> String {
    format!("{}. {}", row.rank, row.team)
}

/// Full export payload: one newline-terminated line per ranked team.
pub fn to_export_string(rows: &[RankRow]) -> String {
    let mut buf = s!();
    for row in rows {
        buf.push_str(&export_line(row));
        buf.push('\n');
    }
    buf
}

const TABLE_COLS: [&str; 7] = ["Rank", "Team", "Points", "MP", "GF", "GA", "GD"];

/// Aligned text table for stdout. Team column grows to fit the longest
/// name; numeric columns are right-aligned under their headers.
pub fn render_table(rows: &[RankRow]) -> String {
    let team_w = rows
        .iter()
        .map(|r| r.team.name().chars().count())
        .chain([TABLE_COLS[1].len()])
        .max()
        .unwrap_or(TABLE_COLS[1].len());

    let mut buf = s!();
    buf.push_str(&format!(
        "{:<5} {:<team_w$} {:>6} {:>4} {:>4} {:>4} {:>4}\n",
        TABLE_COLS[0], TABLE_COLS[1], TABLE_COLS[2], TABLE_COLS[3],
        TABLE_COLS[4], TABLE_COLS[5], TABLE_COLS[6],
    ));

    for row in rows {
        let t = &row.team;
        buf.push_str(&format!(
            "{:<5} {:<team_w$} {:>6} {:>4} {:>4} {:>4} {:>4}\n",
            row.rank,
            t.name(),
            t.points(),
            t.matches_played(),
            t.goals_for(),
            t.goals_against(),
            t.goal_difference(),
        ));
    }

    buf
}

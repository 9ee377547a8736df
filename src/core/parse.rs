// src/core/parse.rs
//! Match-line parsing.
//!
//! One line describes one finished match:
//!
//! ```text
//! Kaizer Chiefs 2, Orlando Pirates 1
//! ```
//!
//! Grammar: `<name> <int>, <name> <int>`. A name is any non-empty run of
//! characters (embedded spaces included) up to the last whitespace before
//! its score; scores are base-10 non-negative integers; one comma separates
//! the two sides. Whitespace around the line and around each component is
//! ignored. The pattern is anchored: trailing garbage fails the whole line,
//! there are no partial results.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::trim_name;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(.+?)\s+(\d+)\s*,\s*(.+?)\s+(\d+)\s*$").expect("match-line pattern")
});

/// One parsed result line. Transient: applied to the league, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchEvent {
    pub team_a: String,
    pub goals_a: u32,
    pub team_b: String,
    pub goals_b: u32,
}

/// Parse one raw line into a [`MatchEvent`].
///
/// Returns `None` for anything that doesn't match the grammar exactly;
/// malformed lines never panic and never yield partial results. A score too
/// large for `u32` and a name that trims to nothing are both rejected here,
/// so blank teams can't reach the league.
pub fn parse_line(line: &str) -> Option<MatchEvent> {
    let caps = LINE_RE.captures(line)?;

    let team_a = trim_name(caps.get(1)?.as_str());
    let team_b = trim_name(caps.get(3)?.as_str());
    if team_a.is_empty() || team_b.is_empty() {
        return None;
    }

    // \d is wider than u32::from_str accepts; conversion failure = no match.
    let goals_a: u32 = caps.get(2)?.as_str().parse().ok()?;
    let goals_b: u32 = caps.get(4)?.as_str().parse().ok()?;

    Some(MatchEvent {
        team_a: s!(team_a),
        goals_a,
        team_b: s!(team_b),
        goals_b,
    })
}

// src/team.rs
use std::fmt;

use crate::core::sanitize::trim_name;

/// One team's accumulated record. Name is fixed at creation; the counters
/// only ever move through [`Team::apply_match_result`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    name: String,
    points: u32,
    goals_for: u32,
    goals_against: u32,
    matches_played: u32,
}

impl Team {
    /// Callers (the league) guarantee `name` is non-empty after trimming.
    pub fn new(name: &str) -> Self {
        Self {
            name: s!(trim_name(name)),
            points: 0,
            goals_for: 0,
            goals_against: 0,
            matches_played: 0,
        }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn points(&self) -> u32 { self.points }
    pub fn goals_for(&self) -> u32 { self.goals_for }
    pub fn goals_against(&self) -> u32 { self.goals_against }
    pub fn matches_played(&self) -> u32 { self.matches_played }

    /// Goal difference, negative when conceding more than scoring.
    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// Record one match from this team's perspective.
    /// 3 points for a win, 1 for a draw, 0 for a loss.
    pub fn apply_match_result(&mut self, goals_for: u32, goals_against: u32) {
        self.matches_played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;

        if goals_for > goals_against {
            self.points += 3;
        } else if goals_for == goals_against {
            self.points += 1;
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {} pts (GF:{} GA:{} GD:{})",
            self.name, self.points, self.goals_for, self.goals_against,
            self.goal_difference()
        )
    }
}

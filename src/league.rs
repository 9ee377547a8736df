// src/league.rs
//
// The aggregate root. Owns every Team record exclusively; everything the
// rest of the crate sees (rankings, snapshots) is a copy. Lookup goes
// through a normalized key so "chiefs" and " Chiefs " hit the same record,
// while the record keeps the display casing it was first created with.
//
// No interior locking. A host driving this from multiple threads must
// serialize mutating calls itself.

use std::collections::HashMap;

use crate::core::parse;
use crate::core::sanitize::{normalize_key, trim_name};
use crate::ranking::{self, RankRow};
use crate::team::Team;

#[derive(Clone, Debug, Default)]
pub struct League {
    teams: HashMap<String, Team>,
}

impl League {
    pub fn new() -> Self {
        Self { teams: HashMap::new() }
    }

    /// Create the team if it isn't known yet. Idempotent; a name that trims
    /// to nothing is ignored rather than stored as a blank record.
    pub fn ensure_team(&mut self, name: &str) {
        let key = normalize_key(name);
        if key.is_empty() {
            logd!("League: Ignored empty team name");
            return;
        }
        self.teams
            .entry(key)
            .or_insert_with(|| Team::new(trim_name(name)));
    }

    /// Seed a batch of team names. Order only affects which spelling wins
    /// as display name when two entries collide on the same key.
    pub fn seed_teams<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for n in names {
            self.ensure_team(n.as_ref());
        }
    }

    /// Drop every team; back to an empty league.
    pub fn clear(&mut self) {
        self.teams.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Apply one raw result line. On a parse failure nothing changes and
    /// `false` comes back; on success both sides are created as needed and
    /// updated together.
    pub fn process_line(&mut self, line: &str) -> bool {
        let Some(event) = parse::parse_line(line) else {
            return false;
        };

        self.ensure_team(&event.team_a);
        self.ensure_team(&event.team_b);

        // Keys are non-empty here: the parser rejects blank names.
        if let Some(a) = self.teams.get_mut(&normalize_key(&event.team_a)) {
            a.apply_match_result(event.goals_a, event.goals_b);
        }
        if let Some(b) = self.teams.get_mut(&normalize_key(&event.team_b)) {
            b.apply_match_result(event.goals_b, event.goals_a);
        }

        true
    }

    /// Rank the current table. Computed fresh on every call, never cached;
    /// always reflects the state right now.
    pub fn get_ranking(&self) -> Vec<RankRow> {
        ranking::rank_teams(self.teams.values().cloned().collect())
    }

    /// Snapshot of all team records. A copy: it won't track later updates.
    pub fn teams(&self) -> Vec<Team> {
        self.teams.values().cloned().collect()
    }
}

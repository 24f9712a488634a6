use serde::Serialize;

use super::ranker::{StandingsRow, rank_backend_rows, rank_standings};
use crate::model::{League, TeamRecord};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StandingsSource {
    /// Filtered from `/users` by league membership.
    Derived,
    /// Taken from `/standings` and re-ranked locally.
    Backend,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeagueStandings {
    pub rows: Vec<StandingsRow>,
    pub source: StandingsSource,
}

/// Builds a league table. Backend rows win when they cover the league,
/// otherwise the table is derived from the team records.
#[must_use]
pub fn league_standings(
    users: &[TeamRecord],
    backend_rows: Option<&[TeamRecord]>,
    league: &League,
) -> LeagueStandings {
    if let Some(rows) = backend_rows {
        let ranked = rank_backend_rows(rows, league);
        if !ranked.is_empty() {
            return LeagueStandings {
                rows: ranked,
                source: StandingsSource::Backend,
            };
        }
    }
    LeagueStandings {
        rows: rank_standings(users, league),
        source: StandingsSource::Derived,
    }
}

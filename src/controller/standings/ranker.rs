use ahash::AHashSet;
use serde::Serialize;
use std::cmp::Ordering;

use crate::model::{League, TeamRecord};

/// Rows from the top of the table that qualify for the playoffs.
pub const PLAYOFF_PLACES: usize = 4;
/// Rows from the bottom of the table in the relegation zone.
pub const RELEGATION_PLACES: usize = 2;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StandingsRow {
    /// 1-based position in the locally ranked table.
    pub position: usize,
    pub team: TeamRecord,
    pub zone: TableZone,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableZone {
    Playoff,
    Relegation,
    None,
}

impl TableZone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            TableZone::Playoff => "zone-playoff",
            TableZone::Relegation => "zone-relegation",
            TableZone::None => "",
        }
    }
}

/// Table order: points, then goal difference, then goals scored, all descending.
#[must_use]
pub fn table_order(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Ranks every team of `teams` that is a member of `league`.
///
/// The sort is stable, so teams level on all three keys keep their input
/// order. Duplicate team names keep their first record.
#[must_use]
pub fn rank_standings(teams: &[TeamRecord], league: &League) -> Vec<StandingsRow> {
    let members = league.member_set();
    rank_scoped(teams.iter().filter(|t| members.contains(t.team_name.as_str())))
}

/// Ranks rows the backend already scoped to `league` through their `leagueId`.
/// Any backend `rank` on the rows is ignored.
#[must_use]
pub fn rank_backend_rows(rows: &[TeamRecord], league: &League) -> Vec<StandingsRow> {
    rank_scoped(rows.iter().filter(|t| t.league_id.as_ref() == Some(&league.id)))
}

fn rank_scoped<'a>(rows: impl Iterator<Item = &'a TeamRecord>) -> Vec<StandingsRow> {
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut scoped: Vec<&TeamRecord> = rows
        .filter(|t| seen.insert(t.team_name.as_str()))
        .collect();

    scoped.sort_by(|a, b| table_order(a, b));

    let len = scoped.len();
    scoped
        .into_iter()
        .enumerate()
        .map(|(i, team)| StandingsRow {
            position: i + 1,
            team: team.clone(),
            zone: zone_for(i, len),
        })
        .collect()
}

/// Same ordering applied to every record regardless of league, used for the
/// home page leaderboard.
#[must_use]
pub fn rank_all(teams: &[TeamRecord]) -> Vec<&TeamRecord> {
    let mut ranked: Vec<&TeamRecord> = teams.iter().collect();
    ranked.sort_by(|a, b| table_order(a, b));
    ranked
}

fn zone_for(index: usize, len: usize) -> TableZone {
    if index < PLAYOFF_PLACES {
        TableZone::Playoff
    } else if len > PLAYOFF_PLACES && index >= len.saturating_sub(RELEGATION_PLACES) {
        TableZone::Relegation
    } else {
        TableZone::None
    }
}

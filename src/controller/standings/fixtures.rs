use serde::Serialize;

use crate::model::{Fixture, FixtureStatus, League};

/// Completed fixtures shown on the home page.
pub const HOME_RECENT_RESULTS: usize = 3;
/// Completed fixtures shown on a league's fixtures tab.
pub const LEAGUE_RECENT_RESULTS: usize = 5;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct FixtureBuckets<'a> {
    pub upcoming: Vec<&'a Fixture>,
    pub live: Vec<&'a Fixture>,
    pub completed: Vec<&'a Fixture>,
}

/// Fixtures tagged with the league, or played between two of its members.
#[must_use]
pub fn league_fixtures<'a>(fixtures: &'a [Fixture], league: &League) -> Vec<&'a Fixture> {
    let members = league.member_set();
    fixtures
        .iter()
        .filter(|f| {
            f.league_id.as_ref() == Some(&league.id)
                || (members.contains(f.home_team.as_str())
                    && members.contains(f.away_team.as_str()))
        })
        .collect()
}

/// Fixtures that count towards the league's bracket: tagged with the league,
/// or untagged and played between two of its members. A fixture tagged with
/// another league never counts.
#[must_use]
pub fn bracket_fixtures<'a>(fixtures: &'a [Fixture], league: &League) -> Vec<&'a Fixture> {
    let members = league.member_set();
    fixtures
        .iter()
        .filter(|f| match &f.league_id {
            Some(id) => id == &league.id,
            None => {
                members.contains(f.home_team.as_str()) && members.contains(f.away_team.as_str())
            }
        })
        .collect()
}

/// Splits fixtures by status, keeping input order within each bucket.
/// Fixtures with an unrecognised status land in no bucket.
#[must_use]
pub fn classify_fixtures<'a, I>(fixtures: I) -> FixtureBuckets<'a>
where
    I: IntoIterator<Item = &'a Fixture>,
{
    let mut buckets = FixtureBuckets::default();
    for fixture in fixtures {
        match fixture.status {
            FixtureStatus::Scheduled => buckets.upcoming.push(fixture),
            FixtureStatus::Live => buckets.live.push(fixture),
            FixtureStatus::Completed => buckets.completed.push(fixture),
            FixtureStatus::Unknown => {}
        }
    }
    buckets
}

/// The last `n` completed fixtures, most recent first.
#[must_use]
pub fn recent_results<'a>(completed: &[&'a Fixture], n: usize) -> Vec<&'a Fixture> {
    completed.iter().rev().take(n).copied().collect()
}

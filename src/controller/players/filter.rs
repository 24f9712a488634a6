use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::model::{Id, League, TeamRecord};

/// Rank used for records the backend never ranked.
const UNRANKED: u32 = 999;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Rank,
    Points,
    Name,
    Goals,
    Wins,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Rank,
        SortKey::Points,
        SortKey::Name,
        SortKey::Goals,
        SortKey::Wins,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rank => "rank",
            SortKey::Points => "points",
            SortKey::Name => "name",
            SortKey::Goals => "goals",
            SortKey::Wins => "wins",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Rank => "Sort by Rank",
            SortKey::Points => "Sort by Points",
            SortKey::Name => "Sort by Name",
            SortKey::Goals => "Sort by Goals",
            SortKey::Wins => "Sort by Wins",
        }
    }

    fn compare(self, a: &TeamRecord, b: &TeamRecord) -> Ordering {
        match self {
            SortKey::Rank => a
                .rank
                .unwrap_or(UNRANKED)
                .cmp(&b.rank.unwrap_or(UNRANKED)),
            SortKey::Points => b.points.cmp(&a.points),
            SortKey::Name => a
                .team_name
                .to_lowercase()
                .cmp(&b.team_name.to_lowercase())
                .then_with(|| a.team_name.cmp(&b.team_name)),
            SortKey::Goals => b.goals_for.cmp(&a.goals_for),
            SortKey::Wins => b.won.cmp(&a.won),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rank" => Ok(SortKey::Rank),
            "points" => Ok(SortKey::Points),
            "name" | "teamname" => Ok(SortKey::Name),
            "goals" | "goalsfor" => Ok(SortKey::Goals),
            "wins" | "won" => Ok(SortKey::Wins),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub search: String,
    /// `None` means all leagues.
    pub league: Option<Id>,
    pub sort: SortKey,
}

impl PlayerQuery {
    fn matches_search(&self, team: &TeamRecord) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        team.username.to_lowercase().contains(&needle)
            || team.team_name.to_lowercase().contains(&needle)
    }
}

/// Applies search, league filter and sort. Input order breaks sort ties.
#[must_use]
pub fn filter_players<'a>(
    teams: &'a [TeamRecord],
    leagues: &[League],
    query: &PlayerQuery,
) -> Vec<&'a TeamRecord> {
    let league = match &query.league {
        Some(id) => match leagues.iter().find(|l| &l.id == id) {
            Some(l) => Some(l),
            None => return Vec::new(),
        },
        None => None,
    };

    let mut filtered: Vec<&TeamRecord> = teams
        .iter()
        .filter(|t| query.matches_search(t))
        .filter(|t| league.is_none_or(|l| l.has_member(&t.team_name)))
        .collect();

    filtered.sort_by(|a, b| query.sort.compare(a, b));
    filtered
}

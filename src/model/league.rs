use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::model::Id;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct League {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub teams: Vec<String>,
    pub status: Option<String>,
}

impl League {
    #[must_use]
    pub fn has_member(&self, team_name: &str) -> bool {
        self.teams.iter().any(|t| t == team_name)
    }

    #[must_use]
    pub fn member_set(&self) -> AHashSet<&str> {
        self.teams.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn status_label(&self) -> String {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map_or_else(|| "ACTIVE".to_string(), str::to_uppercase)
    }

    #[must_use]
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Competitive tournament with top players")
    }
}

/// Leagues a team belongs to, in league order.
#[must_use]
pub fn leagues_for_team<'a>(leagues: &'a [League], team_name: &str) -> Vec<&'a League> {
    leagues.iter().filter(|l| l.has_member(team_name)).collect()
}

/// Ancillary `/leagueInfo` payload; every field is optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueInfo {
    pub season: Option<String>,
    pub description: Option<String>,
}

/// One `/news` headline.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsItem {
    pub id: Id,
    pub title: String,
    pub summary: Option<String>,
    pub date: Option<String>,
}

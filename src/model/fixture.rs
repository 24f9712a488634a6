use serde::{Deserialize, Serialize};

use crate::model::Id;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixture {
    pub id: Id,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: FixtureStatus,
    pub round: Option<u32>,
    pub league_id: Option<Id>,
    pub stage: Option<PlayoffStage>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
}

impl Fixture {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == FixtureStatus::Completed
    }

    /// Team with the strictly higher score of a completed fixture.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        if !self.is_completed() {
            return None;
        }
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) if h > a => Some(&self.home_team),
            (Some(h), Some(a)) if a > h => Some(&self.away_team),
            _ => None,
        }
    }

    #[must_use]
    pub fn score_line(&self) -> String {
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => format!("{h} - {a}"),
            _ => "vs".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
    #[serde(other)]
    Unknown,
}

impl FixtureStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "SCHEDULED",
            FixtureStatus::Live => "LIVE",
            FixtureStatus::Completed => "COMPLETED",
            FixtureStatus::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            FixtureStatus::Scheduled => "status-scheduled",
            FixtureStatus::Live => "status-live",
            FixtureStatus::Completed => "status-completed",
            FixtureStatus::Unknown => "status-unknown",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PlayoffStage {
    Quarterfinal,
    Semifinal,
    Final,
    /// Any other stage tag (group rounds, third-place games). Not part of
    /// the bracket.
    #[serde(other)]
    Unknown,
}

impl PlayoffStage {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlayoffStage::Quarterfinal => "Quarterfinals",
            PlayoffStage::Semifinal => "Semifinals",
            PlayoffStage::Final => "Grand Final",
            PlayoffStage::Unknown => "Other",
        }
    }
}

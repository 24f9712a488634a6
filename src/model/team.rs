use serde::{Deserialize, Serialize};

use crate::model::Id;

/// Season-cumulative statistics for one player's team, as served by `/users`
/// and `/standings`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamRecord {
    pub id: Id,
    pub username: String,
    pub team_name: String,
    pub avatar: Option<String>,
    /// Backend-assigned rank. Display only, never used to order a table.
    pub rank: Option<u32>,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    pub form: Vec<FormResult>,
    /// Present on `/standings` rows only.
    pub league_id: Option<Id>,
}

impl TeamRecord {
    #[must_use]
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Whole-number win percentage; 0 when nothing has been played.
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        let pct = f64::from(self.won) / f64::from(self.played) * 100.0;
        // won <= played in any sane record, but a bad row must not overflow
        pct.round().clamp(0.0, f64::from(u32::MAX)) as u32
    }

    /// Last `n` form entries, most recent last.
    #[must_use]
    pub fn recent_form(&self, n: usize) -> &[FormResult] {
        let start = self.form.len().saturating_sub(n);
        &self.form[start..]
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
    #[serde(other)]
    Unknown,
}

impl FormResult {
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            FormResult::Win => "W",
            FormResult::Draw => "D",
            FormResult::Loss => "L",
            FormResult::Unknown => "?",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            FormResult::Win => "form-win",
            FormResult::Draw => "form-draw",
            FormResult::Loss => "form-loss",
            FormResult::Unknown => "form-unknown",
        }
    }
}

/// Mean of the per-team win rates, 0 for an empty set.
#[must_use]
pub fn average_win_rate(teams: &[TeamRecord]) -> u32 {
    if teams.is_empty() {
        return 0;
    }
    let total: u64 = teams.iter().map(|t| u64::from(t.win_rate())).sum();
    let avg = total as f64 / teams.len() as f64;
    avg.round() as u32
}

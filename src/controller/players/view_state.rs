use serde::Serialize;
use std::str::FromStr;

use super::filter::{PlayerQuery, SortKey};
use crate::model::Id;

/// Per-page state of the players page. Every filter transition resets the
/// page to 1; paging transitions clamp to `1..=page_count`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayersViewState {
    pub query: PlayerQuery,
    pub page: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayersAction {
    Search(String),
    Sort(SortKey),
    FilterLeague(Option<Id>),
    GoTo(usize),
    Next,
    Prev,
}

impl Default for PlayersViewState {
    fn default() -> Self {
        Self {
            query: PlayerQuery::default(),
            page: 1,
        }
    }
}

impl PlayersViewState {
    #[must_use]
    pub fn apply(mut self, action: PlayersAction, page_count: usize) -> Self {
        let last = page_count.max(1);
        match action {
            PlayersAction::Search(term) => {
                if term != self.query.search {
                    self.query.search = term;
                    self.page = 1;
                }
            }
            PlayersAction::Sort(key) => {
                if key != self.query.sort {
                    self.query.sort = key;
                    self.page = 1;
                }
            }
            PlayersAction::FilterLeague(league) => {
                if league != self.query.league {
                    self.query.league = league;
                    self.page = 1;
                }
            }
            PlayersAction::GoTo(page) => self.page = page.clamp(1, last),
            PlayersAction::Next => self.page = (self.page + 1).min(last),
            PlayersAction::Prev => self.page = self.page.saturating_sub(1).max(1),
        }
        self
    }
}

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LeagueTab {
    #[default]
    Table,
    Fixtures,
    Playoffs,
}

impl LeagueTab {
    pub const ALL: [LeagueTab; 3] = [LeagueTab::Table, LeagueTab::Fixtures, LeagueTab::Playoffs];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LeagueTab::Table => "table",
            LeagueTab::Fixtures => "fixtures",
            LeagueTab::Playoffs => "playoffs",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LeagueTab::Table => "🏆 League Table",
            LeagueTab::Fixtures => "📅 Fixtures & Results",
            LeagueTab::Playoffs => "🏅 Playoffs",
        }
    }
}

impl FromStr for LeagueTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(LeagueTab::Table),
            "fixtures" => Ok(LeagueTab::Fixtures),
            "playoffs" => Ok(LeagueTab::Playoffs),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

/// Per-page state of the league page. Selecting another league resets the
/// table to page 1; switching tabs keeps the page.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LeagueViewState {
    pub league: Option<Id>,
    pub tab: LeagueTab,
    pub page: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeagueAction {
    SelectLeague(Id),
    SelectTab(LeagueTab),
    GoTo(usize),
}

impl Default for LeagueViewState {
    fn default() -> Self {
        Self {
            league: None,
            tab: LeagueTab::Table,
            page: 1,
        }
    }
}

impl LeagueViewState {
    #[must_use]
    pub fn apply(mut self, action: LeagueAction, page_count: usize) -> Self {
        let last = page_count.max(1);
        match action {
            LeagueAction::SelectLeague(id) => {
                if self.league.as_ref() != Some(&id) {
                    self.league = Some(id);
                    self.page = 1;
                }
            }
            LeagueAction::SelectTab(tab) => self.tab = tab,
            LeagueAction::GoTo(page) => self.page = page.clamp(1, last),
        }
        self
    }
}

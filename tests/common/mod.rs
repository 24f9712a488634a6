#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use efootball_board::AppError;
use efootball_board::controller::api::Backend;
use efootball_board::model::{Fixture, League, LeagueData, LeagueInfo, NewsItem, TeamRecord};

pub const USERS_JSON: &str = include_str!("../fixtures/users.json");
pub const FIXTURES_JSON: &str = include_str!("../fixtures/fixtures.json");
pub const LEAGUES_JSON: &str = include_str!("../fixtures/leagues.json");
pub const STANDINGS_JSON: &str = include_str!("../fixtures/standings.json");
pub const LEAGUE_INFO_JSON: &str = include_str!("../fixtures/league_info.json");
pub const NEWS_JSON: &str = include_str!("../fixtures/news.json");

pub fn users() -> Vec<TeamRecord> {
    serde_json::from_str(USERS_JSON).expect("users fixture parses")
}

pub fn fixtures() -> Vec<Fixture> {
    serde_json::from_str(FIXTURES_JSON).expect("fixtures fixture parses")
}

pub fn leagues() -> Vec<League> {
    serde_json::from_str(LEAGUES_JSON).expect("leagues fixture parses")
}

pub fn standings() -> Vec<TeamRecord> {
    serde_json::from_str(STANDINGS_JSON).expect("standings fixture parses")
}

pub fn news() -> Vec<NewsItem> {
    serde_json::from_str(NEWS_JSON).expect("news fixture parses")
}

pub fn league_data() -> LeagueData {
    LeagueData {
        users: users(),
        fixtures: fixtures(),
        leagues: leagues(),
    }
}

/// Minimal record for ranking tests.
pub fn team(name: &str, points: u32, goals_for: u32, goals_against: u32) -> TeamRecord {
    TeamRecord {
        id: name.into(),
        username: name.to_lowercase(),
        team_name: name.to_string(),
        points,
        goals_for,
        goals_against,
        ..TeamRecord::default()
    }
}

pub fn league(id: &str, name: &str, teams: &[&str]) -> League {
    League {
        id: id.into(),
        name: name.to_string(),
        teams: teams.iter().map(|t| (*t).to_string()).collect(),
        ..League::default()
    }
}

/// Serves the JSON fixtures. `/standings` fails unless `with_standings` is set.
pub struct StaticBackend {
    pub data: LeagueData,
    pub standings: Option<Vec<TeamRecord>>,
    pub news: Vec<NewsItem>,
    pub calls: AtomicUsize,
}

impl StaticBackend {
    pub fn new() -> Self {
        Self {
            data: league_data(),
            standings: None,
            news: news(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_standings(mut self) -> Self {
        self.standings = Some(standings());
        self
    }

    pub fn with_data(mut self, data: LeagueData) -> Self {
        self.data = data;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Backend for StaticBackend {
    async fn users(&self) -> Result<Vec<TeamRecord>, AppError> {
        self.hit();
        Ok(self.data.users.clone())
    }

    async fn fixtures(&self) -> Result<Vec<Fixture>, AppError> {
        self.hit();
        Ok(self.data.fixtures.clone())
    }

    async fn leagues(&self) -> Result<Vec<League>, AppError> {
        self.hit();
        Ok(self.data.leagues.clone())
    }

    async fn standings(&self) -> Result<Vec<TeamRecord>, AppError> {
        self.hit();
        self.standings.clone().ok_or(AppError::Status {
            endpoint: "standings".to_string(),
            status: 404,
        })
    }

    async fn league_info(&self) -> Result<LeagueInfo, AppError> {
        self.hit();
        Ok(LeagueInfo {
            season: Some("2024/25".to_string()),
            description: None,
        })
    }

    async fn news(&self) -> Result<Vec<NewsItem>, AppError> {
        self.hit();
        Ok(self.news.clone())
    }
}

/// `/fixtures` is down; everything else answers.
pub struct FailingBackend;

#[async_trait]
impl Backend for FailingBackend {
    async fn users(&self) -> Result<Vec<TeamRecord>, AppError> {
        Ok(users())
    }

    async fn fixtures(&self) -> Result<Vec<Fixture>, AppError> {
        Err(AppError::Network("connection refused".to_string()))
    }

    async fn leagues(&self) -> Result<Vec<League>, AppError> {
        Ok(leagues())
    }

    async fn standings(&self) -> Result<Vec<TeamRecord>, AppError> {
        Err(AppError::Network("connection refused".to_string()))
    }

    async fn league_info(&self) -> Result<LeagueInfo, AppError> {
        Err(AppError::Network("connection refused".to_string()))
    }

    async fn news(&self) -> Result<Vec<NewsItem>, AppError> {
        Err(AppError::Network("connection refused".to_string()))
    }
}

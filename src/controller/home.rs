use serde::Serialize;

use crate::controller::standings::{HOME_RECENT_RESULTS, classify_fixtures, rank_all, recent_results};
use crate::model::{Fixture, League, LeagueData, NewsItem, TeamRecord};

pub const TOP_PLAYERS: usize = 3;
pub const FEATURED_LEAGUES: usize = 3;

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeStats {
    pub total_players: usize,
    pub total_matches: usize,
    pub active_leagues: usize,
    pub live_matches: usize,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct HomeSummary {
    pub stats: HomeStats,
    pub top_players: Vec<TeamRecord>,
    pub recent_matches: Vec<Fixture>,
    pub featured_leagues: Vec<League>,
    pub more_leagues: bool,
    pub news: Vec<NewsItem>,
}

#[must_use]
pub fn summarize_home(data: &LeagueData, news: Vec<NewsItem>) -> HomeSummary {
    let buckets = classify_fixtures(&data.fixtures);

    HomeSummary {
        stats: HomeStats {
            total_players: data.users.len(),
            total_matches: buckets.completed.len(),
            active_leagues: data.leagues.len(),
            live_matches: buckets.live.len(),
        },
        top_players: rank_all(&data.users)
            .into_iter()
            .take(TOP_PLAYERS)
            .cloned()
            .collect(),
        recent_matches: recent_results(&buckets.completed, HOME_RECENT_RESULTS)
            .into_iter()
            .cloned()
            .collect(),
        featured_leagues: data.leagues.iter().take(FEATURED_LEAGUES).cloned().collect(),
        more_leagues: data.leagues.len() > FEATURED_LEAGUES,
        news,
    }
}

use serde::Serialize;

use crate::args::AppConfig;
use crate::controller::home::{HomeSummary, summarize_home};
use crate::controller::players::{LeagueViewState, Pagination, PlayersViewState, filter_players};
use crate::controller::standings::{
    LEAGUE_RECENT_RESULTS, LeagueStandings, PlayoffBracket, StandingsRow, bracket_fixtures,
    classify_fixtures,
    derive_bracket, league_fixtures, league_standings, recent_results,
};
use crate::model::{
    Fixture, Id, League, LeagueData, LeagueInfo, NewsItem, TeamRecord, average_win_rate,
    leagues_for_team,
};

/// Optional data fetched next to the three required collections.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Extras {
    pub standings: Option<Vec<TeamRecord>>,
    pub league_info: Option<LeagueInfo>,
    pub news: Vec<NewsItem>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageView {
    Home(HomeSummary),
    League(Box<LeagueView>),
    Players(PlayersView),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeagueView {
    pub leagues: Vec<League>,
    pub selected: Option<League>,
    pub state: LeagueViewState,
    pub info: Option<LeagueInfo>,
    pub standings: Option<LeagueStandings>,
    pub table_page: Vec<StandingsRow>,
    pub pagination: Pagination,
    pub upcoming: Vec<Fixture>,
    pub live: Vec<Fixture>,
    pub recent_results: Vec<Fixture>,
    pub bracket: Option<PlayoffBracket>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LeagueBadge {
    pub id: Id,
    pub name: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlayerCard {
    pub team: TeamRecord,
    pub win_rate: u32,
    pub leagues: Vec<LeagueBadge>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayersStats {
    pub total_players: usize,
    pub total_matches: usize,
    pub league_count: usize,
    pub average_win_rate: u32,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlayersView {
    pub state: PlayersViewState,
    pub leagues: Vec<LeagueBadge>,
    pub stats: PlayersStats,
    pub pagination: Pagination,
    pub players: Vec<PlayerCard>,
}

#[must_use]
pub fn derive_home(data: &LeagueData, extras: &Extras) -> HomeSummary {
    summarize_home(data, extras.news.clone())
}

/// Builds every tab of the league page. An unknown or missing league id falls
/// back to the first league.
#[must_use]
pub fn derive_league(
    data: &LeagueData,
    extras: &Extras,
    state: &LeagueViewState,
    config: &AppConfig,
) -> LeagueView {
    let selected = state
        .league
        .as_ref()
        .and_then(|id| data.leagues.iter().find(|l| &l.id == id))
        .or_else(|| data.leagues.first());

    let mut state = state.clone();
    state.league = selected.map(|l| l.id.clone());

    let Some(league) = selected else {
        return LeagueView {
            leagues: data.leagues.clone(),
            selected: None,
            state,
            info: extras.league_info.clone(),
            standings: None,
            table_page: Vec::new(),
            pagination: Pagination::new(0, config.teams_per_page, 1),
            upcoming: Vec::new(),
            live: Vec::new(),
            recent_results: Vec::new(),
            bracket: None,
        };
    };

    let standings = league_standings(&data.users, extras.standings.as_deref(), league);
    let pagination = Pagination::new(standings.rows.len(), config.teams_per_page, state.page);
    state.page = pagination.current_page;
    let table_page = pagination.slice(&standings.rows).to_vec();

    let fixtures = league_fixtures(&data.fixtures, league);
    let buckets = classify_fixtures(fixtures.iter().copied());
    let recent = recent_results(&buckets.completed, LEAGUE_RECENT_RESULTS);
    let bracket = derive_bracket(bracket_fixtures(&data.fixtures, league), &standings.rows);

    LeagueView {
        leagues: data.leagues.clone(),
        selected: Some(league.clone()),
        state,
        info: extras.league_info.clone(),
        table_page,
        pagination,
        upcoming: buckets.upcoming.into_iter().cloned().collect(),
        live: buckets.live.into_iter().cloned().collect(),
        recent_results: recent.into_iter().cloned().collect(),
        bracket,
        standings: Some(standings),
    }
}

#[must_use]
pub fn derive_players(
    data: &LeagueData,
    state: &PlayersViewState,
    config: &AppConfig,
) -> PlayersView {
    let filtered = filter_players(&data.users, &data.leagues, &state.query);
    let pagination = Pagination::new(filtered.len(), config.players_per_page, state.page);

    let mut state = state.clone();
    state.page = pagination.current_page;

    let players = pagination
        .slice(&filtered)
        .iter()
        .map(|team| PlayerCard {
            team: (*team).clone(),
            win_rate: team.win_rate(),
            leagues: leagues_for_team(&data.leagues, &team.team_name)
                .into_iter()
                .map(badge)
                .collect(),
        })
        .collect();

    PlayersView {
        state,
        leagues: data.leagues.iter().map(badge).collect(),
        stats: PlayersStats {
            total_players: data.users.len(),
            total_matches: data.fixtures.len(),
            league_count: data.leagues.len(),
            average_win_rate: average_win_rate(&data.users),
        },
        pagination,
        players,
    }
}

fn badge(league: &League) -> LeagueBadge {
    LeagueBadge {
        id: league.id.clone(),
        name: league.name.clone(),
    }
}

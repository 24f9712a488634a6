use super::client::Backend;
use crate::error::AppError;
use crate::model::{LeagueData, LeagueInfo, NewsItem, TeamRecord};

/// Fetches the three required collections concurrently. The first failure
/// aborts the whole load.
///
/// # Errors
///
/// Will return `Err` if any of `/users`, `/fixtures` or `/leagues` fails.
pub async fn load_league_data(backend: &dyn Backend) -> Result<LeagueData, AppError> {
    let (users, fixtures, leagues) =
        futures::try_join!(backend.users(), backend.fixtures(), backend.leagues())?;

    log::debug!(
        "loaded {} users, {} fixtures, {} leagues",
        users.len(),
        fixtures.len(),
        leagues.len()
    );

    Ok(LeagueData {
        users,
        fixtures,
        leagues,
    })
}

/// `/standings` rows when the endpoint is enabled and answers; `None` means
/// derive the table from `/users` instead.
pub async fn load_backend_standings(
    backend: &dyn Backend,
    enabled: bool,
) -> Option<Vec<TeamRecord>> {
    if !enabled {
        return None;
    }
    match backend.standings().await {
        Ok(rows) => Some(rows),
        Err(e) => {
            log::warn!("standings endpoint unavailable, deriving table locally: {e}");
            None
        }
    }
}

pub async fn load_league_info(backend: &dyn Backend) -> Option<LeagueInfo> {
    match backend.league_info().await {
        Ok(info) => Some(info),
        Err(e) => {
            log::warn!("league info unavailable: {e}");
            None
        }
    }
}

pub async fn load_news(backend: &dyn Backend) -> Vec<NewsItem> {
    match backend.news().await {
        Ok(news) => news,
        Err(e) => {
            log::warn!("news unavailable: {e}");
            Vec::new()
        }
    }
}

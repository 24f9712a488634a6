mod common;

use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, test, web};
use scraper::{Html, Selector};
use std::sync::Arc;

use common::{FailingBackend, StaticBackend};
use efootball_board::AppState;
use efootball_board::args::AppConfig;
use efootball_board::controller::pages::{home, league, players};

fn sel(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let app = test::init_service(
        App::new()
            .app_data(Data::new(state))
            .route("/", web::get().to(home))
            .route("/league", web::get().to(league))
            .route("/players", web::get().to(players))
            .route("/health", web::get().to(HttpResponse::Ok)),
    )
    .await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

fn static_state() -> AppState {
    AppState::new(Arc::new(StaticBackend::new()), AppConfig::default())
}

fn data_teams(html: &Html, selector: &str) -> Vec<String> {
    html.select(&sel(selector))
        .filter_map(|el| el.value().attr("data-team"))
        .map(str::to_string)
        .collect()
}

#[actix_web::test]
async fn test_league_table_page() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get(static_state(), "/league?league=1").await;
    assert_eq!(status, StatusCode::OK);

    let html = Html::parse_document(&body);
    let teams = data_teams(&html, "#standings tbody tr");
    assert_eq!(
        teams,
        vec![
            "Red Lions",
            "Blue Sharks",
            "Green FC",
            "Golden Eagles",
            "Silver FC",
            "Night Owls"
        ]
    );

    let first_row = html
        .select(&sel("#standings tbody tr"))
        .next()
        .ok_or("no rows")?;
    assert_eq!(first_row.value().attr("class"), Some("zone-playoff"));
    assert_eq!(html.select(&sel("tr.zone-relegation")).count(), 2);
    assert_eq!(html.select(&sel(".table-source")).count(), 0);
    Ok(())
}

#[actix_web::test]
async fn test_league_falls_back_to_first_league() {
    let (status, body) = get(static_state(), "/league?league=404").await;
    assert_eq!(status, StatusCode::OK);
    let html = Html::parse_document(&body);
    assert_eq!(data_teams(&html, "#standings tbody tr").len(), 6);
}

#[actix_web::test]
async fn test_league_table_pages() {
    let config = AppConfig {
        teams_per_page: 4,
        ..AppConfig::default()
    };
    let state = AppState::new(Arc::new(StaticBackend::new()), config);
    let (_, body) = get(state, "/league?league=1&page=2").await;
    let html = Html::parse_document(&body);
    assert_eq!(
        data_teams(&html, "#standings tbody tr"),
        vec!["Silver FC", "Night Owls"]
    );
    assert_eq!(
        html.select(&sel(".pager .page-link.current"))
            .map(|el| el.text().collect::<String>())
            .collect::<Vec<_>>(),
        vec!["2"]
    );
}

#[actix_web::test]
async fn test_official_standings_when_enabled() {
    let config = AppConfig {
        use_standings_endpoint: true,
        ..AppConfig::default()
    };

    let state = AppState::new(Arc::new(StaticBackend::new().with_standings()), config.clone());
    let (_, body) = get(state, "/league?league=1").await;
    let html = Html::parse_document(&body);
    assert_eq!(
        data_teams(&html, "#standings tbody tr"),
        vec!["Blue Sharks", "Red Lions", "Green FC"]
    );
    assert_eq!(html.select(&sel(".table-source")).count(), 1);

    // endpoint missing: the derived table is served instead
    let state = AppState::new(Arc::new(StaticBackend::new()), config);
    let (status, body) = get(state, "/league?league=1").await;
    assert_eq!(status, StatusCode::OK);
    let html = Html::parse_document(&body);
    assert_eq!(data_teams(&html, "#standings tbody tr").len(), 6);
}

#[actix_web::test]
async fn test_playoffs_tab() -> Result<(), Box<dyn std::error::Error>> {
    let (_, body) = get(static_state(), "/league?league=1&tab=playoffs").await;
    let html = Html::parse_document(&body);
    let champion = html.select(&sel("#champion")).next().ok_or("no champion card")?;
    assert!(champion.text().collect::<String>().contains("Red Lions"));
    assert_eq!(html.select(&sel(".bracket-stage")).count(), 2);
    assert_eq!(html.select(&sel(".seed")).count(), 4);

    let (_, body) = get(static_state(), "/league?league=2&tab=playoffs").await;
    let html = Html::parse_document(&body);
    assert_eq!(html.select(&sel("#champion")).count(), 0);
    Ok(())
}

#[actix_web::test]
async fn test_players_search_and_paging() {
    let (status, body) = get(static_state(), "/players?search=fc").await;
    assert_eq!(status, StatusCode::OK);
    let html = Html::parse_document(&body);
    assert_eq!(
        data_teams(&html, "#players article.player-card"),
        vec!["Green FC", "Silver FC"]
    );

    let config = AppConfig {
        players_per_page: 4,
        ..AppConfig::default()
    };
    let state = AppState::new(Arc::new(StaticBackend::new()), config);
    let (_, body) = get(state, "/players?sort=name&page=2").await;
    let html = Html::parse_document(&body);
    assert_eq!(
        data_teams(&html, "#players article.player-card"),
        vec!["Red Lions", "Silver FC"]
    );
}

#[actix_web::test]
async fn test_players_league_filter() {
    let (_, body) = get(static_state(), "/players?league=2").await;
    let html = Html::parse_document(&body);
    assert_eq!(
        data_teams(&html, "#players article.player-card"),
        vec!["Red Lions", "Green FC"]
    );

    let (_, body) = get(static_state(), "/players?league=all").await;
    let html = Html::parse_document(&body);
    assert_eq!(data_teams(&html, "#players article.player-card").len(), 6);
}

#[actix_web::test]
async fn test_home_page() {
    let (status, body) = get(static_state(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = Html::parse_document(&body);
    assert_eq!(html.select(&sel("#top-players .top-player")).count(), 3);
    assert_eq!(html.select(&sel("#recent-matches .fixture")).count(), 3);
    assert_eq!(html.select(&sel("#featured-leagues .league-card")).count(), 2);
    assert_eq!(html.select(&sel("#news li")).count(), 2);
}

#[actix_web::test]
async fn test_error_page_has_retry() -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(Arc::new(FailingBackend), AppConfig::default());
    let (status, body) = get(state, "/league?league=1").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let html = Html::parse_document(&body);
    let panel = html.select(&sel(".error-panel")).next().ok_or("no error panel")?;
    assert!(
        panel
            .text()
            .collect::<String>()
            .contains("Failed to load league data from the server.")
    );
    let retry = html.select(&sel("a.retry")).next().ok_or("no retry link")?;
    assert_eq!(retry.value().attr("href"), Some("league?league=1"));
    assert_eq!(html.select(&sel("#standings")).count(), 0);

    let state = AppState::new(Arc::new(FailingBackend), AppConfig::default());
    let (_, body) = get(state, "/").await;
    let html = Html::parse_document(&body);
    let retry = html.select(&sel("a.retry")).next().ok_or("no retry link")?;
    assert_eq!(retry.value().attr("href"), Some("./"));
    Ok(())
}

#[actix_web::test]
async fn test_json_views() -> Result<(), Box<dyn std::error::Error>> {
    let (status, body) = get(static_state(), "/players?search=fc&json=1").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(value["page"], "players");
    assert_eq!(value["pagination"]["total_items"], 2);
    assert_eq!(value["players"].as_array().map(Vec::len), Some(2));

    let (_, body) = get(static_state(), "/league?league=1&json=1").await;
    let value: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(value["page"], "league");
    assert_eq!(value["standings"]["source"], "derived");
    assert_eq!(value["bracket"]["champion"], "Red Lions");

    let state = AppState::new(Arc::new(FailingBackend), AppConfig::default());
    let (status, body) = get(state, "/players?json=1").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let value: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(value["error"], "Failed to load league data from the server.");
    Ok(())
}

#[actix_web::test]
async fn test_health() {
    let (status, _) = get(static_state(), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

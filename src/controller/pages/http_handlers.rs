use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::args::AppConfig;
use crate::controller::api::{ApiClient, Backend};
use crate::mvu::{
    Deps, Msg, PageModel, PageRequest, decode_league_request, decode_players_request, run_page,
    wants_json,
};
use crate::view::index::NavItem;
use crate::view::{render_error_page, render_page_view};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub config: AppConfig,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, config: AppConfig) -> Self {
        Self { backend, config }
    }

    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let backend = Arc::new(ApiClient::new(&config.api_base));
        Self { backend, config }
    }
}

pub async fn home(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> HttpResponse {
    serve_page(&req, PageRequest::Home, &query, &state).await
}

pub async fn league(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> HttpResponse {
    serve_page(&req, decode_league_request(&query), &query, &state).await
}

pub async fn players(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> HttpResponse {
    serve_page(&req, decode_players_request(&query), &query, &state).await
}

async fn serve_page(
    req: &HttpRequest,
    request: PageRequest,
    query: &HashMap<String, String>,
    state: &AppState,
) -> HttpResponse {
    let want_json = wants_json(query);
    let (title, nav) = match &request {
        PageRequest::Home => ("Home", NavItem::Home),
        PageRequest::League(_) => ("Leagues", NavItem::League),
        PageRequest::Players(_) => ("Players", NavItem::Players),
    };

    let mut model = PageModel::new(request, want_json);
    let deps = Deps {
        backend: state.backend.as_ref(),
        config: &state.config,
    };

    if let Err(e) = run_page(&mut model, Msg::PageLoad, deps).await {
        let message = e.user_message();
        return if want_json {
            HttpResponse::BadGateway().json(json!({"error": message}))
        } else {
            let markup = render_error_page(title, nav, &message, &retry_href(req));
            HttpResponse::BadGateway()
                .content_type("text/html")
                .body(markup.into_string())
        };
    }

    if want_json {
        return match model.view {
            Some(view) => HttpResponse::Ok().json(view),
            None => HttpResponse::InternalServerError().json(json!({"error": "page not derived"})),
        };
    }

    let markup = match (model.markup, model.view.as_ref()) {
        (Some(markup), _) => markup,
        (None, Some(view)) => render_page_view(view),
        (None, None) => {
            return HttpResponse::InternalServerError()
                .json(json!({"error": "page not derived"}));
        }
    };
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// Same page and query, relative to the current path.
fn retry_href(req: &HttpRequest) -> String {
    let last_segment = req.path().rsplit('/').next().unwrap_or_default();
    let page = if last_segment.is_empty() { "./" } else { last_segment };
    match req.query_string() {
        "" => page.to_string(),
        qs => format!("{page}?{qs}"),
    }
}

use maud::Markup;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::args::AppConfig;
use crate::controller::api::{
    Backend, load_backend_standings, load_league_data, load_league_info, load_news,
};
use crate::controller::pages::{Extras, PageView, derive_home, derive_league, derive_players};
use crate::controller::players::{
    LeagueAction, LeagueTab, LeagueViewState, PlayersAction, PlayersViewState, SortKey,
};
use crate::error::AppError;
use crate::model::{Id, LeagueData};
use crate::view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    Home,
    League(LeagueViewState),
    Players(PlayersViewState),
}

#[derive(Debug, Clone)]
pub struct PageModel {
    pub request: PageRequest,
    pub want_json: bool,
    /// Bumped on every reload; results tagged with an older value are stale.
    pub generation: u64,
    pub data: Option<LeagueData>,
    pub extras: Option<Extras>,
    pub view: Option<PageView>,
    pub markup: Option<Markup>,
    pub error: Option<AppError>,
}

impl PageModel {
    #[must_use]
    pub fn new(request: PageRequest, want_json: bool) -> Self {
        Self {
            request,
            want_json,
            generation: 0,
            data: None,
            extras: None,
            view: None,
            markup: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    Reload,
    DataLoaded { generation: u64, data: LeagueData },
    ExtrasLoaded { generation: u64, extras: Extras },
    Derived(PageView),
    Rendered(Markup),
    Failed { generation: u64, error: AppError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadData { generation: u64 },
    LoadExtras { generation: u64 },
    Derive,
    Render,
}

pub fn update(model: &mut PageModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => load_effects(model.generation),
        Msg::Reload => {
            model.generation += 1;
            model.data = None;
            model.extras = None;
            model.view = None;
            model.markup = None;
            model.error = None;
            load_effects(model.generation)
        }
        Msg::DataLoaded { generation, data } => {
            if generation != model.generation {
                log::debug!("dropping stale data for generation {generation}");
                return vec![];
            }
            model.data = Some(data);
            derive_when_ready(model)
        }
        Msg::ExtrasLoaded { generation, extras } => {
            if generation != model.generation {
                log::debug!("dropping stale extras for generation {generation}");
                return vec![];
            }
            model.extras = Some(extras);
            derive_when_ready(model)
        }
        Msg::Derived(view) => {
            model.view = Some(view);
            if model.want_json {
                vec![]
            } else {
                vec![Effect::Render]
            }
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
        Msg::Failed { generation, error } => {
            if generation == model.generation {
                model.error = Some(error);
            }
            vec![]
        }
    }
}

fn load_effects(generation: u64) -> Vec<Effect> {
    vec![
        Effect::LoadData { generation },
        Effect::LoadExtras { generation },
    ]
}

fn derive_when_ready(model: &PageModel) -> Vec<Effect> {
    if model.data.is_some() && model.extras.is_some() && model.error.is_none() {
        vec![Effect::Derive]
    } else {
        vec![]
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub backend: &'a dyn Backend,
    pub config: &'a AppConfig,
}

pub async fn run_effect(effect: Effect, model: &PageModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadData { generation } => match load_league_data(deps.backend).await {
            Ok(data) => Msg::DataLoaded { generation, data },
            Err(error) => Msg::Failed { generation, error },
        },
        Effect::LoadExtras { generation } => {
            let extras = load_extras(&model.request, deps).await;
            Msg::ExtrasLoaded { generation, extras }
        }
        Effect::Derive => {
            let (Some(data), Some(extras)) = (model.data.as_ref(), model.extras.as_ref()) else {
                return Msg::Failed {
                    generation: model.generation,
                    error: AppError::Other("Derive requested before data loaded".into()),
                };
            };
            let view = match &model.request {
                PageRequest::Home => PageView::Home(derive_home(data, extras)),
                PageRequest::League(state) => {
                    PageView::League(Box::new(derive_league(data, extras, state, deps.config)))
                }
                PageRequest::Players(state) => {
                    PageView::Players(derive_players(data, state, deps.config))
                }
            };
            Msg::Derived(view)
        }
        Effect::Render => match model.view.as_ref() {
            Some(page_view) => Msg::Rendered(view::render_page_view(page_view)),
            None => Msg::Failed {
                generation: model.generation,
                error: AppError::Other("Render requested without a view".into()),
            },
        },
    }
}

async fn load_extras(request: &PageRequest, deps: Deps<'_>) -> Extras {
    match request {
        PageRequest::Home => Extras {
            news: load_news(deps.backend).await,
            ..Extras::default()
        },
        PageRequest::League(_) => {
            let (standings, league_info) = futures::join!(
                load_backend_standings(deps.backend, deps.config.use_standings_endpoint),
                load_league_info(deps.backend)
            );
            Extras {
                standings,
                league_info,
                news: Vec::new(),
            }
        }
        PageRequest::Players(_) => Extras::default(),
    }
}

/// Whether `json=1` (or `json=true`) was requested.
pub fn wants_json<S: BuildHasher>(query: &HashMap<String, String, S>) -> bool {
    match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}

fn query_page<S: BuildHasher>(query: &HashMap<String, String, S>) -> usize {
    query
        .get("page")
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(1)
}

fn query_id<S: BuildHasher>(query: &HashMap<String, String, S>, key: &str) -> Option<Id> {
    query
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "all")
        .map(Id::from)
}

/// League page state from `league`, `tab` and `page`. Bad values fall back to
/// the defaults.
pub fn decode_league_request<S: BuildHasher>(query: &HashMap<String, String, S>) -> PageRequest {
    let mut state = LeagueViewState::default();
    if let Some(id) = query_id(query, "league") {
        state = state.apply(LeagueAction::SelectLeague(id), usize::MAX);
    }
    if let Some(tab) = query.get("tab").and_then(|t| t.parse::<LeagueTab>().ok()) {
        state = state.apply(LeagueAction::SelectTab(tab), usize::MAX);
    }
    state = state.apply(LeagueAction::GoTo(query_page(query)), usize::MAX);
    PageRequest::League(state)
}

/// Players page state from `search`, `league`, `sort` and `page`. The page is
/// applied last so it survives the filter transitions that reset it.
pub fn decode_players_request<S: BuildHasher>(query: &HashMap<String, String, S>) -> PageRequest {
    let mut state = PlayersViewState::default();
    if let Some(term) = query.get("search") {
        state = state.apply(PlayersAction::Search(term.clone()), usize::MAX);
    }
    state = state.apply(PlayersAction::FilterLeague(query_id(query, "league")), usize::MAX);
    if let Some(key) = query.get("sort").and_then(|s| s.parse::<SortKey>().ok()) {
        state = state.apply(PlayersAction::Sort(key), usize::MAX);
    }
    state = state.apply(PlayersAction::GoTo(query_page(query)), usize::MAX);
    PageRequest::Players(state)
}

use maud::{Markup, html};

use crate::controller::pages::{PlayerCard, PlayersView};
use crate::controller::players::{PlayerQuery, SortKey};
use crate::model::rank_badge;
use crate::view::components::{render_form, render_pagination, render_stat_card, render_team};

/// Relative link to the players page. The page number is only carried when
/// paging; any filter link starts back at page 1.
#[must_use]
pub fn players_href(query: &PlayerQuery, page: usize) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    if !query.search.is_empty() {
        params.push(("search", query.search.clone()));
    }
    if let Some(id) = &query.league {
        params.push(("league", id.to_string()));
    }
    if query.sort != SortKey::default() {
        params.push(("sort", query.sort.as_str().to_string()));
    }
    if page > 1 {
        params.push(("page", page.to_string()));
    }
    if params.is_empty() {
        return "players".to_string();
    }
    match serde_urlencoded::to_string(&params) {
        Ok(qs) => format!("players?{qs}"),
        Err(_) => "players".to_string(),
    }
}

#[must_use]
pub fn render_players(view: &PlayersView) -> Markup {
    let query = view.state.query.clone();
    let href = move |page: usize| players_href(&query, page);
    let active_league = view
        .state
        .query
        .league
        .as_ref()
        .map(|id| {
            view.leagues
                .iter()
                .find(|l| &l.id == id)
                .map_or("Unknown", |l| l.name.as_str())
        });

    html! {
        header class="page-header" {
            h1 { "Football " span class="accent" { "Players" } }
            p { "Explore players across all leagues. Track their stats, performance, and progress." }
        }

        section class="stats" {
            (render_stat_card("Total Players", view.stats.total_players))
            (render_stat_card("Total Matches", view.stats.total_matches))
            (render_stat_card("Leagues", view.stats.league_count))
            (render_stat_card("Avg Win Rate", format!("{}%", view.stats.average_win_rate)))
        }

        // a new submission replaces any request still in flight
        form class="filters" action="players" method="get"
            hx-get="players" hx-target="#page" hx-select="#page" hx-swap="outerHTML"
            hx-push-url="true" hx-sync="this:replace"
            hx-trigger="input delay:300ms, change, submit" {
            input type="text" name="search" placeholder="Search players or teams..."
                value=(view.state.query.search);
            select name="league" {
                option value="all" selected[view.state.query.league.is_none()] { "All Leagues" }
                @for league in &view.leagues {
                    option value=(league.id.as_str())
                        selected[view.state.query.league.as_ref() == Some(&league.id)] {
                        (league.name)
                    }
                }
            }
            select name="sort" {
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[key == view.state.query.sort] {
                        (key.label())
                    }
                }
            }
            noscript { button type="submit" { "Apply" } }
        }

        div class="active-filters" {
            @if let Some(name) = active_league {
                @let cleared = PlayerQuery { league: None, ..view.state.query.clone() };
                span class="chip" {
                    "League: " (name)
                    a href=(players_href(&cleared, 1)) title="Clear league filter" { "×" }
                }
            }
            @if !view.state.query.search.is_empty() {
                @let cleared = PlayerQuery { search: String::new(), ..view.state.query.clone() };
                span class="chip" {
                    "Search: \"" (view.state.query.search) "\""
                    a href=(players_href(&cleared, 1)) title="Clear search" { "×" }
                }
            }
        }

        section class="player-grid" id="players" {
            @if view.players.is_empty() {
                p class="empty" { "No players found" }
            }
            @for card in &view.players {
                (render_player_card(card))
            }
        }

        (render_pagination(&view.pagination, &href))
    }
}

fn render_player_card(card: &PlayerCard) -> Markup {
    let team = &card.team;
    html! {
        article class="player-card" data-team=(team.team_name) {
            @if !card.leagues.is_empty() {
                div class="league-badges" {
                    @for league in &card.leagues {
                        span class="league-badge" { (league.name) }
                    }
                }
            }
            div class="player-card-header" {
                span class="rank-badge" { (rank_badge(team.rank)) }
                (render_team(team))
            }
            dl class="player-stats" {
                dt { "Points" } dd { (team.points) }
                dt { "Played" } dd { (team.played) }
                dt { "W-D-L" } dd { (team.won) "-" (team.drawn) "-" (team.lost) }
                dt { "Goals" } dd { (team.goals_for) ":" (team.goals_against) }
                dt { "Win Rate" } dd class="win-rate" { (card.win_rate) "%" }
            }
            (render_form(&team.form))
        }
    }
}

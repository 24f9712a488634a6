use maud::{Markup, html};

use crate::controller::pages::LeagueView;
use crate::controller::players::LeagueTab;
use crate::controller::standings::{PlayoffBracket, StandingsSource};
use crate::model::{Fixture, Id, PlayoffStage, format_goal_difference};
use crate::view::components::{
    render_avatar, render_fixture, render_form, render_pagination, render_team,
};

/// Form entries shown per team in the table.
const FORM_SHOWN: usize = 5;

/// Relative link to the league page with the given state.
#[must_use]
pub fn league_href(league: Option<&Id>, tab: LeagueTab, page: usize) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(id) = league {
        params.push(("league", id.to_string()));
    }
    params.push(("tab", tab.as_str().to_string()));
    if page > 1 {
        params.push(("page", page.to_string()));
    }
    match serde_urlencoded::to_string(&params) {
        Ok(qs) => format!("league?{qs}"),
        Err(_) => "league".to_string(),
    }
}

#[must_use]
pub fn render_league(view: &LeagueView) -> Markup {
    let current = view.state.league.as_ref();
    html! {
        header class="page-header" {
            @if let Some(league) = &view.selected {
                h1 { (league.name) }
                p { (league.description_or_default()) }
            } @else {
                h1 { "Leagues" }
                p { "Select a league to view details" }
            }
            @if let Some(info) = &view.info {
                @if let Some(season) = &info.season {
                    p class="season" { "Season " (season) }
                }
                @if let Some(description) = &info.description {
                    p class="league-info" { (description) }
                }
            }
        }

        nav class="league-selector" {
            @for league in &view.leagues {
                a href=(league_href(Some(&league.id), view.state.tab, 1))
                    class=[(Some(&league.id) == current).then_some("selected")] {
                    (league.name)
                }
            }
        }

        @if view.selected.is_some() {
            nav class="tabs" {
                @for tab in LeagueTab::ALL {
                    a href=(league_href(current, tab, view.state.page))
                        class=[(tab == view.state.tab).then_some("active")] {
                        (tab.label())
                    }
                }
            }
            @match view.state.tab {
                LeagueTab::Table => { (render_table(view)) }
                LeagueTab::Fixtures => { (render_fixtures(view)) }
                LeagueTab::Playoffs => { (render_playoffs(view.bracket.as_ref())) }
            }
        } @else {
            p class="empty" {
                "Choose a league from above to view its table, fixtures, and playoff information"
            }
        }
    }
}

fn render_table(view: &LeagueView) -> Markup {
    let current = view.state.league.clone();
    let href = move |page: usize| league_href(current.as_ref(), LeagueTab::Table, page);
    html! {
        section class="league-table" {
            @if let Some(standings) = &view.standings {
                @if standings.source == StandingsSource::Backend {
                    p class="table-source" { "Official standings" }
                }
            }
            table class="styled-table" id="standings" {
                thead {
                    tr {
                        th { "Pos" }
                        th { "Team" }
                        th { "P" }
                        th { "W" }
                        th { "D" }
                        th { "L" }
                        th { "GF" }
                        th { "GA" }
                        th { "GD" }
                        th { "Pts" }
                        th { "Form" }
                    }
                }
                tbody {
                    @if view.table_page.is_empty() {
                        tr {
                            td colspan="11" { "No teams in this league yet" }
                        }
                    }
                    @for row in &view.table_page {
                        tr class=(row.zone.css_class()) data-team=(row.team.team_name) {
                            td class="position" { (row.position) }
                            td { (render_team(&row.team)) }
                            td { (row.team.played) }
                            td { (row.team.won) }
                            td { (row.team.drawn) }
                            td { (row.team.lost) }
                            td { (row.team.goals_for) }
                            td { (row.team.goals_against) }
                            td { (format_goal_difference(row.team.goal_difference())) }
                            td class="points" { (row.team.points) }
                            td { (render_form(row.team.recent_form(FORM_SHOWN))) }
                        }
                    }
                }
            }
            (render_pagination(&view.pagination, &href))
            div class="legend" {
                span class="zone-playoff" { "Playoff places" }
                span class="zone-relegation" { "Relegation zone" }
            }
        }
    }
}

fn render_fixtures(view: &LeagueView) -> Markup {
    html! {
        section class="fixtures" {
            @if !view.live.is_empty() {
                h2 { "Live Now" }
                @for fixture in &view.live {
                    (render_fixture(fixture))
                }
            }
            h2 { "Upcoming Fixtures" }
            @if view.upcoming.is_empty() {
                p class="empty" { "No upcoming fixtures" }
            }
            @for fixture in &view.upcoming {
                (render_fixture(fixture))
            }
            h2 { "Recent Results" }
            @if view.recent_results.is_empty() {
                p class="empty" { "No results yet" }
            }
            @for fixture in &view.recent_results {
                (render_fixture(fixture))
            }
        }
    }
}

fn render_playoffs(bracket: Option<&PlayoffBracket>) -> Markup {
    html! {
        section class="playoffs" {
            @match bracket {
                None => {
                    p class="empty" { "No playoff fixtures have been scheduled for this league." }
                }
                Some(bracket) => {
                    div class="champion-card" id="champion" {
                        @if let Some(champion) = &bracket.champion {
                            (render_avatar(champion, None))
                            h2 { "🏆 " (champion) }
                            span { "CHAMPION" }
                        } @else {
                            h2 { "Champion to be decided" }
                        }
                    }
                    div class="bracket" {
                        @for stage in [PlayoffStage::Quarterfinal, PlayoffStage::Semifinal, PlayoffStage::Final] {
                            @let matches = bracket.stage(stage);
                            @if !matches.is_empty() {
                                div class="bracket-stage" {
                                    h3 { (stage.label()) }
                                    @for fixture in matches {
                                        (render_bracket_match(fixture))
                                    }
                                }
                            }
                        }
                    }
                    @if !bracket.seeds.is_empty() {
                        div class="seeds" {
                            h3 { "Playoff Teams" }
                            @for row in &bracket.seeds {
                                div class="seed" {
                                    span class="seed-number" { "#" (row.position) " Seed" }
                                    (render_team(&row.team))
                                    span class="points" { (row.team.points) " PTS" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_bracket_match(fixture: &Fixture) -> Markup {
    let winner = fixture.winner();
    html! {
        div class="bracket-match" {
            @for (team, score) in [(&fixture.home_team, fixture.home_score), (&fixture.away_team, fixture.away_score)] {
                div class=[(winner == Some(team.as_str())).then_some("advances")] {
                    (render_avatar(team, None))
                    span class="team-name" { (team) }
                    span class="score" {
                        @if let Some(score) = score { (score) } @else { "-" }
                    }
                }
            }
            span class={ "status " (fixture.status.css_class()) } { (fixture.status.label()) }
        }
    }
}

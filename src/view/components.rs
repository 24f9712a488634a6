use maud::{Markup, html};

use crate::controller::players::Pagination;
use crate::model::{
    Fixture, FormResult, TeamRecord, format_fixture_date, team_color, team_initials,
};

/// Round badge with the team's initials, or the avatar image when the backend
/// sent one.
pub fn render_avatar(team_name: &str, avatar: Option<&str>) -> Markup {
    html! {
        @match avatar.filter(|a| !a.is_empty()) {
            Some(src) => {
                img class="avatar" src=(src) alt=(team_name);
            }
            None => {
                span class={ "avatar " (team_color(team_name)) } title=(team_name) {
                    (team_initials(team_name))
                }
            }
        }
    }
}

pub fn render_team(team: &TeamRecord) -> Markup {
    html! {
        div class="team" {
            (render_avatar(&team.team_name, team.avatar.as_deref()))
            div class="team-text" {
                span class="team-name" { (team.team_name) }
                span class="username" { "@" (team.username) }
            }
        }
    }
}

pub fn render_form(form: &[FormResult]) -> Markup {
    html! {
        div class="form" {
            @if form.is_empty() {
                span class="form-empty" { "-" }
            }
            @for result in form {
                span class={ "form-dot " (result.css_class()) } { (result.letter()) }
            }
        }
    }
}

pub fn render_fixture(fixture: &Fixture) -> Markup {
    html! {
        div class="fixture" {
            div class="fixture-team home" {
                (render_avatar(&fixture.home_team, None))
                span { (fixture.home_team) }
            }
            div class="fixture-centre" {
                span class="score" { (fixture.score_line()) }
                span class="fixture-meta" {
                    @if let Some(round) = fixture.round {
                        "Round " (round)
                    }
                    @if let Some(date) = &fixture.date {
                        " • " (format_fixture_date(date))
                    }
                    @if let Some(time) = &fixture.time {
                        " " (time)
                    }
                    @if let Some(venue) = &fixture.venue {
                        " • " (venue)
                    }
                }
                span class={ "status " (fixture.status.css_class()) } { (fixture.status.label()) }
            }
            div class="fixture-team away" {
                span { (fixture.away_team) }
                (render_avatar(&fixture.away_team, None))
            }
        }
    }
}

/// Prev / numbered / next controls. `href` builds the link for a page number.
/// The pager is left out when everything fits on one page.
pub fn render_pagination(pagination: &Pagination, href: &dyn Fn(usize) -> String) -> Markup {
    let (first, last) = pagination.showing();
    html! {
        div class="pagination" {
            span class="showing" {
                "Showing " (first) "-" (last) " of " (pagination.total_items)
            }
            @if pagination.page_count > 1 {
                nav class="pager" {
                    @if pagination.has_prev() {
                        a class="page-link" href=(href(pagination.current_page - 1)) { "←" }
                    } @else {
                        span class="page-link disabled" { "←" }
                    }
                    @for number in pagination.page_numbers() {
                        @if number == pagination.current_page {
                            span class="page-link current" { (number) }
                        } @else {
                            a class="page-link" href=(href(number)) { (number) }
                        }
                    }
                    @if pagination.has_next() {
                        a class="page-link" href=(href(pagination.current_page + 1)) { "→" }
                    } @else {
                        span class="page-link disabled" { "→" }
                    }
                }
            }
        }
    }
}

pub fn render_stat_card(label: &str, value: impl std::fmt::Display) -> Markup {
    html! {
        div class="stat-card" {
            div class="stat-value" { (value.to_string()) }
            div class="stat-label" { (label) }
        }
    }
}

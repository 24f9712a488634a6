use maud::{Markup, html};

use crate::controller::home::HomeSummary;
use crate::controller::players::LeagueTab;
use crate::model::{format_fixture_date, rank_badge};
use crate::view::components::{render_fixture, render_stat_card, render_team};
use crate::view::league::league_href;

#[must_use]
pub fn render_home(summary: &HomeSummary) -> Markup {
    html! {
        section class="hero" {
            h1 { "Welcome to " span class="accent" { "eFootball" } }
            p {
                "Experience the ultimate competitive gaming platform. Join leagues, "
                "compete with players worldwide, and climb the ranks to become the champion."
            }
            div class="hero-actions" {
                a class="button primary" href="league" { "🏆 View Leagues" }
                a class="button" href="players" { "👥 Browse Players" }
            }
        }

        section class="stats" {
            (render_stat_card("Total Players", summary.stats.total_players))
            (render_stat_card("Matches Played", summary.stats.total_matches))
            (render_stat_card("Active Leagues", summary.stats.active_leagues))
            (render_stat_card("Live Matches", summary.stats.live_matches))
        }

        section class="grid" {
            div class="panel" id="top-players" {
                div class="panel-header" {
                    h2 { "Top Players" }
                    a href="players" { "View All →" }
                }
                @for (idx, player) in summary.top_players.iter().enumerate() {
                    div class="top-player" {
                        span class="rank-badge" { (rank_badge(u32::try_from(idx + 1).ok())) }
                        (render_team(player))
                        div class="top-player-stats" {
                            span class="points" { (player.points) " PTS" }
                            span class="record" { (player.won) "-" (player.drawn) "-" (player.lost) }
                        }
                    }
                }
            }

            div class="panel" id="recent-matches" {
                div class="panel-header" {
                    h2 { "Recent Matches" }
                    a href=(league_href(None, LeagueTab::Fixtures, 1)) { "View All →" }
                }
                @if summary.recent_matches.is_empty() {
                    p class="empty" { "No recent matches available" }
                } @else {
                    @for fixture in &summary.recent_matches {
                        (render_fixture(fixture))
                    }
                }
            }
        }

        section class="leagues" id="featured-leagues" {
            h2 { "Featured Leagues" }
            p { "Join exciting tournaments and compete against top players." }
            div class="league-cards" {
                @for league in &summary.featured_leagues {
                    div class="league-card" {
                        div class="league-card-header" {
                            h3 { (league.name) }
                            span class="league-status" { (league.status_label()) }
                        }
                        p { (league.description_or_default()) }
                        a class="button" href=(league_href(Some(&league.id), LeagueTab::Table, 1)) { "View League" }
                    }
                }
            }
            @if summary.more_leagues {
                a class="button" href="league" { "View All Leagues →" }
            }
        }

        @if !summary.news.is_empty() {
            section class="news" id="news" {
                h2 { "Latest News" }
                ul {
                    @for item in &summary.news {
                        li {
                            strong { (item.title) }
                            @if let Some(date) = &item.date {
                                span class="news-date" { " " (format_fixture_date(date)) }
                            }
                            @if let Some(summary_text) = &item.summary {
                                p { (summary_text) }
                            }
                        }
                    }
                }
            }
        }
    }
}

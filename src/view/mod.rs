pub mod components;
pub mod error;
pub mod home;
pub mod index;
pub mod league;
pub mod players;

use maud::Markup;

use crate::controller::pages::PageView;
use index::{NavItem, render_layout};

/// Full document for a derived page.
#[must_use]
pub fn render_page_view(view: &PageView) -> Markup {
    match view {
        PageView::Home(summary) => render_layout("Home", NavItem::Home, &home::render_home(summary)),
        PageView::League(page) => {
            let title = page
                .selected
                .as_ref()
                .map_or("Leagues", |l| l.name.as_str());
            render_layout(title, NavItem::League, &league::render_league(page))
        }
        PageView::Players(page) => {
            render_layout("Players", NavItem::Players, &players::render_players(page))
        }
    }
}

#[must_use]
pub fn render_error_page(title: &str, active: NavItem, message: &str, retry_href: &str) -> Markup {
    render_layout(title, active, &error::render_error(message, retry_href))
}

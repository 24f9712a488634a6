use maud::{DOCTYPE, Markup, html};

use crate::HTMX_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    League,
    Players,
}

impl NavItem {
    const ALL: [NavItem; 3] = [NavItem::Home, NavItem::League, NavItem::Players];

    /// Relative so the app can be mounted under a prefix.
    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            NavItem::Home => "./",
            NavItem::League => "league",
            NavItem::Players => "players",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::League => "Leagues",
            NavItem::Players => "Players",
        }
    }
}

pub fn render_navbar(active: NavItem) -> Markup {
    html! {
        nav class="navbar" {
            a class="brand" href="./" { "eFootball" }
            ul class="nav-links" {
                @for item in NavItem::ALL {
                    li {
                        a href=(item.href()) class=[(item == active).then_some("active")] { (item.label()) }
                    }
                }
            }
        }
    }
}

/// Full document around a page body. The body sits in `#page` so htmx
/// requests can swap just that element.
pub fn render_layout(title: &str, active: NavItem, body: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" type="text/css" href="static/styles.css";
                title { (title) " | eFootball" }
                script src=(HTMX_PATH) defer {}
            }
            body {
                (render_navbar(active))
                main id="page" {
                    (body)
                }
                footer class="footer" {
                    p { "© 2024 eFootball. All rights reserved." }
                }
            }
        }
    }
}

use maud::{Markup, html};

/// Single error panel for a failed page load. `retry_href` reloads the same
/// page with the same query.
#[must_use]
pub fn render_error(message: &str, retry_href: &str) -> Markup {
    html! {
        div class="error-panel" role="alert" {
            strong { "Error: " }
            (message)
            a class="button retry" href=(retry_href) { "Retry" }
        }
    }
}

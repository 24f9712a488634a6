use chrono::{DateTime, NaiveDate};

const TEAM_COLORS: [&str; 8] = [
    "team-violet",
    "team-purple",
    "team-blue",
    "team-green",
    "team-red",
    "team-yellow",
    "team-pink",
    "team-indigo",
];

/// Up to two upper-cased initials, one per word. `TM` for an empty name.
#[must_use]
pub fn team_initials(team_name: &str) -> String {
    let initials: String = team_name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if initials.is_empty() {
        "TM".to_string()
    } else {
        initials
    }
}

/// Stable avatar colour picked by the character count of the name.
#[must_use]
pub fn team_color(team_name: &str) -> &'static str {
    TEAM_COLORS[team_name.chars().count() % TEAM_COLORS.len()]
}

#[must_use]
pub fn rank_badge(rank: Option<u32>) -> String {
    match rank {
        None | Some(0) => "#0".to_string(),
        Some(1) => "🥇".to_string(),
        Some(2) => "🥈".to_string(),
        Some(3) => "🥉".to_string(),
        Some(n) => format!("#{n}"),
    }
}

#[must_use]
pub fn format_goal_difference(gd: i64) -> String {
    if gd > 0 { format!("+{gd}") } else { gd.to_string() }
}

/// Renders backend dates as `dd/mm/yyyy`. Anything unparsable is shown as is.
#[must_use]
pub fn format_fixture_date(raw: &str) -> String {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

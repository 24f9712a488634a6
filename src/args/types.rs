use clap::Parser;

use crate::controller::api::DEFAULT_API_BASE;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the REST backend serving /users, /fixtures and /leagues.
    #[arg(
        short = 'a',
        long,
        value_name = "API_BASE",
        default_value = DEFAULT_API_BASE,
        value_parser = crate::args::validation::check_base_url
    )]
    pub api_base: String,
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Read league tables from /standings, falling back to deriving them from
    /// /users when that endpoint fails.
    #[arg(long)]
    pub standings_endpoint: bool,
    #[arg(
        long,
        value_name = "PLAYERS_PER_PAGE",
        default_value = "8",
        value_parser = crate::args::validation::check_page_size
    )]
    pub players_per_page: usize,
    #[arg(
        long,
        value_name = "TEAMS_PER_PAGE",
        default_value = "10",
        value_parser = crate::args::validation::check_page_size
    )]
    pub teams_per_page: usize,
}

/// Settings shared with every request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub use_standings_endpoint: bool,
    pub players_per_page: usize,
    pub teams_per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            use_standings_endpoint: false,
            players_per_page: 8,
            teams_per_page: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub config: AppConfig,
}

impl From<Args> for CleanArgs {
    fn from(args: Args) -> Self {
        Self {
            bind: args.bind,
            port: args.port,
            config: AppConfig {
                api_base: args.api_base,
                use_standings_endpoint: args.standings_endpoint,
                players_per_page: args.players_per_page,
                teams_per_page: args.teams_per_page,
            },
        }
    }
}

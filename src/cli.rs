use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Which table to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    /// Today's games, the points leaders and the top teams
    #[default]
    Home,
    /// Season stats of every forward on the selected teams
    Players,
    /// League-wide standings
    Standings,
    /// Scoreboard for one day
    Scores,
    /// Regular season points leaders
    Leaders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Returns true when the arguments ask for a configuration change or
/// listing instead of a stats view.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// NHL stats in the terminal
///
/// Fetches rosters, player season stats, standings, scores and leaders from
/// the public NHL web API and prints them as sortable tables or JSON.
///
/// The players view fans out one request per team roster and one per
/// player, with a bounded number of requests in flight. Responses are
/// cached for an hour by default.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Table to show.
    #[arg(
        long = "view",
        short = 'v',
        value_enum,
        default_value_t = View::Home,
        help_heading = "Display Options"
    )]
    pub view: View,

    /// Sort rows by this column, largest first (e.g. "Points", "Shooting Percentage").
    #[arg(long = "sort", short = 's', value_name = "COLUMN", help_heading = "Display Options")]
    pub sort: Option<String>,

    /// Comma-separated team codes for the players view. Defaults to every team.
    #[arg(
        long = "teams",
        short = 't',
        value_delimiter = ',',
        value_name = "CODES",
        help_heading = "Display Options"
    )]
    pub teams: Vec<String>,

    /// Scoreboard date in YYYY-MM-DD format. Defaults to today.
    #[arg(long = "date", short = 'd', help_heading = "Display Options")]
    pub date: Option<String>,

    /// Season for the leaders view, e.g. 20232024. Defaults to the current season.
    #[arg(long = "season", help_heading = "Display Options")]
    pub season: Option<String>,

    /// How many leaders and top teams to show.
    #[arg(long = "limit", short = 'n', help_heading = "Display Options")]
    pub limit: Option<usize>,

    /// Output format.
    #[arg(
        long = "format",
        short = 'f',
        value_enum,
        default_value_t = OutputFormat::Table,
        help_heading = "Display Options"
    )]
    pub format: OutputFormat,

    /// Disable colors in table output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Maximum number of requests in flight. Overrides the config file.
    #[arg(long = "concurrency", short = 'j', help_heading = "Network")]
    pub concurrency: Option<usize>,

    /// Update API domain in config.
    #[arg(long = "config", value_name = "API_DOMAIN", help_heading = "Configuration")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug logging. Logs are also echoed to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. Defaults to the log directory next to the config file.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

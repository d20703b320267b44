use crate::cli::{Args, OutputFormat, View};
use crate::config::Config;
use crate::constants::{DEFAULT_TOP_N, NHL_TEAM_ABBREVIATIONS};
use crate::data_fetcher::api::{
    NhlApi, PlayerStatsReport, current_season, fetch_point_leaders, fetch_team_standings,
    fetch_todays_games, fetch_top_teams, gather_all_player_stats, parse_date, today_local,
    validate_season,
};
use crate::data_fetcher::models::TableRecord;
use crate::error::AppError;
use crate::ui::colors::{error_fg, warning_fg};
use crate::ui::{StatsTable, sort_records_by_column_desc};
use crossterm::style::Stylize;
use serde::Serialize;
use std::io::{IsTerminal, stdout};
use tracing::{info, warn};

/// Validates command line argument combinations.
///
/// Returns an error if a value can't be used before any request is made.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if let Some(date) = &args.date {
        parse_date(date)?;
    }
    if let Some(season) = &args.season {
        validate_season(season)?;
    }
    if args.concurrency == Some(0) {
        return Err(AppError::config_error("--concurrency must be at least 1"));
    }
    if args.limit == Some(0) {
        return Err(AppError::config_error("--limit must be at least 1"));
    }
    Ok(())
}

/// Team codes for the players view: the `--teams` list upper-cased with
/// blanks and repeats removed, or every team when none were given.
pub fn resolve_teams(args: &Args) -> Vec<String> {
    let mut teams: Vec<String> = Vec::new();
    for team in &args.teams {
        let code = team.trim().to_ascii_uppercase();
        if !code.is_empty() && !teams.contains(&code) {
            teams.push(code);
        }
    }

    if teams.is_empty() {
        return NHL_TEAM_ABBREVIATIONS.iter().map(|t| t.to_string()).collect();
    }

    for team in &teams {
        if !NHL_TEAM_ABBREVIATIONS.contains(&team.as_str()) {
            warn!("Unknown team code {team}, requesting it anyway");
        }
    }
    teams
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the saved config (or defaults if none can be read), applies
/// the changes, validates and saves.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies command line overrides on top of the loaded configuration.
pub fn build_api(config: &Config, args: &Args) -> Result<NhlApi, AppError> {
    let api = NhlApi::from_config(config)?;
    Ok(match args.concurrency {
        Some(limit) => api.with_max_concurrent_requests(limit),
        None => api,
    })
}

/// Runs the selected view against `api`.
pub async fn run_view(api: &NhlApi, args: &Args) -> Result<(), AppError> {
    match args.view {
        View::Home => handle_home_command(api, args).await,
        View::Players => handle_players_command(api, args).await,
        View::Standings => handle_standings_command(api, args).await,
        View::Scores => handle_scores_command(api, args).await,
        View::Leaders => handle_leaders_command(api, args).await,
    }
}

/// Gathers player stats for `teams`, treating the run as failed when every
/// requested roster failed.
pub async fn fetch_player_data(
    api: &NhlApi,
    teams: &[String],
) -> Result<PlayerStatsReport, AppError> {
    let report = gather_all_player_stats(api, teams).await;

    if !teams.is_empty() && report.roster_failures.len() == teams.len() {
        let first = report
            .roster_failures
            .first()
            .map(|f| f.to_string())
            .unwrap_or_default();
        return Err(AppError::api_no_data(
            format!("all {} roster requests failed, first: {first}", teams.len()),
            api.api_domain(),
        ));
    }

    Ok(report)
}

/// Handles the players view: aggregated forward stats for the selected teams.
///
/// Fails without printing a table when every roster request failed.
pub async fn handle_players_command(api: &NhlApi, args: &Args) -> Result<(), AppError> {
    let teams = resolve_teams(args);
    info!("Fetching player data for {} teams", teams.len());

    let report = fetch_player_data(api, &teams).await?;

    if report.has_failures() {
        print_failure_summary(&report, styled_output(args));
    }

    emit(report.into_entries(), "Player Stats", args)
}

/// Handles the standings view.
pub async fn handle_standings_command(api: &NhlApi, args: &Args) -> Result<(), AppError> {
    let standings = fetch_team_standings(api).await?;
    emit(standings, "Team Standings", args)
}

/// Handles the scores view for `--date` or today.
pub async fn handle_scores_command(api: &NhlApi, args: &Args) -> Result<(), AppError> {
    let date = args.date.clone().unwrap_or_else(today_local);
    let games = fetch_todays_games(api, &date).await?;
    if games.is_empty() && args.format == OutputFormat::Table {
        println!("No games on {date}");
        return Ok(());
    }
    emit(games, &format!("Games {date}"), args)
}

/// Handles the leaders view for `--season` or the current season.
pub async fn handle_leaders_command(api: &NhlApi, args: &Args) -> Result<(), AppError> {
    let season = args.season.clone().unwrap_or_else(current_season);
    let limit = args.limit.unwrap_or(DEFAULT_TOP_N);
    let leaders = fetch_point_leaders(api, &season, limit).await?;
    emit(leaders, &format!("Points Leaders {season}"), args)
}

#[derive(Serialize)]
struct HomeSummary<G, L, T> {
    games: G,
    leaders: L,
    top_teams: T,
}

/// Handles the home view: today's games, the points leaders and the top
/// teams, fetched concurrently. A failing section is reported and skipped.
pub async fn handle_home_command(api: &NhlApi, args: &Args) -> Result<(), AppError> {
    let date = args.date.clone().unwrap_or_else(today_local);
    let season = args.season.clone().unwrap_or_else(current_season);
    let limit = args.limit.unwrap_or(DEFAULT_TOP_N);

    if args.sort.is_some() {
        warn!("--sort is ignored in the home view");
    }

    let (games, leaders, top_teams) = tokio::join!(
        fetch_todays_games(api, &date),
        fetch_point_leaders(api, &season, limit),
        fetch_top_teams(api, limit),
    );

    let styled = styled_output(args);
    let games = section_or_empty(games, "games", styled);
    let leaders = section_or_empty(leaders, "points leaders", styled);
    let top_teams = section_or_empty(top_teams, "top teams", styled);

    if args.format == OutputFormat::Json {
        let summary = HomeSummary {
            games,
            leaders,
            top_teams,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let mut out = stdout();
    for table in [
        StatsTable::from_records(&games).with_title(format!("Games {date}")),
        StatsTable::from_records(&leaders).with_title(format!("Points Leaders {season}")),
        StatsTable::from_records(&top_teams).with_title("Top Teams"),
    ] {
        table.print(&mut out, styled)?;
        println!();
    }
    Ok(())
}

/// One-line message for a view that failed, e.g.
/// "Failed to fetch player data: ...".
pub fn view_error_message(view: View, error: &AppError) -> String {
    let data = match view {
        View::Home => "home",
        View::Players => "player",
        View::Standings => "standings",
        View::Scores => "scores",
        View::Leaders => "leaders",
    };
    format!("Failed to fetch {data} data: {error}")
}

/// Prints a failed view's error on stderr.
pub fn report_view_error(args: &Args, error: &AppError) {
    print_error(&view_error_message(args.view, error), styled_output(args));
}

fn section_or_empty<T>(result: Result<Vec<T>, AppError>, section: &str, styled: bool) -> Vec<T> {
    result.unwrap_or_else(|e| {
        print_error(&format!("Failed to fetch {section}: {e}"), styled);
        Vec::new()
    })
}

/// Sorts if requested, then prints records as a table or as JSON.
fn emit<R>(mut records: Vec<R>, title: &str, args: &Args) -> Result<(), AppError>
where
    R: TableRecord + Serialize,
{
    if let Some(column) = &args.sort {
        sort_records_by_column_desc(&mut records, column)?;
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Table => {
            StatsTable::from_records(&records)
                .with_title(title)
                .print(&mut stdout(), styled_output(args))?;
        }
    }
    Ok(())
}

fn styled_output(args: &Args) -> bool {
    !args.plain && stdout().is_terminal()
}

fn print_error(message: &str, styled: bool) {
    if styled {
        eprintln!("{}", message.with(error_fg()));
    } else {
        eprintln!("{message}");
    }
}

fn print_failure_summary(report: &PlayerStatsReport, styled: bool) {
    let counts = report
        .failure_counts()
        .iter()
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    let message = format!(
        "Warning: {} rosters and {} players could not be fetched ({counts})",
        report.roster_failures.len(),
        report.player_failures.len()
    );

    if styled {
        eprintln!("{}", message.with(warning_fg()));
    } else {
        eprintln!("{message}");
    }
}

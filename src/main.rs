use clap::Parser;
use nhl_stats::cli::{Args, is_config_operation};
use nhl_stats::commands::{
    build_api, handle_config_update_command, handle_list_config_command, handle_version_command,
    report_view_error, run_view, validate_args,
};
use nhl_stats::config::Config;
use nhl_stats::error::AppError;
use nhl_stats::logging::setup_logging;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    if args.version {
        handle_version_command();
        return Ok(ExitCode::SUCCESS);
    }

    // Config operations must work even when the saved config is invalid
    if is_config_operation(&args) {
        if args.list_config {
            handle_list_config_command().await?;
        } else {
            handle_config_update_command(&args).await?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load().await?;

    let (log_file_path, _guard) = setup_logging(&args, Some(&config)).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let api = build_api(&config, &args)?;
    let result = run_view(&api, &args).await;

    let stats = api.cache().stats().await;
    tracing::info!(
        "Response cache: {} entries, {} hits, {} misses ({:.0}% hit rate)",
        stats.entries,
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!("View {:?} failed: {e}", args.view);
            report_view_error(&args, &e);
            Ok(ExitCode::FAILURE)
        }
    }
}

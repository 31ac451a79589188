use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use jewelai_observability::LogFormat;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // A missing .env is fine; variables may come from the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    jewelai_observability::init(LogFormat::from_json_flag(cli.json_logs));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Summary { data, policy } => {
            let items = commands::load_inventory(&data)?;
            let policy = commands::load_policy(policy.as_deref())?;
            commands::summary(&items, &policy, &mut out)?;
        }
        Commands::Report {
            data,
            format,
            output,
            policy,
        } => {
            let items = commands::load_inventory(&data)?;
            let policy = commands::load_policy(policy.as_deref())?;
            let generated_at = chrono::Local::now().naive_local();
            let rendered = commands::render_report(&items, &policy, format, generated_at)?;

            match commands::report_destination(output.as_deref(), generated_at) {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("failed to write report to {}", path.display()))?;
                    tracing::info!(path = %path.display(), "report written");
                }
                None => out.write_all(rendered.as_bytes())?,
            }
        }
        Commands::Distribution { data, by } => {
            let items = commands::load_inventory(&data)?;
            commands::distribution(&items, by.into(), &mut out)?;
        }
        Commands::Keyword {
            keyword,
            api_key,
            model,
            timeout_secs,
        } => {
            let config = commands::gemini_config(api_key, model, timeout_secs);
            commands::keyword(&keyword, config, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

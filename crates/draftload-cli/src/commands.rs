//! Command handlers

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output::{output_route, output_summary};
use draftload_app::app::{plan_route, DraftSession};
use draftload_app::config::Config;
use draftload_app::repository::{open_zip_directory, open_zip_directory_at};
use draftload_domain::service::{parse_draft, DraftSummary};
use draftload_types::{Error, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Loaded per command so `config --reset` can replace an unreadable config.json
    let format_flag = cli.format;
    let load = || -> Result<(Config, OutputFormat)> {
        let config = Config::load()?;
        let output_format = format_flag.unwrap_or(config.output_format);
        Ok((config, output_format))
    };

    match cli.command {
        Commands::Parse { file } => {
            let (_, output_format) = load()?;
            cmd_parse(file, output_format)
        }

        Commands::Live { debounce_ms } => {
            let (config, output_format) = load()?;
            let delay = debounce_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.debounce());
            cmd_live(delay, output_format)
        }

        Commands::Route {
            pickup,
            delivery,
            zips,
        } => {
            let (config, output_format) = load()?;
            cmd_route(&config, &pickup, &delivery, zips, output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_debounce_ms,
            set_zip_directory,
            reset,
        } => cmd_config(show, set_output, set_debounce_ms, set_zip_directory, reset),
    }
}

fn cmd_parse(file: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let text = match file {
        Some(path) => read_draft_file(&path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let fields = parse_draft(&text);
    debug!(?fields, "parsed draft");
    output_summary(output_format, &DraftSummary::from_fields(&fields))
}

fn read_draft_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Draft file not found: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn cmd_live(delay: Duration, output_format: OutputFormat) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_live(delay, output_format))
}

async fn run_live(delay: Duration, output_format: OutputFormat) -> Result<()> {
    let (mut session, mut settled) = DraftSession::new(delay);
    info!(delay_ms = delay.as_millis() as u64, "live session started");

    let printer = tokio::spawn(async move {
        let mut last_printed = None;
        while settled.changed().await.is_ok() {
            let fields = settled.borrow_and_update().clone();
            if last_printed.as_ref() == Some(&fields) {
                continue;
            }
            if let Err(e) = output_summary(output_format, &DraftSummary::from_fields(&fields)) {
                warn!(error = %e, "failed to print summary");
            }
            last_printed = Some(fields);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        session.push_line(&line);
    }

    // EOF: publish whatever is pending, then close the channel so the printer exits
    session.flush();
    drop(session);
    if let Err(e) = printer.await {
        warn!(error = %e, "summary printer stopped unexpectedly");
    }
    Ok(())
}

fn cmd_route(
    config: &Config,
    pickup: &str,
    delivery: &str,
    zips: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let directory = match zips {
        Some(path) => open_zip_directory_at(&path)?,
        None => open_zip_directory(config)?,
    };
    debug!(entries = directory.len(), "ZIP directory ready");

    let plan = plan_route(&directory, pickup, delivery);
    output_route(output_format, &plan)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_debounce_ms: Option<u64>,
    set_zip_directory: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(debounce_ms) = set_debounce_ms {
        config.debounce_ms = debounce_ms;
        modified = true;
    }

    if let Some(path) = set_zip_directory {
        config.zip_directory = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

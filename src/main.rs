// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = all links alive, 1 = dead links, 2 = error)
// =============================================================================

mod cli;
mod config;
mod gitlink;
mod logging;
mod storage;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use cli::{Cli, Commands};
use config::CheckConfig;
use gitlink::{Buckets, LinkProber, LinkReport, Verdict};
use storage::StorageSnapshot;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check { input, out_dir, timeout, json } => {
            handle_check(CheckConfig::new(input, out_dir, timeout, json)).await
        }
        Commands::CleanStorage { dir } => handle_clean_storage(&dir),
    }
}

// Handles the 'check' subcommand
async fn handle_check(config: CheckConfig) -> Result<i32> {
    let links = gitlink::read_links(&config.input)?;
    info!(count = links.len(), input = %config.input.display(), "loaded links");

    let prober = LinkProber::new(config.timeout)?;
    let reports = gitlink::classify_all(&prober, links).await;
    let buckets = Buckets::from_reports(&reports);

    gitlink::write_buckets(&config, &buckets)?;
    print_results(&reports, &buckets, config.json)?;

    if buckets.has_failures() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Handles the 'clean-storage' subcommand. Only prints, never executes.
fn handle_clean_storage(dir: &std::path::Path) -> Result<i32> {
    let snapshot = StorageSnapshot::capture(dir)?;
    let plan = storage::plan(&snapshot);
    print!("{}", storage::render(&plan));
    Ok(0)
}

#[derive(Serialize)]
struct Summary {
    invalid: usize,
    unavailable: usize,
    alive: usize,
    ssh_or_svn: usize,
    total: usize,
}

impl Summary {
    fn new(buckets: &Buckets) -> Self {
        Self {
            invalid: buckets.invalid.len(),
            unavailable: buckets.unavailable.len(),
            alive: buckets.alive.len(),
            ssh_or_svn: buckets.ssh.len(),
            total: buckets.invalid.len()
                + buckets.unavailable.len()
                + buckets.alive.len()
                + buckets.ssh.len(),
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    links: &'a [LinkReport],
    summary: Summary,
}

// Prints the results either as a table or JSON
fn print_results(reports: &[LinkReport], buckets: &Buckets, json: bool) -> Result<()> {
    if json {
        let output = JsonOutput {
            links: reports,
            summary: Summary::new(buckets),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_table(reports, buckets);
    }
    Ok(())
}

fn print_table(reports: &[LinkReport], buckets: &Buckets) {
    // Only the links that need attention get a row
    let failures: Vec<&LinkReport> = reports.iter().filter(|r| !r.is_ok()).collect();

    if !failures.is_empty() {
        println!("{:<60} {:<15} {:<30}", "URL", "STATUS", "REASON");
        println!("{}", "=".repeat(105));

        for report in failures {
            let url_display = if report.url.chars().count() > 57 {
                format!("{}...", report.url.chars().take(57).collect::<String>())
            } else {
                report.url.clone()
            };
            let reason = report.reason.as_deref().unwrap_or("");
            println!("{:<60} {:<15} {:<30}", url_display, format_verdict(report.verdict), reason);
        }
        println!();
    }

    let summary = Summary::new(buckets);
    println!("📊 Summary:");
    println!("   ✅ Alive: {}", summary.alive);
    println!("   🔑 git/svn (not probed): {}", summary.ssh_or_svn);
    println!("   ❌ Unavailable: {}", summary.unavailable);
    println!("   ⚠️  Invalid: {}", summary.invalid);
    println!("   📋 Total: {}", summary.total);
}

fn format_verdict(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Alive => "✅ ALIVE",
        Verdict::SshOrSvn => "🔑 GIT/SVN",
        Verdict::Unavailable => "❌ UNAVAILABLE",
        Verdict::Invalid => "⚠️  INVALID",
    }
}

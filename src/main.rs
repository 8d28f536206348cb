// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-analyzer CLI - WCAG accessibility analysis service
//!
//! Runs the analysis API server, or analyzes a single URL from the
//! command line using the same pipeline.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use a11y_analyzer::api::{self, AppState};
use a11y_analyzer::checklist::Status;
use a11y_analyzer::fetcher::SafeFetcher;
use a11y_analyzer::report::AnalyzeResponse;
use anyhow::Context;
use axum::http::HeaderValue;
use clap::{Parser, Subcommand, ValueEnum};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// WCAG accessibility analysis: fetch a page, get a scored report
#[derive(Parser)]
#[command(name = "a11y-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analysis API server
    Serve {
        /// Bind address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Bind port
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Comma-separated allowed CORS origins, or * for any
        #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
        cors_origins: String,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Analyze a single URL and print the report
    Analyze {
        /// URL to analyze (scheme optional, defaults to https)
        url: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11y_analyzer=debug,tower_http=debug")
    } else {
        EnvFilter::new("a11y_analyzer=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            cors_origins,
            verbose,
        } => {
            init_logging(verbose);
            serve(&host, port, &cors_origins).await?;
        }

        Commands::Analyze { url, format, verbose } => {
            init_logging(verbose);
            let url = api::normalize_url(&url).map_err(|e| anyhow::anyhow!(e.to_string()))?;

            let fetcher = SafeFetcher::new();
            let fetch = fetcher
                .fetch(&url)
                .await
                .with_context(|| format!("failed to analyze {}", url))?;
            let report = a11y_analyzer::analyze_document(&url, &fetch);

            match format {
                FormatArg::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                FormatArg::Text => print_text_report(&report),
            }
        }
    }

    Ok(())
}

async fn serve(host: &str, port: u16, cors_origins: &str) -> anyhow::Result<()> {
    let ip: IpAddr = host.parse().with_context(|| format!("invalid host {}", host))?;
    let addr = SocketAddr::new(ip, port);

    let state = AppState {
        fetcher: Arc::new(SafeFetcher::new()),
    };

    let app = api::router(state).layer(cors_layer(cors_origins)?);

    info!("Accessibility Analyzer API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the CORS layer from the configured origin list.
fn cors_layer(origins: &str) -> anyhow::Result<CorsLayer> {
    if origins.trim() == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let parsed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin {}", o))
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any))
}

fn print_text_report(report: &AnalyzeResponse) {
    println!("=== Accessibility Analysis Report ===\n");
    println!("URL:   {}", report.url);
    println!("Title: {}", report.metadata.title);
    println!("Score: {}/100\n", report.overall_score);

    println!(
        "Checks: {} passed, {} failed of {}",
        report.summary.passed, report.summary.failed, report.summary.total_checks
    );
    println!(
        "Issues: {} high, {} medium, {} low\n",
        report.summary.high_issues, report.summary.medium_issues, report.summary.low_issues
    );

    for item in &report.checklist {
        let marker = match item.status {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        };
        println!(
            "[{}] {} (WCAG {}, {})",
            marker, item.check, item.wcag, item.severity
        );
        if item.status == Status::Fail {
            println!("       {} of {} elements failed", item.failed, item.total);
            println!("       Fix: {}", item.fix);
        }
    }
}

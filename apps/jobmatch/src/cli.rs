use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use jobmatch::config::Config;
use jobmatch::pipeline::run_pipeline;
use jobmatch::routes::build_router;
use jobmatch::state::AppState;

#[derive(Parser, Debug)]
#[command(
    name = "jobmatch",
    about = "Match resumes against job descriptions and draft follow-up material",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Match one resume file against one job description file
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Plain-text resume
    #[arg(long)]
    resume: PathBuf,
    /// Plain-text job description
    #[arg(long)]
    job: PathBuf,
    /// Print the full run report as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(config: Config) -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => serve(config, args).await,
        Command::Run(args) => run_once(config, args).await,
    }
}

async fn serve(config: Config, args: ServeArgs) -> Result<()> {
    let port = args.port.unwrap_or(config.port);
    let state = AppState::from_config(config)?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS once a browser client exists

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn run_once(config: Config, args: RunArgs) -> Result<()> {
    let resume_text = tokio::fs::read_to_string(&args.resume)
        .await
        .with_context(|| format!("Failed to read resume {}", args.resume.display()))?;
    let job_text = tokio::fs::read_to_string(&args.job)
        .await
        .with_context(|| format!("Failed to read job description {}", args.job.display()))?;

    let state = AppState::from_config(config)?;
    let report = run_pipeline(
        &state.vocabulary,
        state.drafter.as_ref(),
        &state.audit,
        &resume_text,
        &job_text,
    )
    .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_summary());
        if report.audit_logged {
            println!("\nRun logged to {}", state.audit.path().display());
        }
    }

    Ok(())
}

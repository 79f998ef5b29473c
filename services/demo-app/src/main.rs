use clap::{CommandFactory, Parser};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod modes;

use cli::{Args, Mode};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    tracing::info!(
        service = "demo-app",
        version = env!("CARGO_PKG_VERSION"),
        mode = %args.mode,
        "Starting demo app"
    );

    let mode = match args.mode.parse::<Mode>() {
        Ok(mode) => mode,
        Err(e) => {
            tracing::error!(error_code = %e.code, "{}", e);
            eprintln!("{}", Args::command().render_help());
            std::process::exit(1);
        }
    };

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "Using seeded flip generator");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::Hello => modes::run_hello(&mut out)?,
        Mode::Analyze => {
            modes::run_analyze(&mut *rng, args.flips, &mut out)?;
        }
        Mode::Compare => {
            modes::run_compare(&mut *rng, &args.trials, &mut out)?;
        }
    }

    tracing::info!("Demo app completed");

    Ok(())
}

/// Logs go to stderr so stdout carries only the report
fn init_logging() {
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string())
        .eq_ignore_ascii_case("json");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "demo_app=info".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

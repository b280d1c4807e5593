//! AutoShorts CLI binary.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shorts_worker::{GeneratorConfig, VideoGenerator};

#[derive(Parser, Debug)]
#[command(name = "autoshorts")]
#[command(about = "Turn a source article into a short vertical video plan", long_about = None)]
struct Args {
    /// Source article URL
    #[arg(short, long)]
    url: String,

    /// Output path for the video plan JSON
    #[arg(short, long, default_value = "plan.json")]
    output: PathBuf,

    /// Override the number of scenes
    #[arg(long)]
    scenes: Option<usize>,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("shorts_worker=info".parse().unwrap())
        .add_directive("shorts_acquire=info".parse().unwrap())
        .add_directive("shorts_ai_client=info".parse().unwrap())
        .add_directive("autoshorts=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let args = Args::parse();

    info!("Starting autoshorts");

    let mut config = GeneratorConfig::from_env();
    if let Some(scenes) = args.scenes {
        config.scene_count = scenes;
    }

    let generator = match VideoGenerator::from_env_with(config) {
        Ok(g) => g,
        Err(e) => {
            error!("Failed to create generator: {}", e);
            std::process::exit(1);
        }
    };

    // Ctrl-C cooperatively cancels the acquisition pipeline.
    let (cancel_tx, mut cancel_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        let _ = cancel_tx.send(true);
    });

    let plan = match generator.generate(&args.url, &mut cancel_rx).await {
        Ok(plan) => plan,
        Err(e) if e.is_cancellation() => {
            info!("Generation cancelled");
            std::process::exit(130);
        }
        Err(e) => {
            error!("Video generation failed: {}", e);
            std::process::exit(1);
        }
    };

    let json = match serde_json::to_string_pretty(&plan) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize plan: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = tokio::fs::write(&args.output, json).await {
        error!("Failed to write {}: {}", args.output.display(), e);
        std::process::exit(1);
    }

    info!(
        output = %args.output.display(),
        total_frames = plan.total_frames(),
        scenes = plan.scene_count(),
        "Video plan written"
    );
}

use anyhow::Result;
use clap::Parser;
use course_thumbnailer::app::App;
use course_thumbnailer::models::GenerationOptions;
use course_thumbnailer::topics;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "course-thumbnailer")]
#[command(about = "Generate course thumbnails with the Ideogram API")]
struct CliArgs {
    /// Course topics to generate thumbnails for.
    #[arg(value_name = "TOPIC", conflicts_with = "file")]
    topics: Vec<String>,

    /// Read topics from a text file, one per line.
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Aspect ratio of the generated image.
    #[arg(long, value_name = "RATIO")]
    aspect_ratio: Option<String>,

    /// Visual style embedded in the prompt.
    #[arg(long, value_name = "STYLE")]
    style: Option<String>,

    /// Rendering quality requested from the API.
    #[arg(long, value_name = "QUALITY")]
    quality: Option<String>,
}

impl CliArgs {
    /// Merge CLI overrides over the default generation options.
    fn options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::default();
        if let Some(aspect_ratio) = &self.aspect_ratio {
            options.aspect_ratio = aspect_ratio.clone();
        }
        if let Some(style) = &self.style {
            options.style = style.clone();
        }
        if let Some(quality) = &self.quality {
            options.quality = quality.clone();
        }
        options
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_thumbnailer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting course-thumbnailer");

    let args = CliArgs::parse();
    let options = args.options();

    let topic_list = match &args.file {
        Some(path) => match topics::load_from_file(path) {
            Ok(list) => list,
            Err(e) => {
                error!("Failed to read topics from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => args.topics.clone(),
    };

    match App::new() {
        Ok(app) => match app.run(topic_list, options).await {
            Ok(_) => {
                info!("Generation completed");
                Ok(())
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

// Sketchsynth CLI - offline labeling and rendering harness
//
// Runs the two fallback components against local files: classify a drawing
// into a style/vibe label, or render a prompt into a WAV. Reports as JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sketchsynth::{AppConfig, DrawingAnalyzer, FeatureKind, ToneSynthesizer};

#[derive(Parser, Debug)]
#[command(
    name = "sketchsynth_cli",
    about = "Offline drawing labeling and procedural audio rendering"
)]
struct Cli {
    /// Path to a JSON config overriding the default thresholds
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Infer a style or vibe label from an image file
    Classify {
        /// Path to a PNG/JPEG drawing
        #[arg(long)]
        image: PathBuf,
        /// Which label family to infer
        #[arg(long, value_enum)]
        feature: Feature,
    },
    /// Render a prompt into a WAV file
    Render {
        /// Prompt text driving the chord selection
        #[arg(long)]
        prompt: String,
        /// Output WAV path
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Feature {
    Style,
    Vibe,
}

impl From<Feature> for FeatureKind {
    fn from(feature: Feature) -> Self {
        match feature {
            Feature::Style => FeatureKind::Style,
            Feature::Vibe => FeatureKind::Vibe,
        }
    }
}

#[derive(Serialize)]
struct ClassifyReport {
    feature_type: FeatureKind,
    prompt_result: String,
}

#[derive(Serialize)]
struct RenderReport {
    prompt: String,
    output: PathBuf,
    bytes: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli
        .config
        .map(AppConfig::load_from_file)
        .unwrap_or_default();

    match cli.command {
        Commands::Classify { image, feature } => run_classify(&config, &image, feature.into()),
        Commands::Render { prompt, output } => run_render(&config, &prompt, &output),
    }
}

fn run_classify(config: &AppConfig, image: &PathBuf, kind: FeatureKind) -> Result<()> {
    let bytes =
        fs::read(image).with_context(|| format!("reading image {}", image.display()))?;
    let analyzer = DrawingAnalyzer::new(config.analysis.clone());
    let label = analyzer.extract(&bytes, kind);

    let report = ClassifyReport {
        feature_type: kind,
        prompt_result: label.as_str().to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_render(config: &AppConfig, prompt: &str, output: &PathBuf) -> Result<()> {
    let synth = ToneSynthesizer::new(config.synth.clone());
    let clip = match synth.synthesize(prompt) {
        Ok(clip) => clip,
        Err(err) => bail!("audio rendering failed: {err}"),
    };

    fs::write(output, &clip).with_context(|| format!("writing {}", output.display()))?;

    let report = RenderReport {
        prompt: prompt.to_string(),
        output: output.clone(),
        bytes: clip.len(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

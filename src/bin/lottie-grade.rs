use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

/// Apply contrast, brightness, saturation and hue shift to every color in a Lottie file.
#[derive(Parser, Debug)]
#[command(name = "lottie-grade", version, allow_negative_numbers = true)]
struct Cli {
    /// Input Lottie JSON.
    input: PathBuf,

    /// Output JSON path.
    output: PathBuf,

    /// Contrast multiplier (1 = neutral).
    #[arg(long)]
    contrast: Option<f64>,

    /// Brightness offset added to each channel ([-1, 1] recommended).
    #[arg(long)]
    brightness: Option<f64>,

    /// Saturation blend factor (0 = grayscale, 1 = original).
    #[arg(long)]
    saturation: Option<f64>,

    /// Hue shift in degrees (0 = no shift).
    #[arg(long = "hue-deg")]
    hue_deg: Option<f64>,

    /// JSON preset with any of `contrast`, `brightness`, `saturation`, `hue_deg`.
    /// Flags given on the command line take precedence.
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Write single-line JSON instead of indented output.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Grade top-level layers and assets on the rayon pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn grade_config(&self) -> anyhow::Result<lottie_grade::GradeConfig> {
        let mut cfg = match &self.preset {
            Some(path) => lottie_grade::GradeConfig::from_path(path)
                .with_context(|| format!("load preset '{}'", path.display()))?,
            None => lottie_grade::GradeConfig::default(),
        };

        if let Some(v) = self.contrast {
            cfg.contrast = v;
        }
        if let Some(v) = self.brightness {
            cfg.brightness = v;
        }
        if let Some(v) = self.saturation {
            cfg.saturation = v;
        }
        if let Some(v) = self.hue_deg {
            cfg.hue_deg = v;
        }
        Ok(cfg)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = cli.grade_config()?;
    if cfg.is_neutral() {
        tracing::info!("neutral grade; colors will be rewritten unchanged");
    }

    let mut doc = lottie_grade::document::read_path(&cli.input)
        .with_context(|| format!("read lottie '{}'", cli.input.display()))?;

    let stats = if cli.parallel {
        lottie_grade::grade_document_par(&mut doc, &cfg)
    } else {
        lottie_grade::grade_document(&mut doc, &cfg)
    };
    tracing::info!(
        static_colors = stats.static_colors,
        keyframe_colors = stats.keyframe_colors,
        gradient_stops = stats.gradient_stops,
        "graded colors"
    );

    let layout = if cli.compact {
        lottie_grade::Layout::Compact
    } else {
        lottie_grade::Layout::Pretty
    };
    lottie_grade::document::write_path(&cli.output, &doc, layout)
        .with_context(|| format!("write lottie '{}'", cli.output.display()))?;

    eprintln!(
        "wrote {} (contrast={}, brightness={}, saturation={}, hue_deg={}; {} colors)",
        cli.output.display(),
        cfg.contrast,
        cfg.brightness,
        cfg.saturation,
        cfg.hue_deg,
        stats.total()
    );
    Ok(())
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dermascan::diabetes::FEATURE_NAMES;
use dermascan::inference::preprocessing::open_image;
use dermascan::present::{self, Report};
use dermascan::{AppConfig, Artifacts, DermaError, RecommendationTable, Session};

#[derive(Parser)]
#[command(name = "dermascan")]
#[command(about = "Screen skin images, identify skin conditions and check diabetes risk")]
struct Cli {
    /// Configuration file (defaults to $DERMASCAN_CONFIG, then ./dermascan.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Save intermediate images to directory (must be empty)
    #[arg(long, value_name = "DIR", global = true)]
    debug_out: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initial screening: normal skin, skin disease, or not a skin image
    Screen {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,
    },
    /// Identify the skin condition (runs initial screening first)
    Identify {
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Image used for the initial screening (defaults to IMAGE)
        #[arg(long, value_name = "IMAGE")]
        screening_image: Option<PathBuf>,
    },
    /// Predict diabetes from eight numeric features
    Diabetes {
        #[arg(
            num_args = 8,
            allow_hyphen_values = true,
            value_names = FEATURE_NAMES
        )]
        values: Vec<String>,
    },
    /// Precaution and food advice for a skin condition
    Recommend {
        /// e.g. "Acne" or "Cold Sore"
        disease: String,
        /// Yes or No
        diabetic: String,
    },
    /// Launch the desktop application
    #[cfg(feature = "gui")]
    Gui,
}

fn main() -> anyhow::Result<()> {
    let Cli {
        config,
        verbose,
        debug_out,
        command,
    } = Cli::parse();

    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let load_artifacts = || -> anyhow::Result<Artifacts> {
        let config = AppConfig::load(config.as_deref())?;
        Artifacts::load(&config)
    };

    match command {
        Command::Screen { image } => {
            let artifacts = load_artifacts()?;
            let mut session = build_session(&artifacts, verbose, debug_out.as_ref())?;
            let outcome = session.screen_image(open_image(&image)?)?;
            print_report(&present::outcome_report(&outcome));
        }
        Command::Identify {
            image,
            screening_image,
        } => {
            let artifacts = load_artifacts()?;
            let mut session = build_session(&artifacts, verbose, debug_out.as_ref())?;
            let screening_path = screening_image.as_ref().unwrap_or(&image);

            println!("=== Initial Screening ===");
            let screened = session.screen_image(open_image(screening_path)?)?;
            print_report(&present::outcome_report(&screened));

            println!("\n=== Skin Condition ===");
            match session.identify_image(open_image(&image)?) {
                Ok(outcome) => print_report(&present::outcome_report(&outcome)),
                Err(err) => return report_failure(err),
            }
        }
        Command::Diabetes { values } => {
            let fields: [String; 8] = values
                .try_into()
                .map_err(|v: Vec<String>| anyhow::anyhow!("expected 8 values, got {}", v.len()))?;
            let artifacts = load_artifacts()?;
            match artifacts.diabetes_predictor().assess(&fields) {
                Ok(diagnosis) => print_report(&present::diagnosis_report(diagnosis)),
                Err(err @ DermaError::InvalidFormInput { .. }) => {
                    print_report(&present::error_report(&err))
                }
                Err(err) => return report_failure(err),
            }
        }
        // The lookup table needs no model artifacts
        Command::Recommend { disease, diabetic } => {
            let table = RecommendationTable::embedded();
            print_report(&present::recommendation_report(&table.lookup(&disease, &diabetic)));
        }
        #[cfg(feature = "gui")]
        Command::Gui => {
            dermascan::gui::run(load_artifacts()?)?;
        }
    }

    Ok(())
}

fn build_session(
    artifacts: &Artifacts,
    verbose: bool,
    debug_out: Option<&PathBuf>,
) -> anyhow::Result<Session> {
    let mut screening = artifacts.screening_flow().with_verbose(verbose);
    let mut condition = artifacts.condition_flow().with_verbose(verbose);
    if let Some(dir) = debug_out {
        screening = screening.with_debug(dir.join("screening"))?;
        condition = condition.with_debug(dir.join("condition"))?;
    }
    Ok(Session::new(screening, condition))
}

fn print_report(report: &Report) {
    for line in &report.lines {
        println!("{}", line);
    }
}

fn report_failure(err: DermaError) -> anyhow::Result<()> {
    print_report(&present::error_report(&err));
    Err(err.into())
}

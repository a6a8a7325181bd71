//! Doodle Lock - command-line shell around the doodle matching engine

use doodle_lock::app::cli::{Cli, Commands, ConfigAction};
use doodle_lock::app::config::Config;
use doodle_lock::app::gesture_file::{load_gesture, load_gestures, save_gesture};
use doodle_lock::{DoodleProfile, SubmitOutcome};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config_path = cli.config_path();
    let explicit_config = cli.config.is_some();
    let load_config = || -> anyhow::Result<Config> {
        Ok(if explicit_config {
            Config::load(&config_path)?
        } else {
            Config::load_default()?
        })
    };

    match cli.command {
        Commands::Enroll { gestures, output } => {
            run_enroll(&gestures, output.as_deref(), &load_config()?)?;
        }
        Commands::Verify { training, attempt } => {
            let accepted = run_verify(&training, &attempt, &load_config()?)?;
            if !accepted {
                std::process::exit(1);
            }
        }
        Commands::Features { gesture } => {
            run_features(&gesture, &load_config()?)?;
        }
        Commands::Init { force } => {
            // Writes a fresh config, so it must not require an existing one
            run_init(force, &config_path)?;
        }
        Commands::Config { action: ConfigAction::Show } => {
            print!("{}", load_config()?.to_toml()?);
        }
        Commands::Config { action: ConfigAction::Path } => {
            // Reported without loading, so a missing or broken file still prints
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

fn run_enroll(paths: &[PathBuf], output: Option<&Path>, config: &Config) -> anyhow::Result<()> {
    let mut session = config.enrollment_session();

    for path in paths {
        let gesture = load_gesture(path)?;
        match session.submit(gesture)? {
            SubmitOutcome::Accepted { sample_count, validated } => {
                let how = if validated { "validated" } else { "unvalidated" };
                println!("{}: accepted ({}), {} training gestures", path.display(), how, sample_count);
            }
            SubmitOutcome::TooShort { length } => {
                println!(
                    "{}: too short ({:.1} < {:.1}), discarded",
                    path.display(),
                    length,
                    config.enrollment.min_gesture_length
                );
            }
            SubmitOutcome::Rejected { report } => {
                println!("{}: rejected (score {:.6}, {:?})", path.display(), report.score, report.verdict);
            }
            SubmitOutcome::SessionFull => {
                warn!("Training set full, ignoring remaining gestures");
                break;
            }
        }
    }

    if !session.can_finish() {
        anyhow::bail!(
            "Enrollment incomplete: {} of {} required training gestures accepted",
            session.len(),
            config.enrollment.min_samples
        );
    }

    let gestures = session.finish()?;
    info!("Enrollment complete with {} training gestures", gestures.len());

    if let Some(dir) = output {
        for (i, gesture) in gestures.iter().enumerate() {
            let path = dir.join(format!("training_{:02}.json", i + 1));
            save_gesture(gesture, &path)?;
            info!("Saved {:?}", path);
        }
    }

    Ok(())
}

fn run_verify(training: &[PathBuf], attempt: &Path, config: &Config) -> anyhow::Result<bool> {
    let extractor = config.extractor();
    let gestures = load_gestures(training)?;

    let short = gestures
        .iter()
        .filter(|g| !config.enrollment.is_long_enough(g))
        .count();
    if short > 0 {
        warn!("{} training gestures are below the length threshold", short);
    }

    let profile = DoodleProfile::from_gestures(&extractor, config.scoring, &gestures)?;
    info!("Trained profile from {} gestures", profile.sample_count());

    let attempt = load_gesture(attempt)?;
    if !config.enrollment.is_long_enough(&attempt) {
        println!("rejected: attempt too short ({:.1})", attempt.length());
        return Ok(false);
    }

    let report = profile.score(&extractor.extract(&attempt))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("{}", if report.is_accepted() { "accepted" } else { "rejected" });

    Ok(report.is_accepted())
}

fn run_features(path: &Path, config: &Config) -> anyhow::Result<()> {
    let gesture = load_gesture(path)?;
    let vector = config.extractor().extract(&gesture);
    println!("{}", serde_json::to_string(&vector)?);
    Ok(())
}

fn run_init(force: bool, path: &Path) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Config already exists at {:?} (use --force to overwrite)", path);
    }

    Config::default().save(path)?;
    info!("Wrote config to {:?}", path);
    Ok(())
}

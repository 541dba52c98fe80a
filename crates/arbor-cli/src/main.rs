mod logging;
mod render;

use arbor_core::config::{ConfigError, DatasetConfig};
use arbor_core::impls::{CsvSource, InMemoryDatasetStore};
use arbor_core::ports::{DatasetStore, LoadError};
use arbor_core::{
    BuildError, EntropyWeighting, ExclusionScope, ExhaustionPolicy, InductionBuilder,
    InductionConfig, InductionError,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Induce an ID3 split order from a categorical CSV dataset")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Induce the split order over the whole dataset
    Induce {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the grouping and entropy tables of the whole dataset
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Delimited input file with a header row
    dataset: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the example id column
    #[arg(long)]
    id_column: Option<String>,

    /// Name of the binary target column
    #[arg(long)]
    target_column: Option<String>,

    /// Field delimiter
    #[arg(long)]
    delimiter: Option<char>,

    /// Scope of the chosen-attribute exclusion
    #[arg(long, value_enum)]
    exclusion: Option<ExclusionArg>,

    /// How per-value entropies are summed
    #[arg(long, value_enum)]
    weighting: Option<WeightingArg>,

    /// What an impure branch with no attribute left does
    #[arg(long, value_enum)]
    on_exhaustion: Option<ExhaustionArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExclusionArg {
    Global,
    PerBranch,
}

#[derive(Clone, Copy, ValueEnum)]
enum WeightingArg {
    Unweighted,
    Weighted,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExhaustionArg {
    Leaf,
    Error,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load dataset: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("induction failed: {0}")]
    Induction(#[from] InductionError),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl InputArgs {
    /// File config (or defaults), then command-line overrides.
    fn resolve_config(&self) -> Result<InductionConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => InductionConfig::load(path)?,
            None => InductionConfig::default(),
        };
        let dataset: &mut DatasetConfig = &mut config.dataset;
        if let Some(id_column) = &self.id_column {
            dataset.id_column = id_column.clone();
        }
        if let Some(target_column) = &self.target_column {
            dataset.target_column = target_column.clone();
        }
        if let Some(delimiter) = self.delimiter {
            dataset.delimiter = delimiter;
        }
        if let Some(exclusion) = self.exclusion {
            config.exclusion = match exclusion {
                ExclusionArg::Global => ExclusionScope::Global,
                ExclusionArg::PerBranch => ExclusionScope::PerBranch,
            };
        }
        if let Some(weighting) = self.weighting {
            config.weighting = match weighting {
                WeightingArg::Unweighted => EntropyWeighting::Unweighted,
                WeightingArg::Weighted => EntropyWeighting::Weighted,
            };
        }
        if let Some(on_exhaustion) = self.on_exhaustion {
            config.on_exhaustion = match on_exhaustion {
                ExhaustionArg::Leaf => ExhaustionPolicy::Leaf,
                ExhaustionArg::Error => ExhaustionPolicy::Error,
            };
        }
        config.validate()?;
        Ok(config)
    }

    fn build(&self) -> Result<arbor_core::Induction<InMemoryDatasetStore>, CliError> {
        let config = self.resolve_config()?;
        let source = CsvSource::from_path(&self.dataset, config.dataset.clone());
        let store = InMemoryDatasetStore::load(&source)?;
        tracing::info!(
            path = %self.dataset.display(),
            examples = store.len(),
            "dataset loaded"
        );
        Ok(InductionBuilder::new(store).config(config).build()?)
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Induce { input, format } => {
            let induction = input.build()?;
            let start = Instant::now();
            let report = induction.run()?;
            let elapsed = start.elapsed();
            match format {
                OutputFormat::Json => println!("{}", report.to_json_pretty()?),
                OutputFormat::Text => {
                    println!("Initial grouping of values per attribute and label:");
                    print!("{}", render::grouping(&report.initial_grouping));
                    println!();
                    println!("Initial entropy per attribute:");
                    print!("{}", render::entropy(&report.initial_entropy));
                    println!();
                    println!("Split order: {}", render::chosen(&report.chosen));
                    println!();
                    println!("--- {:.6} seconds to induce ---", elapsed.as_secs_f64());
                }
            }
        }
        Commands::Inspect { input } => {
            let induction = input.build()?;
            let (grouping, entropy) = induction.inspect()?;
            println!("Grouping of values per attribute and label:");
            print!("{}", render::grouping(&grouping));
            println!();
            println!("Entropy per attribute:");
            print!("{}", render::entropy(&entropy));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{e}");
    }
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn input_of(cli: Cli) -> InputArgs {
        match cli.command {
            Commands::Induce { input, .. } | Commands::Inspect { input } => input,
        }
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "arbor",
            "induce",
            "data.csv",
            "--exclusion",
            "per-branch",
            "--weighting",
            "weighted",
            "--on-exhaustion",
            "error",
            "--target-column",
            "label",
        ]);
        let config = input_of(cli).resolve_config().unwrap();
        assert_eq!(config.exclusion, ExclusionScope::PerBranch);
        assert_eq!(config.weighting, EntropyWeighting::Weighted);
        assert_eq!(config.on_exhaustion, ExhaustionPolicy::Error);
        assert_eq!(config.dataset.target_column, "label");
        assert_eq!(config.dataset.id_column, "num");
    }

    #[test]
    fn no_flags_means_default_config() {
        let cli = parse(&["arbor", "inspect", "data.csv"]);
        let config = input_of(cli).resolve_config().unwrap();
        assert_eq!(config, InductionConfig::default());
    }

    #[test]
    fn verbose_counts() {
        let cli = parse(&["arbor", "-vv", "inspect", "data.csv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_exclusion_is_rejected() {
        assert!(Cli::try_parse_from(["arbor", "induce", "x.csv", "--exclusion", "local"]).is_err());
    }

    #[test]
    fn demo_dataset_induces_expected_order() {
        let dataset = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/waittable.csv");
        let config = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/arbor.toml");
        let cli = parse(&["arbor", "induce", dataset, "--config", config]);
        let induction = input_of(cli).build().unwrap();
        let report = induction.run().unwrap();
        assert_eq!(report.chosen.as_slice(), &["pat", "alt", "rain", "type"]);
    }

    #[test]
    fn missing_dataset_is_a_load_error() {
        let cli = parse(&["arbor", "induce", "/nonexistent/data.csv"]);
        let err = input_of(cli).build().err().unwrap();
        assert!(matches!(err, CliError::Load(LoadError::Io { .. })));
    }
}

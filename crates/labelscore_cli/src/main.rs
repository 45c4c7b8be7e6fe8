//! labelscore CLI for evaluating files of gold/predicted label pairs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labelscore_analysis::EvaluationResult;
use labelscore_core::EvaluationConfig;
use labelscore_data::read_pairs;

#[derive(Parser)]
#[command(name = "labelscore")]
#[command(author, version)]
#[command(about = "Accuracy and macro-averaged precision, recall and F1 for labeled pairs")]
#[command(long_about = "labelscore: classification metrics over gold/predicted label pairs.

Pairs files are TSV (one 'gold<TAB>predicted' pair per line, '# ' starts a comment)
or JSON (an array of {\"gold\": ..., \"predicted\": ...} objects, '.json' extension).

EXAMPLES:
  # Evaluate a pairs file
  labelscore eval --pairs predictions.tsv

  # Leave the outside tag out of the macro averages
  labelscore eval --pairs predictions.tsv --ignore O

  # Machine-readable output with a stored configuration
  labelscore eval --pairs predictions.json --config eval.json --json

  # List the labels found in a file
  labelscore labels --pairs predictions.tsv")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute accuracy, macro precision, macro recall and F1
    Eval {
        /// Pairs file (TSV or JSON)
        #[arg(long, value_name = "FILE")]
        pairs: PathBuf,

        /// Label to leave out of the macro averages (repeatable)
        #[arg(long = "ignore", value_name = "LABEL")]
        ignore: Vec<String>,

        /// JSON configuration file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Also print the gold/predicted matrix
        #[arg(long, default_value = "false")]
        matrix: bool,
    },
    /// List labels with their gold and predicted totals
    Labels {
        /// Pairs file (TSV or JSON)
        #[arg(long, value_name = "FILE")]
        pairs: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(log_level))
        .init();

    match cli.command {
        Commands::Eval {
            pairs,
            ignore,
            config,
            json,
            matrix,
        } => handle_eval(pairs, ignore, config, json, matrix),
        Commands::Labels { pairs } => handle_labels(pairs),
    }
}

fn load_config(path: Option<PathBuf>, ignore: Vec<String>) -> Result<EvaluationConfig> {
    let config = match path {
        Some(path) => EvaluationConfig::load(&path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => EvaluationConfig::default(),
    };

    let config = config.merge_ignore_labels(ignore);
    config.validate().context("Invalid evaluation settings")?;
    Ok(config)
}

fn handle_eval(
    pairs_path: PathBuf,
    ignore: Vec<String>,
    config_path: Option<PathBuf>,
    json: bool,
    matrix: bool,
) -> Result<()> {
    let output = render_eval(&pairs_path, ignore, config_path, json, matrix)?;
    print!("{}", output);
    Ok(())
}

fn render_eval(
    pairs_path: &Path,
    ignore: Vec<String>,
    config_path: Option<PathBuf>,
    json: bool,
    matrix: bool,
) -> Result<String> {
    let config = load_config(config_path, ignore)?;

    tracing::info!("Reading pairs from {:?}", pairs_path);
    let pairs = read_pairs(pairs_path)
        .with_context(|| format!("Failed to read pairs from {:?}", pairs_path))?;
    tracing::info!("Loaded {} pairs", pairs.len());

    let result = EvaluationResult::from_counts(pairs.into_iter().collect(), config.ignore_set());
    let report = result.report();

    for (name, score) in [
        ("accuracy", result.accuracy()),
        ("precision", result.precision()),
        ("recall", result.recall()),
        ("f1", result.f1()),
    ] {
        if let Err(e) = score {
            tracing::warn!("{} is undefined: {}", name, e);
        }
    }

    let mut out = String::new();

    if json {
        let output = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(out, "{}", output)?;
        return Ok(out);
    }

    writeln!(out, "=== labelscore Evaluation ===\n")?;
    writeln!(out, "Pairs file: {}", pairs_path.display())?;
    if !config.ignore_labels.is_empty() {
        writeln!(out, "Ignored labels: {}", config.ignore_labels.join(", "))?;
    }
    writeln!(out)?;
    out.push_str(&report.to_string_table(config.decimals));

    if matrix || config.show_matrix {
        writeln!(out)?;
        write!(out, "{}", result.confusion_counts())?;
    }

    Ok(out)
}

fn handle_labels(pairs_path: PathBuf) -> Result<()> {
    print!("{}", render_labels(&pairs_path)?);
    Ok(())
}

fn render_labels(pairs_path: &Path) -> Result<String> {
    let pairs = read_pairs(pairs_path)
        .with_context(|| format!("Failed to read pairs from {:?}", pairs_path))?;
    let counts: labelscore_analysis::ConfusionCounts = pairs.into_iter().collect();

    let mut out = String::new();
    writeln!(out, "Labels in {} ({} pairs):", pairs_path.display(), counts.total())?;
    writeln!(out, "─────────────────────────────────────────")?;
    writeln!(out, "  {:<20} {:>10} {:>10}", "label", "gold", "predicted")?;
    for (label, label_counts) in counts.iter() {
        writeln!(
            out,
            "  {:<20} {:>10} {:>10}",
            label.as_str(),
            label_counts.gold_total,
            label_counts.predicted_total
        )?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eval_args() {
        let cli = Cli::try_parse_from([
            "labelscore", "-vv", "eval", "--pairs", "p.tsv", "--ignore", "O", "--ignore", "PER", "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Eval { pairs, ignore, config, json, matrix } => {
                assert_eq!(pairs, PathBuf::from("p.tsv"));
                assert_eq!(ignore, vec!["O".to_string(), "PER".to_string()]);
                assert!(config.is_none());
                assert!(json);
                assert!(!matrix);
            }
            Commands::Labels { .. } => panic!("expected eval"),
        }
    }

    #[test]
    fn test_load_config_merges_cli_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.json");
        std::fs::write(&path, r#"{"ignore_labels": ["O"], "decimals": 2}"#).unwrap();

        let config = load_config(Some(path), vec!["PER".to_string()]).unwrap();
        assert_eq!(config.ignore_labels, vec!["O".to_string(), "PER".to_string()]);
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Some(PathBuf::from("/nonexistent/eval.json")), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
        assert!(err.chain().any(|cause| cause.downcast_ref::<std::io::Error>().is_some()));
    }

    const PAIRS: &str = "PER\tPER\nPER\tORG\nORG\tORG\nO\tPER\nO\tO\n";

    fn score(report: &serde_json::Value, key: &str) -> f64 {
        report[key].as_f64().unwrap()
    }

    #[test]
    fn test_eval_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let pairs = dir.path().join("pairs.tsv");
        std::fs::write(&pairs, PAIRS).unwrap();

        let output = render_eval(&pairs, Vec::new(), None, true, false).unwrap();
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(report["total_pairs"], 5);
        assert_eq!(report["number_of_labels"], 3);
        assert!((score(&report, "accuracy") - 0.6).abs() < 1e-10);
        assert!((score(&report, "macro_precision") - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_eval_config_and_cli_ignore_change_scores() {
        let dir = tempfile::tempdir().unwrap();
        let pairs = dir.path().join("pairs.tsv");
        std::fs::write(&pairs, PAIRS).unwrap();
        let config = dir.path().join("eval.json");
        std::fs::write(&config, r#"{"ignore_labels": ["O"]}"#).unwrap();

        let output = render_eval(&pairs, vec!["ORG".to_string()], Some(config), true, false).unwrap();
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();

        // Only PER is averaged; ignored pairs stay counted.
        assert_eq!(report["total_pairs"], 5);
        assert_eq!(report["number_of_labels"], 1);
        assert!((score(&report, "accuracy") - 0.5).abs() < 1e-10);
        assert!((score(&report, "macro_precision") - 0.5).abs() < 1e-10);
        assert!((score(&report, "macro_recall") - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_eval_table_with_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let pairs = dir.path().join("pairs.tsv");
        std::fs::write(&pairs, PAIRS).unwrap();

        let output = render_eval(&pairs, vec!["O".to_string()], None, false, true).unwrap();
        assert!(output.contains("Ignored labels: O"));
        assert!(output.contains("Confusion Matrix"));

        let output = render_eval(&pairs, Vec::new(), None, false, false).unwrap();
        assert!(!output.contains("Confusion Matrix"));
    }

    #[test]
    fn test_eval_missing_pairs_file() {
        let err = render_eval(Path::new("/nonexistent/pairs.tsv"), Vec::new(), None, true, false).unwrap_err();
        assert!(err.to_string().contains("Failed to read pairs"));
    }

    #[test]
    fn test_labels_output() {
        let dir = tempfile::tempdir().unwrap();
        let pairs = dir.path().join("pairs.tsv");
        std::fs::write(&pairs, PAIRS).unwrap();

        let output = render_labels(&pairs).unwrap();
        assert!(output.contains("(5 pairs)"));

        let rows: Vec<Vec<&str>> = output
            .lines()
            .skip(3)
            .map(|line| line.split_whitespace().collect())
            .collect();
        assert_eq!(
            rows,
            vec![vec!["O", "2", "1"], vec!["ORG", "1", "2"], vec!["PER", "2", "2"]]
        );
    }
}

//! Reference suite runner for rsrumi
//!
//! Every `<mode>-tests.csv` file under the test directory holds `input,output`
//! pairs. The mode is taken from the file name, each input is transliterated
//! with that mode's builtin lexicon and the hypothesis is compared against
//! the reference.
//!
//! Usage:
//! - `cargo run --bin rumi_test` - run every suite under `data/tests`
//! - `cargo run --bin rumi_test -- --mode precision` - run one mode only

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::warn;
use rsrumi::Mode;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "rumi_test")]
#[command(about = "Run the transliteration reference suites")]
struct Args {
    /// Directory holding the `<mode>-tests.csv` files
    #[arg(short = 'd', long = "dir", default_value = "data/tests")]
    dir: PathBuf,

    /// Test only one mode (jakim, malaysian, precision)
    #[arg(short = 'm', long = "mode")]
    mode: Option<Mode>,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    input: String,
    output: String,
}

#[derive(Tabled)]
struct TestResult {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Hypothesis")]
    hypothesis: String,
    #[tabled(rename = "Reference")]
    reference: String,
}

#[derive(Debug)]
struct ModeStats {
    total_items: usize,
    correct_items: usize,
    accuracy: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    println!("Running Rumi Test Suite");
    println!("=======================\n");

    let suites = find_suites(&args.dir, args.mode)?;
    if suites.is_empty() {
        eprintln!("Error: no test files found under '{}'.", args.dir.display());
        return Ok(());
    }

    let mut all_stats: HashMap<Mode, ModeStats> = HashMap::new();
    let mut total_items = 0;
    let mut total_correct = 0;

    for (mode, path) in &suites {
        println!("Testing mode: {}", mode.as_str().bold());
        println!("{}", "=".repeat(50));

        match run_mode_test(*mode, path) {
            Ok(stats) => {
                total_items += stats.total_items;
                total_correct += stats.correct_items;
                all_stats.insert(*mode, stats);
            }
            Err(e) => {
                eprintln!("Error testing {}: {:#}", mode, e);
            }
        }

        println!();
    }

    print_summary_statistics(&all_stats, total_items, total_correct);

    Ok(())
}

/// Collect `<mode>-tests.csv` files, sorted by mode.
fn find_suites(dir: &Path, target: Option<Mode>) -> Result<Vec<(Mode, PathBuf)>> {
    let mut suites = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy();
        let Some(stem) = name.strip_suffix("-tests.csv") else {
            continue;
        };
        let mode = match stem.parse::<Mode>() {
            Ok(mode) => mode,
            Err(e) => {
                warn!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if target.map_or(true, |t| t == mode) {
            suites.push((mode, entry.path().to_path_buf()));
        }
    }
    suites.sort_by_key(|(mode, _)| mode.as_str());
    Ok(suites)
}

fn run_mode_test(mode: Mode, test_file_path: &Path) -> Result<ModeStats> {
    let content = fs::read_to_string(test_file_path)
        .with_context(|| format!("Failed to read test file: {}", test_file_path.display()))?;
    let lexicon = mode.lexicon();

    let mut test_results = Vec::new();
    let mut correct_count = 0;
    let mut total_count = 0;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    for (i, record) in reader.deserialize::<TestCase>().enumerate() {
        let case = match record {
            Ok(case) => case,
            Err(e) => {
                eprintln!("Warning: Invalid line format at line {}: {}", i + 2, e);
                continue;
            }
        };
        if case.input.is_empty() {
            continue;
        }

        let hypothesis = mode.transliterate(&case.input, &lexicon);
        let is_correct = hypothesis == case.output;
        if is_correct {
            correct_count += 1;
        }
        total_count += 1;

        let colored_hypothesis = if is_correct {
            hypothesis.blue().to_string()
        } else {
            hypothesis.red().to_string()
        };

        test_results.push(TestResult {
            input: case.input,
            hypothesis: colored_hypothesis,
            reference: case.output,
        });
    }

    if !test_results.is_empty() {
        let table = Table::new(&test_results).with(Style::modern()).to_string();
        println!("{}", table);
    }

    let accuracy = percentage(correct_count, total_count);

    println!(
        "Mode: {} | Items: {} | Correct: {} | Accuracy: {:.2}%",
        mode, total_count, correct_count, accuracy
    );

    Ok(ModeStats {
        total_items: total_count,
        correct_items: correct_count,
        accuracy,
    })
}

fn percentage(correct: usize, total: usize) -> f64 {
    if total > 0 {
        (correct as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn color_accuracy(accuracy: f64) -> ColoredString {
    let accuracy_str = format!("{:.2}%", accuracy);
    if accuracy >= 90.0 {
        accuracy_str.green()
    } else if accuracy >= 70.0 {
        accuracy_str.yellow()
    } else {
        accuracy_str.red()
    }
}

fn print_summary_statistics(all_stats: &HashMap<Mode, ModeStats>, total_items: usize, total_correct: usize) {
    println!("\n{}", "SUMMARY STATISTICS".bold().underline());
    println!("{}", "=".repeat(50));

    println!("\n{}", "Test items per mode:".bold());
    let mut mode_items: Vec<_> = all_stats.iter().collect();
    mode_items.sort_by_key(|(mode, _)| mode.as_str());

    for (mode, stats) in &mode_items {
        println!("  {}: {} items", mode, stats.total_items);
    }

    println!("\n{}", "Accuracy per mode:".bold());
    let mut mode_accuracy: Vec<_> = all_stats.iter().collect();
    mode_accuracy.sort_by(|(_, a), (_, b)| b.accuracy.total_cmp(&a.accuracy));

    for (mode, stats) in &mode_accuracy {
        println!(
            "  {}: {} ({}/{})",
            mode,
            color_accuracy(stats.accuracy),
            stats.correct_items,
            stats.total_items
        );
    }

    let overall_accuracy = percentage(total_correct, total_items);

    println!("\n{}", "Overall Statistics:".bold());
    println!("  Total test items: {}", total_items);
    println!("  Total correct: {}", total_correct);
    println!("  Overall accuracy: {:.2}%", overall_accuracy);

    println!(
        "\n{}: {}",
        "OVERALL ACCURACY".bold(),
        color_accuracy(overall_accuracy).bold()
    );
}

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::info;
use rsrumi::precision::transliterate_precise_with;
use rsrumi::tajwid::{detect_verse_rules, get_tajwid_hints, TajwidHint, TajwidRule};
use rsrumi::{syllabify, tokenize_words, Mode};
use rumimap::Lexicon;
use tabled::{settings::Style, Table, Tabled};

#[derive(Parser)]
#[command(name = "rumi")]
#[command(version, about = "Transliterate vowelled Arabic into Rumi", long_about = None)]
struct Cli {
    /// Arabic text; read from stdin when omitted
    text: Option<String>,

    /// jakim, malaysian or precision
    #[arg(short = 'm', long = "mode", default_value = "jakim")]
    mode: Mode,

    /// Extra special words, as an `arabic,rumi` CSV file
    #[arg(short = 'l', long = "lexicon")]
    lexicon: Option<PathBuf>,

    /// Hyphenate the output into syllables
    #[arg(short = 's', long = "syllables")]
    syllables: bool,

    /// Show a table with one row per word
    #[arg(short = 'w', long = "words")]
    words: bool,

    /// Colour words by tajwid rule and list the rules of each verse
    #[arg(short = 't', long = "tajwid")]
    tajwid: bool,

    /// Write one CSV row per word to stdout
    #[arg(long)]
    csv: bool,
}

#[derive(Tabled)]
struct WordRow {
    #[tabled(rename = "Arabic")]
    arabic: String,
    #[tabled(rename = "Rumi")]
    rumi: String,
    #[tabled(rename = "Syllables")]
    syllables: String,
    #[tabled(rename = "Tajwid")]
    tajwid: String,
}

fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn paint(text: &str, hint: &TajwidHint) -> ColoredString {
    match (hint.rule, hex_rgb(hint.color)) {
        (TajwidRule::Normal, _) | (_, None) => text.normal(),
        (_, Some((r, g, b))) => text.truecolor(r, g, b).bold(),
    }
}

fn load_lexicon(mode: Mode, path: Option<&PathBuf>) -> Result<Lexicon> {
    let mut lexicon = mode.lexicon();
    if let Some(path) = path {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;
        let added = lexicon
            .extend_from_csv(&data)
            .with_context(|| format!("Failed to parse lexicon file: {}", path.display()))?;
        info!("Added {added} entries from {}", path.display());
    }
    Ok(lexicon)
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn print_verse(cli: &Cli, lexicon: &Lexicon, verse: &str) {
    if cli.mode == Mode::Precision {
        let result = transliterate_precise_with(verse, lexicon);
        let text = if cli.syllables {
            syllabify(&result.text)
        } else {
            result.text
        };
        println!("{}", text.bold());
        if !result.tajwid.is_empty() {
            println!("  {} {}", "Tajwid:".cyan(), result.tajwid.join(", "));
        }
        for note in &result.notes {
            println!("  {}", note.dimmed());
        }
        return;
    }

    let text = cli.mode.transliterate(verse, lexicon);
    if cli.syllables {
        println!("{}", syllabify(&text));
    } else {
        println!("{}", text);
    }
}

fn print_tajwid(cli: &Cli, lexicon: &Lexicon, verse: &str) {
    let words = tokenize_words(verse);
    let hints = get_tajwid_hints(&words);
    let rows = cli.mode.transliterate_words(&words, lexicon);
    let painted: Vec<String> = rows
        .iter()
        .zip(&hints)
        .map(|(row, hint)| {
            let text = if cli.syllables { &row.syllables } else { &row.rumi };
            paint(text, hint).to_string()
        })
        .collect();
    println!("{}", painted.join(" "));

    for rule in detect_verse_rules(verse) {
        let info = rule.info();
        let name = match hex_rgb(info.color) {
            Some((r, g, b)) => info.name.truecolor(r, g, b).bold(),
            None => info.name.bold(),
        };
        println!("  {}: {}", name, info.description);
    }
}

fn print_words(cli: &Cli, lexicon: &Lexicon, verse: &str) {
    let words = tokenize_words(verse);
    let hints = get_tajwid_hints(&words);
    let rows: Vec<WordRow> = cli
        .mode
        .transliterate_words(&words, lexicon)
        .into_iter()
        .zip(&hints)
        .map(|(row, hint)| WordRow {
            arabic: row.arabic,
            rumi: if cli.tajwid {
                paint(&row.rumi, hint).to_string()
            } else {
                row.rumi
            },
            syllables: row.syllables,
            tajwid: hint.label.to_string(),
        })
        .collect();

    if !rows.is_empty() {
        let table = Table::new(&rows).with(Style::modern()).to_string();
        println!("{}", table);
    }
}

fn write_csv(cli: &Cli, lexicon: &Lexicon, verses: &[&str]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    for verse in verses {
        let words = tokenize_words(verse);
        for row in cli.mode.transliterate_words(&words, lexicon) {
            writer.serialize(&row).context("Failed to write CSV row")?;
        }
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let lexicon = load_lexicon(cli.mode, cli.lexicon.as_ref())?;
    let input = read_input(cli.text.clone())?;
    let verses: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    info!("Transliterating {} line(s) in {} mode", verses.len(), cli.mode);

    if cli.csv {
        return write_csv(&cli, &lexicon, &verses);
    }

    for verse in &verses {
        if cli.words {
            print_words(&cli, &lexicon, verse);
        } else if cli.tajwid {
            print_tajwid(&cli, &lexicon, verse);
        } else {
            print_verse(&cli, &lexicon, verse);
        }
    }

    Ok(())
}

//! Haikufy CLI - German Haiku Detection
//!
//! Command-line interface for checking texts and counting syllables.

use clap::{Parser, Subcommand};
use haikufy::{Config, DictionaryOracle, Haikufy, Result};
use log::{error, info};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "haikufy")]
#[command(author = "Haikufy Contributors")]
#[command(version)]
#[command(about = "German haiku detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON, overlays the German defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a text is a haiku
    Check {
        /// Text to check (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Count the syllables of single words
    Count {
        /// Words to count
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Read texts interactively until EOF
    Repl,

    /// Check every line of a file
    Batch {
        /// Input file (one text per line)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the effective configuration as JSON
    DumpConfig,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = load_config(cli.config).and_then(|config| run(cli.command, config));

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: Config) -> Result<()> {
    // Dumping must not require the dictionary
    if let Commands::DumpConfig = command {
        config.validate()?;
        return dump_config(&config);
    }

    let engine = Haikufy::new(config, DictionaryOracle::german()?)?;
    match command {
        Commands::Check { text } => check_text(&engine, &text.join(" ")),
        Commands::Count { words } => count_words(&engine, &words),
        Commands::Repl => repl(&engine),
        Commands::Batch { input } => batch(&engine, input),
        Commands::DumpConfig => dump_config(engine.config()),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_file(&path)
        }
        None => Ok(Config::default()),
    }
}

fn dump_config(config: &Config) -> Result<()> {
    println!("{}", config.to_json()?);
    Ok(())
}

fn check_text(engine: &Haikufy, text: &str) -> Result<()> {
    match engine.haikufy(text) {
        Some(haiku) => println!("{}", haiku),
        None => println!("Not a haiku!"),
    }
    Ok(())
}

fn count_words(engine: &Haikufy, words: &[String]) -> Result<()> {
    for word in words {
        for (token, count) in engine.word_counts(word) {
            match count {
                Some(count) => println!("{}\t{}", token, count),
                None => println!("{}\t?", token),
            }
        }
    }
    Ok(())
}

fn repl(engine: &Haikufy) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!(">>> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match engine.haikufy(line.trim_end()) {
            Some(haiku) => println!("{}\n", haiku),
            None => println!("Not a haiku!\n"),
        }
    }
}

fn batch(engine: &Haikufy, input: PathBuf) -> Result<()> {
    let start_time = Instant::now();

    let reader = BufReader::new(File::open(&input)?);
    let texts = reader.lines().collect::<io::Result<Vec<String>>>()?;
    info!("Loaded {} texts from {}", texts.len(), input.display());

    let haikus: Vec<_> = texts
        .par_iter()
        .map(|text| engine.haikufy(text))
        .collect();

    let mut found = 0;
    for haiku in haikus.iter().flatten() {
        println!("{}\n", haiku);
        found += 1;
    }

    info!(
        "Found {} haikus in {} texts ({:.2?})",
        found,
        texts.len(),
        start_time.elapsed()
    );
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Corpus;
use engine::{ChatSession, EngineConfig};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// ReelTalk - Conversational Movie Recommender
#[derive(Parser)]
#[command(name = "reel-talk")]
#[command(about = "Chat about movies and get recommendations scored from what you mention", long_about = None)]
struct Cli {
    /// Path to the dataset directory holding the three CSV files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Path to the assets directory (taxonomy, persons, dialogue script)
    #[arg(short, long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Path to the corpus cache file
    #[arg(long, default_value = "corpus-cache.json")]
    cache: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the recommender
    Chat {
        /// Seed for reproducible conversations
        #[arg(long)]
        seed: Option<u64>,

        /// Number of recommendations to print when the chat ends
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Show corpus statistics
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Chat { seed, limit } => handle_chat(&cli, seed, limit)?,
        Commands::Search { ref title } => handle_search(&cli, title)?,
        Commands::Stats => handle_stats(&cli)?,
    }

    Ok(())
}

/// Handle the 'chat' command
fn handle_chat(cli: &Cli, seed: Option<u64>, limit: usize) -> Result<()> {
    println!("Loading movie corpus from {}...", cli.data_dir.display());
    let start = Instant::now();

    let config = EngineConfig::default().with_recommend_count(limit);
    let mut session = ChatSession::open(&cli.data_dir, &cli.assets_dir, &cli.cache, config)
        .context("Failed to open the chat session")?;
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }

    println!(
        "{} Ready in {:?} ({} movies)",
        "✓".green(),
        start.elapsed(),
        session.corpus().len()
    );
    println!();
    println!(
        "{}",
        "Tell me what you like; type \"quit\" to stop early.".bold().blue()
    );

    let stdin = io::stdin();
    loop {
        print!("{} ", "you>".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: the user closed the input stream
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let response = session.process_turn(line);
        println!("{} {}", "bot>".bold().green(), response.text);
        if response.should_end {
            break;
        }
    }

    println!();
    print_recommendations(&session.recommendations());
    Ok(())
}

/// Handle the 'search' command
fn handle_search(cli: &Cli, title: &str) -> Result<()> {
    let corpus = load_corpus(cli)?;
    let title_lower = title.to_lowercase();

    // Collect matches with a relevance flag: 0 for exact, 1 for substring
    let mut matches: Vec<(&data_loader::MovieRecord, usize)> = Vec::new();
    for record in corpus.records() {
        if record.title_lower() == title_lower || record.original_title_lower() == title_lower {
            matches.push((record, 0));
        } else if record.title_lower().contains(&title_lower)
            || record.original_title_lower().contains(&title_lower)
        {
            matches.push((record, 1));
        }
    }

    // Sort by relevance (exact match first), then by rating
    matches.sort_by(|a, b| {
        a.1.cmp(&b.1).then_with(|| {
            b.0.vote_average()
                .partial_cmp(&a.0.vote_average())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    for (record, _) in matches.iter().take(20) {
        let mut genres: Vec<&str> = record.genres().iter().map(|g| g.as_str()).collect();
        genres.sort_unstable();
        println!(
            "{}: {} ({}) [{}] avg {:.2} ({} votes)",
            record.id(),
            record.title(),
            record.release_date().get(..4).unwrap_or("????"),
            genres.join(", "),
            record.vote_average(),
            record.vote_count()
        );
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(cli: &Cli) -> Result<()> {
    let corpus = load_corpus(cli)?;
    if corpus.is_empty() {
        println!("The corpus is empty.");
        return Ok(());
    }

    let count = corpus.len() as f32;
    let avg_rating = corpus
        .records()
        .iter()
        .map(|r| r.vote_average())
        .sum::<f32>()
        / count;
    let avg_runtime = corpus.records().iter().map(|r| r.runtime()).sum::<f32>() / count;

    let mut genre_counts: HashMap<&str, usize> = HashMap::new();
    for record in corpus.records() {
        for genre in record.genres() {
            *genre_counts.entry(genre.as_str()).or_insert(0) += 1;
        }
    }

    println!("{}", "Corpus statistics:".bold().blue());
    println!("{}Movies: {}", "• ".green(), corpus.len());
    println!("{}Average rating: {:.2}", "• ".green(), avg_rating);
    println!("{}Average runtime: {:.0} minutes", "• ".green(), avg_runtime);

    let mut genres: Vec<(&str, usize)> = genre_counts.into_iter().collect();
    genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    println!("Top genres:");
    for (genre, movies) in genres.iter().take(10) {
        println!("  - {} ({} movies)", genre, movies);
    }
    Ok(())
}

/// Load the corpus for the read-only commands
fn load_corpus(cli: &Cli) -> Result<Corpus> {
    println!("Loading movie corpus from {}...", cli.data_dir.display());
    let start = Instant::now();
    let corpus =
        Corpus::load(&cli.data_dir, &cli.cache).context("Failed to load the movie corpus")?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        corpus.len(),
        start.elapsed()
    );
    Ok(corpus)
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[(String, f32)]) {
    if recommendations.is_empty() {
        println!("Nothing to recommend yet.");
        return;
    }

    println!("{}", "Movie Recommendations:".bold().blue());
    for (rank, (title, likeness)) in recommendations.iter().enumerate() {
        println!(
            "{}. {} - Score: {:.2}",
            (rank + 1).to_string().green(),
            title,
            likeness
        );
    }
}

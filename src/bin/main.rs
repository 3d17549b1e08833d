use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::error::Error;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use suggest_core::{Catalog, RankingConfig, SuggestionEngine, GENERIC_CATEGORY};

#[derive(Parser, Debug)]
#[command(name = "suggest_engine", about = "Rank service-intent suggestions for a query")]
struct Args {
    /// TOML file overriding ranking weights and limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of suggestions (defaults to the config's default_limit)
    #[arg(long)]
    limit: Option<usize>,

    /// Print suggestions as a JSON array
    #[arg(long)]
    json: bool,

    /// Print every matching entry with its score instead of suggestions
    #[arg(long)]
    scores: bool,

    /// Query to rank; starts an interactive prompt when omitted
    query: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RankingConfig::load(path)?,
        None => RankingConfig::default(),
    };
    let mut limit = args.limit.unwrap_or(config.default_limit);
    let catalog = Catalog::builtin()?;
    let engine = SuggestionEngine::with_config(&catalog, config);

    if !args.query.is_empty() {
        let query = args.query.join(" ");
        return print_once(&engine, &query, limit, &args);
    }

    let mut query = String::new();
    loop {
        print_ui(&engine, &query, limit)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match cmd {
            "exit" => break,
            s if s.starts_with(":limit") => {
                match s[":limit".len()..].trim().parse::<usize>() {
                    Ok(n) => limit = n,
                    Err(_) => log::warn!("Ignoring bad limit command: {:?}", s),
                }
            }
            s => {
                query = s.to_string();
            }
        }
    }
    Ok(())
}

fn print_once(
    engine: &SuggestionEngine,
    query: &str,
    limit: usize,
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    if args.scores {
        let ranked = engine.rank(query);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        } else {
            for entry in ranked {
                println!("{:>6}  {} [{}]", entry.score, entry.phrase, entry.category);
            }
        }
        return Ok(());
    }

    let suggestions = engine.suggest(query, limit);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        for s in suggestions {
            println!("{} [{}]", s.phrase, s.category);
        }
    }
    Ok(())
}

fn print_ui(engine: &SuggestionEngine, query: &str, limit: usize) -> Result<(), Box<dyn Error>> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Service Suggestions".bold());
    println!("---------------------------------------------------------------");
    println!("Type a query and press [Enter] to re-rank.");
    println!("':limit N' changes the limit. 'exit' to quit.\n");

    println!("Query: [{}]  limit: {}", query.cyan(), limit);

    let suggestions = engine.suggest(query, limit);
    if suggestions.is_empty() {
        println!("\n{}", "No suggestions.".dark_grey());
    } else {
        println!();
        for (i, s) in suggestions.iter().enumerate() {
            let category = if s.category == GENERIC_CATEGORY {
                s.category.as_str().dark_grey()
            } else {
                s.category.as_str().green()
            };
            println!("  {}: {} ({})", i + 1, s.phrase, category);
        }
    }
    print!("\n> ");
    out.flush()?;
    Ok(())
}

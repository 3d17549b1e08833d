// Line protocol for a UI process that renders suggestions.
//   SUGGEST <query...>  -> SUGGESTIONS <json>
//   LIMIT <n>           -> OK
//   CATEGORIES          -> CATEGORIES <json>
//   EXIT
use std::io::{self, BufRead, Write};
use suggest_core::{Catalog, SuggestionEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("--- Suggestion simulator starting ---");

    let catalog = Catalog::builtin()?;
    let engine = SuggestionEngine::new(&catalog);
    let mut limit = engine.config().default_limit;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        log::debug!("<- {:?}", input);
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (input.as_str(), ""),
        };

        let reply = match command {
            "SUGGEST" => {
                let suggestions = engine.suggest(rest, limit);
                format!("SUGGESTIONS {}", serde_json::to_string(&suggestions)?)
            }
            "LIMIT" => match rest.trim().parse::<usize>() {
                Ok(n) => {
                    limit = n;
                    "OK".to_string()
                }
                Err(_) => {
                    log::warn!("Malformed LIMIT: {:?}", rest);
                    "ERROR bad limit".to_string()
                }
            },
            "CATEGORIES" => format!("CATEGORIES {}", serde_json::to_string(&catalog.categories())?),
            "EXIT" => {
                log::info!("Received EXIT");
                break;
            }
            _ => {
                log::warn!("Unknown command: {:?}", input);
                "ERROR unknown command".to_string()
            }
        };

        log::debug!("-> {:?}", reply);
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }

    log::info!("Shutting down.");
    Ok(())
}

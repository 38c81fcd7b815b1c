//! Run a dictionary command from the terminal and print the reply text.
//!
//! Usage: cargo run --bin lookup -- <definir|sinonimos|antonimos> <word...>
//!
//! Uses the default public endpoints. The output is the exact MarkdownV2
//! text the bot would send.

use std::time::Duration;

use lexibot::bot::command::normalize_args;
use lexibot::dictionary::{
    render_definition, render_related, DictionaryClient, Relation, DEFAULT_DICTIONARY_API_URL,
};

const TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest.join(" ")),
        None => usage(),
    };
    let Some(word) = normalize_args(&rest) else {
        usage();
    };

    let client = match DictionaryClient::new(DEFAULT_DICTIONARY_API_URL, TIMEOUT) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let text = match command {
        "definir" => render_definition(&word, client.lookup(&word).await),
        "sinonimos" => render_related(Relation::Synonyms, &word, client.lookup(&word).await),
        "antonimos" => render_related(Relation::Antonyms, &word, client.lookup(&word).await),
        _ => usage(),
    };
    println!("{text}");
}

fn usage() -> ! {
    eprintln!("Usage: lookup <definir|sinonimos|antonimos> <word...>");
    std::process::exit(2);
}

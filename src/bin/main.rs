use collate_core::persistence::{load_counts_or_new, save_counts};
use collate_core::{first_significant_letter, sort_texts, ViewCounter};
use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::Path;

const COUNTER_PATH: &str = "view_counts.bin";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let counter = load_counts_or_new(Path::new(COUNTER_PATH));
    let mut words: Vec<String> = Vec::new();

    println!("{}", "Gurmukhi Collation Demo. Type 'exit' to save and quit.".bold());
    println!("---------------------------------------------------------------");

    loop {
        print_ui(&words, &counter);

        let mut input = String::new();
        stdin().read_line(&mut input).unwrap();
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {}
            "desc" => {
                let mut ordered = sort_texts(words.clone());
                ordered.reverse();
                println!("\n{}", "Descending (reversed ascending):".bold());
                for word in ordered {
                    println!("  {}", word);
                }
                pause();
            }
            "groups" => {
                println!("\n{}", "Letter groups:".bold());
                for word in sort_texts(words.clone()) {
                    let letter = first_significant_letter(&word)
                        .map(String::from)
                        .unwrap_or_else(|| "#".to_string());
                    println!("  [{}] {}", letter.green(), word);
                }
                pause();
            }
            s => {
                // every added word counts as one "view" of a fake page id
                let page = words.len() as u64 + 1;
                counter.record(page);
                words.push(s.to_string());
            }
        }
    }

    println!("\nSaving view counters...");
    if let Err(e) = save_counts(&counter, Path::new(COUNTER_PATH)) {
        eprintln!("[ERROR] Could not save counters: {}", e);
    } else {
        println!("Counters saved to '{}'", COUNTER_PATH);
    }
}

fn print_ui(words: &[String], counter: &ViewCounter) {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "Gurmukhi Collation Demo".bold());
    println!("---------------------------------------------------------------");
    println!("Type a word to add it. Commands: 'desc', 'groups', 'exit'.\n");

    if words.is_empty() {
        println!("No words yet.");
    } else {
        println!("{}", "Dictionary order (ascending):".bold());
        for word in sort_texts(words.to_vec()) {
            println!("  {}", word);
        }
    }
    println!("\nTracked pages: {}", counter.len());
    print!("\n> ");
    stdout().flush().unwrap();
}

fn pause() {
    print!("[Enter] to continue");
    stdout().flush().unwrap();
    let mut _discard = String::new();
    stdin().read_line(&mut _discard).unwrap();
}

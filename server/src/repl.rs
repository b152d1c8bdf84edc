//! Interactive console loop, handy for manual testing.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use bookbot::{ChatEngine, ChatSession};

pub fn run(engine: &ChatEngine) -> Result<()> {
    let session = ChatSession::new();
    println!("Chatbot is ready! Type 'quit' to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        print!("You: ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if input.to_lowercase() == "quit" {
            break;
        }

        println!("Bot: {}", engine.respond(&session, input));
    }
    Ok(())
}

//! Chat command - interactive question loop on stdin.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Local;
use colored::Colorize;

use crate::commands::common::{load_settings, open_store};
use crate::kb::resolve;

/// Greeting printed when the chat loop starts.
const GREETING: &str = "Hi! I am a student-trained bot. Ask me anything; \
if I don't know it yet, teach me with 'slate add'.";

pub fn execute() -> Result<()> {
    let store = open_store()?;
    let settings = load_settings()?;

    println!("{}", crate::LOGO);
    println!();
    println!("{GREETING}");
    println!(
        "{}",
        format!(
            "{} entries loaded. Type 'exit' or press Ctrl-D to leave.",
            store.len()
        )
        .dimmed()
    );
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{} ", "you>".bold());
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if is_exit(text) {
            break;
        }

        let reply = resolve(text, &store, &settings);
        let time = Local::now().format("%H:%M:%S").to_string();
        println!("{} {}", time.dimmed(), "bot>".cyan().bold());
        for reply_line in reply.lines() {
            println!("  {reply_line}");
        }
        println!();
    }

    println!("{}", "Bye.".dimmed());
    Ok(())
}

/// Lines that end the chat loop.
fn is_exit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "exit" | "quit" | "bye")
}

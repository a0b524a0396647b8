//! Small prompt/printing helpers shared by every menu.

use std::io::{self, Write};

use colored::Colorize;

pub fn header(title: &str) {
    println!("\n{}", format!("--- {title} ---").cyan().bold());
}

pub fn info(msg: impl std::fmt::Display) {
    println!("{msg}");
}

pub fn success(msg: impl std::fmt::Display) {
    println!("{}", msg.to_string().green());
}

pub fn error(msg: impl std::fmt::Display) {
    println!("{} {msg}", "Error:".red().bold());
}

pub fn invalid_choice() {
    error("Invalid choice. Please try again.");
}

/// Read one trimmed line after a prompt.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt until the input parses as an unsigned number.
pub fn prompt_u32(label: &str) -> io::Result<u32> {
    loop {
        match prompt(label)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => error("Please enter a whole number."),
        }
    }
}

/// Prompt until the input parses as a price (`12.34` or `12`), returned in
/// minor units.
pub fn prompt_price(label: &str) -> io::Result<u64> {
    loop {
        match parse_price(&prompt(label)?) {
            Some(value) => return Ok(value),
            None => error("Please enter a price like 19.99."),
        }
    }
}

/// Parse `"19.99"` / `"19.9"` / `"19"` into minor units. No negative
/// amounts, at most two decimal places.
pub fn parse_price(input: &str) -> Option<u64> {
    let input = input.trim().strip_prefix('£').unwrap_or(input.trim());
    match input.split_once('.') {
        None => input.parse::<u64>().ok()?.checked_mul(100),
        Some((pounds, pence_digits)) => {
            if pence_digits.is_empty()
                || pence_digits.len() > 2
                || !pence_digits.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            let pounds: u64 = pounds.parse().ok()?;
            let mut pence: u64 = pence_digits.parse().ok()?;
            if pence_digits.len() == 1 {
                pence *= 10;
            }
            pounds.checked_mul(100)?.checked_add(pence)
        }
    }
}

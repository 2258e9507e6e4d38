//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Line prompts and yes/no confirmation read from stdin
//! - Hidden password entry
//! - Resolving login credentials from flags or prompts

use anyhow::{Context, Result};
use secrecy::SecretString;
use std::io::{BufRead, Write};

use crate::error::CliError;

/// Print `prompt` and read one trimmed line from stdin.
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim().to_string())
}

/// Ask a yes/no question; only an answer starting with `y` confirms.
pub fn confirm(question: &str) -> Result<bool> {
    let answer = prompt_line(&format!("{} [y/N] ", question))?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Read a password without echo.
pub fn prompt_password(prompt: &str) -> Result<SecretString> {
    let input = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(false)
        .interact()
        .context("failed to read password")?;
    Ok(SecretString::new(input.into()))
}

/// Username and password from flags, prompting for whatever is missing.
pub fn credentials(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<(String, SecretString)> {
    let username = match username.map(str::trim).filter(|u| !u.is_empty()) {
        Some(u) => u.to_string(),
        None => prompt_line("username: ")?,
    };
    if username.is_empty() {
        return Err(CliError::MissingArgument("a username").into());
    }

    let password = match password.filter(|p| !p.is_empty()) {
        Some(p) => SecretString::new(p.to_string().into()),
        None => prompt_password("password")?,
    };

    Ok((username, password))
}

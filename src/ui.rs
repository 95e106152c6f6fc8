// UI layer: the interactive summarizer form, built on `dialoguer`.
// Each action asks for the endpoint, reads the dialogue text, runs the
// matching `form` action and prints its two output fields.

use crate::api::EndpointClient;
use crate::config::Settings;
use crate::form::{self, EndpointFields, FormOutput};
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead};
use std::time::Duration;

/// A line containing only this ends multi-line input.
pub const END_OF_INPUT: &str = ".";

/// Main interactive menu. Runs until the user picks "Exit".
pub fn main_menu(settings: &Settings) -> Result<()> {
    println!("{}", "LLM Dialogue Summarizer".bold());
    println!("Enter a dialogue to summarize or multiple dialogues separated by blank lines.");

    loop {
        let items = ["Single dialogue", "Batch dialogues", "Exit"];
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => handle_single(settings)?,
            1 => handle_batch(settings)?,
            _ => break,
        }
    }
    Ok(())
}

fn handle_single(settings: &Settings) -> Result<()> {
    let fields = prompt_endpoint(settings)?;
    println!("Dialogue (finish with a line containing only `{END_OF_INPUT}`):");
    let dialogue = read_multiline(&mut io::stdin().lock())?;

    let spinner = spinner("Summarizing...")?;
    let output = form::summarize_single(&fields, &dialogue, EndpointClient::new);
    spinner.finish_and_clear();

    print_output("Summary", &output);
    Ok(())
}

fn handle_batch(settings: &Settings) -> Result<()> {
    let fields = prompt_endpoint(settings)?;
    println!(
        "Dialogues, separated by a blank line (finish with a line containing only `{END_OF_INPUT}`):"
    );
    let raw = read_multiline(&mut io::stdin().lock())?;

    let spinner = spinner("Summarizing batch...")?;
    let output = form::summarize_batch(&fields, &raw, EndpointClient::new);
    spinner.finish_and_clear();

    print_output("Summaries", &output);
    Ok(())
}

/// Ask for endpoint URL and access token. The URL defaults to the
/// configured one; an empty token falls back to `HF_TOKEN`.
fn prompt_endpoint(settings: &Settings) -> Result<EndpointFields> {
    let mut url_input = Input::<String>::new();
    url_input.with_prompt("Endpoint URL").allow_empty(true);
    if let Some(url) = &settings.endpoint_url {
        url_input.default(url.clone());
    }
    let url = url_input.interact_text()?;

    let prompt = if settings.token.is_some() {
        "Access token (empty to use HF_TOKEN)"
    } else {
        "Access token (empty for none)"
    };
    let token = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    let token = if token.trim().is_empty() {
        settings.token.clone().unwrap_or_default()
    } else {
        token
    };

    Ok(EndpointFields {
        url,
        token,
        timeout: Some(settings.timeout()),
    })
}

/// Read lines until a line holding only `END_OF_INPUT` or end of input.
/// Blank lines are kept so batch separators survive.
pub fn read_multiline<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim_end() == END_OF_INPUT {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

fn print_output(label: &'static str, output: &FormOutput) {
    println!("{}", label.green().bold());
    println!("{}", output.text);
    println!("{} {}", "Latency:".dark_grey(), output.latency_text());
    println!();
}

// Library usage example: summarize one sample dialogue and a small batch
// against the endpoint configured in `MODEL_URL` / `HF_TOKEN`.

use anyhow::Context;
use dialogue_summarizer::api::{render_result, EndpointClient, Summarize};
use dialogue_summarizer::config::Settings;
use dialogue_summarizer::logging;

const DIALOGUE: &str = "A: Hi Tom, are you busy tomorrow afternoon?
B: I think I am. Why?
A: I want to go to the animal shelter.
B: For what?
A: I'm getting a puppy for my son.";

const SECOND_DIALOGUE: &str = "A: What are you getting him? B: Something cool. A: What about a Lego? \
B: Too old for that. A: Then what? B: Not sure.";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Settings::from_env()?.endpoint()?;
    let client = EndpointClient::new(config).context("Failed to build HTTP client")?;

    let summary = client.summarize_text(DIALOGUE);
    println!("Single Dialogue Summary:\n {summary}");

    println!("\nBatch Summaries:");
    let summaries = client.summarize_batch(&[DIALOGUE, SECOND_DIALOGUE]);
    for (i, result) in summaries.iter().enumerate() {
        println!("{}. {}", i + 1, render_result(result));
    }
    Ok(())
}

// Library root
// -----------
// A thin client for a hosted dialogue-summarization endpoint. Both binaries
// (`main.rs`, the interactive form, and `bin/summarize_demo.rs`) are built
// on these modules.
//
// Module responsibilities:
// - `api`: the blocking endpoint client, response parsing and the
//   `Summarize` trait.
// - `config`: endpoint configuration and environment settings.
// - `error`: categorized client errors.
// - `form`: validation, batch splitting and latency for the form actions.
// - `ui`: terminal prompts that drive `form`.
pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod ui;

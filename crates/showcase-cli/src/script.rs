// File: src/script.rs
// Purpose: Event scripts replayed against the controller

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use showcase::{DisplayState, Showcase, SubmitOutcome, UiEvent};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// One step of a script
///
/// ```json
/// [
///   { "event": { "type": "input", "field": "name", "value": "Ada" } },
///   { "wait_ms": 1500 },
///   { "event": { "type": "submit" } }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Wait { wait_ms: u64 },
    Event { event: UiEvent },
}

/// What a replay produced
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: usize,
    /// Outcome of every submit, in order
    pub submits: Vec<SubmitOutcome>,
    pub display: DisplayState,
}

pub fn parse(source: &str) -> Result<Vec<Step>> {
    serde_json::from_str(source).context("Failed to parse event script")
}

pub fn load(path: &Path) -> Result<Vec<Step>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {:?}", path))?;
    parse(&source).with_context(|| format!("Invalid script: {:?}", path))
}

/// Run every step in order; stops at the first failing event
pub fn replay(page: &mut Showcase, steps: &[Step]) -> Result<ReplayReport> {
    let mut submits = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        tracing::debug!(index, ?step, "replay step");
        match step {
            Step::Wait { wait_ms } => page.advance(Duration::from_millis(*wait_ms)),
            Step::Event {
                event: UiEvent::Submit,
            } => submits.push(page.submit()),
            Step::Event { event } => page
                .dispatch(event.clone())
                .with_context(|| format!("Step {} ({}) failed", index, event.kind()))?,
        }
    }

    Ok(ReplayReport {
        steps: steps.len(),
        submits,
        display: page.display(),
    })
}

//! Boundary input handling: read a JSON batch and enforce the container
//! contract before typed decoding.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use triage_core::Task;

/// Read the batch body from a file, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(p) => fs::read_to_string(p).with_context(|| format!("read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

/// Decode a JSON batch of tasks.
///
/// Per-task fields are lenient (bad values fall back to scoring defaults);
/// the container is not. Anything other than an array of task objects is
/// rejected whole with a descriptive message, and no partial results are
/// produced.
pub fn parse_batch(body: &str) -> Result<Vec<Task>> {
    let value: serde_json::Value = serde_json::from_str(body).context("invalid JSON")?;
    if !value.is_array() {
        bail!("expected a list of tasks");
    }
    serde_json::from_value(value).context("expected a list of tasks")
}

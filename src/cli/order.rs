//! Dispatch-order preview.
//!
//! Reads a queue snapshot a host dumped as JSON, sorts it with the real
//! policy, and prints the resulting dispatch order. The snapshot is either
//! a bare array of queue entries or an object wrapping the entries with an
//! inline weights override:
//!
//! ```json
//! [{ "task": "backend", "priority": 50, "causes": ["scm"] }]
//! ```
//!
//! ```json
//! { "weights": { "scm": 5 }, "queue": [{ "task": "backend" }] }
//! ```

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::OrderArgs;
use crate::config::SorterConfig;
use crate::queue::{BuildableItem, CauseWeights, effective_priority, sort_by_priority};
use crate::{debug, log};

// =============================================================================
// Snapshot format
// =============================================================================

/// Queue snapshot, with or without an inline weights override.
///
/// Unknown fields on entries and on the wrapping object are ignored, so a
/// host can dump richer task records than the sorter reads.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Queue(Vec<BuildableItem>),
    WithWeights {
        #[serde(default)]
        weights: Option<CauseWeights>,
        queue: Vec<BuildableItem>,
    },
}

impl Snapshot {
    fn into_parts(self) -> (Vec<BuildableItem>, Option<CauseWeights>) {
        match self {
            Self::Queue(queue) => (queue, None),
            Self::WithWeights { weights, queue } => (queue, weights),
        }
    }
}

// =============================================================================
// Command
// =============================================================================

pub fn run_order(args: &OrderArgs, config_path: &Path) -> Result<()> {
    let content = read_snapshot(&args.snapshot)?;
    let snapshot: Snapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot '{}'", args.snapshot.display()))?;

    let (mut queue, override_weights) = snapshot.into_parts();

    let weights = match override_weights {
        Some(weights) => {
            debug!("order"; "using inline weights override: {:?}", weights);
            weights
        }
        None => SorterConfig::load_or_default(config_path)?.weights,
    };

    sort_by_priority(&mut queue, &weights);

    let formatted = if args.json {
        render_json(&queue, &weights, args.pretty)?
    } else {
        render_table(&queue, &weights)
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("order"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Read the snapshot file, or stdin when the path is `-`.
fn read_snapshot(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read snapshot from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot '{}'", path.display()))
}

// =============================================================================
// Output
// =============================================================================

/// Format the dispatch order as JSON, effective priority included.
fn render_json(queue: &[BuildableItem], weights: &CauseWeights, pretty: bool) -> Result<String> {
    let entries: Vec<JsonValue> = queue
        .iter()
        .map(|item| {
            let mut obj = Map::new();
            obj.insert("task".to_string(), JsonValue::String(item.task.clone()));
            obj.insert(
                "effective".to_string(),
                JsonValue::from(effective_priority(item, weights)),
            );
            if let Some(config) = item.priority {
                obj.insert("priority".to_string(), JsonValue::from(config.base));
            }
            obj.insert(
                "causes".to_string(),
                serde_json::to_value(&item.causes).unwrap_or_default(),
            );
            JsonValue::Object(obj)
        })
        .collect();

    let output = JsonValue::Array(entries);
    let formatted = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(formatted)
}

/// Format the dispatch order as an aligned table.
fn render_table(queue: &[BuildableItem], weights: &CauseWeights) -> String {
    let task_width = queue
        .iter()
        .map(|item| item.task.len())
        .chain(std::iter::once("task".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<task_width$}  {:>9}  {:>6}  causes\n",
        "#", "task", "effective", "base"
    ));

    for (position, item) in queue.iter().enumerate() {
        let base = item
            .priority
            .map_or_else(|| "-".to_string(), |config| config.base.to_string());
        let causes = item
            .causes
            .iter()
            .map(|cause| cause.as_tag())
            .collect::<Vec<_>>()
            .join(",");

        out.push_str(&format!(
            "{:>3}  {:<task_width$}  {:>9}  {:>6}  {}\n",
            position + 1,
            item.task,
            effective_priority(item, weights),
            base,
            if causes.is_empty() { "-" } else { causes.as_str() },
        ));
    }

    // Drop the trailing newline; the caller prints with println!/writeln!
    out.pop();
    out
}

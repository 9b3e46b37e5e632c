//! History export: JSON bundles and plain-text tables.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::now_s;
use crate::storage::{HistoryRecord, HistoryStore};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryExport {
    pub generated_at: u64,
    pub tool_version: String,
    pub record_count: usize,
    pub records: Vec<HistoryRecord>,
}

impl HistoryExport {
    pub fn from_store(store: &mut dyn HistoryStore) -> Result<Self> {
        let records = store.list()?;
        Ok(Self {
            generated_at: now_s()?,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            record_count: records.len(),
            records,
        })
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

const HEADERS: [&str; 5] = [
    "Timestamp",
    "Filename",
    "Chi-Square",
    "Entropy",
    "Suspicion Level",
];

/// Renders records as an aligned table, column widths sized to content.
pub fn render_table(records: &[HistoryRecord]) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.analyzed_at.to_string(),
                r.filename.clone(),
                format!("{:.3}", r.chi_square_score),
                format!("{:.3}", r.entropy),
                r.suspicion_level.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

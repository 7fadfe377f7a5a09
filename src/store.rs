//! CSV table store.
//!
//! The collector's output and the renderer's input: one UTF-8,
//! comma-delimited file with a fixed header row. Cells are quoted
//! only when they contain the delimiter, a quote or a line break;
//! quotes are doubled inside quoted cells.
//!
//! The file is rebuilt from scratch on every collect run. There is
//! no append mode and no merging with prior runs.

use std::fs;
use std::io::{BufWriter, Write};
use std::mem::take;
use std::path::Path;

use anyhow::Context;

use crate::schema::{COLUMNS, JobRecord};

/// In-memory view of the tabular file, as read back by the renderer.
///
/// Headers and rows keep file order; no reordering, no validation
/// beyond the quoting rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/* ---------------- Writing ---------------- */

/// Serializes the aggregated records, overwriting any prior file.
///
/// Creates the parent directory if absent (idempotent). The header
/// row always goes out, even for an empty batch.
pub fn write_table(path: &Path, records: &[JobRecord]) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;

    let file = fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);

    write_row(&mut w, &COLUMNS)?;
    for rec in records {
        write_row(&mut w, &rec.cells())?;
    }
    w.flush()?;

    Ok(())
}

/// Creates the containing directory if absent. No error when it
/// already exists.
pub(crate) fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_row<W: Write>(w: &mut W, cells: &[&str]) -> anyhow::Result<()> {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(w, ",")?;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)?;
    Ok(())
}

fn needs_quotes(cell: &str) -> bool {
    cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

/* ---------------- Reading ---------------- */

/// Reads the tabular file back, header row first.
///
/// A missing file surfaces as a distinguishable not-found condition
/// (see [`is_not_found`]); callers decide whether that aborts the
/// run. Row and column order are preserved as written.
pub fn read_table(path: &Path) -> anyhow::Result<Table> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let mut rows = parse_rows(&text);
    anyhow::ensure!(!rows.is_empty(), "{} has no header row", path.display());

    let headers = rows.remove(0);
    Ok(Table { headers, rows })
}

/// True when `err` bottoms out in a file-not-found I/O error.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.root_cause()
        .downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

/// Minimal CSV parser, quote and CRLF tolerant.
///
/// Handles exactly what the writer above produces, plus hand-edited
/// files with CRLF endings or unterminated final lines.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled-quote escape
                        cell.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => row.push(take(&mut cell)),
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut cell));
                // a lone empty cell is a blank line, not a row
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => cell.push(ch),
        }
    }

    // flush an unterminated final line
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}

//! Header-driven CSV import.

use serde_json::{Map, Value};

use super::{id_or_generate, ImportError};
use crate::ids::IdGenerator;
use crate::record::{NewRecord, Record};

/// Parse CSV text into records.
///
/// The first row is the header. Each later non-blank row maps cell `i` to
/// header `i`; missing cells are empty and surplus cells are dropped. Cell
/// values are kept as received, headers are trimmed. Quoted cells may span
/// lines. An empty file yields no records.
pub fn parse_csv(text: &str, ids: &IdGenerator) -> Result<Vec<Record>, ImportError> {
    let mut rows = parse_rows(text)?.into_iter();

    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header
        .cells
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();

    for CsvRow { line, cells } in rows {
        let mut row = Map::new();
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = cells.get(i).cloned().unwrap_or_default();
            row.insert(header.clone(), Value::String(cell));
        }

        let id = match row.remove("id") {
            Some(Value::String(raw)) => id_or_generate(&raw, ids),
            _ => ids.next_id(),
        };
        let fields: NewRecord = serde_json::from_value(Value::Object(row))
            .map_err(|source| ImportError::Malformed { line, source })?;

        records.push(Record::new(id, fields));
    }

    Ok(records)
}

/// A row of cells and the 1-based line it starts on.
#[derive(Debug, PartialEq)]
struct CsvRow {
    line: usize,
    cells: Vec<String>,
}

/// Split CSV text into rows, honouring quoted fields, doubled quotes and
/// line breaks inside quotes. Blank rows are skipped.
fn parse_rows(text: &str) -> Result<Vec<CsvRow>, ImportError> {
    let mut rows = Vec::new();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted_row = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => {
                    if ch == '\n' {
                        line += 1;
                    }
                    current.push(ch);
                }
            }
            continue;
        }

        match ch {
            '"' => {
                in_quotes = true;
                quoted_row = true;
            }
            ',' => cells.push(std::mem::take(&mut current)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                cells.push(std::mem::take(&mut current));
                push_row(&mut rows, row_start, std::mem::take(&mut cells), quoted_row);
                line += 1;
                row_start = line;
                quoted_row = false;
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return Err(ImportError::UnterminatedQuote { line: row_start });
    }
    cells.push(current);
    push_row(&mut rows, row_start, cells, quoted_row);
    Ok(rows)
}

fn push_row(rows: &mut Vec<CsvRow>, line: usize, cells: Vec<String>, quoted: bool) {
    let blank = !quoted && cells.len() == 1 && cells[0].trim().is_empty();
    if !blank {
        rows.push(CsvRow { line, cells });
    }
}

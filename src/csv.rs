// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// First record of a CSV/TSV text (the header, when one was written).
pub fn first_row(text: &str, sep: char) -> Option<Vec<String>> {
    parse_rows(text, sep).into_iter().next()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header (if any) followed by every row.
pub fn write_rows<W: Write>(mut w: W, header: Option<&[String]>, rows: &[Vec<String>], sep: char) -> io::Result<()> {
    if let Some(h) = header {
        write_row(&mut w, h, sep)?;
    }
    for r in rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Same as `write_rows`, into a String.
pub fn rows_to_string(header: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_rows(&mut buf, header, rows, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let out = rows_to_string(None, &[row(&["a", "b,c", "say \"hi\"", ""])], ',');
        assert_eq!(out, "a,\"b,c\",\"say \"\"hi\"\"\",\n");
        let tsv = rows_to_string(None, &[row(&["b,c", "d"])], '\t');
        assert_eq!(tsv, "b,c\td\n");
    }

    #[test]
    fn parse_back_with_empty_cells() {
        let header = row(&["x", "y", "z"]);
        let text = rows_to_string(Some(&header), &[row(&["1", "", "a\nb"])], ',');
        let rows = parse_rows(&text, ',');
        assert_eq!(rows, vec![header.clone(), row(&["1", "", "a\nb"])]);
        assert_eq!(first_row(&text, ','), Some(header));
    }

    #[test]
    fn crlf_and_no_trailing_newline() {
        assert_eq!(parse_rows("a,b\r\nc,d", ','), vec![row(&["a", "b"]), row(&["c", "d"])]);
        assert!(parse_rows("", ',').is_empty());
    }
}

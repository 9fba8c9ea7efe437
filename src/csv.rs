// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::consts::EXPORT_HEADERS;
use crate::data::FilteredView;

const SEP: char = ',';

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled quote
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            c if c == SEP && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if row.len() == 1 && row[0].is_empty() {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a newline, even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

/// Split off the export header row if present.
pub fn detect_headers(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let is_header = rows
        .first()
        .is_some_and(|first| first.iter().map(String::as_str).eq(EXPORT_HEADERS));
    if is_header {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W, S>(mut w: W, row: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEP}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Header plus one `source,name,url` row per record. URLs are written raw.
pub fn write_view<W: Write>(mut w: W, view: &FilteredView<'_>) -> io::Result<()> {
    write_row(&mut w, &EXPORT_HEADERS)?;
    for r in view.iter() {
        write_row(&mut w, &[r.source.label(), r.name.as_str(), r.url.as_str()])?;
    }
    Ok(())
}

/// Full export text (Download/Copy).
pub fn to_export_string(view: &FilteredView<'_>) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_view(&mut buf, view);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AttractionRecord, AttractionTable, SourceKind};

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a,b", "say \"hi\""]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn parser_handles_quotes_and_crlf() {
        let rows = parse_rows("a,\"b,c\"\r\n\"d\"\"e\",f\n\n");
        assert_eq!(rows, vec![vec!["a", "b,c"], vec!["d\"e", "f"]]);
    }

    #[test]
    fn export_has_header_and_raw_urls() {
        let table = AttractionTable::from_records(vec![AttractionRecord::new(
            SourceKind::VisitAgadir,
            "Crocoparc Agadir",
            "https://crocoparc.com/?a=1,2",
        )]);
        let text = to_export_string(&table.view_all());
        assert_eq!(
            text,
            "source,name,url\nVisit Agadir,Crocoparc Agadir,\"https://crocoparc.com/?a=1,2\"\n"
        );
    }

    #[test]
    fn header_detection() {
        let (h, rows) = detect_headers(parse_rows("source,name,url\nVisit Agadir,X,y\n"));
        assert!(h.is_some());
        assert_eq!(rows.len(), 1);
        let (h, rows) = detect_headers(parse_rows("Visit Agadir,X,y\n"));
        assert!(h.is_none());
        assert_eq!(rows.len(), 1);
    }
}

use std::path::Path;

use thiserror::Error;

use super::model::Record;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a load produced no records. Rows without a usable quality field are
/// not errors; they are dropped during parsing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read at all. Callers degrade to an empty
    /// record set; the dashboard keeps rendering.
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load publication records from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – `<link>,<quality>` rows, first line skipped as header
/// * `.json` – `[{ "link": "...", "quality": "..." }, ...]`
pub fn load_file(path: &Path) -> Result<Vec<Record>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let text = std::fs::read_to_string(path)?;
            Ok(parse_csv_text(&text))
        }
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse the dashboard's CSV layout.
///
/// The first line is always discarded as a header, whatever it contains.
/// Each remaining line is split on the first comma into `(link, quality)`;
/// the quality is whitespace-trimmed. Lines whose quality is empty after
/// trimming (including lines with no comma at all) are silently dropped.
/// No quoting or escaping: a comma inside the link corrupts that row, which
/// the input contract accepts. Input order is preserved, links pass through
/// unvalidated.
pub fn parse_csv_text(text: &str) -> Vec<Record> {
    text.lines()
        .skip(1)
        .filter_map(|line| {
            let (link, quality_raw) = line.split_once(',')?;
            let quality = quality_raw.trim();
            if quality.is_empty() {
                return None;
            }
            Some(Record::new(link, quality))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level array of record objects:
///
/// ```json
/// [
///   { "link": "http://example.com/a", "quality": "MUY BIEN" },
///   { "link": "http://example.com/b", "quality": "REGULAR" }
/// ]
/// ```
///
/// The same trim/drop rule as the CSV path applies to each quality field.
fn load_json(path: &Path) -> Result<Vec<Record>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let raw: Vec<Record> = serde_json::from_str(&text)?;

    Ok(raw
        .into_iter()
        .filter_map(|rec| {
            let quality = rec.quality.trim();
            if quality.is_empty() {
                return None;
            }
            Some(Record::new(rec.link, quality))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_always_skipped() {
        // even a header that looks like a data row
        let text = "http://x,MUY BIEN\na,BIEN\n";
        let records = parse_csv_text(text);
        assert_eq!(records, vec![Record::new("a", "BIEN")]);
    }

    #[test]
    fn worked_example_rows() {
        let text = "header\na,MUY BIEN\nb,BIEN\nc,BIEN\nd,REGULAR\n";
        let records = parse_csv_text(text);
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], Record::new("a", "MUY BIEN"));
        assert_eq!(records[3], Record::new("d", "REGULAR"));
    }

    #[test]
    fn empty_link_is_accepted() {
        let records = parse_csv_text("link,quality\n,BIEN\n");
        assert_eq!(records, vec![Record::new("", "BIEN")]);
    }

    #[test]
    fn whitespace_quality_is_dropped() {
        let records = parse_csv_text("link,quality\nhttp://x,  \n");
        assert!(records.is_empty());
    }

    #[test]
    fn rows_without_a_comma_are_dropped() {
        let records = parse_csv_text("link,quality\nno-comma-here\na,MALA\n");
        assert_eq!(records, vec![Record::new("a", "MALA")]);
    }

    #[test]
    fn quality_is_trimmed_but_link_is_not_validated() {
        let records = parse_csv_text("link,quality\nnot a url at all, MUY MALA \n");
        assert_eq!(records, vec![Record::new("not a url at all", "MUY MALA")]);
    }

    #[test]
    fn crlf_input_parses_clean() {
        let records = parse_csv_text("link,quality\r\na,BIEN\r\nb,MALA\r\n");
        assert_eq!(
            records,
            vec![Record::new("a", "BIEN"), Record::new("b", "MALA")]
        );
    }

    #[test]
    fn input_order_is_preserved_without_dedup() {
        let records = parse_csv_text("h\nx,BIEN\nx,BIEN\ny,MALA\n");
        let links: Vec<&str> = records.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(links, vec!["x", "x", "y"]);
    }

    #[test]
    fn only_first_comma_splits_the_row() {
        // a comma inside the link corrupts the row by contract
        let records = parse_csv_text("h\nhttp://x,y,BIEN\n");
        assert_eq!(records, vec![Record::new("http://x", "y,BIEN")]);
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = load_file(Path::new("/no/such/dir/publications.csv")).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable(_)));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("data.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "parquet"));
    }
}

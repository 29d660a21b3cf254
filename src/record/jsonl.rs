//! JSON Lines record reader.
//!
//! Each non-blank line holds one email object:
//! ```jsonl
//! {"subject": "Re: invoice", "body": "We will cover the cost.", "from": "alice@example.com"}
//! {"subject": "Meeting", "body": "See you at noon."}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::Path;

use crate::error::{LitriskError, Result};
use crate::record::email::EmailRecord;

/// Streams [`EmailRecord`]s out of a JSON Lines source.
///
/// Items carry the 1-based line number they were read from. Blank lines are
/// skipped; malformed lines, including lines that are not valid UTF-8, yield
/// a [`LitriskError::Parse`] naming the line and the reader moves on to the
/// next line. Other read failures surface as [`LitriskError::Io`].
#[derive(Debug)]
pub struct JsonlRecordReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl JsonlRecordReader<BufReader<File>> {
    /// Open a JSON Lines file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlRecordReader<R> {
    /// Create a reader over any buffered source.
    pub fn new(reader: R) -> Self {
        JsonlRecordReader {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Parse a single JSON line into a record.
    fn parse_line(&self, line: &str) -> Result<EmailRecord> {
        serde_json::from_str(line).map_err(|e| {
            LitriskError::parse(format!("line {}: invalid record: {e}", self.line_number))
        })
    }
}

impl<R: BufRead> Iterator for JsonlRecordReader<R> {
    type Item = Result<(usize, EmailRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;

            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Some(Err(LitriskError::parse(format!(
                        "line {}: invalid record: {e}",
                        self.line_number
                    ))));
                }
                Err(e) => return Some(Err(e.into())),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Some(
                self.parse_line(trimmed)
                    .map(|record| (self.line_number, record)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::email::TextFields;
    use std::io::Cursor;

    #[test]
    fn test_reads_records_with_line_numbers() {
        let input = "{\"subject\": \"a\", \"body\": \"one\"}\n\n{\"subject\": \"b\"}\n";
        let records: Vec<(usize, EmailRecord)> = JsonlRecordReader::new(Cursor::new(input))
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, 1);
        assert_eq!(records[0].1.body(), Some("one"));
        assert_eq!(records[1].0, 3);
        assert_eq!(records[1].1.subject(), Some("b"));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = "{\"subject\": \"ok\"}\nnot json\n{\"subject\": \"after\"}\n";
        let items: Vec<Result<(usize, EmailRecord)>> =
            JsonlRecordReader::new(Cursor::new(input)).collect();

        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        match &items[1] {
            Err(LitriskError::Parse(msg)) => assert!(msg.starts_with("line 2:")),
            other => panic!("Expected parse error, got {other:?}"),
        }
        assert_eq!(items[2].as_ref().unwrap().0, 3);
    }

    #[test]
    fn test_invalid_utf8_line_keeps_line_numbers() {
        let input: &[u8] = b"{\"body\": \"scam\"}\n{\"body\": \"\xff\xfe\"}\n{\"body\": \"legal action\"}\n";
        let items: Vec<Result<(usize, EmailRecord)>> =
            JsonlRecordReader::new(Cursor::new(input)).collect();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().unwrap().0, 1);
        match &items[1] {
            Err(LitriskError::Parse(msg)) => assert!(msg.starts_with("line 2:")),
            other => panic!("Expected parse error, got {other:?}"),
        }
        let (line, record) = items[2].as_ref().unwrap();
        assert_eq!(*line, 3);
        assert_eq!(record.body(), Some("legal action"));
    }

    #[test]
    fn test_non_object_line_is_error() {
        let items: Vec<_> = JsonlRecordReader::new(Cursor::new("[1, 2]\n")).collect();
        assert!(items[0].is_err());
    }
}

//! Chunked tolerant CSV parsing.
//!
//! The reader yields batches of up to `chunk_size` parsed records. A record
//! is dropped from its chunk, never surfaced, when it cannot be used as a
//! row of the table:
//!
//! - wrong field count relative to the header row,
//! - a cell that does not decode as UTF-8,
//! - any record-level parse error that is not a transport failure.
//!
//! I/O errors are transport failures and abort the stream. The stream is
//! exhausted when the remote side closes; it is not restartable.

use std::io::Read;

use csv::{ByteRecordsIntoIter, ReaderBuilder, StringRecord};

use crate::error::LoadError;

/// One ordered batch of parsed rows, plus the count of rows the parser
/// dropped while filling it.
#[derive(Debug, Clone, Default)]
pub struct RowChunk {
    pub rows: Vec<Vec<String>>,
    pub dropped: usize,
}

impl RowChunk {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Streaming reader producing [`RowChunk`]s from any byte source.
pub struct ChunkReader<R: Read> {
    records: ByteRecordsIntoIter<R>,
    headers: Vec<String>,
    chunk_size: usize,
    done: bool,
}

impl<R: Read> ChunkReader<R> {
    /// Reads the header row eagerly and prepares chunked iteration.
    ///
    /// A header that cannot be read or decoded is fatal; tolerance applies
    /// to data rows only.
    pub fn new(reader: R, chunk_size: usize) -> Result<Self, LoadError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|source| LoadError::Header { source })?
            .iter()
            .map(normalize_header)
            .collect();
        Ok(Self {
            records: csv_reader.into_byte_records(),
            headers,
            chunk_size: chunk_size.max(1),
            done: false,
        })
    }

    /// Column names from the source header row, in source order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_start_matches('\u{feff}').to_string()
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<RowChunk, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let expected = self.headers.len();
        let mut chunk = RowChunk::default();
        while chunk.rows.len() < self.chunk_size {
            match self.records.next() {
                None => {
                    self.done = true;
                    break;
                }
                Some(Ok(record)) => {
                    if record.len() != expected {
                        chunk.dropped += 1;
                        continue;
                    }
                    match StringRecord::from_byte_record(record) {
                        Ok(decoded) => {
                            chunk.rows.push(decoded.iter().map(str::to_string).collect());
                        }
                        Err(_) => chunk.dropped += 1,
                    }
                }
                Some(Err(err)) => {
                    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
                        self.done = true;
                        return Some(Err(LoadError::Read { source: err }));
                    }
                    chunk.dropped += 1;
                }
            }
        }
        if self.done && chunk.is_empty() && chunk.dropped == 0 {
            return None;
        }
        Some(Ok(chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &[u8], chunk_size: usize) -> ChunkReader<&[u8]> {
        ChunkReader::new(input, chunk_size).expect("chunk reader")
    }

    fn collect_rows(input: &[u8], chunk_size: usize) -> (Vec<Vec<String>>, usize) {
        let mut rows = Vec::new();
        let mut dropped = 0;
        for chunk in reader(input, chunk_size) {
            let chunk = chunk.expect("chunk");
            dropped += chunk.dropped;
            rows.extend(chunk.rows);
        }
        (rows, dropped)
    }

    #[test]
    fn well_formed_source_keeps_every_row_in_order() {
        let (rows, dropped) = collect_rows(b"a,b\n1,2\n3,4\n5,6\n", 100);
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"], vec!["5", "6"]]);
        assert_eq!(dropped, 0);
    }

    #[test]
    fn wrong_field_count_is_dropped_silently() {
        // Second data row has an extra field.
        let (rows, dropped) = collect_rows(b"a,b\n1,2\n3,x,y\n4,5", 100);
        assert_eq!(rows, vec![vec!["1", "2"], vec!["4", "5"]]);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn short_row_is_dropped_too() {
        let (rows, dropped) = collect_rows(b"a,b,c\n1,2,3\n4,5\n6,7,8\n", 100);
        assert_eq!(rows, vec![vec!["1", "2", "3"], vec!["6", "7", "8"]]);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn undecodable_cell_drops_the_row() {
        let mut input = b"a,b\n1,2\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe]);
        input.extend_from_slice(b",3\n4,5\n");
        let (rows, dropped) = collect_rows(&input, 100);
        assert_eq!(rows, vec![vec!["1", "2"], vec!["4", "5"]]);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn chunks_are_bounded_and_cover_the_stream() {
        let mut input = String::from("a,b\n");
        for i in 0..250 {
            input.push_str(&format!("{i},{i}\n"));
        }
        let sizes: Vec<usize> = reader(input.as_bytes(), 100)
            .map(|chunk| chunk.expect("chunk").len())
            .collect();
        assert_eq!(sizes, vec![100, 100, 50]);
    }

    #[test]
    fn header_only_source_yields_no_chunks() {
        assert_eq!(reader(b"a,b\n", 100).count(), 0);
    }

    #[test]
    fn fully_malformed_source_yields_one_counting_chunk() {
        let mut chunks = reader(b"a,b\n1,2,3\n4,5,6\n", 100);
        let chunk = chunks.next().expect("chunk").expect("ok");
        assert!(chunk.is_empty());
        assert_eq!(chunk.dropped, 2);
        assert!(chunks.next().is_none());
    }

    #[test]
    fn bom_is_stripped_from_the_header() {
        let chunks = reader("\u{feff}a,b\n1,2\n".as_bytes(), 100);
        assert_eq!(chunks.headers(), ["a", "b"]);
    }

    #[test]
    fn quoted_cells_keep_embedded_separators() {
        let (rows, dropped) = collect_rows(b"a,b\n\"x,y\",2\n", 100);
        assert_eq!(rows, vec![vec!["x,y", "2"]]);
        assert_eq!(dropped, 0);
    }
}

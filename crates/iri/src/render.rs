//! CSV rendering of the decoded profile table

use crate::error::{Error, Result};
use crate::profile::{ResultTable, PARAMETER_LABELS};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Round half up: `floor(v + 0.5)`.
///
/// This is the report's contract for every data column. Note it is not
/// round-half-to-even, and negative halves round toward positive
/// infinity: -2.5 renders as -2.
pub(crate) fn round_half_up(v: f32) -> i64 {
    (v + 0.5).floor() as i64
}

/// Serialize a [`ResultTable`] as the height-indexed CSV report.
///
/// One header row (`Height (km)` plus the 20 parameter labels in column
/// order), then one row per height step in increasing height order.
/// Heights are integer-truncated kilometers; data values are rounded
/// half up. The table is fully decoded before the first byte is
/// written, so the sink is the only partial-failure surface.
pub fn write_csv<W: Write>(table: &ResultTable, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);

    let mut header = Vec::with_capacity(1 + PARAMETER_LABELS.len());
    header.push("Height (km)");
    header.extend_from_slice(&PARAMETER_LABELS);
    writer.write_record(&header)?;

    for (i, row) in table.rows().iter().enumerate() {
        let mut record = Vec::with_capacity(1 + row.len());
        record.push((table.height(i) as i64).to_string());
        record.extend(row.iter().map(|&v| round_half_up(v).to_string()));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the CSV report to a file.
///
/// On any failure the partial file is removed before the error
/// propagates; no half-written report is left behind.
pub fn write_csv_file<P: AsRef<Path>>(table: &ResultTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::OutputWrite(format!("cannot open {}: {}", path.display(), e)))?;

    if let Err(e) = write_csv(table, file) {
        let _ = std::fs::remove_file(path);
        return Err(e);
    }
    log::info!("wrote {} rows to {}", table.num_rows(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffers::{RawHeightBuffer, NUM_PARAMETERS};
    use crate::request::HeightRange;
    use std::io;

    fn reference_table() -> ResultTable {
        let heights = HeightRange::new(600.0, 800.0, 10.0).unwrap();
        let mut raw = RawHeightBuffer::zeroed();
        for row in 0..heights.num_rows() {
            for col in 0..NUM_PARAMETERS {
                raw.set(row, col, (row * 10 + col) as f32);
            }
        }
        ResultTable::decode(&raw, heights).unwrap()
    }

    fn render_lines(table: &ResultTable) -> Vec<String> {
        let mut sink = Vec::new();
        write_csv(table, &mut sink).unwrap();
        String::from_utf8(sink)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_round_half_up_law() {
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.49), 0);
    }

    #[test]
    fn test_header_row() {
        let lines = render_lines(&reference_table());
        let header: Vec<&str> = lines[0].split(',').collect();
        assert_eq!(header.len(), 21);
        assert_eq!(header[0], "Height (km)");
        assert_eq!(header[1], "Ne (cm^-3)");
        assert_eq!(header[9], "B0 (km)");
        assert_eq!(header[20], "B11");
    }

    #[test]
    fn test_reference_scenario_line_count() {
        // 600..800 by 10: 21 data rows, 22 lines with the header
        let lines = render_lines(&reference_table());
        assert_eq!(lines.len(), 22);
        assert!(lines[1].starts_with("600,"));
        assert!(lines[21].starts_with("800,"));
    }

    #[test]
    fn test_height_truncation_and_value_rounding() {
        let heights = HeightRange::new(100.5, 105.5, 2.5).unwrap();
        let mut raw = RawHeightBuffer::zeroed();
        // column 0 divides by 1e6 at decode; feed values that exercise
        // the rounding rule after conversion
        raw.set(0, 0, 2.4e6);
        raw.set(0, 1, 2.5);
        raw.set(0, 2, -2.5);
        let table = ResultTable::decode(&raw, heights).unwrap();

        let lines = render_lines(&table);
        let first: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(first[0], "100"); // 100.5 truncated, not rounded
        assert_eq!(first[1], "2");
        assert_eq!(first[2], "3");
        assert_eq!(first[3], "-2");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");
        write_csv_file(&reference_table(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 22);
    }

    #[test]
    fn test_unwritable_path_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.csv");
        assert!(matches!(
            write_csv_file(&reference_table(), &path),
            Err(Error::OutputWrite(_))
        ));
        assert!(!path.exists());
    }

    /// Sink that fails after a few bytes, standing in for a full disk.
    struct FailingSink {
        remaining: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.remaining {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.remaining -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_propagates() {
        let sink = FailingSink { remaining: 16 };
        assert!(matches!(
            write_csv(&reference_table(), sink),
            Err(Error::OutputWrite(_))
        ));
    }
}

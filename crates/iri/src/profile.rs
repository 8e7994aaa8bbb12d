//! Decoded height-profile table with unit normalization

use crate::buffers::{RawHeightBuffer, NUM_PARAMETERS, PROFILE_CAPACITY};
use crate::error::{Error, Result};
use crate::request::HeightRange;

/// Column labels of the profile table, in native parameter order.
pub const PARAMETER_LABELS: [&str; NUM_PARAMETERS] = [
    "Ne (cm^-3)",
    "NmF2 (cm^-3)",
    "HmF2 (km)",
    "TeF2 (K)",
    "NmE (cm^-3)",
    "HmE (km)",
    "TeE (K)",
    "NeE (cm^-3)",
    "B0 (km)",
    "B1",
    "B2",
    "B3",
    "B4",
    "B5",
    "B6",
    "B7",
    "B8",
    "B9",
    "B10",
    "B11",
];

/// Electron density arrives in m^-3 and is reported in cm^-3.
const NE_M3_PER_CM3: f32 = 1.0e6;

/// The decoded profile: one row per height step, 20 parameters per row.
///
/// Column 0 (electron density) is converted from m^-3 to cm^-3 at
/// decode time; every other column passes through untouched. Buffer rows
/// beyond the computed range are dropped here and can never be rendered.
#[derive(Debug, Clone)]
pub struct ResultTable {
    heights: HeightRange,
    rows: Vec<[f32; NUM_PARAMETERS]>,
}

impl ResultTable {
    /// Decode the populated rows of a raw buffer.
    pub fn decode(raw: &RawHeightBuffer, heights: HeightRange) -> Result<Self> {
        heights.validate()?;
        let num_rows = heights.num_rows();
        // validate() already bounds the count; keep the decoded table
        // honest against the buffer capacity regardless.
        if num_rows == 0 || num_rows > PROFILE_CAPACITY {
            return Err(Error::InvalidHeightRange(format!(
                "{} rows outside [1, {}]",
                num_rows, PROFILE_CAPACITY
            )));
        }

        let mut rows = Vec::with_capacity(num_rows);
        for i in 0..num_rows {
            let mut row = [0.0f32; NUM_PARAMETERS];
            for (col, value) in row.iter_mut().enumerate() {
                // in-range rows always resolve; capacity was checked above
                *value = raw.get(i, col).unwrap_or(0.0);
            }
            row[0] /= NE_M3_PER_CM3;
            rows.push(row);
        }

        Ok(Self { heights, rows })
    }

    /// Number of height steps in the table.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Height of row `i` in kilometers: `begin + i * step`.
    pub fn height(&self, i: usize) -> f32 {
        self.heights.height(i)
    }

    /// The height range the table was computed over.
    pub fn heights(&self) -> HeightRange {
        self.heights
    }

    /// One decoded row.
    pub fn row(&self, i: usize) -> Option<&[f32; NUM_PARAMETERS]> {
        self.rows.get(i)
    }

    /// All decoded rows in increasing height order.
    pub fn rows(&self) -> &[[f32; NUM_PARAMETERS]] {
        &self.rows
    }

    /// Value at (row, column), 0-based.
    pub fn value(&self, row: usize, col: usize) -> Option<f32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn filled_buffer(rows: usize) -> RawHeightBuffer {
        let mut raw = RawHeightBuffer::zeroed();
        for row in 0..rows {
            for col in 0..NUM_PARAMETERS {
                raw.set(row, col, (row * 1000 + col) as f32 * 1.0e4);
            }
        }
        raw
    }

    #[test]
    fn test_row_count_matches_range() {
        let heights = HeightRange::new(600.0, 800.0, 10.0).unwrap();
        let table = ResultTable::decode(&filled_buffer(21), heights).unwrap();
        assert_eq!(table.num_rows(), 21);
        assert_eq!(table.rows().len(), heights.num_rows());
    }

    #[test]
    fn test_unit_conversion_column_zero_only() {
        let heights = HeightRange::new(100.0, 140.0, 20.0).unwrap();
        let raw = filled_buffer(3);
        let table = ResultTable::decode(&raw, heights).unwrap();
        for row in 0..3 {
            let raw_ne = raw.get(row, 0).unwrap();
            assert_relative_eq!(table.value(row, 0).unwrap(), raw_ne / 1.0e6);
            for col in 1..NUM_PARAMETERS {
                // bit-identical pass-through
                assert_eq!(table.value(row, col).unwrap(), raw.get(row, col).unwrap());
            }
        }
    }

    #[test]
    fn test_rows_beyond_range_are_dropped() {
        let heights = HeightRange::new(600.0, 650.0, 10.0).unwrap();
        let mut raw = filled_buffer(6);
        raw.set(6, 0, 9.9e30); // stale data past the computed range
        let table = ResultTable::decode(&raw, heights).unwrap();
        assert_eq!(table.num_rows(), 6);
        assert!(table.row(6).is_none());
        assert!(table.value(6, 0).is_none());
    }

    #[test]
    fn test_height_labels() {
        let heights = HeightRange::new(600.0, 800.0, 10.0).unwrap();
        let table = ResultTable::decode(&filled_buffer(21), heights).unwrap();
        for i in 0..table.num_rows() {
            assert_relative_eq!(table.height(i), 600.0 + 10.0 * i as f32);
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        let raw = RawHeightBuffer::zeroed();
        let bad = HeightRange {
            begin: 600.0,
            end: 800.0,
            step: 0.0,
        };
        assert!(matches!(
            ResultTable::decode(&raw, bad),
            Err(Error::InvalidHeightRange(_))
        ));
    }

    #[test]
    fn test_labels_shape() {
        assert_eq!(PARAMETER_LABELS.len(), 20);
        assert_eq!(PARAMETER_LABELS[0], "Ne (cm^-3)");
        assert_eq!(PARAMETER_LABELS[8], "B0 (km)");
        assert_eq!(PARAMETER_LABELS[19], "B11");
    }
}

//! Raw output buffers in the oracle's native layout

/// Profile buffer capacity in height steps.
pub const PROFILE_CAPACITY: usize = iri_sys::OUTF_HEIGHTS;

/// Number of profile parameters per height step.
pub const NUM_PARAMETERS: usize = iri_sys::OUTF_PARAMS;

/// Number of slots in the scalar output vector.
pub const NUM_SCALARS: usize = iri_sys::OARR_LEN;

/// Sentinel the scalar buffer carries into the call; slots the oracle
/// never writes still hold it afterwards.
pub const SCALAR_SENTINEL: f32 = -1.0;

/// The raw height-profile output, `OUTF(20,1000)` on the native side.
///
/// Fortran stores the buffer column-major, so the 20 parameters of one
/// height step are contiguous; [`native_offset`](Self::native_offset) is
/// the one place that mapping lives. Rows the oracle does not compute
/// keep their zero fill.
#[derive(Debug, Clone)]
pub struct RawHeightBuffer {
    data: Vec<f32>,
}

impl RawHeightBuffer {
    /// A zero-filled buffer ready to hand to the oracle.
    pub fn zeroed() -> Self {
        Self {
            data: vec![0.0; iri_sys::OUTF_LEN],
        }
    }

    /// Flat offset of (height step, parameter) in the native layout.
    ///
    /// `OUTF(j, i)` with j the 1-based parameter and i the 1-based height
    /// step sits at `(j-1) + (i-1)*20` in column-major order; in 0-based
    /// terms, parameter `col` of step `row` is at `col + row*20`.
    pub fn native_offset(row: usize, col: usize) -> usize {
        col + row * NUM_PARAMETERS
    }

    /// Value at (height step, parameter), 0-based, bounds-checked.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= PROFILE_CAPACITY || col >= NUM_PARAMETERS {
            return None;
        }
        Some(self.data[Self::native_offset(row, col)])
    }

    /// Write one value, 0-based. Test and mock-oracle helper.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < PROFILE_CAPACITY && col < NUM_PARAMETERS);
        self.data[Self::native_offset(row, col)] = value;
    }

    /// The whole buffer in native order, for the oracle to fill.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// The raw scalar output, `OARR(1:100)` on the native side.
///
/// Pre-filled with [`SCALAR_SENTINEL`]: the oracle reads the sentinel on
/// some slots as "not provided" for inputs that double as outputs.
/// Access here is 0-based; the 1-based native slot names live in
/// [`crate::scalars`].
#[derive(Debug, Clone)]
pub struct RawScalarBuffer {
    data: Vec<f32>,
}

impl RawScalarBuffer {
    /// A sentinel-filled buffer ready to hand to the oracle.
    pub fn sentinel_filled() -> Self {
        Self {
            data: vec![SCALAR_SENTINEL; NUM_SCALARS],
        }
    }

    /// Value at a 0-based index, bounds-checked.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.data.get(index).copied()
    }

    /// Write one value, 0-based. Test and mock-oracle helper.
    pub fn set(&mut self, index: usize, value: f32) {
        assert!(index < NUM_SCALARS);
        self.data[index] = value;
    }

    /// True when no slot moved off the sentinel, i.e. the oracle wrote
    /// nothing back.
    pub fn is_all_sentinel(&self) -> bool {
        self.data.iter().all(|&v| v == SCALAR_SENTINEL)
    }

    /// The whole buffer, for the oracle to fill.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

//! # iri-sys
//!
//! Low-level FFI bindings to the IRI (International Reference Ionosphere)
//! Fortran library.
//!
//! This crate provides raw, unsafe declarations of the Fortran entry points.
//! For a safe, ergonomic API use the `iri` crate instead.
//!
//! ## Safety
//!
//! All functions in this crate are unsafe. Users must ensure:
//! - `readapf107_` and `read_ig_rz_` are called before the first `iri_sub_`
//!   call, and at most once per process
//! - No two threads enter the library concurrently; the Fortran code keeps
//!   mutable module state and is not re-entrant
//! - Output pointers reference buffers of at least [`OUTF_LEN`] and
//!   [`OARR_LEN`] elements, pre-initialized by the caller
//! - All input pointers stay valid for the duration of the call (Fortran
//!   takes every argument by reference)

#![allow(non_snake_case)]

use std::os::raw::{c_float, c_int};

// ============================================================================
// Native Array Shapes
// ============================================================================

/// Number of control switches in the JF vector (Fortran `JF(1:50)`).
pub const JF_LEN: usize = 50;

/// Number of slots in the additional-output vector (Fortran `OARR(1:100)`).
pub const OARR_LEN: usize = 100;

/// Maximum number of height steps in the profile output (Fortran `OUTF(20,1000)`).
pub const OUTF_HEIGHTS: usize = 1000;

/// Number of profile parameters per height step.
pub const OUTF_PARAMS: usize = 20;

/// Total element count of the profile output buffer.
pub const OUTF_LEN: usize = OUTF_HEIGHTS * OUTF_PARAMS;

// ============================================================================
// FFI Function Declarations
// ============================================================================

extern "C" {
    /// Load the Ap/F10.7 index history from `apf107.dat`.
    ///
    /// Must run once per process before the first `iri_sub_` call.
    pub fn readapf107_();

    /// Load the ionospheric/sunspot index history from `ig_rz.dat`.
    ///
    /// Must run once per process before the first `iri_sub_` call.
    pub fn read_ig_rz_();

    /// Compute an ionospheric profile.
    ///
    /// `jf` points at the first of [`JF_LEN`] switch slots (Fortran
    /// `JF(1:50)`, 1 = on, 0 = off). `jmag` selects geographic (0) or
    /// geomagnetic (1) coordinates. `mmdd` is month*100+day, or negative
    /// day-of-year. `dhour` is decimal hour, +25.0 when given in UT.
    /// `outf` receives `OUTF(20,1000)` in Fortran column-major order
    /// (the 20 parameters of one height step are contiguous); `oarr`
    /// receives `OARR(1:100)`.
    pub fn iri_sub_(
        jf: *mut c_int,
        jmag: *mut c_int,
        alati: *mut c_float,
        along: *mut c_float,
        iyyyy: *mut c_int,
        mmdd: *mut c_int,
        dhour: *mut c_float,
        heibeg: *mut c_float,
        heiend: *mut c_float,
        heistp: *mut c_float,
        outf: *mut c_float,
        oarr: *mut c_float,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_shapes() {
        assert_eq!(JF_LEN, 50);
        assert_eq!(OARR_LEN, 100);
        assert_eq!(OUTF_LEN, 20_000);
        assert_eq!(OUTF_LEN, OUTF_HEIGHTS * OUTF_PARAMS);
    }
}

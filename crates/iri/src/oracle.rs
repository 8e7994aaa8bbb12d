//! The oracle boundary - trait over the native computational routine

use crate::error::Result;
use std::os::raw::c_int;

/// Inputs to one oracle call, already marshaled to native conventions:
/// 1-based switch slots flattened to `jf[0..50]`, month*100+day or
/// negative day-of-year, decimal hour with the +25 UT offset applied.
#[derive(Debug, Clone)]
pub struct OracleInputs {
    pub flags: [c_int; iri_sys::JF_LEN],
    pub geomagnetic: c_int,
    pub latitude: f32,
    pub longitude: f32,
    pub year: c_int,
    pub mmdd: c_int,
    pub hour: f32,
    pub height_begin: f32,
    pub height_end: f32,
    pub height_step: f32,
}

/// The external computational routine behind a seam.
///
/// The real model is process-wide Fortran state: it must be primed once
/// (index data files) before the first computation, offers no error
/// channel from `compute`, and is neither re-entrant nor thread-safe.
/// Implementations own whatever serialization that requires; tests swap
/// in deterministic oracles.
pub trait Oracle {
    /// Load auxiliary index data. Runs once per model lifecycle, before
    /// any computation.
    fn prime(&mut self) -> Result<()>;

    /// Run the model. `outf` and `oarr` are caller-initialized buffers of
    /// [`iri_sys::OUTF_LEN`] and [`iri_sys::OARR_LEN`] elements in native
    /// order; slots the oracle does not write keep their fill. No error
    /// channel exists - failures show up as untouched output.
    fn compute(&mut self, inputs: &OracleInputs, outf: &mut [f32], oarr: &mut [f32]);
}

#[cfg(feature = "fortran")]
pub use native::FortranOracle;

#[cfg(feature = "fortran")]
mod native {
    use super::{Oracle, OracleInputs};
    use crate::error::Result;
    use once_cell::sync::Lazy;
    use std::sync::{Mutex, Once};

    /// Serializes every entry into the Fortran library; it keeps mutable
    /// module state and must see at most one concurrent call.
    static NATIVE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    /// The index files load at most once per process.
    static PRIMED: Once = Once::new();

    /// The real Fortran model.
    ///
    /// Construction is cheap; [`Oracle::prime`] reads `apf107.dat` and
    /// `ig_rz.dat` from the library's well-known locations on first use.
    #[derive(Debug, Default)]
    pub struct FortranOracle {
        _private: (),
    }

    impl FortranOracle {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Oracle for FortranOracle {
        fn prime(&mut self) -> Result<()> {
            let _guard = NATIVE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            PRIMED.call_once(|| unsafe {
                iri_sys::readapf107_();
                iri_sys::read_ig_rz_();
            });
            Ok(())
        }

        fn compute(&mut self, inputs: &OracleInputs, outf: &mut [f32], oarr: &mut [f32]) {
            assert!(outf.len() >= iri_sys::OUTF_LEN);
            assert!(oarr.len() >= iri_sys::OARR_LEN);

            let _guard = NATIVE_LOCK.lock().unwrap_or_else(|e| e.into_inner());

            // Fortran takes every argument by reference and the interface
            // is not const-correct; copy the inputs into locals it may
            // scribble on.
            let mut jf = inputs.flags;
            let mut jmag = inputs.geomagnetic;
            let mut lat = inputs.latitude;
            let mut lon = inputs.longitude;
            let mut year = inputs.year;
            let mut mmdd = inputs.mmdd;
            let mut hour = inputs.hour;
            let mut heibeg = inputs.height_begin;
            let mut heiend = inputs.height_end;
            let mut heistp = inputs.height_step;

            unsafe {
                iri_sys::iri_sub_(
                    jf.as_mut_ptr(),
                    &mut jmag,
                    &mut lat,
                    &mut lon,
                    &mut year,
                    &mut mmdd,
                    &mut hour,
                    &mut heibeg,
                    &mut heiend,
                    &mut heistp,
                    outf.as_mut_ptr(),
                    oarr.as_mut_ptr(),
                );
            }
        }
    }
}

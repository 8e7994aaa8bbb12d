//! # iri
//!
//! Safe Rust driver for the IRI (International Reference Ionosphere)
//! model: marshal a validated request onto the fixed-shape arrays the
//! Fortran routine expects, invoke it, and render the computed
//! electron-density profile as a height-indexed CSV report.
//!
//! The physics lives entirely inside the native library and is treated
//! as an opaque oracle; this crate owns the control-switch vector, the
//! input validation, the 1-based/0-based and column-major translations,
//! the unit normalization of the outputs, and the report serialization.
//!
//! ## Example
//!
//! ```rust,ignore
//! use iri::{FortranOracle, IriModel, ModelRequest};
//!
//! // Prime the model (loads apf107.dat and ig_rz.dat) and run a request.
//! let mut model = IriModel::new(FortranOracle::new())?;
//! let request = ModelRequest::from_file("request.json")?;
//! let outcome = iri::run_to_csv(&mut model, &request, "output.csv")?;
//! println!("hmF2 = {} km", outcome.scalars.f2_peak_height);
//! ```

mod buffers;
mod error;
mod flags;
mod invoker;
mod oracle;
mod profile;
mod render;
mod request;
mod scalars;

pub use buffers::{
    RawHeightBuffer, RawScalarBuffer, NUM_PARAMETERS, NUM_SCALARS, PROFILE_CAPACITY,
    SCALAR_SENTINEL,
};
pub use error::{Error, Result};
pub use flags::{FlagVector, Switch, DEFAULT_OFF, NUM_SWITCHES};
pub use invoker::{invoke, IriModel, ModelOutput, OracleStatus};
pub use oracle::{Oracle, OracleInputs};
pub use profile::{ResultTable, PARAMETER_LABELS};
pub use render::{write_csv, write_csv_file};
pub use request::{CoordinateSystem, DateSpec, HeightRange, Hour, ModelRequest};
pub use scalars::{slot, ScalarReport, ScalarSummary};

#[cfg(feature = "fortran")]
pub use oracle::FortranOracle;

use std::path::Path;

/// Everything one full run produces besides the CSV file.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// Named scalar quantities from the run
    pub scalars: ScalarSummary,
    /// Whether the oracle actually wrote results back
    pub status: OracleStatus,
    /// Number of data rows in the report
    pub num_rows: usize,
}

/// Run one request end to end: invoke the model, decode the profile,
/// write the CSV report, and hand back the scalar summary.
///
/// A [`OracleStatus::Degraded`] run still renders whatever the buffers
/// hold; only input validation and sink failures abort.
pub fn run_to_csv<O: Oracle, P: AsRef<Path>>(
    model: &mut IriModel<O>,
    request: &ModelRequest,
    path: P,
) -> Result<ReportOutcome> {
    let output = model.run(request)?;
    let table = ResultTable::decode(&output.profile, request.heights)?;
    write_csv_file(&table, path)?;
    Ok(ReportOutcome {
        scalars: ScalarReport::new(&output.scalars).summary(),
        status: output.status,
        num_rows: table.num_rows(),
    })
}

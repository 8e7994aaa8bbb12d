//! Model invocation - buffer setup, marshaling, and the primed lifecycle

use crate::buffers::{RawHeightBuffer, RawScalarBuffer};
use crate::error::Result;
use crate::oracle::{Oracle, OracleInputs};
use crate::request::ModelRequest;
use serde::{Deserialize, Serialize};

/// Outcome quality of one oracle call.
///
/// The oracle has no structured error channel, so a failed run can only
/// be inferred from its output. A degraded result is still rendered; the
/// status travels with it instead of being raised as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleStatus {
    /// The oracle wrote results back.
    Complete,
    /// The scalar buffer never moved off its sentinel fill; the oracle
    /// most likely computed nothing.
    Degraded,
}

/// Raw output of one invocation.
#[derive(Debug, Clone)]
pub struct ModelOutput {
    pub profile: RawHeightBuffer,
    pub scalars: RawScalarBuffer,
    pub status: OracleStatus,
}

/// A primed model, ready for invocations.
///
/// Wraps an [`Oracle`] whose `prime` already ran, so the one-time startup
/// lifecycle (load index data, then compute) is carried by the type
/// rather than by ambient global state.
///
/// # Example
///
/// ```rust,ignore
/// use iri::{FortranOracle, IriModel, ModelRequest};
///
/// let mut model = IriModel::new(FortranOracle::new())?;
/// let request = ModelRequest::from_file("request.json")?;
/// let output = model.run(&request)?;
/// ```
pub struct IriModel<O: Oracle> {
    oracle: O,
}

impl<O: Oracle> IriModel<O> {
    /// Prime the oracle and wrap it. Priming failures (missing or corrupt
    /// index data files, where detectable) surface as [`crate::Error::Startup`].
    pub fn new(mut oracle: O) -> Result<Self> {
        oracle.prime()?;
        Ok(Self { oracle })
    }

    /// Validate the request, invoke the oracle, and hand back the raw
    /// buffers plus the inferred [`OracleStatus`].
    pub fn run(&mut self, request: &ModelRequest) -> Result<ModelOutput> {
        invoke(&mut self.oracle, request)
    }
}

#[cfg(feature = "fortran")]
impl IriModel<crate::oracle::FortranOracle> {
    /// A primed model over the real Fortran library.
    pub fn native() -> Result<Self> {
        Self::new(crate::oracle::FortranOracle::new())
    }
}

/// One synchronous invocation against an already-primed oracle.
///
/// Allocates the zero-filled profile buffer and sentinel-filled scalar
/// buffer, marshals the request onto native conventions, and returns the
/// buffers otherwise unmodified. Request validation fails fast here,
/// before the oracle is touched.
pub fn invoke<O: Oracle>(oracle: &mut O, request: &ModelRequest) -> Result<ModelOutput> {
    request.validate()?;

    let inputs = OracleInputs {
        flags: request.flags.to_native(),
        geomagnetic: request.coordinates.native_selector(),
        latitude: request.latitude,
        longitude: request.longitude,
        year: request.year,
        mmdd: request.date.native_mmdd(),
        hour: request.hour.native_hour(),
        height_begin: request.heights.begin,
        height_end: request.heights.end,
        height_step: request.heights.step,
    };

    log::debug!(
        "invoking model: jmag={} lat={} lon={} year={} mmdd={} hour={} heights {}..{} by {}",
        inputs.geomagnetic,
        inputs.latitude,
        inputs.longitude,
        inputs.year,
        inputs.mmdd,
        inputs.hour,
        inputs.height_begin,
        inputs.height_end,
        inputs.height_step,
    );

    let mut profile = RawHeightBuffer::zeroed();
    let mut scalars = RawScalarBuffer::sentinel_filled();
    oracle.compute(&inputs, profile.as_mut_slice(), scalars.as_mut_slice());

    let status = if scalars.is_all_sentinel() {
        log::warn!("scalar output still at sentinel after the call; result is degraded");
        OracleStatus::Degraded
    } else {
        OracleStatus::Complete
    };

    Ok(ModelOutput {
        profile,
        scalars,
        status,
    })
}

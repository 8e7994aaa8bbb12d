//! Named view over the scalar output vector

use crate::buffers::RawScalarBuffer;
use serde::{Deserialize, Serialize};

/// Native 1-based slots of the named scalar outputs (`OARR(slot)`).
///
/// The offset-by-one translation to the 0-based buffer happens in
/// [`ScalarReport`] and nowhere else.
pub mod slot {
    /// Peak F2-layer electron density NmF2, m^-3
    pub const NMF2: usize = 1;
    /// F2-layer peak height HmF2, km
    pub const HMF2: usize = 2;
    /// Peak E-layer electron density NmE, m^-3
    pub const NME: usize = 5;
    /// E-layer peak height HmE, km
    pub const HME: usize = 6;
    /// B0 thickness parameter, km
    pub const B0: usize = 10;
    /// 12-month running mean sunspot number Rz12
    pub const RZ12: usize = 33;
    /// Covington index (adjusted daily F10.7)
    pub const COVINGTON: usize = 34;
    /// B1 bottomside shape parameter
    pub const B1: usize = 35;
    /// 12-month running mean ionospheric index IG12
    pub const IG12: usize = 39;
    /// Daily F10.7 solar flux
    pub const F107_DAILY: usize = 41;
    /// 81-day running mean F10.7 solar flux
    pub const F107_81DAY: usize = 46;
}

/// Read-only projection of the scalar output buffer.
///
/// Values stay in the oracle's native units; no conversion is applied
/// here (unlike the profile's electron-density column).
#[derive(Debug, Clone, Copy)]
pub struct ScalarReport<'a> {
    raw: &'a RawScalarBuffer,
}

impl<'a> ScalarReport<'a> {
    pub fn new(raw: &'a RawScalarBuffer) -> Self {
        Self { raw }
    }

    /// Value at a native 1-based slot.
    fn at(&self, slot: usize) -> f32 {
        debug_assert!((1..=crate::buffers::NUM_SCALARS).contains(&slot));
        self.raw.get(slot - 1).unwrap_or(crate::buffers::SCALAR_SENTINEL)
    }

    /// Peak F2-layer electron density NmF2, m^-3
    pub fn peak_f2_density(&self) -> f32 {
        self.at(slot::NMF2)
    }

    /// F2-layer peak height HmF2, km
    pub fn f2_peak_height(&self) -> f32 {
        self.at(slot::HMF2)
    }

    /// Peak E-layer electron density NmE, m^-3
    pub fn peak_e_density(&self) -> f32 {
        self.at(slot::NME)
    }

    /// E-layer peak height HmE, km
    pub fn e_peak_height(&self) -> f32 {
        self.at(slot::HME)
    }

    /// B0 thickness parameter, km
    pub fn b0_thickness(&self) -> f32 {
        self.at(slot::B0)
    }

    /// 12-month running mean sunspot number Rz12
    pub fn sunspot_number(&self) -> f32 {
        self.at(slot::RZ12)
    }

    /// Covington index
    pub fn covington_index(&self) -> f32 {
        self.at(slot::COVINGTON)
    }

    /// B1 bottomside shape parameter
    pub fn b1_shape(&self) -> f32 {
        self.at(slot::B1)
    }

    /// 12-month running mean ionospheric index IG12
    pub fn ionospheric_index(&self) -> f32 {
        self.at(slot::IG12)
    }

    /// Daily F10.7 solar flux
    pub fn f107_daily(&self) -> f32 {
        self.at(slot::F107_DAILY)
    }

    /// 81-day running mean F10.7 solar flux
    pub fn f107_81day(&self) -> f32 {
        self.at(slot::F107_81DAY)
    }

    /// Owned summary of the named quantities, e.g. for JSON dumping.
    pub fn summary(&self) -> ScalarSummary {
        ScalarSummary {
            peak_f2_density: self.peak_f2_density(),
            f2_peak_height: self.f2_peak_height(),
            peak_e_density: self.peak_e_density(),
            e_peak_height: self.e_peak_height(),
            b0_thickness: self.b0_thickness(),
            sunspot_number: self.sunspot_number(),
            covington_index: self.covington_index(),
            b1_shape: self.b1_shape(),
            ionospheric_index: self.ionospheric_index(),
            f107_daily: self.f107_daily(),
            f107_81day: self.f107_81day(),
        }
    }
}

/// The named scalar quantities as an owned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarSummary {
    pub peak_f2_density: f32,
    pub f2_peak_height: f32,
    pub peak_e_density: f32,
    pub e_peak_height: f32,
    pub b0_thickness: f32,
    pub sunspot_number: f32,
    pub covington_index: f32,
    pub b1_shape: f32,
    pub ionospheric_index: f32,
    pub f107_daily: f32,
    pub f107_81day: f32,
}

//! Model control switches (the native `JF(1:50)` vector)

use crate::error::{Error, Result};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::os::raw::c_int;

/// Number of control switches understood by the model.
pub const NUM_SWITCHES: usize = iri_sys::JF_LEN;

/// Named model switches and their native 1-based slots.
///
/// The model documents fifty switches; the ones with well-known meanings
/// are named here, the rest remain reachable through
/// [`FlagVector::set`] / [`FlagVector::get`] by slot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Switch {
    /// Electron density computed
    NeComputed,
    /// Electron and ion temperatures computed
    Temperatures,
    /// Ion composition computed
    IonComposition,
    /// B0/B1 from the legacy Gulyaeva table when on, ABT-2009 when off
    LegacyBottomside,
    /// CCIR foF2 maps when on, URSI when off
    CcirFoF2,
    /// DS-95/DY-85 ion composition when on, RBV-10/TBT-15 when off
    LegacyIonComposition,
    /// Ion drift computed
    IonDrift,
    /// Bil-1985 topside Te when on, TBT-2012 when off
    LegacyTopsideTe,
    /// foF2 storm model
    FoF2Storm,
    /// Spread-F probability computed
    SpreadF,
    /// IRI-95 F1 occurrence probability when on, Scotto-97 when off
    LegacyF1Probability,
    /// IRI-2001 topside Te/Ne correlation when on, corrected variant when off
    LegacyTopsideCorrelation,
    /// Auroral boundary model
    AuroralBoundary,
    /// Console messages from the model
    Messages,
    /// foE storm model
    FoEStorm,
    /// hmF2 from M3000F2 when on, AMTB-2013 when off
    HmF2M3000,
    /// hmF2 from the Shubin-COSMIC model when on
    HmF2Shubin,
    /// Corrected geomagnetic (CGM) coordinates
    CgmCoordinates,
}

impl Switch {
    /// Native 1-based slot of this switch in `JF(1:50)`.
    pub fn slot(self) -> usize {
        match self {
            Switch::NeComputed => 1,
            Switch::Temperatures => 2,
            Switch::IonComposition => 3,
            Switch::LegacyBottomside => 4,
            Switch::CcirFoF2 => 5,
            Switch::LegacyIonComposition => 6,
            Switch::IonDrift => 21,
            Switch::LegacyTopsideTe => 23,
            Switch::FoF2Storm => 26,
            Switch::SpreadF => 28,
            Switch::LegacyF1Probability => 29,
            Switch::LegacyTopsideCorrelation => 30,
            Switch::AuroralBoundary => 33,
            Switch::Messages => 34,
            Switch::FoEStorm => 35,
            Switch::HmF2M3000 => 39,
            Switch::HmF2Shubin => 40,
            Switch::CgmCoordinates => 47,
        }
    }
}

/// Switches the published baseline profile forces off.
pub const DEFAULT_OFF: [Switch; 13] = [
    Switch::LegacyBottomside,
    Switch::CcirFoF2,
    Switch::LegacyIonComposition,
    Switch::IonDrift,
    Switch::LegacyTopsideTe,
    Switch::SpreadF,
    Switch::LegacyF1Probability,
    Switch::LegacyTopsideCorrelation,
    Switch::AuroralBoundary,
    Switch::FoEStorm,
    Switch::HmF2M3000,
    Switch::HmF2Shubin,
    Switch::CgmCoordinates,
];

/// The fifty model control switches.
///
/// Slots are 1-based to match the native contract; slot 0 does not exist
/// and is rejected rather than silently remapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagVector {
    switches: [bool; NUM_SWITCHES],
}

impl FlagVector {
    /// All fifty switches on.
    pub fn all_on() -> Self {
        Self {
            switches: [true; NUM_SWITCHES],
        }
    }

    /// The published baseline: everything on except the thirteen
    /// [`DEFAULT_OFF`] overrides.
    pub fn default_profile() -> Self {
        let mut flags = Self::all_on();
        for switch in DEFAULT_OFF {
            flags.disable(switch);
        }
        flags
    }

    /// Read the switch at a native 1-based slot.
    pub fn get(&self, slot: usize) -> Result<bool> {
        if slot == 0 || slot > NUM_SWITCHES {
            return Err(Error::InvalidFlagIndex(slot));
        }
        Ok(self.switches[slot - 1])
    }

    /// Set the switch at a native 1-based slot.
    pub fn set(&mut self, slot: usize, value: bool) -> Result<()> {
        if slot == 0 || slot > NUM_SWITCHES {
            return Err(Error::InvalidFlagIndex(slot));
        }
        self.switches[slot - 1] = value;
        Ok(())
    }

    /// Read a named switch.
    pub fn is_enabled(&self, switch: Switch) -> bool {
        self.switches[switch.slot() - 1]
    }

    /// Turn a named switch on.
    pub fn enable(&mut self, switch: Switch) {
        self.switches[switch.slot() - 1] = true;
    }

    /// Turn a named switch off.
    pub fn disable(&mut self, switch: Switch) {
        self.switches[switch.slot() - 1] = false;
    }

    /// Number of switches currently on.
    pub fn enabled_count(&self) -> usize {
        self.switches.iter().filter(|&&on| on).count()
    }

    /// Marshal onto the native integer vector (1 = on, 0 = off), slot i
    /// landing at element i-1 exactly as `JF(1:50)` expects.
    pub(crate) fn to_native(&self) -> [c_int; NUM_SWITCHES] {
        let mut jf: [c_int; NUM_SWITCHES] = [0; NUM_SWITCHES];
        for (native, &on) in jf.iter_mut().zip(self.switches.iter()) {
            *native = c_int::from(on);
        }
        jf
    }
}

impl Default for FlagVector {
    fn default() -> Self {
        Self::default_profile()
    }
}

// serde does not derive for [T; 50]; encode as a 50-element sequence.
impl Serialize for FlagVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(NUM_SWITCHES))?;
        for on in &self.switches {
            seq.serialize_element(on)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for FlagVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FlagVisitor;

        impl<'de> Visitor<'de> for FlagVisitor {
            type Value = FlagVector;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a sequence of {} booleans", NUM_SWITCHES)
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<FlagVector, A::Error> {
                let mut switches = [false; NUM_SWITCHES];
                for (i, slot) in switches.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<bool>()?.is_some() {
                    return Err(de::Error::invalid_length(NUM_SWITCHES + 1, &self));
                }
                Ok(FlagVector { switches })
            }
        }

        deserializer.deserialize_seq(FlagVisitor)
    }
}

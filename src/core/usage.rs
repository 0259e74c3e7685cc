use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::time::Hours;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageCategory {
    /// Households: a short evening peak and a long low base load.
    Domestic,

    /// Workshops and small plants: a longer working-hours peak.
    Industrial,
}

impl Display for UsageCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domestic => write!(f, "Domestic"),
            Self::Industrial => write!(f, "Industrial"),
        }
    }
}

/// Split of the day into the peak and off-peak windows.
///
/// The windows always cover the whole day.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DutyCycle {
    pub peak: Hours,
    pub off_peak: Hours,
}

impl UsageCategory {
    pub const fn duty_cycle(self) -> DutyCycle {
        match self {
            Self::Domestic => DutyCycle { peak: Hours(4.0), off_peak: Hours(20.0) },
            Self::Industrial => DutyCycle { peak: Hours(6.0), off_peak: Hours(18.0) },
        }
    }
}

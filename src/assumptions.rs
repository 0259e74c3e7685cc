//! Hardware ratings and unit prices behind the estimate.
//!
//! The defaults describe a typical small installation; a TOML file may override any of them.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{
        currency::{Cost, KilowattPrice},
        electric::AmpereHours,
        power::Watts,
    },
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Installation and contingency buffer as a share of the hardware cost.
    pub miscellaneous_rate: f64,

    pub panel: PanelAssumptions,
    pub inverter: InverterAssumptions,
    pub battery: BatteryAssumptions,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            miscellaneous_rate: 0.15,
            panel: PanelAssumptions::default(),
            inverter: InverterAssumptions::default(),
            battery: BatteryAssumptions::default(),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelAssumptions {
    #[serde(rename = "rating_watts")]
    pub rating: Watts,

    pub unit_cost: Cost,

    /// Mounting hardware per panel.
    pub structure_cost: Cost,
}

impl Default for PanelAssumptions {
    fn default() -> Self {
        Self { rating: Watts(400.0), unit_cost: Cost(150.0), structure_cost: Cost(50.0) }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InverterAssumptions {
    /// Inverter rating relative to the peak load.
    pub headroom: f64,

    #[serde(rename = "cost_per_kilowatt")]
    pub price: KilowattPrice,
}

impl Default for InverterAssumptions {
    fn default() -> Self {
        Self { headroom: 1.5, price: KilowattPrice(300.0) }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryAssumptions {
    #[serde(rename = "unit_capacity_ampere_hours")]
    pub unit_capacity: AmpereHours,

    pub unit_cost: Cost,
}

impl Default for BatteryAssumptions {
    fn default() -> Self {
        Self { unit_capacity: AmpereHours(200.0), unit_cost: Cost(250.0) }
    }
}

impl Assumptions {
    /// Read the assumptions from the TOML file, falling back to the defaults for missing fields.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read the assumptions from `{}`", path.display()))?;
        let assumptions: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse the assumptions in `{}`", path.display()))?;
        assumptions
            .validate()
            .with_context(|| format!("invalid assumptions in `{}`", path.display()))?;
        debug!(?assumptions, "loaded");
        Ok(assumptions)
    }

    /// Reject ratings and prices that would make the estimate meaningless.
    pub fn validate(&self) -> Result {
        ensure!(
            self.panel.rating.is_finite() && self.panel.rating > Watts::ZERO,
            "panel rating must be positive, got {}",
            self.panel.rating,
        );
        ensure!(
            self.battery.unit_capacity.is_finite() && self.battery.unit_capacity > AmpereHours::ZERO,
            "battery unit capacity must be positive, got {}",
            self.battery.unit_capacity,
        );
        ensure!(
            self.inverter.headroom.is_finite() && self.inverter.headroom > 0.0,
            "inverter headroom must be positive, got {}",
            self.inverter.headroom,
        );
        ensure!(
            self.inverter.price.is_finite() && self.inverter.price >= KilowattPrice::ZERO,
            "inverter price must not be negative, got {}",
            self.inverter.price,
        );
        for (name, cost) in [
            ("panel unit cost", self.panel.unit_cost),
            ("panel structure cost", self.panel.structure_cost),
            ("battery unit cost", self.battery.unit_cost),
        ] {
            ensure!(cost.is_finite() && cost >= Cost::ZERO, "{name} must not be negative, got {cost}");
        }
        ensure!(
            self.miscellaneous_rate.is_finite() && self.miscellaneous_rate >= 0.0,
            "miscellaneous rate must not be negative, got {}",
            self.miscellaneous_rate,
        );
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

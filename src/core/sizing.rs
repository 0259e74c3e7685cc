use bon::Builder;
use serde::Serialize;

use crate::{
    assumptions::Assumptions,
    core::usage::UsageCategory,
    quantity::{
        currency::Cost,
        electric::{AmpereHours, Volts},
        energy::{KilowattHours, WattHours},
        power::{Kilowatts, Watts},
        time::Hours,
    },
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Builder, Serialize)]
pub struct SizingInput {
    /// Power drawn during the peak window.
    pub peak_load: Kilowatts,

    /// Power drawn during the rest of the day.
    pub off_peak_load: Kilowatts,

    /// Equivalent full-intensity sunlight hours per day, must be positive.
    pub sun_hours: Hours,

    pub usage: UsageCategory,

    #[builder(default = SizingInput::DEFAULT_BATTERY_VOLTAGE)]
    pub battery_voltage: Volts,
}

impl SizingInput {
    pub const DEFAULT_BATTERY_VOLTAGE: Volts = Volts(48.0);
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SizingResult {
    /// Energy consumed per day, which the array is sized to generate.
    pub daily_energy: KilowattHours,

    /// Array capacity needed to generate the daily energy within the sun hours.
    pub required_capacity: Kilowatts,

    pub panel_count: u32,
    pub inverter_size: Kilowatts,

    /// Energy the batteries must hold to cover the off-peak window.
    pub battery_backup_energy: KilowattHours,

    pub battery_capacity: AmpereHours,
    pub battery_count: u32,
    pub costs: CostBreakdown,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub panels: Cost,
    pub inverter: Cost,
    pub batteries: Cost,
    pub structure: Cost,
    pub miscellaneous: Cost,
    pub total: Cost,
}

impl CostBreakdown {
    fn new(
        panels: Cost,
        inverter: Cost,
        batteries: Cost,
        structure: Cost,
        miscellaneous_rate: f64,
    ) -> Self {
        let hardware = panels + inverter + batteries + structure;
        let miscellaneous = hardware * miscellaneous_rate;
        Self { panels, inverter, batteries, structure, miscellaneous, total: hardware + miscellaneous }
    }
}

/// Size and cost the installation.
///
/// The array covers the whole daily consumption, while the batteries only cover the off-peak
/// window. Panel and battery counts are rounded down, so a tiny load may need none.
pub fn estimate(input: &SizingInput, assumptions: &Assumptions) -> SizingResult {
    let duty_cycle = input.usage.duty_cycle();

    let daily_energy =
        input.peak_load * duty_cycle.peak + input.off_peak_load * duty_cycle.off_peak;
    let required_capacity: Kilowatts = daily_energy / input.sun_hours;
    let panel_count = whole_units(Watts::from(required_capacity) / assumptions.panel.rating);

    let inverter_size = input.peak_load * assumptions.inverter.headroom;

    let battery_backup_energy = input.off_peak_load * duty_cycle.off_peak;
    let battery_capacity = WattHours::from(battery_backup_energy) / input.battery_voltage;
    let battery_count = whole_units(battery_capacity / assumptions.battery.unit_capacity);

    let costs = CostBreakdown::new(
        assumptions.panel.unit_cost * f64::from(panel_count),
        inverter_size * assumptions.inverter.price,
        assumptions.battery.unit_cost * f64::from(battery_count),
        assumptions.panel.structure_cost * f64::from(panel_count),
        assumptions.miscellaneous_rate,
    );

    SizingResult {
        daily_energy,
        required_capacity,
        panel_count,
        inverter_size,
        battery_backup_energy,
        battery_capacity,
        battery_count,
        costs,
    }
}

/// Whole units that fit into the ratio, saturating at zero.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_units(ratio: f64) -> u32 {
    ratio.floor() as u32
}

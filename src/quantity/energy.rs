use crate::quantity::{
    currency::{Cost, KilowattHourRate},
    electric::{AmpereHours, Volts},
    power::Kilowatts,
    time::Hours,
};

quantity!(WattHours, via: f64, suffix: "Wh", precision: 0);
quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 2);

impl From<KilowattHours> for WattHours {
    fn from(kilowatt_hours: KilowattHours) -> Self {
        Self(kilowatt_hours.0 * 1000.0)
    }
}

impl From<WattHours> for KilowattHours {
    fn from(watt_hours: WattHours) -> Self {
        Self(watt_hours.0 / 1000.0)
    }
}

implement_div!(KilowattHours, Hours, Kilowatts);
implement_mul!(KilowattHours, KilowattHourRate, Cost);

// Charge needed to store the energy at the given system voltage.
implement_div!(WattHours, Volts, AmpereHours);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn energy_over_sun_hours_is_power() {
        assert_abs_diff_eq!((KilowattHours(28.0) / Hours(5.0)).0, 5.6);
    }

    #[test]
    fn energy_at_tariff_is_cost() {
        assert_abs_diff_eq!((KilowattHours(28.0) * KilowattHourRate(0.15)).0, 4.2, epsilon = 1e-12);
    }

    #[test]
    fn energy_at_voltage_is_charge() {
        let charge = WattHours::from(KilowattHours(20.0)) / Volts(48.0);
        assert_abs_diff_eq!(charge.0, 416.666_666, epsilon = 1e-6);
    }
}

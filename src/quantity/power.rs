use crate::quantity::{
    currency::{Cost, KilowattPrice},
    energy::KilowattHours,
    time::Hours,
};

quantity!(Watts, via: f64, suffix: "W", precision: 0);
quantity!(Kilowatts, via: f64, suffix: "kW", precision: 2);

impl From<Kilowatts> for Watts {
    fn from(kilowatts: Kilowatts) -> Self {
        Self(kilowatts.0 * 1000.0)
    }
}

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Self(watts.0 / 1000.0)
    }
}

implement_mul!(Kilowatts, Hours, KilowattHours);
implement_mul!(Kilowatts, KilowattPrice, Cost);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn kilowatts_to_watts() {
        assert_abs_diff_eq!(Watts::from(Kilowatts(5.6)).0, 5600.0);
    }

    #[test]
    fn power_over_time_is_energy() {
        assert_abs_diff_eq!((Kilowatts(2.0) * Hours(4.0)).0, 8.0);
        assert_abs_diff_eq!((Hours(20.0) * Kilowatts(1.0)).0, 20.0);
    }
}

//! Monetary quantities.
//!
//! There is no currency handling: every amount is in the same unspecified unit as the tariff.

quantity!(Cost, via: f64, suffix: "$", precision: 2);

quantity!(
    /// Price per kilowatt-hour, the electricity tariff.
    KilowattHourRate, via: f64, suffix: "$/kWh", precision: 3
);

quantity!(
    /// Price per kilowatt of rated power.
    KilowattPrice, via: f64, suffix: "$/kW", precision: 2
);

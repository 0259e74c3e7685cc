quantity!(Volts, via: f64, suffix: "V", precision: 0);
quantity!(
    /// Battery charge capacity.
    AmpereHours, via: f64, suffix: "Ah", precision: 0
);

quantity!(Hours, via: f64, suffix: "h", precision: 1);
quantity!(Years, via: f64, suffix: "years", precision: 1);

pub const DAYS_PER_YEAR: f64 = 365.0;

impl Hours {
    pub const ONE_DAY: Self = Self(24.0);
}

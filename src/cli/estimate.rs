use clap::Parser;
use solstice::{
    core::{sizing::SizingInput, usage::UsageCategory},
    prelude::*,
    quantity::{
        currency::KilowattHourRate,
        electric::Volts,
        power::Kilowatts,
        time::{Hours, Years},
    },
    report::Report,
};

use crate::cli::AssumptionsArgs;

#[derive(Parser)]
pub struct EstimateArgs {
    /// Usage category, which decides the peak and off-peak windows.
    #[clap(long, env = "USAGE", default_value = "domestic", ignore_case = true)]
    pub usage: UsageCategory,

    /// Load during the peak hours in kilowatts.
    #[clap(long = "peak-load-kilowatts", env = "PEAK_LOAD_KILOWATTS", default_value = "2.0")]
    pub peak_load: Kilowatts,

    /// Load during the off-peak hours in kilowatts.
    #[clap(
        long = "off-peak-load-kilowatts",
        env = "OFF_PEAK_LOAD_KILOWATTS",
        default_value = "1.0"
    )]
    pub off_peak_load: Kilowatts,

    /// Average equivalent full-sun hours per day, normally 3 to 8 in half-hour steps.
    #[clap(long, env = "SUN_HOURS", default_value = "5.0")]
    pub sun_hours: Hours,

    /// Electricity tariff per kilowatt-hour.
    #[clap(long = "tariff-per-kwh", env = "TARIFF_PER_KWH", default_value = "0.15")]
    pub tariff: KilowattHourRate,

    /// Battery bank voltage.
    #[clap(long, env = "BATTERY_VOLTAGE", default_value = "48")]
    pub battery_voltage: Volts,

    /// Expected system lifespan in years.
    #[clap(long = "lifespan-years", env = "LIFESPAN_YEARS", default_value = "25")]
    pub lifespan: Years,

    /// Report output format.
    #[clap(long, env = "FORMAT", default_value = "table")]
    pub format: OutputFormat,

    #[clap(flatten)]
    pub assumptions: AssumptionsArgs,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// The full report as JSON.
    Json,
}

impl EstimateArgs {
    const MIN_LOAD: Kilowatts = Kilowatts(0.1);
    const MIN_TARIFF: KilowattHourRate = KilowattHourRate(0.01);
    const RECOMMENDED_SUN_HOURS: (Hours, Hours) = (Hours(3.0), Hours(8.0));

    /// Check the inputs against the bounds the estimate is meaningful for.
    pub fn validate(&self) -> Result {
        ensure!(
            self.peak_load.is_finite() && self.peak_load >= Self::MIN_LOAD,
            "peak load must be at least {}, got {}",
            Self::MIN_LOAD,
            self.peak_load,
        );
        ensure!(
            self.off_peak_load.is_finite() && self.off_peak_load >= Self::MIN_LOAD,
            "off-peak load must be at least {}, got {}",
            Self::MIN_LOAD,
            self.off_peak_load,
        );
        ensure!(
            self.sun_hours.is_finite() && self.sun_hours > Hours::ZERO,
            "sun hours must be positive, got {}",
            self.sun_hours,
        );
        ensure!(
            self.tariff.is_finite() && self.tariff >= Self::MIN_TARIFF,
            "tariff must be at least {}, got {}",
            Self::MIN_TARIFF,
            self.tariff,
        );
        ensure!(
            self.battery_voltage.is_finite() && self.battery_voltage > Volts::ZERO,
            "battery voltage must be positive, got {}",
            self.battery_voltage,
        );
        ensure!(
            self.lifespan.is_finite() && self.lifespan >= Years(1.0),
            "lifespan must be at least one year, got {}",
            self.lifespan,
        );

        let (min_sun_hours, max_sun_hours) = Self::RECOMMENDED_SUN_HOURS;
        if self.sun_hours < min_sun_hours
            || self.sun_hours > max_sun_hours
            || (self.sun_hours.0 * 2.0).fract() != 0.0
        {
            warn!(
                sun_hours = %self.sun_hours,
                "sun hours are usually between {min_sun_hours} and {max_sun_hours} in half-hour steps",
            );
        }
        Ok(())
    }

    pub fn sizing_input(&self) -> SizingInput {
        SizingInput::builder()
            .peak_load(self.peak_load)
            .off_peak_load(self.off_peak_load)
            .sun_hours(self.sun_hours)
            .usage(self.usage)
            .battery_voltage(self.battery_voltage)
            .build()
    }
}

#[instrument(skip_all)]
pub fn estimate(args: &EstimateArgs) -> Result {
    args.validate()?;
    let assumptions = args.assumptions.load()?;
    let input = args.sizing_input();
    info!(
        usage = %input.usage,
        peak_load = %input.peak_load,
        off_peak_load = %input.off_peak_load,
        sun_hours = %input.sun_hours,
        tariff = %args.tariff,
        "estimating…",
    );

    let report = Report::builder()
        .input(input)
        .tariff(args.tariff)
        .lifespan(args.lifespan)
        .assumptions(assumptions)
        .build();
    info!(
        total_cost = %report.sizing.costs.total,
        payback = %report.roi.payback,
        "estimated",
    );

    match args.format {
        OutputFormat::Table => println!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command};

    fn parse(args: &[&str]) -> EstimateArgs {
        let mut argv = vec!["solstice", "estimate"];
        argv.extend_from_slice(args);
        match Args::try_parse_from(argv).unwrap().command {
            Command::Estimate(args) => *args,
            Command::Assumptions(_) => unreachable!(),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let args = parse(&[]);
        args.validate().unwrap();

        let input = args.sizing_input();
        assert_eq!(input.usage, UsageCategory::Domestic);
        assert_eq!(input.peak_load, Kilowatts(2.0));
        assert_eq!(input.off_peak_load, Kilowatts(1.0));
        assert_eq!(input.sun_hours, Hours(5.0));
        assert_eq!(input.battery_voltage, Volts(48.0));
        assert_eq!(args.tariff, KilowattHourRate(0.15));
        assert_eq!(args.lifespan, Years(25.0));
        assert!(args.assumptions.path.is_none());
    }

    #[test]
    fn usage_is_case_insensitive() {
        assert_eq!(parse(&["--usage", "Industrial"]).usage, UsageCategory::Industrial);
    }

    #[test]
    fn rejects_small_load() {
        let error = parse(&["--peak-load-kilowatts", "0.05"]).validate().unwrap_err();
        assert!(error.to_string().contains("peak load"));
        assert!(parse(&["--off-peak-load-kilowatts", "0"]).validate().is_err());
    }

    #[test]
    fn rejects_non_positive_sun_hours() {
        assert!(parse(&["--sun-hours", "0"]).validate().is_err());
        assert!(parse(&["--sun-hours=-1"]).validate().is_err());
        assert!(parse(&["--sun-hours", "NaN"]).validate().is_err());
    }

    #[test]
    fn accepts_unusual_sun_hours() {
        parse(&["--sun-hours", "9.25"]).validate().unwrap();
    }

    #[test]
    fn rejects_tiny_tariff() {
        assert!(parse(&["--tariff-per-kwh", "0.001"]).validate().is_err());
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(parse(&["--peak-load-kilowatts", "inf"]).validate().is_err());
        assert!(parse(&["--off-peak-load-kilowatts", "NaN"]).validate().is_err());
        assert!(parse(&["--tariff-per-kwh", "inf"]).validate().is_err());
        assert!(parse(&["--sun-hours", "inf"]).validate().is_err());
    }

    #[test]
    fn rejects_non_positive_battery_voltage() {
        let error = parse(&["--battery-voltage", "0"]).validate().unwrap_err();
        assert!(error.to_string().contains("battery voltage"));
        assert!(parse(&["--battery-voltage=-24"]).validate().is_err());
    }

    #[test]
    fn rejects_short_lifespan() {
        assert!(parse(&["--lifespan-years", "0.5"]).validate().is_err());
    }
}

use std::fmt::{Display, Formatter};

use bon::bon;
use serde::Serialize;

use crate::{
    assumptions::Assumptions,
    core::{
        roi::{RoiInput, RoiResult, roi},
        sizing::{SizingInput, SizingResult, estimate},
    },
    quantity::{
        currency::{Cost, KilowattHourRate},
        time::Years,
    },
    tables::{build_cost_table, build_design_table, build_roi_table},
};

/// Sizing and payback of one installation, as shown to the user.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub input: SizingInput,
    pub tariff: KilowattHourRate,
    pub lifespan: Years,
    pub assumptions: Assumptions,
    pub sizing: SizingResult,

    /// The daily energy valued at the tariff: every generated kilowatt-hour offsets a bought one.
    pub daily_savings: Cost,

    pub roi: RoiResult,
}

#[bon]
impl Report {
    #[builder]
    pub fn new(
        input: SizingInput,
        tariff: KilowattHourRate,
        #[builder(default = RoiInput::DEFAULT_LIFESPAN)] lifespan: Years,
        #[builder(default)] assumptions: Assumptions,
    ) -> Self {
        let sizing = estimate(&input, &assumptions);
        let daily_savings = sizing.daily_energy * tariff;
        let roi = roi(&RoiInput::builder()
            .total_cost(sizing.costs.total)
            .daily_savings(daily_savings)
            .lifespan(lifespan)
            .build());
        Self { input, tariff, lifespan, assumptions, sizing, daily_savings, roi }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", build_design_table(self))?;
        writeln!(f, "{}", build_cost_table(self))?;
        write!(f, "{}", build_roi_table(self))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::usage::UsageCategory,
        quantity::{power::Kilowatts, time::Hours},
    };

    fn input() -> SizingInput {
        SizingInput::builder()
            .peak_load(Kilowatts(2.0))
            .off_peak_load(Kilowatts(1.0))
            .sun_hours(Hours(5.0))
            .usage(UsageCategory::Domestic)
            .build()
    }

    #[test]
    fn savings_follow_the_tariff() {
        let report = Report::builder().input(input()).tariff(KilowattHourRate(0.15)).build();

        assert_eq!(report.lifespan, Years(25.0));
        assert_abs_diff_eq!(report.daily_savings.0, 4.2, epsilon = 1e-9);
        assert_abs_diff_eq!(report.roi.annual_savings.0, 1533.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.roi.payback.0, 4830.0 / 1533.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.roi.total_roi.0, 33495.0, epsilon = 1e-6);
    }

    #[test]
    fn free_electricity_never_pays_back() {
        let report = Report::builder().input(input()).tariff(KilowattHourRate::ZERO).build();
        assert!(report.roi.payback.0.is_infinite());

        let json = serde_json::to_value(report).unwrap();
        assert!(json["roi"]["payback"].is_null());
        assert_eq!(json["input"]["usage"], "domestic");
        assert_eq!(json["sizing"]["panel_count"], 14);
    }

    #[test]
    fn tables_mention_the_outcome() {
        let report = Report::builder()
            .input(input())
            .tariff(KilowattHourRate(0.15))
            .lifespan(Years(20.0))
            .build();
        let rendered = report.to_string();
        assert!(rendered.contains("Panels (400 W)"));
        assert!(rendered.contains("4830.00 $"));
        assert!(rendered.contains("ROI over 20.0 years"));
    }

    #[test]
    fn never_is_rendered_for_infinite_payback() {
        let report = Report::builder().input(input()).tariff(KilowattHourRate::ZERO).build();
        assert!(report.to_string().contains("never"));
    }
}

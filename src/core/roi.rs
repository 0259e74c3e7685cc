use bon::Builder;
use serde::Serialize;

use crate::quantity::{
    currency::Cost,
    time::{DAYS_PER_YEAR, Years},
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Builder, Serialize)]
pub struct RoiInput {
    /// Upfront installation cost.
    pub total_cost: Cost,

    /// Electricity bill reduction per day.
    pub daily_savings: Cost,

    #[builder(default = RoiInput::DEFAULT_LIFESPAN)]
    pub lifespan: Years,
}

impl RoiInput {
    pub const DEFAULT_LIFESPAN: Years = Years(25.0);
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RoiResult {
    pub annual_savings: Cost,

    /// Time until the cumulative savings cover the upfront cost.
    ///
    /// Positive infinity when there are no savings at all.
    pub payback: Years,

    /// Undiscounted net savings over the lifespan, minus the upfront cost.
    pub total_roi: Cost,
}

impl RoiResult {
    #[must_use]
    pub fn pays_back_within(&self, lifespan: Years) -> bool {
        self.payback <= lifespan
    }
}

/// Estimate the simple payback and lifetime return, without discounting.
pub fn roi(input: &RoiInput) -> RoiResult {
    let annual_savings = input.daily_savings * DAYS_PER_YEAR;
    let payback = if annual_savings == Cost::ZERO {
        Years(f64::INFINITY)
    } else {
        Years(input.total_cost / annual_savings)
    };
    let total_roi = annual_savings * input.lifespan.0 - input.total_cost;
    RoiResult { annual_savings, payback, total_roi }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn regular_payback() {
        let result = roi(&RoiInput::builder()
            .total_cost(Cost(5000.0))
            .daily_savings(Cost(10.0))
            .lifespan(Years(25.0))
            .build());
        assert_abs_diff_eq!(result.annual_savings.0, 3650.0);
        assert_abs_diff_eq!(result.payback.0, 1.369_863, epsilon = 1e-6);
        assert_abs_diff_eq!(result.total_roi.0, 86250.0);
        assert!(result.pays_back_within(Years(25.0)));
    }

    #[test]
    fn no_savings_never_pays_back() {
        let result =
            roi(&RoiInput::builder().total_cost(Cost(10000.0)).daily_savings(Cost::ZERO).build());
        assert_abs_diff_eq!(result.annual_savings.0, 0.0);
        assert!(result.payback.0.is_infinite());
        assert!(result.payback.0.is_sign_positive());
        assert_abs_diff_eq!(result.total_roi.0, -10000.0);
        assert!(!result.pays_back_within(RoiInput::DEFAULT_LIFESPAN));
    }

    #[test]
    fn negative_zero_savings_never_pay_back() {
        let result =
            roi(&RoiInput::builder().total_cost(Cost(10000.0)).daily_savings(Cost(-0.0)).build());
        assert_eq!(result.payback, Years(f64::INFINITY));
    }

    #[test]
    fn default_lifespan() {
        let input = RoiInput::builder().total_cost(Cost(1.0)).daily_savings(Cost(1.0)).build();
        assert_eq!(input.lifespan, Years(25.0));
    }

    #[test]
    fn lifespan_scales_the_return() {
        let input = |lifespan| {
            RoiInput::builder()
                .total_cost(Cost(1000.0))
                .daily_savings(Cost(1.0))
                .lifespan(Years(lifespan))
                .build()
        };
        assert_abs_diff_eq!(roi(&input(10.0)).total_roi.0, 2650.0);
        assert_abs_diff_eq!(roi(&input(1.0)).total_roi.0, -635.0);
    }
}

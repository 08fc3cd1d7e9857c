use std::fmt::{Display, Formatter};

use serde::Serialize;
use wattle_quantities::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate};

use crate::core::{
    estimate::{Contribution, Estimate},
    profile::HouseSize,
    tariff::{Bill, TariffSchedule},
};

/// Indicative flat rate for the quick cost column next to the usage figures.
/// The actual bill is always computed from the tariff schedule.
pub const INDICATIVE_RATE: KilowattHourRate = KilowattHourRate::new(6.0);

/// Everything the presentation renders for one estimation run.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct UsageReport {
    pub size: HouseSize,
    pub daily: KilowattHours,
    pub weekly: KilowattHours,
    pub monthly: KilowattHours,
    pub breakdown: Vec<Contribution>,
    pub monthly_bill: Bill,

    /// Projection of the monthly bill, deliberately not a re-tiered bill of
    /// the annual total.
    pub yearly_bill: Cost,

    pub average_rate: Option<KilowattHourRate>,
    pub rating: EfficiencyRating,

    /// Typical daily usage for the size category, for comparison.
    pub typical_daily: KilowattHours,
}

impl UsageReport {
    pub fn new(size: HouseSize, estimate: Estimate, schedule: &TariffSchedule) -> Self {
        let daily = estimate.daily;
        let weekly = daily * 7.0;
        let monthly = daily * 30.0;
        let monthly_bill = schedule.bill_for(monthly);
        let yearly_bill = monthly_bill.total * 12.0;
        let average_rate =
            (monthly > KilowattHours::ZERO).then(|| monthly_bill.total / monthly);
        Self {
            size,
            daily,
            weekly,
            monthly,
            breakdown: estimate.breakdown,
            monthly_bill,
            yearly_bill,
            average_rate,
            rating: EfficiencyRating::for_daily(daily),
            typical_daily: size.typical_daily_usage(),
        }
    }

    /// How far the estimate sits above the typical usage for the category.
    /// Negative means below typical.
    pub fn excess_daily(&self) -> KilowattHours {
        self.daily - self.typical_daily
    }
}

/// Coarse star rating of the daily draw.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl EfficiencyRating {
    pub fn for_daily(daily: KilowattHours) -> Self {
        if daily < KilowattHours::from(5.0) {
            Self::Excellent
        } else if daily < KilowattHours::from(8.0) {
            Self::Good
        } else if daily < KilowattHours::from(12.0) {
            Self::Average
        } else {
            Self::Poor
        }
    }

    pub const fn stars(self) -> &'static str {
        match self {
            Self::Excellent => "★★★★★",
            Self::Good => "★★★★",
            Self::Average => "★★★",
            Self::Poor => "★★",
        }
    }
}

impl Display for EfficiencyRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stars())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::profile::Inventory;

    fn example_report() -> UsageReport {
        let estimate = Estimate::new(
            HouseSize::TwoBhk,
            Inventory::builder().refrigerators(1).air_conditioners(2).build(),
        );
        UsageReport::new(HouseSize::TwoBhk, estimate, &TariffSchedule::default())
    }

    #[test]
    fn test_scaling_is_exact() {
        let report = example_report();
        assert_eq!(report.weekly, report.daily * 7.0);
        assert_eq!(report.monthly, report.daily * 30.0);
    }

    #[test]
    fn test_example_household_bill() {
        let report = example_report();
        assert_abs_diff_eq!(report.monthly.0.into_inner(), 190.8, epsilon = 1e-9);
        assert_abs_diff_eq!(report.monthly_bill.total.0.into_inner(), 758.6, epsilon = 1e-9);
    }

    #[test]
    fn test_yearly_bill_is_a_projection() {
        // A re-tiered annual total would land higher, since eleven more
        // months of units would fall into the upper slabs.
        let report = example_report();
        assert_eq!(report.yearly_bill, report.monthly_bill.total * 12.0);
        let retiered = TariffSchedule::default().bill_for(report.monthly * 12.0);
        assert!(report.yearly_bill < retiered.total);
    }

    #[test]
    fn test_average_rate() {
        let report = example_report();
        let average_rate = report.average_rate.unwrap();
        assert_abs_diff_eq!(average_rate.0.into_inner(), 758.6 / 190.8, epsilon = 1e-9);
    }

    #[test]
    fn test_average_rate_of_nothing() {
        let estimate = Estimate { daily: KilowattHours::ZERO, breakdown: Vec::new() };
        let report = UsageReport::new(HouseSize::OneBhk, estimate, &TariffSchedule::default());
        assert!(report.average_rate.is_none());
    }

    #[test]
    fn test_rating_thresholds() {
        for (daily, expected) in [
            (4.9, EfficiencyRating::Excellent),
            (5.0, EfficiencyRating::Good),
            (7.9, EfficiencyRating::Good),
            (8.0, EfficiencyRating::Average),
            (11.9, EfficiencyRating::Average),
            (12.0, EfficiencyRating::Poor),
        ] {
            assert_eq!(EfficiencyRating::for_daily(KilowattHours::from(daily)), expected);
        }
    }
}

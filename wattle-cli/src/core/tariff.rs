use std::{fs, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use wattle_quantities::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate};

use crate::prelude::*;

/// One contiguous usage band billed at a single rate.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Slab {
    pub from: KilowattHours,

    /// Exclusive upper bound; absent leaves the band unbounded.
    #[serde(default)]
    pub to: Option<KilowattHours>,

    pub rate: KilowattHourRate,
}

impl Slab {
    pub fn width(&self) -> Option<KilowattHours> {
        self.to.map(|to| to - self.from)
    }
}

/// Progressive tariff: each consumption band is billed at its own rate, and
/// earlier bands are never re-rated.
#[derive(Clone, Debug, Serialize)]
pub struct TariffSchedule {
    slabs: Vec<Slab>,
}

/// On-disk schedule: a sequence of `[[slab]]` tables.
#[derive(Deserialize)]
struct ScheduleFile {
    #[serde(rename = "slab")]
    slabs: Vec<Slab>,
}

impl Default for TariffSchedule {
    /// Illustrative domestic schedule.
    fn default() -> Self {
        Self {
            slabs: vec![
                Slab {
                    from: KilowattHours::ZERO,
                    to: Some(KilowattHours::from(100.0)),
                    rate: KilowattHourRate::from(3.5),
                },
                Slab {
                    from: KilowattHours::from(100.0),
                    to: Some(KilowattHours::from(200.0)),
                    rate: KilowattHourRate::from(4.5),
                },
                Slab {
                    from: KilowattHours::from(200.0),
                    to: Some(KilowattHours::from(400.0)),
                    rate: KilowattHourRate::from(6.0),
                },
                Slab { from: KilowattHours::from(400.0), to: None, rate: KilowattHourRate::from(7.5) },
            ],
        }
    }
}

impl TariffSchedule {
    /// Validate and build the schedule.
    ///
    /// The slabs must start at zero, be contiguous with strictly increasing
    /// bounds, and leave only the final slab unbounded. A malformed schedule
    /// is a configuration error, rejected before any bill is computed.
    pub fn try_new(slabs: Vec<Slab>) -> Result<Self> {
        let (first, last) = match (slabs.first(), slabs.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => bail!("the tariff schedule needs at least one slab"),
        };
        ensure!(
            first.from == KilowattHours::ZERO,
            "the first slab must start at zero, not at {}",
            first.from,
        );
        ensure!(last.to.is_none(), "the final slab must be unbounded, found {:?}", last.to);
        for slab in &slabs {
            ensure!(
                slab.rate >= KilowattHourRate::ZERO,
                "the slab starting at {} has a negative rate {}",
                slab.from,
                slab.rate,
            );
            if let Some(to) = slab.to {
                ensure!(to > slab.from, "slab bounds must increase, found {}..{}", slab.from, to);
            }
        }
        for (slab, next) in slabs.iter().tuple_windows() {
            let Some(to) = slab.to else {
                bail!("only the final slab may be unbounded, the one starting at {} is not last", slab.from);
            };
            ensure!(
                to == next.from,
                "the slabs must be contiguous, found a break between {} and {}",
                to,
                next.from,
            );
        }
        Ok(Self { slabs })
    }

    #[instrument(skip_all, fields(path = ?path))]
    pub fn read_from(path: &Path) -> Result<Self> {
        info!("reading the tariff schedule…");
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read the tariff schedule from `{}`", path.display())
        })?;
        let file: ScheduleFile = toml::from_str(&contents).with_context(|| {
            format!("failed to parse the tariff schedule in `{}`", path.display())
        })?;
        Self::try_new(file.slabs)
            .with_context(|| format!("invalid tariff schedule in `{}`", path.display()))
    }

    pub fn slabs(&self) -> &[Slab] {
        &self.slabs
    }

    /// Bill the units progressively: ascending slabs each absorb what they
    /// can at their own rate until nothing remains. Slabs beyond the last
    /// needed one are skipped.
    pub fn bill_for(&self, units: KilowattHours) -> Bill {
        let mut remaining = units;
        let mut total = Cost::ZERO;
        let mut lines = Vec::new();
        for slab in &self.slabs {
            if remaining <= KilowattHours::ZERO {
                break;
            }
            let billed = slab.width().map_or(remaining, |width| remaining.min(width));
            let charge = billed * slab.rate;
            lines.push(SlabCharge { slab: *slab, units: billed, charge });
            total += charge;
            remaining -= billed;
        }
        Bill { total, lines }
    }
}

/// A computed bill with its slab-by-slab lines.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Bill {
    pub total: Cost,
    pub lines: Vec<SlabCharge>,
}

#[derive(Copy, Clone, Debug, Serialize)]
pub struct SlabCharge {
    pub slab: Slab,

    /// Units absorbed by the slab, never above its width.
    pub units: KilowattHours,

    pub charge: Cost,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn bounded(from: f64, to: f64, rate: f64) -> Slab {
        Slab { from: from.into(), to: Some(to.into()), rate: rate.into() }
    }

    fn unbounded(from: f64, rate: f64) -> Slab {
        Slab { from: from.into(), to: None, rate: rate.into() }
    }

    #[test]
    fn test_default_schedule_is_valid() {
        assert!(TariffSchedule::try_new(TariffSchedule::default().slabs).is_ok());
    }

    #[test]
    fn test_bill_checkpoints() {
        let schedule = TariffSchedule::default();
        for (units, expected) in [(0.0, 0.0), (100.0, 350.0), (150.0, 575.0), (450.0, 2375.0)] {
            let bill = schedule.bill_for(KilowattHours::from(units));
            assert_abs_diff_eq!(bill.total.0.into_inner(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_bill_has_no_lines() {
        assert!(TariffSchedule::default().bill_for(KilowattHours::ZERO).lines.is_empty());
    }

    #[test]
    fn test_unused_slabs_are_skipped() {
        let bill = TariffSchedule::default().bill_for(KilowattHours::from(100.0));
        assert_eq!(bill.lines.len(), 1);
        assert_abs_diff_eq!(bill.lines[0].units.0.into_inner(), 100.0);
    }

    #[test]
    fn test_lines_add_up() {
        let bill = TariffSchedule::default().bill_for(KilowattHours::from(450.0));
        let units: Vec<_> =
            bill.lines.iter().map(|line| line.units.0.into_inner()).collect();
        assert_eq!(units, [100.0, 100.0, 200.0, 50.0]);
        let sum: Cost = bill.lines.iter().map(|line| line.charge).sum();
        assert_abs_diff_eq!(sum.0.into_inner(), bill.total.0.into_inner());
    }

    #[test]
    fn test_bill_is_monotonic() {
        let schedule = TariffSchedule::default();
        let mut previous = Cost::ZERO;
        for tens in 0..=60 {
            let bill = schedule.bill_for(KilowattHours::from(f64::from(tens) * 10.0));
            assert!(bill.total >= previous);
            previous = bill.total;
        }
    }

    #[test]
    fn test_rejects_empty_schedule() {
        assert!(TariffSchedule::try_new(Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_nonzero_start() {
        assert!(TariffSchedule::try_new(vec![unbounded(50.0, 3.5)]).is_err());
    }

    #[test]
    fn test_rejects_bounded_final_slab() {
        assert!(TariffSchedule::try_new(vec![bounded(0.0, 100.0, 3.5)]).is_err());
    }

    #[test]
    fn test_rejects_gap() {
        let slabs = vec![bounded(0.0, 100.0, 3.5), unbounded(150.0, 4.5)];
        assert!(TariffSchedule::try_new(slabs).is_err());
    }

    #[test]
    fn test_rejects_overlap() {
        let slabs = vec![bounded(0.0, 100.0, 3.5), unbounded(50.0, 4.5)];
        assert!(TariffSchedule::try_new(slabs).is_err());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let slabs = vec![bounded(0.0, 100.0, 3.5), bounded(100.0, 90.0, 4.5), unbounded(90.0, 6.0)];
        assert!(TariffSchedule::try_new(slabs).is_err());
    }

    #[test]
    fn test_rejects_unbounded_middle_slab() {
        let slabs = vec![unbounded(0.0, 3.5), unbounded(0.0, 4.5)];
        assert!(TariffSchedule::try_new(slabs).is_err());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let slabs = vec![bounded(0.0, 100.0, -3.5), unbounded(100.0, 4.5)];
        assert!(TariffSchedule::try_new(slabs).is_err());
    }
}

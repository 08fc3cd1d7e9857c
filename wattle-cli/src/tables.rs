use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use wattle_quantities::energy::KilowattHours;

use crate::core::{
    estimate::Contribution,
    profile::{Appliance, HouseSize},
    report::{EfficiencyRating, INDICATIVE_RATE, UsageReport},
    tariff::{Bill, Slab, TariffSchedule},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn band_label(slab: &Slab) -> String {
    match slab.to {
        Some(to) => format!("{:.0}-{:.0} kWh", slab.from.0, to.0),
        None => format!("{:.0}+ kWh", slab.from.0),
    }
}

#[must_use]
pub fn build_usage_table(report: &UsageReport) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Period", "Usage", "Indicative cost"]);
    for (period, usage) in
        [("Daily", report.daily), ("Weekly", report.weekly), ("Monthly", report.monthly)]
    {
        table.add_row(vec![
            Cell::new(period),
            Cell::new(usage).set_alignment(CellAlignment::Right),
            Cell::new(usage * INDICATIVE_RATE).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_breakdown_table(breakdown: &[Contribution]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Source", "Daily draw", "Daily cost", "Monthly cost"]);
    for (index, contribution) in breakdown.iter().enumerate() {
        let mut label = Cell::new(&contribution.label);
        if index == 0 {
            label = label.add_attribute(Attribute::Dim);
        }
        table.add_row(vec![
            label,
            Cell::new(contribution.daily).set_alignment(CellAlignment::Right),
            Cell::new(contribution.daily * INDICATIVE_RATE).set_alignment(CellAlignment::Right),
            Cell::new(contribution.daily * 30.0 * INDICATIVE_RATE)
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_bill_table(bill: &Bill) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Band", "Rate", "Units", "Charge"]);
    for line in &bill.lines {
        table.add_row(vec![
            Cell::new(band_label(&line.slab)),
            Cell::new(line.slab.rate).set_alignment(CellAlignment::Right),
            Cell::new(line.units).set_alignment(CellAlignment::Right),
            Cell::new(line.charge).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(bill.total).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_billing_summary_table(report: &UsageReport) -> Table {
    let rating_color = match report.rating {
        EfficiencyRating::Excellent | EfficiencyRating::Good => Color::Green,
        EfficiencyRating::Average => Color::DarkYellow,
        EfficiencyRating::Poor => Color::Red,
    };
    let mut table = new_table();
    table.set_header(vec!["Monthly bill", "Yearly bill", "Average rate", "Efficiency"]);
    table.add_row(vec![
        Cell::new(report.monthly_bill.total).set_alignment(CellAlignment::Right),
        Cell::new(report.yearly_bill).set_alignment(CellAlignment::Right),
        report
            .average_rate
            .map_or_else(|| Cell::new("n/a"), Cell::new)
            .set_alignment(CellAlignment::Right),
        Cell::new(report.rating).fg(rating_color),
    ]);
    table
}

#[must_use]
pub fn build_comparison_table(report: &UsageReport) -> Table {
    let excess = report.excess_daily();
    let mut table = new_table();
    table.set_header(vec!["Your daily usage", "Typical usage", "Difference"]);
    table.add_row(vec![
        Cell::new(report.daily).set_alignment(CellAlignment::Right),
        Cell::new(report.typical_daily).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:+.2} kWh", excess.0))
            .set_alignment(CellAlignment::Right)
            .fg(if excess <= KilowattHours::ZERO { Color::Green } else { Color::Red }),
    ]);
    table
}

#[must_use]
pub fn build_schedule_table(schedule: &TariffSchedule) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Band", "Rate"]);
    for slab in schedule.slabs() {
        table.add_row(vec![
            Cell::new(band_label(slab)),
            Cell::new(slab.rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_house_size_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Size", "Rooms", "Base load", "Typical usage"]);
    for size in HouseSize::ALL {
        table.add_row(vec![
            Cell::new(size),
            Cell::new(size.rooms()).set_alignment(CellAlignment::Right),
            Cell::new(size.base_load()).set_alignment(CellAlignment::Right),
            Cell::new(size.typical_daily_usage()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_appliance_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Appliance", "Daily draw", "Counting"]);
    for appliance in Appliance::ALL {
        table.add_row(vec![
            Cell::new(appliance),
            Cell::new(appliance.daily_draw()).set_alignment(CellAlignment::Right),
            if appliance.scales_with_count() {
                Cell::new("per unit")
            } else {
                Cell::new("flat").add_attribute(Attribute::Dim)
            },
        ]);
    }
    table
}

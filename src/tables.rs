use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{quantity::currency::Cost, report::Report};

fn new_table(title: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec![Cell::new(title).add_attribute(Attribute::Bold), Cell::new("")]);
    table
}

fn value<T: ToString>(value: T) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

pub fn build_design_table(report: &Report) -> Table {
    let sizing = &report.sizing;
    let assumptions = &report.assumptions;

    let mut table = new_table("System design");
    table
        .add_row(vec![Cell::new("Usage"), value(report.input.usage)])
        .add_row(vec![Cell::new("Daily energy"), value(sizing.daily_energy)])
        .add_row(vec![
            Cell::new("Required capacity"),
            value(sizing.required_capacity).add_attribute(Attribute::Bold),
        ])
        .add_row(vec![
            Cell::new(format!("Panels ({})", assumptions.panel.rating)),
            value(sizing.panel_count),
        ])
        .add_row(vec![Cell::new("Inverter"), value(sizing.inverter_size)])
        .add_row(vec![
            Cell::new("Battery backup").add_attribute(Attribute::Dim),
            value(sizing.battery_backup_energy).add_attribute(Attribute::Dim),
        ])
        .add_row(vec![
            Cell::new(format!("Battery capacity at {}", report.input.battery_voltage))
                .add_attribute(Attribute::Dim),
            value(sizing.battery_capacity).add_attribute(Attribute::Dim),
        ])
        .add_row(vec![
            Cell::new(format!("Batteries ({})", assumptions.battery.unit_capacity)),
            value(sizing.battery_count),
        ]);
    table
}

pub fn build_cost_table(report: &Report) -> Table {
    let costs = &report.sizing.costs;

    let mut table = new_table("Cost estimate");
    table
        .add_row(vec![Cell::new("Panels"), value(costs.panels)])
        .add_row(vec![Cell::new("Inverter"), value(costs.inverter)])
        .add_row(vec![Cell::new("Batteries"), value(costs.batteries)])
        .add_row(vec![Cell::new("Structure"), value(costs.structure)])
        .add_row(vec![
            Cell::new(format!(
                "Miscellaneous ({:.0}%)",
                report.assumptions.miscellaneous_rate * 100.0,
            )),
            value(costs.miscellaneous),
        ])
        .add_row(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            value(costs.total).add_attribute(Attribute::Bold),
        ]);
    table
}

pub fn build_roi_table(report: &Report) -> Table {
    let roi = &report.roi;

    let payback = if roi.payback.is_finite() {
        value(roi.payback)
    } else {
        value("never")
    };
    let payback =
        payback.fg(if roi.pays_back_within(report.lifespan) { Color::Green } else { Color::Red });

    let mut table = new_table("Return on investment");
    table
        .add_row(vec![Cell::new("Tariff").add_attribute(Attribute::Dim), value(report.tariff)])
        .add_row(vec![Cell::new("Daily savings"), value(report.daily_savings)])
        .add_row(vec![Cell::new("Annual savings"), value(roi.annual_savings)])
        .add_row(vec![Cell::new("Payback period"), payback])
        .add_row(vec![
            Cell::new(format!("ROI over {}", report.lifespan)).add_attribute(Attribute::Bold),
            value(roi.total_roi).add_attribute(Attribute::Bold).fg(
                if roi.total_roi >= Cost::ZERO { Color::Green } else { Color::Red },
            ),
        ]);
    table
}

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use touprice::{Catalog, CoverageGap, HourlyPrice, MonthRecord, PriceTier, TierHours};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_regions_table(catalog: &Catalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Region", "Time-of-use", "Note"]);
    for region in catalog.regions() {
        let time_of_use = region.uses_time_of_use_pricing();
        table.add_row(vec![
            Cell::new(region.name()),
            Cell::new(if time_of_use { "yes" } else { "no" })
                .fg(if time_of_use { Color::Green } else { Color::Red }),
            Cell::new(region.note().unwrap_or_default()).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[must_use]
pub fn build_summary_table(totals: &TierHours) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tier", "Hours", "Ratio", ""]);
    for (tier, hours) in totals.nonzero() {
        table.add_row(vec![
            Cell::new(tier.title()).fg(tier.color()),
            Cell::new(hours).set_alignment(CellAlignment::Right),
            Cell::new(tier.ratio()).set_alignment(CellAlignment::Right),
            Cell::new(tier.summary()).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[must_use]
pub fn build_hours_table(hours: &[HourlyPrice]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Hour", "Tier", "Ratio", ""]);
    for price in hours {
        let color = price.tier.map_or(Color::Reset, PriceTier::color);
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar = "█".repeat((price.ratio.0 * 10.0).round() as usize);
        table.add_row(vec![
            Cell::new(price.label),
            Cell::new(price.tier.map_or("—", PriceTier::name)).fg(color),
            Cell::new(price.ratio).set_alignment(CellAlignment::Right),
            Cell::new(bar).fg(color),
        ]);
    }
    table
}

#[must_use]
pub fn build_slots_table(record: &MonthRecord) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tier", "Start", "End", "Duration", "Description"]);
    for tier in PriceTier::DESCENDING {
        for slot in record.slots_of(tier) {
            table.add_row(vec![
                Cell::new(tier.title()).fg(tier.color()),
                Cell::new(slot.start),
                Cell::new(slot.end),
                Cell::new(slot.duration().to_hours()).set_alignment(CellAlignment::Right),
                Cell::new(slot.description.as_deref().unwrap_or_default())
                    .add_attribute(Attribute::Dim),
            ]);
        }
    }
    table
}

#[must_use]
pub fn build_gaps_table(gaps: &[CoverageGap]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Region", "Month", "Start", "End"]);
    for gap in gaps {
        table.add_row(vec![
            Cell::new(&gap.region),
            Cell::new(gap.month).set_alignment(CellAlignment::Right),
            Cell::new(gap.start).fg(Color::Red),
            Cell::new(gap.end).fg(Color::Red),
        ]);
    }
    table
}

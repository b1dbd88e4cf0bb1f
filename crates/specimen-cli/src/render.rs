//! Terminal rendering of specimen listings, decoded fields and validation
//! issues.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use specimen_codec::LOCATION_SLOTS;
use specimen_model::{SpecimenRecord, ValidationIssue};

const EMPTY: &str = "-";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// One row per record: id, bar code, family, state, type and location.
///
/// Locations are shown slot by slot; a stored value that does not decode is
/// shown as-is in red.
pub fn records_table(records: &[&SpecimenRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Bar code"),
        header_cell("Family"),
        header_cell("State"),
        header_cell("Type"),
        header_cell("Location"),
    ]);
    apply_table_style(&mut table);
    for record in records {
        let data = &record.sample_data;
        table.add_row(vec![
            Cell::new(record.id.as_str()),
            Cell::new(or_empty(Some(record.bar_code.as_str()))),
            Cell::new(or_empty(data.family.as_deref())),
            Cell::new(or_empty(data.state.as_deref())),
            Cell::new(or_empty(data.specimen_type.as_deref())),
            location_cell(record),
        ]);
    }
    table
}

fn location_cell(record: &SpecimenRecord) -> Cell {
    let data = &record.sample_data;
    match data.location_slots() {
        Ok(slots) if slots.is_empty() => Cell::new(EMPTY),
        Ok(slots) => Cell::new(slots.join(" / ")),
        Err(_) => Cell::new(or_empty(data.location.as_deref())).fg(Color::Red),
    }
}

/// Records as pretty-printed JSON in the store's format.
pub fn records_json(records: &[&SpecimenRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Decoded type levels, numbered from 1.
pub fn type_levels_table(levels: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Level"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, level) in levels.iter().enumerate() {
        table.add_row(vec![Cell::new(position + 1), Cell::new(level)]);
    }
    table
}

/// Decoded location slots with their labels.
pub fn location_table(slots: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Slot"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (slot, value) in LOCATION_SLOTS.iter().zip(slots) {
        table.add_row(vec![
            Cell::new(slot.label()),
            Cell::new(or_empty(Some(value.as_str()))),
        ]);
    }
    table
}

/// Validation issues grouped by specimen, in input order.
pub fn issues_table(issues: &[(&SpecimenRecord, ValidationIssue)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Specimen"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for (record, issue) in issues {
        table.add_row(vec![
            Cell::new(record.id.as_str()),
            Cell::new(&issue.field),
            Cell::new(or_empty(Some(issue.value.as_str()))).fg(Color::Yellow),
            Cell::new(&issue.message),
        ]);
    }
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn or_empty(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_render_as_dash() {
        assert_eq!(or_empty(None), "-");
        assert_eq!(or_empty(Some("")), "-");
        assert_eq!(or_empty(Some("Smith")), "Smith");
    }

    #[test]
    fn location_table_labels_each_slot() {
        let slots: Vec<String> = ["1", "2", "", "4", "A7"].map(String::from).to_vec();
        let rendered = location_table(&slots).to_string();
        for label in ["fridge", "shelf", "rack", "box", "spot", "A7"] {
            assert!(rendered.contains(label), "missing {label}");
        }
    }
}

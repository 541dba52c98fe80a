//! Plain-text rendering of grouping and entropy tables.

use arbor_core::ChosenAttributes;
use arbor_core::domain::{EntropyTable, GroupingTable};
use std::fmt::Write;

/// One line per attribute: `pat: Full{F:[1,4], T:[3]} None{F:[6]}`.
pub fn grouping(table: &GroupingTable) -> String {
    let mut out = String::new();
    for groups in table.iter() {
        let _ = write!(out, "  {}:", groups.attribute());
        for (value, buckets) in groups.values() {
            let labels: Vec<String> = buckets
                .iter()
                .map(|(label, ids)| {
                    let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                    format!("{label}:[{}]", ids.join(","))
                })
                .collect();
            let _ = write!(out, " {value}{{{}}}", labels.join(", "));
        }
        out.push('\n');
    }
    out
}

pub fn entropy(table: &EntropyTable) -> String {
    let mut out = String::new();
    for e in table.iter() {
        let _ = writeln!(out, "  {:<12} {:.6}", e.attribute, e.entropy);
    }
    out
}

pub fn chosen(chosen: &ChosenAttributes) -> String {
    chosen.to_string()
}

//! Header canonicalization for the sales section
//!
//! Sheet exports drift: headers change case, gain stray spaces, and the
//! first cell often carries a UTF-8 byte-order mark. Rows are addressed
//! through canonical header names plus per-field alias tables.

use std::collections::HashMap;

/// Canonicalize one header cell: strip the BOM, lower-case, collapse
/// internal whitespace, trim.
pub fn canonicalize(header: &str) -> String {
    let stripped = header.strip_prefix('\u{feff}').unwrap_or(header);
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// One CSV row addressed by canonical header name.
#[derive(Debug, Clone)]
pub struct LabeledRow {
    cells: HashMap<String, String>,
}

impl LabeledRow {
    /// Build a row from raw headers and the matching raw cells.
    ///
    /// Extra cells beyond the header width are ignored; missing trailing
    /// cells simply have no entry.
    pub fn new<'a, H, C>(headers: H, cells: C) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        C: IntoIterator<Item = &'a str>,
    {
        let map = headers
            .into_iter()
            .zip(cells)
            .map(|(h, c)| (canonicalize(h), c.trim().to_string()))
            .collect();
        Self { cells: map }
    }

    /// Look up the first non-empty cell matching any of the given
    /// canonical header aliases.
    pub fn get(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|alias| self.cells.get(*alias))
            .map(String::as_str)
            .find(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_strips_bom_case_and_whitespace() {
        assert_eq!(canonicalize("\u{feff}Rep  Name "), "rep name");
        assert_eq!(canonicalize("TOTAL SALES PRICE"), "total sales price");
        assert_eq!(canonicalize("  Profit"), "profit");
    }

    #[test]
    fn labeled_row_resolves_aliases() {
        let row = LabeledRow::new(
            vec!["Rep Name", "Product", "Month"],
            vec!["Ana", "Widget", "JUNE 2025"],
        );
        assert_eq!(row.get(&["rep", "rep name"]), Some("Ana"));
        assert_eq!(row.get(&["month"]), Some("JUNE 2025"));
        assert_eq!(row.get(&["missing"]), None);
    }

    #[test]
    fn labeled_row_skips_empty_cells() {
        let row = LabeledRow::new(vec!["rep", "name"], vec!["", "Ana"]);
        assert_eq!(row.get(&["rep", "name"]), Some("Ana"));
    }
}

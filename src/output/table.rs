//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Placeholder for an empty catalog listing
pub const NO_ENTRIES: &str = "No entries found.";

/// Placeholder for a payload with every member absent
pub const NO_MEMBERS: &str = "No members present.";

/// Rounded table with centered headers, or `empty` when there are no rows
pub fn format_table<T: Tabled>(rows: &[T], empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct MemberRow {
        #[tabled(rename = "FIELD")]
        field: &'static str,
        #[tabled(rename = "VALUE")]
        value: &'static str,
    }

    #[test]
    fn test_empty_rows_use_placeholder() {
        let rows: Vec<MemberRow> = vec![];
        assert_eq!(format_table(&rows, NO_MEMBERS), "No members present.");
        assert_eq!(format_table(&rows, NO_ENTRIES), "No entries found.");
    }

    #[test]
    fn test_rows_render_rounded() {
        let rows = [
            MemberRow { field: "ipSetId", value: "abc-123" },
            MemberRow { field: "nextToken", value: "page-2" },
        ];

        let result = format_table(&rows, NO_MEMBERS);
        assert!(result.contains("FIELD"));
        assert!(result.contains("abc-123"));
        assert!(result.contains("page-2"));
        assert!(result.starts_with('╭'));
    }
}

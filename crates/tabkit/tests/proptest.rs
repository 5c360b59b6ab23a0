//! Property-based tests for the table model and layout engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use tabkit::layout::{display_width, resolve_widths, wrap};
use tabkit::{CellType, Justify, Table, TableError};

// ============================================================================
// Test helpers
// ============================================================================

fn table_with(rows: usize, cols: usize) -> Table {
    let mut t = Table::new();
    for c in 0..cols {
        t.add_column(format!("C{}", c), 0, CellType::String, Justify::Left);
    }
    for _ in 0..rows {
        t.add_row();
    }
    t
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z ]{0,30}", 1..20)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Row validation accepts exactly 0..count and tells negative indices
    /// apart from indices past the end.
    #[test]
    fn row_validator_accepts_exact_range(rows in 0usize..20, index in -50isize..50) {
        let t = table_with(rows, 1);
        match t.check_row(index) {
            Ok(i) => prop_assert!(index >= 0 && (index as usize) < rows && i == index as usize),
            Err(TableError::RowNegative(i)) => prop_assert!(index < 0 && i == index),
            Err(TableError::RowOutOfRange { index: i, count }) => {
                prop_assert!(index >= rows as isize && i == index && count == rows)
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn col_validator_accepts_exact_range(cols in 0usize..20, index in -50isize..50) {
        let t = table_with(0, cols);
        match t.check_col(index) {
            Ok(i) => prop_assert!(index >= 0 && (index as usize) < cols && i == index as usize),
            Err(TableError::ColumnNegative(_)) => prop_assert!(index < 0),
            Err(TableError::ColumnOutOfRange { count, .. }) => {
                prop_assert!(index >= cols as isize && count == cols)
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    /// Tightening an unchanged table twice yields identical widths.
    #[test]
    fn tighten_is_idempotent(values in words(), declared in 0usize..12) {
        let mut t = Table::new();
        t.add_column("Auto", 0, CellType::String, Justify::Left);
        t.add_column("Fixed", declared, CellType::String, Justify::Right);
        for v in &values {
            t.add_row();
            t.put_str(-1, 0, v.as_str());
            t.put_str(-1, 1, v.as_str());
        }

        t.tighten_columns();
        let first: Vec<usize> = t.columns().iter().map(|c| c.print_width()).collect();
        t.tighten_columns();
        let second: Vec<usize> = t.columns().iter().map(|c| c.print_width()).collect();
        prop_assert_eq!(&first, &second);

        let widest = values.iter().map(|v| display_width(v)).max().unwrap_or(0).max(4);
        prop_assert_eq!(first[0], widest);
        if declared > 0 {
            prop_assert_eq!(first[1], declared);
        }
    }

    /// Wrapped lines never exceed the column width.
    #[test]
    fn wrap_respects_width(text in "[a-z ]{0,80}", width in 1usize..20) {
        let lines = wrap(&text, width);
        prop_assert!(!lines.is_empty());
        for line in &lines {
            prop_assert!(display_width(line) <= width, "{:?} wider than {}", line, width);
        }
    }

    /// Every text line of an auto-fit table has the same width.
    #[test]
    fn text_lines_are_aligned(values in words()) {
        let mut t = Table::new();
        t.add_column("Name", 0, CellType::String, Justify::Left);
        t.add_column("N", 0, CellType::Int, Justify::Right);
        for (i, v) in values.iter().enumerate() {
            t.add_row();
            t.put_str(-1, 0, v.trim());
            t.put_int(-1, 1, i as i64);
        }
        let line_width = resolve_widths(&t).line_width("  ");
        let text = tabkit::render::text::render(&t).unwrap();
        for line in text.lines() {
            prop_assert_eq!(display_width(line), line_width);
        }
    }

    /// Sorting on a column with ties keeps the relative order of equal keys,
    /// so sorting twice changes nothing.
    #[test]
    fn sort_is_stable(days in prop::collection::vec(0i64..5, 1..30)) {
        let base = NaiveDate::from_ymd_opt(2017, 2, 21).unwrap();
        let mut t = Table::new();
        t.add_column("Date", 0, CellType::Date, Justify::Left);
        t.add_column("Seq", 0, CellType::Int, Justify::Right);
        for (seq, d) in days.iter().enumerate() {
            t.add_row();
            t.put_date(-1, 0, base + chrono::Duration::days(*d));
            t.put_int(-1, 1, seq as i64);
        }
        let last = t.row_count() as isize - 1;

        t.sort(0, last, 0);
        let once: Vec<(NaiveDate, i64)> =
            (0..t.row_count() as isize).map(|r| (t.get_date(r, 0), t.get_int(r, 1))).collect();
        for pair in once.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1);
            }
        }

        t.sort(0, last, 0);
        let twice: Vec<(NaiveDate, i64)> =
            (0..t.row_count() as isize).map(|r| (t.get_date(r, 0), t.get_int(r, 1))).collect();
        prop_assert_eq!(once, twice);
    }
}

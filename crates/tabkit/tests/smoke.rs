//! End-to-end scenario: build a people table, poke at its edges, then render
//! it in every format.

use chrono::{NaiveDate, NaiveDateTime};
use tabkit::render::{self, csv, html, text};
use tabkit::{
    CellType, Justify, OutputFormat, PdfBridge, PdfError, PdfOption, RenderError, Section, Table,
    TableError,
};

const NAME: isize = 0;
const AGE: isize = 1;
const HEIGHT: isize = 2;
const DOB: isize = 3;
const COB: isize = 4;
const WINNINGS: isize = 5;
const NOTES: isize = 6;
const RANDOM: isize = 7;

struct Person {
    name: &'static str,
    age: i64,
    height: i64,
    dob: NaiveDate,
    cob: &'static str,
    winnings: f64,
    notes: &'static str,
    stamp: NaiveDateTime,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn people() -> Vec<Person> {
    let stamp = |y, m, d| date(y, m, d).and_hms_opt(9, 30, 0).unwrap();
    vec![
        Person {
            name: "Mary M. Oneil",
            age: 47,
            height: 165,
            dob: date(1969, 3, 2),
            cob: "United States",
            winnings: 17633.21,
            notes: "A few notes here withaverylongnoteword",
            stamp: stamp(2209, 9, 8),
        },
        Person {
            name: "Lynette C. Allen",
            age: 56,
            height: 156,
            dob: date(1960, 10, 4),
            cob: "United States",
            winnings: 45373.00,
            notes: "A lot more notes. A whole, big, line with lots and lots and lots and lots of notes. And some more notes.",
            stamp: stamp(2215, 1, 26),
        },
        Person {
            name: "Stanislaus Aliyeva",
            age: 42,
            height: 172,
            dob: date(1974, 4, 10),
            cob: "Slovinia",
            winnings: 106632.36,
            notes: "A few notes here",
            stamp: stamp(2020, 3, 20),
        },
        Person {
            name: "Casandra Åberg",
            age: 66,
            height: 158,
            dob: date(1950, 4, 21),
            cob: "Sweden",
            winnings: 93883.25,
            notes: "2000 Seat Toledo",
            stamp: stamp(2217, 1, 30),
        },
        Person {
            name: "Amanda Melo Ferreira",
            age: 55,
            height: 174,
            dob: date(1977, 8, 6),
            cob: "Brazil",
            winnings: 46673.42,
            notes: "2006 Ford Falcon",
            stamp: stamp(2073, 7, 13),
        },
    ]
}

fn empty_people_table() -> Table {
    let mut tbl = Table::new();
    tbl.set_title("GOTABLE");
    tbl.set_section(Section::One, "A Smoke Test");
    tbl.set_section(Section::Two, "February 21, 2017");
    tbl.set_section(Section::Three, "section3");
    tbl.add_column("Name", 35, CellType::String, Justify::Left);
    tbl.add_column("Person Age", 3, CellType::Int, Justify::Right);
    tbl.add_column("Height (cm)", 0, CellType::Int, Justify::Right);
    tbl.add_column("Date of Birth", 10, CellType::Date, Justify::Left);
    tbl.add_column("Country of Birth", 14, CellType::String, Justify::Left);
    tbl.add_column("Winnings", 12, CellType::Float, Justify::Right);
    tbl.add_column("Notes", 20, CellType::String, Justify::Left);
    tbl.add_column("Random Date/Time", 25, CellType::DateTime, Justify::Left);
    tbl
}

fn people_table() -> (Table, tabkit::RowsetId) {
    let mut tbl = empty_people_table();
    let totals = tbl.create_rowset();
    for p in people() {
        tbl.add_row();
        tbl.append_to_rowset(totals, -1).unwrap();
        assert!(tbl.put_str(-1, NAME, p.name));
        assert!(tbl.put_int(-1, AGE, p.age));
        assert!(tbl.put_int(-1, HEIGHT, p.height));
        assert!(tbl.put_date(-1, DOB, p.dob));
        assert!(tbl.put_str(-1, COB, p.cob));
        assert!(tbl.put_float(-1, WINNINGS, p.winnings));
        assert!(tbl.put_str(-1, NOTES, p.notes));
        assert!(tbl.put_datetime(-1, RANDOM, p.stamp));
    }
    (tbl, totals)
}

#[test]
fn empty_table_fails_every_format_with_no_columns() {
    let mut tbl = Table::new();
    tbl.set_no_headers_style([("font-family", "monospace")]);
    assert_eq!(tbl.has_headers(), Err(TableError::NoColumns));

    let expect = |r: Result<String, RenderError>| {
        let err = r.unwrap_err();
        assert_eq!(err.table_error(), Some(&TableError::NoColumns));
        assert!(err.to_string().contains("No Header Columns"));
    };
    expect(text::render(&tbl));
    expect(csv::render(&tbl));
    expect(html::render(&tbl));
    assert!(tbl.to_string().contains("No Header Columns"));

    let mut sink = Vec::new();
    assert!(text::write(&tbl, &mut sink).is_err());
    assert!(html::write(&tbl, &mut sink).is_err());
    assert!(String::from_utf8(sink).unwrap().contains("No Header Columns"));
}

#[test]
fn columns_without_rows_fail_with_no_rows() {
    let tbl = empty_people_table();
    assert_eq!(tbl.has_data(), Err(TableError::NoRows));
    assert!(tbl.to_string().contains("No Records"));
    for format in OutputFormat::ALL {
        let mut sink = Vec::new();
        let bridge = PdfBridge::new(|_: &[u8], _: &[PdfOption]| -> Result<Vec<u8>, PdfError> {
            Ok(b"%PDF".to_vec())
        });
        let err = render::render_to(&tbl, format, &mut sink, Some(&bridge)).unwrap_err();
        assert_eq!(err.table_error(), Some(&TableError::NoRows), "{}", format);
    }
}

#[test]
fn accessors_and_edges() {
    let (mut tbl, totals) = people_table();
    let data = people();

    assert_eq!(tbl.col_count(), 8);
    assert_eq!(tbl.row_count(), 5);
    assert_eq!(tbl.rowset(totals), &[0, 1, 2, 3, 4]);
    assert_eq!(tbl.cell_type(999, 999), None);
    assert_eq!(tbl.title(), "GOTABLE");
    assert_eq!(tbl.section(Section::Two), "February 21, 2017");

    assert!(!tbl.put_int(999, 999, 1));
    assert!(!tbl.put_float(999, 999, 1.0));
    assert!(!tbl.put_str(999, 999, "ignore"));
    assert!(!tbl.put_date(999, 999, date(2017, 2, 21)));
    // Int into a float column
    assert!(!tbl.put_int(1, WINNINGS, 7));
    assert_eq!(tbl.get_float(1, WINNINGS), data[1].winnings);

    assert_eq!(tbl.get(0, NAME).as_str(), data[0].name);
    assert_eq!(tbl.get_int(1, AGE), data[1].age);
    assert_eq!(tbl.get_str(1, NAME), data[1].name);
    assert_eq!(tbl.get_date(1, DOB), data[1].dob);
    assert_eq!(tbl.cell_type(1, NAME), Some(CellType::String));

    let row_big = "Row number > no of rows in table";
    let row_neg = "Row number is less than zero";
    let col_big = "Column number > no of columns in table";
    let col_neg = "Column number is less than zero";
    let css = [("color", "orange")];

    assert!(tbl.check_row(999).unwrap_err().to_string().contains(row_big));
    assert!(tbl.set_row_style(999, css).unwrap_err().to_string().contains(row_big));
    assert!(tbl.set_cell_style(999, 7, css).unwrap_err().to_string().contains(row_big));
    assert!(tbl.check_row(-999).unwrap_err().to_string().contains(row_neg));
    assert!(tbl.set_row_style(-999, css).unwrap_err().to_string().contains(row_neg));
    assert!(tbl.check_row(4).is_ok());

    assert!(tbl.check_col(999).unwrap_err().to_string().contains(col_big));
    assert!(tbl.set_header_cell_style(999, css).unwrap_err().to_string().contains(col_big));
    assert!(tbl.set_col_style(999, css).unwrap_err().to_string().contains(col_big));
    assert!(tbl.set_col_html_width(999, 200, "px").unwrap_err().to_string().contains(col_big));
    assert!(tbl.check_col(-999).unwrap_err().to_string().contains(col_neg));
    assert!(tbl.set_cell_style(4, -999, css).unwrap_err().to_string().contains(col_neg));
    assert!(tbl.check_col(7).is_ok());
}

#[test]
fn sort_rules_and_totals() {
    let (mut tbl, totals) = people_table();
    let last = tbl.row_count() as isize - 1;
    tbl.sort(0, last, DOB);
    let names: Vec<&str> = (0..5).map(|r| tbl.get_str(r, NAME)).collect();
    assert_eq!(
        names,
        vec![
            "Casandra Åberg",
            "Lynette C. Allen",
            "Mary M. Oneil",
            "Stanislaus Aliyeva",
            "Amanda Melo Ferreira"
        ]
    );

    tbl.add_line_after(last).unwrap();
    assert!(tbl.add_line_before(tbl.row_count() as isize).is_err());

    let at = tbl
        .insert_sum_rowset_cols(totals, tbl.row_count() as isize, &[WINNINGS as usize])
        .unwrap();
    assert_eq!(at, 5);
    let expected: f64 = people().iter().map(|p| p.winnings).sum();
    assert!((tbl.get_float(5, WINNINGS) - expected).abs() < 1e-6);
    assert_eq!(tbl.formatted(5, WINNINGS as usize), "310,195.24");
}

#[test]
fn full_text_output() {
    let (mut tbl, totals) = people_table();
    let last = tbl.row_count() as isize - 1;
    tbl.sort(0, last, DOB);
    tbl.add_line_after(last).unwrap();
    tbl.insert_sum_rowset_cols(totals, tbl.row_count() as isize, &[WINNINGS as usize])
        .unwrap();
    tbl.tighten_columns();

    let out = text::render(&tbl).unwrap();
    assert_eq!(out, tbl.to_string());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "GOTABLE");
    assert_eq!(lines[1], "A Smoke Test");
    assert_eq!(lines[2], "February 21, 2017");
    assert_eq!(lines[3], "section3");

    // Column widths: 35 3 11 10 14 12 20 25, separators of two spaces
    let width = 35 + 3 + 11 + 10 + 14 + 12 + 20 + 25 + 2 * 7;
    assert!(lines[4].starts_with("Name"));
    assert!(lines.iter().skip(4).all(|l| tabkit::layout::display_width(l) == width));
    assert!(lines.contains(&"-".repeat(width).as_str()));

    // Long notes wrap onto continuation lines
    assert!(out.contains("A lot more notes. A "));
    assert!(out.contains("withaverylongnotewor"));
    // Dates keep the default format
    assert!(out.contains("04/21/1950"));
    assert!(out.contains("  310,195.24"));

    let mut sink = Vec::new();
    text::write(&tbl, &mut sink).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), out);
}

#[test]
fn html_output_carries_styles() {
    let (mut tbl, _) = people_table();
    tbl.set_row_style(0, [("color", "orange")]).unwrap();
    tbl.set_col_style(0, [("color", "blue")]).unwrap();
    tbl.set_all_cells_style([("background-color", "yellow")]);
    tbl.set_col_html_width(1, 10, "ch").unwrap();
    tbl.set_title_style([("color", "blue"), ("font-style", "italic")]);
    tbl.set_header_style([("color", "orange"), ("font-style", "italic")]);
    tbl.set_header_style([("background-color", "blue")]);
    tbl.set_section_style(Section::One, [("color", "white"), ("background-color", "black")]);

    let out = html::render(&tbl).unwrap();
    assert!(out.contains("#tabkit-0 .title { color:blue;font-style:italic; }"));
    assert!(out.contains("#tabkit-0 th { color:orange;font-style:italic;background-color:blue; }"));
    assert!(out.contains("#tabkit-0 .section1 { color:white;background-color:black; }"));
    assert!(out.contains("width:10ch;"));
    // Row 0 col 0: row says orange, column says blue, cell adds yellow
    assert!(out.contains("style=\"color:blue;background-color:yellow;\">Mary M. Oneil</td>"));
    // Row 0 col 1: row colour only
    assert!(out.contains("style=\"color:orange;background-color:yellow;\">47</td>"));
    assert!(out.contains("Casandra Åberg"));
}

#[test]
fn pdf_bridge_receives_options_in_order() {
    let (tbl, _) = people_table();
    let bridge = PdfBridge::new(|html: &[u8], opts: &[PdfOption]| -> Result<Vec<u8>, PdfError> {
        let flags: Vec<&str> = opts.iter().map(|o| o.flag.as_str()).collect();
        if flags != ["--no-collate", "-T", "--page-size"] {
            return Err(PdfError::Renderer(format!("unexpected options {:?}", flags)));
        }
        let mut pdf = b"%PDF-1.4\n".to_vec();
        pdf.extend_from_slice(&html[..16]);
        Ok(pdf)
    })
    .option(PdfOption::flag("--no-collate"))
    .option(PdfOption::with_value("-T", "15"))
    .option(PdfOption::with_value("--page-size", "Letter"));

    let mut sink = Vec::new();
    bridge.write(&tbl, &mut sink).unwrap();
    assert!(sink.starts_with(b"%PDF-1.4\n<!DOCTYPE html>"));
}

#[test]
fn multi_table_outputs() {
    let (tbl, _) = people_table();
    let tables: Vec<Table> = (0..3)
        .map(|_| {
            let mut t = tbl.clone();
            t.tighten_columns();
            t
        })
        .collect();

    let single = text::render(&tables[0]).unwrap();
    let many = text::render_many(&tables).unwrap();
    assert_eq!(many, [single.as_str(); 3].join("\n"));

    let html = html::render_many(&tables).unwrap();
    assert_eq!(html.matches("class=\"tabkit-page\"").count(), 3);

    let mut sink = Vec::new();
    render::render_many_to(&tables, OutputFormat::Csv, &mut sink, None).unwrap();
    let csv_out = String::from_utf8(sink).unwrap();
    assert_eq!(csv_out.matches("\"Name\",").count(), 3);
}

//! Shared fixtures: gradebooks written with rust_xlsxwriter
#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// A fixture cell
pub enum Cell {
    Text(&'static str),
    Num(f64),
    Blank,
}

pub use Cell::{Blank, Num, Text};

pub fn gradebook_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![
            Text("Student ID"),
            Text("First Name"),
            Text("Last Name"),
            Text("Email"),
            Text("Section"),
            Text("Quiz 1"),
            Text("Quiz 2"),
            Text("Quiz 3"),
            Text("Midterm"),
        ],
        vec![
            Num(1.0),
            Text("Ada"),
            Text("Lovelace"),
            Text("ada@example.edu"),
            Text("A"),
            Num(7.0),
            Num(9.0),
            Num(5.0),
            Num(88.0),
        ],
        vec![
            Num(2.0),
            Text("Alan"),
            Text("Turing"),
            Text("alan@example.edu"),
            Text("B"),
            Num(10.0),
            Text("absent"),
            Num(6.0),
            Num(91.0),
        ],
        vec![
            Num(3.0),
            Text("Grace"),
            Text("Hopper"),
            Text("grace@example.edu"),
            Text("A"),
            Blank,
            Blank,
            Blank,
            Num(75.0),
        ],
        vec![
            Num(4.0),
            Text("Edsger"),
            Text("Dijkstra"),
            Text("edsger@example.edu"),
            Text("B"),
            Num(9.5),
            Num(8.25),
            Num(10.0),
            Num(70.0),
        ],
    ]
}

/// Averages of the best 2 of columns 6-8 for [`gradebook_rows`]
pub const EXPECTED_BEST_OF_TWO: [f64; 4] = [8.0, 8.0, 0.0, 9.75];

fn build(rows: &[Vec<Cell>], extra_sheet: bool) -> Workbook {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Grades").unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Text(s) => {
                    sheet.write_string(r as u32, c as u16, *s).unwrap();
                }
                Num(n) => {
                    sheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                Blank => {}
            }
        }
    }
    if extra_sheet {
        let other = workbook.add_worksheet();
        other.set_name("Notes").unwrap();
        other.write_string(0, 0, "ignored").unwrap();
    }
    workbook
}

pub fn workbook_bytes(rows: &[Vec<Cell>]) -> Vec<u8> {
    build(rows, false).save_to_buffer().unwrap()
}

/// The sample gradebook with a second, ignored worksheet
pub fn gradebook_bytes() -> Vec<u8> {
    build(&gradebook_rows(), true).save_to_buffer().unwrap()
}

pub fn write_gradebook(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, gradebook_bytes()).unwrap();
    path
}

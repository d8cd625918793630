use crate::core::{process_sheet, BestOfParams, GradeReport};
use crate::error::GradeResult;
use crate::excel::{check_file_type, column_letter, GradebookImporter, ResultsExporter};
use crate::types::{ProcessedSheet, Sheet};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Rows shown in the terminal before the table is elided
const MAX_DISPLAY_ROWS: usize = 50;

/// Format a number for display, removing unnecessary decimal places
fn format_number(n: f64) -> String {
    format!("{:.2}", n)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Options for the process command
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub params: BestOfParams,
    /// Optional YAML/JSON report path
    pub report: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
}

fn load_sheet(input: &Path) -> GradeResult<Sheet> {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    check_file_type(&name, None)?;
    GradebookImporter::open(input)?.import()
}

/// Execute the process command
pub fn process(options: ProcessOptions) -> GradeResult<ProcessedSheet> {
    let ProcessOptions {
        input,
        output,
        params,
        report,
        dry_run,
        verbose,
    } = options;

    println!("{}", "📝 Quiz Grader - Best-of Averages".bold().green());
    println!("   Input:  {}", input.display());
    println!(
        "   Range:  columns {}-{} ({}-{}), best {} of each",
        params.start_column,
        params.end_column,
        column_letter(params.start_column as usize - 1),
        column_letter(params.end_column as usize - 1),
        params.best_of
    );
    println!();

    if dry_run {
        println!(
            "{}",
            "📋 DRY RUN MODE - No files will be written\n".yellow()
        );
    }

    if verbose {
        println!("{}", "📖 Reading Excel file...".cyan());
    }

    let sheet = load_sheet(&input)?;

    if verbose {
        println!(
            "   Found {} rows, {} columns\n",
            sheet.row_count(),
            sheet.width()
        );
        println!("{}", "🧮 Calculating best-of averages...".cyan());
    }

    let results = process_sheet(&sheet, &params)?;

    println!("{}", "✅ Results:".bold().green());
    print_results_table(&results);
    println!();

    if dry_run {
        println!("{}", "📋 Dry run complete - no files written".yellow());
        return Ok(results);
    }

    if verbose {
        println!("{}", "💾 Writing Excel file...".cyan());
    }
    ResultsExporter::from_processed(&results).save(&output)?;
    println!("   Excel file: {}", output.display());

    if let Some(report_path) = report {
        let source = input.display().to_string();
        GradeReport::new(source, params, &results).write(&report_path)?;
        println!("   Report:     {}", report_path.display());
    }

    println!();
    println!(
        "{}",
        format!("✅ Graded {} students", results.rows.len())
            .bold()
            .green()
    );

    Ok(results)
}

/// Execute the inspect command - list header columns so a range can be chosen
pub fn inspect(input: PathBuf) -> GradeResult<()> {
    println!("{}", "🔍 Quiz Grader - Inspect".bold().green());
    println!("   File: {}\n", input.display());

    let sheet = load_sheet(&input)?;

    let Some(header) = sheet.header() else {
        println!("{}", "⚠️  First worksheet is empty".yellow());
        return Ok(());
    };

    println!("{}", "📋 Columns:".bold().cyan());
    for index in 0..sheet.width() {
        let name = header.get(index).map(ToString::to_string).unwrap_or_default();
        println!(
            "   {:>3}  {:<3} {}",
            (index + 1).to_string().bright_blue(),
            column_letter(index),
            name
        );
    }
    println!();
    println!(
        "   {} data rows",
        sheet.data_rows().len().to_string().bold()
    );

    Ok(())
}

/// Render the processed table with the appended column highlighted
fn print_results_table(results: &ProcessedSheet) {
    let mut widths: Vec<usize> = results.headers.iter().map(|h| h.chars().count()).collect();
    let rendered: Vec<Vec<String>> = results
        .rows
        .iter()
        .take(MAX_DISPLAY_ROWS)
        .map(|row| {
            let mut cells: Vec<String> = row.original_row.iter().map(ToString::to_string).collect();
            cells.push(format_number(row.best_of_average));
            cells
        })
        .collect();

    for cells in &rendered {
        for (i, cell) in cells.iter().enumerate() {
            if i >= widths.len() {
                widths.push(0);
            }
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let last = results.headers.len().saturating_sub(1);
    let header_line: Vec<String> = results
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let padded = format!("{:<width$}", h, width = widths[i]);
            if i == last {
                padded.bright_blue().bold().to_string()
            } else {
                padded.bold().to_string()
            }
        })
        .collect();
    println!("   {}", header_line.join("  "));

    for cells in &rendered {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let padded = format!("{:<width$}", c, width = widths[i]);
                if i == cells.len() - 1 {
                    padded.bright_blue().bold().to_string()
                } else {
                    padded
                }
            })
            .collect();
        println!("   {}", line.join("  "));
    }

    if results.rows.len() > MAX_DISPLAY_ROWS {
        println!(
            "   {}",
            format!("... {} more rows", results.rows.len() - MAX_DISPLAY_ROWS).dimmed()
        );
    }
}

use clap::{Parser, Subcommand};
use colored::Colorize;
use quiz_grader::cli::{self, ProcessOptions};
use quiz_grader::core::BestOfParams;
use quiz_grader::error::GradeResult;
use quiz_grader::excel::RESULTS_FILE_NAME;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quiz-grader")]
#[command(about = "Average each student's best pop quiz scores in an Excel gradebook.")]
#[command(long_about = "Quiz Grader - Best-of averages for Excel gradebooks

Reads the first worksheet of a .xlsx gradebook (first row = headers), averages
the N highest numeric scores in a column range for every student, and writes
the sheet back out with a 'Best Pop quiz Result' column appended.

COMMANDS:
  process   - Calculate best-of averages and write pop_quiz_results.xlsx
  inspect   - List the header columns with their numbers

EXAMPLES:
  quiz-grader inspect grades.xlsx
  quiz-grader process grades.xlsx --start 6 --end 8 --best-of 2
  quiz-grader process grades.xlsx -o results.xlsx --report results.yaml

For the browser version run 'quiz-grader-server'.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Calculate best-of averages for every student.

Columns are numbered from 1 (column A). The range is inclusive, so
--start 6 --end 8 covers columns F, G and H. Cells that are blank or not
numeric are skipped; a student with no scores in range gets 0. Averages are
rounded to 2 decimal places.

EXAMPLE:
  quiz-grader process grades.xlsx --start 6 --end 8 --best-of 2")]
    /// Calculate best-of averages and write the augmented workbook
    Process {
        /// Path to the gradebook (.xlsx)
        input: PathBuf,

        /// Output Excel file path
        #[arg(short, long, default_value = RESULTS_FILE_NAME)]
        output: PathBuf,

        /// First pop quiz column (1-based)
        #[arg(short, long, default_value_t = BestOfParams::default().start_column as i64, allow_negative_numbers = true)]
        start: i64,

        /// Last pop quiz column (1-based, inclusive)
        #[arg(short, long, default_value_t = BestOfParams::default().end_column as i64, allow_negative_numbers = true)]
        end: i64,

        /// Number of best scores to average
        #[arg(short, long, default_value_t = BestOfParams::default().best_of as i64, allow_negative_numbers = true)]
        best_of: i64,

        /// Also write a report (.yaml or .json)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Show results without writing any file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show verbose processing steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// List header columns with their 1-based numbers
    Inspect {
        /// Path to the gradebook (.xlsx)
        input: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("{} {}", "❌ Error:".bold().red(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> GradeResult<()> {
    match command {
        Commands::Process {
            input,
            output,
            start,
            end,
            best_of,
            report,
            dry_run,
            verbose,
        } => {
            let params = BestOfParams::new(start, end, best_of)?;
            cli::process(ProcessOptions {
                input,
                output,
                params,
                report,
                dry_run,
                verbose,
            })
            .map(|_| ())
        }

        Commands::Inspect { input } => cli::inspect(input),
    }
}

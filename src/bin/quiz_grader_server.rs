//! Quiz Grader server binary
//!
//! Serves the upload page and the process/download endpoints.

use clap::Parser;
use quiz_grader::api::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "quiz-grader-server")]
#[command(version)]
#[command(about = "Quiz Grader - browser upload page for best-of quiz averages")]
#[command(long_about = r#"
Quiz Grader Server

Open the page in a browser, drop a .xlsx gradebook, pick the pop quiz column
range and how many best scores to keep, then download pop_quiz_results.xlsx.

Endpoints:
  - GET  /                 - Upload page
  - POST /api/v1/process   - Grade an upload, return the table as JSON
  - POST /api/v1/download  - Grade an upload, return pop_quiz_results.xlsx
  - GET  /health           - Health check
  - GET  /version          - Server version info

Example usage:
  quiz-grader-server                          # Start on localhost:8080
  quiz-grader-server --host 0.0.0.0 --port 3000

  curl -F file=@grades.xlsx -F start_column=6 -F end_column=8 -F best_of=2 \
    http://localhost:8080/api/v1/download -o pop_quiz_results.xlsx
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "QUIZ_GRADER_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "QUIZ_GRADER_PORT")]
    port: u16,

    /// Largest accepted upload, in megabytes
    #[arg(long, default_value = "10", env = "QUIZ_GRADER_MAX_UPLOAD_MB")]
    max_upload_mb: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        max_upload_bytes: args.max_upload_mb.saturating_mul(1024 * 1024),
    };

    run_server(config).await
}

//! LMS API smoke test - prints every exchange with the backend
//!
//! Run against a live backend; the console trace is the output.

use clap::Parser;
use lms_smoke::common::{config::Config, logging};
use lms_smoke::{ApiClient, Runner};

const USAGE_NOTES: &str = r#"
📋 USAGE INSTRUCTIONS:
1. Make sure your backend is running on http://localhost:8000
2. Run: lms-smoke [BASE_URL]
3. Check the console output for API responses
4. Use the response formats to build your frontend

🔧 SETUP:
- Make sure your backend database is seeded with at least one category
- Ensure all migrations are run

💡 FRONTEND INTEGRATION TIPS:
- Use the response structures shown in console output
- Copy the request formats for your API calls
- Implement error handling based on the status codes shown
- Use the authentication token format: "Bearer <token>"
"#;

#[derive(Parser)]
#[command(name = "lms-smoke", about = "Smoke-test an LMS backend's HTTP API")]
#[command(version, long_about = None)]
struct Cli {
    /// Base address of the API (default: http://localhost:8000/api)
    base_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();
    println!("{USAGE_NOTES}");

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> lms_smoke::Result<()> {
    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url);
    let client = ApiClient::new(&base_url)?;

    let mut runner = Runner::new(client, config.fixtures);
    let summary = runner.run_all().await;
    tracing::debug!(?summary, "Run finished");
    Ok(())
}

use std::io::Write;

use activity_signup::database::seed_repo;

// Prints the built-in seed as JSON, ready to edit and load via ROSTER_SEED_PATH.
fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let catalog = seed_repo::default_catalog();
    let json = match serde_json::to_string_pretty(&catalog) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("seed export failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut out = std::io::stdout().lock();
    if let Err(e) = writeln!(out, "{}", json) {
        eprintln!("seed export failed: {}", e);
        std::process::exit(1);
    }
    tracing::debug!(activities = catalog.len(), "seed exported");
}

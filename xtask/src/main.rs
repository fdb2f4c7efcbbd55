use std::env;
use std::error::Error;

use glob::glob;
use monitor_core::MonitorData;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("validate-data") => validate_data(args.next()),
        Some("help") | None => {
            print_usage();
            Ok(())
        }
        Some(cmd) => {
            eprintln!("Unknown xtask '{cmd}'.");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: cargo xtask validate-data [glob]");
    eprintln!("       cargo xtask help");
}

/// Validates every dataset file in the workspace (or a custom glob) with
/// the same checks the dashboard applies at startup.
fn validate_data(pattern: Option<String>) -> Result<(), Box<dyn Error>> {
    let patterns: Vec<&str> = match &pattern {
        Some(p) => vec![p.as_str()],
        None => vec![
            "monitor_core/src/data/*.json",
            "integration_tests/tests/fixtures/*.json",
        ],
    };

    let mut checked = 0usize;
    let mut failures = 0usize;
    for pattern in patterns {
        for entry in glob(pattern)? {
            let path = entry?;
            checked += 1;
            match MonitorData::from_file(&path) {
                Ok(data) => {
                    let documents: usize = data.mps.iter().map(|mp| mp.documents.len()).sum();
                    println!(
                        "OK   {} ({} MPs, {} documents)",
                        path.display(),
                        data.mps.len(),
                        documents
                    );
                }
                Err(err) => {
                    failures += 1;
                    eprintln!("FAIL {}: {err}", path.display());
                }
            }
        }
    }

    if checked == 0 {
        return Err("no dataset files matched".into());
    }
    if failures > 0 {
        return Err(format!("{failures} dataset file(s) failed validation").into());
    }
    println!("Validated {checked} dataset file(s).");
    Ok(())
}

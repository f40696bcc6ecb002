//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `showcase_core` linkage and the
//!   built-in catalog's integrity.
//! - Keep output deterministic for quick local sanity checks.

use std::process::ExitCode;

fn main() -> ExitCode {
    println!("showcase_core ping={}", showcase_core::ping());
    println!("showcase_core version={}", showcase_core::core_version());

    let catalog = match showcase_core::builtin_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("built-in catalog is invalid: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "tags={}",
        catalog.tag_keys().collect::<Vec<_>>().join(",")
    );
    for (kind, group) in catalog.group_by_type().iter() {
        println!("type={} projects={}", kind.as_str(), group.len());
    }

    ExitCode::SUCCESS
}

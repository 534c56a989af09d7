//! Header derivation demonstration.
//!
//! This example shows the core pattern of csp-policy:
//! 1. Build a site-wide base policy once
//! 2. Derive per-page variants without touching the base
//! 3. Hand the finished header to the response through a `HeaderSink`
//!
//! Run with: `cargo run --example header_flow`

use csp_policy::{Policy, PolicyOptions, VecHeaderSink};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Header Flow Example ===\n");

    let base = Policy::new([
        ("default-src", vec!["https://www.google.com"]),
        ("script-src", vec!["https://www.google.com"]),
    ]);
    println!("Base policy:\n  {}\n", base.header_string());

    println!("--- Scenario 1: Page with an inline widget ---");
    let widget_page = base
        .add_unsafe_inline("script-src")
        .add_list_to_src("img-src", ["data:", "https://img.example.com"]);
    println!("  {}", widget_page.header_string());
    println!("  base unchanged: {}\n", base.header_string());

    println!("--- Scenario 2: Unknown directives are dropped ---");
    let typo = base.add_map([("scirpt-src", vec!["https://cdn.example.com"])]);
    println!("  {}\n", typo.header_string());

    println!("--- Scenario 3: Report-only rollout ---");
    let trial = Policy::with_options(
        [("style-src", "https://fonts.googleapis.com")],
        PolicyOptions::default().report_only(true),
    );
    println!("  {}\n", trial.header_string());

    println!("--- Scenario 4: Submitting to a response ---");
    let response = VecHeaderSink::new();
    for policy in [&widget_page, &trial] {
        if let Err(e) = policy.submit(&response) {
            eprintln!("Sink error: {}", e);
        }
    }
    for header in response.into_vec() {
        println!("  {}", header);
    }
}

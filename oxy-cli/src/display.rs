//! Response printing

use anyhow::Result;
use colored::*;
use oxy_core::domain::response::{Content, ScrapeResponse, ScrapeResult};
use serde_json::json;

/// Print the whole response as pretty JSON, HTTP status included
pub fn print_json(response: &ScrapeResponse) -> Result<()> {
    let value = json!({
        "status_code": response.status_code,
        "status": response.status,
        "results": response.results,
        "job": response.job,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Print a human-readable summary of every result page
pub fn print_response(response: &ScrapeResponse) {
    println!("{} {}", "Status:".bold(), response.status.green());

    if response.results.is_empty() {
        println!("{}", "No results returned.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Found {} result page(s):", response.results.len()).bold()
    );
    println!();
    for result in &response.results {
        print_result(result);
    }
}

fn print_result(result: &ScrapeResult) {
    let page = result
        .page
        .map(|p| p.to_string())
        .unwrap_or_else(|| "?".to_string());
    println!("  {} Page {}", "▸".cyan(), page);

    if let Some(url) = &result.url {
        println!("    URL:     {}", url.dimmed());
    }

    if let Some(code) = result.status_code {
        let code = code.to_string();
        if result.is_success() {
            println!("    Status:  {}", code.green());
        } else {
            println!("    Status:  {}", code.red());
        }
    }

    match &result.content {
        Content::Raw(html) => println!("    Content: {} bytes of HTML", html.len()),
        Content::Parsed(value) => {
            let keys = value
                .as_object()
                .map(|map| map.keys().cloned().collect::<Vec<_>>().join(", "))
                .unwrap_or_default();
            println!("    Content: parsed ({})", keys.dimmed());
        }
    }

    for error in result.errors() {
        println!("    {} {}", "✗".red(), error.red());
    }
    println!();
}

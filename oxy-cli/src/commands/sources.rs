//! Sources command

use colored::*;
use oxy_core::Source;

/// Print every source with the kind of target it takes
pub fn list_sources() {
    println!("{}", "Available sources:".bold());
    for source in Source::ALL {
        let kind = if source.is_url_based() {
            format!("url on *{}*", source.expected_host())
        } else {
            "query".to_string()
        };
        println!("  {} {:<24} {}", "▸".cyan(), source.as_str(), kind.dimmed());
    }
}

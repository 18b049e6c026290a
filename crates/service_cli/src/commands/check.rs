//! Check command implementation
//!
//! Prints the effective configuration after all sources are merged.

use crate::config::CliConfig;
use crate::Result;

/// Renders the effective configuration.
pub fn render(config: &CliConfig) -> String {
    let reference_year = config
        .reference_year
        .map(|year| year.to_string())
        .unwrap_or_else(|| "current".to_string());
    let rows = [
        ("log_level", config.log_level.to_string()),
        (
            "date_format",
            format!("{} ({})", config.date_format.label(), config.date_format),
        ),
        ("csv_delimiter", format!("{:?}", config.csv_delimiter)),
        ("horizon", config.horizon.to_string()),
        ("precision_policy", config.precision_policy.to_string()),
        ("parallel", config.parallel.to_string()),
        ("reference_year", reference_year),
        ("day_count", config.day_count().to_string()),
    ];

    let mut out = String::from("Neutryx configuration\n");
    for (key, value) in rows {
        out.push_str(&format!("  {:<18} {}\n", key, value));
    }
    out
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    print!("{}", render(config));
    Ok(())
}

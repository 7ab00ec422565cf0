//! Console rendering for validation results.

use console::style;

use super::schema::{SectionReport, StatusLevel, StatusLine};
use super::ValidationReport;

pub const NEXT_STEPS: &[&str] = &[
    "Set up your API keys for enabled providers",
    "Configure your database connection",
    "Set up Redis for caching (optional but recommended)",
    "Configure monitoring services (optional)",
    "Run the database migration script",
];

pub fn banner() -> String {
    format!(
        "{}\n{}",
        style("🔍 InterviewSpark Configuration Validator").magenta(),
        style("==========================================").magenta()
    )
}

fn render_status(line: &StatusLine) -> String {
    match line.level {
        StatusLevel::Ok => style(format!("  ✅ {}", line.text)).green().to_string(),
        StatusLevel::Missing => style(format!("  ❌ {}", line.text)).red().to_string(),
        StatusLevel::Disabled => style(format!("  ⚠️  {}", line.text)).yellow().to_string(),
        StatusLevel::Info => style(format!("  ℹ️  {}", line.text)).cyan().to_string(),
    }
}

/// Section heading followed by its status lines.
pub fn render_section(section: &SectionReport) -> String {
    let mut out = format!("\n{}", style(&section.title).blue());
    for line in &section.statuses {
        out.push('\n');
        out.push_str(&render_status(line));
    }
    out
}

pub fn render_summary(report: &ValidationReport) -> String {
    let mut lines = vec![
        format!("\n{}", style("📋 Validation Summary").magenta()),
        style("===================").magenta().to_string(),
    ];

    if report.errors.is_empty() {
        lines.push(style("✅ Configuration is valid!").green().to_string());
    } else {
        lines.push(
            style(format!("❌ Found {} error(s):", report.errors.len()))
                .red()
                .to_string(),
        );
        lines.extend(
            report
                .errors
                .iter()
                .map(|e| style(format!("  • {e}")).red().to_string()),
        );
    }

    if !report.warnings.is_empty() {
        lines.push(
            style(format!("⚠️  Found {} warning(s):", report.warnings.len()))
                .yellow()
                .to_string(),
        );
        lines.extend(
            report
                .warnings
                .iter()
                .map(|w| style(format!("  • {w}")).yellow().to_string()),
        );
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        lines.push(
            style("🎉 Perfect configuration! No issues found.")
                .green()
                .to_string(),
        );
    }

    lines.join("\n")
}

pub fn render_next_steps() -> String {
    let mut out = format!("\n{}", style("💡 Next Steps:").cyan());
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        out.push('\n');
        out.push_str(&style(format!("  {}. {step}", i + 1)).cyan().to_string());
    }
    out
}

/// Prints every section, the summary and the next steps to stdout.
pub fn print(report: &ValidationReport) {
    for section in &report.sections {
        println!("{}", render_section(section));
    }
    println!("{}", render_summary(report));
    println!("{}", render_next_steps());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envfile::ConfigMap;
    use crate::validation::run_all;

    #[test]
    fn test_summary_lists_errors_and_warnings() {
        let env: ConfigMap = [("JWT_SECRET", "short")].into_iter().collect();
        let summary = render_summary(&run_all(&env));
        assert!(summary.contains("Found 2 error(s):"));
        assert!(summary.contains("• JWT_SECRET should be at least 32 characters long"));
        assert!(!summary.contains("Perfect configuration"));
    }

    #[test]
    fn test_perfect_summary() {
        let summary = render_summary(&ValidationReport::default());
        assert!(summary.contains("Configuration is valid!"));
        assert!(summary.contains("Perfect configuration! No issues found."));
    }

    #[test]
    fn test_section_renders_status_lines() {
        let section = SectionReport {
            title: "💾 Validating Caching Configuration...".to_string(),
            statuses: vec![StatusLine::new(StatusLevel::Ok, "Caching: Enabled")],
            ..SectionReport::default()
        };
        let out = render_section(&section);
        assert!(out.contains("Validating Caching Configuration..."));
        assert!(out.contains("✅ Caching: Enabled"));
    }

    #[test]
    fn test_next_steps_numbered() {
        let out = render_next_steps();
        assert!(out.contains("1. Set up your API keys"));
        assert!(out.contains("5. Run the database migration script"));
    }
}

//! Reports command - list the report catalog.

use console::style;

use mpr_core::ReportType;

pub async fn run() -> anyhow::Result<()> {
    println!("{}", style("Supported report types:").bold());
    println!();

    for report_type in ReportType::ALL {
        println!(
            "  {:<16} {:<7} {:<5} {}",
            style(report_type.as_str()).cyan(),
            report_type.layout().as_str(),
            report_type.meat_type(),
            report_type.title()
        );
    }

    println!();
    println!("Use with: mpr parse <file> --report-type <type>");

    Ok(())
}

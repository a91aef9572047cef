//! Handler for the `checks` command.

use crate::analyzer::meshconfig::builtin_checks;
use colored::Colorize;

pub fn handle_checks(detailed: bool) -> crate::Result<()> {
    let checks = builtin_checks();
    println!(
        "\n{} ({} checks)",
        "Built-in security checks".bright_white().bold(),
        checks.len()
    );
    println!("{}", "═".repeat(72).bright_blue());

    for check in checks {
        if detailed {
            println!("  {}", check.name.bright_white());
            println!("    {}", check.description.dimmed());
        } else {
            println!("  {}", check.name);
        }
    }

    Ok(())
}

use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the derived variables as a key/value listing for local runs.
pub fn display_build_vars(entries: &[(&str, &str)]) {
    println!("{}", style("Derived build variables:").bold());
    for (key, value) in entries {
        println!("  {} = {}", key, value);
    }
}

use std::env;
use std::process;

use skinml::{load_theme, MINIMUM_THEME_VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: skinml-validate <theme.xml> [more files...]");
        eprintln!();
        eprintln!("Validates each theme file against the element schema (minimum");
        eprintln!("supported theme version: {}).", MINIMUM_THEME_VERSION);
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in &args[1..] {
        match load_theme(file_path) {
            Ok(theme) => {
                let views = theme.views().count();
                let elements: usize = theme.views().map(|(_, v)| v.elements().count()).sum();
                println!(
                    "✓ {} is valid (version {}, {} view(s), {} element(s))",
                    file_path,
                    theme.version(),
                    views,
                    elements
                );
            }
            Err(e) => {
                eprintln!("✗ {}", e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

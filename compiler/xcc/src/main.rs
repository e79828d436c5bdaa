//! `xcc`: expand `@TypeErased` protocols in source files.

use xc_expand::MacroRegistry;
use xcc::commands::{check_files, expand_files, explain_error, fix_file};
use xcc::{logging, parse_options, DriverError, Options};

fn main() {
    logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let ok = match command {
        "expand" => run(&args[2..], expand_files),
        "check" => run(&args[2..], check_files),
        "fix" => run(&args[2..], fix_file),
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: xcc explain <code>");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("xcc {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn run(
    args: &[String],
    command: fn(&Options, &MacroRegistry) -> Result<bool, DriverError>,
) -> bool {
    let registry = MacroRegistry::with_builtins();
    match parse_options(args).and_then(|options| command(&options, &registry)) {
        Ok(ok) => ok,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, DriverError::MissingInput | DriverError::UnknownOption(_)) {
                eprintln!();
                print_usage();
            }
            false
        }
    }
}

fn print_usage() {
    eprintln!("xcc: expand @TypeErased protocols");
    eprintln!();
    eprintln!("Usage: xcc <command> [options] <files...>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  expand <files>   Print each file with its macros expanded");
    eprintln!("  check <files>    Report expansion diagnostics only");
    eprintln!("  fix <files>      Apply machine-applicable fix-its");
    eprintln!("  explain <code>   Show documentation for a diagnostic code");
    eprintln!("  help             Show this message");
    eprintln!("  version          Show the version");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --format=<text|json>        Diagnostic output format (default: text)");
    eprintln!("  --color=<auto|always|never> Colored diagnostics (default: auto)");
    eprintln!("  --error-limit=<n>           Errors shown per file, 0 for no limit (default: 20)");
    eprintln!("  -w, --write                 fix: rewrite files in place");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  XC_LOG=<filter>   Enable tracing (e.g. XC_LOG=debug, XC_LOG=xc_expand=trace)");
    eprintln!("  XC_LOG_TREE=1     Print tracing as an indented span tree");
}

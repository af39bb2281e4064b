//! Command-line front end for the gowrap engine.
//!
//! Mirrors the classic gofmt surface: with no paths, stdin is formatted to
//! stdout; with paths, each file is formatted independently and either
//! written back in place (`-w`) or streamed to stdout. The first per-file
//! failure reports the path and message on stderr and stops the run with a
//! nonzero exit, leaving later files untouched.

use std::fs;
use std::io::Read;

use gowrap_fmt::{
    format_source, CanonicalFormatter, Gofmt, WrapConfig, MAX_LINE_WIDTH, TAB_WIDTH,
};

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum visual line width.
    pub max_width: usize,
    /// Tab stop width.
    pub tab_width: usize,
    /// Write results back to the source files instead of stdout.
    pub write: bool,
    /// Files to format; empty means stdin to stdout.
    pub paths: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_width: MAX_LINE_WIDTH,
            tab_width: TAB_WIDTH,
            write: false,
            paths: Vec::new(),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Format stdin or the given paths.
    Format(Options),
    /// Print usage and exit successfully.
    Help,
    /// Print the version and exit successfully.
    Version,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();

    let mut index = 0;
    while index < args.len() {
        let arg = args[index].as_str();
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "--version" => return Ok(Command::Version),
            "-w" | "--write" => options.write = true,
            "-m" | "--max-width" => {
                index += 1;
                options.max_width = parse_width(args.get(index).map(String::as_str), arg)?;
            }
            "-t" | "--tab-width" => {
                index += 1;
                options.tab_width = parse_width(args.get(index).map(String::as_str), arg)?;
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--max-width=") {
                    options.max_width = parse_width(Some(value), "--max-width")?;
                } else if let Some(value) = arg.strip_prefix("--tab-width=") {
                    options.tab_width = parse_width(Some(value), "--tab-width")?;
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unknown option: {arg}"));
                } else {
                    options.paths.push(arg.to_string());
                }
            }
        }
        index += 1;
    }

    if options.write && options.paths.is_empty() {
        return Err("cannot use -w when reading from standard input".to_string());
    }

    Ok(Command::Format(options))
}

fn parse_width(value: Option<&str>, flag: &str) -> Result<usize, String> {
    let Some(value) = value else {
        return Err(format!("missing value for {flag}"));
    };
    match value.parse::<usize>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(format!("invalid value for {flag}: {value}")),
    }
}

/// Run the CLI, returning the process exit code.
pub fn run(args: &[String]) -> i32 {
    match parse_args(args) {
        Ok(Command::Help) => {
            print_usage();
            0
        }
        Ok(Command::Version) => {
            println!("gowrap {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Ok(Command::Format(options)) => run_format(&options, &Gofmt),
        Err(message) => {
            eprintln!("gowrap: {message}");
            eprintln!("Run 'gowrap --help' for usage");
            1
        }
    }
}

/// Format stdin or every path in `options`, returning the exit code.
///
/// Files are processed sequentially; the first failure stops the run.
pub fn run_format(options: &Options, formatter: &dyn CanonicalFormatter) -> i32 {
    let config = WrapConfig {
        max_width: options.max_width,
        tab_width: options.tab_width,
    };

    if options.paths.is_empty() {
        let mut source = String::new();
        if let Err(err) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("gowrap: reading stdin: {err}");
            return 1;
        }
        match format_source(&source, &config, formatter) {
            Ok(output) => {
                print!("{output}");
                0
            }
            Err(err) => {
                eprintln!("gowrap: {err}");
                1
            }
        }
    } else {
        for path in &options.paths {
            if let Err(message) = format_file(path, &config, options.write, formatter) {
                eprintln!("gowrap: {path}: {message}");
                return 1;
            }
        }
        0
    }
}

fn format_file(
    path: &str,
    config: &WrapConfig,
    write: bool,
    formatter: &dyn CanonicalFormatter,
) -> Result<(), String> {
    let source = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let output = format_source(&source, config, formatter).map_err(|err| err.to_string())?;

    if write {
        fs::write(path, &output).map_err(|err| err.to_string())?;
    } else {
        print!("{output}");
    }
    Ok(())
}

/// Initialize tracing from the `GOWRAP_LOG` environment variable.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("GOWRAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("gowrap (post-gofmt list wrapping)");
    println!();
    println!("Usage: gowrap [options] [files...]");
    println!();
    println!("With no files, reads Go source from stdin and writes the result");
    println!("to stdout. Each file is formatted independently.");
    println!();
    println!("Options:");
    println!("  -m, --max-width <n>  Maximum line width in columns (default: 120)");
    println!("  -t, --tab-width <n>  Tab stop width in columns (default: 4)");
    println!("  -w, --write          Write result back to the source file");
    println!("  -h, --help           Show this help message");
    println!("      --version        Show version information");
    println!();
    println!("Examples:");
    println!("  gowrap main.go                # Format one file to stdout");
    println!("  gowrap -w main.go util.go     # Rewrite files in place");
    println!("  gowrap -m 100 -t 8 main.go    # Custom width budget");
    println!("  cat main.go | gowrap          # Filter stdin to stdout");
}

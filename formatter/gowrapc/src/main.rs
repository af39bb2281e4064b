//! gowrap CLI
//!
//! Wraps overlong comma-separated lists in gofmt-formatted Go source.

fn main() {
    gowrapc::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(gowrapc::run(&args));
}

use std::env;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use reqfeed::{InputProvider, default_registry};
use tracing_subscriber::EnvFilter;

struct Args {
    path: PathBuf,
    mode: Option<String>,
    limit: Option<u64>,
    count_only: bool,
}

fn print_usage_and_exit() -> ! {
    eprintln!("Usage:");
    eprintln!("  reqfeed_scan <file> [--mode <name>] [--limit <n>] [--count-only]");
    eprintln!();
    eprintln!("Modes: jsonl, yaml, csv, plaintext (inferred from the extension if omitted)");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut path = None;
    let mut mode = None;
    let mut limit = None;
    let mut count_only = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mode" | "-m" => {
                mode = Some(args.next().unwrap_or_else(|| print_usage_and_exit()));
            }
            "--limit" | "-n" => {
                let value = args.next().unwrap_or_else(|| print_usage_and_exit());
                limit = Some(value.parse().unwrap_or_else(|_| print_usage_and_exit()));
            }
            "--count-only" => count_only = true,
            "-h" | "--help" => print_usage_and_exit(),
            _ if path.is_none() && !arg.starts_with('-') => path = Some(PathBuf::from(arg)),
            _ => print_usage_and_exit(),
        }
    }

    let Some(path) = path else {
        print_usage_and_exit();
    };
    Args {
        path,
        mode,
        limit,
        count_only,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A global subscriber may already be installed.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let registry = default_registry();
    let mode = match args.mode {
        Some(mode) => mode,
        None => registry
            .kind_for_path(&args.path)
            .map(|kind| kind.to_string())
            .ok_or("cannot infer the input mode from the file extension; pass --mode")?,
    };

    let provider = InputProvider::with_registry(&args.path, &mode, &registry)?;
    eprintln!("{}: {} record(s)", provider.path().display(), provider.count());
    if args.count_only || args.limit == Some(0) {
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut write_err = None;
    let mut seen = 0u64;

    provider.scan(|request| {
        if let Err(e) = writeln!(out, "{}", request.value()) {
            write_err = Some(e);
            return false;
        }
        seen += 1;
        args.limit.is_none_or(|limit| seen < limit)
    });

    match write_err {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn main() {
    init_tracing();

    if let Err(e) = run(parse_args()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

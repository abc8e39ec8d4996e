//! Cairn demo CLI entry point.

use std::process::ExitCode;

use cairn::demo::{build_demo, PROGRAM};
use cairn::invoker::{parse_tokens, Invoker, EXIT_FAILURE};
use cairn::status::Version;
use cairn::ui::{TerminalConsole, Verbosity};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--quiet`/`--verbose`/`--debug` flags
/// 2. `RUST_LOG` environment variable (if set, and no flag given)
/// 3. Default is WARN
fn init_tracing(verbosity: Verbosity) {
    let filter = if verbosity == Verbosity::Normal {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity.tracing_directive(PROGRAM)))
    } else {
        EnvFilter::new(verbosity.tracing_directive(PROGRAM))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let tokens: Vec<String> = std::env::args().skip(1).collect();

    // Verbosity has to be known before the tree is built, so the global
    // flags are scanned up front; the invoker re-parses the full line.
    let globals = parse_tokens(&tokens).globals;
    init_tracing(globals.verbosity);

    tracing::debug!("starting with args: {:?}", tokens);

    // Collaborators keep their state under ~/.cairn; its contents are theirs.
    if let Err(e) = cairn::config::ensure_config_dir(PROGRAM) {
        tracing::debug!("could not create config dir: {}", e);
    }

    let demo = match build_demo() {
        Ok(demo) => demo,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FAILURE as u8);
        }
    };

    let version: Version = env!("CARGO_PKG_VERSION").parse().unwrap_or_default();
    let invoker = Invoker::new(&demo.tree, &demo.args, &demo.help, version);
    let mut console = TerminalConsole::new(globals.verbosity);

    ExitCode::from(invoker.invoke(&tokens, &mut console) as u8)
}

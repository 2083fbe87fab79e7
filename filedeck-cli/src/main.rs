use clap::Parser;
use filedeck_core::{AllowedRoots, PathGuard};
use filedeck_tools::file_tool_registry;
use std::path::PathBuf;
use std::sync::Arc;

mod server;

#[derive(Parser, Debug)]
#[command(name = "filedeck", version)]
#[command(about = "Filedeck - file-management tool server over stdio")]
struct Cli {
    /// Directories the tools are allowed to operate in (at least one)
    #[arg(required = true, num_args = 1..)]
    allowed_dirs: Vec<PathBuf>,
}

fn main() {
    // Initialize JSON logging once. Logs go to stderr so they never mix
    // with the line protocol on stdout.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init();

    let cli = Cli::parse();

    let roots = match AllowedRoots::new(&cli.allowed_dirs) {
        Ok(roots) => roots,
        Err(e) => {
            tracing::error!(error = %e, "invalid allowed directories");
            std::process::exit(1);
        }
    };
    tracing::info!(roots = roots.len(), "serving file tools");

    let guard = Arc::new(PathGuard::new(roots));
    let registry = file_tool_registry(guard);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = server::serve(&registry, stdin.lock(), stdout.lock()) {
        tracing::error!(error = %e, "serve loop failed");
        std::process::exit(1);
    }
}

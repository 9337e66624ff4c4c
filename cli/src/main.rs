mod error_formatter;
mod formatter;
mod interactive;
mod server;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use formatter::Formatter;
use shunt::{Engine, EngineConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "shunt")]
#[command(about = "Infix arithmetic, shunted to postfix and evaluated.")]
#[command(
    long_about = "shunt converts infix arithmetic such as 2(3+1)^2 into postfix notation and evaluates it on a stack.\nThe CLI evaluates single expressions, runs a prompt loop, processes .calc files in batch, or serves calculations over HTTP."
)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: EngineOptions,
    /// Log conversion and evaluation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct EngineOptions {
    /// Decimal places kept after every operation (0-28)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 8,
        value_parser = clap::value_parser!(u32).range(0..=28)
    )]
    precision: u32,
    /// Keep full double precision instead of rounding
    #[arg(long, global = true)]
    exact: bool,
    /// Reject characters that are not numbers, operators or parentheses
    #[arg(long, global = true)]
    strict: bool,
}

impl EngineOptions {
    fn to_config(&self) -> EngineConfig {
        let config = EngineConfig::new().strict(self.strict);
        if self.exact {
            config.unrounded()
        } else {
            config.with_precision(self.precision)
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print the result
    ///
    /// Converts the expression to postfix, evaluates it and prints `= result`.
    ///
    /// Examples:
    ///   shunt eval "3+4*2"         - prints = 11
    ///   shunt eval -p 2 "1/3"      - prints = 0.33
    ///   shunt eval --trace "2^3^2" - shows every operation
    Eval {
        /// Infix expression, e.g. 2(3+1)^2
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// Output the raw value only (for piping to other tools)
        #[arg(short, long)]
        raw: bool,
        /// Show a table of every operation applied
        #[arg(short, long)]
        trace: bool,
    },
    /// Print the postfix form of an expression
    ///
    /// Tokens are comma separated, e.g. 3+4*2 becomes 3,4,2,*,+
    Convert {
        /// Infix expression to convert
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Read expressions one per line until `q`
    ///
    /// Prompts interactively on a terminal. Piped input is read line by line.
    Repl,
    /// Evaluate every line of a file, or of all .calc files in a directory
    ///
    /// Empty lines and lines starting with # are skipped. Each expression is
    /// printed as `expression = result`. Exits with status 1 if any line fails.
    Batch {
        /// A file, or a directory searched recursively for .calc files
        path: PathBuf,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// API: POST /calculate with {expression, precision?, strict?},
    /// GET /convert?expression=..., GET /health
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(long, default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, matches!(cli.command, Commands::Server { .. }));

    let config = cli.options.to_config();
    let engine = Engine::with_config(config.clone());

    let result = match &cli.command {
        Commands::Eval {
            expression,
            raw,
            trace,
        } => eval_command(&engine, expression, *raw, *trace),
        Commands::Convert { expression } => convert_command(&engine, expression),
        Commands::Repl => interactive::run_repl(&engine),
        Commands::Batch { path } => batch_command(&engine, path),
        Commands::Server { host, port } => server_command(config, host, *port),
    };

    if let Err(e) = result {
        // Render expression errors against their source, otherwise use default
        if let Some(shunt_err) = e.downcast_ref::<shunt::ShuntError>() {
            eprintln!("{}", error_formatter::format_error(shunt_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, serving: bool) {
    let default_filter = match (verbose, serving) {
        (true, _) => "shunt=debug,tower_http=debug",
        (false, true) => "shunt=info,tower_http=info",
        (false, false) => "shunt=warn",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn eval_command(engine: &Engine, expression: &str, raw: bool, trace: bool) -> Result<()> {
    let calculation = engine.calculate(expression)?;
    let formatter = Formatter::default();
    print!("{}", formatter.format_calculation(&calculation, raw, trace));
    Ok(())
}

fn convert_command(engine: &Engine, expression: &str) -> Result<()> {
    let postfix = engine.convert(expression)?;
    let formatter = Formatter::default();
    print!("{}", formatter.format_postfix(&postfix));
    Ok(())
}

fn batch_command(engine: &Engine, path: &Path) -> Result<()> {
    let formatter = Formatter::default();
    let mut failures = 0;

    for file in collect_batch_files(path)? {
        let content = fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        for (index, line) in content.lines().enumerate() {
            let expression = line.trim();
            if expression.is_empty() || expression.starts_with('#') {
                continue;
            }

            match engine.calculate(expression) {
                Ok(calculation) => {
                    println!("{}", formatter.format_batch_line(expression, &calculation))
                }
                Err(err) => {
                    failures += 1;
                    eprintln!("{}:{}: {}", file.display(), index + 1, err);
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} expression(s) failed", failures);
    }
    Ok(())
}

/// A single file as is, or every .calc file under a directory in name order
fn collect_batch_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some("calc") {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        anyhow::bail!("No .calc files found in {}", path.display());
    }
    Ok(files)
}

fn server_command(config: EngineConfig, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(server::http::start_server(config, host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (config, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

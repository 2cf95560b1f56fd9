use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use bigcalc::calculator::{Calculator, Operation, copy_result, run};
use bigcalc::config::Config;
use bigcalc::session::run_session;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bigcalc", version, about = "Big-number calculator with K/M/G/T/P/E shorthand")]
struct Cli {
    /// Expression to evaluate once. Starts an interactive session when omitted.
    expression: Option<String>,

    /// Operation applied to the expression.
    #[arg(long, value_enum)]
    op: Option<Operation>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Copy the result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?config, "loaded config");
    let copy = cli.copy || config.copy_results;

    match cli.expression {
        Some(expression) => {
            let operation = cli.op.unwrap_or(config.default_operation);
            let result = run(operation, &expression);

            if cli.json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", result.display());
            }

            if copy && let Err(e) = copy_result(&result) {
                warn!("{}", e);
            }
        }
        None => {
            if cli.op.is_some() || cli.json {
                warn!("--op and --json only apply to a one-shot expression");
            }
            let stdin = io::stdin();
            if stdin.is_terminal() {
                debug!("starting interactive session");
            }
            let mut calculator = Calculator::new();
            run_session(&mut calculator, stdin.lock(), io::stdout().lock(), copy)?;
        }
    }

    Ok(())
}

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use fxc::log::init_logging;
use fxc::{AppCommand, ui};

/// Convert an amount between currencies using the ECB daily reference rates.
///
/// Rates are fetched once per calendar day and cached on disk; set the
/// SCRIPTING environment variable to print only the bare numeric result.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Amount to convert
    amount: Option<String>,

    /// Currency code to convert from, e.g. USD
    from: Option<String>,

    /// Currency code to convert to, e.g. JPY
    to: Option<String>,

    /// Print the currency codes available in today's feed and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long)]
    config_path: Option<String>,
}

impl From<Cli> for AppCommand {
    fn from(cli: Cli) -> AppCommand {
        if cli.list {
            AppCommand::List
        } else {
            AppCommand::Convert {
                amount: cli.amount,
                from: cli.from,
                to: cli.to,
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            // Clap renders its own diagnostic plus usage; only the exit
            // code is ours.
            let _ = e.print();
            std::process::exit(4);
        }
    };

    init_logging(cli.verbose);

    let config_path = cli.config_path.clone();
    if let Err(e) = fxc::run_command(cli.into(), config_path.as_deref()).await {
        tracing::error!(error = %e, "Run failed");
        eprintln!("{}", ui::error_line(&diagnostic(&e)));
        eprintln!();
        eprintln!("{}", Cli::command().render_long_help());
        std::process::exit(e.exit_code());
    }
}

/// One line naming the failure and every cause down the chain.
fn diagnostic(error: &fxc::error::Error) -> String {
    use std::error::Error as _;
    use std::fmt::Write;

    let mut line = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(line, ": {cause}");
        source = cause.source();
    }
    line
}

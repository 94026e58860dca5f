use clap::{Parser as ClapParser, Subcommand};
use qrius::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "qrius")]
#[command(about = "Qrius - Parse and validate filter expressions like `age gt 18 and name eq 'John'`")]
#[command(version)]
struct Cli {
    /// Log parser diagnostics as they are recorded
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a filter and print its canonical form
    Check {
        /// The filter to parse (reads from stdin if not provided)
        filter: Option<String>,

        /// Print the syntax tree as JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the tokens of a filter
    Tokens {
        /// The filter to tokenize (reads from stdin if not provided)
        filter: Option<String>,

        /// Print tokens as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the filter language reference
    Docs,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            filter,
            json,
            pretty,
        } => run_check(filter, json, pretty),
        Commands::Tokens { filter, json } => read_filter(filter).and_then(|filter| {
            let options = CheckOptions {
                filter,
                json,
                pretty: false,
            };
            println!("{}", cli::execute_tokens(&options)?);
            Ok(())
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "qrius=debug" } else { "qrius=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn read_filter(filter: Option<String>) -> Result<Option<String>, CliError> {
    match filter {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_check(filter: Option<String>, json: bool, pretty: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        filter: read_filter(filter)?,
        json,
        pretty,
    };

    match cli::execute_check(&options)? {
        CheckResult::Empty => println!("no filter"),
        CheckResult::Success(output) => println!("{}", output),
        CheckResult::Diagnostics(output) => {
            println!("{}", output);
            std::process::exit(1);
        }
    }
    Ok(())
}

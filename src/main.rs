/*!
Main binary for jsonlex.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::generate;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{info, warn};
use std::io::stdout;
use std::io::{self};
use std::{
    fs::{self},
    io::{IsTerminal, Read},
    path::PathBuf,
};

use jsonlex::{Token, commands, tokenize, tokenize_strict, utils};

/// Dump the lexical tokens of a JSON document.
#[derive(Parser)]
#[command(name = "jsonlex", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(value_name = "FILE")]
    /// Optional path to JSON file. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// How to print the token stream
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    /// Display count of tokens, EOF included
    #[arg(long, action = ArgAction::SetTrue)]
    count: bool,
    /// Fail on the first illegal token
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,
    /// Do not display the tokens
    #[arg(short, long, action = ArgAction::SetTrue)]
    no_display: bool,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Output formats for the token stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One colorized line per token
    Table,
    /// Pretty-printed JSON array of tokens
    Json,
    /// Single-line JSON array of tokens
    Compact,
}

/// Available subcommands for `jsonlex`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for jsonlex to output directory if specified,
    /// else the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// This parses the command line arguments and tokenizes the input. If no
/// file is given, the input is read from STDIN when it is piped in. The
/// tokens are printed to STDOUT in the requested format.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match args.command {
        Some(Commands::Generate(cmd)) => match cmd {
            GenerateCommand::Shell { shell } => {
                let mut cmd = Args::command();
                generate(shell, &mut cmd, "jsonlex", &mut stdout().lock())
            }
            GenerateCommand::Man { output_dir } => {
                let pages = commands::generate::generate_man_pages(
                    &Args::command(),
                    output_dir,
                )?;
                for page in pages {
                    println!("Generated: {}", page.display());
                }
            }
        },
        None => {
            // Read input content
            let (source, input_content) = if let Some(path) = args.input {
                let content = fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read file {:?}", path)
                })?;
                (path.display().to_string(), content)
            } else {
                if io::stdin().is_terminal() {
                    // No piped input and no file specified
                    let mut cmd = Args::command();
                    return Ok(cmd.print_help()?);
                }
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read STDIN")?;
                ("<stdin>".to_string(), buffer)
            };

            // Tokenize
            let tokens: Vec<Token> = if args.strict {
                tokenize_strict(&input_content)
                    .with_context(|| format!("Failed to tokenize {source}"))?
            } else {
                tokenize(&input_content)
            };
            info!("{source}: {} tokens", tokens.len());

            let illegal = tokens.iter().filter(|t| t.is_illegal()).count();
            if illegal > 0 {
                warn!("{source}: {illegal} illegal token(s)");
            }

            // Display output
            if !args.no_display {
                match args.format {
                    OutputFormat::Table => utils::write_colored_tokens(
                        &mut stdout().lock(),
                        &tokens,
                    )?,
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&tokens)?)
                    }
                    OutputFormat::Compact => {
                        println!("{}", serde_json::to_string(&tokens)?)
                    }
                }
            }

            // Display count
            if args.count {
                println!("Tokens: {}", tokens.len());
            }
        }
    }

    Ok(())
}

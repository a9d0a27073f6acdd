use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use f14_codes::{lookup, symbols, Group};
use f14_dict::{audit, parse, parse_value, DictFormatter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Dictionary and header audit for F14 rule codes")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the symbol table
    List {
        #[arg(long, value_name = "GROUP")]
        group: Option<Group>,

        #[arg(long)]
        json: bool,
    },
    /// Print the symbol a group assigns to each raw value
    Decode {
        group: Group,

        #[arg(required = true, value_name = "VALUE")]
        values: Vec<String>,
    },
    /// Print group and value of each symbol name
    Lookup {
        #[arg(required = true, value_name = "NAME")]
        names: Vec<String>,

        #[arg(long)]
        json: bool,
    },
    /// Audit a C header against the symbol table
    Check {
        header: PathBuf,

        #[arg(long)]
        json: bool,

        /// Do not report table rows the header leaves out
        #[arg(long)]
        partial: bool,
    },
}

fn main() -> Result<ExitCode> {
    let opts = Opts::parse();

    match opts.command {
        Command::List { group, json } => {
            let formatter = DictFormatter::new(json);
            let output = match group {
                Some(group) => formatter.format_symbols(group.symbols())?,
                None => formatter.format_symbols(symbols())?,
            };
            print!("{output}");
            if json {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Decode { group, values } => {
            let formatter = DictFormatter::new(false);
            let mut failed = false;
            for text in &values {
                let Some(value) = parse_value(text).and_then(|v| u8::try_from(v).ok()) else {
                    eprintln!("{text}: not a byte value");
                    failed = true;
                    continue;
                };
                match group.decode(value) {
                    Ok(symbol) => println!("{}", formatter.format_symbol(symbol)?),
                    Err(err) => {
                        eprintln!("{err}");
                        failed = true;
                    }
                }
            }
            Ok(exit_status(failed))
        }
        Command::Lookup { names, json } => {
            let formatter = DictFormatter::new(json);
            let mut failed = false;
            for name in &names {
                match lookup(name) {
                    Ok(symbol) => println!("{}", formatter.format_symbol(symbol)?),
                    Err(err) => {
                        eprintln!("{name}: {err}");
                        failed = true;
                    }
                }
            }
            Ok(exit_status(failed))
        }
        Command::Check {
            header,
            json,
            partial,
        } => {
            let text = fs::read_to_string(&header)
                .with_context(|| format!("reading {}", header.display()))?;
            let definitions =
                parse(&text).with_context(|| format!("parsing {}", header.display()))?;
            if definitions.is_empty() {
                bail!("{} declares no byte constants", header.display());
            }

            let mut report = audit(&definitions)?;
            if partial {
                report.missing.clear();
            }

            print!("{}", DictFormatter::new(json).format_report(&report)?);
            if json {
                println!();
            }
            Ok(exit_status(!report.is_clean()))
        }
    }
}

fn exit_status(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

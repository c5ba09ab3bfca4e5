use std::path::PathBuf;

use clap::{value_parser, Arg, Command};
use painel_cli::{render_options, render_view, ViewArgs};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let records = Arg::new("records")
        .long("records")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Tracker snapshot: JSON array of project records");

    Command::new("painel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Portfolio dashboard data pipeline")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("view")
                .about("Print the full dashboard view as JSON")
                .arg(records.clone())
                .arg(
                    Arg::new("criteria")
                        .long("criteria")
                        .value_parser(value_parser!(PathBuf))
                        .help("Filter criteria file (JSON, or YAML by extension)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("Pipeline config file (JSON, YAML or TOML)"),
                )
                .arg(
                    Arg::new("today")
                        .long("today")
                        .help("Reference day as YYYY-MM-DD instead of the system clock"),
                ),
        )
        .subcommand(
            Command::new("options")
                .about("Print the distinct values of one field")
                .arg(records)
                .arg(
                    Arg::new("field")
                        .long("field")
                        .required(true)
                        .help("Field wire name, e.g. 'Área', or its ASCII identifier"),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("view", args)) => render_view(&ViewArgs {
            records: args.get_one::<PathBuf>("records").map(PathBuf::as_path),
            criteria: args.get_one::<PathBuf>("criteria").map(PathBuf::as_path),
            config: args.get_one::<PathBuf>("config").map(PathBuf::as_path),
            today: args.get_one::<String>("today").map(String::as_str),
        }),
        Some(("options", args)) => match (
            args.get_one::<PathBuf>("records"),
            args.get_one::<String>("field"),
        ) {
            (Some(records), Some(field)) => render_options(records, field),
            _ => Err(anyhow::anyhow!("--records and --field are required")),
        },
        _ => Err(anyhow::anyhow!("unknown command")),
    };

    match result {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}

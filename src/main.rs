use cidr_resolver::config::Config;
use cidr_resolver::output::Format;
use cidr_resolver::{collect_inputs, link_topology, resolve_inputs, Mode};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

/// Resolve IPv4 CIDR blocks to their network and first host addresses.
#[derive(Parser, Debug)]
#[command(name = "cidr-resolver", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// CIDR blocks, e.g. 192.168.1.10/24
    cidrs: Vec<String>,

    /// Read CIDR blocks from a file, one per line ("-" for stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Reject host addresses that wrap or leave the subnet
    #[arg(long)]
    strict: bool,

    /// Output format [env: CIDR_RESOLVER_FORMAT]
    #[arg(short, long, value_enum)]
    format: Option<Format>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill src_ip/dst_ip of topology connections from their subnet
    Links {
        /// Topology JSON file
        topology: String,

        /// Replace addresses that are already set
        #[arg(long)]
        overwrite: bool,

        /// Reject host addresses that wrap or leave the subnet
        #[arg(long)]
        strict: bool,

        /// Write the updated topology here instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
            return Err(format!("Error initializing log4rs: {e}").into());
        }
        return Ok(());
    }
    // No YAML config: warnings to stderr, stdout stays clean for results.
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

fn run(cli: Cli) -> Result<bool, Box<dyn Error>> {
    let config = Config::from_env()?.with_overrides(cli.strict, cli.format);
    init_logging(&config)?;
    log::info!("#Start main() {config:?}");

    match cli.command {
        Some(Command::Links {
            topology,
            overwrite,
            strict,
            out,
        }) => {
            let mode = if strict { Mode::Strict } else { config.mode };
            let report = link_topology(&topology, mode, overwrite, out.as_deref())?;
            eprintln!(
                "assigned={} skipped_existing={} without_subnet={} invalid={}",
                report.assigned, report.skipped_existing, report.without_subnet, report.invalid
            );
            Ok(report.invalid == 0)
        }
        None => {
            let inputs = collect_inputs(&cli.cidrs, cli.input.as_deref())?;
            let (rendered, all_ok) = resolve_inputs(&inputs, &config)?;
            if rendered.ends_with('\n') {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
            Ok(all_ok)
        }
    }
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

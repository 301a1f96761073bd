use clap::{CommandFactory, Parser};
use colored::Colorize;
use lancalc::config::{self, Channel};
use lancalc::output::{self, OutputOptions, SentinelStyle};
use lancalc::system;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;

/// LanCalc: IPv4 subnet calculator
#[derive(Parser, Debug)]
#[command(
    name = "lancalc",
    version,
    about,
    after_help = "Examples:\n  lancalc 192.168.1.1/24\n  lancalc 10.0.0.1/8 --json\n  lancalc --interface"
)]
struct Args {
    /// IPv4 address in CIDR notation (e.g., 192.168.1.1/24)
    address: Option<String>,

    /// Output result in JSON format
    #[arg(short, long)]
    json: bool,

    /// Show detected network interface information
    #[arg(short, long)]
    interface: bool,

    /// Show the public address seen from the internet
    #[arg(short, long, conflicts_with = "interface")]
    external: bool,

    /// Marker for host fields of special ranges (default from LANCALC_SENTINEL, else asterisk)
    #[arg(long, value_enum)]
    sentinel: Option<SentinelStyle>,

    /// Append RFC reference links to special-range comments
    #[arg(long)]
    links: bool,
}

#[tokio::main]
async fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging();
    log::info!("#Start main()");

    let args = Args::parse();
    let json = args.json;
    if let Err(e) = run(args).await {
        match output::format_json_error(&e.to_string()) {
            Ok(body) if json => println!("{body}"),
            _ => eprintln!("{}: {e}", "Error".red()),
        }
        std::process::exit(1);
    }
}

fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let fallback = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    if let Ok(fallback) = fallback {
        let _ = log4rs::init_config(fallback);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let channel = if args.json { Channel::Json } else { Channel::Text };

    if args.interface {
        return print_interface(args.json);
    }
    if args.external {
        let ip = system::fetch_external_ip(&config::external_ip_url(), config::timeout()).await?;
        if args.json {
            println!("{}", output::format_json_external(ip)?);
        } else {
            print!("{}", output::format_text_external(ip));
        }
        return Ok(());
    }

    let Some(address) = args.address else {
        Args::command().print_help()?;
        return Ok(());
    };

    let record = lancalc::compute_from_cidr(&address)?;
    let opts = OutputOptions {
        sentinel: args.sentinel.unwrap_or_else(|| config::sentinel_style(channel)),
        links: args.links,
    };
    if args.json {
        println!("{}", output::format_json(&record, opts)?);
    } else {
        print!("{}", output::format_text(&record, opts));
    }
    Ok(())
}

fn print_interface(json: bool) -> Result<(), Box<dyn Error>> {
    let (ip, prefix) = system::detect_local_interface();
    if json {
        println!("{}", output::format_json_interface(ip, prefix)?);
    } else {
        print!("{}", output::format_text_interface(ip, prefix));
    }
    Ok(())
}

//! dash-render binary
//!
//! Renders a dashboard output from a directory of registry dumps and prints
//! it as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use dash_render::{render, Output, RenderRequest};
use dash_template::Operator;

#[derive(Parser)]
#[command(name = "dash-render")]
#[command(about = "Render an area dashboard from registry dumps", long_about = None)]
struct Cli {
    /// Directory holding the registry and state dumps
    #[arg(short, long, default_value = ".")]
    dump: PathBuf,

    /// YAML strategy options
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved floors, areas and Magic Areas devices
    Model,
    /// Print the home view chips
    Chips,
    /// Print the count expression for a domain
    Count {
        domain: String,
        /// Area slug; the whole home when omitted
        #[arg(short, long)]
        area: Option<String>,
        #[arg(long, default_value = "eq")]
        operator: Operator,
        #[arg(long, default_value = "on")]
        value: String,
    },
}

impl From<Command> for Output {
    fn from(command: Command) -> Self {
        match command {
            Command::Model => Output::Model,
            Command::Chips => Output::Chips,
            Command::Count {
                domain,
                area,
                operator,
                value,
            } => Output::Count {
                domain,
                area,
                operator,
                value,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let request = RenderRequest {
        dump_dir: cli.dump,
        options: cli.options,
        output: cli.command.into(),
    };

    let output = match render(&request).await {
        Ok(output) => output,
        Err(e) => {
            error!("{:#}", e);
            return Err(e);
        }
    };

    let text = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);
    Ok(())
}

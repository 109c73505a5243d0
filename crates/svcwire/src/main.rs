//! svcwire - Entry Point
//!
//! Inspects the linked-in service catalog and checks that a configuration
//! wires up.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `svcwire services` | List every service the catalog can construct |
//! | `svcwire defaults` | List the default service for every role |
//! | `svcwire check` | Build the container from the configuration and list its roles |

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use svcwire::infrastructure::logging::init_logging;
use svcwire::{ConfigLoader, Service, Wiring};

/// Command line interface for svcwire
#[derive(Parser, Debug)]
#[command(name = "svcwire")]
#[command(about = "svcwire - Configuration-driven service container")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available services
    Services,
    /// List default role bindings
    Defaults,
    /// Build the configured container and print every registered role
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let app = loader.load()?;
    init_logging(&app.logging)?;

    match cli.command {
        Command::Services => print!("{}", Wiring::catalog()),
        Command::Defaults => {
            for (role, service) in Wiring::defaults().iter() {
                println!("{role} = {service}");
            }
        }
        Command::Check => {
            let provider = Wiring::from_app_config(&app)?;
            let container = provider.build_container()?;
            for (role, service) in container.services() {
                println!("{role} = {}", service.service_name());
            }
        }
    }
    Ok(())
}

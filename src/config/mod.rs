pub mod toml_config;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fleet-registry")]
#[command(about = "Interactive console for registering ships and assigning cargo units")]
pub struct ConsoleConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

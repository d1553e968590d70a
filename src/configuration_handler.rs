use crate::calendar::DEFAULT_HORIZON_DAYS;
use crate::configuration::Configuration;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(about = "Appointment scheduler for a single-location salon")]
struct Arguments {
    /// Port the HTTP interface listens on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Directory holding the CSV collections; omit to run with an in-memory
    /// example store (nothing persisted)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// How many bookable dates to offer
    #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
    horizon: usize,
}

#[derive(Debug, Clone)]
pub struct ConfigurationHandler {
    arguments: Arguments,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self {
            arguments: Arguments::parse(),
        }
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> u16 {
        self.arguments.port
    }

    fn data_dir(&self) -> Option<PathBuf> {
        self.arguments.data_dir.clone()
    }

    fn horizon_days(&self) -> usize {
        self.arguments.horizon
    }
}

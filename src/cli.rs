use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use touprice::{Catalog, prelude::*};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub catalog: CatalogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the regions in the display order.
    #[clap(name = "regions")]
    Regions,

    /// Show the hourly price tiers of a region in a month.
    #[clap(name = "show")]
    Show(ShowArgs),

    /// List the parts of a day which no time slot covers.
    #[clap(name = "audit")]
    Audit,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Catalog file to use instead of the built-in one.
    #[clap(long = "catalog", env = "TOUPRICE_CATALOG", global = true)]
    pub path: Option<PathBuf>,

    /// Fail when a day is not fully covered by time slots.
    #[clap(long, env = "TOUPRICE_STRICT", global = true)]
    pub strict: bool,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<Catalog> {
        match &self.path {
            Some(path) => Catalog::read_from(path),
            None => Ok(Catalog::builtin()?),
        }
    }
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Region name, exactly as listed by `regions`.
    pub region: String,

    /// Month number, the current month by default.
    #[clap(long, short)]
    pub month: Option<u32>,

    /// Print the hourly series and tier totals as JSON.
    #[clap(long)]
    pub json: bool,
}

impl ShowArgs {
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month.unwrap_or_else(|| Local::now().month())
    }
}

//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

/// Blog server for the company website
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "FOLIO_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FOLIO_PORT")]
    pub port: Option<u16>,

    /// Blog dataset (JSON array); the bundled dataset is used when omitted
    #[arg(short, long, env = "FOLIO_DATA")]
    pub data: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long, env = "FOLIO_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Public site URL used for canonical links and structured data
    #[arg(long, env = "FOLIO_SITE_URL")]
    pub site_url: Option<String>,

    /// Validate the dataset and exit without serving
    #[arg(long)]
    pub check: bool,
}

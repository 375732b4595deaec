use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "docsense-server")]
#[command(author, version, about = "Document text analysis API", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "docsense.yaml")]
    pub config: String,

    /// Listen address
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Try the remote text analytics provider before the local heuristics
    #[arg(long)]
    pub use_remote: bool,

    /// Provider region
    #[arg(long)]
    pub region: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

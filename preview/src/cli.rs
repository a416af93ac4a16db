use clap::Parser;
use std::path::PathBuf;
use themes::RenderContext;

/// Inspect the attributes a gridtint theme resolves to.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "gridtint", version, about)]
pub struct Args {
    /// Configuration file to use instead of the per-user one
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Theme id, overrides the configuration
    #[arg(short, long)]
    pub theme: Option<u32>,

    /// Terminal color count, overrides the configuration
    #[arg(long)]
    pub colors: Option<u32>,

    /// Pretend the terminal has no default colors
    #[arg(long)]
    pub no_default_colors: bool,

    /// Render contexts to show (repeatable); all when omitted
    #[arg(long = "context", value_name = "NAME")]
    pub contexts: Vec<RenderContext>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// List the built-in themes and exit
    #[arg(long)]
    pub list: bool,
}

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jewelai_analytics::Dimension;

#[derive(Parser, Debug)]
#[command(name = "jewelai")]
#[command(about = "Jewelry inventory analytics and reporting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit logs as JSON objects instead of plain text
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print headline KPIs, lifecycle shares and per-type trends
    Summary {
        /// Inventory JSON file (array of items)
        #[arg(short, long)]
        data: PathBuf,

        /// Inventory policy JSON overriding the trend thresholds
        #[arg(long)]
        policy: Option<PathBuf>,
    },

    /// Generate the full inventory report
    Report {
        /// Inventory JSON file (array of items)
        #[arg(short, long)]
        data: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: ReportFormat,

        /// Output file or directory (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Inventory policy JSON overriding the default thresholds
        #[arg(long)]
        policy: Option<PathBuf>,
    },

    /// Print count and value per attribute value
    Distribution {
        /// Inventory JSON file (array of items)
        #[arg(short, long)]
        data: PathBuf,

        /// Attribute to group by
        #[arg(long, value_enum)]
        by: GroupBy,
    },

    /// Ask the generative model for market commentary on a keyword
    Keyword {
        /// Search keyword, e.g. "gold chain"
        keyword: String,

        /// Gemini API key; the command fails without one
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Gemini model name
        #[arg(long, env = "GEMINI_MODEL")]
        model: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value = "60")]
        timeout_secs: u64,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Type,
    Metal,
    Design,
    Location,
}

impl From<GroupBy> for Dimension {
    fn from(g: GroupBy) -> Self {
        match g {
            GroupBy::Type => Dimension::Type,
            GroupBy::Metal => Dimension::Metal,
            GroupBy::Design => Dimension::DesignStyle,
            GroupBy::Location => Dimension::Location,
        }
    }
}

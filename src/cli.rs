use clap::{Parser, Subcommand};
use pagesel::page_range::{ParseOptions, DEFAULT_MAX_PAGES};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagesel")]
#[command(about = "Select and extract PDF pages using page range expressions like 1,3,5-10")]
#[command(version)]
pub struct Cli {
    /// Most distinct pages a single page range may select
    #[arg(
        long,
        global = true,
        env = "PAGESEL_MAX_PAGES",
        default_value_t = DEFAULT_MAX_PAGES,
        value_parser = parse_max_pages
    )]
    pub max_pages: usize,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_pages: self.max_pages,
        }
    }
}

fn parse_max_pages(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Display the page count of a PDF
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Extract page ranges to a new PDF
    #[command(alias = "cat")]
    Extract {
        /// PDF file to extract from
        path: PathBuf,

        /// Page ranges (e.g., "1,3,5-10")
        pages: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Validate page ranges against a page count and print the selection
    Check {
        /// Page ranges (e.g., "2-5,8,12-15")
        pages: String,

        /// Number of pages in the target document
        #[arg(short, long)]
        total: u32,

        /// Accept only a single page number
        #[arg(long)]
        single: bool,
    },
}

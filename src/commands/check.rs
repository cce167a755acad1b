use anyhow::{anyhow, Result};
use pagesel::page_range::{
    parse_page_ranges_with, parse_single_page, PageRangeError, ParseOptions,
};

pub fn run(pages: &str, total: u32, options: &ParseOptions) -> Result<()> {
    let selection = parse_page_ranges_with(pages, total, options)
        .map_err(|e| with_user_message(e.into()))?;

    println!("{}", selection);
    println!("{} of {} page(s) selected", selection.len(), total);

    Ok(())
}

pub fn run_single(page: &str, total: u32) -> Result<()> {
    let page = parse_single_page(page, total)
        .ok_or_else(|| anyhow!("Invalid page number. Please enter a page between 1 and {}.", total))?;

    println!("{}", page);

    Ok(())
}

/// Put the re-prompt text in front of a page range error, leaving other
/// errors alone.
pub fn with_user_message(err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<PageRangeError>() {
        Some(range_err) => {
            let message = range_err.user_message();
            err.context(message)
        }
        None => err,
    }
}

use anyhow::Result;
use pagesel::page_range::ParseOptions;
use pagesel::pdf::{extract_page_ranges, PdfDocument};
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    pages: &str,
    output: Q,
    options: &ParseOptions,
) -> Result<()> {
    let doc = PdfDocument::open(&input)?;

    let selection = extract_page_ranges(&doc, pages, &output, options)
        .map_err(super::check::with_user_message)?;

    println!(
        "Extracted {} page(s) ({}) to {}",
        selection.len(),
        selection,
        output.as_ref().display()
    );

    Ok(())
}

pub mod document;

pub use document::PdfDocument;

use anyhow::Result;
use std::path::Path;

use crate::page_range::{parse_page_ranges_with, PageSelection, ParseOptions};

/// Whatever can report its page count and write a subset of its pages.
pub trait DocumentEngine {
    fn page_count(&self) -> u32;

    fn extract_to(&self, selection: &PageSelection, output: &Path) -> Result<()>;
}

/// Parse `pages` against `engine` and write the selected pages to `output`.
///
/// Nothing is written unless every token in `pages` is valid.
pub fn extract_page_ranges<E, P>(
    engine: &E,
    pages: &str,
    output: P,
    options: &ParseOptions,
) -> Result<PageSelection>
where
    E: DocumentEngine + ?Sized,
    P: AsRef<Path>,
{
    let total_pages = engine.page_count();
    let selection = parse_page_ranges_with(pages, total_pages, options)?;
    engine.extract_to(&selection, output.as_ref())?;
    tracing::info!(
        pages = selection.len(),
        output = %output.as_ref().display(),
        "wrote extracted pages"
    );
    Ok(selection)
}

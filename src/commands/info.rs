use anyhow::Result;
use pagesel::pdf::PdfDocument;
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = PdfDocument::open(&path)?;

    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", doc.page_count());

    Ok(())
}

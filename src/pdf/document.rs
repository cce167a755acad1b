use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

use super::DocumentEngine;
use crate::page_range::PageSelection;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let doc =
            Document::load(&path).with_context(|| format!("Failed to open PDF: {}", path_str))?;
        tracing::debug!(path = %path_str, pages = doc.get_pages().len(), "opened PDF");
        Ok(PdfDocument {
            doc,
            path: path_str,
        })
    }

    /// Wrap a document that is already in memory.
    pub fn from_document(doc: Document) -> Self {
        PdfDocument {
            doc,
            path: String::from("<memory>"),
        }
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy of this document keeping only the selected pages.
    pub fn extract_pages(&self, selection: &PageSelection) -> Result<Document> {
        let total = self.page_count();
        match selection.last() {
            Some(last) if last > total => anyhow::bail!(
                "Page {} is out of range (1-{}) in {}",
                last,
                total,
                self.path
            ),
            Some(_) => {}
            None => anyhow::bail!("No pages specified"),
        }

        let pages_to_delete: Vec<u32> = (1..=total)
            .filter(|page| !selection.contains(*page))
            .collect();

        let mut new_doc = self.doc.clone();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }
        tracing::debug!(
            kept = selection.len(),
            deleted = pages_to_delete.len(),
            "extracted pages"
        );

        Ok(new_doc)
    }

    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}

impl DocumentEngine for PdfDocument {
    fn page_count(&self) -> u32 {
        PdfDocument::page_count(self)
    }

    fn extract_to(&self, selection: &PageSelection, output: &Path) -> Result<()> {
        let mut new_doc = self.extract_pages(selection)?;
        PdfDocument::save(&mut new_doc, output)
    }
}

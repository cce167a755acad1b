use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use pagesel::page_range::{parse_page_ranges_with, ErrorKind, PageRangeError, ParseOptions};
use pagesel::pdf::{extract_page_ranges, PdfDocument};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParsePagesRequest {
    #[schemars(description = "Page ranges (e.g., '1,3,5-10')")]
    pub pages: String,
    #[schemars(description = "Number of pages in the target document")]
    pub total_pages: u32,
    #[schemars(description = "Most distinct pages the ranges may select; capped at the server setting")]
    #[serde(default)]
    pub max_pages: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfExtractRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Page ranges (e.g., '1,3,5-10')")]
    pub pages: String,
    #[schemars(description = "Output file path")]
    pub output: String,
    #[schemars(description = "Most distinct pages the ranges may select; capped at the server setting")]
    #[serde(default)]
    pub max_pages: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct PageServer {
    options: ParseOptions,
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PageServer {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            tool_router: Self::tool_router(),
        }
    }

    /// Requests may lower the server's page cap but never raise it.
    fn options_for(&self, max_pages: Option<usize>) -> ParseOptions {
        ParseOptions {
            max_pages: max_pages.map_or(self.options.max_pages, |m| m.min(self.options.max_pages)),
        }
    }
}

#[tool_router]
impl PageServer {
    #[tool(description = "Get the page count of a PDF")]
    fn pdf_info(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        match PdfDocument::open(&path) {
            Ok(doc) => {
                let result = PdfInfoResult {
                    page_count: doc.page_count(),
                    path,
                };
                serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Validate page ranges like '1,3,5-10' against a page count and return the sorted, deduplicated pages")]
    fn parse_pages(&self, Parameters(req): Parameters<ParsePagesRequest>) -> String {
        let options = self.options_for(req.max_pages);
        let result = match parse_page_ranges_with(&req.pages, req.total_pages, &options) {
            Ok(selection) => ParsePagesResult::Ok {
                canonical: selection.to_string(),
                count: selection.len(),
                pages: selection.into_vec(),
            },
            Err(e) => ParsePagesResult::from(e),
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(description = "Extract pages selected by ranges like '1,3,5-10' from a PDF and save them to a new file")]
    fn pdf_extract(&self, Parameters(req): Parameters<PdfExtractRequest>) -> String {
        let doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let options = self.options_for(req.max_pages);

        let selection = match extract_page_ranges(&doc, &req.pages, &req.output, &options) {
            Ok(s) => s,
            Err(e) => {
                return match e.downcast::<PageRangeError>() {
                    Ok(range_err) => serde_json::to_string_pretty(&ParsePagesResult::from(range_err))
                        .unwrap_or_else(|e| format!("Error: {}", e)),
                    Err(e) => format!("Error: {}", e),
                };
            }
        };

        let result = ExtractResult {
            output_path: req.output,
            page_count: selection.len() as u32,
            pages: selection.to_string(),
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct PdfInfoResult {
    pub path: String,
    pub page_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParsePagesResult {
    Ok {
        pages: Vec<u32>,
        canonical: String,
        count: usize,
    },
    Error {
        kind: ErrorKind,
        token: Option<String>,
        reason: String,
        message: String,
    },
}

impl From<PageRangeError> for ParsePagesResult {
    fn from(e: PageRangeError) -> Self {
        ParsePagesResult::Error {
            kind: e.kind(),
            token: e.token().map(str::to_string),
            reason: e.to_string(),
            message: e.user_message().to_string(),
        }
    }
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ExtractResult {
    pub output_path: String,
    pub page_count: u32,
    pub pages: String,
}

impl ServerHandler for PageServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF page selection tools. Page ranges are comma-separated page numbers and \
                 inclusive intervals such as '1,3,5-10'. Use pdf_info to get the page count, \
                 parse_pages to validate a range expression, and pdf_extract to write the \
                 selected pages to a new PDF."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server(options: ParseOptions) -> Result<()> {
    let server = PageServer::new(options);
    tracing::info!(max_pages = options.max_pages, "starting MCP server on stdio");

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}

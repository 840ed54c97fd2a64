/*
 * The request dispatcher: the engine-side endpoint of the host's UI channel.
 * It consumes the tagged request messages, runs the extraction through the
 * injected `StructureExtractionOperations`, logs the report's warnings, and
 * produces the tagged response messages the host renders or downloads.
 */
use crate::core::{ExtractionReport, SceneDocument, StructureExtractionOperations, extractor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed download name for exported structure sheets.
pub const EXPORT_FILENAME: &str = "estructura.csv";

/*
 * A request from the host UI channel. `export` asks for a downloadable CSV
 * payload, `preview` for the same computed string without a download.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HostRequest {
    Export {
        #[serde(rename = "pageId")]
        page_id: String,
    },
    Preview {
        #[serde(rename = "pageId")]
        page_id: String,
    },
}

/// The engine's answer, ready to be posted back over the UI channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HostResponse {
    Download { content: String, filename: String },
    Preview { content: String },
}

pub struct ExtractorAppLogic {
    extractor: Arc<dyn StructureExtractionOperations>,
}

impl ExtractorAppLogic {
    pub fn new(extractor: Arc<dyn StructureExtractionOperations>) -> Self {
        ExtractorAppLogic { extractor }
    }

    /*
     * Handles one request against the given document. Both request kinds
     * run the same extraction; they differ only in the response wrapping.
     * Warnings never fail a request; they are logged so authoring mistakes
     * stay visible.
     */
    pub fn handle_request(
        &self,
        document: &SceneDocument,
        request: HostRequest,
    ) -> extractor::Result<HostResponse> {
        match request {
            HostRequest::Export { page_id } => {
                log::debug!("ExtractorAppLogic: Export requested for page '{page_id}'.");
                let report = self.extractor.extract_page(document, &page_id)?;
                Self::log_warnings(&report);
                Ok(HostResponse::Download {
                    content: report.csv,
                    filename: EXPORT_FILENAME.to_string(),
                })
            }
            HostRequest::Preview { page_id } => {
                log::debug!("ExtractorAppLogic: Preview requested for page '{page_id}'.");
                let report = self.extractor.extract_page(document, &page_id)?;
                Self::log_warnings(&report);
                Ok(HostResponse::Preview {
                    content: report.csv,
                })
            }
        }
    }

    fn log_warnings(report: &ExtractionReport) {
        for warning in &report.warnings {
            log::warn!("ExtractorAppLogic: {warning}");
        }
    }
}

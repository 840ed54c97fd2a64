use super::handler::{EXPORT_FILENAME, ExtractorAppLogic, HostRequest, HostResponse};
use crate::core::{
    CoreStructureExtractor, ExtractError, ExtractionReport, NodeKind, SceneDocument, SceneNode,
    StructureExtractionOperations, extractor,
};
use std::sync::{Arc, Mutex};

/*
 * Unit tests for `ExtractorAppLogic`. A mock extractor with canned results
 * isolates the dispatching behavior; one end-to-end test wires the real
 * `CoreStructureExtractor` to check the full request-to-response path.
 */

struct MockStructureExtractor {
    extract_result: Mutex<extractor::Result<ExtractionReport>>,
    requested_page_ids: Mutex<Vec<String>>,
}

impl MockStructureExtractor {
    fn new(result: extractor::Result<ExtractionReport>) -> Self {
        MockStructureExtractor {
            extract_result: Mutex::new(result),
            requested_page_ids: Mutex::new(Vec::new()),
        }
    }

    fn requested_page_ids(&self) -> Vec<String> {
        self.requested_page_ids.lock().unwrap().clone()
    }
}

impl StructureExtractionOperations for MockStructureExtractor {
    fn extract_page(
        &self,
        _document: &SceneDocument,
        page_id: &str,
    ) -> extractor::Result<ExtractionReport> {
        self.requested_page_ids
            .lock()
            .unwrap()
            .push(page_id.to_string());
        // ExtractError is not Clone; rebuild the canned value.
        match &*self.extract_result.lock().unwrap() {
            Ok(report) => Ok(report.clone()),
            Err(ExtractError::PageNotFound(id)) => Err(ExtractError::PageNotFound(id.clone())),
        }
    }
}

fn empty_document() -> SceneDocument {
    SceneDocument {
        name: "doc".to_string(),
        children: Vec::new(),
    }
}

fn canned_report(csv: &str) -> ExtractionReport {
    ExtractionReport {
        csv: csv.to_string(),
        warnings: Vec::new(),
    }
}

#[test]
fn test_export_wraps_csv_in_download_response() {
    let mock = Arc::new(MockStructureExtractor::new(Ok(canned_report("a,b\n1,2\n"))));
    let logic = ExtractorAppLogic::new(mock.clone());

    let response = logic
        .handle_request(
            &empty_document(),
            HostRequest::Export {
                page_id: "P1".to_string(),
            },
        )
        .unwrap();

    assert_eq!(
        response,
        HostResponse::Download {
            content: "a,b\n1,2\n".to_string(),
            filename: EXPORT_FILENAME.to_string(),
        }
    );
    assert_eq!(mock.requested_page_ids(), vec!["P1".to_string()]);
}

#[test]
fn test_preview_returns_content_only() {
    let mock = Arc::new(MockStructureExtractor::new(Ok(canned_report("a,b\n"))));
    let logic = ExtractorAppLogic::new(mock.clone());

    let response = logic
        .handle_request(
            &empty_document(),
            HostRequest::Preview {
                page_id: "P2".to_string(),
            },
        )
        .unwrap();

    assert_eq!(
        response,
        HostResponse::Preview {
            content: "a,b\n".to_string()
        }
    );
    assert_eq!(mock.requested_page_ids(), vec!["P2".to_string()]);
}

#[test]
fn test_missing_page_error_propagates() {
    let mock = Arc::new(MockStructureExtractor::new(Err(ExtractError::PageNotFound(
        "P9".to_string(),
    ))));
    let logic = ExtractorAppLogic::new(mock);

    let result = logic.handle_request(
        &empty_document(),
        HostRequest::Export {
            page_id: "P9".to_string(),
        },
    );
    match result {
        Err(ExtractError::PageNotFound(page_id)) => assert_eq!(page_id, "P9"),
        other => panic!("Expected PageNotFound, got {other:?}"),
    }
}

#[test]
fn test_request_wire_format() {
    let request: HostRequest = serde_json::from_str(r#"{"kind":"export","pageId":"P1"}"#).unwrap();
    assert_eq!(
        request,
        HostRequest::Export {
            page_id: "P1".to_string()
        }
    );

    let request: HostRequest = serde_json::from_str(r#"{"kind":"preview","pageId":"P2"}"#).unwrap();
    assert_eq!(
        request,
        HostRequest::Preview {
            page_id: "P2".to_string()
        }
    );
}

#[test]
fn test_response_wire_format() {
    let response = HostResponse::Download {
        content: "csv".to_string(),
        filename: EXPORT_FILENAME.to_string(),
    };
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"kind":"download","content":"csv","filename":"estructura.csv"}"#
    );

    let response = HostResponse::Preview {
        content: "csv".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"kind":"preview","content":"csv"}"#
    );
}

#[test]
fn test_end_to_end_with_core_extractor() {
    let document = SceneDocument {
        name: "doc".to_string(),
        children: vec![SceneNode {
            id: "P1".to_string(),
            name: "Page 1".to_string(),
            kind: NodeKind::Page,
            children: vec![SceneNode {
                id: String::new(),
                name: "001_MX_300x250".to_string(),
                kind: NodeKind::Frame,
                children: vec![SceneNode::new("", "background__extract", NodeKind::Rectangle)],
            }],
        }],
    };
    let logic = ExtractorAppLogic::new(Arc::new(CoreStructureExtractor::new()));

    let response = logic
        .handle_request(
            &document,
            HostRequest::Export {
                page_id: "P1".to_string(),
            },
        )
        .unwrap();

    match response {
        HostResponse::Download { content, filename } => {
            assert_eq!(filename, EXPORT_FILENAME);
            assert_eq!(
                content,
                "ID,Pais,Tamaño,Background,H1,Oferta 1,Oferta 2,Precio,CTA,Sello\n\
                 001,MX,300x250,background__extract,,,,,,\n"
            );
        }
        other => panic!("Expected a download response, got {other:?}"),
    }
}

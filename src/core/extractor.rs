/*
 * The extraction orchestrator. Given a document and a page id, it walks the
 * page's top-level containers, builds one record per container (identifier
 * from the container's own name, fields from classifying the flattened
 * descendants), and encodes the result as CSV.
 *
 * It is defined behind a trait (`StructureExtractionOperations`) so the
 * request dispatcher and its tests can inject mock implementations, with
 * `CoreStructureExtractor` as the concrete engine.
 *
 * Extraction favors best-effort degraded output: one malformed container
 * never aborts the batch. Everything that used to be silent degradation is
 * surfaced instead, either as a hard error (missing page) or as entries in
 * the report's warnings list.
 */
use super::collector::{ExtractRecord, SlotOutcome};
use super::csv_encoder;
use super::identifier::ContainerIdentifier;
use super::scene_tree::{SceneDocument, SceneNode};
use super::vocabulary::{self, HeaderField, LeafClassification};
use std::fmt;

#[derive(Debug)]
pub enum ExtractError {
    PageNotFound(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::PageNotFound(page_id) => {
                write!(f, "Page not found in document: {page_id}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

pub type Result<T> = std::result::Result<T, ExtractError>;

/*
 * Structured diagnostics for the tolerated degradations of one extraction
 * run. None of these abort the batch; they exist so authoring mistakes stop
 * masking themselves in silently-empty or silently-merged cells.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionWarning {
    /// Container name has fewer than three `_`-separated segments.
    MalformedContainerName { container: String },
    /// Element carries the extract tag but matches no vocabulary entry.
    UnrecognizedTaggedElement { container: String, element: String },
    /// Collision on a header that concatenates: the cell is now multi-line.
    RepeatedField { container: String, field: HeaderField },
    /// "Oferta 1" collision: the first value was moved to the continuation
    /// slot, which has no output column.
    DisplacedOfferValue { container: String },
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionWarning::MalformedContainerName { container } => write!(
                f,
                "Container '{container}' has fewer than 3 '_'-separated name segments; missing identifier fields are left empty"
            ),
            ExtractionWarning::UnrecognizedTaggedElement { container, element } => write!(
                f,
                "Element '{element}' in container '{container}' carries the extract tag but matches no known header"
            ),
            ExtractionWarning::RepeatedField { container, field } => write!(
                f,
                "Container '{container}' has multiple '{field}' elements; their names were joined into one multi-line cell"
            ),
            ExtractionWarning::DisplacedOfferValue { container } => write!(
                f,
                "Container '{container}' has a repeated 'Oferta 1' element; the first value was displaced to the continuation slot and will not be printed"
            ),
        }
    }
}

/// A completed extraction: the CSV text plus everything worth telling the
/// author about.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionReport {
    pub csv: String,
    pub warnings: Vec<ExtractionWarning>,
}

pub trait StructureExtractionOperations: Send + Sync {
    /*
     * Builds the CSV for the page with id `page_id`. Fails only when the
     * page cannot be located; every other irregularity degrades gracefully
     * and is reported in the returned warnings list.
     */
    fn extract_page(&self, document: &SceneDocument, page_id: &str) -> Result<ExtractionReport>;
}

pub struct CoreStructureExtractor {}

impl CoreStructureExtractor {
    pub fn new() -> Self {
        CoreStructureExtractor {}
    }

    /*
     * Builds one record from a container: parses the positional identifier
     * from the container's own name, then folds every flattened descendant
     * through the classifier into the field slots.
     */
    fn collect_container(
        container: &SceneNode,
        warnings: &mut Vec<ExtractionWarning>,
    ) -> ExtractRecord {
        if container.name.split('_').count() < 3 {
            warnings.push(ExtractionWarning::MalformedContainerName {
                container: container.name.clone(),
            });
        }
        let mut record = ExtractRecord::new(ContainerIdentifier::parse(&container.name));

        for leaf in container.descendants() {
            match vocabulary::classify_element_name(&leaf.name) {
                LeafClassification::Field(field) => {
                    match record.fields.record(field, &leaf.name) {
                        SlotOutcome::Stored => {}
                        SlotOutcome::Promoted => {
                            warnings.push(ExtractionWarning::DisplacedOfferValue {
                                container: container.name.clone(),
                            });
                        }
                        SlotOutcome::Appended => {
                            warnings.push(ExtractionWarning::RepeatedField {
                                container: container.name.clone(),
                                field,
                            });
                        }
                    }
                }
                LeafClassification::Untagged => {}
                LeafClassification::Unrecognized => {
                    warnings.push(ExtractionWarning::UnrecognizedTaggedElement {
                        container: container.name.clone(),
                        element: leaf.name.clone(),
                    });
                }
            }
        }
        record
    }
}

impl Default for CoreStructureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureExtractionOperations for CoreStructureExtractor {
    fn extract_page(&self, document: &SceneDocument, page_id: &str) -> Result<ExtractionReport> {
        log::trace!("CoreStructureExtractor: Extracting structure for page '{page_id}'.");
        let page = document
            .find_page(page_id)
            .ok_or_else(|| ExtractError::PageNotFound(page_id.to_string()))?;

        let mut warnings = Vec::new();
        let mut records = Vec::new();
        // Only direct frame children of the page become rows; nested frames
        // are reached by the flattener inside each container.
        for container in page.children.iter().filter(|node| node.kind.is_container()) {
            records.push(Self::collect_container(container, &mut warnings));
        }

        let csv = csv_encoder::encode_records(&records);
        log::debug!(
            "CoreStructureExtractor: Encoded {} container(s) from page '{}' with {} warning(s).",
            records.len(),
            page.name,
            warnings.len()
        );
        Ok(ExtractionReport { csv, warnings })
    }
}

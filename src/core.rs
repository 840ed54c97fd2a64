/*
 * This module consolidates the core, host-agnostic logic of the extractor.
 * It re-exports the scene document model, the identifier parser, the header
 * vocabulary and classifier, the field collector, the CSV encoder, and the
 * extraction orchestrator (behind the `StructureExtractionOperations`
 * abstraction), plus the configuration layer used by the CLI.
 */
pub mod collector;
pub mod config;
pub mod csv_encoder;
pub mod extractor;
pub mod identifier;
pub mod path_utils;
pub mod scene_tree;
pub mod vocabulary;

// Re-export the scene document model
pub use scene_tree::{NodeKind, SceneDocument, SceneNode};

// Re-export identifier and field collection items
pub use collector::{ExtractRecord, FieldSlots, SlotOutcome};
pub use identifier::ContainerIdentifier;
pub use vocabulary::{EXTRACT_TAG, HeaderField, LeafClassification, classify_element_name};

// Re-export encoder and orchestrator items
pub use csv_encoder::encode_records;
pub use extractor::{
    CoreStructureExtractor, ExtractError, ExtractionReport, ExtractionWarning,
    StructureExtractionOperations,
};

// Re-export config related items
pub use config::{ConfigManagerOperations, CoreConfigManager};

#[cfg(test)]
pub use config::ConfigError;

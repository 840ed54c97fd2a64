/*
 * CLI entry point. Stands in for the host's UI channel: loads a scene
 * document from JSON, builds one export/preview request, dispatches it
 * through the app logic, and writes the downloadable payload (or prints the
 * preview). The last successfully opened document is remembered so the
 * document argument can be omitted on subsequent runs.
 */
mod app_logic;
mod core;

use crate::app_logic::{ExtractorAppLogic, HostRequest, HostResponse};
use crate::core::{
    ConfigManagerOperations, CoreConfigManager, CoreStructureExtractor, SceneDocument,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, SimpleLogger, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::{env, fs};
use time::macros::format_description;

const APP_NAME: &str = "StructureExtractor";
const USAGE: &str = "usage: structure_extractor [document.json] <export|preview> <page-id>";

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            log::error!("StructureExtractor: {message}");
            eprintln!("{message}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let config = ConfigBuilder::new()
        .set_time_format_custom(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        ))
        .build();
    if TermLogger::init(
        LevelFilter::Info,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        // No terminal available; fall back to the plain logger.
        let _ = SimpleLogger::init(LevelFilter::Info, simplelog::Config::default());
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let (document_arg, mode, page_id) = match args {
        [mode, page_id] => (None, mode.as_str(), page_id.as_str()),
        [document, mode, page_id] => (
            Some(PathBuf::from(document)),
            mode.as_str(),
            page_id.as_str(),
        ),
        _ => return Err("Expected a mode and a page id".to_string()),
    };

    let request = match mode {
        "export" => HostRequest::Export {
            page_id: page_id.to_string(),
        },
        "preview" => HostRequest::Preview {
            page_id: page_id.to_string(),
        },
        other => return Err(format!("Unknown mode '{other}', expected 'export' or 'preview'")),
    };

    let config_manager = CoreConfigManager::new();
    let document_path = match document_arg {
        Some(path) => path,
        None => {
            let remembered = match config_manager.load_last_document_path(APP_NAME) {
                Ok(remembered) => remembered,
                Err(e) => {
                    log::warn!("StructureExtractor: Could not read remembered document path: {e}");
                    None
                }
            };
            remembered.ok_or_else(|| {
                "No document given and no previously opened document remembered".to_string()
            })?
        }
    };

    let raw = fs::read_to_string(&document_path)
        .map_err(|e| format!("Could not read document {}: {e}", document_path.display()))?;
    let document: SceneDocument = serde_json::from_str(&raw)
        .map_err(|e| format!("Could not parse document {}: {e}", document_path.display()))?;
    log::info!(
        "StructureExtractor: Loaded document '{}' from {}.",
        document.name,
        document_path.display()
    );

    if let Err(e) = config_manager.save_last_document_path(APP_NAME, Some(&document_path)) {
        log::warn!("StructureExtractor: Could not remember document path: {e}");
    }

    let logic = ExtractorAppLogic::new(Arc::new(CoreStructureExtractor::new()));
    let response = logic
        .handle_request(&document, request)
        .map_err(|e| e.to_string())?;

    match response {
        HostResponse::Download { content, filename } => {
            fs::write(&filename, content).map_err(|e| format!("Could not write {filename}: {e}"))?;
            log::info!("StructureExtractor: Wrote {filename}.");
            println!("Wrote {filename}");
        }
        HostResponse::Preview { content } => {
            print!("{content}");
        }
    }
    Ok(())
}

/*
 * This module provides the application logic layer: the host request and
 * response message types plus `ExtractorAppLogic`, which dispatches requests
 * to the extraction engine. Unit tests live in `handler_tests.rs`.
 */
pub mod handler;

#[cfg(test)]
mod handler_tests;

pub use handler::{EXPORT_FILENAME, ExtractorAppLogic, HostRequest, HostResponse};

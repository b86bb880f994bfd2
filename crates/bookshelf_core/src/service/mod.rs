//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep the interactive shell decoupled from storage details.

pub mod catalog_service;

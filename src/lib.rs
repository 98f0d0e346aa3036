//! Library surface for medkb-assistant.
//!
//! Capture pipeline: notes -> LLM or NER extraction -> human selection ->
//! embedding -> vector-store upsert. Exploration pipeline: query text ->
//! embedding -> nearest neighbours -> force-directed graph document.

pub mod api;
pub mod cli;
pub mod config;
pub mod graph;
pub mod logging;
pub mod nlp;
pub mod session;
pub mod store;

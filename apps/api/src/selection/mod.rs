// Team selection: prompt building, completion, extraction and the append-only record log.
// All generation calls go through llm_client.

pub mod extractor;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod store;
pub mod transcript;

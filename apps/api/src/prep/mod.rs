// Job prep pipeline: resume ingestion, prompt assembly, and the three-call
// generation run behind POST /api/prep.
// All LLM calls go through the gateway traits — no direct client calls here.

pub mod error;
pub mod handlers;
pub mod ingest;
pub mod orchestrator;
pub mod prompts;
pub mod session;

#[cfg(test)]
pub mod testing;

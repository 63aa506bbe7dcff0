//! Chat pipeline: validation, transcript assembly, the two completion calls,
//! and response shaping.

pub mod followups;
pub mod handlers;
pub mod knowledge;
pub mod orchestrator;
pub mod prompts;

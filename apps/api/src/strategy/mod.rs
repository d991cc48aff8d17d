//! Strategy generation — catalog lookup, prompt assembly, and the LLM call.

pub mod generator;
pub mod handlers;
pub mod prompts;

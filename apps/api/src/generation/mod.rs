// Fallback generation: reference sampling → prompt → LLM → numbered-list parsing.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;

// Fortune generation: category table, request/response models, prompt assembly, handlers.
// All provider calls go through llm_client. Nothing here calls OpenAI directly.

pub mod category;
pub mod handlers;
pub mod models;
pub mod prompts;

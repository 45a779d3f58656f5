//! Prompt templates and the built-in pipeline prompts

mod builtin;
mod template;

pub use builtin::{
    extraction_prompt, format_context, qa_prompt, summary_prompt, EXTRACTION_SYSTEM, QA_SYSTEM,
    SUMMARY_SYSTEM,
};
pub use template::{PromptTemplate, PromptVariable, TemplateError};

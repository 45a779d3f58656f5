//! Prompts sent by the QA, extraction and summary stages

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{PromptTemplate, TemplateError};
use crate::domain::ingestion::Passage;

pub const QA_SYSTEM: &str = r#"You answer questions using ONLY the provided context. If the answer is not in the context, say "I don't know" or that the information is not in the document.
Cite which chunk(s) support your answer (e.g. "Chunk 1").
At the end, on a new line, write your confidence as a number from 0.0 to 1.0, e.g. "Confidence: 0.85"."#;

static QA_USER: Lazy<PromptTemplate> = Lazy::new(|| {
    PromptTemplate::parse(
        r#"Context (chunks from the document):

${var:context}

Question: ${var:question}

Answer based only on the context above. End with "Confidence: X.XX"."#,
    )
});

pub const EXTRACTION_SYSTEM: &str = r#"You extract structured data from the provided document chunks. Output valid JSON only.
For each field you are uncertain about, include an "uncertain_fields" array listing those field names.
If a field is missing or unclear, use null for its value and add it to "uncertain_fields"."#;

static EXTRACTION_USER: Lazy<PromptTemplate> = Lazy::new(|| {
    PromptTemplate::parse(
        r#"Context (chunks from the document):

${var:context}

Extract the following fields into a JSON object. Use the exact field names. Add an "uncertain_fields" array if any value is uncertain.

Schema / fields:
${var:schema_desc}

Output only one JSON object with the field names as keys and "uncertain_fields" as an optional array of strings."#,
    )
});

pub const SUMMARY_SYSTEM: &str = "You write a very brief human-readable summary (2-4 sentences) of the extracted contract data. Focus on the key parties, amounts, dates, and main terms. Be concise.";

static SUMMARY_USER: Lazy<PromptTemplate> = Lazy::new(|| {
    PromptTemplate::parse(
        r#"Extracted contract data:

${var:record}

Write a short summary for a human reviewer."#,
    )
});

/// Format passages as numbered context blocks: `[Chunk 1]\n<content>`
pub fn format_context(passages: &[Passage]) -> String {
    passages
        .iter()
        .enumerate()
        .map(|(i, p)| format!("[Chunk {}]\n{}", i + 1, p.content()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// User message for question answering
pub fn qa_prompt(context: &str, question: &str) -> Result<String, TemplateError> {
    QA_USER.render(&HashMap::from([
        ("context", context.to_string()),
        ("question", question.to_string()),
    ]))
}

/// User message for record extraction
pub fn extraction_prompt(context: &str, schema_desc: &str) -> Result<String, TemplateError> {
    EXTRACTION_USER.render(&HashMap::from([
        ("context", context.to_string()),
        ("schema_desc", schema_desc.to_string()),
    ]))
}

/// User message for summarising an extracted record
pub fn summary_prompt(record: &str) -> Result<String, TemplateError> {
    SUMMARY_USER.render(&HashMap::from([("record", record.to_string())]))
}

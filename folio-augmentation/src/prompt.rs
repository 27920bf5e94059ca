//! Context block formatting and prompt assembly.

use folio_core::errors::FolioResult;
use folio_core::models::{ConsolidatedContext, IntentLabel, Query};
use folio_core::traits::IChunkStore;

/// Instruction text wrapping the context blocks. The prose lives in
/// caller-side templates; the engine only assembles around it.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub instructions: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            instructions: "Answer the question using only the sources below. \
                           Cite every claim with its source label, e.g. [S1]."
                .to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
        }
    }
}

/// Format one labelled context as a citation block:
/// label, source header (work title and section when known), line range,
/// then the merged text.
pub fn format_block(context: &ConsolidatedContext, store: &dyn IChunkStore) -> FolioResult<String> {
    let label = context.citation_label.as_deref().unwrap_or("S?");

    let source = match store.work_info(&context.work_id)? {
        Some(info) => {
            let title = info.title.unwrap_or_else(|| info.id.clone());
            match info.section {
                Some(section) => format!("{title}, {section}"),
                None => title,
            }
        }
        None => context.work_id.clone(),
    };

    Ok(format!(
        "[{label}] {source} (lines {}-{})\n{}",
        context.start_line, context.end_line, context.merged_text
    ))
}

/// Assemble the final prompt: instructions, the labelled context blocks,
/// intent/entity guidance, and the original question.
pub fn assemble(
    template: &PromptTemplate,
    blocks: &[String],
    query: &Query,
) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !template.instructions.is_empty() {
        sections.push(template.instructions.clone());
    }
    if !blocks.is_empty() {
        sections.push(format!("Sources:\n\n{}", blocks.join("\n\n")));
    }

    let mut guidance = Vec::new();
    if query.intent != IntentLabel::Unknown {
        guidance.push(query.intent.as_guidance().to_string());
    }
    if !query.entities.is_empty() {
        guidance.push(format!("Pay attention to: {}.", query.entities.join(", ")));
    }
    if !guidance.is_empty() {
        sections.push(guidance.join(" "));
    }

    sections.push(format!("Question: {}", query.original_text));
    sections.join("\n\n")
}

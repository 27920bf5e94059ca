use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse intent classification attached by the upstream expansion step.
///
/// The engine never classifies; it only threads the label through to the
/// augmenter, which turns it into prompt guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    /// A concrete factual question ("in which year...").
    Factual,
    /// A question about themes, motifs, or interpretation.
    Thematic,
    /// A question comparing works, authors, or passages.
    Comparative,
    /// A question about an author's or character's life.
    Biographical,
    /// A question about style, form, or language.
    Stylistic,
    #[default]
    Unknown,
}

impl IntentLabel {
    /// Guidance text inserted into the augmented prompt.
    pub fn as_guidance(&self) -> &'static str {
        match self {
            IntentLabel::Factual => "Answer precisely and cite the passage that states the fact.",
            IntentLabel::Thematic => {
                "Discuss the theme across the provided passages, citing each one you draw on."
            }
            IntentLabel::Comparative => {
                "Compare the passages explicitly, attributing each observation to its source."
            }
            IntentLabel::Biographical => {
                "Ground every biographical claim in a cited passage; do not speculate."
            }
            IntentLabel::Stylistic => {
                "Quote short phrases from the cited passages to illustrate stylistic points."
            }
            IntentLabel::Unknown => "Base your answer only on the cited passages.",
        }
    }
}

/// A user query, immutable once retrieval begins.
///
/// `expanded_texts`, `intent`, and `entities` are populated by an upstream
/// expansion step (HyDE / paraphrase / entity extraction) outside this engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// UUID v4 identifier.
    pub id: String,
    /// The user's question, verbatim.
    pub original_text: String,
    /// Query variants produced by expansion (may include HyDE pseudo-answers).
    pub expanded_texts: Vec<String>,
    /// Intent label from the expansion step.
    #[serde(default)]
    pub intent: IntentLabel,
    /// Named entities / key terms extracted from the question.
    #[serde(default)]
    pub entities: Vec<String>,
    /// When the query was created.
    pub created_at: DateTime<Utc>,
}

impl Query {
    /// Create a query with no expansions (retrieval will run on the
    /// original text alone).
    pub fn new(original_text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            original_text: original_text.into(),
            expanded_texts: Vec::new(),
            intent: IntentLabel::Unknown,
            entities: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// All query variants to search with: the original text followed by
    /// every expansion, deduplicated, order-preserving. Bounding the
    /// expansion count is the upstream expansion step's decision; every
    /// variant it produces gets searched.
    pub fn variants(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for text in std::iter::once(&self.original_text).chain(self.expanded_texts.iter()) {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_string()) {
                out.push(trimmed.to_string());
            }
        }
        out
    }
}

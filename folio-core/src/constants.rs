/// Prefix for citation labels in augmented prompts ("S1", "S2", ...).
pub const CITATION_LABEL_PREFIX: &str = "S";

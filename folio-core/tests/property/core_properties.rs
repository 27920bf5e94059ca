//! Property tests for the core data model and config layer.

use proptest::prelude::*;

use folio_core::config::RagConfig;
use folio_core::models::Query;

proptest! {
    /// The original text always leads the variant list, variants are
    /// unique, and no non-duplicate expansion is dropped.
    #[test]
    fn query_variants_are_deduped_and_original_first(
        original in "[a-z]{1,12}( [a-z]{1,12}){0,4}",
        expansions in prop::collection::vec("[a-z ]{0,30}", 0..15),
    ) {
        let mut query = Query::new(original.clone());
        query.expanded_texts = expansions.clone();
        let variants = query.variants();

        prop_assert!(!variants.is_empty());
        prop_assert_eq!(&variants[0], &original);
        prop_assert!(variants.len() <= 1 + expansions.len());
        for expansion in &expansions {
            if !expansion.trim().is_empty() {
                prop_assert!(variants.iter().any(|v| v == expansion.trim()));
            }
        }

        let mut unique = variants.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), variants.len());
        for v in &variants {
            prop_assert_eq!(v.trim(), v.as_str());
            prop_assert!(!v.is_empty());
        }
    }

    /// Any config that serializes to TOML deserializes back to a config
    /// with the same validation verdict and field values.
    #[test]
    fn config_round_trips_through_toml(
        dense_limit in 1usize..100,
        rrf_k in 1u32..200,
        top_k_rrf in 1usize..100,
        top_n_final in 1usize..100,
        mmr_lambda in 0.0f64..=1.0,
        line_gap in 0u32..50,
    ) {
        let mut config = RagConfig::default();
        config.retrieval.dense_limit = dense_limit;
        config.retrieval.rrf_k = rrf_k;
        config.retrieval.top_k_rrf = top_k_rrf;
        config.retrieval.top_n_final = top_n_final;
        config.retrieval.mmr_lambda = mmr_lambda;
        config.consolidation.line_gap = line_gap;

        let toml_text = toml::to_string(&config).unwrap();
        let parsed: RagConfig = toml::from_str(&toml_text).unwrap();

        prop_assert_eq!(parsed.retrieval.dense_limit, dense_limit);
        prop_assert_eq!(parsed.retrieval.rrf_k, rrf_k);
        prop_assert_eq!(parsed.retrieval.top_k_rrf, top_k_rrf);
        prop_assert_eq!(parsed.retrieval.top_n_final, top_n_final);
        prop_assert_eq!(parsed.retrieval.mmr_lambda, mmr_lambda);
        prop_assert_eq!(parsed.consolidation.line_gap, line_gap);
        prop_assert_eq!(parsed.validate().is_ok(), config.validate().is_ok());
    }
}

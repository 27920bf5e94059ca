//! Property tests for fusion, filtering, and MMR selection.

use proptest::prelude::*;

use folio_core::models::{Candidate, Chunk, ChunkArena};
use folio_retrieval::ranking::mmr;
use folio_retrieval::search::rrf_fusion;
use folio_retrieval::search::{Modality, RankedList};
use folio_retrieval::filter;

fn chunk(id: String, text: String) -> Chunk {
    Chunk {
        id,
        work_id: "w".to_string(),
        parent_id: None,
        start_line: 1,
        end_line: 1,
        text,
        embedding: vec![1.0, 0.0],
    }
}

fn arena_for(ids: &[String]) -> ChunkArena {
    ids.iter()
        .map(|id| chunk(id.clone(), format!("text {id}")))
        .collect()
}

fn ranked(modality: Modality, ids: &[String]) -> RankedList {
    RankedList {
        modality,
        hits: ids.iter().map(|id| (id.clone(), 1.0)).collect(),
    }
}

prop_compose! {
    /// A pool of distinct chunk ids.
    fn id_pool(max: usize)(n in 1..max) -> Vec<String> {
        (0..n).map(|i| format!("c{i:03}")).collect()
    }
}

proptest! {
    /// Fused output never exceeds top_k and is sorted by fused score.
    #[test]
    fn fusion_respects_top_k_and_order(ids in id_pool(40), top_k in 1usize..30) {
        let store = arena_for(&ids);
        let lists = vec![
            ranked(Modality::Dense, &ids),
            ranked(Modality::Lexical, &ids.iter().rev().cloned().collect::<Vec<_>>()),
        ];
        let fused = rrf_fusion::fuse(&lists, &store, 60, top_k).unwrap();
        prop_assert!(fused.len() <= top_k);
        prop_assert!(fused.len() <= ids.len());
        for pair in fused.windows(2) {
            prop_assert!(pair[0].fused_score >= pair[1].fused_score);
        }
    }

    /// A chunk present in both lists at some rank always outscores a chunk
    /// present in only one list at the same rank.
    #[test]
    fn dual_modality_strictly_dominates(rank in 0usize..10, rrf_k in 1u32..200) {
        let mut both_ids: Vec<String> = (0..=rank).map(|i| format!("b{i:02}")).collect();
        let mut single_ids: Vec<String> = (0..=rank).map(|i| format!("s{i:02}")).collect();
        let target_both = both_ids[rank].clone();
        let target_single = single_ids[rank].clone();
        both_ids.truncate(rank + 1);
        single_ids.truncate(rank + 1);

        let mut all = both_ids.clone();
        all.extend(single_ids.clone());
        let store = arena_for(&all);

        let lists = vec![
            ranked(Modality::Dense, &both_ids),
            ranked(Modality::Lexical, &both_ids),
            ranked(Modality::Dense, &single_ids),
        ];
        let fused = rrf_fusion::fuse(&lists, &store, rrf_k, all.len()).unwrap();
        let score = |id: &str| fused.iter().find(|c| c.chunk.id == id).unwrap().fused_score;
        prop_assert!(score(&target_both) > score(&target_single));
    }

    /// Content filtering is a monotone non-increasing transform.
    #[test]
    fn filter_never_grows_the_list(
        texts in prop::collection::vec("[a-z ]{0,40}", 0..20),
        min_words in 0usize..6,
        min_chars in 0usize..30,
    ) {
        let candidates: Vec<Candidate> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Candidate::from_chunk(chunk(format!("c{i}"), t.clone())))
            .collect();
        let before = candidates.len();
        let survivors = filter::filter_content(candidates, min_words, min_chars);
        prop_assert!(survivors.len() <= before);
        for c in &survivors {
            if min_words > 0 {
                prop_assert!(c.text.split_whitespace().count() >= min_words);
            }
            if min_chars > 0 {
                prop_assert!(c.text.chars().count() >= min_chars);
            }
        }
    }

    /// MMR output is bounded by top_n, and λ = 1.0 reproduces pure
    /// relevance-sorted order.
    #[test]
    fn mmr_lambda_one_is_relevance_sort(
        scores in prop::collection::vec(0.0f64..100.0, 1..25),
        top_n in 1usize..25,
    ) {
        let candidates: Vec<Candidate> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let mut c = Candidate::from_chunk(chunk(format!("c{i:02}"), "t".to_string()));
                c.rerank_score = Some(*s);
                c
            })
            .collect();

        let picked = mmr::select(candidates.clone(), 1.0, top_n);
        prop_assert!(picked.len() <= top_n);
        prop_assert_eq!(picked.len(), top_n.min(candidates.len()));

        let mut expected = candidates;
        expected.sort_by(|a, b| b.relevance().partial_cmp(&a.relevance()).unwrap());
        for (got, want) in picked.iter().zip(expected.iter()) {
            prop_assert_eq!(got.rerank_score, want.rerank_score);
        }
    }
}

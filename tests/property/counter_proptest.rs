//! Property-based tests for the counter store

use std::collections::HashMap;

use proptest::prelude::*;
use wikilytics::backend::analytics::CounterStore;
use wikilytics::shared::{CounterRecord, SortOrder, SubjectKind};

fn kind() -> impl Strategy<Value = SubjectKind> {
    prop_oneof![Just(SubjectKind::Keyword), Just(SubjectKind::Page)]
}

/// Short subjects from a small alphabet so sequences repeat themselves
fn observations() -> impl Strategy<Value = Vec<(SubjectKind, String)>> {
    prop::collection::vec((kind(), "[abcC]{1,2}"), 0..40)
}

/// Record every observation into a fresh store
///
/// Returns the count reported by each `record` call and the final ascending
/// and descending rankings.
fn replay(
    observations: &[(SubjectKind, String)],
) -> (Vec<i64>, Vec<CounterRecord>, Vec<CounterRecord>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    runtime.block_on(async {
        let store = CounterStore::in_memory().await.unwrap();
        let mut reported = Vec::with_capacity(observations.len());
        for (kind, subject) in observations {
            reported.push(store.record(*kind, subject).await.unwrap().count);
        }
        let asc = store.ranked(SortOrder::Asc).await.unwrap();
        let desc = store.ranked(SortOrder::Desc).await.unwrap();
        (reported, asc, desc)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_counts_match_occurrences(observations in observations()) {
        let (reported, asc, _) = replay(&observations);

        let mut seen: HashMap<(SubjectKind, String), i64> = HashMap::new();
        for ((kind, subject), count) in observations.iter().zip(&reported) {
            let expected = seen.entry((*kind, subject.clone())).or_insert(0);
            *expected += 1;
            prop_assert_eq!(*count, *expected);
        }

        prop_assert_eq!(asc.len(), seen.len());
        for record in &asc {
            let expected = seen.get(&(record.kind, record.subject.clone()));
            prop_assert_eq!(Some(&record.count), expected);
        }
    }

    #[test]
    fn test_ranking_is_monotone(observations in observations()) {
        let (_, asc, desc) = replay(&observations);

        prop_assert_eq!(asc.len(), desc.len());
        prop_assert!(asc.windows(2).all(|w| w[0].count <= w[1].count));
        prop_assert!(desc.windows(2).all(|w| w[0].count >= w[1].count));
        // equal counts keep insertion order in both directions
        prop_assert!(asc.windows(2).all(|w| w[0].count != w[1].count || w[0].id < w[1].id));
        prop_assert!(desc.windows(2).all(|w| w[0].count != w[1].count || w[0].id < w[1].id));
    }
}

use proptest::prelude::*;
use vantage_core::models::{ClickEvent, ContentItem, UserPreference, ViewEvent};
use vantage_insights::{infer, recommend, recommend_weighted, ScorerWeights};

fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "rust".to_string(),
        "go".to_string(),
        "news".to_string(),
        "sports".to_string(),
    ])
}

fn item_strategy() -> impl Strategy<Value = ContentItem> {
    (
        "[a-z]{1,8}",
        category_strategy(),
        prop::collection::vec(category_strategy(), 0..3),
        0.0f64..=100.0,
    )
        .prop_map(|(id, category, tags, popularity)| ContentItem {
            title: format!("Title {id}"),
            id,
            category,
            tags,
            popularity,
        })
}

fn pref_strategy() -> impl Strategy<Value = UserPreference> {
    (category_strategy(), 0u8..=100).prop_map(|(category, interest)| UserPreference {
        category,
        interest,
    })
}

proptest! {
    #[test]
    fn output_length_is_min_of_max_results_and_catalog(
        prefs in prop::collection::vec(pref_strategy(), 0..4),
        catalog in prop::collection::vec(item_strategy(), 0..30),
        max_results in 0usize..40,
    ) {
        let ranked = recommend_weighted(&prefs, &catalog, max_results, &ScorerWeights::default());
        prop_assert_eq!(ranked.len(), max_results.min(catalog.len()));
    }

    #[test]
    fn ranking_returns_a_subset_of_the_catalog(
        prefs in prop::collection::vec(pref_strategy(), 0..4),
        catalog in prop::collection::vec(item_strategy(), 0..20),
    ) {
        let ranked = recommend(&prefs, &catalog);
        for item in &ranked {
            prop_assert!(catalog.contains(item));
        }
    }

    #[test]
    fn full_ranking_is_permutation_invariant_as_a_multiset(
        prefs in prop::collection::vec(pref_strategy(), 0..4),
        catalog in prop::collection::vec(item_strategy(), 0..15),
        seed in any::<u64>(),
    ) {
        // Shuffle deterministically from the seed.
        let mut shuffled = catalog.clone();
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            shuffled.swap(i, (state >> 33) as usize % (i + 1));
        }

        let weights = ScorerWeights::default();
        let mut a = recommend_weighted(&prefs, &catalog, catalog.len(), &weights);
        let mut b = recommend_weighted(&prefs, &shuffled, shuffled.len(), &weights);
        let key = |i: &ContentItem| (i.id.clone(), i.category.clone());
        a.sort_by_key(key);
        b.sort_by_key(key);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn inferred_interest_is_always_in_range(
        clicks in prop::collection::vec(
            category_strategy().prop_map(|category| ClickEvent {
                content_id: "c".into(),
                category,
            }),
            0..50,
        ),
        views in prop::collection::vec(
            (category_strategy(), 0.0f64..1e7).prop_map(|(category, duration_ms)| ViewEvent {
                content_id: "c".into(),
                category,
                duration_ms,
            }),
            0..50,
        ),
    ) {
        let prefs = infer(&clicks, &views).unwrap();
        for pref in &prefs {
            prop_assert!(pref.interest <= 100);
        }
        // One entry per observed category.
        let mut categories: Vec<&str> = prefs.iter().map(|p| p.category.as_str()).collect();
        categories.dedup();
        prop_assert_eq!(categories.len(), prefs.len());
    }
}

// Property checks over generated catalogs

use crate::common::{assert_color_counts, assert_results, assert_size_counts};
use shirt_search::core::catalog::SampleCatalogBuilder;
use shirt_search::{Color, SearchEngine, SearchOptions, Size};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

/// A spread of filters: none, single, multiple, and complete sets
fn option_grid() -> Vec<SearchOptions> {
    vec![
        SearchOptions::new(),
        SearchOptions::new().with_colors([Color::Black]),
        SearchOptions::new().with_sizes([Size::Large]),
        SearchOptions::new()
            .with_colors([Color::Red, Color::White])
            .with_sizes([Size::Small]),
        SearchOptions::new()
            .with_colors([Color::Blue, Color::Yellow, Color::White])
            .with_sizes([Size::Medium, Size::Large]),
        SearchOptions::new()
            .with_colors(Color::ALL)
            .with_sizes(Size::ALL),
    ]
}

#[test]
fn test_totals_agree_with_counts() {
    for seed in [1, 2, 3] {
        let catalog = SampleCatalogBuilder::new(2_000, seed).build();
        let engine = SearchEngine::new(catalog.clone());

        for options in option_grid() {
            let results = engine.search(&options);

            let color_sum: usize = results.color_counts.iter().map(|c| c.count).sum();
            let size_sum: usize = results.size_counts.iter().map(|s| s.count).sum();
            assert_eq!(results.total(), color_sum, "seed {seed}, {options:?}");
            assert_eq!(results.total(), size_sum, "seed {seed}, {options:?}");

            assert_results(&results.shirts, &options);
            assert_color_counts(&catalog, &options, &results.color_counts);
            assert_size_counts(&catalog, &options, &results.size_counts);
        }
    }
}

#[test]
fn test_results_preserve_catalog_order() {
    let catalog = SampleCatalogBuilder::new(1_000, 9).build();
    let position: HashMap<_, _> = catalog
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id(), i))
        .collect();
    let engine = SearchEngine::new(catalog);

    for options in option_grid() {
        let results = engine.search(&options);
        let indexes: Vec<usize> = results.shirts.iter().map(|s| position[&s.id()]).collect();
        assert!(
            indexes.windows(2).all(|w| w[0] < w[1]),
            "Results out of catalog order for {options:?}"
        );
    }
}

#[test]
fn test_unrestricted_returns_whole_catalog() {
    let catalog = SampleCatalogBuilder::new(500, 4).build();
    let engine = SearchEngine::new(catalog.clone());

    let results = engine.search(&SearchOptions::new());
    assert_eq!(results.shirts, catalog);
}

#[test]
fn test_search_is_idempotent() {
    let engine = SearchEngine::new(SampleCatalogBuilder::new(1_000, 12).build());

    for options in option_grid() {
        assert_eq!(engine.search(&options), engine.search(&options));
    }
}

#[test]
fn test_excluded_variants_report_zero() {
    let engine = SearchEngine::new(SampleCatalogBuilder::new(1_000, 21).build());
    let options = SearchOptions::new().with_colors([Color::Red]);
    let results = engine.search(&options);

    assert!(results.color_count(Color::Red) > 0);
    for color in [Color::Blue, Color::Yellow, Color::White, Color::Black] {
        assert_eq!(results.color_count(color), 0, "{color}");
    }
}

#[test]
fn test_concurrent_searches() {
    let engine = Arc::new(SearchEngine::new(
        SampleCatalogBuilder::new(5_000, 77).build(),
    ));
    let expected: Vec<_> = option_grid().iter().map(|o| engine.search(o)).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for (options, want) in option_grid().iter().zip(expected.iter()) {
                    assert_eq!(&engine.search(options), want);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Search thread panicked");
    }
}

#[test]
fn test_large_catalog() {
    // Size of the random catalog the search was originally exercised on
    let catalog = SampleCatalogBuilder::new(50_000, 42).build();
    let engine = SearchEngine::new(catalog.clone());

    let options = SearchOptions::new()
        .with_colors([Color::Red, Color::Black])
        .with_sizes([Size::Small]);
    let results = engine.search(&options);

    assert!(results.total() > 0);
    assert_results(&results.shirts, &options);
    assert_color_counts(&catalog, &options, &results.color_counts);
    assert_size_counts(&catalog, &options, &results.size_counts);
}

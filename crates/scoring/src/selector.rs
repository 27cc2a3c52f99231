//! Top-N selection over the scored corpus.

use data_loader::{Corpus, MovieRecord};

/// The `n` records with the highest likeness, sorted descending.
///
/// Ties keep corpus insertion order: the sort is stable and the input is
/// iterated in corpus order. `n = 0` returns an empty list; `n` beyond the
/// corpus size returns every record sorted.
pub fn top_n(corpus: &Corpus, n: usize) -> Vec<&MovieRecord> {
    let mut ranked: Vec<&MovieRecord> = corpus.records().iter().collect();
    ranked.sort_by(|a, b| {
        b.likeness()
            .partial_cmp(&a.likeness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

//! Stable ranking helpers shared by the providers.
//!
//! Ties always resolve to the earliest element in iteration order, which is
//! declaration order for every registry in this crate.

/// Element with the greatest key; the first one wins ties.
pub fn stable_max_by<T, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Option<T>
where
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;

    for item in items {
        let score = key(&item);
        match &best {
            Some((_, best_score)) if score <= *best_score => {}
            // NaN never beats anything, including a NaN incumbent.
            Some(_) if score.is_nan() => {}
            _ => best = Some((item, score)),
        }
    }

    best.map(|(item, _)| item)
}

/// The `k` highest-scoring elements, best first, ties in input order.
pub fn top_k_by<T, F>(items: impl IntoIterator<Item = T>, k: usize, mut key: F) -> Vec<T>
where
    F: FnMut(&T) -> f64,
{
    let mut scored: Vec<(T, f64)> = items
        .into_iter()
        .map(|item| {
            let score = key(&item);
            (item, score)
        })
        .collect();

    // `sort_by` is stable, so equal scores keep their input order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(k);
    scored.into_iter().map(|(item, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_keeps_first_of_equals() {
        let picked = stable_max_by(["a", "b", "c"], |name| if *name == "a" { 1.0 } else { 2.0 });
        assert_eq!(picked, Some("b"));
    }

    #[test]
    fn max_of_nothing_is_none() {
        assert_eq!(stable_max_by(Vec::<u8>::new(), |_| 0.0), None);
    }

    #[test]
    fn top_k_is_stable() {
        let values = [("w", 10.0), ("p", 30.0), ("q", 30.0), ("z", 5.0)];
        let top = top_k_by(values, 3, |(_, value)| *value);
        let names: Vec<_> = top.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["p", "q", "w"]);
    }
}

use std::collections::HashMap;

/// Distinct tokens by descending count; ties keep first-seen order.
pub fn most_common<'a, I>(tokens: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        let count = counts.entry(token.to_string()).or_insert(0);
        if *count == 0 {
            order.push(token.to_string());
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|t| {
            let n = counts.get(&t).copied().unwrap_or(0);
            (t, n)
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Distinct tokens in first-seen order.
pub fn unique_in_order<'a, I>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = std::collections::HashSet::new();
    tokens
        .into_iter()
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = most_common(["beta", "alpha", "beta", "gamma", "alpha", "delta"]);
        let words: Vec<_> = ranked.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["beta", "alpha", "gamma", "delta"]);
        assert_eq!(ranked[0].1, 2);
    }

    #[test]
    fn unique_keeps_order() {
        assert_eq!(unique_in_order(["b", "a", "b"]), vec!["b", "a"]);
    }
}

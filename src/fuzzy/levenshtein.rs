// File: src/fuzzy/levenshtein.rs

/// Classic Levenshtein edit distance: the minimum number of single-character
/// insertions, deletions or substitutions that turn `a` into `b`.
///
/// Works on `char`s, not bytes, so "baño" has length 4. Only two rolling rows
/// are kept, sized by the shorter input.
/// Complexity: O(n*m) time, O(min(n, m)) memory.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Distance is symmetric, so size the rows by the shorter word.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, &cl) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cs) in short.iter().enumerate() {
            let cost = if cl == cs { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Normalized inverse of [`levenshtein`] in `0.0..=1.0`.
///
/// `1 - distance / max(len(a), len(b))`, and `1.0` when both are empty.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

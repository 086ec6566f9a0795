//! Word tokenization and Shannon entropy
//!
//! The heuristic pass of the scanner. Tokens are maximal runs of
//! alphanumeric/underscore characters, case-folded; entropy is computed
//! over the normalized token-frequency distribution.

/// Split text into lowercase word tokens
///
/// A token is a maximal run of alphanumeric or underscore characters,
/// Unicode-aware. Matches the classic `\w+` word rule.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(current.to_lowercase());
            current = String::new();
        }
    }
    if !current.is_empty() {
        tokens.push(current.to_lowercase());
    }
    tokens
}

/// Shannon entropy over a frequency distribution
///
/// `H = -Σ p_i · log2(p_i + ε)` with `p_i = count_i / total` and
/// `ε = 1e-10` inside the log to stay clear of a domain error. Zero
/// counts yield 0.0 by definition.
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    -counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * (p + 1e-10).log2()
        })
        .sum::<f64>()
}

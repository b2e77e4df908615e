//! Binomial coefficients.

/// Returns the number of ways to choose `k` items out of `n`.
///
/// Returns `0` when `k > n`. Each intermediate value is itself a binomial
/// coefficient, so the computation stays exact as long as the result fits in
/// a `usize`.
///
/// # Examples
///
/// ```
/// use tensorcell_combinations::binomial;
///
/// assert_eq!(binomial(4, 2), 6);
/// assert_eq!(binomial(5, 0), 1);
/// assert_eq!(binomial(2, 3), 0);
///
/// // Usable in const contexts
/// const EDGES_PER_BLOCK: usize = binomial(3, 1);
/// assert_eq!(EDGES_PER_BLOCK, 3);
/// ```
#[must_use]
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut result = 1;
    let mut i = 0;
    while i < k {
        // result == C(n, i) here, so the division is exact
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

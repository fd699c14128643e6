use itertools::Itertools;
use varisat::Lit;

/// CNF clauses asserting that at most `k` of `lits` are true: any choice of `k + 1` literals
/// must contain a false one.
pub(crate) fn at_most_k(lits: &[Lit], k: usize) -> Vec<Vec<Lit>> {
    lits.iter()
        .combinations(k + 1)
        .map(|choice| choice.into_iter().map(|lit| !*lit).collect_vec())
        .collect_vec()
}

/// CNF clauses asserting that at least `k` of `lits` are true: any choice of
/// `lits.len() - k + 1` literals must contain a true one.
///
/// A `k` greater than `lits.len()` yields the empty clause, which no assignment satisfies.
pub(crate) fn at_least_k(lits: &[Lit], k: usize) -> Vec<Vec<Lit>> {
    if k > lits.len() {
        return vec![vec![]];
    }

    lits.iter()
        .combinations(lits.len() - k + 1)
        .map(|choice| choice.into_iter().copied().collect_vec())
        .collect_vec()
}

/// CNF clauses asserting that exactly `k` of `lits` are true.
pub(crate) fn exactly_k(lits: &[Lit], k: usize) -> Vec<Vec<Lit>> {
    let mut clauses = at_most_k(lits, k);
    clauses.extend(at_least_k(lits, k));
    clauses
}

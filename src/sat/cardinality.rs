//! Cardinality constraints over sets of literals.
//!
//! The only bound this crate needs is "exactly one": of the given literals,
//! a satisfying assignment makes one true and the rest false. The encoding
//! is the textbook pairwise one — a single at-least-one clause plus one
//! binary clause per unordered pair of literals. It introduces no auxiliary
//! variables and produces `1 + n(n-1)/2` clauses, which is perfectly
//! acceptable at the clause sizes seen here (36 pair clauses for nine
//! literals). Compact encodings such as the sequential counter or commander
//! encoding only start to pay off at much larger `n`.
//!
//! Inputs are a caller contract: literals must be over distinct variables,
//! and an empty input yields the empty clause (unsatisfiable). Neither is
//! checked at runtime.

use crate::sat::clause::Clause;
use crate::sat::literal::Literal;
use itertools::Itertools;

/// A single clause asserting that at least one of `literals` is true.
#[must_use]
pub fn at_least_one(literals: &[Literal]) -> Clause {
    Clause::new(literals.iter().copied())
}

/// Clauses forbidding any two of `literals` from being true together: one
/// binary clause of the two negations per unordered pair.
#[must_use]
pub fn at_most_one(literals: &[Literal]) -> Vec<Clause> {
    literals
        .iter()
        .tuple_combinations()
        .map(|(a, b)| Clause::new([a.negated(), b.negated()]))
        .collect()
}

/// Clauses satisfied exactly when one of `literals` is true: the union of
/// [`at_least_one`] and [`at_most_one`].
#[must_use]
pub fn exactly_one(literals: &[Literal]) -> Vec<Clause> {
    let mut clauses = Vec::with_capacity(1 + literals.len() * literals.len().saturating_sub(1) / 2);
    clauses.push(at_least_one(literals));
    clauses.extend(at_most_one(literals));
    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::literal::Variable;

    fn positives(n: u32) -> Vec<Literal> {
        (1..=n).map(Literal::positive).collect()
    }

    /// Evaluates `clauses` under the assignment where variable `v` is true
    /// iff bit `v - 1` of `bits` is set.
    fn satisfies(clauses: &[Clause], bits: u32) -> bool {
        let value = |var: Variable| bits & (1 << (var - 1)) != 0;
        clauses.iter().all(|clause| {
            clause.iter().any(|lit| {
                if lit.polarity() {
                    value(lit.variable())
                } else {
                    !value(lit.variable())
                }
            })
        })
    }

    #[test]
    fn test_clause_counts() {
        let lits = positives(9);
        assert_eq!(at_most_one(&lits).len(), 36);
        assert_eq!(exactly_one(&lits).len(), 37);
        assert_eq!(at_least_one(&lits).len(), 9);
    }

    #[test]
    fn test_exactly_one_models_have_weight_one() {
        for n in 1..=5u32 {
            let clauses = exactly_one(&positives(n));
            let mut models = Vec::new();
            for bits in 0..(1u32 << n) {
                if satisfies(&clauses, bits) {
                    models.push(bits);
                }
            }
            // One model per literal, each with a single bit set.
            assert_eq!(models.len(), n as usize, "wrong model count for n={n}");
            for bits in models {
                assert_eq!(bits.count_ones(), 1, "model {bits:b} has wrong weight");
            }
        }
    }

    #[test]
    fn test_exactly_one_over_mixed_polarities() {
        // Over {x1, !x2}: satisfied by (true, true) and (false, false) only.
        let lits = [Literal::positive(1), Literal::negative(2)];
        let clauses = exactly_one(&lits);
        let sat: Vec<u32> = (0..4).filter(|&bits| satisfies(&clauses, bits)).collect();
        assert_eq!(sat, vec![0b00, 0b11]);
    }

    #[test]
    fn test_empty_input_is_unsatisfiable() {
        let clauses = exactly_one(&[]);
        assert_eq!(clauses.len(), 1);
        assert!(clauses[0].is_empty());
        assert!(!satisfies(&clauses, 0));
    }
}

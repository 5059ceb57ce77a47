//! Partial and complete truth assignments.

use crate::sat::literal::{Literal, Variable};
use itertools::Itertools;
use std::fmt;

/// The state of a single variable during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarState {
    /// Not yet given a value.
    #[default]
    Unassigned,
    /// Fixed to the contained value.
    Assigned(bool),
}

impl VarState {
    /// `true` if the variable has been given a value.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

/// A partial assignment indexed by variable identifier. Slot `0` is unused,
/// matching the convention that no literal references variable `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment(Vec<VarState>);

impl Assignment {
    /// Creates an empty assignment over variables `1..=num_vars`.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self(vec![VarState::Unassigned; num_vars + 1])
    }

    /// Fixes `var` to `value`.
    pub fn assign(&mut self, var: Variable, value: bool) {
        self.0[var as usize] = VarState::Assigned(value);
    }

    /// The value of `var`, or `None` while unassigned.
    #[must_use]
    pub fn value(&self, var: Variable) -> Option<bool> {
        match self.0.get(var as usize) {
            Some(VarState::Assigned(b)) => Some(*b),
            _ => None,
        }
    }

    /// The truth value of `lit` under this assignment, or `None` while its
    /// variable is unassigned.
    #[must_use]
    pub fn literal_value(&self, lit: Literal) -> Option<bool> {
        let value = self.value(lit.variable())?;
        Some(if lit.polarity() { value } else { !value })
    }

    /// The lowest-numbered unassigned variable, if any.
    #[must_use]
    pub fn first_unassigned(&self) -> Option<Variable> {
        self.0
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, state)| !state.is_assigned())
            .map(|(var, _)| var as Variable)
    }

    /// Completes the assignment into a model, defaulting any still-unassigned
    /// variable to `false`. Sound once every clause is already satisfied.
    #[must_use]
    pub fn into_model(self) -> Model {
        Model(
            self.0
                .into_iter()
                .map(|state| matches!(state, VarState::Assigned(true)))
                .collect(),
        )
    }
}

/// A complete truth assignment covering every declared variable. Produced by
/// a solver, consumed read-only by decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model(Vec<bool>);

impl Model {
    /// A model over `1..=num_vars` with every variable false. Useful as a
    /// starting point when building a model by hand.
    #[must_use]
    pub fn all_false(num_vars: usize) -> Self {
        Self(vec![false; num_vars + 1])
    }

    /// Sets the value of `var`.
    ///
    /// # Panics
    ///
    /// If `var` exceeds the declared variable count.
    pub fn set(&mut self, var: Variable, value: bool) {
        self.0[var as usize] = value;
    }

    /// The truth value of `var`. Variables beyond the declared count read as
    /// `false`.
    #[must_use]
    pub fn value(&self, var: Variable) -> bool {
        self.0.get(var as usize).copied().unwrap_or(false)
    }

    /// The truth value of `lit` under this model.
    #[must_use]
    pub fn literal(&self, lit: Literal) -> bool {
        let value = self.value(lit.variable());
        if lit.polarity() { value } else { !value }
    }
}

impl fmt::Display for Model {
    /// Lists the identifiers of the true variables, space separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .enumerate()
                .skip(1)
                .filter(|&(_, &v)| v)
                .map(|(var, _)| var)
                .join(" ")
        )
    }
}

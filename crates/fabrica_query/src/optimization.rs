//! The compiled result for production-planning commands.
//!
//! An [`OptimizationQuery`] holds the objective plus four clause sections;
//! the eq/ge/le constraint maps handed to the solver are derived from the
//! sections on demand, never stored separately. Sign conventions follow the
//! established solver contract exactly: fixed outputs pin `ge = amount`,
//! wildcard outputs pin `ge = 0`, fixed inputs pin `ge = -amount`, wildcard
//! inputs pin `le = 0`, includes pin `ge = 0`, excludes pin `eq = 0`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use fabrica_foundation::{SyntheticVar, TypeTag, Var};

use crate::category::{CategoryKey, Section};

/// One produced variable with an optional fixed amount.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The produced variable.
    pub var: Var,
    /// Fixed production amount; `None` for wildcard outputs.
    pub amount: Option<u64>,
}

impl Output {
    /// Returns true if this output carries a fixed amount.
    #[must_use]
    pub const fn has_amount(&self) -> bool {
        self.amount.is_some()
    }
}

/// One consumed variable with an optional fixed amount.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Input {
    /// The consumed variable.
    pub var: Var,
    /// Fixed consumption amount; `None` for wildcard inputs.
    pub amount: Option<u64>,
}

impl Input {
    /// Returns true if this input carries a fixed amount.
    #[must_use]
    pub const fn has_amount(&self) -> bool {
        self.amount.is_some()
    }
}

/// One variable forced to be selectable by the solver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Include {
    /// The included variable.
    pub var: Var,
}

/// One variable forced to zero by the solver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exclude {
    /// The excluded variable.
    pub var: Var,
}

/// The optimization objective: a direction and a per-variable coefficient
/// map (size 1 in the common case, kept general for multi-match objectives).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    maximize: bool,
    coefficients: BTreeMap<Var, i64>,
}

impl Objective {
    /// Creates a maximize objective with coefficient 1 per variable.
    #[must_use]
    pub fn maximize(vars: impl IntoIterator<Item = Var>) -> Self {
        Self {
            maximize: true,
            coefficients: vars.into_iter().map(|v| (v, 1)).collect(),
        }
    }

    /// Creates a minimize objective with coefficient -1 per variable.
    #[must_use]
    pub fn minimize(vars: impl IntoIterator<Item = Var>) -> Self {
        Self {
            maximize: false,
            coefficients: vars.into_iter().map(|v| (v, -1)).collect(),
        }
    }

    /// Returns true if the objective maximizes.
    #[must_use]
    pub const fn is_maximize(&self) -> bool {
        self.maximize
    }

    /// Returns the per-variable coefficient map.
    #[must_use]
    pub const fn coefficients(&self) -> &BTreeMap<Var, i64> {
        &self.coefficients
    }

    /// Iterates over the objective variables.
    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.coefficients.keys()
    }
}

/// The compiled result for a production-planning command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationQuery {
    outputs: Section<Output>,
    inputs: Section<Input>,
    includes: Section<Include>,
    excludes: Section<Exclude>,
    objective: Option<Objective>,
}

impl Default for OptimizationQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizationQuery {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outputs: Section::new(),
            inputs: Section::new(),
            includes: Section::new(),
            excludes: Section::new(),
            objective: None,
        }
    }

    // =========================================================================
    // Construction (used by the semantic builder)
    // =========================================================================

    /// Adds an output clause element.
    pub fn add_output(&mut self, var: Var, amount: Option<u64>, strict: bool) {
        self.outputs.add(var.clone(), Output { var, amount }, strict);
    }

    /// Adds an input clause element.
    pub fn add_input(&mut self, var: Var, amount: Option<u64>, strict: bool) {
        self.inputs.add(var.clone(), Input { var, amount }, strict);
    }

    /// Adds an include clause element. Entity includes make their category
    /// strict: naming a recipe, crafter, or generator restricts the solver
    /// to exactly the named set of that type.
    pub fn add_include(&mut self, var: Var) {
        let strict = matches!(
            CategoryKey::of(&var),
            CategoryKey::Tag(
                TypeTag::Recipe | TypeTag::PowerRecipe | TypeTag::Crafter | TypeTag::Generator
            )
        );
        self.includes.add(var.clone(), Include { var }, strict);
    }

    /// Adds an exclude clause element.
    pub fn add_exclude(&mut self, var: Var) {
        self.excludes.add(var.clone(), Exclude { var }, false);
    }

    /// Escalates the item-output category to strict.
    pub fn mark_outputs_strict(&mut self) {
        self.outputs.mark_strict(CategoryKey::Tag(TypeTag::Item));
    }

    /// Escalates the item-input category to strict.
    pub fn mark_inputs_strict(&mut self) {
        self.inputs.mark_strict(CategoryKey::Tag(TypeTag::Item));
    }

    /// Sets the objective.
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = Some(objective);
    }

    // =========================================================================
    // Consumer surface
    // =========================================================================

    /// Returns the objective, if set.
    #[must_use]
    pub const fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// Returns true if an objective has been set.
    #[must_use]
    pub const fn has_objective(&self) -> bool {
        self.objective.is_some()
    }

    /// Returns the output section.
    #[must_use]
    pub const fn outputs(&self) -> &Section<Output> {
        &self.outputs
    }

    /// Returns the input section.
    #[must_use]
    pub const fn inputs(&self) -> &Section<Input> {
        &self.inputs
    }

    /// Returns the include section.
    #[must_use]
    pub const fn includes(&self) -> &Section<Include> {
        &self.includes
    }

    /// Returns the exclude section.
    #[must_use]
    pub const fn excludes(&self) -> &Section<Exclude> {
        &self.excludes
    }

    /// Exact-value constraints: every exclude pinned to zero.
    #[must_use]
    pub fn eq_constraints(&self) -> BTreeMap<Var, f64> {
        let mut result = BTreeMap::new();
        for (var, _) in self.excludes.elements() {
            result.insert(var.clone(), 0.0);
        }
        result
    }

    /// Lower-bound constraints: outputs at their amount (zero for
    /// wildcards), fixed-amount inputs at the negated amount, every include
    /// at zero. Outputs are positive lower bounds, not exact targets: the
    /// solver may overproduce.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ge_constraints(&self) -> BTreeMap<Var, f64> {
        let mut result = BTreeMap::new();
        for (var, output) in self.outputs.elements() {
            result.insert(var.clone(), output.amount.unwrap_or(0) as f64);
        }
        for (var, input) in self.inputs.elements() {
            if let Some(amount) = input.amount {
                result.insert(var.clone(), -(amount as f64));
            }
        }
        for (var, _) in self.includes.elements() {
            result.insert(var.clone(), 0.0);
        }
        result
    }

    /// Upper-bound constraints: wildcard inputs at zero.
    #[must_use]
    pub fn le_constraints(&self) -> BTreeMap<Var, f64> {
        let mut result = BTreeMap::new();
        for (var, input) in self.inputs.elements() {
            if input.amount.is_none() {
                result.insert(var.clone(), 0.0);
            }
        }
        result
    }

    /// Returns true if item outputs are restricted to exactly the named set.
    #[must_use]
    pub fn strict_outputs(&self) -> bool {
        self.outputs.is_strict(CategoryKey::Tag(TypeTag::Item))
    }

    /// Returns true if item inputs are restricted to exactly the named set.
    #[must_use]
    pub fn strict_inputs(&self) -> bool {
        self.inputs.is_strict(CategoryKey::Tag(TypeTag::Item))
    }

    /// Returns true if recipes are restricted to exactly the named set.
    #[must_use]
    pub fn strict_recipes(&self) -> bool {
        self.includes.is_strict(CategoryKey::Tag(TypeTag::Recipe))
    }

    /// Returns true if power recipes are restricted to exactly the named set.
    #[must_use]
    pub fn strict_power_recipes(&self) -> bool {
        self.includes
            .is_strict(CategoryKey::Tag(TypeTag::PowerRecipe))
    }

    /// Returns true if crafters are restricted to exactly the named set.
    #[must_use]
    pub fn strict_crafters(&self) -> bool {
        self.includes.is_strict(CategoryKey::Tag(TypeTag::Crafter))
    }

    /// Returns true if generators are restricted to exactly the named set.
    #[must_use]
    pub fn strict_generators(&self) -> bool {
        self.includes
            .is_strict(CategoryKey::Tag(TypeTag::Generator))
    }

    /// Returns true if the query produces power, directly or as objective.
    #[must_use]
    pub fn has_power_output(&self) -> bool {
        let power = CategoryKey::Synthetic(SyntheticVar::Power);
        self.outputs.category(power).is_some_and(|c| !c.is_empty())
            || self.objective.as_ref().is_some_and(|o| {
                o.is_maximize()
                    && o.coefficients()
                        .contains_key(&Var::Synthetic(SyntheticVar::Power))
            })
    }

    /// Enumerates every variable this query references, in first-reference
    /// order, for solver variable-space construction.
    #[must_use]
    pub fn query_vars(&self) -> Vec<Var> {
        let mut seen = BTreeSet::new();
        let mut vars = Vec::new();
        let all = self
            .objective
            .iter()
            .flat_map(Objective::vars)
            .chain(self.outputs.vars())
            .chain(self.inputs.vars())
            .chain(self.includes.vars())
            .chain(self.excludes.vars());
        for var in all {
            if seen.insert(var.clone()) {
                vars.push(var.clone());
            }
        }
        vars
    }
}

impl fmt::Display for OptimizationQuery {
    /// Reconstructs the canonical command string, e.g.
    /// `produce 60 item:iron-plate from _ resource:iron-ore using only crafter:smelter`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut outputs = Vec::new();
        let mut inputs = Vec::new();
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        if let Some(objective) = &self.objective {
            let entries = objective.vars().map(|v| format!("? {v}"));
            if objective.is_maximize() {
                outputs.extend(entries);
            } else {
                inputs.extend(entries);
            }
        }

        for (_, category) in self.outputs.categories() {
            let only = if category.strict_flag() { "only " } else { "" };
            for (var, output) in category.elements() {
                match output.amount {
                    Some(amount) => outputs.push(format!("{only}{amount} {var}")),
                    None => outputs.push(format!("{only}{var}")),
                }
            }
        }

        for (_, category) in self.inputs.categories() {
            let only = if category.strict_flag() { "only " } else { "" };
            for (var, input) in category.elements() {
                match input.amount {
                    Some(amount) => inputs.push(format!("{only}{amount} {var}")),
                    None => inputs.push(format!("{only}{var}")),
                }
            }
        }

        for (_, category) in self.includes.categories() {
            let only = if category.strict_flag() { "only " } else { "" };
            for (var, _) in category.elements() {
                includes.push(format!("{only}{var}"));
            }
        }

        for (var, _) in self.excludes.elements() {
            excludes.push(var.to_string());
        }

        write!(f, "produce {}", outputs.join(" and "))?;
        if !inputs.is_empty() {
            write!(f, " from {}", inputs.join(" and "))?;
        }
        if !includes.is_empty() {
            write!(f, " using {}", includes.join(" and "))?;
        }
        if !excludes.is_empty() {
            write!(f, " without {}", excludes.join(" or "))?;
        }
        Ok(())
    }
}

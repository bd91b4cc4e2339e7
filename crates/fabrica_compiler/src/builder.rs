//! The semantic pass.
//!
//! Walks the parse tree, resolves every entity span against the database,
//! and assembles the typed query model. All sign conventions here are part
//! of the solver contract; see the query crate for the mapping.

use tracing::debug;

use fabrica_foundation::{Database, Entity as _, Error, Result, SyntheticVar, TypeTag, Var};
use fabrica_language::{Amount, ClauseAst, EntitySpan, OptimizationAst, QueryAst, Subject};
use fabrica_query::{InfoQuery, Objective, OptimizationQuery};

use crate::resolver::EntityResolver;

/// Output subjects resolve against items only.
const OUTPUT_TYPES: &[TypeTag] = &[TypeTag::Item];
/// Input subjects resolve against resources and items.
const INPUT_TYPES: &[TypeTag] = &[TypeTag::Resource, TypeTag::Item];
/// Include and exclude subjects resolve against recipes and buildings.
const SELECTION_TYPES: &[TypeTag] = &[
    TypeTag::Recipe,
    TypeTag::PowerRecipe,
    TypeTag::Crafter,
    TypeTag::Generator,
];
/// "recipes for x" resolves products and buildings.
const RECIPES_FOR_TYPES: &[TypeTag] = &[
    TypeTag::Item,
    TypeTag::Resource,
    TypeTag::Crafter,
    TypeTag::Generator,
];

/// A compiled query: either a constraint model for the solver or an entity
/// list for the presenter.
#[derive(Clone, Debug)]
pub enum Query {
    /// A production-planning query.
    Optimization(OptimizationQuery),
    /// An information lookup.
    Info(InfoQuery),
}

impl Query {
    /// Returns the optimization query, if that is what compiled.
    #[must_use]
    pub const fn as_optimization(&self) -> Option<&OptimizationQuery> {
        match self {
            Self::Optimization(query) => Some(query),
            Self::Info(_) => None,
        }
    }

    /// Returns the info query, if that is what compiled.
    #[must_use]
    pub const fn as_info(&self) -> Option<&InfoQuery> {
        match self {
            Self::Info(query) => Some(query),
            Self::Optimization(_) => None,
        }
    }
}

/// Compiles parse trees into query models.
pub struct QueryCompiler<'db> {
    db: &'db dyn Database,
    resolver: EntityResolver<'db>,
}

impl<'db> QueryCompiler<'db> {
    /// Creates a compiler over the given database.
    #[must_use]
    pub const fn new(db: &'db dyn Database) -> Self {
        Self {
            db,
            resolver: EntityResolver::new(db),
        }
    }

    /// Compiles one parse tree.
    ///
    /// # Errors
    ///
    /// Returns a resolution error if an entity span matches nothing, or a
    /// semantic error for objective/output violations.
    pub fn compile(&self, ast: &QueryAst) -> Result<Query> {
        match ast {
            QueryAst::Optimization(opt) => {
                let query = self.compile_optimization(opt)?;
                debug!(%query, "compiled optimization query");
                Ok(Query::Optimization(query))
            }
            QueryAst::RecipesFor(span) => Ok(Query::Info(self.compile_recipes_for(span)?)),
            QueryAst::RecipesFrom(span) => Ok(Query::Info(self.compile_recipes_from(span)?)),
            QueryAst::EntityDetails(span) => Ok(Query::Info(self.compile_entity_details(span)?)),
        }
    }

    // =========================================================================
    // Optimization queries
    // =========================================================================

    fn compile_optimization(&self, ast: &OptimizationAst) -> Result<OptimizationQuery> {
        let mut query = OptimizationQuery::new();
        self.compile_outputs(&ast.outputs, &mut query)?;
        self.compile_inputs(&ast.inputs, &mut query)?;
        self.compile_includes(&ast.includes, &mut query)?;
        self.compile_excludes(&ast.excludes, &mut query)?;
        Ok(query)
    }

    /// Resolves a clause subject to its variables: literals pass through,
    /// entity spans resolve against the allowed types.
    fn clause_vars(&self, subject: &Subject, allowed: &[TypeTag]) -> Result<Vec<Var>> {
        match subject {
            Subject::Literal(synthetic) => Ok(vec![Var::Synthetic(*synthetic)]),
            Subject::Entity(span) => {
                let matches = self.resolver.resolve(&span.text, allowed);
                if matches.is_empty() {
                    return Err(Error::resolution(&span.text, allowed));
                }
                Ok(matches
                    .into_iter()
                    .map(|entity| Var::Entity(entity.var().clone()))
                    .collect())
            }
        }
    }

    fn compile_outputs(
        &self,
        clauses: &[ClauseAst],
        query: &mut OptimizationQuery,
    ) -> Result<()> {
        if clauses.is_empty() {
            return Err(Error::empty_outputs());
        }
        for clause in clauses {
            let vars = self.clause_vars(&clause.subject, OUTPUT_TYPES)?;
            match clause.amount {
                Amount::Objective => {
                    if query.has_objective() {
                        return Err(Error::duplicate_objective());
                    }
                    query.set_objective(Objective::maximize(vars));
                }
                Amount::Any => {
                    for var in vars {
                        query.add_output(var, None, clause.strict);
                    }
                }
                Amount::Count(amount) => {
                    for var in vars {
                        query.add_output(var, Some(amount), clause.strict);
                    }
                }
            }
            if clause.strict {
                query.mark_outputs_strict();
            }
        }
        Ok(())
    }

    fn compile_inputs(&self, clauses: &[ClauseAst], query: &mut OptimizationQuery) -> Result<()> {
        if clauses.is_empty() {
            // No input preference given: the default goal is to minimize raw
            // resource consumption, unless an output clause already chose an
            // objective.
            if !query.has_objective() {
                query.set_objective(Objective::minimize([Var::Synthetic(
                    SyntheticVar::UnweightedResources,
                )]));
            }
            return Ok(());
        }
        for clause in clauses {
            let vars = self.clause_vars(&clause.subject, INPUT_TYPES)?;
            match clause.amount {
                Amount::Objective => {
                    if query.has_objective() {
                        return Err(Error::duplicate_objective());
                    }
                    query.set_objective(Objective::minimize(vars));
                }
                Amount::Any => {
                    for var in vars {
                        query.add_input(var, None, clause.strict);
                    }
                }
                Amount::Count(amount) => {
                    for var in vars {
                        query.add_input(var, Some(amount), clause.strict);
                    }
                }
            }
            if clause.strict {
                query.mark_inputs_strict();
            }
        }
        Ok(())
    }

    fn compile_includes(
        &self,
        clauses: &[ClauseAst],
        query: &mut OptimizationQuery,
    ) -> Result<()> {
        for clause in clauses {
            for var in self.clause_vars(&clause.subject, SELECTION_TYPES)? {
                query.add_include(var);
            }
        }
        Ok(())
    }

    fn compile_excludes(
        &self,
        clauses: &[ClauseAst],
        query: &mut OptimizationQuery,
    ) -> Result<()> {
        for clause in clauses {
            for var in self.clause_vars(&clause.subject, SELECTION_TYPES)? {
                query.add_exclude(var);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Information queries
    // =========================================================================

    fn resolve_span(&self, span: &EntitySpan, allowed: &[TypeTag]) -> Result<Vec<Var>> {
        self.clause_vars(&Subject::Entity(span.clone()), allowed)
    }

    fn compile_recipes_for(&self, span: &EntitySpan) -> Result<InfoQuery> {
        let mut query = InfoQuery::new();
        for var in self.resolve_span(span, RECIPES_FOR_TYPES)? {
            let Var::Entity(id) = var else { continue };
            match id.tag() {
                TypeTag::Item | TypeTag::Resource => {
                    query.extend(self.db.recipes_for_product(&id));
                }
                TypeTag::Crafter => query.extend(self.db.recipes_for_crafter(&id)),
                TypeTag::Generator => query.extend(self.db.power_recipes_for_generator(&id)),
                TypeTag::Recipe | TypeTag::PowerRecipe => {}
            }
        }
        Ok(query)
    }

    fn compile_recipes_from(&self, span: &EntitySpan) -> Result<InfoQuery> {
        let mut query = InfoQuery::new();
        for var in self.resolve_span(span, INPUT_TYPES)? {
            let Var::Entity(id) = var else { continue };
            query.extend(self.db.recipes_for_ingredient(&id));
        }
        Ok(query)
    }

    fn compile_entity_details(&self, span: &EntitySpan) -> Result<InfoQuery> {
        let matches = self.resolver.resolve(&span.text, &TypeTag::ALL);
        if matches.is_empty() {
            return Err(Error::resolution(&span.text, &TypeTag::ALL));
        }
        let mut query = InfoQuery::new();
        query.extend(matches);
        Ok(query)
    }
}

// podium-core/src/domain/rules.rs
//
// Declarative rule configuration. Rules form a small closed set of tagged
// variants (required-field check, type check, named constraint) so the
// rule book stays pure data: no embedded scripting, no free-form predicates.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::dataset::{DatasetKind, FieldType};
use crate::domain::error::DomainError;

/// The full rule configuration for a run, keyed by dataset kind.
/// Loaded once before the run starts (no ambient/global lookup).
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RuleBook {
    #[serde(flatten)]
    pub rulesets: HashMap<DatasetKind, RuleSet>,
}

impl RuleBook {
    pub fn get(&self, kind: DatasetKind) -> Option<&RuleSet> {
        self.rulesets.get(&kind)
    }

    /// Check every rule set's declared-field invariant. Fails fast at load
    /// time rather than mid-run.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (kind, ruleset) in &self.rulesets {
            ruleset
                .validate()
                .map_err(|cause| DomainError::RuleSetError {
                    dataset: kind.to_string(),
                    cause,
                })?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RuleSet {
    #[serde(default)]
    pub required_fields: Vec<String>,

    // Fields that may be typed/constrained without being required
    #[serde(default)]
    pub optional_fields: Vec<String>,

    // Ordered list, not a mapping: YAML mappings lose declaration order
    // through typed maps, and verdict order must be deterministic.
    #[serde(default)]
    pub data_types: Vec<TypeSpec>,

    #[serde(default)]
    pub constraints: Vec<ConstraintSpec>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeSpec {
    pub field: String,
    #[serde(rename = "type")]
    pub expected: FieldType,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConstraintSpec {
    pub name: String,
    #[serde(flatten)]
    pub predicate: ConstraintKind,
}

/// Closed set of constraint predicates. Each one maps to a single
/// aggregate statistic request against the dataset source — never a
/// per-row scan returned to the caller.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Minimum string length across the column must be >= value.
    MinLength { field: String, value: u64 },
    /// Minimum value across a numeric column must be >= 0.
    NonNegative { field: String },
    /// Every distinct column value must belong to the reference set.
    ValidSet { field: String, values: Vec<String> },
    /// Every distinct column value must match the regex.
    MatchesPattern { field: String, pattern: String },
}

impl ConstraintKind {
    pub fn field(&self) -> &str {
        match self {
            ConstraintKind::MinLength { field, .. }
            | ConstraintKind::NonNegative { field }
            | ConstraintKind::ValidSet { field, .. }
            | ConstraintKind::MatchesPattern { field, .. } => field,
        }
    }
}

impl RuleSet {
    /// Invariant: every typed or constrained field must be declared
    /// (required or explicitly optional), and patterns must compile.
    fn validate(&self) -> Result<(), String> {
        let declared: HashSet<&str> = self
            .required_fields
            .iter()
            .chain(self.optional_fields.iter())
            .map(String::as_str)
            .collect();

        for spec in &self.data_types {
            if !declared.contains(spec.field.as_str()) {
                return Err(format!("typed field '{}' is not declared", spec.field));
            }
        }
        for constraint in &self.constraints {
            let field = constraint.predicate.field();
            if !declared.contains(field) {
                return Err(format!(
                    "constraint '{}' references undeclared field '{}'",
                    constraint.name, field
                ));
            }
            if let ConstraintKind::MatchesPattern { pattern, .. } = &constraint.predicate {
                regex::Regex::new(pattern).map_err(|e| {
                    format!("constraint '{}' has an invalid pattern: {}", constraint.name, e)
                })?;
            }
        }
        Ok(())
    }

    /// Expand into the ordered rule sequence the evaluator walks:
    /// required-field checks first (declaration order), then type checks,
    /// then named constraints. An empty rule set expands to nothing.
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules = Vec::with_capacity(
            self.required_fields.len() + self.data_types.len() + self.constraints.len(),
        );
        for field in &self.required_fields {
            rules.push(Rule::RequiredField {
                field: field.clone(),
            });
        }
        for spec in &self.data_types {
            rules.push(Rule::TypeCheck {
                field: spec.field.clone(),
                expected: spec.expected,
            });
        }
        for constraint in &self.constraints {
            rules.push(Rule::Constraint(constraint.clone()));
        }
        rules
    }

    pub fn is_empty(&self) -> bool {
        self.required_fields.is_empty()
            && self.data_types.is_empty()
            && self.constraints.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Rule {
    RequiredField { field: String },
    TypeCheck { field: String, expected: FieldType },
    Constraint(ConstraintSpec),
}

impl Rule {
    pub fn id(&self) -> String {
        match self {
            Rule::RequiredField { field } => format!("required:{}", field),
            Rule::TypeCheck { field, .. } => format!("type:{}", field),
            Rule::Constraint(spec) => spec.name.clone(),
        }
    }
}

// --- VERDICTS ---

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    TypeMismatch,
    Constraint,
}

/// The outcome of evaluating one rule against one dataset.
/// Immutable once produced; violations are data, never errors.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuleVerdict {
    pub rule_id: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<ViolationKind>,
    pub detail: String,
}

impl RuleVerdict {
    pub fn pass(rule_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed: true,
            violation: None,
            detail: detail.into(),
        }
    }

    pub fn fail(
        rule_id: impl Into<String>,
        violation: ViolationKind,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed: false,
            violation: Some(violation),
            detail: detail.into(),
        }
    }
}

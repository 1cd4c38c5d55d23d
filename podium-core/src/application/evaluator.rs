// podium-core/src/application/evaluator.rs
//
// Walks a rule set against one dataset snapshot. Violations become failed
// verdicts and evaluation continues; only a collaborator failure aborts.

use tracing::debug;

use crate::domain::dataset::{Dataset, FieldType};
use crate::domain::error::DomainError;
use crate::domain::rules::{ConstraintKind, ConstraintSpec, Rule, RuleSet, RuleVerdict, ViolationKind};
use crate::error::PodiumError;
use crate::ports::source::DatasetSource;

pub struct RuleEvaluator;

impl RuleEvaluator {
    /// Produce one verdict per expanded rule, in declaration order.
    /// An empty rule set yields an empty sequence (not a failure).
    pub async fn evaluate(
        source: &dyn DatasetSource,
        dataset: &Dataset,
        ruleset: &RuleSet,
    ) -> Result<Vec<RuleVerdict>, PodiumError> {
        let rules = ruleset.rules();
        let mut verdicts = Vec::with_capacity(rules.len());

        for rule in &rules {
            let verdict = match rule {
                Rule::RequiredField { field } => Self::check_required(dataset, field),
                Rule::TypeCheck { field, expected } => Self::check_type(dataset, field, *expected),
                Rule::Constraint(spec) => Self::check_constraint(source, dataset, spec).await?,
            };
            debug!(rule = %verdict.rule_id, passed = verdict.passed, "rule evaluated");
            verdicts.push(verdict);
        }

        Ok(verdicts)
    }

    /// Independent of whether the column, if present, would be empty.
    fn check_required(dataset: &Dataset, field: &str) -> RuleVerdict {
        let rule_id = format!("required:{}", field);
        if dataset.has_column(field) {
            RuleVerdict::pass(rule_id, format!("column '{}' is present", field))
        } else {
            RuleVerdict::fail(
                rule_id,
                ViolationKind::MissingField,
                format!("required column '{}' is absent from the dataset", field),
            )
        }
    }

    /// Declared semantic types only; cell sampling is rejected by design
    /// (too costly on full datasets).
    fn check_type(dataset: &Dataset, field: &str, expected: FieldType) -> RuleVerdict {
        let rule_id = format!("type:{}", field);
        match dataset.column(field) {
            // Fails closed: a typed field missing from the schema is a violation.
            None => RuleVerdict::fail(
                rule_id,
                ViolationKind::TypeMismatch,
                format!("typed column '{}' is absent from the dataset", field),
            ),
            Some(col) if expected.accepts(col.data_type) => RuleVerdict::pass(
                rule_id,
                format!("column '{}' is {}", field, col.data_type),
            ),
            Some(col) => RuleVerdict::fail(
                rule_id,
                ViolationKind::TypeMismatch,
                format!(
                    "column '{}' declared {} but dataset reports {}",
                    field, expected, col.data_type
                ),
            ),
        }
    }

    /// Constraints are predicates over aggregate statistics. Only the
    /// aggregate pass/fail and one representative violating example are
    /// reported; per-row results never cross this boundary.
    async fn check_constraint(
        source: &dyn DatasetSource,
        dataset: &Dataset,
        spec: &ConstraintSpec,
    ) -> Result<RuleVerdict, PodiumError> {
        let field = spec.predicate.field();

        // Fails closed when the constrained column is absent.
        if !dataset.has_column(field) {
            return Ok(RuleVerdict::fail(
                &spec.name,
                ViolationKind::Constraint,
                format!("constrained column '{}' is absent from the dataset", field),
            ));
        }

        let verdict = match &spec.predicate {
            ConstraintKind::MinLength { field, value } => {
                let min = Self::aggregate(source.min_string_length(dataset, field).await, field)?;
                match min {
                    // No non-null values: no evidence of violation.
                    None => RuleVerdict::pass(&spec.name, "column holds no non-null values"),
                    Some(min) if min >= *value => RuleVerdict::pass(
                        &spec.name,
                        format!("minimum length {} >= {}", min, value),
                    ),
                    Some(min) => RuleVerdict::fail(
                        &spec.name,
                        ViolationKind::Constraint,
                        format!(
                            "column '{}' holds a value of length {} (minimum {})",
                            field, min, value
                        ),
                    ),
                }
            }

            ConstraintKind::NonNegative { field } => {
                let min = Self::aggregate(source.min_numeric(dataset, field).await, field)?;
                match min {
                    None => RuleVerdict::pass(&spec.name, "column holds no non-null values"),
                    Some(min) if min >= 0.0 => {
                        RuleVerdict::pass(&spec.name, format!("minimum value {} >= 0", min))
                    }
                    Some(min) => RuleVerdict::fail(
                        &spec.name,
                        ViolationKind::Constraint,
                        format!("column '{}' holds negative value {}", field, min),
                    ),
                }
            }

            ConstraintKind::ValidSet { field, values } => {
                let distinct = Self::aggregate(source.distinct_values(dataset, field).await, field)?;
                match distinct.iter().find(|v| !values.contains(v)) {
                    None => RuleVerdict::pass(
                        &spec.name,
                        format!("{} distinct values all in reference set", distinct.len()),
                    ),
                    Some(example) => RuleVerdict::fail(
                        &spec.name,
                        ViolationKind::Constraint,
                        format!("column '{}' holds '{}' outside the reference set", field, example),
                    ),
                }
            }

            ConstraintKind::MatchesPattern { field, pattern } => {
                // Patterns are compiled at rule-book load; a failure here means
                // the rule set bypassed validation.
                let re = regex::Regex::new(pattern).map_err(|e| DomainError::RuleSetError {
                    dataset: dataset.kind.to_string(),
                    cause: format!("constraint '{}': {}", spec.name, e),
                })?;
                let distinct = Self::aggregate(source.distinct_values(dataset, field).await, field)?;
                match distinct.iter().find(|v| !re.is_match(v)) {
                    None => RuleVerdict::pass(
                        &spec.name,
                        format!("{} distinct values all match pattern", distinct.len()),
                    ),
                    Some(example) => RuleVerdict::fail(
                        &spec.name,
                        ViolationKind::Constraint,
                        format!("column '{}' holds '{}' not matching '{}'", field, example, pattern),
                    ),
                }
            }
        };

        Ok(verdict)
    }

    /// A collaborator that cannot supply an aggregate is a fatal
    /// profiling-class failure for this dataset.
    fn aggregate<T>(result: Result<T, PodiumError>, column: &str) -> Result<T, PodiumError> {
        result.map_err(|e| {
            DomainError::ProfilingError {
                column: column.to_string(),
                cause: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::dataset::{ColumnSchema, DatasetKind};
    use async_trait::async_trait;
    use std::collections::HashMap;

    // --- MOCK SOURCE (aggregate statistics per column) ---
    #[derive(Default)]
    struct MockSource {
        min_lengths: HashMap<String, u64>,
        min_values: HashMap<String, f64>,
        values: HashMap<String, Vec<String>>,
    }

    #[async_trait]
    impl DatasetSource for MockSource {
        async fn load(&self, _kind: DatasetKind) -> Result<Dataset, PodiumError> {
            Err(PodiumError::InternalError("not used".into()))
        }
        async fn total_rows(&self, dataset: &Dataset) -> Result<u64, PodiumError> {
            Ok(dataset.row_count)
        }
        async fn count_nulls(&self, _dataset: &Dataset, _column: &str) -> Result<u64, PodiumError> {
            Ok(0)
        }
        async fn count_distinct_rows(&self, dataset: &Dataset) -> Result<u64, PodiumError> {
            Ok(dataset.row_count)
        }
        async fn min_string_length(
            &self,
            _dataset: &Dataset,
            column: &str,
        ) -> Result<Option<u64>, PodiumError> {
            Ok(self.min_lengths.get(column).copied())
        }
        async fn min_numeric(
            &self,
            _dataset: &Dataset,
            column: &str,
        ) -> Result<Option<f64>, PodiumError> {
            Ok(self.min_values.get(column).copied())
        }
        async fn distinct_values(
            &self,
            _dataset: &Dataset,
            column: &str,
        ) -> Result<Vec<String>, PodiumError> {
            Ok(self.values.get(column).cloned().unwrap_or_default())
        }
    }

    fn dataset(columns: &[(&str, FieldType)]) -> Dataset {
        Dataset {
            kind: DatasetKind::Medals,
            columns: columns
                .iter()
                .map(|(name, ty)| ColumnSchema {
                    name: (*name).to_string(),
                    data_type: *ty,
                })
                .collect(),
            row_count: 100,
        }
    }

    fn ruleset(yaml: &str) -> RuleSet {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[tokio::test]
    async fn test_empty_ruleset_yields_no_verdicts() {
        let source = MockSource::default();
        let ds = dataset(&[("gold", FieldType::Integer)]);
        let verdicts = RuleEvaluator::evaluate(&source, &ds, &RuleSet::default())
            .await
            .unwrap();
        assert!(verdicts.is_empty());
    }

    #[tokio::test]
    async fn test_missing_required_field() {
        let source = MockSource::default();
        let ds = dataset(&[("name", FieldType::String)]);
        let rs = ruleset("required_fields: [name, team_name]");

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();

        assert_eq!(verdicts.len(), 2);
        assert!(verdicts[0].passed);
        assert!(!verdicts[1].passed);
        assert_eq!(verdicts[1].violation, Some(ViolationKind::MissingField));
    }

    #[tokio::test]
    async fn test_type_mismatch() {
        let source = MockSource::default();
        let ds = dataset(&[("gold", FieldType::String)]);
        let rs = ruleset(
            r#"
            required_fields: [gold]
            data_types:
              - { field: gold, type: integer }
            "#,
        );

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();
        let type_verdict = &verdicts[1];
        assert!(!type_verdict.passed);
        assert_eq!(type_verdict.violation, Some(ViolationKind::TypeMismatch));
    }

    #[tokio::test]
    async fn test_double_accepts_integer_column() {
        let source = MockSource::default();
        let ds = dataset(&[("height", FieldType::Integer)]);
        let rs = ruleset(
            r#"
            required_fields: [height]
            data_types:
              - { field: height, type: double }
            "#,
        );

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();
        assert!(verdicts[1].passed);
    }

    #[tokio::test]
    async fn test_negative_medal_count_fails_constraint() {
        let source = MockSource {
            min_values: HashMap::from([("gold".to_string(), -1.0)]),
            ..Default::default()
        };
        let ds = dataset(&[("gold", FieldType::Integer)]);
        let rs = ruleset(
            r#"
            required_fields: [gold]
            constraints:
              - name: medal_counts_non_negative
                kind: non_negative
                field: gold
            "#,
        );

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();
        let constraint = verdicts.last().unwrap();
        assert_eq!(constraint.rule_id, "medal_counts_non_negative");
        assert!(!constraint.passed);
        assert_eq!(constraint.violation, Some(ViolationKind::Constraint));
        assert!(constraint.detail.contains("-1"));
    }

    #[tokio::test]
    async fn test_min_length_constraint() {
        let source = MockSource {
            min_lengths: HashMap::from([("name".to_string(), 1)]),
            ..Default::default()
        };
        let ds = dataset(&[("name", FieldType::String)]);
        let rs = ruleset(
            r#"
            required_fields: [name]
            constraints:
              - name: name_min_length
                kind: min_length
                field: name
                value: 2
            "#,
        );

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();
        assert!(!verdicts.last().unwrap().passed);
    }

    #[tokio::test]
    async fn test_valid_set_reports_representative_example() {
        let source = MockSource {
            values: HashMap::from([(
                "country".to_string(),
                vec!["FRA".to_string(), "XXX".to_string()],
            )]),
            ..Default::default()
        };
        let ds = dataset(&[("country", FieldType::String)]);
        let rs = ruleset(
            r#"
            required_fields: [country]
            constraints:
              - name: country_valid_codes
                kind: valid_set
                field: country
                values: [FRA, USA, JPN]
            "#,
        );

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();
        let constraint = verdicts.last().unwrap();
        assert!(!constraint.passed);
        assert!(constraint.detail.contains("XXX"));
    }

    #[tokio::test]
    async fn test_pattern_constraint() {
        let source = MockSource {
            values: HashMap::from([(
                "code".to_string(),
                vec!["FRA".to_string(), "fr1".to_string()],
            )]),
            ..Default::default()
        };
        let ds = dataset(&[("code", FieldType::String)]);
        let rs = ruleset(
            r#"
            required_fields: [code]
            constraints:
              - name: code_format
                kind: matches_pattern
                field: code
                pattern: "^[A-Z]{3}$"
            "#,
        );

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();
        let constraint = verdicts.last().unwrap();
        assert!(!constraint.passed);
        assert!(constraint.detail.contains("fr1"));
    }

    #[tokio::test]
    async fn test_constraint_on_absent_column_fails_closed() {
        let source = MockSource::default();
        let ds = dataset(&[("name", FieldType::String)]);
        let rs = ruleset(
            r#"
            required_fields: [name, gold]
            constraints:
              - name: medal_counts_non_negative
                kind: non_negative
                field: gold
            "#,
        );

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();
        let constraint = verdicts.last().unwrap();
        assert!(!constraint.passed);
        assert!(constraint.detail.contains("absent"));
    }

    #[tokio::test]
    async fn test_empty_column_passes_vacuously() {
        // min_string_length returns None: no non-null values
        let source = MockSource::default();
        let ds = dataset(&[("name", FieldType::String)]);
        let rs = ruleset(
            r#"
            required_fields: [name]
            constraints:
              - name: name_min_length
                kind: min_length
                field: name
                value: 2
            "#,
        );

        let verdicts = RuleEvaluator::evaluate(&source, &ds, &rs).await.unwrap();
        assert!(verdicts.last().unwrap().passed);
    }
}

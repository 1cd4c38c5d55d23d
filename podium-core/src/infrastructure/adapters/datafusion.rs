// podium-core/src/infrastructure/adapters/datafusion.rs
//
// DataFusion-backed implementation of the DatasetSource port. Every
// logical aggregate request becomes one SQL query; row data never
// crosses into the core.

use async_trait::async_trait;
use datafusion::arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, UInt64Array,
};
use datafusion::arrow::datatypes::DataType;
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::arrow::util::display::array_value_to_string;
use datafusion::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::domain::dataset::{ColumnSchema, Dataset, DatasetKind, FieldType};
use crate::error::PodiumError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::source::DatasetSource;

pub struct DataFusionSource {
    ctx: Arc<SessionContext>,
}

impl DataFusionSource {
    /// Register one CSV per dataset kind found under `data_dir`
    /// (`<kind>.csv`, discovered recursively). Kinds without a data file
    /// fail fast.
    pub async fn from_data_dir(
        data_dir: &Path,
        kinds: &[DatasetKind],
    ) -> Result<Self, PodiumError> {
        let ctx = SessionContext::new();

        for &kind in kinds {
            let filename = format!("{}.csv", kind);
            let path = Self::discover_file(data_dir, &filename).ok_or_else(|| {
                InfrastructureError::DataFileNotFound(
                    kind.to_string(),
                    data_dir.join(&filename).to_string_lossy().to_string(),
                )
            })?;

            let path_str = path.to_str().ok_or_else(|| {
                PodiumError::InternalError(format!("Invalid path for {}: {:?}", kind, path))
            })?;
            ctx.register_csv(kind.as_str(), path_str, CsvReadOptions::default())
                .await
                .map_err(InfrastructureError::from)?;
            info!(kind = %kind, path = %path_str, "Registered CSV source");
        }

        Ok(Self { ctx: Arc::new(ctx) })
    }

    fn discover_file(data_dir: &Path, filename: &str) -> Option<std::path::PathBuf> {
        walkdir::WalkDir::new(data_dir)
            .into_iter()
            .filter_map(Result::ok)
            .find(|e| e.path().is_file() && e.file_name().to_string_lossy() == filename)
            .map(|e| e.path().to_path_buf())
    }

    async fn collect(&self, query: &str) -> Result<Vec<RecordBatch>, PodiumError> {
        let df = self
            .ctx
            .sql(query)
            .await
            .map_err(InfrastructureError::from)?;
        df.collect()
            .await
            .map_err(InfrastructureError::from)
            .map_err(Into::into)
    }

    async fn query_scalar(&self, query: &str) -> Result<u64, PodiumError> {
        let batches = self.collect(query).await?;
        match Self::scalar_i128(&batches)? {
            Some(v) if v >= 0 => Ok(v as u64),
            Some(v) => Err(PodiumError::InternalError(format!(
                "Negative count {} from '{}'",
                v, query
            ))),
            None => Err(PodiumError::InternalError(format!(
                "No scalar value returned by '{}'",
                query
            ))),
        }
    }

    /// First value of the first column, as a signed integer; None when the
    /// aggregate is NULL (e.g. min() over an empty column).
    fn scalar_i128(batches: &[RecordBatch]) -> Result<Option<i128>, PodiumError> {
        let batch = batches
            .first()
            .ok_or_else(|| PodiumError::InternalError("No result batch returned".into()))?;
        if batch.num_rows() == 0 {
            return Ok(None);
        }
        let col = batch.column(0);
        if col.is_null(0) {
            return Ok(None);
        }

        if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
            Ok(Some(arr.value(0) as i128))
        } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
            Ok(Some(arr.value(0) as i128))
        } else if let Some(arr) = col.as_any().downcast_ref::<UInt64Array>() {
            Ok(Some(arr.value(0) as i128))
        } else {
            Err(PodiumError::InternalError(format!(
                "Could not extract integer scalar from column type {:?}",
                col.data_type()
            )))
        }
    }

    fn scalar_f64(batches: &[RecordBatch]) -> Result<Option<f64>, PodiumError> {
        let batch = batches
            .first()
            .ok_or_else(|| PodiumError::InternalError("No result batch returned".into()))?;
        if batch.num_rows() == 0 {
            return Ok(None);
        }
        let col = batch.column(0);
        if col.is_null(0) {
            return Ok(None);
        }

        if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
            Ok(Some(arr.value(0)))
        } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
            Ok(Some(arr.value(0) as f64))
        } else if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
            Ok(Some(arr.value(0) as f64))
        } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
            Ok(Some(arr.value(0) as f64))
        } else {
            Err(PodiumError::InternalError(format!(
                "Could not extract numeric scalar from column type {:?}",
                col.data_type()
            )))
        }
    }

    fn map_field_type(data_type: &DataType) -> FieldType {
        match data_type {
            DataType::Boolean => FieldType::Boolean,
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => FieldType::Integer,
            DataType::Float16 | DataType::Float32 | DataType::Float64 => FieldType::Double,
            // Utf8 variants and anything exotic degrade to string semantics
            _ => FieldType::String,
        }
    }
}

#[async_trait]
impl DatasetSource for DataFusionSource {
    async fn load(&self, kind: DatasetKind) -> Result<Dataset, PodiumError> {
        let df = self
            .ctx
            .table(kind.as_str())
            .await
            .map_err(InfrastructureError::from)?;

        let columns = df
            .schema()
            .fields()
            .iter()
            .map(|field| ColumnSchema {
                name: field.name().clone(),
                data_type: Self::map_field_type(field.data_type()),
            })
            .collect();

        let row_count = self
            .query_scalar(&format!("SELECT count(*) FROM \"{}\"", kind))
            .await?;

        Ok(Dataset {
            kind,
            columns,
            row_count,
        })
    }

    async fn total_rows(&self, dataset: &Dataset) -> Result<u64, PodiumError> {
        self.query_scalar(&format!("SELECT count(*) FROM \"{}\"", dataset.kind))
            .await
    }

    async fn count_nulls(&self, dataset: &Dataset, column: &str) -> Result<u64, PodiumError> {
        self.query_scalar(&format!(
            "SELECT count(*) FROM \"{}\" WHERE \"{}\" IS NULL",
            dataset.kind, column
        ))
        .await
    }

    async fn count_distinct_rows(&self, dataset: &Dataset) -> Result<u64, PodiumError> {
        self.query_scalar(&format!(
            "SELECT count(*) FROM (SELECT DISTINCT * FROM \"{}\") AS deduplicated",
            dataset.kind
        ))
        .await
    }

    async fn min_string_length(
        &self,
        dataset: &Dataset,
        column: &str,
    ) -> Result<Option<u64>, PodiumError> {
        let batches = self
            .collect(&format!(
                "SELECT min(length(\"{}\")) FROM \"{}\"",
                column, dataset.kind
            ))
            .await?;
        Ok(Self::scalar_i128(&batches)?.map(|v| v.max(0) as u64))
    }

    async fn min_numeric(
        &self,
        dataset: &Dataset,
        column: &str,
    ) -> Result<Option<f64>, PodiumError> {
        let batches = self
            .collect(&format!(
                "SELECT min(\"{}\") FROM \"{}\"",
                column, dataset.kind
            ))
            .await?;
        Self::scalar_f64(&batches)
    }

    async fn distinct_values(
        &self,
        dataset: &Dataset,
        column: &str,
    ) -> Result<Vec<String>, PodiumError> {
        let batches = self
            .collect(&format!(
                "SELECT DISTINCT \"{}\" FROM \"{}\" WHERE \"{}\" IS NOT NULL",
                column, dataset.kind, column
            ))
            .await?;

        let mut values = Vec::new();
        for batch in &batches {
            let col = batch.column(0);
            for row in 0..batch.num_rows() {
                let rendered = array_value_to_string(col, row).map_err(|e| {
                    PodiumError::InternalError(format!(
                        "Could not render value of column '{}': {}",
                        column, e
                    ))
                })?;
                values.push(rendered);
            }
        }
        Ok(values)
    }
}

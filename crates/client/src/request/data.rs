//! Mutation and flush requests.

use super::{RestRequest, require_non_empty};
use crate::data::Field;
use crate::error::{Error, Result};
use milvus_client_proto::common::{MsgBase, MsgType};
use milvus_client_proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

/// Insert column data into a collection.
#[derive(Debug, Clone)]
pub struct InsertRequest {
    /// Target collection.
    pub collection_name: Box<str>,
    /// Target partition, the default partition when empty.
    pub partition_name: Box<str>,
    /// One column per schema field.
    pub fields: Vec<Field>,
}

impl InsertRequest {
    /// Insert into the default partition.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, fields: Vec<Field>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: Box::from(""),
            fields,
        }
    }

    /// Target a specific partition.
    #[must_use]
    pub fn partition_name(mut self, partition_name: impl Into<Box<str>>) -> Self {
        self.partition_name = partition_name.into();
        self
    }

    /// Row count shared by every column.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.fields.first().map_or(0, Field::row_count)
    }

    /// Check the request before any bytes are sent: at least one column,
    /// no empty columns, and every column the same length.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        if self.fields.is_empty() {
            return Err(Error::validation("insert requires at least one field"));
        }
        let rows = self.row_count();
        if rows == 0 {
            return Err(Error::validation("insert requires at least one row"));
        }
        for field in &self.fields {
            if field.row_count() != rows {
                return Err(Error::validation(format!(
                    "field '{}' has {} rows but '{}' has {rows}",
                    field.name,
                    field.row_count(),
                    self.fields[0].name
                )));
            }
        }
        Ok(())
    }

    /// Render the gRPC message.
    pub fn to_grpc(&self, db_name: &str) -> Result<proto::InsertRequest> {
        let num_rows = u32::try_from(self.row_count())
            .map_err(|_| Error::validation("insert exceeds the per-request row limit"))?;
        Ok(proto::InsertRequest {
            base: Some(MsgBase::new(MsgType::Insert)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_name: self.partition_name.as_ref().to_owned(),
            fields_data: self.fields.iter().map(Field::to_proto).collect(),
            hash_keys: Vec::new(),
            num_rows,
        })
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/entities",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_name": self.partition_name.as_ref(),
                "fields_data": self.fields.iter().map(Field::to_rest_json).collect::<Vec<_>>(),
                "num_rows": self.row_count(),
            }),
        ))
    }
}

/// Delete rows matched by a boolean expression, e.g. `film_id in [1, 2]`.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    /// Target collection.
    pub collection_name: Box<str>,
    /// Target partition, all partitions when empty.
    pub partition_name: Box<str>,
    /// Boolean expression selecting the rows to delete.
    pub expr: Box<str>,
}

impl DeleteRequest {
    /// Delete across all partitions.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, expr: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_name: Box::from(""),
            expr: expr.into(),
        }
    }

    /// Target a specific partition.
    #[must_use]
    pub fn partition_name(mut self, partition_name: impl Into<Box<str>>) -> Self {
        self.partition_name = partition_name.into();
        self
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.expr, "delete expression")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::DeleteRequest {
        proto::DeleteRequest {
            base: Some(MsgBase::new(MsgType::Delete)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_name: self.partition_name.as_ref().to_owned(),
            expr: self.expr.as_ref().to_owned(),
            hash_keys: Vec::new(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::DELETE,
            "/api/v1/entities",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_name": self.partition_name.as_ref(),
                "expr": self.expr.as_ref(),
            }),
        ))
    }
}

/// Seal the growing segments of collections onto storage.
#[derive(Debug, Clone)]
pub struct FlushRequest {
    /// Collections to flush.
    pub collection_names: Vec<String>,
}

impl FlushRequest {
    /// Flush one collection.
    #[must_use]
    pub fn new(collection_name: impl Into<String>) -> Self {
        Self {
            collection_names: vec![collection_name.into()],
        }
    }

    /// Flush several collections at once.
    #[must_use]
    pub const fn collections(collection_names: Vec<String>) -> Self {
        Self { collection_names }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        if self.collection_names.is_empty() {
            return Err(Error::validation(
                "flush requires at least one collection name",
            ));
        }
        for name in &self.collection_names {
            require_non_empty(name, "collection name")?;
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::FlushRequest {
        proto::FlushRequest {
            base: Some(MsgBase::new(MsgType::Flush)),
            db_name: db_name.to_owned(),
            collection_names: self.collection_names.clone(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/persist",
            json!({
                "db_name": db_name,
                "collection_names": self.collection_names,
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_fields() -> Vec<Field> {
        let embedding = match Field::float_vectors("embedding", 2, vec![vec![1.0, 2.0], vec![3.0, 4.0]]) {
            Ok(field) => field,
            Err(error) => {
                assert!(false, "vector build failed: {error}");
                return Vec::new();
            }
        };
        vec![Field::int64_values("film_id", vec![1, 2]), embedding]
    }

    #[test]
    fn insert_counts_rows_and_renders_columns() {
        let request = InsertRequest::new("films", two_row_fields());
        assert!(request.validate().is_ok());
        match request.to_grpc("default") {
            Ok(wire) => {
                assert_eq!(wire.num_rows, 2);
                assert_eq!(wire.fields_data.len(), 2);
            }
            Err(error) => assert!(false, "grpc render failed: {error}"),
        }
    }

    #[test]
    fn insert_rejects_mismatched_row_counts() {
        let fields = vec![
            Field::int64_values("film_id", vec![1, 2]),
            Field::double_values("rating", vec![4.5]),
        ];
        let request = InsertRequest::new("films", fields);
        let error = request.validate().err();
        assert!(matches!(error, Some(Error::Validation(_))));
    }

    #[test]
    fn insert_rejects_zero_rows() {
        let request = InsertRequest::new("films", vec![Field::int64_values("film_id", Vec::new())]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn delete_requires_an_expression() {
        assert!(DeleteRequest::new("films", " ").validate().is_err());
        let request = DeleteRequest::new("films", "film_id in [1, 2]");
        assert!(request.validate().is_ok());
        assert_eq!(request.to_grpc("default").expr, "film_id in [1, 2]");
    }

    #[test]
    fn flush_targets_the_persist_endpoint() {
        let request = FlushRequest::new("films");
        match request.to_rest("default") {
            Ok(rest) => assert_eq!(rest.path, "/api/v1/persist"),
            Err(error) => assert!(false, "rest render failed: {error}"),
        }
    }
}

//! Search, query, and distance requests.

use super::{RestRequest, pairs_to_proto, require_non_empty};
use crate::data::IdList;
use crate::error::{Error, Result};
use crate::schema::ConsistencyLevel;
use bytes::BytesMut;
use milvus_client_proto::common::{
    DslType, MsgBase, MsgType, PlaceholderGroup, PlaceholderType, PlaceholderValue,
};
use milvus_client_proto::milvus as proto;
use milvus_client_proto::schema::{self as proto_schema, vector_field};
use prost::Message as _;
use reqwest::Method;
use serde_json::json;

/// The query vectors of a search, one entry per query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryVectors {
    /// Dense float vectors.
    Float(Vec<Vec<f32>>),
    /// Bit-packed binary vectors, `dim / 8` bytes per row.
    Binary(Vec<Vec<u8>>),
}

impl QueryVectors {
    fn len(&self) -> usize {
        match self {
            Self::Float(rows) => rows.len(),
            Self::Binary(rows) => rows.len(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::Float(rows) => {
                let dim = rows.first().map_or(0, Vec::len);
                if dim == 0 {
                    return Err(Error::validation(
                        "search requires at least one non-empty query vector",
                    ));
                }
                if rows.iter().any(|row| row.len() != dim) {
                    return Err(Error::validation("query vectors must share one dim"));
                }
            }
            Self::Binary(rows) => {
                let width = rows.first().map_or(0, Vec::len);
                if width == 0 {
                    return Err(Error::validation(
                        "search requires at least one non-empty query vector",
                    ));
                }
                if rows.iter().any(|row| row.len() != width) {
                    return Err(Error::validation("query vectors must share one dim"));
                }
            }
        }
        Ok(())
    }

    /// Serialize as a `PlaceholderGroup`, the payload the gRPC surface
    /// expects under tag `$0`.
    fn encode_placeholder_group(&self) -> Vec<u8> {
        let (placeholder_type, values) = match self {
            Self::Float(rows) => {
                let values = rows
                    .iter()
                    .map(|row| {
                        let mut bytes = Vec::with_capacity(row.len() * 4);
                        for value in row {
                            bytes.extend_from_slice(&value.to_le_bytes());
                        }
                        bytes
                    })
                    .collect();
                (PlaceholderType::FloatVector, values)
            }
            Self::Binary(rows) => (PlaceholderType::BinaryVector, rows.clone()),
        };
        let group = PlaceholderGroup {
            placeholders: vec![PlaceholderValue {
                tag: "$0".to_owned(),
                r#type: placeholder_type as i32,
                values,
            }],
        };
        let mut buf = BytesMut::with_capacity(group.encoded_len());
        // encoding into a sized BytesMut cannot fail
        let _ = group.encode(&mut buf);
        buf.to_vec()
    }

    fn to_rest_json(&self) -> serde_json::Value {
        match self {
            Self::Float(rows) => json!(rows),
            Self::Binary(rows) => json!(rows),
        }
    }
}

/// An approximate-nearest-neighbour search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Target collection.
    pub collection_name: Box<str>,
    /// Restrict to these partitions; empty searches everything.
    pub partition_names: Vec<String>,
    /// Boolean filter expression, unfiltered when empty.
    pub expr: Box<str>,
    /// The vector field to search against.
    pub vector_field: Box<str>,
    /// Query vectors.
    pub vectors: QueryVectors,
    /// Hits to return per query.
    pub limit: i64,
    /// Distance metric, e.g. `L2`, `IP`, `HAMMING`.
    pub metric_type: Box<str>,
    /// Index-specific search parameters as a JSON document, e.g.
    /// `{"nprobe":10}`.
    pub params: Box<str>,
    /// Fields to return with each hit.
    pub output_fields: Vec<String>,
    /// Read consistency; the collection default when `None`.
    pub consistency_level: Option<ConsistencyLevel>,
    /// See-your-own-writes timestamp, usually a prior mutation's
    /// timestamp.
    pub guarantee_timestamp: u64,
}

impl SearchRequest {
    /// Build a search with the collection's default consistency.
    #[must_use]
    pub fn new(
        collection_name: impl Into<Box<str>>,
        vector_field: impl Into<Box<str>>,
        vectors: QueryVectors,
        limit: i64,
    ) -> Self {
        Self {
            collection_name: collection_name.into(),
            partition_names: Vec::new(),
            expr: Box::from(""),
            vector_field: vector_field.into(),
            vectors,
            limit,
            metric_type: Box::from("L2"),
            params: Box::from("{}"),
            output_fields: Vec::new(),
            consistency_level: None,
            guarantee_timestamp: 0,
        }
    }

    /// Set the filter expression.
    #[must_use]
    pub fn expr(mut self, expr: impl Into<Box<str>>) -> Self {
        self.expr = expr.into();
        self
    }

    /// Set the distance metric.
    #[must_use]
    pub fn metric_type(mut self, metric_type: impl Into<Box<str>>) -> Self {
        self.metric_type = metric_type.into();
        self
    }

    /// Set index-specific search parameters as a JSON document.
    #[must_use]
    pub fn params(mut self, params: impl Into<Box<str>>) -> Self {
        self.params = params.into();
        self
    }

    /// Request output fields with each hit.
    #[must_use]
    pub fn output_fields(mut self, output_fields: Vec<String>) -> Self {
        self.output_fields = output_fields;
        self
    }

    /// Override the read consistency.
    #[must_use]
    pub const fn consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = Some(level);
        self
    }

    /// Make the search observe a prior mutation.
    #[must_use]
    pub const fn guarantee_timestamp(mut self, timestamp: u64) -> Self {
        self.guarantee_timestamp = timestamp;
        self
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.vector_field, "vector field name")?;
        if self.limit <= 0 {
            return Err(Error::validation("limit must be positive"));
        }
        self.vectors.validate()
    }

    fn search_params(&self) -> Vec<(String, String)> {
        vec![
            ("anns_field".to_owned(), self.vector_field.as_ref().to_owned()),
            ("topk".to_owned(), self.limit.to_string()),
            ("metric_type".to_owned(), self.metric_type.as_ref().to_owned()),
            ("params".to_owned(), self.params.as_ref().to_owned()),
            ("round_decimal".to_owned(), "-1".to_owned()),
        ]
    }

    /// Render the gRPC message. Query vectors travel as a serialized
    /// placeholder group.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::SearchRequest {
        let nq = i64::try_from(self.vectors.len()).unwrap_or(i64::MAX);
        proto::SearchRequest {
            base: Some(MsgBase::new(MsgType::Search)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            partition_names: self.partition_names.clone(),
            dsl: self.expr.as_ref().to_owned(),
            placeholder_group: self.vectors.encode_placeholder_group(),
            dsl_type: DslType::BoolExprV1 as i32,
            output_fields: self.output_fields.clone(),
            search_params: pairs_to_proto(&self.search_params()),
            travel_timestamp: 0,
            guarantee_timestamp: self.guarantee_timestamp,
            nq,
            consistency_level: self
                .consistency_level
                .unwrap_or_default()
                .wire_value(),
            use_default_consistency: self.consistency_level.is_none(),
        }
    }

    /// Render the REST call. Vectors travel as plain JSON arrays.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        let search_params: Vec<serde_json::Value> = self
            .search_params()
            .into_iter()
            .map(|(key, value)| json!({ "key": key, "value": value }))
            .collect();
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/search",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "partition_names": self.partition_names,
                "dsl": self.expr.as_ref(),
                "dsl_type": DslType::BoolExprV1 as i32,
                "vectors": self.vectors.to_rest_json(),
                "search_params": search_params,
                "output_fields": self.output_fields,
                "guarantee_timestamp": self.guarantee_timestamp,
            }),
        ))
    }
}

/// A scalar query over a boolean expression.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Target collection.
    pub collection_name: Box<str>,
    /// Boolean expression selecting rows.
    pub expr: Box<str>,
    /// Fields to return.
    pub output_fields: Vec<String>,
    /// Restrict to these partitions; empty queries everything.
    pub partition_names: Vec<String>,
    /// Read consistency; the collection default when `None`.
    pub consistency_level: Option<ConsistencyLevel>,
    /// See-your-own-writes timestamp.
    pub guarantee_timestamp: u64,
}

impl QueryRequest {
    /// Build a query with the collection's default consistency.
    #[must_use]
    pub fn new(collection_name: impl Into<Box<str>>, expr: impl Into<Box<str>>) -> Self {
        Self {
            collection_name: collection_name.into(),
            expr: expr.into(),
            output_fields: Vec::new(),
            partition_names: Vec::new(),
            consistency_level: None,
            guarantee_timestamp: 0,
        }
    }

    /// Request output fields.
    #[must_use]
    pub fn output_fields(mut self, output_fields: Vec<String>) -> Self {
        self.output_fields = output_fields;
        self
    }

    /// Override the read consistency.
    #[must_use]
    pub const fn consistency_level(mut self, level: ConsistencyLevel) -> Self {
        self.consistency_level = Some(level);
        self
    }

    /// Make the query observe a prior mutation.
    #[must_use]
    pub const fn guarantee_timestamp(mut self, timestamp: u64) -> Self {
        self.guarantee_timestamp = timestamp;
        self
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.collection_name, "collection name")?;
        require_non_empty(&self.expr, "query expression")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, db_name: &str) -> proto::QueryRequest {
        proto::QueryRequest {
            base: Some(MsgBase::new(MsgType::Retrieve)),
            db_name: db_name.to_owned(),
            collection_name: self.collection_name.as_ref().to_owned(),
            expr: self.expr.as_ref().to_owned(),
            output_fields: self.output_fields.clone(),
            partition_names: self.partition_names.clone(),
            travel_timestamp: 0,
            guarantee_timestamp: self.guarantee_timestamp,
            query_params: Vec::new(),
            consistency_level: self
                .consistency_level
                .unwrap_or_default()
                .wire_value(),
            use_default_consistency: self.consistency_level.is_none(),
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/query",
            json!({
                "db_name": db_name,
                "collection_name": self.collection_name.as_ref(),
                "expr": self.expr.as_ref(),
                "output_fields": self.output_fields,
                "partition_names": self.partition_names,
                "guarantee_timestamp": self.guarantee_timestamp,
            }),
        ))
    }
}

/// One operand of a distance calculation: stored vectors addressed by
/// primary key, or literal vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorsSource {
    /// Rows of a collection's vector field.
    Stored {
        /// Collection holding the vectors.
        collection_name: Box<str>,
        /// The vector field.
        field_name: Box<str>,
        /// Primary keys of the rows.
        ids: IdList,
    },
    /// Literal dense vectors.
    Float {
        /// Vector dimension.
        dim: i64,
        /// Row-major values, `rows * dim` long.
        values: Vec<f32>,
    },
}

impl VectorsSource {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Stored {
                collection_name,
                field_name,
                ids,
            } => {
                require_non_empty(collection_name, "collection name")?;
                require_non_empty(field_name, "field name")?;
                if ids.is_empty() {
                    return Err(Error::validation(
                        "stored-vector operand requires at least one id",
                    ));
                }
                Ok(())
            }
            Self::Float { dim, values } => {
                if *dim <= 0 {
                    return Err(Error::validation("vector operand requires a positive dim"));
                }
                let dim = usize::try_from(*dim).unwrap_or(usize::MAX);
                if values.is_empty() || values.len() % dim != 0 {
                    return Err(Error::validation(
                        "vector operand values must divide by dim",
                    ));
                }
                Ok(())
            }
        }
    }

    fn to_proto(&self) -> proto::VectorsArray {
        let array = match self {
            Self::Stored {
                collection_name,
                field_name,
                ids,
            } => proto::vectors_array::Array::IdArray(proto::VectorIds {
                collection_name: collection_name.as_ref().to_owned(),
                partition_names: Vec::new(),
                field_name: field_name.as_ref().to_owned(),
                id_array: Some(ids.to_proto()),
            }),
            Self::Float { dim, values } => {
                proto::vectors_array::Array::DataArray(proto_schema::VectorField {
                    dim: *dim,
                    data: Some(vector_field::Data::FloatVector(proto_schema::FloatArray {
                        data: values.clone(),
                    })),
                })
            }
        };
        proto::VectorsArray { array: Some(array) }
    }
}

/// Compute pairwise distances between two vector operands. Served over
/// gRPC only.
#[derive(Debug, Clone)]
pub struct CalcDistanceRequest {
    /// Left operand.
    pub left: VectorsSource,
    /// Right operand.
    pub right: VectorsSource,
    /// Distance metric, e.g. `L2`, `IP`, `HAMMING`.
    pub metric_type: Box<str>,
}

impl CalcDistanceRequest {
    /// Build the request.
    #[must_use]
    pub fn new(left: VectorsSource, right: VectorsSource, metric_type: impl Into<Box<str>>) -> Self {
        Self {
            left,
            right,
            metric_type: metric_type.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        self.left.validate()?;
        self.right.validate()?;
        require_non_empty(&self.metric_type, "metric type")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::CalcDistanceRequest {
        proto::CalcDistanceRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            op_left: Some(self.left.to_proto()),
            op_right: Some(self.right.to_proto()),
            params: pairs_to_proto(&[(
                "metric".to_owned(),
                self.metric_type.as_ref().to_owned(),
            )]),
        }
    }

    /// The facade does not expose distance calculation.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("data.calcDistance", "REST"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_group_round_trips_float_vectors() {
        let vectors = QueryVectors::Float(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let request = SearchRequest::new("films", "embedding", vectors, 5);
        assert!(request.validate().is_ok());
        let wire = request.to_grpc("default");
        assert_eq!(wire.nq, 2);
        match PlaceholderGroup::decode(wire.placeholder_group.as_slice()) {
            Ok(group) => {
                assert_eq!(group.placeholders.len(), 1);
                let placeholder = &group.placeholders[0];
                assert_eq!(placeholder.tag, "$0");
                assert_eq!(placeholder.r#type, PlaceholderType::FloatVector as i32);
                assert_eq!(placeholder.values.len(), 2);
                assert_eq!(placeholder.values[0].len(), 8);
                assert_eq!(placeholder.values[0][..4], 1.0f32.to_le_bytes());
            }
            Err(error) => assert!(false, "placeholder group did not decode: {error}"),
        }
    }

    #[test]
    fn search_rejects_mixed_dims_and_bad_limits() {
        let mixed = QueryVectors::Float(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(SearchRequest::new("films", "embedding", mixed, 5)
            .validate()
            .is_err());
        let vectors = QueryVectors::Float(vec![vec![1.0, 2.0]]);
        assert!(SearchRequest::new("films", "embedding", vectors, 0)
            .validate()
            .is_err());
    }

    #[test]
    fn explicit_consistency_disables_the_default_flag() {
        let vectors = QueryVectors::Float(vec![vec![1.0, 2.0]]);
        let request = SearchRequest::new("films", "embedding", vectors, 5)
            .consistency_level(ConsistencyLevel::Strong)
            .guarantee_timestamp(77);
        let wire = request.to_grpc("default");
        assert!(!wire.use_default_consistency);
        assert_eq!(wire.guarantee_timestamp, 77);
        assert_eq!(
            wire.consistency_level,
            ConsistencyLevel::Strong.wire_value()
        );
    }

    #[test]
    fn query_defaults_to_collection_consistency() {
        let request = QueryRequest::new("films", "film_id in [1]");
        let wire = request.to_grpc("default");
        assert!(wire.use_default_consistency);
        assert_eq!(wire.expr, "film_id in [1]");
    }

    #[test]
    fn calc_distance_is_grpc_only() {
        let request = CalcDistanceRequest::new(
            VectorsSource::Float {
                dim: 2,
                values: vec![1.0, 0.0],
            },
            VectorsSource::Stored {
                collection_name: Box::from("films"),
                field_name: Box::from("embedding"),
                ids: IdList::Long(vec![1, 2]),
            },
            "L2",
        );
        assert!(request.validate().is_ok());
        let error = request.to_rest("default").err();
        assert!(matches!(error, Some(Error::NotSupported { .. })));
    }

    #[test]
    fn calc_distance_rejects_ragged_operands() {
        let request = CalcDistanceRequest::new(
            VectorsSource::Float {
                dim: 3,
                values: vec![1.0, 0.0],
            },
            VectorsSource::Float {
                dim: 3,
                values: vec![1.0, 0.0, 0.0],
            },
            "L2",
        );
        assert!(request.validate().is_err());
    }
}

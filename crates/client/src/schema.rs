//! Collection schema model: typed field declarations with validation and
//! conversion to the wire representations of both transports.

use crate::error::{Error, Result};
use milvus_client_proto::common::KeyValuePair;
use milvus_client_proto::schema as proto_schema;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Data types a field may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean scalar.
    Bool,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer. Valid as a primary key.
    Int64,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Fixed string type kept for servers that still report it; new
    /// schemas should use [`DataType::VarChar`].
    String,
    /// Variable-length string, bounded by `max_length`. Valid as a primary key.
    VarChar,
    /// JSON document per row.
    Json,
    /// Bit-packed binary vector, `dim / 8` bytes per row.
    BinaryVector,
    /// Dense float vector, `dim` values per row.
    FloatVector,
}

impl DataType {
    /// Convert to the wire enum.
    #[must_use]
    pub const fn to_proto(self) -> proto_schema::DataType {
        match self {
            Self::Bool => proto_schema::DataType::Bool,
            Self::Int8 => proto_schema::DataType::Int8,
            Self::Int16 => proto_schema::DataType::Int16,
            Self::Int32 => proto_schema::DataType::Int32,
            Self::Int64 => proto_schema::DataType::Int64,
            Self::Float => proto_schema::DataType::Float,
            Self::Double => proto_schema::DataType::Double,
            Self::String => proto_schema::DataType::String,
            Self::VarChar => proto_schema::DataType::VarChar,
            Self::Json => proto_schema::DataType::Json,
            Self::BinaryVector => proto_schema::DataType::BinaryVector,
            Self::FloatVector => proto_schema::DataType::FloatVector,
        }
    }

    /// Convert from the wire enum, rejecting types this SDK does not model.
    pub fn from_proto(value: i32) -> Result<Self> {
        match proto_schema::DataType::try_from(value) {
            Ok(proto_schema::DataType::Bool) => Ok(Self::Bool),
            Ok(proto_schema::DataType::Int8) => Ok(Self::Int8),
            Ok(proto_schema::DataType::Int16) => Ok(Self::Int16),
            Ok(proto_schema::DataType::Int32) => Ok(Self::Int32),
            Ok(proto_schema::DataType::Int64) => Ok(Self::Int64),
            Ok(proto_schema::DataType::Float) => Ok(Self::Float),
            Ok(proto_schema::DataType::Double) => Ok(Self::Double),
            Ok(proto_schema::DataType::String) => Ok(Self::String),
            Ok(proto_schema::DataType::VarChar) => Ok(Self::VarChar),
            Ok(proto_schema::DataType::Json) => Ok(Self::Json),
            Ok(proto_schema::DataType::BinaryVector) => Ok(Self::BinaryVector),
            Ok(proto_schema::DataType::FloatVector) => Ok(Self::FloatVector),
            Ok(proto_schema::DataType::None) | Err(_) => Err(Error::decode(
                "DataType",
                format!("unknown data type tag {value}"),
            )),
        }
    }

    /// The enum tag as sent over both transports.
    #[must_use]
    pub const fn wire_value(self) -> i32 {
        self.to_proto() as i32
    }

    /// True for vector types.
    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::BinaryVector | Self::FloatVector)
    }

    /// True for types allowed as a primary key.
    #[must_use]
    pub const fn is_valid_primary_key(self) -> bool {
        matches!(self, Self::Int64 | Self::VarChar)
    }
}

/// Consistency guarantee requested for reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConsistencyLevel {
    /// Read the most recent write.
    Strong,
    /// Session consistency.
    Session,
    /// Bounded staleness. The server default.
    #[default]
    Bounded,
    /// No consistency guarantee.
    Eventually,
    /// Use a caller-supplied guarantee timestamp.
    Customized,
}

impl ConsistencyLevel {
    /// Convert to the wire enum.
    #[must_use]
    pub const fn to_proto(self) -> milvus_client_proto::common::ConsistencyLevel {
        use milvus_client_proto::common::ConsistencyLevel as Wire;
        match self {
            Self::Strong => Wire::Strong,
            Self::Session => Wire::Session,
            Self::Bounded => Wire::Bounded,
            Self::Eventually => Wire::Eventually,
            Self::Customized => Wire::Customized,
        }
    }

    /// The enum tag as sent over both transports.
    #[must_use]
    pub const fn wire_value(self) -> i32 {
        self.to_proto() as i32
    }
}

/// One field declaration within a collection schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name, unique within the collection.
    pub name: Box<str>,
    /// The value type of the field.
    pub data_type: DataType,
    /// Whether this field is the primary key.
    pub is_primary_key: bool,
    /// Whether the server assigns primary-key values. Only valid on the
    /// primary key.
    pub auto_id: bool,
    /// Whether this field partitions data.
    pub is_partition_key: bool,
    /// Vector dimension. Required for vector types, ignored otherwise.
    pub dim: Option<i64>,
    /// Maximum character length. Required for `VarChar`, ignored otherwise.
    pub max_length: Option<i64>,
    /// Free-form description.
    pub description: Box<str>,
}

impl FieldSchema {
    /// Start a field declaration of the given type.
    #[must_use]
    pub fn new(name: impl Into<Box<str>>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_primary_key: false,
            auto_id: false,
            is_partition_key: false,
            dim: None,
            max_length: None,
            description: Box::from(""),
        }
    }

    /// Mark this field as the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Let the server assign primary-key values.
    #[must_use]
    pub const fn auto_id(mut self) -> Self {
        self.auto_id = true;
        self
    }

    /// Mark this field as the partition key.
    #[must_use]
    pub const fn partition_key(mut self) -> Self {
        self.is_partition_key = true;
        self
    }

    /// Set the vector dimension.
    #[must_use]
    pub const fn dim(mut self, dim: i64) -> Self {
        self.dim = Some(dim);
        self
    }

    /// Set the maximum character length for a `VarChar` field.
    #[must_use]
    pub const fn max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the field description.
    #[must_use]
    pub fn description(mut self, description: impl Into<Box<str>>) -> Self {
        self.description = description.into();
        self
    }

    fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::validation("field name must be non-empty"));
        }
        if self.is_primary_key && !self.data_type.is_valid_primary_key() {
            return Err(Error::validation(format!(
                "primary key field '{name}' must be Int64 or VarChar"
            )));
        }
        if self.auto_id && !self.is_primary_key {
            return Err(Error::validation(format!(
                "autoId is only valid on the primary key, found on '{name}'"
            )));
        }
        if self.is_partition_key {
            if self.is_primary_key {
                return Err(Error::validation(format!(
                    "field '{name}' cannot be both primary key and partition key"
                )));
            }
            if !matches!(self.data_type, DataType::Int64 | DataType::VarChar) {
                return Err(Error::validation(format!(
                    "partition key field '{name}' must be Int64 or VarChar"
                )));
            }
        }
        match self.data_type {
            DataType::FloatVector => match self.dim {
                Some(dim) if dim > 0 => {}
                _ => {
                    return Err(Error::validation(format!(
                        "float vector field '{name}' requires a positive dim"
                    )));
                }
            },
            DataType::BinaryVector => match self.dim {
                Some(dim) if dim > 0 && dim % 8 == 0 => {}
                _ => {
                    return Err(Error::validation(format!(
                        "binary vector field '{name}' requires a positive dim divisible by 8"
                    )));
                }
            },
            DataType::VarChar => match self.max_length {
                Some(len) if len > 0 => {}
                _ => {
                    return Err(Error::validation(format!(
                        "varchar field '{name}' requires a positive maxLength"
                    )));
                }
            },
            _ => {}
        }
        Ok(())
    }

    fn type_params(&self) -> Vec<KeyValuePair> {
        let mut params = Vec::new();
        if self.data_type.is_vector() {
            if let Some(dim) = self.dim {
                params.push(KeyValuePair {
                    key: "dim".to_owned(),
                    value: dim.to_string(),
                });
            }
        }
        if self.data_type == DataType::VarChar {
            if let Some(len) = self.max_length {
                params.push(KeyValuePair {
                    key: "max_length".to_owned(),
                    value: len.to_string(),
                });
            }
        }
        params
    }

    /// Convert to the wire message.
    #[must_use]
    pub fn to_proto(&self) -> proto_schema::FieldSchema {
        proto_schema::FieldSchema {
            field_id: 0,
            name: self.name.as_ref().to_owned(),
            is_primary_key: self.is_primary_key,
            description: self.description.as_ref().to_owned(),
            data_type: self.data_type.wire_value(),
            type_params: self.type_params(),
            index_params: Vec::new(),
            auto_id: self.auto_id,
            is_dynamic: false,
            is_partition_key: self.is_partition_key,
        }
    }

    /// Parse a wire message back into the typed model.
    pub fn from_proto(field: &proto_schema::FieldSchema) -> Result<Self> {
        let data_type = DataType::from_proto(field.data_type)?;
        let find_param = |key: &str| -> Option<i64> {
            field
                .type_params
                .iter()
                .find(|pair| pair.key == key)
                .and_then(|pair| pair.value.parse().ok())
        };
        Ok(Self {
            name: Box::from(field.name.as_str()),
            data_type,
            is_primary_key: field.is_primary_key,
            auto_id: field.auto_id,
            is_partition_key: field.is_partition_key,
            dim: find_param("dim"),
            max_length: find_param("max_length"),
            description: Box::from(field.description.as_str()),
        })
    }

    /// JSON shape used by the REST facade.
    #[must_use]
    pub fn to_rest_json(&self) -> serde_json::Value {
        let mut params = Vec::new();
        for pair in self.type_params() {
            params.push(json!({ "key": pair.key, "value": pair.value }));
        }
        json!({
            "name": self.name.as_ref(),
            "description": self.description.as_ref(),
            "is_primary_key": self.is_primary_key,
            "autoID": self.auto_id,
            "is_partition_key": self.is_partition_key,
            "data_type": self.data_type.wire_value(),
            "type_params": params,
        })
    }
}

/// The full schema of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    /// Collection name.
    pub name: Box<str>,
    /// Free-form description.
    pub description: Box<str>,
    /// Field declarations, in order.
    pub fields: Vec<FieldSchema>,
    /// Whether undeclared fields are accepted into a dynamic JSON field.
    pub enable_dynamic_field: bool,
}

impl CollectionSchema {
    /// Start a schema with no fields.
    #[must_use]
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            description: Box::from(""),
            fields: Vec::new(),
            enable_dynamic_field: false,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<Box<str>>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Accept undeclared fields into a dynamic JSON field.
    #[must_use]
    pub const fn enable_dynamic_field(mut self) -> Self {
        self.enable_dynamic_field = true;
        self
    }

    /// The primary key field, if the schema declares one.
    #[must_use]
    pub fn primary_field(&self) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.is_primary_key)
    }

    /// Check the structural rules the server would reject anyway, before
    /// any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("collection name must be non-empty"));
        }
        if self.fields.is_empty() {
            return Err(Error::validation(
                "collection schema must declare at least one field",
            ));
        }
        for field in &self.fields {
            field.validate()?;
        }
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.trim()) {
                return Err(Error::validation(format!(
                    "duplicate field name '{}'",
                    field.name
                )));
            }
        }
        let primary_count = self.fields.iter().filter(|f| f.is_primary_key).count();
        if primary_count != 1 {
            return Err(Error::validation(format!(
                "collection schema must declare exactly one primary key, found {primary_count}"
            )));
        }
        if !self.fields.first().is_some_and(|f| f.is_primary_key) {
            return Err(Error::validation(
                "the primary key must be the first field in the schema",
            ));
        }
        let partition_count = self.fields.iter().filter(|f| f.is_partition_key).count();
        if partition_count > 1 {
            return Err(Error::validation(
                "collection schema may declare at most one partition key",
            ));
        }
        Ok(())
    }

    /// Convert to the wire message. `auto_id` at the collection level is
    /// derived from the primary key.
    #[must_use]
    pub fn to_proto(&self) -> proto_schema::CollectionSchema {
        proto_schema::CollectionSchema {
            name: self.name.as_ref().to_owned(),
            description: self.description.as_ref().to_owned(),
            auto_id: self.primary_field().is_some_and(|f| f.auto_id),
            fields: self.fields.iter().map(FieldSchema::to_proto).collect(),
            enable_dynamic_field: self.enable_dynamic_field,
        }
    }

    /// Parse a wire message back into the typed model.
    pub fn from_proto(schema: &proto_schema::CollectionSchema) -> Result<Self> {
        let fields = schema
            .fields
            .iter()
            .map(FieldSchema::from_proto)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: Box::from(schema.name.as_str()),
            description: Box::from(schema.description.as_str()),
            fields,
            enable_dynamic_field: schema.enable_dynamic_field,
        })
    }

    /// JSON shape used by the REST facade.
    #[must_use]
    pub fn to_rest_json(&self) -> serde_json::Value {
        json!({
            "name": self.name.as_ref(),
            "description": self.description.as_ref(),
            "autoID": self.primary_field().is_some_and(|f| f.auto_id),
            "enable_dynamic_field": self.enable_dynamic_field,
            "fields": self.fields.iter().map(FieldSchema::to_rest_json).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn film_schema() -> CollectionSchema {
        CollectionSchema::new("films")
            .description("feature films")
            .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
            .field(FieldSchema::new("title", DataType::VarChar).max_length(256))
            .field(FieldSchema::new("embedding", DataType::FloatVector).dim(128))
    }

    #[test]
    fn valid_schema_round_trips_through_proto() {
        let schema = film_schema();
        assert!(schema.validate().is_ok());
        let wire = schema.to_proto();
        assert_eq!(wire.fields.len(), 3);
        assert!(!wire.auto_id);
        match CollectionSchema::from_proto(&wire) {
            Ok(parsed) => {
                assert_eq!(parsed.fields[2].dim, Some(128));
                assert_eq!(parsed.fields[1].max_length, Some(256));
                assert!(parsed.fields[0].is_primary_key);
            }
            Err(error) => assert!(false, "round trip failed: {error}"),
        }
    }

    #[test]
    fn rejects_missing_primary_key() {
        let schema = CollectionSchema::new("films")
            .field(FieldSchema::new("embedding", DataType::FloatVector).dim(8));
        let error = schema.validate().err();
        assert!(matches!(error, Some(Error::Validation(_))));
    }

    #[test]
    fn rejects_binary_dim_not_divisible_by_eight() {
        let schema = CollectionSchema::new("films")
            .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
            .field(FieldSchema::new("fingerprint", DataType::BinaryVector).dim(12));
        assert!(schema.validate().is_err());
    }

    #[test]
    fn rejects_auto_id_on_non_primary_field() {
        let schema = CollectionSchema::new("films")
            .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
            .field(FieldSchema::new("year", DataType::Int64).auto_id());
        assert!(schema.validate().is_err());
    }

    #[test]
    fn rejects_primary_key_not_in_first_position() {
        let schema = CollectionSchema::new("films")
            .field(FieldSchema::new("title", DataType::VarChar).max_length(256))
            .field(FieldSchema::new("film_id", DataType::Int64).primary_key());
        let error = schema.validate().err();
        assert!(matches!(error, Some(Error::Validation(_))));
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let schema = CollectionSchema::new("films")
            .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
            .field(FieldSchema::new("film_id", DataType::Double));
        assert!(schema.validate().is_err());
    }

    #[test]
    fn rejects_varchar_without_max_length() {
        let schema = CollectionSchema::new("films")
            .field(FieldSchema::new("title", DataType::VarChar).primary_key());
        assert!(schema.validate().is_err());
    }

    #[test]
    fn unknown_wire_data_type_is_a_decode_error() {
        let error = DataType::from_proto(999).err();
        assert!(matches!(error, Some(Error::Decode { .. })));
    }

    proptest! {
        #[test]
        fn binary_vector_dim_validates_iff_divisible_by_eight(dim in 1i64..4096) {
            let schema = CollectionSchema::new("films")
                .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
                .field(FieldSchema::new("fingerprint", DataType::BinaryVector).dim(dim));
            prop_assert_eq!(schema.validate().is_ok(), dim % 8 == 0);
        }

        #[test]
        fn any_positive_float_vector_dim_validates(dim in 1i64..65536) {
            let schema = CollectionSchema::new("films")
                .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
                .field(FieldSchema::new("embedding", DataType::FloatVector).dim(dim));
            prop_assert!(schema.validate().is_ok());
        }
    }
}

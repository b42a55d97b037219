//! Column-oriented field data: the typed values inserted into and read
//! back from a collection, with encode/decode for both wire shapes.

use crate::error::{Error, Result};
use crate::schema::DataType;
use milvus_client_proto::schema as proto_schema;
use milvus_client_proto::schema::{field_data, scalar_field, vector_field};
use serde_json::json;

/// One column of values for a named field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name, matching the collection schema.
    pub name: Box<str>,
    /// The column values.
    pub values: FieldValues,
}

/// A homogeneous column of values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValues {
    /// Boolean column.
    Bool(Vec<bool>),
    /// Int8 column.
    Int8(Vec<i8>),
    /// Int16 column.
    Int16(Vec<i16>),
    /// Int32 column.
    Int32(Vec<i32>),
    /// Int64 column.
    Int64(Vec<i64>),
    /// Float column.
    Float(Vec<f32>),
    /// Double column.
    Double(Vec<f64>),
    /// String column.
    VarChar(Vec<String>),
    /// JSON column, one document per row.
    Json(Vec<serde_json::Value>),
    /// Dense float vectors, `dim` values per row, stored flattened.
    FloatVector {
        /// Vector dimension.
        dim: i64,
        /// Row-major values, `rows * dim` long.
        values: Vec<f32>,
    },
    /// Bit-packed binary vectors, `dim / 8` bytes per row, stored flattened.
    BinaryVector {
        /// Vector dimension, a multiple of 8.
        dim: i64,
        /// Concatenated packed rows, `rows * dim / 8` long.
        values: Vec<u8>,
    },
}

impl Field {
    /// A boolean column.
    #[must_use]
    pub fn bool_values(name: impl Into<Box<str>>, values: Vec<bool>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Bool(values),
        }
    }

    /// An int8 column.
    #[must_use]
    pub fn int8_values(name: impl Into<Box<str>>, values: Vec<i8>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Int8(values),
        }
    }

    /// An int16 column.
    #[must_use]
    pub fn int16_values(name: impl Into<Box<str>>, values: Vec<i16>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Int16(values),
        }
    }

    /// An int32 column.
    #[must_use]
    pub fn int32_values(name: impl Into<Box<str>>, values: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Int32(values),
        }
    }

    /// An int64 column.
    #[must_use]
    pub fn int64_values(name: impl Into<Box<str>>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Int64(values),
        }
    }

    /// A float column.
    #[must_use]
    pub fn float_values(name: impl Into<Box<str>>, values: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Float(values),
        }
    }

    /// A double column.
    #[must_use]
    pub fn double_values(name: impl Into<Box<str>>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Double(values),
        }
    }

    /// A varchar column.
    #[must_use]
    pub fn varchar_values(name: impl Into<Box<str>>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::VarChar(values),
        }
    }

    /// A JSON column.
    #[must_use]
    pub fn json_values(name: impl Into<Box<str>>, values: Vec<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Json(values),
        }
    }

    /// A float-vector column from per-row vectors. Fails when rows have
    /// mixed dimensions or `dim` is not positive.
    pub fn float_vectors(
        name: impl Into<Box<str>>,
        dim: i64,
        rows: Vec<Vec<f32>>,
    ) -> Result<Self> {
        let name = name.into();
        if dim <= 0 {
            return Err(Error::validation(format!(
                "float vector field '{name}' requires a positive dim"
            )));
        }
        let expected = usize::try_from(dim).unwrap_or(usize::MAX);
        let mut values = Vec::with_capacity(rows.len() * expected);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != expected {
                return Err(Error::validation(format!(
                    "float vector field '{name}' row {row_index} has {} values, expected {dim}",
                    row.len()
                )));
            }
            values.extend(row);
        }
        Ok(Self {
            name,
            values: FieldValues::FloatVector { dim, values },
        })
    }

    /// A binary-vector column from per-row packed bytes. Each row carries
    /// `dim / 8` bytes; `dim` must be a positive multiple of 8.
    pub fn binary_vectors(
        name: impl Into<Box<str>>,
        dim: i64,
        rows: Vec<Vec<u8>>,
    ) -> Result<Self> {
        let name = name.into();
        if dim <= 0 || dim % 8 != 0 {
            return Err(Error::validation(format!(
                "binary vector field '{name}' requires a positive dim divisible by 8"
            )));
        }
        let bytes_per_row = usize::try_from(dim / 8).unwrap_or(usize::MAX);
        let mut values = Vec::with_capacity(rows.len() * bytes_per_row);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != bytes_per_row {
                return Err(Error::validation(format!(
                    "binary vector field '{name}' row {row_index} has {} bytes, expected {bytes_per_row}",
                    row.len()
                )));
            }
            values.extend(row);
        }
        Ok(Self {
            name,
            values: FieldValues::BinaryVector { dim, values },
        })
    }

    /// The value type of this column.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match &self.values {
            FieldValues::Bool(_) => DataType::Bool,
            FieldValues::Int8(_) => DataType::Int8,
            FieldValues::Int16(_) => DataType::Int16,
            FieldValues::Int32(_) => DataType::Int32,
            FieldValues::Int64(_) => DataType::Int64,
            FieldValues::Float(_) => DataType::Float,
            FieldValues::Double(_) => DataType::Double,
            FieldValues::VarChar(_) => DataType::VarChar,
            FieldValues::Json(_) => DataType::Json,
            FieldValues::FloatVector { .. } => DataType::FloatVector,
            FieldValues::BinaryVector { .. } => DataType::BinaryVector,
        }
    }

    /// Number of rows in this column.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match &self.values {
            FieldValues::Bool(v) => v.len(),
            FieldValues::Int8(v) => v.len(),
            FieldValues::Int16(v) => v.len(),
            FieldValues::Int32(v) => v.len(),
            FieldValues::Int64(v) => v.len(),
            FieldValues::Float(v) => v.len(),
            FieldValues::Double(v) => v.len(),
            FieldValues::VarChar(v) => v.len(),
            FieldValues::Json(v) => v.len(),
            FieldValues::FloatVector { dim, values } => {
                let dim = usize::try_from(*dim).unwrap_or(usize::MAX);
                if dim == 0 { 0 } else { values.len() / dim }
            }
            FieldValues::BinaryVector { dim, values } => {
                let bytes = usize::try_from(*dim / 8).unwrap_or(usize::MAX);
                if bytes == 0 { 0 } else { values.len() / bytes }
            }
        }
    }

    /// Encode as the wire message.
    #[must_use]
    pub fn to_proto(&self) -> proto_schema::FieldData {
        let field = match &self.values {
            FieldValues::Bool(values) => scalars(scalar_field::Data::BoolData(
                proto_schema::BoolArray {
                    data: values.clone(),
                },
            )),
            FieldValues::Int8(values) => scalars(scalar_field::Data::IntData(
                proto_schema::IntArray {
                    data: values.iter().map(|v| i32::from(*v)).collect(),
                },
            )),
            FieldValues::Int16(values) => scalars(scalar_field::Data::IntData(
                proto_schema::IntArray {
                    data: values.iter().map(|v| i32::from(*v)).collect(),
                },
            )),
            FieldValues::Int32(values) => scalars(scalar_field::Data::IntData(
                proto_schema::IntArray {
                    data: values.clone(),
                },
            )),
            FieldValues::Int64(values) => scalars(scalar_field::Data::LongData(
                proto_schema::LongArray {
                    data: values.clone(),
                },
            )),
            FieldValues::Float(values) => scalars(scalar_field::Data::FloatData(
                proto_schema::FloatArray {
                    data: values.clone(),
                },
            )),
            FieldValues::Double(values) => scalars(scalar_field::Data::DoubleData(
                proto_schema::DoubleArray {
                    data: values.clone(),
                },
            )),
            FieldValues::VarChar(values) => scalars(scalar_field::Data::StringData(
                proto_schema::StringArray {
                    data: values.clone(),
                },
            )),
            FieldValues::Json(values) => scalars(scalar_field::Data::JsonData(
                proto_schema::JsonArray {
                    data: values.iter().map(|v| v.to_string().into_bytes()).collect(),
                },
            )),
            FieldValues::FloatVector { dim, values } => {
                field_data::Field::Vectors(proto_schema::VectorField {
                    dim: *dim,
                    data: Some(vector_field::Data::FloatVector(proto_schema::FloatArray {
                        data: values.clone(),
                    })),
                })
            }
            FieldValues::BinaryVector { dim, values } => {
                field_data::Field::Vectors(proto_schema::VectorField {
                    dim: *dim,
                    data: Some(vector_field::Data::BinaryVector(values.clone())),
                })
            }
        };
        proto_schema::FieldData {
            r#type: self.data_type().wire_value(),
            field_name: self.name.as_ref().to_owned(),
            field: Some(field),
            field_id: 0,
            is_dynamic: false,
        }
    }

    /// Decode a wire message into a typed column.
    ///
    /// Int8/Int16 columns travel as `IntArray` and are narrowed back using
    /// the declared type tag. Vector payloads that do not divide evenly by
    /// the dimension are rejected.
    pub fn from_proto(data: &proto_schema::FieldData) -> Result<Self> {
        let name = data.field_name.as_str();
        let declared = DataType::from_proto(data.r#type)?;
        let values = match (&data.field, declared) {
            (Some(field_data::Field::Scalars(scalar)), _) => {
                decode_scalars(name, declared, scalar)?
            }
            (Some(field_data::Field::Vectors(vectors)), DataType::FloatVector) => {
                let dim = vectors.dim;
                match &vectors.data {
                    Some(vector_field::Data::FloatVector(array)) => {
                        if dim <= 0 || array.data.len() % usize::try_from(dim).unwrap_or(usize::MAX) != 0 {
                            return Err(Error::decode(
                                format!("field '{name}'"),
                                format!("float vector payload of {} values does not divide by dim {dim}", array.data.len()),
                            ));
                        }
                        FieldValues::FloatVector {
                            dim,
                            values: array.data.clone(),
                        }
                    }
                    _ => {
                        return Err(Error::decode(
                            format!("field '{name}'"),
                            "float vector field carries no float payload",
                        ));
                    }
                }
            }
            (Some(field_data::Field::Vectors(vectors)), DataType::BinaryVector) => {
                let dim = vectors.dim;
                match &vectors.data {
                    Some(vector_field::Data::BinaryVector(bytes)) => {
                        let bytes_per_row = dim / 8;
                        if dim <= 0
                            || dim % 8 != 0
                            || bytes.len() % usize::try_from(bytes_per_row).unwrap_or(usize::MAX)
                                != 0
                        {
                            return Err(Error::decode(
                                format!("field '{name}'"),
                                format!(
                                    "binary vector payload of {} bytes does not divide by dim {dim}",
                                    bytes.len()
                                ),
                            ));
                        }
                        FieldValues::BinaryVector {
                            dim,
                            values: bytes.clone(),
                        }
                    }
                    _ => {
                        return Err(Error::decode(
                            format!("field '{name}'"),
                            "binary vector field carries no binary payload",
                        ));
                    }
                }
            }
            (Some(field_data::Field::Vectors(_)), other) => {
                return Err(Error::decode(
                    format!("field '{name}'"),
                    format!("vector payload declared with non-vector type {other:?}"),
                ));
            }
            (None, _) => {
                return Err(Error::decode(
                    format!("field '{name}'"),
                    "field data carries no payload",
                ));
            }
        };
        Ok(Self {
            name: Box::from(name),
            values,
        })
    }

    /// JSON shape used by the REST facade: name, type tag, and a flat
    /// array of row values (vectors as nested arrays).
    #[must_use]
    pub fn to_rest_json(&self) -> serde_json::Value {
        let field: serde_json::Value = match &self.values {
            FieldValues::Bool(v) => json!(v),
            FieldValues::Int8(v) => json!(v),
            FieldValues::Int16(v) => json!(v),
            FieldValues::Int32(v) => json!(v),
            FieldValues::Int64(v) => json!(v),
            FieldValues::Float(v) => json!(v),
            FieldValues::Double(v) => json!(v),
            FieldValues::VarChar(v) => json!(v),
            FieldValues::Json(v) => json!(v),
            FieldValues::FloatVector { dim, values } => {
                let dim = usize::try_from(*dim).unwrap_or(usize::MAX);
                json!(values.chunks(dim.max(1)).collect::<Vec<_>>())
            }
            FieldValues::BinaryVector { dim, values } => {
                let bytes = usize::try_from(*dim / 8).unwrap_or(usize::MAX);
                json!(values.chunks(bytes.max(1)).collect::<Vec<_>>())
            }
        };
        json!({
            "field_name": self.name.as_ref(),
            "type": self.data_type().wire_value(),
            "field": field,
        })
    }

    /// Parse the REST facade's field JSON back into a typed column.
    pub fn from_rest_json(value: &serde_json::Value) -> Result<Self> {
        let name = value
            .get("field_name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        let type_tag = value
            .get("type")
            .and_then(serde_json::Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| {
                Error::decode(format!("field '{name}'"), "missing or non-numeric type tag")
            })?;
        let declared = DataType::from_proto(type_tag)?;
        let rows = value
            .get("field")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| {
                Error::decode(format!("field '{name}'"), "missing field value array")
            })?;
        let values = decode_rest_rows(name, declared, rows)?;
        Ok(Self {
            name: Box::from(name),
            values,
        })
    }
}

const fn scalars(data: scalar_field::Data) -> field_data::Field {
    field_data::Field::Scalars(proto_schema::ScalarField { data: Some(data) })
}

fn decode_scalars(
    name: &str,
    declared: DataType,
    scalar: &proto_schema::ScalarField,
) -> Result<FieldValues> {
    let mismatch = || {
        Error::decode(
            format!("field '{name}'"),
            format!("scalar payload does not match declared type {declared:?}"),
        )
    };
    match (&scalar.data, declared) {
        (Some(scalar_field::Data::BoolData(array)), DataType::Bool) => {
            Ok(FieldValues::Bool(array.data.clone()))
        }
        (Some(scalar_field::Data::IntData(array)), DataType::Int8) => {
            let mut out = Vec::with_capacity(array.data.len());
            for value in &array.data {
                out.push(i8::try_from(*value).map_err(|_| {
                    Error::decode(
                        format!("field '{name}'"),
                        format!("value {value} does not fit in Int8"),
                    )
                })?);
            }
            Ok(FieldValues::Int8(out))
        }
        (Some(scalar_field::Data::IntData(array)), DataType::Int16) => {
            let mut out = Vec::with_capacity(array.data.len());
            for value in &array.data {
                out.push(i16::try_from(*value).map_err(|_| {
                    Error::decode(
                        format!("field '{name}'"),
                        format!("value {value} does not fit in Int16"),
                    )
                })?);
            }
            Ok(FieldValues::Int16(out))
        }
        (Some(scalar_field::Data::IntData(array)), DataType::Int32) => {
            Ok(FieldValues::Int32(array.data.clone()))
        }
        (Some(scalar_field::Data::LongData(array)), DataType::Int64) => {
            Ok(FieldValues::Int64(array.data.clone()))
        }
        (Some(scalar_field::Data::FloatData(array)), DataType::Float) => {
            Ok(FieldValues::Float(array.data.clone()))
        }
        (Some(scalar_field::Data::DoubleData(array)), DataType::Double) => {
            Ok(FieldValues::Double(array.data.clone()))
        }
        (
            Some(scalar_field::Data::StringData(array)),
            DataType::VarChar | DataType::String,
        ) => Ok(FieldValues::VarChar(array.data.clone())),
        (Some(scalar_field::Data::JsonData(array)), DataType::Json) => {
            let mut out = Vec::with_capacity(array.data.len());
            for row in &array.data {
                let parsed = serde_json::from_slice(row).map_err(|error| {
                    Error::decode(format!("field '{name}'"), error.to_string())
                })?;
                out.push(parsed);
            }
            Ok(FieldValues::Json(out))
        }
        _ => Err(mismatch()),
    }
}

fn decode_rest_rows(
    name: &str,
    declared: DataType,
    rows: &[serde_json::Value],
) -> Result<FieldValues> {
    let bad_row = |row: &serde_json::Value| {
        Error::decode(
            format!("field '{name}'"),
            format!("row value {row} does not match declared type {declared:?}"),
        )
    };
    match declared {
        DataType::Bool => rows
            .iter()
            .map(|row| row.as_bool().ok_or_else(|| bad_row(row)))
            .collect::<Result<Vec<_>>>()
            .map(FieldValues::Bool),
        DataType::Int8 => rows
            .iter()
            .map(|row| {
                row.as_i64()
                    .and_then(|v| i8::try_from(v).ok())
                    .ok_or_else(|| bad_row(row))
            })
            .collect::<Result<Vec<_>>>()
            .map(FieldValues::Int8),
        DataType::Int16 => rows
            .iter()
            .map(|row| {
                row.as_i64()
                    .and_then(|v| i16::try_from(v).ok())
                    .ok_or_else(|| bad_row(row))
            })
            .collect::<Result<Vec<_>>>()
            .map(FieldValues::Int16),
        DataType::Int32 => rows
            .iter()
            .map(|row| {
                row.as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(|| bad_row(row))
            })
            .collect::<Result<Vec<_>>>()
            .map(FieldValues::Int32),
        DataType::Int64 => rows
            .iter()
            .map(|row| row.as_i64().ok_or_else(|| bad_row(row)))
            .collect::<Result<Vec<_>>>()
            .map(FieldValues::Int64),
        DataType::Float => rows
            .iter()
            .map(|row| {
                row.as_f64()
                    .map(|v| v as f32)
                    .ok_or_else(|| bad_row(row))
            })
            .collect::<Result<Vec<_>>>()
            .map(FieldValues::Float),
        DataType::Double => rows
            .iter()
            .map(|row| row.as_f64().ok_or_else(|| bad_row(row)))
            .collect::<Result<Vec<_>>>()
            .map(FieldValues::Double),
        DataType::VarChar | DataType::String => rows
            .iter()
            .map(|row| {
                row.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| bad_row(row))
            })
            .collect::<Result<Vec<_>>>()
            .map(FieldValues::VarChar),
        DataType::Json => Ok(FieldValues::Json(rows.to_vec())),
        DataType::FloatVector => {
            let mut dim = 0i64;
            let mut values = Vec::new();
            for row in rows {
                let vector = row.as_array().ok_or_else(|| bad_row(row))?;
                let row_dim = i64::try_from(vector.len()).unwrap_or(i64::MAX);
                if dim == 0 {
                    dim = row_dim;
                } else if dim != row_dim {
                    return Err(Error::decode(
                        format!("field '{name}'"),
                        format!("float vector rows mix dims {dim} and {row_dim}"),
                    ));
                }
                for value in vector {
                    values.push(value.as_f64().ok_or_else(|| bad_row(row))? as f32);
                }
            }
            Ok(FieldValues::FloatVector { dim, values })
        }
        DataType::BinaryVector => {
            let mut bytes_per_row = 0usize;
            let mut values = Vec::new();
            for row in rows {
                let packed = row.as_array().ok_or_else(|| bad_row(row))?;
                if bytes_per_row == 0 {
                    bytes_per_row = packed.len();
                } else if bytes_per_row != packed.len() {
                    return Err(Error::decode(
                        format!("field '{name}'"),
                        "binary vector rows mix byte lengths",
                    ));
                }
                for value in packed {
                    let byte = value
                        .as_u64()
                        .and_then(|v| u8::try_from(v).ok())
                        .ok_or_else(|| bad_row(row))?;
                    values.push(byte);
                }
            }
            let dim = i64::try_from(bytes_per_row).unwrap_or(i64::MAX) * 8;
            Ok(FieldValues::BinaryVector { dim, values })
        }
    }
}

/// Primary-key values returned from mutations and addressed by deletes.
///
/// A collection's key column is either all longs or all strings, never a
/// mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdList {
    /// Int64 primary keys.
    Long(Vec<i64>),
    /// VarChar primary keys.
    Str(Vec<String>),
}

impl IdList {
    /// Number of ids.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Long(v) => v.len(),
            Self::Str(v) => v.len(),
        }
    }

    /// True when empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encode as the wire `IDs` oneof.
    #[must_use]
    pub fn to_proto(&self) -> proto_schema::Ids {
        match self {
            Self::Long(values) => proto_schema::Ids {
                id_field: Some(proto_schema::ids::IdField::IntId(proto_schema::LongArray {
                    data: values.clone(),
                })),
            },
            Self::Str(values) => proto_schema::Ids {
                id_field: Some(proto_schema::ids::IdField::StrId(
                    proto_schema::StringArray {
                        data: values.clone(),
                    },
                )),
            },
        }
    }

    /// Copy out the ids in `[offset, offset + len)`, clamped to the list.
    #[must_use]
    pub fn slice(&self, offset: usize, len: usize) -> Self {
        let end = offset.saturating_add(len);
        match self {
            Self::Long(v) => {
                let end = end.min(v.len());
                let offset = offset.min(end);
                Self::Long(v[offset..end].to_vec())
            }
            Self::Str(v) => {
                let end = end.min(v.len());
                let offset = offset.min(end);
                Self::Str(v[offset..end].to_vec())
            }
        }
    }

    /// Decode the wire `IDs` oneof. A missing payload decodes as an empty
    /// long list.
    #[must_use]
    pub fn from_proto(ids: Option<&proto_schema::Ids>) -> Self {
        match ids.and_then(|ids| ids.id_field.as_ref()) {
            Some(proto_schema::ids::IdField::IntId(array)) => Self::Long(array.data.clone()),
            Some(proto_schema::ids::IdField::StrId(array)) => Self::Str(array.data.clone()),
            None => Self::Long(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int8_narrows_through_int_array() {
        let field = Field::int8_values("rating", vec![-3, 0, 5]);
        let wire = field.to_proto();
        assert_eq!(wire.r#type, DataType::Int8.wire_value());
        match Field::from_proto(&wire) {
            Ok(decoded) => assert_eq!(decoded, field),
            Err(error) => assert!(false, "decode failed: {error}"),
        }
    }

    #[test]
    fn int8_decode_rejects_out_of_range_values() {
        let mut wire = Field::int32_values("rating", vec![1000]).to_proto();
        wire.r#type = DataType::Int8.wire_value();
        let error = Field::from_proto(&wire).err();
        assert!(matches!(error, Some(Error::Decode { .. })));
    }

    #[test]
    fn float_vectors_reject_mixed_dims() {
        let error =
            Field::float_vectors("embedding", 4, vec![vec![0.0; 4], vec![0.0; 3]]).err();
        assert!(matches!(error, Some(Error::Validation(_))));
    }

    #[test]
    fn binary_vectors_pack_eight_dims_per_byte() {
        match Field::binary_vectors("fingerprint", 16, vec![vec![0xAB, 0xCD], vec![0x01, 0x02]]) {
            Ok(field) => {
                assert_eq!(field.row_count(), 2);
                let wire = field.to_proto();
                match Field::from_proto(&wire) {
                    Ok(decoded) => assert_eq!(decoded, field),
                    Err(error) => assert!(false, "decode failed: {error}"),
                }
            }
            Err(error) => assert!(false, "construction failed: {error}"),
        }
    }

    #[test]
    fn binary_vector_payload_must_divide_by_row_width() {
        let wire = proto_schema::FieldData {
            r#type: DataType::BinaryVector.wire_value(),
            field_name: "fingerprint".to_owned(),
            field: Some(field_data::Field::Vectors(proto_schema::VectorField {
                dim: 16,
                data: Some(vector_field::Data::BinaryVector(vec![0xAB, 0xCD, 0xEF])),
            })),
            field_id: 0,
            is_dynamic: false,
        };
        let error = Field::from_proto(&wire).err();
        assert!(matches!(error, Some(Error::Decode { .. })));
    }

    #[test]
    fn json_rows_round_trip_as_documents() {
        let field = Field::json_values(
            "meta",
            vec![json!({"year": 1979}), json!({"year": 1984})],
        );
        let wire = field.to_proto();
        match Field::from_proto(&wire) {
            Ok(decoded) => assert_eq!(decoded, field),
            Err(error) => assert!(false, "decode failed: {error}"),
        }
    }

    #[test]
    fn rest_json_uses_plain_value_arrays() {
        match Field::float_vectors("embedding", 2, vec![vec![1.0, 2.0], vec![3.0, 4.0]]) {
            Ok(field) => {
                let rendered = field.to_rest_json();
                assert_eq!(rendered["field_name"], "embedding");
                assert_eq!(rendered["type"], DataType::FloatVector.wire_value());
                assert_eq!(rendered["field"], json!([[1.0, 2.0], [3.0, 4.0]]));
                match Field::from_rest_json(&rendered) {
                    Ok(decoded) => assert_eq!(decoded, field),
                    Err(error) => assert!(false, "decode failed: {error}"),
                }
            }
            Err(error) => assert!(false, "construction failed: {error}"),
        }
    }

    #[test]
    fn missing_payload_is_a_decode_error() {
        let wire = proto_schema::FieldData {
            r#type: DataType::Int64.wire_value(),
            field_name: "film_id".to_owned(),
            field: None,
            field_id: 0,
            is_dynamic: false,
        };
        let error = Field::from_proto(&wire).err();
        assert!(matches!(error, Some(Error::Decode { .. })));
    }

    #[test]
    fn id_list_decodes_both_wire_shapes() {
        let long = proto_schema::Ids {
            id_field: Some(proto_schema::ids::IdField::IntId(proto_schema::LongArray {
                data: vec![1, 2, 3],
            })),
        };
        assert_eq!(IdList::from_proto(Some(&long)), IdList::Long(vec![1, 2, 3]));
        assert!(IdList::from_proto(None).is_empty());
    }
}

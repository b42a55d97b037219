//! Wire DTOs for the REST facade.
//!
//! The facade serializes the same messages as the gRPC surface into JSON,
//! so field names follow the proto definitions. Enum-valued fields may
//! arrive either as integer tags or as enum variant names depending on
//! server version; [`IntOrName`] accepts both.

#![allow(missing_docs)]

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// An enum field that is either an integer tag or a variant name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntOrName {
    /// Integer tag form.
    Int(i32),
    /// Variant name form.
    Name(String),
}

/// The status block every facade response carries.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RestStatus {
    /// Error code, absent or `Success`/0 on success.
    pub error_code: Option<IntOrName>,
    /// Human-readable failure reason.
    pub reason: String,
}

impl RestStatus {
    /// The numeric error code, resolving variant names.
    #[must_use]
    pub fn code(&self) -> i32 {
        match &self.error_code {
            None => 0,
            Some(IntOrName::Int(code)) => *code,
            Some(IntOrName::Name(name)) => error_code_from_name(name),
        }
    }

    /// Verify the status, surfacing the server's code and reason verbatim.
    pub fn check(&self, operation: &'static str) -> Result<()> {
        let code = self.code();
        if code == 0 {
            return Ok(());
        }
        tracing::debug!(operation, code, reason = %self.reason, "server returned an error status");
        Err(Error::Server {
            operation,
            code,
            reason: self.reason.clone(),
        })
    }
}

fn error_code_from_name(name: &str) -> i32 {
    match name {
        "Success" => 0,
        "ConnectFailed" => 2,
        "PermissionDenied" => 3,
        "CollectionNotExists" => 4,
        "IllegalArgument" => 5,
        "IllegalDimension" => 7,
        "BuildIndexError" => 21,
        "IndexNotExist" => 25,
        "EmptyCollection" => 26,
        "CollectionNameNotFound" => 28,
        _ => 1,
    }
}

/// Resolve an index-state field to its integer tag.
#[must_use]
pub fn index_state_code(value: Option<&IntOrName>) -> i32 {
    match value {
        None => 0,
        Some(IntOrName::Int(code)) => *code,
        Some(IntOrName::Name(name)) => match name.as_str() {
            "Unissued" => 1,
            "InProgress" => 2,
            "Finished" => 3,
            "Failed" => 4,
            "Retry" => 5,
            _ => 0,
        },
    }
}

/// Resolve a compaction-state field to its integer tag.
#[must_use]
pub fn compaction_state_code(value: Option<&IntOrName>) -> i32 {
    match value {
        None => 0,
        Some(IntOrName::Int(code)) => *code,
        Some(IntOrName::Name(name)) => match name.as_str() {
            "Executing" => 1,
            "Completed" => 2,
            _ => 0,
        },
    }
}

/// Resolve a data-type field to its integer tag.
#[must_use]
pub fn data_type_code(value: Option<&IntOrName>) -> i32 {
    match value {
        None => 0,
        Some(IntOrName::Int(code)) => *code,
        Some(IntOrName::Name(name)) => match name.as_str() {
            "Bool" => 1,
            "Int8" => 2,
            "Int16" => 3,
            "Int32" => 4,
            "Int64" => 5,
            "Float" => 10,
            "Double" => 11,
            "String" => 20,
            "VarChar" => 21,
            "JSON" => 23,
            "BinaryVector" => 100,
            "FloatVector" => 101,
            _ => 0,
        },
    }
}

/// Resolve a consistency-level field to its integer tag.
#[must_use]
pub fn consistency_level_code(value: Option<&IntOrName>) -> i32 {
    match value {
        None => 2,
        Some(IntOrName::Int(code)) => *code,
        Some(IntOrName::Name(name)) => match name.as_str() {
            "Strong" => 0,
            "Session" => 1,
            "Eventually" => 3,
            "Customized" => 4,
            _ => 2,
        },
    }
}

/// A key/value pair as serialized by the facade.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RestKeyValue {
    pub key: String,
    pub value: String,
}

/// Minimal response carrying only a status.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StatusOnlyDto {
    pub status: RestStatus,
}

/// `BoolResponse` JSON shape.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BoolResponseDto {
    pub status: RestStatus,
    pub value: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FieldSchemaDto {
    pub name: String,
    pub description: String,
    pub is_primary_key: bool,
    #[serde(alias = "autoID")]
    pub auto_id: bool,
    pub is_partition_key: bool,
    pub data_type: Option<IntOrName>,
    pub type_params: Vec<RestKeyValue>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CollectionSchemaDto {
    pub name: String,
    pub description: String,
    #[serde(alias = "autoID")]
    pub auto_id: bool,
    pub enable_dynamic_field: bool,
    pub fields: Vec<FieldSchemaDto>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DescribeCollectionDto {
    pub status: RestStatus,
    pub schema: Option<CollectionSchemaDto>,
    pub collection_id: i64,
    pub created_timestamp: u64,
    pub created_utc_timestamp: u64,
    pub shards_num: i32,
    pub aliases: Vec<String>,
    pub consistency_level: Option<IntOrName>,
    pub collection_name: String,
    pub properties: Vec<RestKeyValue>,
    pub db_name: String,
    pub num_partitions: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ShowCollectionsDto {
    pub status: RestStatus,
    pub collection_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoadingProgressDto {
    pub status: RestStatus,
    pub progress: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StatisticsDto {
    pub status: RestStatus,
    pub stats: Vec<RestKeyValue>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ShowPartitionsDto {
    pub status: RestStatus,
    pub partition_names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct IndexDescriptionDto {
    pub index_name: String,
    pub index_id: i64,
    pub params: Vec<RestKeyValue>,
    pub field_name: String,
    pub indexed_rows: i64,
    pub total_rows: i64,
    pub state: Option<IntOrName>,
    pub index_state_fail_reason: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DescribeIndexDto {
    pub status: RestStatus,
    pub index_descriptions: Vec<IndexDescriptionDto>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct IndexStateDto {
    pub status: RestStatus,
    pub state: Option<IntOrName>,
    pub fail_reason: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct IndexBuildProgressDto {
    pub status: RestStatus,
    pub indexed_rows: i64,
    pub total_rows: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LongArrayDto {
    pub data: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StringArrayDto {
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct IdsDto {
    pub int_id: Option<LongArrayDto>,
    pub str_id: Option<StringArrayDto>,
}

impl IdsDto {
    /// Convert to the typed id list. Long wins when both are present.
    #[must_use]
    pub fn into_id_list(self) -> crate::data::IdList {
        if let Some(longs) = self.int_id {
            return crate::data::IdList::Long(longs.data);
        }
        if let Some(strings) = self.str_id {
            return crate::data::IdList::Str(strings.data);
        }
        crate::data::IdList::Long(Vec::new())
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct MutationDto {
    pub status: RestStatus,
    pub ids: Option<IdsDto>,
    pub insert_cnt: i64,
    pub delete_cnt: i64,
    pub upsert_cnt: i64,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SearchResultDataDto {
    pub num_queries: i64,
    pub top_k: i64,
    pub fields_data: Vec<serde_json::Value>,
    pub scores: Vec<f32>,
    pub ids: Option<IdsDto>,
    pub topks: Vec<i64>,
    pub output_fields: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SearchResultsDto {
    pub status: RestStatus,
    pub results: Option<SearchResultDataDto>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryResultsDto {
    pub status: RestStatus,
    pub fields_data: Vec<serde_json::Value>,
    pub output_fields: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FlushDto {
    pub status: RestStatus,
    pub coll_seg_ids: HashMap<String, LongArrayDto>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ManualCompactionDto {
    pub status: RestStatus,
    #[serde(alias = "compactionID")]
    pub compaction_id: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CompactionStateDto {
    pub status: RestStatus,
    pub state: Option<IntOrName>,
    pub executing_plan_no: i64,
    pub timeout_plan_no: i64,
    pub completed_plan_no: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListCredUsersDto {
    pub status: RestStatus,
    pub usernames: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VersionDto {
    pub status: RestStatus,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accepts_integer_and_name_codes() {
        let by_int: RestStatus = match serde_json::from_str(r#"{"error_code":4,"reason":"gone"}"#)
        {
            Ok(status) => status,
            Err(error) => {
                assert!(false, "deserialize failed: {error}");
                return;
            }
        };
        assert_eq!(by_int.code(), 4);
        let by_name: RestStatus =
            match serde_json::from_str(r#"{"error_code":"CollectionNotExists","reason":"gone"}"#) {
                Ok(status) => status,
                Err(error) => {
                    assert!(false, "deserialize failed: {error}");
                    return;
                }
            };
        assert_eq!(by_name.code(), 4);
        assert!(by_name.check("collection.describe").is_err());
    }

    #[test]
    fn missing_status_fields_read_as_success() {
        let empty: RestStatus = match serde_json::from_str("{}") {
            Ok(status) => status,
            Err(error) => {
                assert!(false, "deserialize failed: {error}");
                return;
            }
        };
        assert!(empty.check("collection.create").is_ok());
    }

    #[test]
    fn ids_dto_prefers_long_ids() {
        let dto = IdsDto {
            int_id: Some(LongArrayDto { data: vec![5, 6] }),
            str_id: None,
        };
        assert_eq!(dto.into_id_list(), crate::data::IdList::Long(vec![5, 6]));
    }

    #[test]
    fn state_name_resolution() {
        assert_eq!(
            index_state_code(Some(&IntOrName::Name("Finished".to_owned()))),
            3
        );
        assert_eq!(compaction_state_code(Some(&IntOrName::Int(2))), 2);
    }
}

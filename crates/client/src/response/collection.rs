//! Typed collection metadata.

use crate::error::Result;
use crate::schema::{CollectionSchema, ConsistencyLevel};
use milvus_client_proto::common::KeyValuePair;
use milvus_client_proto::milvus as proto;

/// Description of an existing collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionInfo {
    /// Collection name.
    pub name: Box<str>,
    /// Server-assigned collection id.
    pub id: i64,
    /// The declared schema.
    pub schema: CollectionSchema,
    /// Number of shards.
    pub shards_num: i32,
    /// Default read consistency.
    pub consistency_level: ConsistencyLevel,
    /// Creation time as a hybrid timestamp.
    pub created_timestamp: u64,
    /// Creation time as epoch milliseconds.
    pub created_utc_timestamp: u64,
    /// Aliases pointing at this collection.
    pub aliases: Vec<String>,
    /// Number of physical partitions backing a partition key.
    pub num_partitions: i64,
    /// Collection-level properties.
    pub properties: Vec<(String, String)>,
}

impl CollectionInfo {
    /// Build from the wire response. The caller has already checked the
    /// status.
    pub fn from_proto(response: &proto::DescribeCollectionResponse) -> Result<Self> {
        let schema = match &response.schema {
            Some(schema) => CollectionSchema::from_proto(schema)?,
            None => CollectionSchema::new(response.collection_name.as_str()),
        };
        let consistency_level =
            match milvus_client_proto::common::ConsistencyLevel::try_from(
                response.consistency_level,
            ) {
                Ok(milvus_client_proto::common::ConsistencyLevel::Strong) => {
                    ConsistencyLevel::Strong
                }
                Ok(milvus_client_proto::common::ConsistencyLevel::Session) => {
                    ConsistencyLevel::Session
                }
                Ok(milvus_client_proto::common::ConsistencyLevel::Eventually) => {
                    ConsistencyLevel::Eventually
                }
                Ok(milvus_client_proto::common::ConsistencyLevel::Customized) => {
                    ConsistencyLevel::Customized
                }
                _ => ConsistencyLevel::Bounded,
            };
        let name = if response.collection_name.is_empty() {
            schema.name.clone()
        } else {
            Box::from(response.collection_name.as_str())
        };
        Ok(Self {
            name,
            id: response.collection_id,
            schema,
            shards_num: response.shards_num,
            consistency_level,
            created_timestamp: response.created_timestamp,
            created_utc_timestamp: response.created_utc_timestamp,
            aliases: response.aliases.clone(),
            num_partitions: response.num_partitions,
            properties: response
                .properties
                .iter()
                .map(|pair| (pair.key.clone(), pair.value.clone()))
                .collect(),
        })
    }
}

/// Key/value statistics reported for a collection or partition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Raw statistic entries as reported by the server.
    pub entries: Vec<(String, String)>,
}

impl Statistics {
    /// Build from wire key/value pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[KeyValuePair]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|pair| (pair.key.clone(), pair.value.clone()))
                .collect(),
        }
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `row_count` statistic, when present and numeric.
    #[must_use]
    pub fn row_count(&self) -> Option<i64> {
        self.get("row_count").and_then(|value| value.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DataType, FieldSchema};

    #[test]
    fn describe_response_carries_schema_and_aliases() {
        let schema = CollectionSchema::new("films")
            .field(FieldSchema::new("film_id", DataType::Int64).primary_key());
        let response = proto::DescribeCollectionResponse {
            status: None,
            schema: Some(schema.to_proto()),
            collection_id: 42,
            created_timestamp: 7,
            created_utc_timestamp: 1_700_000_000_000,
            shards_num: 2,
            aliases: vec!["films_live".to_owned()],
            consistency_level: ConsistencyLevel::Strong.wire_value(),
            collection_name: "films".to_owned(),
            properties: Vec::new(),
            db_name: String::new(),
            num_partitions: 1,
        };
        match CollectionInfo::from_proto(&response) {
            Ok(info) => {
                assert_eq!(info.name.as_ref(), "films");
                assert_eq!(info.id, 42);
                assert_eq!(info.consistency_level, ConsistencyLevel::Strong);
                assert_eq!(info.aliases, vec!["films_live".to_owned()]);
                assert_eq!(info.schema.fields.len(), 1);
            }
            Err(error) => assert!(false, "parse failed: {error}"),
        }
    }

    #[test]
    fn statistics_expose_row_count() {
        let stats = Statistics::from_pairs(&[KeyValuePair {
            key: "row_count".to_owned(),
            value: "1234".to_owned(),
        }]);
        assert_eq!(stats.row_count(), Some(1234));
        assert_eq!(stats.get("missing"), None);
    }
}

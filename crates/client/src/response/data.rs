//! Typed views over mutation, search, query, flush, and compaction
//! responses.

use crate::data::{Field, IdList};
use crate::error::{Error, Result};
use milvus_client_proto::common as proto_common;
use milvus_client_proto::milvus as proto;
use milvus_client_proto::schema::SearchResultData;
use std::collections::HashMap;

/// Outcome of an insert, delete, or upsert.
///
/// The `timestamp` is the hybrid timestamp the mutation was applied at;
/// passing it back as a `guarantee_timestamp` makes a later read observe
/// this write.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Primary keys affected by the mutation.
    pub ids: IdList,
    /// Rows inserted.
    pub insert_count: i64,
    /// Rows deleted.
    pub delete_count: i64,
    /// Rows upserted.
    pub upsert_count: i64,
    /// Hybrid timestamp of the mutation.
    pub timestamp: u64,
}

impl MutationResult {
    /// Build from the wire message. The caller has already checked the
    /// status.
    #[must_use]
    pub fn from_proto(result: &proto::MutationResult) -> Self {
        Self {
            ids: IdList::from_proto(result.ids.as_ref()),
            insert_count: result.insert_cnt,
            delete_count: result.delete_cnt,
            upsert_count: result.upsert_cnt,
            timestamp: result.timestamp,
        }
    }
}

/// The hits for a single query vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHits {
    /// Primary keys of the hits, nearest first.
    pub ids: IdList,
    /// Similarity scores, parallel to `ids`.
    pub scores: Vec<f32>,
}

/// A parsed search response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Number of query vectors answered.
    pub num_queries: i64,
    /// Names of the requested output fields.
    pub output_fields: Vec<String>,
    /// Output field columns covering all hits, query-major.
    pub fields: Vec<Field>,
    /// Per-query hits, in query order.
    pub hits: Vec<SearchHits>,
}

impl SearchResult {
    /// Slice the flat wire layout into per-query hits using the reported
    /// per-query counts.
    pub fn from_proto(data: &SearchResultData) -> Result<Self> {
        let fields = data
            .fields_data
            .iter()
            .map(Field::from_proto)
            .collect::<Result<Vec<_>>>()?;
        let all_ids = IdList::from_proto(data.ids.as_ref());
        let mut hits = Vec::with_capacity(data.topks.len());
        let mut offset = 0usize;
        for topk in &data.topks {
            let len = usize::try_from(*topk).map_err(|_| {
                Error::decode("search results", format!("negative per-query count {topk}"))
            })?;
            let end = offset.saturating_add(len);
            if end > all_ids.len() || end > data.scores.len() {
                return Err(Error::decode(
                    "search results",
                    format!(
                        "per-query counts cover {end} hits but only {} ids and {} scores arrived",
                        all_ids.len(),
                        data.scores.len()
                    ),
                ));
            }
            hits.push(SearchHits {
                ids: all_ids.slice(offset, len),
                scores: data.scores[offset..end].to_vec(),
            });
            offset = end;
        }
        Ok(Self {
            num_queries: data.num_queries,
            output_fields: data.output_fields.clone(),
            fields,
            hits,
        })
    }
}

/// A parsed query response.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Names of the requested output fields.
    pub output_fields: Vec<String>,
    /// One column per output field.
    pub fields: Vec<Field>,
}

impl QueryResult {
    /// Build from the wire message. The caller has already checked the
    /// status.
    pub fn from_proto(results: &proto::QueryResults) -> Result<Self> {
        let fields = results
            .fields_data
            .iter()
            .map(Field::from_proto)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            output_fields: results.output_fields.clone(),
            fields,
        })
    }

    /// The column for a named field, if it was returned.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.as_ref() == name)
    }

    /// Row count of the result set, zero when no columns came back.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.fields.first().map_or(0, Field::row_count)
    }
}

/// Segments sealed by a flush, keyed by collection name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlushResult {
    /// Sealed segment ids per collection.
    pub collection_segment_ids: HashMap<String, Vec<i64>>,
}

impl FlushResult {
    /// Build from the wire message.
    #[must_use]
    pub fn from_proto(response: &proto::FlushResponse) -> Self {
        Self {
            collection_segment_ids: response
                .coll_seg_ids
                .iter()
                .map(|(name, segments)| (name.clone(), segments.data.clone()))
                .collect(),
        }
    }
}

/// Compaction plan state as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactionPlanState {
    /// The server has no record of the plan.
    Undefined,
    /// Plans are still running.
    Executing,
    /// All plans finished.
    Completed,
}

impl CompactionPlanState {
    /// Map the wire enum, treating unknown tags as still executing.
    #[must_use]
    pub fn from_proto(value: i32) -> Self {
        match proto_common::CompactionState::try_from(value) {
            Ok(proto_common::CompactionState::Undefined) => Self::Undefined,
            Ok(proto_common::CompactionState::Completed) => Self::Completed,
            Ok(proto_common::CompactionState::Executing) | Err(_) => Self::Executing,
        }
    }
}

/// Progress of a manual compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactionStateInfo {
    /// Overall state.
    pub state: CompactionPlanState,
    /// Plans still executing.
    pub executing_plans: i64,
    /// Plans that timed out.
    pub timed_out_plans: i64,
    /// Plans completed.
    pub completed_plans: i64,
}

impl CompactionStateInfo {
    /// Build from the wire message.
    #[must_use]
    pub fn from_proto(response: &proto::GetCompactionStateResponse) -> Self {
        Self {
            state: CompactionPlanState::from_proto(response.state),
            executing_plans: response.executing_plan_no,
            timed_out_plans: response.timeout_plan_no,
            completed_plans: response.completed_plan_no,
        }
    }
}

/// Distances from `calc_distance`, integral for binary metrics and
/// floating for dense metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum DistanceValues {
    /// Hamming-style integral distances.
    Int(Vec<i64>),
    /// L2/IP-style floating distances.
    Float(Vec<f32>),
}

impl DistanceValues {
    /// Build from the wire oneof.
    pub fn from_proto(results: &proto::CalcDistanceResults) -> Result<Self> {
        match &results.array {
            Some(proto::calc_distance_results::Array::IntDist(array)) => {
                Ok(Self::Int(array.data.iter().map(|v| i64::from(*v)).collect()))
            }
            Some(proto::calc_distance_results::Array::FloatDist(array)) => {
                Ok(Self::Float(array.data.clone()))
            }
            None => Err(Error::decode(
                "distance results",
                "response carries no distance payload",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milvus_client_proto::schema::{self as proto_schema, ids};

    fn search_data(topks: Vec<i64>, ids: Vec<i64>, scores: Vec<f32>) -> SearchResultData {
        SearchResultData {
            num_queries: i64::try_from(topks.len()).unwrap_or_default(),
            top_k: topks.iter().copied().max().unwrap_or_default(),
            fields_data: Vec::new(),
            scores,
            ids: Some(proto_schema::Ids {
                id_field: Some(ids::IdField::IntId(proto_schema::LongArray { data: ids })),
            }),
            topks,
            output_fields: Vec::new(),
        }
    }

    #[test]
    fn search_hits_slice_query_major() {
        let data = search_data(vec![2, 3], vec![10, 11, 20, 21, 22], vec![0.1, 0.2, 0.3, 0.4, 0.5]);
        match SearchResult::from_proto(&data) {
            Ok(result) => {
                assert_eq!(result.hits.len(), 2);
                assert_eq!(result.hits[0].ids, IdList::Long(vec![10, 11]));
                assert_eq!(result.hits[1].ids, IdList::Long(vec![20, 21, 22]));
                assert_eq!(result.hits[1].scores, vec![0.3, 0.4, 0.5]);
            }
            Err(error) => assert!(false, "parse failed: {error}"),
        }
    }

    #[test]
    fn search_rejects_counts_beyond_payload() {
        let data = search_data(vec![4], vec![10, 11], vec![0.1, 0.2]);
        let error = SearchResult::from_proto(&data).err();
        assert!(matches!(error, Some(Error::Decode { .. })));
    }

    #[test]
    fn mutation_result_carries_counts_and_timestamp() {
        let wire = proto::MutationResult {
            status: None,
            ids: Some(proto_schema::Ids {
                id_field: Some(ids::IdField::IntId(proto_schema::LongArray {
                    data: vec![1, 2],
                })),
            }),
            succ_index: Vec::new(),
            err_index: Vec::new(),
            acknowledged: true,
            insert_cnt: 2,
            delete_cnt: 0,
            upsert_cnt: 0,
            timestamp: 99,
        };
        let result = MutationResult::from_proto(&wire);
        assert_eq!(result.insert_count, 2);
        assert_eq!(result.timestamp, 99);
        assert_eq!(result.ids, IdList::Long(vec![1, 2]));
    }

    #[test]
    fn distance_results_require_a_payload() {
        let empty = proto::CalcDistanceResults {
            status: None,
            array: None,
        };
        assert!(DistanceValues::from_proto(&empty).is_err());
    }
}

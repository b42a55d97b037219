//! Typed index metadata and build state.

use milvus_client_proto::common as proto_common;
use milvus_client_proto::milvus as proto;

/// The lifecycle state of an index build, collapsed to what callers act
/// on. The server's queued and retrying states both report as
/// [`IndexState::InProgress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// No index build has been observed.
    None,
    /// The build is queued, running, or being retried.
    InProgress,
    /// The build completed.
    Finished,
    /// The build failed permanently.
    Failed,
}

impl IndexState {
    /// Collapse the wire enum. Unknown tags report as in-progress so
    /// pollers keep waiting instead of failing.
    #[must_use]
    pub fn from_proto(value: i32) -> Self {
        match proto_common::IndexState::try_from(value) {
            Ok(proto_common::IndexState::IndexStateNone) => Self::None,
            Ok(proto_common::IndexState::Finished) => Self::Finished,
            Ok(proto_common::IndexState::Failed) => Self::Failed,
            Ok(
                proto_common::IndexState::Unissued
                | proto_common::IndexState::InProgress
                | proto_common::IndexState::Retry,
            )
            | Err(_) => Self::InProgress,
        }
    }
}

/// An index state paired with the failure reason when the build failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStateInfo {
    /// Collapsed build state.
    pub state: IndexState,
    /// Failure reason, empty unless the state is failed.
    pub fail_reason: String,
}

/// Description of an index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexInfo {
    /// Index name.
    pub index_name: Box<str>,
    /// Server-assigned index id.
    pub index_id: i64,
    /// The indexed field.
    pub field_name: Box<str>,
    /// Index parameters, e.g. `index_type` and `metric_type`.
    pub params: Vec<(String, String)>,
    /// Rows indexed so far.
    pub indexed_rows: i64,
    /// Total rows in the collection.
    pub total_rows: i64,
    /// Collapsed build state.
    pub state: IndexState,
    /// Failure reason, empty unless the state is failed.
    pub fail_reason: String,
}

impl IndexInfo {
    /// Build from a wire description.
    #[must_use]
    pub fn from_proto(description: &proto::IndexDescription) -> Self {
        Self {
            index_name: Box::from(description.index_name.as_str()),
            index_id: description.index_id,
            field_name: Box::from(description.field_name.as_str()),
            params: description
                .params
                .iter()
                .map(|pair| (pair.key.clone(), pair.value.clone()))
                .collect(),
            indexed_rows: description.indexed_rows,
            total_rows: description.total_rows,
            state: IndexState::from_proto(description.state),
            fail_reason: description.index_state_fail_reason.clone(),
        }
    }
}

/// Progress of an index build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexBuildProgress {
    /// Rows indexed so far.
    pub indexed_rows: i64,
    /// Total rows to index.
    pub total_rows: i64,
}

impl IndexBuildProgress {
    /// True once every row is indexed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total_rows > 0 && self.indexed_rows >= self.total_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_and_retrying_collapse_to_in_progress() {
        assert_eq!(
            IndexState::from_proto(proto_common::IndexState::IndexStateNone as i32),
            IndexState::None
        );
        assert_eq!(
            IndexState::from_proto(proto_common::IndexState::Unissued as i32),
            IndexState::InProgress
        );
        assert_eq!(
            IndexState::from_proto(proto_common::IndexState::Retry as i32),
            IndexState::InProgress
        );
        assert_eq!(
            IndexState::from_proto(proto_common::IndexState::Finished as i32),
            IndexState::Finished
        );
        assert_eq!(IndexState::from_proto(999), IndexState::InProgress);
    }

    #[test]
    fn build_progress_completion() {
        let progress = IndexBuildProgress {
            indexed_rows: 10,
            total_rows: 10,
        };
        assert!(progress.is_complete());
        let empty = IndexBuildProgress {
            indexed_rows: 0,
            total_rows: 0,
        };
        assert!(!empty.is_complete());
    }
}

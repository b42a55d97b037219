//! Request builders.
//!
//! Each builder owns the parameters of one operation, validates them
//! before any I/O, and renders into both wire shapes: a proto message for
//! the gRPC transport and a [`RestRequest`] for the REST facade.
//! Operations the facade does not expose return
//! [`crate::error::Error::NotSupported`] from their REST renderer.

pub mod alias;
pub mod collection;
pub mod compaction;
pub mod credential;
pub mod data;
pub mod database;
pub mod index;
pub mod partition;
pub mod rbac;
pub mod search;

pub use alias::{AlterAliasRequest, CreateAliasRequest, DropAliasRequest};
pub use collection::{
    CreateCollectionRequest, DescribeCollectionRequest, DropCollectionRequest,
    GetCollectionStatisticsRequest, GetLoadingProgressRequest, HasCollectionRequest,
    LoadCollectionRequest, ReleaseCollectionRequest, RenameCollectionRequest,
    ShowCollectionsRequest,
};
pub use compaction::{GetCompactionStateRequest, ManualCompactionRequest};
pub use credential::{
    CreateCredentialRequest, DeleteCredentialRequest, ListCredUsersRequest,
    UpdateCredentialRequest,
};
pub use data::{DeleteRequest, FlushRequest, InsertRequest};
pub use database::{CreateDatabaseRequest, DropDatabaseRequest, ListDatabasesRequest};
pub use index::{
    CreateIndexRequest, DescribeIndexRequest, DropIndexRequest, GetIndexBuildProgressRequest,
    GetIndexStateRequest,
};
pub use partition::{
    CreatePartitionRequest, DropPartitionRequest, GetPartitionStatisticsRequest,
    HasPartitionRequest, LoadPartitionsRequest, ReleasePartitionsRequest, ShowPartitionsRequest,
};
pub use rbac::{
    CreateRoleRequest, DropRoleRequest, OperatePrivilegeRequest, OperateUserRoleRequest,
    SelectGrantRequest, SelectRoleRequest, SelectUserRequest,
};
pub use search::{CalcDistanceRequest, QueryRequest, QueryVectors, SearchRequest, VectorsSource};

use crate::error::{Error, Result};

/// A rendered REST call: method, path under the facade root, and JSON
/// body.
#[derive(Debug, Clone)]
pub struct RestRequest {
    /// HTTP method.
    pub method: reqwest::Method,
    /// Path under the facade root, e.g. `/api/v1/collection`.
    pub path: &'static str,
    /// JSON body. The facade reads bodies on every method, GET included.
    pub body: serde_json::Value,
}

impl RestRequest {
    /// Build a rendered call.
    #[must_use]
    pub const fn new(
        method: reqwest::Method,
        path: &'static str,
        body: serde_json::Value,
    ) -> Self {
        Self { method, path, body }
    }
}

pub(crate) fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{what} must be non-empty")));
    }
    Ok(())
}

pub(crate) fn pairs_to_proto(
    pairs: &[(String, String)],
) -> Vec<milvus_client_proto::common::KeyValuePair> {
    pairs
        .iter()
        .map(|(key, value)| milvus_client_proto::common::KeyValuePair {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

pub(crate) fn pairs_to_json(pairs: &[(String, String)]) -> serde_json::Value {
    serde_json::Value::Array(
        pairs
            .iter()
            .map(|(key, value)| serde_json::json!({ "key": key, "value": value }))
            .collect(),
    )
}

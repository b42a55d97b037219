//! Compaction requests. Compaction is addressed by collection id, not
//! name; callers describe the collection first.

use crate::error::{Error, Result};
use super::RestRequest;
use milvus_client_proto::milvus as proto;
use reqwest::Method;
use serde_json::json;

/// Trigger a manual compaction of a collection's segments.
#[derive(Debug, Clone, Copy)]
pub struct ManualCompactionRequest {
    /// Server-assigned collection id.
    pub collection_id: i64,
}

impl ManualCompactionRequest {
    /// Build the request.
    #[must_use]
    pub const fn new(collection_id: i64) -> Self {
        Self { collection_id }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        if self.collection_id <= 0 {
            return Err(Error::validation("collectionId must be positive"));
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub const fn to_grpc(&self, _db_name: &str) -> proto::ManualCompactionRequest {
        proto::ManualCompactionRequest {
            collection_id: self.collection_id,
            timetravel: 0,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::POST,
            "/api/v1/compaction",
            json!({ "collectionID": self.collection_id }),
        ))
    }
}

/// Fetch the state of a previously triggered compaction.
#[derive(Debug, Clone, Copy)]
pub struct GetCompactionStateRequest {
    /// Id returned by the compaction trigger.
    pub compaction_id: i64,
}

impl GetCompactionStateRequest {
    /// Build the request.
    #[must_use]
    pub const fn new(compaction_id: i64) -> Self {
        Self { compaction_id }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        if self.compaction_id <= 0 {
            return Err(Error::validation("compactionId must be positive"));
        }
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub const fn to_grpc(&self, _db_name: &str) -> proto::GetCompactionStateRequest {
        proto::GetCompactionStateRequest {
            compaction_id: self.compaction_id,
        }
    }

    /// Render the REST call.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Ok(RestRequest::new(
            Method::GET,
            "/api/v1/compaction/state",
            json!({ "compactionID": self.compaction_id }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compaction_ids_must_be_positive() {
        assert!(ManualCompactionRequest::new(0).validate().is_err());
        assert!(GetCompactionStateRequest::new(-1).validate().is_err());
        assert!(ManualCompactionRequest::new(7).validate().is_ok());
    }

    #[test]
    fn state_is_fetched_by_compaction_id() {
        let request = GetCompactionStateRequest::new(42);
        assert_eq!(request.to_grpc("default").compaction_id, 42);
        match request.to_rest("default") {
            Ok(rest) => {
                assert_eq!(rest.path, "/api/v1/compaction/state");
                assert_eq!(rest.body["compactionID"], 42);
            }
            Err(error) => assert!(false, "rest render failed: {error}"),
        }
    }
}

//! Typed views over server responses, shared by both transports.

pub mod collection;
pub mod data;
pub mod index;
pub mod rbac;
pub mod rest;

pub use collection::{CollectionInfo, Statistics};
pub use data::{
    CompactionPlanState, CompactionStateInfo, DistanceValues, FlushResult, MutationResult,
    QueryResult, SearchHits, SearchResult,
};
pub use index::{IndexBuildProgress, IndexInfo, IndexState, IndexStateInfo};
pub use rbac::{GrantInfo, RoleInfo, UserInfo};

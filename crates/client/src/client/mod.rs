//! The transport-agnostic client trait and its two implementations.
//!
//! [`MilvusClient`] exposes one method per server operation. Both the
//! gRPC implementation and the REST facade implementation validate the
//! request, render it for their wire, honour the context's cancellation
//! token and the configured timeout, and parse the response into the
//! typed model. Operations the REST facade does not expose return
//! [`crate::error::Error::NotSupported`] from the REST implementation.

pub mod grpc;
pub mod rest;

pub use grpc::MilvusGrpcClient;
pub use rest::MilvusRestClient;

use crate::context::RequestContext;
use crate::error::Result;
use crate::request::{
    AlterAliasRequest, CalcDistanceRequest, CreateAliasRequest, CreateCollectionRequest,
    CreateCredentialRequest, CreateDatabaseRequest, CreateIndexRequest, CreatePartitionRequest,
    CreateRoleRequest, DeleteCredentialRequest, DeleteRequest, DescribeCollectionRequest,
    DescribeIndexRequest, DropAliasRequest, DropCollectionRequest, DropDatabaseRequest,
    DropIndexRequest, DropPartitionRequest, DropRoleRequest, FlushRequest,
    GetCollectionStatisticsRequest, GetCompactionStateRequest, GetIndexBuildProgressRequest,
    GetIndexStateRequest, GetLoadingProgressRequest, GetPartitionStatisticsRequest,
    HasCollectionRequest, HasPartitionRequest, InsertRequest, ListCredUsersRequest,
    ListDatabasesRequest, LoadCollectionRequest, LoadPartitionsRequest, ManualCompactionRequest,
    OperatePrivilegeRequest, OperateUserRoleRequest, QueryRequest, ReleaseCollectionRequest,
    ReleasePartitionsRequest, RenameCollectionRequest, SearchRequest, SelectGrantRequest,
    SelectRoleRequest, SelectUserRequest, ShowCollectionsRequest, ShowPartitionsRequest,
    UpdateCredentialRequest,
};
use crate::response::{
    CollectionInfo, CompactionStateInfo, DistanceValues, FlushResult, GrantInfo,
    IndexBuildProgress, IndexInfo, IndexStateInfo, MutationResult, QueryResult, RoleInfo,
    SearchResult, Statistics, UserInfo,
};
use futures_util::future::BoxFuture;

/// One method per server operation, implemented by both transports.
pub trait MilvusClient: Send + Sync {
    /// Create a collection from a validated schema.
    fn create_collection(
        &self,
        ctx: &RequestContext,
        request: CreateCollectionRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Drop a collection and all of its data.
    fn drop_collection(
        &self,
        ctx: &RequestContext,
        request: DropCollectionRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Check whether a collection exists.
    fn has_collection(
        &self,
        ctx: &RequestContext,
        request: HasCollectionRequest,
    ) -> BoxFuture<'_, Result<bool>>;

    /// Fetch a collection's schema and metadata.
    fn describe_collection(
        &self,
        ctx: &RequestContext,
        request: DescribeCollectionRequest,
    ) -> BoxFuture<'_, Result<CollectionInfo>>;

    /// Rename a collection. gRPC only.
    fn rename_collection(
        &self,
        ctx: &RequestContext,
        request: RenameCollectionRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// List collection names.
    fn show_collections(
        &self,
        ctx: &RequestContext,
        request: ShowCollectionsRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>>;

    /// Load a collection into query nodes.
    fn load_collection(
        &self,
        ctx: &RequestContext,
        request: LoadCollectionRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Release a loaded collection.
    fn release_collection(
        &self,
        ctx: &RequestContext,
        request: ReleaseCollectionRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Load progress as a percentage in `0..=100`.
    fn get_loading_progress(
        &self,
        ctx: &RequestContext,
        request: GetLoadingProgressRequest,
    ) -> BoxFuture<'_, Result<i64>>;

    /// Collection statistics such as `row_count`.
    fn get_collection_statistics(
        &self,
        ctx: &RequestContext,
        request: GetCollectionStatisticsRequest,
    ) -> BoxFuture<'_, Result<Statistics>>;

    /// Create a partition.
    fn create_partition(
        &self,
        ctx: &RequestContext,
        request: CreatePartitionRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Drop a partition.
    fn drop_partition(
        &self,
        ctx: &RequestContext,
        request: DropPartitionRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Check whether a partition exists.
    fn has_partition(
        &self,
        ctx: &RequestContext,
        request: HasPartitionRequest,
    ) -> BoxFuture<'_, Result<bool>>;

    /// List partition names of a collection.
    fn show_partitions(
        &self,
        ctx: &RequestContext,
        request: ShowPartitionsRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>>;

    /// Load partitions into query nodes.
    fn load_partitions(
        &self,
        ctx: &RequestContext,
        request: LoadPartitionsRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Release loaded partitions.
    fn release_partitions(
        &self,
        ctx: &RequestContext,
        request: ReleasePartitionsRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Partition statistics such as `row_count`.
    fn get_partition_statistics(
        &self,
        ctx: &RequestContext,
        request: GetPartitionStatisticsRequest,
    ) -> BoxFuture<'_, Result<Statistics>>;

    /// Create an alias for a collection.
    fn create_alias(
        &self,
        ctx: &RequestContext,
        request: CreateAliasRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Drop an alias.
    fn drop_alias(
        &self,
        ctx: &RequestContext,
        request: DropAliasRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Point an existing alias at another collection.
    fn alter_alias(
        &self,
        ctx: &RequestContext,
        request: AlterAliasRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Create an index on a field.
    fn create_index(
        &self,
        ctx: &RequestContext,
        request: CreateIndexRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Describe the indexes on a field, or all indexes of a collection.
    fn describe_index(
        &self,
        ctx: &RequestContext,
        request: DescribeIndexRequest,
    ) -> BoxFuture<'_, Result<Vec<IndexInfo>>>;

    /// Drop an index.
    fn drop_index(
        &self,
        ctx: &RequestContext,
        request: DropIndexRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// The build state of an index.
    fn get_index_state(
        &self,
        ctx: &RequestContext,
        request: GetIndexStateRequest,
    ) -> BoxFuture<'_, Result<IndexStateInfo>>;

    /// Indexed and total row counts of an index build.
    fn get_index_build_progress(
        &self,
        ctx: &RequestContext,
        request: GetIndexBuildProgressRequest,
    ) -> BoxFuture<'_, Result<IndexBuildProgress>>;

    /// Insert column data.
    fn insert(
        &self,
        ctx: &RequestContext,
        request: InsertRequest,
    ) -> BoxFuture<'_, Result<MutationResult>>;

    /// Delete rows matching a boolean expression.
    fn delete(
        &self,
        ctx: &RequestContext,
        request: DeleteRequest,
    ) -> BoxFuture<'_, Result<MutationResult>>;

    /// Seal and persist the growing segments of collections.
    fn flush(
        &self,
        ctx: &RequestContext,
        request: FlushRequest,
    ) -> BoxFuture<'_, Result<FlushResult>>;

    /// Vector similarity search.
    fn search(
        &self,
        ctx: &RequestContext,
        request: SearchRequest,
    ) -> BoxFuture<'_, Result<SearchResult>>;

    /// Retrieve rows matching a boolean expression.
    fn query(
        &self,
        ctx: &RequestContext,
        request: QueryRequest,
    ) -> BoxFuture<'_, Result<QueryResult>>;

    /// Compute pairwise distances between two vector sets. gRPC only.
    fn calc_distance(
        &self,
        ctx: &RequestContext,
        request: CalcDistanceRequest,
    ) -> BoxFuture<'_, Result<DistanceValues>>;

    /// Trigger a manual compaction, returning the compaction id.
    fn manual_compaction(
        &self,
        ctx: &RequestContext,
        request: ManualCompactionRequest,
    ) -> BoxFuture<'_, Result<i64>>;

    /// Poll the state of a manual compaction.
    fn get_compaction_state(
        &self,
        ctx: &RequestContext,
        request: GetCompactionStateRequest,
    ) -> BoxFuture<'_, Result<CompactionStateInfo>>;

    /// Create a user credential.
    fn create_credential(
        &self,
        ctx: &RequestContext,
        request: CreateCredentialRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Change a user's password.
    fn update_credential(
        &self,
        ctx: &RequestContext,
        request: UpdateCredentialRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Delete a user credential.
    fn delete_credential(
        &self,
        ctx: &RequestContext,
        request: DeleteCredentialRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// List user names known to the server.
    fn list_cred_users(
        &self,
        ctx: &RequestContext,
        request: ListCredUsersRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>>;

    /// Create a role. gRPC only.
    fn create_role(
        &self,
        ctx: &RequestContext,
        request: CreateRoleRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Drop a role. gRPC only.
    fn drop_role(
        &self,
        ctx: &RequestContext,
        request: DropRoleRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Add a user to, or remove a user from, a role. gRPC only.
    fn operate_user_role(
        &self,
        ctx: &RequestContext,
        request: OperateUserRoleRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// List roles, optionally with their members. gRPC only.
    fn select_role(
        &self,
        ctx: &RequestContext,
        request: SelectRoleRequest,
    ) -> BoxFuture<'_, Result<Vec<RoleInfo>>>;

    /// List users, optionally with their roles. gRPC only.
    fn select_user(
        &self,
        ctx: &RequestContext,
        request: SelectUserRequest,
    ) -> BoxFuture<'_, Result<Vec<UserInfo>>>;

    /// Grant or revoke a privilege on an object. gRPC only.
    fn operate_privilege(
        &self,
        ctx: &RequestContext,
        request: OperatePrivilegeRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// List the grants of a role. gRPC only.
    fn select_grant(
        &self,
        ctx: &RequestContext,
        request: SelectGrantRequest,
    ) -> BoxFuture<'_, Result<Vec<GrantInfo>>>;

    /// Create a database. gRPC only.
    fn create_database(
        &self,
        ctx: &RequestContext,
        request: CreateDatabaseRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// Drop a database. gRPC only.
    fn drop_database(
        &self,
        ctx: &RequestContext,
        request: DropDatabaseRequest,
    ) -> BoxFuture<'_, Result<()>>;

    /// List database names. gRPC only.
    fn list_databases(
        &self,
        ctx: &RequestContext,
        request: ListDatabasesRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>>;

    /// The server's build version string.
    fn get_version(&self, ctx: &RequestContext) -> BoxFuture<'_, Result<String>>;
}

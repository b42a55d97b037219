//! The gRPC transport.
//!
//! Wraps the generated service client behind [`MilvusClient`]. Every call
//! is raced against the context's cancellation token and the configured
//! per-call timeout. Credentials and the database name travel as request
//! metadata, attached by an interceptor.

use crate::client::MilvusClient;
use crate::config::ConnectConfig;
use crate::context::RequestContext;
use crate::error::{Error, Result, check_status, map_grpc_status};
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
use milvus_client_proto::milvus as proto;
use milvus_client_proto::milvus::milvus_service_client::MilvusServiceClient;
use std::future::Future;
use std::time::Duration;
use tonic::codegen::InterceptedService;
use tonic::metadata::AsciiMetadataValue;
use tonic::service::Interceptor;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

#[derive(Clone)]
struct AuthInterceptor {
    auth_header: Option<AsciiMetadataValue>,
    db_name: Option<AsciiMetadataValue>,
}

impl AuthInterceptor {
    fn from_config(config: &ConnectConfig) -> Result<Self> {
        let auth_header = match config.grpc_authorization_value() {
            Some(value) => Some(AsciiMetadataValue::try_from(value).map_err(|_| {
                Error::validation("credentials contain characters not allowed in a header")
            })?),
            None => None,
        };
        let db_name = if config.database.is_empty() {
            None
        } else {
            Some(
                AsciiMetadataValue::try_from(config.database.as_ref()).map_err(|_| {
                    Error::validation("database name contains characters not allowed in a header")
                })?,
            )
        };
        Ok(Self {
            auth_header,
            db_name,
        })
    }
}

impl Interceptor for AuthInterceptor {
    fn call(
        &mut self,
        mut req: tonic::Request<()>,
    ) -> std::result::Result<tonic::Request<()>, tonic::Status> {
        if let Some(header) = self.auth_header.clone() {
            req.metadata_mut().insert("authorization", header);
        }
        if let Some(db_name) = self.db_name.clone() {
            req.metadata_mut().insert("dbname", db_name);
        }
        Ok(req)
    }
}

/// gRPC implementation of [`MilvusClient`].
#[derive(Clone)]
pub struct MilvusGrpcClient {
    client: MilvusServiceClient<InterceptedService<Channel, AuthInterceptor>>,
    timeout: Duration,
    db_name: Box<str>,
}

impl MilvusGrpcClient {
    /// Connect to the server described by the configuration.
    pub async fn connect(config: &ConnectConfig) -> Result<Self> {
        config.validate()?;
        let mut endpoint = Endpoint::from_shared(config.grpc_address())
            .map_err(|error| Error::validation(format!("invalid server address: {error}")))?
            .timeout(config.timeout());
        if config.tls {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new())
                .map_err(|error| Error::validation(format!("invalid TLS config: {error}")))?;
        }
        let channel = endpoint.connect().await.map_err(|error| {
            Error::transport("connect", format!("failed to connect: {error}"))
        })?;
        let interceptor = AuthInterceptor::from_config(config)?;
        let client = MilvusServiceClient::with_interceptor(channel, interceptor);
        tracing::debug!(
            host = %config.host,
            port = config.port,
            tls = config.tls,
            "connected to milvus over grpc"
        );
        Ok(Self {
            client,
            timeout: config.timeout(),
            db_name: config.database.clone(),
        })
    }

    async fn call_with_timeout<T>(
        &self,
        ctx: &RequestContext,
        operation: &'static str,
        fut: impl Future<Output = std::result::Result<tonic::Response<T>, tonic::Status>>,
    ) -> Result<T> {
        ctx.ensure_not_cancelled(operation)?;
        let result = tokio::select! {
            () = ctx.cancelled() => return Err(Error::Cancelled(operation)),
            res = tokio::time::timeout(self.timeout, fut) => res,
        };

        result.map_or_else(
            |_| Err(Error::Timeout(operation)),
            |response| {
                response
                    .map(tonic::Response::into_inner)
                    .map_err(|status| map_grpc_status(&status, operation))
            },
        )
    }
}

impl MilvusClient for MilvusGrpcClient {
    fn create_collection(
        &self,
        ctx: &RequestContext,
        request: CreateCollectionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.create";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().create_collection(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn drop_collection(
        &self,
        ctx: &RequestContext,
        request: DropCollectionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.drop";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().drop_collection(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn has_collection(
        &self,
        ctx: &RequestContext,
        request: HasCollectionRequest,
    ) -> BoxFuture<'_, Result<bool>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.has";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().has_collection(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.value)
        })
    }

    fn describe_collection(
        &self,
        ctx: &RequestContext,
        request: DescribeCollectionRequest,
    ) -> BoxFuture<'_, Result<CollectionInfo>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.describe";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().describe_collection(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            CollectionInfo::from_proto(&response)
        })
    }

    fn rename_collection(
        &self,
        ctx: &RequestContext,
        request: RenameCollectionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.rename";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().rename_collection(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn show_collections(
        &self,
        ctx: &RequestContext,
        request: ShowCollectionsRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.list";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().show_collections(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.collection_names)
        })
    }

    fn load_collection(
        &self,
        ctx: &RequestContext,
        request: LoadCollectionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.load";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().load_collection(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn release_collection(
        &self,
        ctx: &RequestContext,
        request: ReleaseCollectionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.release";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().release_collection(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn get_loading_progress(
        &self,
        ctx: &RequestContext,
        request: GetLoadingProgressRequest,
    ) -> BoxFuture<'_, Result<i64>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.loadingProgress";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().get_loading_progress(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.progress)
        })
    }

    fn get_collection_statistics(
        &self,
        ctx: &RequestContext,
        request: GetCollectionStatisticsRequest,
    ) -> BoxFuture<'_, Result<Statistics>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.statistics";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(
                    &ctx,
                    operation,
                    self.client.clone().get_collection_statistics(wire),
                )
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(Statistics::from_pairs(&response.stats))
        })
    }

    fn create_partition(
        &self,
        ctx: &RequestContext,
        request: CreatePartitionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "partition.create";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().create_partition(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn drop_partition(
        &self,
        ctx: &RequestContext,
        request: DropPartitionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "partition.drop";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().drop_partition(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn has_partition(
        &self,
        ctx: &RequestContext,
        request: HasPartitionRequest,
    ) -> BoxFuture<'_, Result<bool>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "partition.has";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().has_partition(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.value)
        })
    }

    fn show_partitions(
        &self,
        ctx: &RequestContext,
        request: ShowPartitionsRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "partition.list";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().show_partitions(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.partition_names)
        })
    }

    fn load_partitions(
        &self,
        ctx: &RequestContext,
        request: LoadPartitionsRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "partition.load";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().load_partitions(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn release_partitions(
        &self,
        ctx: &RequestContext,
        request: ReleasePartitionsRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "partition.release";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().release_partitions(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn get_partition_statistics(
        &self,
        ctx: &RequestContext,
        request: GetPartitionStatisticsRequest,
    ) -> BoxFuture<'_, Result<Statistics>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "partition.statistics";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(
                    &ctx,
                    operation,
                    self.client.clone().get_partition_statistics(wire),
                )
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(Statistics::from_pairs(&response.stats))
        })
    }

    fn create_alias(
        &self,
        ctx: &RequestContext,
        request: CreateAliasRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "alias.create";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().create_alias(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn drop_alias(
        &self,
        ctx: &RequestContext,
        request: DropAliasRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "alias.drop";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().drop_alias(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn alter_alias(
        &self,
        ctx: &RequestContext,
        request: AlterAliasRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "alias.alter";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().alter_alias(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn create_index(
        &self,
        ctx: &RequestContext,
        request: CreateIndexRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "index.create";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().create_index(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn describe_index(
        &self,
        ctx: &RequestContext,
        request: DescribeIndexRequest,
    ) -> BoxFuture<'_, Result<Vec<IndexInfo>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "index.describe";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().describe_index(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response
                .index_descriptions
                .iter()
                .map(IndexInfo::from_proto)
                .collect())
        })
    }

    fn drop_index(
        &self,
        ctx: &RequestContext,
        request: DropIndexRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "index.drop";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().drop_index(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn get_index_state(
        &self,
        ctx: &RequestContext,
        request: GetIndexStateRequest,
    ) -> BoxFuture<'_, Result<IndexStateInfo>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "index.state";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().get_index_state(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(IndexStateInfo {
                state: crate::response::IndexState::from_proto(response.state),
                fail_reason: response.fail_reason,
            })
        })
    }

    fn get_index_build_progress(
        &self,
        ctx: &RequestContext,
        request: GetIndexBuildProgressRequest,
    ) -> BoxFuture<'_, Result<IndexBuildProgress>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "index.buildProgress";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(
                    &ctx,
                    operation,
                    self.client.clone().get_index_build_progress(wire),
                )
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(IndexBuildProgress {
                indexed_rows: response.indexed_rows,
                total_rows: response.total_rows,
            })
        })
    }

    fn insert(
        &self,
        ctx: &RequestContext,
        request: InsertRequest,
    ) -> BoxFuture<'_, Result<MutationResult>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "data.insert";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name)?;
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().insert(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(MutationResult::from_proto(&response))
        })
    }

    fn delete(
        &self,
        ctx: &RequestContext,
        request: DeleteRequest,
    ) -> BoxFuture<'_, Result<MutationResult>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "data.delete";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().delete(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(MutationResult::from_proto(&response))
        })
    }

    fn flush(
        &self,
        ctx: &RequestContext,
        request: FlushRequest,
    ) -> BoxFuture<'_, Result<FlushResult>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "data.flush";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().flush(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(FlushResult::from_proto(&response))
        })
    }

    fn search(
        &self,
        ctx: &RequestContext,
        request: SearchRequest,
    ) -> BoxFuture<'_, Result<SearchResult>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "data.search";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().search(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            let results = response.results.as_ref().ok_or_else(|| {
                Error::decode("search results", "response carries no results block")
            })?;
            SearchResult::from_proto(results)
        })
    }

    fn query(
        &self,
        ctx: &RequestContext,
        request: QueryRequest,
    ) -> BoxFuture<'_, Result<QueryResult>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "data.query";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().query(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            QueryResult::from_proto(&response)
        })
    }

    fn calc_distance(
        &self,
        ctx: &RequestContext,
        request: CalcDistanceRequest,
    ) -> BoxFuture<'_, Result<DistanceValues>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "data.calcDistance";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().calc_distance(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            DistanceValues::from_proto(&response)
        })
    }

    fn manual_compaction(
        &self,
        ctx: &RequestContext,
        request: ManualCompactionRequest,
    ) -> BoxFuture<'_, Result<i64>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "compaction.manual";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().manual_compaction(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.compaction_id)
        })
    }

    fn get_compaction_state(
        &self,
        ctx: &RequestContext,
        request: GetCompactionStateRequest,
    ) -> BoxFuture<'_, Result<CompactionStateInfo>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "compaction.state";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(
                    &ctx,
                    operation,
                    self.client.clone().get_compaction_state(wire),
                )
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(CompactionStateInfo::from_proto(&response))
        })
    }

    fn create_credential(
        &self,
        ctx: &RequestContext,
        request: CreateCredentialRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "credential.create";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().create_credential(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn update_credential(
        &self,
        ctx: &RequestContext,
        request: UpdateCredentialRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "credential.update";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().update_credential(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn delete_credential(
        &self,
        ctx: &RequestContext,
        request: DeleteCredentialRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "credential.delete";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().delete_credential(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn list_cred_users(
        &self,
        ctx: &RequestContext,
        request: ListCredUsersRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "credential.listUsers";
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().list_cred_users(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.usernames)
        })
    }

    fn create_role(
        &self,
        ctx: &RequestContext,
        request: CreateRoleRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "rbac.createRole";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().create_role(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn drop_role(
        &self,
        ctx: &RequestContext,
        request: DropRoleRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "rbac.dropRole";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().drop_role(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn operate_user_role(
        &self,
        ctx: &RequestContext,
        request: OperateUserRoleRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "rbac.operateUserRole";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().operate_user_role(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn select_role(
        &self,
        ctx: &RequestContext,
        request: SelectRoleRequest,
    ) -> BoxFuture<'_, Result<Vec<RoleInfo>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "rbac.selectRole";
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().select_role(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.results.iter().map(RoleInfo::from_proto).collect())
        })
    }

    fn select_user(
        &self,
        ctx: &RequestContext,
        request: SelectUserRequest,
    ) -> BoxFuture<'_, Result<Vec<UserInfo>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "rbac.selectUser";
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().select_user(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.results.iter().map(UserInfo::from_proto).collect())
        })
    }

    fn operate_privilege(
        &self,
        ctx: &RequestContext,
        request: OperatePrivilegeRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "rbac.operatePrivilege";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().operate_privilege(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn select_grant(
        &self,
        ctx: &RequestContext,
        request: SelectGrantRequest,
    ) -> BoxFuture<'_, Result<Vec<GrantInfo>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "rbac.selectGrant";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().select_grant(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.entities.iter().map(GrantInfo::from_proto).collect())
        })
    }

    fn create_database(
        &self,
        ctx: &RequestContext,
        request: CreateDatabaseRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "database.create";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().create_database(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn drop_database(
        &self,
        ctx: &RequestContext,
        request: DropDatabaseRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "database.drop";
            request.validate()?;
            let wire = request.to_grpc(&self.db_name);
            let status = self
                .call_with_timeout(&ctx, operation, self.client.clone().drop_database(wire))
                .await?;
            check_status(Some(&status), operation)
        })
    }

    fn list_databases(
        &self,
        ctx: &RequestContext,
        request: ListDatabasesRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "database.list";
            let wire = request.to_grpc(&self.db_name);
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().list_databases(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.db_names)
        })
    }

    fn get_version(&self, ctx: &RequestContext) -> BoxFuture<'_, Result<String>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "server.version";
            let wire = proto::GetVersionRequest {};
            let response = self
                .call_with_timeout(&ctx, operation, self.client.clone().get_version(wire))
                .await?;
            check_status(response.status.as_ref(), operation)?;
            Ok(response.version)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_token() -> ConnectConfig {
        let mut config = ConnectConfig::new("localhost");
        config.token = Box::from("root:Milvus");
        config.database = Box::from("film_db");
        config
    }

    #[test]
    fn interceptor_attaches_auth_and_db_metadata() {
        let mut interceptor = match AuthInterceptor::from_config(&config_with_token()) {
            Ok(interceptor) => interceptor,
            Err(error) => {
                assert!(false, "interceptor build failed: {error}");
                return;
            }
        };
        let request = match interceptor.call(tonic::Request::new(())) {
            Ok(request) => request,
            Err(status) => {
                assert!(false, "interceptor rejected the request: {status}");
                return;
            }
        };
        let auth = request
            .metadata()
            .get("authorization")
            .and_then(|v| v.to_str().ok());
        assert_eq!(auth, Some("Bearer root:Milvus"));
        let db = request
            .metadata()
            .get("dbname")
            .and_then(|v| v.to_str().ok());
        assert_eq!(db, Some("film_db"));
    }

    #[test]
    fn interceptor_skips_absent_credentials() {
        let config = ConnectConfig::new("localhost");
        let mut interceptor = match AuthInterceptor::from_config(&config) {
            Ok(interceptor) => interceptor,
            Err(error) => {
                assert!(false, "interceptor build failed: {error}");
                return;
            }
        };
        let request = match interceptor.call(tonic::Request::new(())) {
            Ok(request) => request,
            Err(status) => {
                assert!(false, "interceptor rejected the request: {status}");
                return;
            }
        };
        assert!(request.metadata().get("authorization").is_none());
        assert!(request.metadata().get("dbname").is_none());
    }

    #[test]
    fn newline_in_credentials_is_rejected() {
        let mut config = ConnectConfig::new("localhost");
        config.token = Box::from("bad\ntoken");
        assert!(matches!(
            AuthInterceptor::from_config(&config),
            Err(Error::Validation(_))
        ));
    }
}

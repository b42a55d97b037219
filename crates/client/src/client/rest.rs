//! The REST facade transport.
//!
//! The facade serves proto-shaped JSON under `/api/v1`. Requests render
//! through [`RestRequest`]; responses deserialize into the DTOs in
//! [`crate::response::rest`] and convert into the same typed model the
//! gRPC transport produces. Operations the facade does not expose return
//! [`Error::NotSupported`] without touching the network.

use crate::client::MilvusClient;
use crate::config::ConnectConfig;
use crate::context::RequestContext;
use crate::data::{Field, IdList};
use crate::error::{Error, Result, map_rest_transport};
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
    ReleasePartitionsRequest, RenameCollectionRequest, RestRequest, SearchRequest,
    SelectGrantRequest, SelectRoleRequest, SelectUserRequest, ShowCollectionsRequest,
    ShowPartitionsRequest, UpdateCredentialRequest,
};
use crate::response::rest::{
    BoolResponseDto, CollectionSchemaDto, CompactionStateDto, DescribeCollectionDto,
    DescribeIndexDto, FieldSchemaDto, FlushDto, IndexBuildProgressDto, IndexDescriptionDto,
    IndexStateDto, ListCredUsersDto, LoadingProgressDto, ManualCompactionDto, MutationDto,
    QueryResultsDto, SearchResultDataDto, SearchResultsDto, ShowCollectionsDto,
    ShowPartitionsDto, StatisticsDto, StatusOnlyDto, VersionDto, compaction_state_code,
    consistency_level_code, data_type_code, index_state_code,
};
use crate::response::{
    CollectionInfo, CompactionPlanState, CompactionStateInfo, DistanceValues, FlushResult,
    GrantInfo, IndexBuildProgress, IndexInfo, IndexState, IndexStateInfo, MutationResult,
    QueryResult, RoleInfo, SearchResult, Statistics, UserInfo,
};
use futures_util::future::BoxFuture;
use milvus_client_proto::common::KeyValuePair;
use milvus_client_proto::milvus as proto;
use milvus_client_proto::schema as proto_schema;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use std::future;
use std::time::Duration;

/// REST facade implementation of [`MilvusClient`].
#[derive(Debug, Clone)]
pub struct MilvusRestClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    db_name: Box<str>,
}

impl MilvusRestClient {
    /// Build a client for the facade described by the configuration.
    pub fn new(config: &ConnectConfig) -> Result<Self> {
        config.validate()?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = config.rest_authorization_value() {
            let value = HeaderValue::from_str(&auth).map_err(|_| {
                Error::validation("credentials contain characters not allowed in a header")
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| Error::transport("connect", error.to_string()))?;
        Ok(Self {
            client,
            base_url: config.rest_base_url(),
            timeout: config.timeout(),
            db_name: config.database.clone(),
        })
    }

    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        ctx: &RequestContext,
        operation: &'static str,
        request: RestRequest,
    ) -> Result<T> {
        ctx.ensure_not_cancelled(operation)?;
        let url = format!("{}{}", self.base_url, request.path);
        // The facade reads JSON bodies on every method, GET included.
        let call = self
            .client
            .request(request.method, &url)
            .json(&request.body)
            .send();

        let response = tokio::select! {
            () = ctx.cancelled() => return Err(Error::Cancelled(operation)),
            res = tokio::time::timeout(self.timeout, call) => res,
        };
        let response = match response {
            Ok(result) => result.map_err(|error| map_rest_transport(&error, operation))?,
            Err(_) => return Err(Error::Timeout(operation)),
        };

        let status = response.status();
        let payload = response
            .bytes()
            .await
            .map_err(|error| map_rest_transport(&error, operation))?;
        if !status.is_success() {
            let message = String::from_utf8_lossy(&payload);
            return Err(Error::transport(
                operation,
                format!("HTTP {}: {message}", status.as_u16()),
            ));
        }

        serde_json::from_slice(&payload)
            .map_err(|error| Error::decode(operation, format!("invalid facade payload: {error}")))
    }
}

fn field_schema_from_dto(dto: FieldSchemaDto) -> proto_schema::FieldSchema {
    proto_schema::FieldSchema {
        field_id: 0,
        name: dto.name,
        is_primary_key: dto.is_primary_key,
        description: dto.description,
        data_type: data_type_code(dto.data_type.as_ref()),
        type_params: dto
            .type_params
            .into_iter()
            .map(|pair| KeyValuePair {
                key: pair.key,
                value: pair.value,
            })
            .collect(),
        index_params: Vec::new(),
        auto_id: dto.auto_id,
        is_dynamic: false,
        is_partition_key: dto.is_partition_key,
    }
}

fn collection_schema_from_dto(dto: CollectionSchemaDto) -> proto_schema::CollectionSchema {
    proto_schema::CollectionSchema {
        name: dto.name,
        description: dto.description,
        auto_id: dto.auto_id,
        fields: dto.fields.into_iter().map(field_schema_from_dto).collect(),
        enable_dynamic_field: dto.enable_dynamic_field,
    }
}

fn collection_info_from_dto(dto: DescribeCollectionDto) -> Result<CollectionInfo> {
    let response = proto::DescribeCollectionResponse {
        status: None,
        schema: dto.schema.map(collection_schema_from_dto),
        collection_id: dto.collection_id,
        created_timestamp: dto.created_timestamp,
        created_utc_timestamp: dto.created_utc_timestamp,
        shards_num: dto.shards_num,
        aliases: dto.aliases,
        consistency_level: consistency_level_code(dto.consistency_level.as_ref()),
        collection_name: dto.collection_name,
        properties: dto
            .properties
            .into_iter()
            .map(|pair| KeyValuePair {
                key: pair.key,
                value: pair.value,
            })
            .collect(),
        db_name: dto.db_name,
        num_partitions: dto.num_partitions,
    };
    CollectionInfo::from_proto(&response)
}

fn statistics_from_dto(dto: StatisticsDto) -> Statistics {
    Statistics {
        entries: dto
            .stats
            .into_iter()
            .map(|pair| (pair.key, pair.value))
            .collect(),
    }
}

fn index_info_from_dto(dto: IndexDescriptionDto) -> IndexInfo {
    IndexInfo {
        index_name: dto.index_name.into_boxed_str(),
        index_id: dto.index_id,
        field_name: dto.field_name.into_boxed_str(),
        params: dto
            .params
            .into_iter()
            .map(|pair| (pair.key, pair.value))
            .collect(),
        indexed_rows: dto.indexed_rows,
        total_rows: dto.total_rows,
        state: IndexState::from_proto(index_state_code(dto.state.as_ref())),
        fail_reason: dto.index_state_fail_reason,
    }
}

fn mutation_from_dto(dto: MutationDto) -> MutationResult {
    MutationResult {
        ids: dto
            .ids
            .map_or_else(|| IdList::Long(Vec::new()), |ids| ids.into_id_list()),
        insert_count: dto.insert_cnt,
        delete_count: dto.delete_cnt,
        upsert_count: dto.upsert_cnt,
        timestamp: dto.timestamp,
    }
}

fn search_data_from_dto(dto: SearchResultDataDto) -> Result<proto_schema::SearchResultData> {
    let fields_data = dto
        .fields_data
        .iter()
        .map(|value| Field::from_rest_json(value).map(|field| field.to_proto()))
        .collect::<Result<Vec<_>>>()?;
    Ok(proto_schema::SearchResultData {
        num_queries: dto.num_queries,
        top_k: dto.top_k,
        fields_data,
        scores: dto.scores,
        ids: dto.ids.map(|ids| ids.into_id_list().to_proto()),
        topks: dto.topks,
        output_fields: dto.output_fields,
    })
}

impl MilvusClient for MilvusRestClient {
    fn create_collection(
        &self,
        ctx: &RequestContext,
        request: CreateCollectionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "collection.create";
            request.validate()?;
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: BoolResponseDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto.value)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: DescribeCollectionDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            collection_info_from_dto(dto)
        })
    }

    fn rename_collection(
        &self,
        _ctx: &RequestContext,
        _request: RenameCollectionRequest,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "collection.rename",
            "REST",
        ))))
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: ShowCollectionsDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto.collection_names)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: LoadingProgressDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto.progress)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatisticsDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(statistics_from_dto(dto))
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: BoolResponseDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto.value)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: ShowPartitionsDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto.partition_names)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatisticsDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(statistics_from_dto(dto))
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: DescribeIndexDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto
                .index_descriptions
                .into_iter()
                .map(index_info_from_dto)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: IndexStateDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(IndexStateInfo {
                state: IndexState::from_proto(index_state_code(dto.state.as_ref())),
                fail_reason: dto.fail_reason,
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: IndexBuildProgressDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(IndexBuildProgress {
                indexed_rows: dto.indexed_rows,
                total_rows: dto.total_rows,
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: MutationDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(mutation_from_dto(dto))
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: MutationDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(mutation_from_dto(dto))
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: FlushDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(FlushResult {
                collection_segment_ids: dto
                    .coll_seg_ids
                    .into_iter()
                    .map(|(name, segments)| (name, segments.data))
                    .collect(),
            })
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: SearchResultsDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            let results = dto.results.ok_or_else(|| {
                Error::decode("search results", "response carries no results block")
            })?;
            let data = search_data_from_dto(results)?;
            SearchResult::from_proto(&data)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: QueryResultsDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            let fields = dto
                .fields_data
                .iter()
                .map(Field::from_rest_json)
                .collect::<Result<Vec<_>>>()?;
            Ok(QueryResult {
                output_fields: dto.output_fields,
                fields,
            })
        })
    }

    fn calc_distance(
        &self,
        _ctx: &RequestContext,
        _request: CalcDistanceRequest,
    ) -> BoxFuture<'_, Result<DistanceValues>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "data.calcDistance",
            "REST",
        ))))
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: ManualCompactionDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto.compaction_id)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: CompactionStateDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(CompactionStateInfo {
                state: CompactionPlanState::from_proto(compaction_state_code(dto.state.as_ref())),
                executing_plans: dto.executing_plan_no,
                timed_out_plans: dto.timeout_plan_no,
                completed_plans: dto.completed_plan_no,
            })
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: StatusOnlyDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)
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
            let rest = request.to_rest(&self.db_name)?;
            let dto: ListCredUsersDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto.usernames)
        })
    }

    fn create_role(
        &self,
        _ctx: &RequestContext,
        _request: CreateRoleRequest,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "rbac.createRole",
            "REST",
        ))))
    }

    fn drop_role(
        &self,
        _ctx: &RequestContext,
        _request: DropRoleRequest,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "rbac.dropRole",
            "REST",
        ))))
    }

    fn operate_user_role(
        &self,
        _ctx: &RequestContext,
        _request: OperateUserRoleRequest,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "rbac.operateUserRole",
            "REST",
        ))))
    }

    fn select_role(
        &self,
        _ctx: &RequestContext,
        _request: SelectRoleRequest,
    ) -> BoxFuture<'_, Result<Vec<RoleInfo>>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "rbac.selectRole",
            "REST",
        ))))
    }

    fn select_user(
        &self,
        _ctx: &RequestContext,
        _request: SelectUserRequest,
    ) -> BoxFuture<'_, Result<Vec<UserInfo>>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "rbac.selectUser",
            "REST",
        ))))
    }

    fn operate_privilege(
        &self,
        _ctx: &RequestContext,
        _request: OperatePrivilegeRequest,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "rbac.operatePrivilege",
            "REST",
        ))))
    }

    fn select_grant(
        &self,
        _ctx: &RequestContext,
        _request: SelectGrantRequest,
    ) -> BoxFuture<'_, Result<Vec<GrantInfo>>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "rbac.selectGrant",
            "REST",
        ))))
    }

    fn create_database(
        &self,
        _ctx: &RequestContext,
        _request: CreateDatabaseRequest,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "database.create",
            "REST",
        ))))
    }

    fn drop_database(
        &self,
        _ctx: &RequestContext,
        _request: DropDatabaseRequest,
    ) -> BoxFuture<'_, Result<()>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "database.drop",
            "REST",
        ))))
    }

    fn list_databases(
        &self,
        _ctx: &RequestContext,
        _request: ListDatabasesRequest,
    ) -> BoxFuture<'_, Result<Vec<String>>> {
        Box::pin(future::ready(Err(Error::not_supported(
            "database.list",
            "REST",
        ))))
    }

    fn get_version(&self, ctx: &RequestContext) -> BoxFuture<'_, Result<String>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            let operation = "server.version";
            let rest = RestRequest::new(Method::GET, "/api/v1/version", json!({}));
            let dto: VersionDto = self.make_request(&ctx, operation, rest).await?;
            dto.status.check(operation)?;
            Ok(dto.version)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::rest::{IntOrName, RestKeyValue, RestStatus};

    #[test]
    fn describe_dto_converts_to_collection_info() {
        let dto = DescribeCollectionDto {
            status: RestStatus::default(),
            schema: Some(CollectionSchemaDto {
                name: "films".to_owned(),
                description: String::new(),
                auto_id: false,
                enable_dynamic_field: false,
                fields: vec![FieldSchemaDto {
                    name: "film_id".to_owned(),
                    description: String::new(),
                    is_primary_key: true,
                    auto_id: false,
                    is_partition_key: false,
                    data_type: Some(IntOrName::Name("Int64".to_owned())),
                    type_params: Vec::new(),
                }],
            }),
            collection_id: 7,
            created_timestamp: 0,
            created_utc_timestamp: 0,
            shards_num: 2,
            aliases: vec!["films_alias".to_owned()],
            consistency_level: Some(IntOrName::Int(0)),
            collection_name: "films".to_owned(),
            properties: vec![RestKeyValue {
                key: "collection.ttl.seconds".to_owned(),
                value: "0".to_owned(),
            }],
            db_name: "film_db".to_owned(),
            num_partitions: 0,
        };
        match collection_info_from_dto(dto) {
            Ok(info) => {
                assert_eq!(info.name.as_ref(), "films");
                assert_eq!(info.id, 7);
                assert_eq!(info.schema.fields.len(), 1);
                assert_eq!(
                    info.consistency_level,
                    crate::schema::ConsistencyLevel::Strong
                );
            }
            Err(error) => assert!(false, "conversion failed: {error}"),
        }
    }

    #[test]
    fn mutation_dto_without_ids_reads_as_empty() {
        let dto = MutationDto {
            status: RestStatus::default(),
            ids: None,
            insert_cnt: 0,
            delete_cnt: 3,
            upsert_cnt: 0,
            timestamp: 11,
        };
        let result = mutation_from_dto(dto);
        assert_eq!(result.ids, IdList::Long(Vec::new()));
        assert_eq!(result.delete_count, 3);
    }

    #[test]
    fn index_description_dto_converts_state_names() {
        let dto = IndexDescriptionDto {
            index_name: "films_vec_idx".to_owned(),
            index_id: 3,
            params: vec![RestKeyValue {
                key: "index_type".to_owned(),
                value: "IVF_FLAT".to_owned(),
            }],
            field_name: "embedding".to_owned(),
            indexed_rows: 10,
            total_rows: 10,
            state: Some(IntOrName::Name("Finished".to_owned())),
            index_state_fail_reason: String::new(),
        };
        let info = index_info_from_dto(dto);
        assert_eq!(info.state, IndexState::Finished);
        assert_eq!(info.params, vec![("index_type".to_owned(), "IVF_FLAT".to_owned())]);
    }
}

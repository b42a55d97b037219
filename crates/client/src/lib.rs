//! # milvus-client
//!
//! Client SDK for the Milvus vector database with two interchangeable
//! transports: native gRPC and the `/api/v1` REST facade.
//!
//! One request model feeds both wires. A request builder validates its
//! parameters before any I/O, then renders into a proto message or a
//! REST call; responses parse into the same typed model regardless of
//! transport. Everything dynamic flows through [`MilvusClient`], so code
//! written against the trait runs unchanged over either transport.
//!
//! ```no_run
//! use milvus_client::request::{CreateCollectionRequest, SearchRequest, QueryVectors};
//! use milvus_client::schema::{CollectionSchema, DataType, FieldSchema};
//! use milvus_client::{ConnectConfig, MilvusClient, MilvusGrpcClient, RequestContext};
//!
//! # async fn demo() -> milvus_client::Result<()> {
//! let config = ConnectConfig::new("localhost");
//! let client = MilvusGrpcClient::connect(&config).await?;
//! let ctx = RequestContext::new_request();
//!
//! let schema = CollectionSchema::new("films")
//!     .field(FieldSchema::new("film_id", DataType::Int64).primary_key())
//!     .field(FieldSchema::new("embedding", DataType::FloatVector).dim(128));
//! client
//!     .create_collection(&ctx, CreateCollectionRequest::new(schema))
//!     .await?;
//!
//! let vectors = QueryVectors::Float(vec![vec![0.0; 128]]);
//! let request = SearchRequest::new("films", "embedding", vectors, 10);
//! let hits = client.search(&ctx, request).await?;
//! # let _ = hits;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod monitor;
pub mod poll;
pub mod request;
pub mod response;
pub mod schema;

pub use client::{MilvusClient, MilvusGrpcClient, MilvusRestClient};
pub use config::ConnectConfig;
pub use context::{CancellationToken, CorrelationId, RequestContext};
pub use data::{Field, FieldValues, IdList};
pub use error::{Error, Result};
pub use monitor::{ServerMonitor, ServerStatus};
pub use poll::{wait_for_collection_loaded, wait_for_index_built};
pub use response::{CollectionInfo, MutationResult, QueryResult, SearchResult};
pub use schema::{CollectionSchema, ConsistencyLevel, DataType, FieldSchema};

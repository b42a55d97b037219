//! Bounded polling helpers for server-side background work.
//!
//! Index builds and collection loads complete asynchronously on the
//! server. These helpers poll on a fixed interval until the work
//! finishes, the caller's deadline passes, or the context is cancelled.

use crate::client::MilvusClient;
use crate::context::RequestContext;
use crate::error::{Error, Result};
use crate::request::{GetIndexStateRequest, GetLoadingProgressRequest};
use crate::response::IndexState;
use milvus_client_proto::common::ErrorCode;
use std::time::{Duration, Instant};

/// Poll until the index on `field_name` finishes building.
///
/// A failed build surfaces the server's failure reason as a server
/// error; exceeding `deadline` returns [`Error::Timeout`].
pub async fn wait_for_index_built<C>(
    client: &C,
    ctx: &RequestContext,
    collection_name: &str,
    field_name: &str,
    interval: Duration,
    deadline: Duration,
) -> Result<()>
where
    C: MilvusClient + ?Sized,
{
    let operation = "index.waitBuilt";
    let start = Instant::now();
    loop {
        ctx.ensure_not_cancelled(operation)?;
        let request = GetIndexStateRequest::new(collection_name, field_name);
        let info = client.get_index_state(ctx, request).await?;
        match info.state {
            IndexState::Finished => return Ok(()),
            IndexState::Failed => {
                return Err(Error::Server {
                    operation,
                    code: ErrorCode::BuildIndexError as i32,
                    reason: info.fail_reason,
                });
            }
            IndexState::None | IndexState::InProgress => {}
        }
        if start.elapsed() >= deadline {
            return Err(Error::Timeout(operation));
        }
        tokio::time::sleep(interval).await;
    }
}

/// Poll until a collection's load progress reaches 100 percent.
pub async fn wait_for_collection_loaded<C>(
    client: &C,
    ctx: &RequestContext,
    collection_name: &str,
    interval: Duration,
    deadline: Duration,
) -> Result<()>
where
    C: MilvusClient + ?Sized,
{
    let operation = "collection.waitLoaded";
    let start = Instant::now();
    loop {
        ctx.ensure_not_cancelled(operation)?;
        let request = GetLoadingProgressRequest::new(collection_name);
        let progress = client.get_loading_progress(ctx, request).await?;
        if progress >= 100 {
            return Ok(());
        }
        if start.elapsed() >= deadline {
            return Err(Error::Timeout(operation));
        }
        tokio::time::sleep(interval).await;
    }
}

//! # milvus-client-proto
//!
//! Vendored protobuf message types and the gRPC service client for the
//! Milvus wire contract, kept in `tonic-build` output style so the module
//! tree mirrors the server's `common` / `schema` / `milvus` proto packages.
//!
//! The messages carry only the fields this SDK reads or writes; unknown
//! fields on the wire are skipped by prost during decode.

/// Types from `common.proto`: status, message base, shared enums.
pub mod common;
/// Types from `schema.proto`: collection/field schema and field data.
pub mod schema;
/// Types from `milvus.proto`: one request/response pair per RPC plus the
/// service client.
pub mod milvus;

/// Returns the proto crate version.
#[must_use]
pub const fn proto_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

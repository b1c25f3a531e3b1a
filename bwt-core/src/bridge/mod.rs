// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of the bwt library. It composes the pure
// `transform` engine with the run-length `kernels`, which never know about each
// other.
//
// Data Flow (Compression):
//
//   1. [Stateless API (compress)]            -> Receives `&str` + `&BwtConfig`
//         |
//         `-> a. `BurrowsWheeler::transform` with the configured sentinel
//         |
//         `-> b. (optional) `BurrowsWheeler::inverse` to verify the round trip
//         |
//         `-> c. `kernels::dispatch_encode` with the configured scheme
//
//   2. Returns `Result<Vec<u8>, BwtError>`
//
// Data Flow (Decompression):
//
//   1. [Stateless API (decompress)]          -> Receives `&[u8]` + `&BwtConfig`
//         |
//         `-> a. `kernels::dispatch_decode` -> transform string
//         |
//         `-> b. `BurrowsWheeler::inverse` -> original string
//
// ====================================================================================
pub(crate) mod format;
pub mod stateless_api;

// --- Format Structs ---
pub use format::CompressionStats;

// --- Stateless API (for FFI and testing) ---
pub use stateless_api::{analyze, compress, decompress, inverse, inverse_with_sentinel, transform};

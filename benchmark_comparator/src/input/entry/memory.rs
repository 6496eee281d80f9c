//!
//! The benchmark memory diagnoser data.
//!

///
/// The benchmark memory diagnoser data.
///
#[derive(Debug, serde::Deserialize)]
pub struct Memory {
    /// The bytes allocated per operation.
    #[serde(rename = "BytesAllocatedPerOperation")]
    pub bytes_allocated_per_operation: Option<u64>,
}

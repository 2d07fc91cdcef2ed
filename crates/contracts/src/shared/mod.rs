pub mod lookup;
pub mod serde_utils;

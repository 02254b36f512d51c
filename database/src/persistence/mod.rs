pub mod snapshot;
pub mod storage;

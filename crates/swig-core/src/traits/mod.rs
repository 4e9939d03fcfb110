pub mod storage;

pub use storage::GameStorage;

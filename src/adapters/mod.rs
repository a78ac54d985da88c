// Adapters layer: concrete implementations of the domain ports (storage, review, terminal output).

pub mod review;
pub mod storage;

#[cfg(feature = "cli")]
pub mod preview;

pub mod api;
pub mod claims;
pub mod context;
pub mod guard;
pub mod storage;

pub mod aggregate;
pub mod attendance;
pub mod buckets;

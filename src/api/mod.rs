// Atomic API modules
pub mod client;
pub mod images;
pub mod instances;
pub mod load_balancers;
pub mod networks;
pub mod regions;

// Re-export the typed client handles
pub use client::{ComputeClient, LoadBalancerClient};

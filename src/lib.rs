pub mod allocation;
pub mod analysis;
pub mod assets;
pub mod growth;
pub mod portfolio;
pub mod rebalance;
pub mod report;
pub mod server;

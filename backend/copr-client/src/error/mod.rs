pub mod config;
pub mod rpc;

pub use config::ConfigError;
pub use rpc::RpcError;

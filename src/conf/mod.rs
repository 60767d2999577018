mod clinic;
mod config;
mod purchase;
mod server;

pub use clinic::ClinicConfig;
pub use config::Config;
pub use purchase::PurchaseConfig;
pub use server::ServerConfig;

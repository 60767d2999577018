mod args;
mod error;
mod logger;

pub use args::CliArgs;
pub use error::ClinicError;
pub use logger::setup_logging;

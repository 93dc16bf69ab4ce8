pub mod client;
pub mod limiter;
pub mod utils;

pub mod config;
pub mod fingerprint;
pub mod instrument;
pub mod output;
pub mod results;
pub mod scoring;
pub mod session;

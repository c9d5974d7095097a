pub mod ad;
pub mod config;
pub mod scoring;

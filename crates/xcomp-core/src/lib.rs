pub mod config;
pub mod logging;

pub mod checker;
pub mod compliance;
pub mod downloader;
pub mod layout;
pub mod prepare;
pub mod storage;

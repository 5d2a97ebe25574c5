pub mod adoption;
pub mod backup;
pub mod calendar;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod donation;
pub mod due;
pub mod event;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod rescue;
pub mod seed;

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod handles;
pub mod inspector;
pub mod runner;
pub mod selector;
pub mod viz;

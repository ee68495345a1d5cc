pub mod app;
pub mod config;
pub mod data;
pub mod errors;
pub mod model;
pub mod msg;
pub mod view;

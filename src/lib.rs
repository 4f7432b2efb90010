pub mod app;
pub mod config;
pub mod domain;
pub mod repository;
pub mod services;

pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod recommend;
pub mod similarity;
pub mod tmdb;
pub mod ui;

#![allow(non_snake_case)]

use std::fmt::Display;

use tracing::log;

pub mod args;
pub mod analyzer;
pub mod config_handler;
pub mod console;
pub mod db;
pub mod models;
pub mod models_api;
pub mod models_external;
pub mod report_service;
pub mod rest_client;
pub mod stats_service;
pub mod thumbnail_service;
pub mod universe_service;
pub mod vote_service;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::warn!("{}: {:#}", msg, e);
                None
            }
        }
    }
}

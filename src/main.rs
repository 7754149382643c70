use crate::cli::run;

pub mod cli;
mod config;
pub mod domain;
pub mod graphql;
pub mod http;
pub mod service;
pub mod storage;

fn main() {
    run();
}

//! Infrastructure layer - catalog loading and process services

pub mod catalog;
pub mod logging;

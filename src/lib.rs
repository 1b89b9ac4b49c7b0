//! Desk calculator engine and its terminal front-end pieces.

pub mod calculator;
pub mod config;
pub mod items;
pub mod ui;

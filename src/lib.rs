//! Cafe Reports - a read-only business reporting dashboard
//!
//! This library provides the core functionality for the reporting dashboard.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod web;

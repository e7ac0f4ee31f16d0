//! HTTP Handlers

pub mod assets;

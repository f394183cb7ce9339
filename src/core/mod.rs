// src/core/mod.rs

pub mod alias_display;
pub mod alias_resolver;
pub mod dispatcher;
pub mod reassembler;
pub mod usage_log;

// src/system/mod.rs

pub mod alias_source;
pub mod executor;
pub mod interrupt;
pub mod io;

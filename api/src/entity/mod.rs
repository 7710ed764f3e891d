//! `SeaORM` Entity definitions for the console's own tables

pub mod audit_logs;
pub mod notes;

//! Contacts directory: clients with names and emails, each owning any number of
//! phone numbers, stored in PostgreSQL.

pub mod cli;
pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod models;

pub use db::{ClientChanges, ClientFilter, Database};
pub use error::{Result, StoreError};

//! Resaka - a chat client for the Malagasy assistant backend.
//!
//! Architecture:
//! - `api` wraps the backend's `/api/chat` and `/api/health` endpoints and
//!   answers locally when the backend cannot
//! - `view` owns the message log, the session id and the send cycle
//! - `cli` feeds stdin into the view and prints what it appends

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod render;
pub mod view;

#[cfg(test)]
mod test_support;

//! Ledgerly - mobile expense ledger frontend
//!
//! A client-side rendered web application for tracking personal income and
//! expenses, built with Leptos and WebAssembly. The REST backend lives in a
//! separate service; this crate is the session handling, route guarding and
//! presentation layer on top of it.

#![recursion_limit = "4096"]

pub mod api;
pub mod app;
pub mod core;
pub mod ui;
pub mod utils;

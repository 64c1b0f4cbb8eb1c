//! Emberline Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing the router to be tested without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod feed;
pub mod routes;
pub mod state;
pub mod views;

//! # Cremaet Bot
//!
//! A Telegram bot that keeps track of a rotating group expense: the Friday
//! cremaet round. It records who is in the rotation, logs one payment event
//! per week, and answers "who pays next?" with a least-recently-paid queue.
//!
//! ## Features
//! - Least-recently-paid turn rotation over the full event history
//! - Weekly cadence anchored to Fridays, with holiday placeholder weeks
//! - Admin-gated commands for logging turns and managing participants
//! - Friday morning announcement of whose turn it is
//! - Persistent storage with SQLite

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Turn rotation: who pays next
pub mod rotation;
/// Background services: the Friday announcer and the health endpoint
pub mod services;
/// Utility functions for dates, validation, and formatting
pub mod utils;

//! Tradewind server library.
//!
//! Exposes four commerce tools to agent callers behind a uniform JSON
//! result envelope:
//!
//! - `queryShoppingCart` - cart entries joined with live product state
//! - `queryOrderStatus` - order header plus snapshot item lines
//! - `queryShippingInfo` - shipping record plus chronological track events
//! - `sendEmailNotification` - the one side-effecting tool; every send
//!   attempt leaves exactly one audit row
//!
//! All state lives in `PostgreSQL`; the mail transport is SMTP. Tool
//! invocations are stateless and independent - no locks, no background
//! tasks, no shared in-process mutable state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod tools;

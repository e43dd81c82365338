//! Todo Lists - Session-backed, server-rendered to-do list manager
//!
//! Each browser session owns a set of named lists of todo items. Pages are
//! rendered on the server and every change is a form post followed by a
//! redirect.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

//! Opening hours parsing and evaluation.
//!
//! Turns an OpenStreetMap-style `opening_hours` value such as
//! `"mo-fr 09:00-17:00; sa 10:00-14:00"` into a weekly schedule, and
//! answers whether a place is open at a given moment and when that next
//! changes.

pub mod cache;
pub mod config;
pub mod domain;
pub mod format;
pub mod parser;
pub mod status;
pub mod web;

//! # Streamy Player
//!
//! Headless core of the Streamy ten-foot home screen. State machines here
//! produce sampled view models; a renderer draws them and posts input back
//! as [`domains::home::Message`]s.

pub mod app;
pub mod domains;
pub mod infra;
pub mod input;

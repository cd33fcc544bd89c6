//! ktk - a personal convenience toolkit
//!
//! Dominant image colors (via the `dominant-color` crate), text banners,
//! hashing, unified diffs, fallback-encoding file reads, JSON over HTTP and
//! XML trace logs.
//! This library exposes modules for the `ktk` binary and integration testing.

pub mod commands;
pub mod error;
pub mod models;
pub mod services;

pub use dominant_color;

//! Shared test utilities for the boxels workspace.
//!
//! This crate provides standardised project fixtures so every crate's test
//! suite sets up configuration files the same way. It is a dev-dependency
//! only, never published.
//!
//! # Modules
//!
//! - [`project`] - [`TestProject`](project::TestProject) builder for a
//!   temporary project root
//! - [`templates`] - configuration documents mirroring the project templates

pub mod project;
pub mod templates;

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: REST API endpoint
//! - **Toasts**: queue bound and removal timing

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Base URL of the course management REST API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Maximum number of toasts retained at once; a new toast evicts the oldest.
pub const DEFAULT_TOAST_LIMIT: usize = 1;

/// Delay between dismissing a toast and purging it from the queue.
///
/// Deliberately large: a dismissed toast stays observable in the queue
/// (with `open = false`) long after it left the screen.
pub const DEFAULT_TOAST_REMOVE_DELAY_SECS: u64 = 1000;

// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Toasts appear temporarily to inform users
//! about action outcomes (save success, backend errors, ...) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`toast`] - Core `Toast` struct with content and patch payloads
//! - [`manager`] - `ToastManager` for queuing and lifecycle management
//!
//! # Usage
//!
//! ```
//! use lamusica_admin::notifications::{ToastContent, ToastManager, Variant};
//!
//! // One manager per process, injected wherever feedback is raised.
//! let manager = ToastManager::new();
//!
//! // Rendering layers subscribe and redraw from the delivered queue.
//! let _subscription = manager.subscribe(|toasts| {
//!     for toast in toasts.iter().filter(|t| t.is_open()) {
//!         let _ = toast.title();
//!     }
//! });
//!
//! // Raise a toast; the handle can update or dismiss it later.
//! let handle = manager.notify(
//!     ToastContent::new()
//!         .with_title("Erro")
//!         .with_description("Não foi possível carregar as pessoas.")
//!         .with_variant(Variant::Destructive),
//! );
//! handle.dismiss();
//! ```
//!
//! # Design Considerations
//!
//! - Queue bound: 1 by default, so each toast replaces the previous one
//! - Dismissal hides a toast (`open = false`) without purging it; purge
//!   happens on [`ToastManager::tick`] after the configured delay
//! - Observers receive the full queue on every change, newest first

pub mod manager;
pub mod toast;

pub use manager::{Subscription, ToastHandle, ToastManager};
pub use toast::{Toast, ToastAction, ToastContent, ToastId, ToastPatch, Variant};

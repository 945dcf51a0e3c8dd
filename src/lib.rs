// SPDX-License-Identifier: MPL-2.0
//! Client core for the "Espaço La Música" course management system.
//!
//! The crate bundles what every front end of the system needs: a toast
//! notification queue with a subscription model for rendering layers, typed
//! entities matching the backend's JSON, an async REST client for the
//! `pessoas`/`cursos`/`matriculas` resources, feedback helpers that turn
//! operation outcomes into toasts, and configuration handling.

#![doc(html_root_url = "https://docs.rs/lamusica_admin/0.1.0")]

pub mod api;
pub mod config;
pub mod error;
pub mod feedback;
pub mod notifications;

// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct together with the payload types
//! used to create (`ToastContent`) and partially update (`ToastPatch`) it.

use std::time::Instant;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual category of a toast. Opaque to queue logic; only rendering
/// layers interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Neutral feedback (saved, loaded, ...).
    #[default]
    Default,
    /// Failure feedback (red accent in every known renderer).
    Destructive,
}

/// Interactive element attached to a toast, carried through untouched.
///
/// The queue never inspects it; the rendering layer decides what pressing
/// the action means by matching on `action_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    pub label: String,
    pub action_id: String,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action_id: action_id.into(),
        }
    }
}

/// Display content for a new toast. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct ToastContent {
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<ToastAction>,
}

impl ToastContent {
    /// Creates empty content with the default variant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the visual variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Attaches an interactive action.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Partial update for an existing toast.
///
/// Only fields that are set are merged into the target; everything else is
/// preserved. Matching by id happens in the manager.
#[derive(Debug, Clone, Default)]
pub struct ToastPatch {
    title: Option<String>,
    description: Option<String>,
    variant: Option<Variant>,
    action: Option<ToastAction>,
}

impl ToastPatch {
    /// Creates an empty patch (merging it is a no-op).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the visual variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Replaces the attached action.
    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// A toast held in the queue.
///
/// `open` distinguishes "visible" from "dismissed but not yet purged"; a
/// dismissed toast stays in the queue until its removal deadline elapses.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<ToastAction>,
    open: bool,
    purge_at: Option<Instant>,
}

impl Toast {
    /// Creates an open toast with a fresh id from the given content.
    pub(crate) fn new(content: ToastContent) -> Self {
        Self {
            id: ToastId::new(),
            title: content.title,
            description: content.description,
            variant: content.variant,
            action: content.action,
            open: true,
            purge_at: None,
        }
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the visual variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the attached action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Returns whether the toast is still visible (not dismissed).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Merges a patch into this toast, field by field.
    pub(crate) fn apply(&mut self, patch: ToastPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
        if let Some(action) = patch.action {
            self.action = Some(action);
        }
    }

    /// Marks the toast as dismissed and arms its removal deadline.
    pub(crate) fn close(&mut self, purge_at: Instant) {
        self.open = false;
        self.purge_at = Some(purge_at);
    }

    /// Returns whether the removal deadline has elapsed.
    pub(crate) fn purge_due(&self, now: Instant) -> bool {
        self.purge_at.is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn toast_ids_are_unique() {
        let t1 = Toast::new(ToastContent::new());
        let t2 = Toast::new(ToastContent::new());
        assert_ne!(t1.id(), t2.id());
    }

    #[test]
    fn new_toast_is_open_with_no_deadline() {
        let toast = Toast::new(ToastContent::new().with_title("Sucesso"));
        assert!(toast.is_open());
        assert!(!toast.purge_due(Instant::now()));
    }

    #[test]
    fn content_builder_sets_all_fields() {
        let toast = Toast::new(
            ToastContent::new()
                .with_title("Erro")
                .with_description("Não foi possível carregar as pessoas.")
                .with_variant(Variant::Destructive)
                .with_action(ToastAction::new("Tentar novamente", "retry")),
        );
        assert_eq!(toast.title(), Some("Erro"));
        assert_eq!(
            toast.description(),
            Some("Não foi possível carregar as pessoas.")
        );
        assert_eq!(toast.variant(), Variant::Destructive);
        assert_eq!(toast.action().map(|a| a.action_id.as_str()), Some("retry"));
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut toast = Toast::new(
            ToastContent::new()
                .with_title("Erro")
                .with_description("original"),
        );
        toast.apply(ToastPatch::new().description("atualizada"));
        assert_eq!(toast.title(), Some("Erro"));
        assert_eq!(toast.description(), Some("atualizada"));
        assert_eq!(toast.variant(), Variant::Default);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut toast = Toast::new(ToastContent::new().with_title("Sucesso"));
        toast.apply(ToastPatch::new());
        assert_eq!(toast.title(), Some("Sucesso"));
        assert!(toast.description().is_none());
    }

    #[test]
    fn close_flips_open_and_arms_deadline() {
        let mut toast = Toast::new(ToastContent::new());
        let deadline = Instant::now() + Duration::from_millis(10);
        toast.close(deadline);
        assert!(!toast.is_open());
        assert!(!toast.purge_due(Instant::now()));
        assert!(toast.purge_due(deadline + Duration::from_millis(1)));
    }
}

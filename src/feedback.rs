// SPDX-License-Identifier: MPL-2.0
//! Call-site glue between backend operations and the toast queue.
//!
//! Every user action in the admin UI ends the same way: a "Sucesso" toast
//! when the backend accepted it, an "Erro" toast (destructive variant) plus
//! a stderr diagnostic when it did not. These helpers keep that wording and
//! shape in one place.

use crate::error::{Error, Result};
use crate::notifications::{ToastContent, ToastHandle, ToastManager, Variant};

const SUCCESS_TITLE: &str = "Sucesso";
const ERROR_TITLE: &str = "Erro";

/// Raises a success toast with the given description.
pub fn report_success(manager: &ToastManager, description: impl Into<String>) -> ToastHandle {
    manager.notify(
        ToastContent::new()
            .with_title(SUCCESS_TITLE)
            .with_description(description),
    )
}

/// Logs the error to stderr and raises a destructive toast.
///
/// `description` is the user-facing text ("Não foi possível ..."); the
/// underlying error only goes to the diagnostic line.
pub fn report_error(
    manager: &ToastManager,
    description: impl Into<String>,
    error: &Error,
) -> ToastHandle {
    let description = description.into();
    eprintln!("{description}: {error}");
    manager.notify(
        ToastContent::new()
            .with_title(ERROR_TITLE)
            .with_description(description)
            .with_variant(Variant::Destructive),
    )
}

/// Surfaces an operation outcome as a toast and yields the value, if any.
///
/// Errors are consumed here; callers that need the value use the returned
/// `Option` and move on either way.
pub fn report<T>(
    manager: &ToastManager,
    result: Result<T>,
    success_description: &str,
    error_description: &str,
) -> Option<T> {
    match result {
        Ok(value) => {
            report_success(manager, success_description);
            Some(value)
        }
        Err(error) => {
            report_error(manager, error_description, &error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::ToastManager;

    #[test]
    fn report_success_uses_default_variant_and_title() {
        let manager = ToastManager::new();
        report_success(&manager, "Pessoa cadastrada com sucesso.");

        let toasts = manager.toasts();
        assert_eq!(toasts[0].title(), Some("Sucesso"));
        assert_eq!(toasts[0].variant(), Variant::Default);
        assert_eq!(
            toasts[0].description(),
            Some("Pessoa cadastrada com sucesso.")
        );
    }

    #[test]
    fn report_error_uses_destructive_variant() {
        let manager = ToastManager::new();
        let error = Error::Api { status: 500 };
        report_error(&manager, "Não foi possível carregar as pessoas.", &error);

        let toasts = manager.toasts();
        assert_eq!(toasts[0].title(), Some("Erro"));
        assert_eq!(toasts[0].variant(), Variant::Destructive);
    }

    #[test]
    fn report_yields_value_on_success() {
        let manager = ToastManager::new();
        let outcome = report(&manager, Ok(42), "ok", "falhou");
        assert_eq!(outcome, Some(42));
        assert_eq!(manager.toasts()[0].title(), Some("Sucesso"));
    }

    #[test]
    fn report_consumes_error_and_raises_toast() {
        let manager = ToastManager::new();
        let outcome: Option<i32> = report(
            &manager,
            Err(Error::Http("connection refused".to_string())),
            "ok",
            "Não foi possível salvar o curso.",
        );
        assert!(outcome.is_none());

        let toasts = manager.toasts();
        assert_eq!(toasts[0].variant(), Variant::Destructive);
        assert_eq!(
            toasts[0].description(),
            Some("Não foi possível salvar o curso.")
        );
    }
}

//! Top-level span helpers.

use tracing::Span;

use crate::init::build_sha;

/// Span wrapping the whole startup path, tagged with the build identifier.
#[must_use]
pub fn bootstrap_span() -> Span {
    tracing::info_span!("app", phase = "bootstrap", build_sha = %build_sha())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_carries_app_name() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let span = bootstrap_span();
            assert_eq!(span.metadata().map(|meta| meta.name()), Some("app"));
            assert!(span.metadata().is_some_and(|meta| meta.fields().field("build_sha").is_some()));
        });
    }
}

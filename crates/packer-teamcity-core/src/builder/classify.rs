//! Builder classification.
//!
//! Turns an opaque builder id into one of two kinds, once, so the
//! post-processor can branch on a closed enum instead of re-testing
//! registry membership.

use crate::builder::catalog::is_composite_builder;

/// How an artifact's id should be interpreted, derived from its builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderKind {
    /// Amazon builders: the id is `region:ami`.
    CompositeAws,
    /// Any other builder: the id is passed on verbatim.
    Opaque,
}

impl BuilderKind {
    pub fn classify(builder_id: &str) -> Self {
        if is_composite_builder(builder_id) {
            BuilderKind::CompositeAws
        } else {
            BuilderKind::Opaque
        }
    }

    pub fn is_composite(self) -> bool {
        self == BuilderKind::CompositeAws
    }
}

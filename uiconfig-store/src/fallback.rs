//! Default-value fallback for reads.

use crate::collections::{DESCRIPTORS, EntityKind};
use crate::error::StoreResult;
use std::collections::HashMap;
use tracing::{debug, warn};

/// What a facade does when a read fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackRule {
    /// Any failure, absence or transport, yields the compiled-in default.
    ReplaceOnAnyFailure,
    /// Failures reach the caller.
    Propagate,
}

/// Fallback rule per entity kind.
#[derive(Debug, Clone)]
pub struct DefaultFallbackPolicy {
    rules: HashMap<EntityKind, FallbackRule>,
}

impl Default for DefaultFallbackPolicy {
    fn default() -> Self {
        Self {
            rules: DESCRIPTORS.iter().map(|d| (d.kind, d.fallback)).collect(),
        }
    }
}

impl DefaultFallbackPolicy {
    #[must_use]
    pub fn with_rule(mut self, kind: EntityKind, rule: FallbackRule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    pub fn rule(&self, kind: EntityKind) -> FallbackRule {
        self.rules
            .get(&kind)
            .copied()
            .unwrap_or(FallbackRule::Propagate)
    }

    /// Applies the rule for `kind` to a read result.
    ///
    /// A masked absence is logged at DEBUG, any other masked failure at WARN.
    pub fn resolve<T>(
        &self,
        kind: EntityKind,
        result: StoreResult<T>,
        default: impl FnOnce() -> T,
    ) -> StoreResult<T> {
        match (result, self.rule(kind)) {
            (Ok(value), _) => Ok(value),
            (Err(e), FallbackRule::ReplaceOnAnyFailure) => {
                if e.is_not_found() {
                    debug!("No stored {:?}, using default", kind);
                } else {
                    warn!("Reading {:?} failed, using default: {}", kind, e);
                }
                Ok(default())
            }
            (Err(e), FallbackRule::Propagate) => Err(e),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy for the alert system.
//!
//! There is exactly one recoverable failure in this crate: using an
//! [`AlertContext`](crate::AlertContext) whose provider has been dropped.
//! Removing an absent identity and clearing an empty collection are
//! deliberate no-ops, not errors.

use std::fmt;

/// Errors surfaced by the alert system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An `AlertContext` was used outside a living `AlertProvider` scope.
    ///
    /// This is a composition mistake in the host application and cannot be
    /// recovered locally: create the provider before handing out contexts,
    /// and keep it alive for the duration of the session.
    DetachedContext,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DetachedContext => {
                write!(f, "alert context used outside of an AlertProvider scope")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_provider() {
        let rendered = format!("{}", Error::DetachedContext);
        assert!(rendered.contains("AlertProvider"));
    }
}

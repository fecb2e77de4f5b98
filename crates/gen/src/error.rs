//! Failure taxonomy for generation operations.
//!
//! Callers branch on the variant: a missing credential means "open the
//! settings page", a vendor error carries the upstream message, a network
//! error means the request never completed. No variant is retried
//! automatically at any layer.

use crate::{Operation, ProviderId};
use thiserror::Error;

/// A generation operation failure.
#[derive(Debug, Error)]
pub enum GenError {
    /// No usable API key is stored for the vendor. Raised before any
    /// network I/O.
    #[error("no API key configured for {}", .0.label())]
    MissingCredential(ProviderId),

    /// The vendor responded with a non-success status or an unusable
    /// payload. `message` passes the vendor's own wording through when
    /// present.
    #[error("{} request failed with status {}: {}", .provider.label(), .status, .message)]
    Vendor {
        provider: ProviderId,
        status: u16,
        message: String,
    },

    /// The request could not complete: connectivity, TLS, or reading the
    /// response body.
    #[error("network failure reaching {}", .provider.label())]
    Network {
        provider: ProviderId,
        #[source]
        source: reqwest::Error,
    },

    /// The vendor does not offer this operation.
    #[error("{} does not support the {} operation", .provider.label(), .operation)]
    Unsupported {
        provider: ProviderId,
        operation: Operation,
    },
}

impl GenError {
    /// Build a vendor error.
    pub fn vendor(provider: ProviderId, status: u16, message: impl Into<String>) -> Self {
        Self::Vendor {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Build a network error.
    pub fn network(provider: ProviderId, source: reqwest::Error) -> Self {
        Self::Network { provider, source }
    }

    /// Build an unsupported-operation error.
    pub fn unsupported(provider: ProviderId, operation: Operation) -> Self {
        Self::Unsupported {
            provider,
            operation,
        }
    }

    /// The vendor this failure belongs to.
    pub fn provider(&self) -> ProviderId {
        match self {
            Self::MissingCredential(provider)
            | Self::Vendor { provider, .. }
            | Self::Network { provider, .. }
            | Self::Unsupported { provider, .. } => *provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GenError;
    use crate::{Operation, ProviderId};

    #[test]
    fn missing_credential_names_the_vendor() {
        let err = GenError::MissingCredential(ProviderId::Gemini);
        assert_eq!(err.to_string(), "no API key configured for Google Gemini");
    }

    #[test]
    fn vendor_error_carries_message_and_status() {
        let err = GenError::vendor(ProviderId::OpenAI, 401, "bad key");
        assert_eq!(
            err.to_string(),
            "OpenAI request failed with status 401: bad key"
        );
    }

    #[test]
    fn unsupported_names_the_operation() {
        let err = GenError::unsupported(ProviderId::Clipdrop, Operation::Chat);
        assert_eq!(
            err.to_string(),
            "Clipdrop does not support the chat operation"
        );
    }
}

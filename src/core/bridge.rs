// src/core/bridge.rs

use anyhow::Result;
use std::fmt;
use std::sync::Arc;
use tracing::error;

// Fixed code reported to bridge callers on any platform failure.
pub const UPDATE_FAILED: &str = "UPDATE_FAILED";

// Asks the host side to re-run every active complication source.
pub trait UpdateRequester: Send + Sync {
    fn request_update_all(&self) -> Result<()>;
}

// Structured error handed to bridge callers instead of a raw fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeError {
    pub code: &'static str,
    pub message: String,
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for BridgeError {}

// The one externally callable operation: prompt a refresh ahead of the
// periodic schedule. Repeated calls only cause repeated refreshes.
pub struct UpdateBridge {
    requester: Arc<dyn UpdateRequester>,
}

impl UpdateBridge {
    pub fn new(requester: Arc<dyn UpdateRequester>) -> Self {
        UpdateBridge { requester }
    }

    // Failures never cross this boundary unstructured.
    pub fn request_update(&self) -> Result<bool, BridgeError> {
        match self.requester.request_update_all() {
            Ok(()) => Ok(true),
            Err(e) => {
                error!(error = %e, "Failed to request complication update");
                Err(BridgeError {
                    code: UPDATE_FAILED,
                    message: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BridgeError, UpdateBridge, UpdateRequester, UPDATE_FAILED};
    use anyhow::Result;
    use std::sync::Arc;

    struct OkRequester;
    impl UpdateRequester for OkRequester {
        fn request_update_all(&self) -> Result<()> {
            Ok(())
        }
    }

    struct FailingRequester;
    impl UpdateRequester for FailingRequester {
        fn request_update_all(&self) -> Result<()> {
            anyhow::bail!("renderer went away")
        }
    }

    #[test]
    fn success_is_true() {
        let bridge = UpdateBridge::new(Arc::new(OkRequester));
        assert_eq!(bridge.request_update(), Ok(true));
    }

    #[test]
    fn failure_is_a_structured_error() {
        let bridge = UpdateBridge::new(Arc::new(FailingRequester));
        assert_eq!(
            bridge.request_update(),
            Err(BridgeError {
                code: UPDATE_FAILED,
                message: "renderer went away".to_owned(),
            })
        );
    }

    #[test]
    fn repeated_calls_keep_answering() {
        let bridge = UpdateBridge::new(Arc::new(FailingRequester));
        for _ in 0..3 {
            assert!(bridge.request_update().is_err());
        }
    }
}

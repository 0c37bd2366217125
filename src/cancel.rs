use futures_util::future::{AbortHandle, AbortRegistration, Abortable};
use std::future::Future;

/// Caller-held side of a cancellation pair. Cheap to clone; any clone may
/// abort the single call its [`AbortSignal`] was handed to.
#[derive(Debug, Clone)]
pub struct AbortController {
    handle: AbortHandle,
}

/// One-shot signal observed by the transport of exactly one call.
#[derive(Debug)]
pub struct AbortSignal {
    registration: AbortRegistration,
}

impl AbortController {
    pub fn pair() -> (AbortController, AbortSignal) {
        let (handle, registration) = AbortHandle::new_pair();
        (AbortController { handle }, AbortSignal { registration })
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_aborted(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl AbortSignal {
    pub(crate) fn wrap<F: Future>(self, future: F) -> Abortable<F> {
        Abortable::new(future, self.registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn aborted_before_poll_resolves_to_aborted() {
        let (controller, signal) = AbortController::pair();
        controller.abort();
        assert!(controller.is_aborted());
        assert!(signal.wrap(async { 1 }).await.is_err());
    }

    #[tokio::test]
    async fn untouched_signal_lets_future_complete() {
        let (_controller, signal) = AbortController::pair();
        assert_eq!(signal.wrap(async { 7 }).await, Ok(7));
    }
}

//! Asset swap state machine.
//!
//! ```text
//!   Idle ──request──▶ Loading ──latest completion ok──▶ Swapping ──settle──▶ Idle
//!                       │  ▲
//!                       │  └── request (newer token supersedes the pending one)
//!                       └──── latest completion failed ──▶ Idle
//! ```
//!
//! Only the completion carrying the most recently issued token may move the machine forward.
//! Anything older is stale and is discarded by the caller, whatever order completions arrive in.

use crate::{LoadRequest, RequestToken, asset_path};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwapState {
    Idle,
    Loading { token: RequestToken, asset: String },
    Swapping { token: RequestToken, asset: String },
}

#[derive(Clone, Debug)]
pub struct SwapController {
    state: SwapState,
    next_token: u64,
}

impl Default for SwapController {
    fn default() -> Self {
        Self {
            state: SwapState::Idle,
            next_token: 1,
        }
    }
}

impl SwapController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SwapState {
        &self.state
    }

    /// Issue a new request for `asset`. Any request still in flight becomes stale.
    pub fn request(&mut self, asset: &str) -> LoadRequest {
        let token = RequestToken(self.next_token);
        self.next_token += 1;
        self.state = SwapState::Loading {
            token,
            asset: asset.to_owned(),
        };
        LoadRequest {
            token,
            asset: asset.to_owned(),
            path: asset_path(asset),
        }
    }

    /// Is `token` the request the machine is waiting on?
    pub fn is_current(&self, token: RequestToken) -> bool {
        matches!(&self.state, SwapState::Loading { token: pending, .. } if *pending == token)
    }

    /// Loading → Swapping. Returns false (and changes nothing) unless `token` is current.
    pub fn begin_swap(&mut self, token: RequestToken) -> bool {
        match &self.state {
            SwapState::Loading {
                token: pending,
                asset,
            } if *pending == token => {
                self.state = SwapState::Swapping {
                    token,
                    asset: asset.clone(),
                };
                true
            }
            _ => false,
        }
    }

    /// Back to Idle after a swap or a failed load.
    pub fn settle(&mut self) {
        self.state = SwapState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_moves_to_loading() {
        let mut swap = SwapController::new();
        assert_eq!(swap.state(), &SwapState::Idle);

        let req = swap.request("Running");
        assert_eq!(req.path, "models/Running.glb");
        assert_eq!(
            swap.state(),
            &SwapState::Loading {
                token: req.token,
                asset: "Running".into()
            }
        );
        assert!(swap.is_current(req.token));
    }

    #[test]
    fn newer_request_supersedes_older() {
        let mut swap = SwapController::new();
        let a = swap.request("A");
        let b = swap.request("B");

        assert!(b.token > a.token);
        assert!(!swap.is_current(a.token));
        assert!(swap.is_current(b.token));
        assert!(!swap.begin_swap(a.token));
        assert!(swap.begin_swap(b.token));
        assert_eq!(
            swap.state(),
            &SwapState::Swapping {
                token: b.token,
                asset: "B".into()
            }
        );
    }

    #[test]
    fn settle_returns_to_idle_and_tokens_keep_increasing() {
        let mut swap = SwapController::new();
        let a = swap.request("A");
        swap.begin_swap(a.token);
        swap.settle();
        assert_eq!(swap.state(), &SwapState::Idle);
        assert!(!swap.is_current(a.token));

        let again = swap.request("A");
        assert!(again.token > a.token);
    }
}

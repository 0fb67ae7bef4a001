use thiserror::Error;

/// Platform playback failures. All are non-fatal: callers swallow them and
/// leave the surface paused and muted.
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("autoplay blocked by platform policy")]
    AutoplayBlocked,
    #[error("media source unavailable: {0}")]
    SourceUnavailable(String),
}

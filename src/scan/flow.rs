//! Scan Flow State Machine
//!
//! Tracks one scan attempt at a time. All transitions are explicit so a
//! late camera result can be detected and discarded after the user reset.

use super::error::ScanError;

/// Camera permission as reported by the Permissions API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
    /// Platform cannot tell (no Permissions API or unsupported descriptor)
    Unknown,
}

/// Outcome of camera enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraAvailability {
    #[default]
    Checking,
    Available(usize),
    /// Terminal: the camera path stays disabled
    NoCamera,
    Unsupported,
}

impl CameraAvailability {
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            CameraAvailability::NoCamera
        } else {
            CameraAvailability::Available(count)
        }
    }

    pub fn can_start(&self) -> bool {
        matches!(self, CameraAvailability::Available(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    /// Waiting on permission / stream acquisition
    Starting,
    /// Live decode loop running
    Scanning,
    /// One-shot decode of an uploaded image
    DecodingImage,
    Decoded(String),
    Failed(ScanError),
}

/// Identifies one scan attempt. Async work carries it so results from a
/// stopped or superseded attempt are dropped.
pub type AttemptId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanFlow {
    state: ScanState,
    attempt: AttemptId,
}

impl ScanFlow {
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Idle, decoded or failed: a new attempt may start
    pub fn is_resting(&self) -> bool {
        matches!(self.state, ScanState::Idle | ScanState::Decoded(_) | ScanState::Failed(_))
    }

    pub fn is_busy(&self) -> bool {
        !self.is_resting()
    }

    /// True while `attempt` is the running attempt
    pub fn is_current(&self, attempt: AttemptId) -> bool {
        attempt == self.attempt && self.is_busy()
    }

    fn begin(&mut self, state: ScanState) -> Option<AttemptId> {
        if self.is_busy() {
            return None;
        }
        self.attempt += 1;
        self.state = state;
        Some(self.attempt)
    }

    /// Start a camera attempt. `None` if one is already running.
    pub fn begin_camera(&mut self) -> Option<AttemptId> {
        self.begin(ScanState::Starting)
    }

    /// Start an image decode. `None` if busy.
    pub fn begin_image(&mut self) -> Option<AttemptId> {
        self.begin(ScanState::DecodingImage)
    }

    /// Reject early on an explicit denial
    pub fn preflight(permission: PermissionState) -> Result<(), ScanError> {
        match permission {
            PermissionState::Denied => Err(ScanError::PermissionDenied),
            PermissionState::Granted | PermissionState::Prompt | PermissionState::Unknown => Ok(()),
        }
    }

    /// Stream attached. False means the attempt was cancelled meanwhile and the
    /// caller must release the stream.
    pub fn camera_ready(&mut self, attempt: AttemptId) -> bool {
        if attempt != self.attempt || self.state != ScanState::Starting {
            return false;
        }
        self.state = ScanState::Scanning;
        true
    }

    /// Record a decode. Ignored unless `attempt` is scanning or decoding an image.
    pub fn decoded(&mut self, attempt: AttemptId, text: String) -> bool {
        if attempt != self.attempt || !matches!(self.state, ScanState::Scanning | ScanState::DecodingImage) {
            return false;
        }
        self.state = ScanState::Decoded(text);
        true
    }

    /// Record a failure. Ignored once `attempt` is no longer live.
    pub fn fail(&mut self, attempt: AttemptId, err: ScanError) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.state = ScanState::Failed(err);
        true
    }

    /// Stop the camera / forget results. Idempotent; outstanding attempts
    /// become stale.
    pub fn reset(&mut self) {
        self.state = ScanState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_happy_path() {
        let mut flow = ScanFlow::default();
        let attempt = flow.begin_camera().unwrap();
        assert_eq!(flow.begin_camera(), None);
        assert!(flow.camera_ready(attempt));
        assert!(flow.decoded(attempt, "https://example.org/item/42".to_string()));
        assert_eq!(flow.state(), &ScanState::Decoded("https://example.org/item/42".to_string()));
        assert!(flow.is_resting());
    }

    #[test]
    fn test_failed_attempt_can_retry_after_reset() {
        let mut flow = ScanFlow::default();
        let attempt = flow.begin_camera().unwrap();
        assert!(flow.fail(attempt, ScanError::DeviceBusy));
        assert_eq!(flow.state(), &ScanState::Failed(ScanError::DeviceBusy));

        flow.reset();
        flow.reset();
        assert_eq!(flow.state(), &ScanState::Idle);
        assert!(flow.begin_camera().is_some());
    }

    #[test]
    fn test_failed_attempt_can_retry_directly() {
        let mut flow = ScanFlow::default();
        let attempt = flow.begin_image().unwrap();
        flow.fail(attempt, ScanError::NoCodeFound);
        assert!(flow.begin_camera().is_some());
    }

    #[test]
    fn test_late_stream_after_reset_is_rejected() {
        let mut flow = ScanFlow::default();
        let attempt = flow.begin_camera().unwrap();
        flow.reset();
        assert!(!flow.camera_ready(attempt));
        assert_eq!(flow.state(), &ScanState::Idle);
    }

    #[test]
    fn test_late_failure_after_stop_keeps_idle() {
        let mut flow = ScanFlow::default();
        let attempt = flow.begin_camera().unwrap();
        assert!(flow.camera_ready(attempt));
        flow.reset();

        assert!(!flow.is_current(attempt));
        assert!(!flow.fail(attempt, ScanError::DeviceBusy));
        assert_eq!(flow.state(), &ScanState::Idle);
    }

    #[test]
    fn test_stale_attempt_cannot_touch_newer_one() {
        let mut flow = ScanFlow::default();
        let first = flow.begin_camera().unwrap();
        flow.reset();
        let second = flow.begin_camera().unwrap();
        assert_ne!(first, second);

        assert!(!flow.camera_ready(first));
        assert!(!flow.fail(first, ScanError::Constraints));
        assert_eq!(flow.state(), &ScanState::Starting);

        assert!(flow.camera_ready(second));
        assert!(!flow.decoded(first, "old".to_string()));
        assert!(flow.decoded(second, "new".to_string()));
        assert_eq!(flow.state(), &ScanState::Decoded("new".to_string()));
    }

    #[test]
    fn test_decode_ignored_when_not_scanning() {
        let mut flow = ScanFlow::default();
        assert!(!flow.decoded(0, "x".to_string()));
        let attempt = flow.begin_camera().unwrap();
        assert!(!flow.decoded(attempt, "x".to_string()));
        assert_eq!(flow.state(), &ScanState::Starting);
    }

    #[test]
    fn test_fail_does_not_overwrite_result() {
        let mut flow = ScanFlow::default();
        let attempt = flow.begin_image().unwrap();
        flow.decoded(attempt, "code".to_string());
        assert!(!flow.fail(attempt, ScanError::Other("late".into())));
        assert_eq!(flow.state(), &ScanState::Decoded("code".to_string()));
    }

    #[test]
    fn test_preflight_denies_only_explicit_denial() {
        assert_eq!(ScanFlow::preflight(PermissionState::Denied), Err(ScanError::PermissionDenied));
        assert!(ScanFlow::preflight(PermissionState::Prompt).is_ok());
        assert!(ScanFlow::preflight(PermissionState::Unknown).is_ok());
    }

    #[test]
    fn test_availability() {
        assert_eq!(CameraAvailability::from_count(0), CameraAvailability::NoCamera);
        assert!(CameraAvailability::from_count(2).can_start());
        assert!(!CameraAvailability::Checking.can_start());
    }
}

//! Scan Errors
//!
//! Browser failures mapped onto a small fixed taxonomy with user-facing text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Camera permission was denied. Allow camera access in your browser settings and try again.")]
    PermissionDenied,
    #[error("No camera was found on this device. You can still upload a photo of the QR code.")]
    NoCamera,
    #[error("The selected camera could not be found. Pick another camera or reconnect it.")]
    NotFound,
    #[error("The camera is already in use by another application. Close it and try again.")]
    DeviceBusy,
    #[error("The camera does not support the requested settings. Try a different camera.")]
    Constraints,
    #[error("Camera access is not supported here. Use a modern browser over HTTPS, or upload a photo.")]
    Unsupported,
    #[error("No QR code was found in that image. Try a sharper, well-lit photo.")]
    NoCodeFound,
    #[error("The QR decoder failed: {0}")]
    Decoder(String),
    #[error("Camera error: {0}")]
    Other(String),
}

impl ScanError {
    /// Map a DOMException / Error `name` from getUserMedia and friends
    pub fn from_dom_name(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" | "SecurityError" => ScanError::PermissionDenied,
            "NotFoundError" | "DevicesNotFoundError" => ScanError::NotFound,
            "NotReadableError" | "TrackStartError" | "AbortError" => ScanError::DeviceBusy,
            "OverconstrainedError" | "ConstraintNotSatisfiedError" => ScanError::Constraints,
            "TypeError" => ScanError::Unsupported,
            _ if message.is_empty() => ScanError::Other(name.to_string()),
            _ => ScanError::Other(message.to_string()),
        }
    }

    /// Heading for the error panel
    pub fn title(&self) -> &'static str {
        match self {
            ScanError::PermissionDenied => "Permission needed",
            ScanError::NoCamera | ScanError::NotFound => "No camera",
            ScanError::DeviceBusy => "Camera busy",
            ScanError::Constraints => "Camera settings",
            ScanError::Unsupported => "Not supported",
            ScanError::NoCodeFound => "Nothing to scan",
            ScanError::Decoder(_) | ScanError::Other(_) => "Scan failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_name_table() {
        let cases = [
            ("NotAllowedError", ScanError::PermissionDenied),
            ("PermissionDeniedError", ScanError::PermissionDenied),
            ("SecurityError", ScanError::PermissionDenied),
            ("NotFoundError", ScanError::NotFound),
            ("DevicesNotFoundError", ScanError::NotFound),
            ("NotReadableError", ScanError::DeviceBusy),
            ("TrackStartError", ScanError::DeviceBusy),
            ("AbortError", ScanError::DeviceBusy),
            ("OverconstrainedError", ScanError::Constraints),
            ("ConstraintNotSatisfiedError", ScanError::Constraints),
            ("TypeError", ScanError::Unsupported),
        ];
        for (name, expected) in cases {
            assert_eq!(ScanError::from_dom_name(name, "ignored"), expected, "{}", name);
        }
    }

    #[test]
    fn test_unknown_name_keeps_message() {
        assert_eq!(
            ScanError::from_dom_name("WeirdError", "something broke"),
            ScanError::Other("something broke".to_string())
        );
        assert_eq!(ScanError::from_dom_name("WeirdError", ""), ScanError::Other("WeirdError".to_string()));
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert!(ScanError::DeviceBusy.to_string().contains("in use"));
        assert_eq!(ScanError::Other("x".into()).to_string(), "Camera error: x");
    }
}

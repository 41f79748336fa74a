//! QR Scanning
//!
//! Camera and image-upload paths that turn a QR code into text.

pub mod camera;
pub mod decoder;
pub mod error;
pub mod flow;

pub use camera::{
    attach_stream, enumerate_cameras, open_stream, query_camera_permission, release_stream, stop_stream,
    CameraDevice,
};
pub use decoder::{decode_image_file, DecodeLoop};
pub use error::ScanError;
pub use flow::{AttemptId, CameraAvailability, PermissionState, ScanFlow, ScanState};

//! Camera Access
//!
//! Device enumeration, permission query and stream acquisition over
//! `navigator.mediaDevices`. Every browser failure comes back as a `ScanError`.

use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DomException, HtmlVideoElement, MediaDeviceInfo, MediaDeviceKind, MediaDevices, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, PermissionStatus,
};

use super::error::ScanError;
use super::flow::PermissionState;
use crate::config::AppConfig;

/// A video input the user can pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    pub device_id: String,
    pub label: String,
}

/// Browsers hide labels until permission is granted
pub fn camera_label(label: &str, index: usize) -> String {
    let label = label.trim();
    if label.is_empty() {
        format!("Camera {}", index + 1)
    } else {
        label.to_string()
    }
}

// ========================
// Constraints
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exact {
    pub exact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ideal {
    pub ideal: u32,
}

/// `video` member of getUserMedia constraints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<Exact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facing_mode: Option<&'static str>,
    pub width: Ideal,
    pub height: Ideal,
}

impl VideoConstraints {
    /// Pin the chosen device, or fall back to the configured facing mode
    pub fn new(device_id: Option<&str>, config: &AppConfig) -> Self {
        let device_id = device_id.filter(|id| !id.is_empty());
        Self {
            device_id: device_id.map(|id| Exact { exact: id.to_string() }),
            facing_mode: if device_id.is_none() { Some(config.facing_mode) } else { None },
            width: Ideal { ideal: config.ideal_width },
            height: Ideal { ideal: config.ideal_height },
        }
    }
}

#[derive(Serialize)]
struct PermissionQuery {
    name: &'static str,
}

// ========================
// Browser calls
// ========================

/// Split a thrown JS value into (name, message)
fn js_error_parts(err: &JsValue) -> (String, String) {
    if let Some(dom) = err.dyn_ref::<DomException>() {
        return (dom.name(), dom.message());
    }
    let field = |key: &str| {
        Reflect::get(err, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    };
    let name = field("name");
    let message = field("message");
    if name.is_empty() && message.is_empty() {
        return (String::new(), err.as_string().unwrap_or_else(|| format!("{:?}", err)));
    }
    (name, message)
}

pub(crate) fn scan_error_from_js(err: JsValue) -> ScanError {
    let (name, message) = js_error_parts(&err);
    ScanError::from_dom_name(&name, &message)
}

fn media_devices() -> Result<MediaDevices, ScanError> {
    let window = web_sys::window().ok_or(ScanError::Unsupported)?;
    let navigator = window.navigator();
    let devices = Reflect::get(&navigator, &JsValue::from_str("mediaDevices"))
        .map_err(|_| ScanError::Unsupported)?;
    if devices.is_undefined() || devices.is_null() {
        return Err(ScanError::Unsupported);
    }
    Ok(devices.unchecked_into::<MediaDevices>())
}

/// List video inputs. Empty means no camera.
pub async fn enumerate_cameras() -> Result<Vec<CameraDevice>, ScanError> {
    let promise = media_devices()?.enumerate_devices().map_err(scan_error_from_js)?;
    let list = JsFuture::from(promise).await.map_err(scan_error_from_js)?;

    let cameras: Vec<CameraDevice> = Array::from(&list)
        .iter()
        .filter_map(|v| v.dyn_into::<MediaDeviceInfo>().ok())
        .filter(|info| info.kind() == MediaDeviceKind::Videoinput)
        .enumerate()
        .map(|(i, info)| CameraDevice {
            device_id: info.device_id(),
            label: camera_label(&info.label(), i),
        })
        .collect();

    log::debug!("[SCAN] found {} camera(s)", cameras.len());
    Ok(cameras)
}

/// Camera permission state; `Unknown` when the platform cannot answer
pub async fn query_camera_permission() -> PermissionState {
    let Some(window) = web_sys::window() else {
        return PermissionState::Unknown;
    };
    let Ok(permissions) = window.navigator().permissions() else {
        return PermissionState::Unknown;
    };
    let Ok(descriptor) = serde_wasm_bindgen::to_value(&PermissionQuery { name: "camera" }) else {
        return PermissionState::Unknown;
    };
    let Ok(promise) = permissions.query(descriptor.unchecked_ref::<Object>()) else {
        return PermissionState::Unknown;
    };

    match JsFuture::from(promise).await {
        Ok(status) => match status.unchecked_into::<PermissionStatus>().state() {
            web_sys::PermissionState::Granted => PermissionState::Granted,
            web_sys::PermissionState::Denied => PermissionState::Denied,
            web_sys::PermissionState::Prompt => PermissionState::Prompt,
            _ => PermissionState::Unknown,
        },
        Err(e) => {
            // Firefox rejects the "camera" descriptor
            log::debug!("[SCAN] permission query unsupported: {:?}", e);
            PermissionState::Unknown
        }
    }
}

/// Request a video stream for the given device (or the default facing mode)
pub async fn open_stream(device_id: Option<&str>, config: &AppConfig) -> Result<MediaStream, ScanError> {
    let devices = media_devices()?;
    let video = serde_wasm_bindgen::to_value(&VideoConstraints::new(device_id, config))
        .map_err(|e| ScanError::Other(e.to_string()))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::FALSE);
    constraints.set_video(&video);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(scan_error_from_js)?;
    let stream = JsFuture::from(promise).await.map_err(scan_error_from_js)?;
    Ok(stream.unchecked_into::<MediaStream>())
}

/// Stop every track so the camera light goes off
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Stop `stream` and detach it from the preview, unless a newer stream
/// already owns the element
pub fn release_stream(video: &HtmlVideoElement, stream: &MediaStream) {
    stop_stream(stream);
    let owned = video
        .src_object()
        .map_or(false, |current| AsRef::<JsValue>::as_ref(&current) == AsRef::<JsValue>::as_ref(stream));
    if owned {
        video.set_src_object(None);
    }
}

/// Attach a stream to the preview element and start playback
pub async fn attach_stream(video: &HtmlVideoElement, stream: &MediaStream) -> Result<(), ScanError> {
    video.set_src_object(Some(stream));
    let promise = video.play().map_err(scan_error_from_js)?;
    JsFuture::from(promise).await.map_err(scan_error_from_js)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_pin_selected_device() {
        let c = VideoConstraints::new(Some("cam-2"), &AppConfig::default());
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "deviceId": { "exact": "cam-2" },
                "width": { "ideal": 1280 },
                "height": { "ideal": 720 }
            })
        );
    }

    #[test]
    fn test_constraints_default_to_rear_camera() {
        for id in [None, Some("")] {
            let c = VideoConstraints::new(id, &AppConfig::default());
            let json = serde_json::to_value(&c).unwrap();
            assert_eq!(json["facingMode"], "environment");
            assert!(json.get("deviceId").is_none());
        }
    }

    #[test]
    fn test_camera_label_fallback() {
        assert_eq!(camera_label("", 0), "Camera 1");
        assert_eq!(camera_label("  ", 2), "Camera 3");
        assert_eq!(camera_label("FaceTime HD", 0), "FaceTime HD");
    }
}

//! QR Decoding
//!
//! Frames are drawn to an offscreen canvas and handed to the `jsQR` global
//! (loaded by index.html). Two entry points:
//! - `DecodeLoop`: polls a live `<video>` until a code is found
//! - `decode_image_file`: one-shot decode of an uploaded photo

use gloo_timers::callback::Interval;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement, HtmlVideoElement, ImageData,
    MediaStream, Url,
};

use super::camera::{release_stream, scan_error_from_js, stop_stream};
use super::error::ScanError;

/// Uploaded photos are scaled down so the longest side fits
pub const MAX_IMAGE_SIDE: u32 = 1600;

/// `HTMLMediaElement.HAVE_CURRENT_DATA`
const HAVE_CURRENT_DATA: u16 = 2;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = jsQR)]
    fn js_qr(data: Clamped<&[u8]>, width: u32, height: u32) -> Result<JsValue, JsValue>;
}

/// Fit (width, height) inside `max` on the longest side, keeping aspect
pub fn scaled_size(width: u32, height: u32, max: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max || longest == 0 {
        return (width, height);
    }
    let scale = max as f64 / longest as f64;
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    (w, h)
}

fn decoder_error(err: JsValue) -> ScanError {
    match scan_error_from_js(err) {
        ScanError::Other(msg) => ScanError::Decoder(msg),
        other => other,
    }
}

fn offscreen_canvas() -> Result<HtmlCanvasElement, ScanError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ScanError::Unsupported)?
        .create_element("canvas")
        .map_err(decoder_error)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ScanError::Decoder("canvas element unavailable".to_string()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ScanError> {
    canvas
        .get_context("2d")
        .map_err(decoder_error)?
        .ok_or_else(|| ScanError::Decoder("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ScanError::Decoder("2d context unavailable".to_string()))
}

/// Run jsQR over a frame. `Ok(None)` means no code in view.
fn decode_image_data(image: &ImageData) -> Result<Option<String>, ScanError> {
    let pixels = image.data();
    let result = js_qr(Clamped(&pixels.0[..]), image.width(), image.height()).map_err(decoder_error)?;
    if result.is_null() || result.is_undefined() {
        return Ok(None);
    }
    let text = Reflect::get(&result, &JsValue::from_str("data"))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty());
    Ok(text)
}

/// Grab the current video frame; `Ok(None)` until the video has data
fn capture_frame(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
) -> Result<Option<ImageData>, ScanError> {
    let (w, h) = (video.video_width(), video.video_height());
    if video.ready_state() < HAVE_CURRENT_DATA || w == 0 || h == 0 {
        return Ok(None);
    }
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(decoder_error)?;
    let frame = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(decoder_error)?;
    Ok(Some(frame))
}

// ========================
// Live decode loop
// ========================

/// Polls a playing video for QR codes.
///
/// Reports at most one result, then stops the stream and goes quiet.
/// Dropping the loop cancels the timer, stops the tracks and detaches the
/// preview. Do not drop it from inside `on_result`; defer that to a task.
pub struct DecodeLoop {
    _interval: Interval,
    video: HtmlVideoElement,
    stream: MediaStream,
}

impl DecodeLoop {
    pub fn start<F>(
        video: HtmlVideoElement,
        stream: MediaStream,
        interval_ms: u32,
        on_result: F,
    ) -> Result<Self, ScanError>
    where
        F: Fn(Result<String, ScanError>) + 'static,
    {
        let setup = offscreen_canvas().and_then(|canvas| context_2d(&canvas).map(|ctx| (canvas, ctx)));
        let (canvas, ctx) = or_release(setup, || release_stream(&video, &stream))?;
        let mut done = false;

        let tick_video = video.clone();
        let tick_stream = stream.clone();
        let interval = Interval::new(interval_ms, move || {
            if done {
                return;
            }
            let outcome = capture_frame(&tick_video, &canvas, &ctx)
                .and_then(|frame| frame.map_or(Ok(None), |f| decode_image_data(&f)));
            let result = match outcome {
                Ok(None) => return,
                Ok(Some(text)) => Ok(text),
                Err(e) => Err(e),
            };
            done = true;
            stop_stream(&tick_stream);
            on_result(result);
        });

        log::info!("[SCAN] decode loop started ({} ms)", interval_ms);
        Ok(Self {
            _interval: interval,
            video,
            stream,
        })
    }
}

/// Run `release` when setup failed; the caller gets the error unchanged
fn or_release<T>(result: Result<T, ScanError>, release: impl FnOnce()) -> Result<T, ScanError> {
    if result.is_err() {
        release();
    }
    result
}

impl Drop for DecodeLoop {
    fn drop(&mut self) {
        release_stream(&self.video, &self.stream);
        log::debug!("[SCAN] decode loop stopped");
    }
}

// ========================
// Image upload
// ========================

/// Decode a QR code from an uploaded image file
pub async fn decode_image_file(file: &File) -> Result<String, ScanError> {
    let url = Url::create_object_url_with_blob(file).map_err(decoder_error)?;
    let result = decode_from_url(&url).await;
    if let Err(e) = Url::revoke_object_url(&url) {
        log::warn!("[SCAN] failed to revoke object url: {:?}", e);
    }
    result
}

async fn decode_from_url(url: &str) -> Result<String, ScanError> {
    let img = HtmlImageElement::new().map_err(decoder_error)?;
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|_| ScanError::Decoder("the file is not a readable image".to_string()))?;

    let (w, h) = scaled_size(img.natural_width(), img.natural_height(), MAX_IMAGE_SIDE);
    if w == 0 || h == 0 {
        return Err(ScanError::Decoder("the image is empty".to_string()));
    }

    let canvas = offscreen_canvas()?;
    canvas.set_width(w);
    canvas.set_height(h);
    let ctx = context_2d(&canvas)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, w as f64, h as f64)
        .map_err(decoder_error)?;
    let frame = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(decoder_error)?;

    decode_image_data(&frame)?.ok_or(ScanError::NoCodeFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_images_keep_size() {
        assert_eq!(scaled_size(640, 480, MAX_IMAGE_SIDE), (640, 480));
        assert_eq!(scaled_size(0, 0, MAX_IMAGE_SIDE), (0, 0));
    }

    #[test]
    fn test_large_images_scale_on_longest_side() {
        assert_eq!(scaled_size(4000, 3000, 1600), (1600, 1200));
        assert_eq!(scaled_size(3000, 4000, 1600), (1200, 1600));
        assert_eq!(scaled_size(10000, 2, 1600), (1600, 1));
    }

    #[test]
    fn test_failed_setup_releases_camera() {
        let mut released = false;
        let result: Result<(), ScanError> =
            or_release(Err(ScanError::Decoder("2d context unavailable".into())), || released = true);
        assert!(released);
        assert_eq!(result, Err(ScanError::Decoder("2d context unavailable".into())));
    }

    #[test]
    fn test_successful_setup_keeps_camera() {
        let mut released = false;
        assert_eq!(or_release(Ok(7), || released = true), Ok(7));
        assert!(!released);
    }
}

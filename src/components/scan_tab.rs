//! Scan Tab Component
//!
//! Camera and photo-upload QR scanning. A successful scan is stored and the
//! app jumps to the Recycling tab.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MediaStream;

use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::models::Tab;
use crate::scan::{
    attach_stream, decode_image_file, enumerate_cameras, open_stream, query_camera_permission, release_stream,
    stop_stream, AttemptId, CameraAvailability, CameraDevice, DecodeLoop, ScanError, ScanFlow, ScanState,
};
use crate::store::{store_set_scan, use_app_store};

/// Permission check, then getUserMedia
async fn acquire_stream(device_id: Option<String>, config: AppConfig) -> Result<MediaStream, ScanError> {
    ScanFlow::preflight(query_camera_permission().await)?;
    open_stream(device_id.as_deref(), &config).await
}

#[component]
pub fn ScanTab() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let config = ctx.config;

    let flow = RwSignal::new(ScanFlow::default());
    let availability = RwSignal::new(CameraAvailability::default());
    let cameras = RwSignal::new(Vec::<CameraDevice>::new());
    let selected_camera = RwSignal::new(None::<String>);
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let decode_loop = StoredValue::new_local(None::<DecodeLoop>);

    // Enumerate cameras on mount
    spawn_local(async move {
        let next = match enumerate_cameras().await {
            Ok(list) => {
                let next = CameraAvailability::from_count(list.len());
                let _ = cameras.try_set(list);
                next
            }
            Err(e) => {
                log::warn!("[SCAN] camera enumeration failed: {}", e);
                CameraAvailability::Unsupported
            }
        };
        let _ = availability.try_set(next);
    });

    on_cleanup(move || {
        let _ = decode_loop.try_update_value(|l| *l = None);
    });

    // Shared completion path for the live loop and uploads
    let finish = move |attempt: AttemptId, result: Result<String, ScanError>| {
        match result {
            Ok(text) => {
                let accepted = flow.try_update(|f| f.decoded(attempt, text.clone())).unwrap_or(false);
                if accepted {
                    log::info!("[SCAN] decoded {} chars", text.len());
                    store_set_scan(&store, text);
                    ctx.navigate(Tab::Recycling);
                }
            }
            Err(err) => {
                log::warn!("[SCAN] scan failed: {}", err);
                flow.try_update(|f| {
                    f.fail(attempt, err);
                });
            }
        }
        // Called from inside the loop's own tick; drop it afterwards
        spawn_local(async move {
            let _ = decode_loop.try_update_value(|l| *l = None);
        });
    };

    let fail = move |attempt: AttemptId, err: ScanError| {
        log::warn!("[SCAN] camera start failed: {}", err);
        flow.try_update(|f| {
            f.fail(attempt, err);
        });
    };

    let is_current = move |attempt: AttemptId| flow.try_with_untracked(|f| f.is_current(attempt)).unwrap_or(false);

    let start_camera = move |_| {
        if !availability.get_untracked().can_start() {
            return;
        }
        let Some(attempt) = flow.try_update(|f| f.begin_camera()).flatten() else {
            return;
        };
        let device_id = selected_camera.get_untracked();
        spawn_local(async move {
            let stream = match acquire_stream(device_id, config).await {
                Ok(stream) => stream,
                Err(err) => return fail(attempt, err),
            };
            if !flow.try_update(|f| f.camera_ready(attempt)).unwrap_or(false) {
                log::info!("[SCAN] camera start cancelled");
                stop_stream(&stream);
                return;
            }
            let Some(video) = video_ref.get_untracked() else {
                stop_stream(&stream);
                return fail(attempt, ScanError::Other("video preview unavailable".to_string()));
            };
            let attached = attach_stream(&video, &stream).await;
            if !is_current(attempt) {
                log::info!("[SCAN] camera stopped while starting");
                release_stream(&video, &stream);
                return;
            }
            if let Err(err) = attached {
                release_stream(&video, &stream);
                return fail(attempt, err);
            }
            let on_result = move |result| finish(attempt, result);
            match DecodeLoop::start(video, stream, config.decode_interval_ms, on_result) {
                Ok(running) => {
                    let _ = decode_loop.try_set_value(Some(running));
                }
                Err(err) => fail(attempt, err),
            }
        });
    };

    // Stop camera / dismiss result; safe from any state
    let reset = move |_| {
        flow.update(|f| f.reset());
        decode_loop.update_value(|l| *l = None);
    };

    let on_file = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Allow picking the same file again
        input.set_value("");
        let Some(file) = file else { return };
        let Some(attempt) = flow.try_update(|f| f.begin_image()).flatten() else {
            return;
        };
        spawn_local(async move {
            finish(attempt, decode_image_file(&file).await);
        });
    };

    let state = move || flow.with(|f| f.state().clone());
    let scanning = move || matches!(state(), ScanState::Scanning);
    let busy = move || flow.with(|f| f.is_busy());

    view! {
        <div class="scan-tab">
            <h2>"QR Code Scanner"</h2>
            <p class="tab-intro">"Scan the QR code on an electronic item to see how to recycle it."</p>

            <div class="scan-options">
                <div class="scan-option">
                    <h3>"Use Camera"</h3>
                    {move || match availability.get() {
                        CameraAvailability::Checking => view! {
                            <p class="scan-hint">"Looking for cameras..."</p>
                        }.into_any(),
                        CameraAvailability::NoCamera => view! {
                            <p class="scan-hint warning">{ScanError::NoCamera.to_string()}</p>
                        }.into_any(),
                        CameraAvailability::Unsupported => view! {
                            <p class="scan-hint warning">{ScanError::Unsupported.to_string()}</p>
                        }.into_any(),
                        CameraAvailability::Available(_) => view! {
                            <select
                                class="camera-select"
                                disabled=busy
                                on:change=move |ev| {
                                    let id = event_target_value(&ev);
                                    selected_camera.set(if id.is_empty() { None } else { Some(id) });
                                }
                            >
                                <option value="">"Default camera"</option>
                                {move || cameras.get().into_iter().map(|cam| view! {
                                    <option value=cam.device_id.clone()>{cam.label.clone()}</option>
                                }).collect_view()}
                            </select>
                        }.into_any(),
                    }}
                    <button
                        class="scan-btn primary"
                        disabled=move || busy() || !availability.get().can_start()
                        on:click=start_camera
                    >
                        "📷 Start Camera"
                    </button>
                </div>

                <div class="scan-option">
                    <h3>"Upload Photo"</h3>
                    <label class="scan-btn secondary" class:disabled=busy>
                        "🖼️ Choose Image"
                        <input
                            type="file"
                            accept="image/*"
                            class="visually-hidden"
                            disabled=busy
                            on:change=on_file
                        />
                    </label>
                </div>
            </div>

            <div class="scan-preview" class:active=scanning>
                <video node_ref=video_ref class="scan-video" playsinline="" prop:muted=true></video>
                <Show when=scanning>
                    <div class="scan-overlay">
                        <h3>"Scanning..."</h3>
                        <p>"Point the camera at a QR code"</p>
                        <button class="scan-btn danger" on:click=reset>"Stop Camera"</button>
                    </div>
                </Show>
            </div>

            {move || match state() {
                ScanState::Starting => view! {
                    <div class="scan-status">"Starting camera..."</div>
                }.into_any(),
                ScanState::DecodingImage => view! {
                    <div class="scan-status">"Reading image..."</div>
                }.into_any(),
                ScanState::Decoded(text) => view! {
                    <div class="scan-result success">
                        <h3>"✅ Scan Successful!"</h3>
                        <p class="scan-text">{text}</p>
                        <button class="scan-btn primary" on:click=move |_| ctx.navigate(Tab::Recycling)>
                            "View Recycling Info"
                        </button>
                        <button class="scan-btn secondary" on:click=reset>"Scan Another"</button>
                    </div>
                }.into_any(),
                ScanState::Failed(err) => view! {
                    <div class="scan-result error">
                        <h3>{format!("❌ {}", err.title())}</h3>
                        <p>{err.to_string()}</p>
                        <button class="scan-btn secondary" on:click=reset>"Try Again"</button>
                    </div>
                }.into_any(),
                ScanState::Idle | ScanState::Scanning => ().into_any(),
            }}
        </div>
    }
}

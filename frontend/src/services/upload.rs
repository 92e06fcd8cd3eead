//! Multipart upload service for the extraction backend.
//!
//! Sends every selected file in a single `FormData` POST and reports
//! transfer progress while the browser streams the body out. The request
//! goes through `XmlHttpRequest` because the fetch API has no way to
//! observe upload progress; the progress handler is registered on the
//! request's upload stream and completion is awaited through a one-shot
//! `Promise` resolved from the `loadend` event.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::config::{FALLBACK_ERROR_MESSAGE, UPLOAD_FIELD, UPLOAD_URL};
use crate::types::{AppError, AppResult, UploadResponse};

/// Percentage of a transfer, rounded to the nearest integer and clamped to
/// 100. `None` when the total is unknown, in which case the caller leaves
/// the previous value untouched rather than showing something nonsensical.
pub fn progress_percent(loaded: f64, total: f64) -> Option<u32> {
    if total > 0.0 && loaded >= 0.0 {
        Some(((loaded / total) * 100.0).round().min(100.0) as u32)
    } else {
        None
    }
}

/// Map the settled request to the caller-facing outcome.
///
/// 2xx bodies decode to [`UploadResponse`]; a body that is not JSON simply
/// carries no message. Any other status, including 0 for requests that never
/// reached the server, becomes [`AppError::TransferFailure`] carrying the
/// server-provided `message` when a non-empty one exists.
fn decode_outcome(status: u16, body: &str) -> AppResult<UploadResponse> {
    if (200..300).contains(&status) {
        Ok(serde_json::from_str(body).unwrap_or_default())
    } else {
        let message = serde_json::from_str::<UploadResponse>(body)
            .ok()
            .and_then(|response| response.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        Err(AppError::TransferFailure(message))
    }
}

/// Log the transport-level detail and surface the generic banner text.
fn transport_error<E: std::fmt::Debug>(err: E) -> AppError {
    log::error!("Upload transport failure: {:?}", err);
    AppError::TransferFailure(FALLBACK_ERROR_MESSAGE.to_string())
}

/// Upload every selected file in one multipart POST.
///
/// `on_progress` receives the integer percentage each time the browser
/// reports transfer progress with a known total. Resolves once the request
/// settles: `Ok` carries the decoded response body for the success path,
/// `Err` the banner-ready failure. No retry happens here; the user
/// resubmits manually.
pub async fn upload_files(
    files: &[File],
    on_progress: impl Fn(u32) + 'static,
) -> AppResult<UploadResponse> {
    let form = FormData::new().map_err(transport_error)?;
    for file in files {
        form.append_with_blob(UPLOAD_FIELD, file)
            .map_err(transport_error)?;
    }

    let xhr = XmlHttpRequest::new().map_err(transport_error)?;
    // The multipart Content-Type (with its boundary) is supplied by the
    // browser for FormData bodies; setting the header by hand would lose it.
    xhr.open("POST", UPLOAD_URL).map_err(transport_error)?;

    let upload = xhr.upload().map_err(transport_error)?;
    let progress_handler = Closure::wrap(Box::new(move |event: ProgressEvent| {
        if event.length_computable() {
            if let Some(percent) = progress_percent(event.loaded(), event.total()) {
                on_progress(percent);
            }
        }
    }) as Box<dyn FnMut(ProgressEvent)>);
    upload.set_onprogress(Some(progress_handler.as_ref().unchecked_ref()));

    // loadend fires exactly once, after load, error and abort alike.
    let settled = Promise::new(&mut |resolve, _reject| {
        let on_loadend = Closure::once_into_js(move |_: ProgressEvent| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        xhr.set_onloadend(Some(on_loadend.unchecked_ref()));
    });

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(transport_error)?;
    let _ = JsFuture::from(settled).await;

    // Only dropped after loadend, so the JS handler never hits a freed
    // closure.
    drop(progress_handler);

    let status = xhr.status().map_err(transport_error)?;
    let body = xhr.response_text().ok().flatten().unwrap_or_default();
    decode_outcome(status, &body)
}

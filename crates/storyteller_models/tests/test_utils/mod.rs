//! In-process stand-in for the HuggingFace Inference API.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A request received by the fake server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub model: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct FakeState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Handle to a running fake inference server.
pub struct FakeInference {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeInference {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a fake server on an ephemeral port.
///
/// Routes under `/models/{owner}/{name}` or `/models/{name}`:
/// - `gpt2`, `echo-writer`: text generation
/// - `painter/*`: a 4x2 PNG
/// - `speaker/*`: 0.5 s of 16 kHz mono WAV
/// - `broken`: 503 with a JSON error body
pub async fn spawn_fake_inference() -> FakeInference {
    let state = FakeState::default();
    let requests = state.requests.clone();

    let app = Router::new()
        .route("/models/:name", post(single))
        .route("/models/:owner/:name", post(owned))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeInference {
        base_url: format!("http://{}/models", addr),
        requests,
    }
}

async fn single(
    State(state): State<FakeState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(&state, name, &headers, &body)
}

async fn owned(
    State(state): State<FakeState>,
    Path((owner, name)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    respond(&state, format!("{}/{}", owner, name), &headers, &body)
}

fn respond(state: &FakeState, model: String, headers: &HeaderMap, body: &Bytes) -> Response {
    let body: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        model: model.clone(),
        authorization,
        body: body.clone(),
    });

    let prompt = body["inputs"].as_str().unwrap_or_default().to_string();

    if model == "broken" {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": "Model broken is currently loading"})),
        )
            .into_response();
    }
    if model == "echo-writer" {
        // Ignores return_full_text and echoes the prompt
        return Json(json!([{"generated_text": format!("{} And then it rained.", prompt)}]))
            .into_response();
    }
    if model.starts_with("painter/") {
        return ([(header::CONTENT_TYPE, "image/png")], png_bytes()).into_response();
    }
    if model.starts_with("speaker/") {
        return ([(header::CONTENT_TYPE, "audio/wav")], wav_bytes()).into_response();
    }

    let seed = body["parameters"]["seed"].as_u64().unwrap_or_default();
    Json(json!([{"generated_text": format!(" The end (seed {}).", seed)}])).into_response()
}

fn png_bytes() -> Vec<u8> {
    let image = image::RgbImage::from_pixel(4, 2, image::Rgb([200, 10, 10]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

fn wav_bytes() -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut out = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut out, spec).unwrap();
        for i in 0..8_000 {
            writer.write_sample((i % 100) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }
    out.into_inner()
}

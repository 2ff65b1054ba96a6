// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Test helpers: stub joke endpoints served from a throwaway port, and a
//! logger that captures what the crate logs.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::Once;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;
use std::thread::ThreadId;

use axum::Router;
use axum::http::HeaderMap;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::ACCEPT;
use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use log::Level;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;
use tokio::net::TcpListener;

use crate::error::ErrorReport;
use crate::error::Fallible;

pub const JOKE_JSON: &str =
    r#"{"id":"123","joke":"Why did the chicken cross the road?","status":200}"#;

/// Serves `app` on a free local port and returns its root URL. The listener
/// is bound before this returns, so the stub is ready to take requests.
pub async fn serve_stub(app: Router) -> Fallible<String> {
    let port =
        portpicker::pick_unused_port().ok_or_else(|| ErrorReport::new("no free port"))?;
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://127.0.0.1:{port}/"))
}

/// Answers with `JOKE_JSON`, but only to clients that ask for JSON.
pub async fn joke_handler(
    headers: HeaderMap,
) -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    let wants_json = headers
        .get(ACCEPT)
        .is_some_and(|value| value == "application/json");
    if wants_json {
        (StatusCode::OK, [(CONTENT_TYPE, "application/json")], JOKE_JSON)
    } else {
        (StatusCode::OK, [(CONTENT_TYPE, "text/html")], "<p>joke</p>")
    }
}

/// Serves a different joke on every request: `joke-1`, `joke-2`, and so on.
pub fn counting_stub() -> Router {
    let counter = Arc::new(AtomicUsize::new(0));
    Router::new().route(
        "/",
        get(move || {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                format!(r#"{{"id":"{n}","joke":"joke-{n}","status":200}}"#)
            }
        }),
    )
}

/// Records every entry logged by this crate, tagged with the emitting thread.
/// Each test runs on its own thread, so tests only see their own entries.
struct CapturingLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

static INSTALL_LOGGER: Once = Once::new();

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut records = self.records.lock().unwrap();
            records.push((
                thread::current().id(),
                record.level(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

/// Installs the capturing logger. Safe to call from every test.
pub fn capture_logs() {
    INSTALL_LOGGER.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    });
}

/// The error entries logged so far on the calling thread.
pub fn logged_errors() -> Vec<String> {
    let current = thread::current().id();
    let records = LOGGER.records.lock().unwrap();
    records
        .iter()
        .filter(|(id, level, _)| *id == current && *level == Level::Error)
        .map(|(_, _, message)| message.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_stub() -> Fallible<()> {
        let url = serve_stub(counting_stub()).await?;
        let first = reqwest::get(&url).await?.text().await?;
        let second = reqwest::get(&url).await?.text().await?;
        assert!(first.contains("joke-1"));
        assert!(second.contains("joke-2"));
        Ok(())
    }

    #[test]
    fn test_capture_logs() {
        capture_logs();
        let before = logged_errors().len();
        log::error!("herp");
        log::debug!("derp");
        let errors = logged_errors();
        assert_eq!(errors.len(), before + 1);
        assert_eq!(errors.last().map(String::as_str), Some("herp"));
    }
}

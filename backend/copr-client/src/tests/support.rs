//! Test doubles for the transport seam and the `log` facade.

use crate::config::{CoprConfiguration, Credentials};
use crate::error::RpcError;
use crate::transport::{HttpMethod, Transport, TransportRequest, TransportResponse};

use common::{HttpStatusCode, RedactedToken};

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

pub const TEST_BASE_URL: &str = "https://copr.example.org";

/// What the scripted transport saw for one call.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub arguments: BTreeMap<String, String>,
    pub login: Option<String>,
}

/// Answers every call with the same canned response and counts invocations.
pub struct ScriptedTransport {
    response: TransportResponse,
    pub calls: Rc<Cell<usize>>,
    pub releases: Rc<Cell<usize>>,
    pub requests: Rc<RefCell<Vec<RecordedRequest>>>,
}

impl ScriptedTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: TransportResponse {
                status: HttpStatusCode(status),
                body: body.to_string(),
            },
            calls: Rc::new(Cell::new(0)),
            releases: Rc::new(Cell::new(0)),
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("transport was never called")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: TransportRequest<'_>) -> Result<TransportResponse, RpcError> {
        self.calls.set(self.calls.get() + 1);
        self.requests.borrow_mut().push(RecordedRequest {
            method: request.method,
            url: request.url.to_string(),
            arguments: request.arguments,
            login: request.credentials.map(|c| c.login().to_string()),
        });
        Ok(self.response.clone())
    }

    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

pub fn anonymous_configuration() -> CoprConfiguration {
    CoprConfiguration::new(TEST_BASE_URL, "alice", None).expect("valid configuration")
}

pub fn authenticated_configuration() -> CoprConfiguration {
    let credentials = Credentials::new("alice-login", RedactedToken::new("alice-token"));
    CoprConfiguration::new(TEST_BASE_URL, "alice", Some(credentials)).expect("valid configuration")
}

// ============================================
// LOG CAPTURE
// ============================================

static CAPTURED_LOGS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INSTALL_CAPTURE: Once = Once::new();

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut logs) = CAPTURED_LOGS.lock() {
            logs.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

/// Route every log record of this test binary into memory. Tests run in
/// parallel, so look records up by a marker unique to the test.
pub fn capture_logs() {
    INSTALL_CAPTURE.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

pub fn captured_logs_containing(marker: &str) -> Vec<(Level, String)> {
    CAPTURED_LOGS
        .lock()
        .map(|logs| {
            logs.iter()
                .filter(|(_, message)| message.contains(marker))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

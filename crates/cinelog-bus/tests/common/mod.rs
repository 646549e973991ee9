//! Shared fixtures for bus integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cinelog_core::error::EventError;
use cinelog_core::event::{Event, EventMeta};
use cinelog_core::handler::EventHandler;
use serde::{Deserialize, Serialize};

pub const PING: &str = "test.ping";
pub const NOTE: &str = "test.note";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingPayload {
    pub seq: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub text: String,
}

/// A two-kind closed event set, enough to exercise multi-topic behavior.
#[derive(Debug, Clone)]
pub enum TestEvent {
    Ping { meta: EventMeta, payload: PingPayload },
    Note { meta: EventMeta, payload: NotePayload },
}

impl TestEvent {
    pub fn ping(seq: u32) -> Self {
        Self::Ping {
            meta: EventMeta::new(),
            payload: PingPayload { seq },
        }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::Note {
            meta: EventMeta::new(),
            payload: NotePayload { text: text.into() },
        }
    }

    pub fn ping_seq(&self) -> Option<u32> {
        match self {
            Self::Ping { payload, .. } => Some(payload.seq),
            Self::Note { .. } => None,
        }
    }
}

impl Event for TestEvent {
    fn meta(&self) -> &EventMeta {
        match self {
            Self::Ping { meta, .. } | Self::Note { meta, .. } => meta,
        }
    }

    fn event_type(&self) -> &'static str {
        match self {
            Self::Ping { .. } => PING,
            Self::Note { .. } => NOTE,
        }
    }

    fn encode_payload(&self) -> Result<Vec<u8>, EventError> {
        match self {
            Self::Ping { payload, .. } => serde_json::to_vec(payload).map_err(EventError::Encode),
            Self::Note { payload, .. } => serde_json::to_vec(payload).map_err(EventError::Encode),
        }
    }
}

pub fn decode_ping(bytes: &[u8]) -> Result<TestEvent, EventError> {
    let payload: PingPayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(TestEvent::Ping {
        meta: EventMeta::new(),
        payload,
    })
}

pub fn decode_note(bytes: &[u8]) -> Result<TestEvent, EventError> {
    let payload: NotePayload = serde_json::from_slice(bytes).map_err(EventError::Decode)?;
    Ok(TestEvent::Note {
        meta: EventMeta::new(),
        payload,
    })
}

/// A handler that appends its name to a shared log on every delivery, for
/// asserting dispatch order across handlers.
pub struct NamedHandler {
    name: &'static str,
    accepts: Vec<String>,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl NamedHandler {
    pub fn new(
        name: &'static str,
        accepts: &[&str],
        log: Arc<Mutex<Vec<&'static str>>>,
    ) -> Self {
        Self {
            name,
            accepts: accepts.iter().map(|tag| (*tag).to_owned()).collect(),
            log,
        }
    }
}

#[async_trait]
impl EventHandler<TestEvent> for NamedHandler {
    async fn handle(&self, _event: &TestEvent) -> Result<(), EventError> {
        self.log.lock().unwrap().push(self.name);
        Ok(())
    }

    fn can_handle(&self, event_type: &str) -> bool {
        self.accepts.iter().any(|tag| tag == event_type)
    }
}

/// Poll `condition` until it holds or the deadline passes.
pub async fn wait_until(condition: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not reached within deadline"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

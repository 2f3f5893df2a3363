//! Scripted transport for testing
//!
//! Replays queued responses in order and records every request it receives,
//! so tests can assert both on decoded results and on the exact wire calls.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use confluence_content::confluence::{ApiRequest, Transport, TransportError};

/// A fake transport that answers from a queue without touching the network
pub struct FakeTransport {
  responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
  requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
  /// Create a transport with no queued responses
  pub fn new() -> Self {
    Self {
      responses: Mutex::new(VecDeque::new()),
      requests: Mutex::new(Vec::new()),
    }
  }

  /// Queue a successful JSON response
  pub fn push_json(&self, json: serde_json::Value) -> &Self {
    self
      .responses
      .lock()
      .unwrap()
      .push_back(Ok(serde_json::to_vec(&json).unwrap()));
    self
  }

  /// Queue a raw response body
  pub fn push_raw(&self, body: &[u8]) -> &Self {
    self.responses.lock().unwrap().push_back(Ok(body.to_vec()));
    self
  }

  /// Queue a failure
  pub fn push_error(&self, error: TransportError) -> &Self {
    self.responses.lock().unwrap().push_back(Err(error));
    self
  }

  /// Every request received so far, in order
  pub fn requests(&self) -> Vec<ApiRequest> {
    self.requests.lock().unwrap().clone()
  }
}

impl Default for FakeTransport {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl Transport for FakeTransport {
  async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
    self.requests.lock().unwrap().push(request);
    self
      .responses
      .lock()
      .unwrap()
      .pop_front()
      .unwrap_or_else(|| Err(TransportError::Request("no response queued".to_string())))
  }
}

//! In-memory `SessionApi` for unit tests. Responses are scripted up front and
//! every call is recorded so tests can assert that nothing hit the network.

use crate::api::{ApiError, Credentials, Registration, SessionApi};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;

pub(crate) struct FakeApi {
    logins: Mutex<VecDeque<Result<Value, ApiError>>>,
    session: Result<bool, ApiError>,
    logout: Result<(), ApiError>,
    register: Result<Value, ApiError>,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self {
            logins: Mutex::new(VecDeque::from([Ok(json!({"message": "ok"}))])),
            session: Ok(true),
            logout: Ok(()),
            register: Ok(Value::Null),
            gate: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replaces every scripted login response with `result`.
    pub(crate) fn with_login(self, result: Result<Value, ApiError>) -> Self {
        *lock(&self.logins) = VecDeque::from([result]);
        self
    }

    /// Queues a response for the next login after the scripted ones.
    pub(crate) fn then_login(self, result: Result<Value, ApiError>) -> Self {
        lock(&self.logins).push_back(result);
        self
    }

    pub(crate) fn with_session(mut self, result: Result<bool, ApiError>) -> Self {
        self.session = result;
        self
    }

    pub(crate) fn with_logout(mut self, result: Result<(), ApiError>) -> Self {
        self.logout = result;
        self
    }

    pub(crate) fn with_register(mut self, result: Result<Value, ApiError>) -> Self {
        self.register = result;
        self
    }

    /// Makes `login` wait until the gate is notified.
    pub(crate) fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: String) {
        lock(&self.calls).push(call);
    }

    fn next_login(&self) -> Result<Value, ApiError> {
        let mut logins = lock(&self.logins);
        if logins.len() > 1 {
            logins.pop_front().unwrap_or(Ok(Value::Null))
        } else {
            logins.front().cloned().unwrap_or(Ok(Value::Null))
        }
    }
}

impl SessionApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        self.record(format!("login:{}", credentials.email));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.next_login()
    }

    async fn check_session(&self) -> Result<bool, ApiError> {
        self.record("check_session".to_string());
        self.session.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout".to_string());
        self.logout.clone()
    }

    async fn register(&self, registration: &Registration) -> Result<Value, ApiError> {
        self.record(format!("register:{}", registration.email));
        self.register.clone()
    }
}

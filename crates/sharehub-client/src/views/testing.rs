//! In-process fake of the backend for view tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use sharehub_auth::{LoginCredentials, Registration};
use sharehub_entity::Resource;

use crate::api::ShareHubApi;
use crate::error::{ClientError, Result};
use crate::types::{LoginResponse, RegisterResponse, UploadRequest, UploadResponse};

type Reply<T> = Box<dyn Fn() -> Result<T> + Send + Sync>;

pub(crate) struct FakeApi {
    pub login: Reply<LoginResponse>,
    pub register: Reply<RegisterResponse>,
    pub explore: Reply<Vec<Resource>>,
    pub upload: Reply<UploadResponse>,
    pub calls: AtomicUsize,
    pub last_upload: Mutex<Option<(UploadRequest, Option<String>)>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login: Box::new(|| Ok(LoginResponse::default())),
            register: Box::new(|| Ok(RegisterResponse::default())),
            explore: Box::new(|| Ok(Vec::new())),
            upload: Box::new(|| Ok(UploadResponse::default())),
            calls: AtomicUsize::new(0),
            last_upload: Mutex::new(None),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub(crate) fn transport_error() -> ClientError {
    ClientError::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

pub(crate) fn resource(id: &str, name: &str, category: Option<&str>) -> Resource {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "category": category.map(|c| serde_json::json!({ "name": c })),
    }))
    .unwrap()
}

#[async_trait]
impl ShareHubApi for FakeApi {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<LoginResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.login)()
    }

    async fn register(&self, _registration: &Registration) -> Result<RegisterResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.register)()
    }

    async fn explore(&self) -> Result<Vec<Resource>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.explore)()
    }

    async fn upload(
        &self,
        request: &UploadRequest,
        token: Option<&str>,
    ) -> Result<UploadResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_upload.lock().unwrap() = Some((request.clone(), token.map(str::to_string)));
        (self.upload)()
    }
}

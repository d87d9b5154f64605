//! Remote procedure client
//!
//! Thin JSON client over the backend's RPC surface. All validation,
//! authorization and storage live on the server; this module only shapes
//! requests and decodes responses. Every call returns `Result` and the
//! panels that consume it keep failures local (inline message, last good
//! data preserved).

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "/api";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("falha de conexão: {0}")]
    Network(String),
    #[error("o servidor recusou a operação (status {0})")]
    Status(u16),
    #[error("resposta inesperada do servidor: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Rich text overriding a template's static section for one ceremony type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeremonyText {
    pub id: String,
    pub ceremony_type: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub active: bool,
}

/// Payload for creating or updating a gift; the server assigns ids.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestMessage {
    pub id: String,
    pub author: String,
    pub content: String,
    pub approved: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestMessageInput {
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpEntry {
    pub id: String,
    pub name: String,
    pub guests: u32,
    pub confirmed_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpInput {
    pub name: String,
    pub guests: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
}

async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = Request::get(&format!("{API_BASE}{path}"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: &B,
) -> ApiResult<T> {
    let url = format!("{API_BASE}{path}");
    let builder = match method {
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        "PATCH" => Request::patch(&url),
        _ => Request::delete(&url),
    };
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

// Ceremony texts

pub async fn fetch_ceremony_texts() -> ApiResult<Vec<CeremonyText>> {
    get_json("/ceremony-texts").await
}

pub async fn update_ceremony_text(id: &str, content: &str) -> ApiResult<CeremonyText> {
    send_json(
        "PUT",
        &format!("/ceremony-texts/{id}"),
        &serde_json::json!({ "content": content }),
    )
    .await
}

// Gifts

pub async fn fetch_gifts() -> ApiResult<Vec<Gift>> {
    get_json("/gifts").await
}

pub async fn create_gift(input: &GiftInput) -> ApiResult<Gift> {
    send_json("POST", "/gifts", input).await
}

pub async fn update_gift(id: &str, input: &GiftInput) -> ApiResult<Gift> {
    send_json("PUT", &format!("/gifts/{id}"), input).await
}

/// Soft delete: the server flips `active` off, nothing is erased.
pub async fn deactivate_gift(id: &str) -> ApiResult<Gift> {
    send_json(
        "PATCH",
        &format!("/gifts/{id}"),
        &serde_json::json!({ "active": false }),
    )
    .await
}

pub async fn upload_image(file_name: &str, data_base64: &str) -> ApiResult<UploadedImage> {
    send_json(
        "POST",
        "/images",
        &serde_json::json!({ "fileName": file_name, "data": data_base64 }),
    )
    .await
}

// Guest messages

/// Public variant: approved messages only.
pub async fn fetch_public_messages() -> ApiResult<Vec<GuestMessage>> {
    get_json("/messages?approved=true").await
}

/// Admin variant: everything, pending included.
pub async fn fetch_all_messages() -> ApiResult<Vec<GuestMessage>> {
    get_json("/messages").await
}

pub async fn submit_message(input: &GuestMessageInput) -> ApiResult<GuestMessage> {
    send_json("POST", "/messages", input).await
}

pub async fn set_message_approval(id: &str, approved: bool) -> ApiResult<GuestMessage> {
    send_json(
        "PATCH",
        &format!("/messages/{id}"),
        &serde_json::json!({ "approved": approved }),
    )
    .await
}

pub async fn delete_message(id: &str) -> ApiResult<GuestMessage> {
    send_json(
        "PATCH",
        &format!("/messages/{id}"),
        &serde_json::json!({ "deleted": true }),
    )
    .await
}

// RSVPs

pub async fn submit_rsvp(input: &RsvpInput) -> ApiResult<RsvpEntry> {
    send_json("POST", "/rsvps", input).await
}

pub async fn fetch_confirmed_rsvps() -> ApiResult<Vec<RsvpEntry>> {
    get_json("/rsvps?confirmed=true").await
}

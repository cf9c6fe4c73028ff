use serde::Deserialize;

/// One detection request: exactly one image source plus an optional
/// username label.
///
/// Deserializes directly from the JSON body form
/// `{"imageBase64": "...", "username": "..."}`; binary uploads are
/// attached through [`FaceRequest::from_bytes`]. When both sources are
/// present, the binary upload silently wins (observable contract).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FaceRequest {
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
    #[serde(rename = "imageBase64", default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl FaceRequest {
    pub fn from_bytes(image: Vec<u8>, username: Option<String>) -> Self {
        Self {
            image: Some(image),
            image_base64: None,
            username,
        }
    }

    pub fn from_base64(payload: impl Into<String>, username: Option<String>) -> Self {
        Self {
            image: None,
            image_base64: Some(payload.into()),
            username,
        }
    }

    /// The persistence gate: a username that is present and non-empty.
    pub fn effective_username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }
}

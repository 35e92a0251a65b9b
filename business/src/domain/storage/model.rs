use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::UserId;

/// Bucket holding every uploaded product image.
pub const PRODUCT_IMAGES_BUCKET: &str = "product-images";

/// Key of an object inside [`PRODUCT_IMAGES_BUCKET`], e.g. `"<user-id>/photo.png"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Derives the object key from a public image location by dropping
    /// everything up to and including the first `product-images/`.
    ///
    /// Returns `None` when the location does not point into the bucket or
    /// nothing follows the bucket name.
    pub fn from_image_url(url: &str) -> Option<Self> {
        let marker = format!("{}/", PRODUCT_IMAGES_BUCKET);
        let start = url.find(&marker)? + marker.len();
        let key = &url[start..];
        if key.is_empty() {
            return None;
        }
        Some(Self(key.to_string()))
    }

    /// First path segment, which by convention is the uploader's user id.
    pub fn owner_segment(&self) -> &str {
        match self.0.split_once('/') {
            Some((head, _)) => head,
            None => &self.0,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_segment() == user_id.as_str()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoragePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An object the storage service reports as removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredObject {
    pub name: String,
    pub id: Option<String>,
    pub bucket_id: Option<String>,
    pub owner: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl StoredObject {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            bucket_id: None,
            owner: None,
            created_at: None,
            updated_at: None,
        }
    }
}

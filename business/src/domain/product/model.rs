use super::value_objects::ProductId;
use crate::domain::shared::value_objects::UserId;
use crate::domain::storage::model::StoragePath;

/// The slice of a product row needed to delete it safely: who owns it and
/// which uploaded images hang off it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub owner_id: UserId,
    pub image_urls: Vec<String>,
}

impl ProductRecord {
    pub fn from_repository(id: ProductId, owner_id: UserId, image_urls: Vec<String>) -> Self {
        Self {
            id,
            owner_id,
            image_urls,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Storage keys of the product images, in the order they were stored.
    /// Locations outside the image bucket are returned separately so the
    /// caller can report them.
    pub fn image_storage_paths(&self) -> (Vec<StoragePath>, Vec<&str>) {
        let mut paths = Vec::with_capacity(self.image_urls.len());
        let mut unmapped = Vec::new();
        for url in &self.image_urls {
            match StoragePath::from_image_url(url) {
                Some(path) => paths.push(path),
                None => unmapped.push(url.as_str()),
            }
        }
        (paths, unmapped)
    }
}

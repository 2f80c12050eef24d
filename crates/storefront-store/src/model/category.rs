use crate::model::Product;
use resource_store::FormPart;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// An image file attached to a multipart create/update request.
#[derive(Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Payload for creating a category. The image is optional; a category
/// created with only a name keeps `image` as `None`.
#[derive(Debug, Clone, Default)]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Payload for updating a category; absent fields are left unchanged by the
/// backend.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

impl CategoryCreate {
    /// Multipart form for `POST /categories`.
    pub fn into_parts(self) -> Vec<FormPart> {
        let mut parts = vec![FormPart::text("name", self.name)];
        if let Some(description) = self.description {
            parts.push(FormPart::text("description", description));
        }
        if let Some(image) = self.image {
            parts.push(image.into_part());
        }
        parts
    }
}

impl CategoryUpdate {
    /// Multipart form for `PUT /categories/:id`.
    pub fn into_parts(self) -> Vec<FormPart> {
        let mut parts = Vec::new();
        if let Some(name) = self.name {
            parts.push(FormPart::text("name", name));
        }
        if let Some(description) = self.description {
            parts.push(FormPart::text("description", description));
        }
        if let Some(image) = self.image {
            parts.push(image.into_part());
        }
        parts
    }
}

impl ImageUpload {
    fn into_part(self) -> FormPart {
        FormPart::file("image", self.filename, self.content_type, self.data)
    }
}

/// One page of products under a category, with the backend's pagination
/// counters stored verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProductsPage {
    pub products: Vec<Product>,
    pub total_pages: u32,
    pub current_page: u32,
    pub total_products: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_store::FormValue;

    #[test]
    fn create_with_only_name_builds_a_single_part() {
        let parts = CategoryCreate {
            name: "Boards".into(),
            ..Default::default()
        }
        .into_parts();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "name");
    }

    #[test]
    fn image_becomes_a_file_part() {
        let parts = CategoryCreate {
            name: "Boards".into(),
            description: None,
            image: Some(ImageUpload {
                filename: "boards.png".into(),
                content_type: "image/png".into(),
                data: vec![1, 2, 3],
            }),
        }
        .into_parts();

        assert_eq!(parts.len(), 2);
        match &parts[1].value {
            FormValue::File { filename, .. } => assert_eq!(filename, "boards.png"),
            FormValue::Text(_) => panic!("image must be a file part"),
        }
    }
}

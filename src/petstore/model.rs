//! Pet-store wire types
//!
//! Optional fields are omitted from the JSON entirely when unset, which is
//! how the negative scenarios build payloads without a name or photos.

use serde::{Deserialize, Serialize};

pub const SAMPLE_DOG_IMAGE: &str = "https://pixabay.com/images/id-4372036/";
pub const SAMPLE_CAT_IMAGE: &str = "https://pixabay.com/images/id-2934720/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

/// A pet as sent to and returned by the `/pet` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

impl Pet {
    fn of_species(id: i64, species: &str, tag: &str) -> Self {
        Self {
            id,
            category: Some(Category {
                id: 0,
                name: species.to_string(),
            }),
            name: None,
            photo_urls: None,
            tags: vec![Tag {
                id: 0,
                name: tag.to_string(),
            }],
            status: Some(PetStatus::Available),
        }
    }

    /// A complete, valid dog
    pub fn dog(id: i64, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            photo_urls: Some(vec![SAMPLE_DOG_IMAGE.to_string()]),
            ..Self::of_species(id, "dogs", "dog")
        }
    }

    /// A cat with a photo but no name
    pub fn cat_without_name(id: i64) -> Self {
        Self {
            photo_urls: Some(vec![SAMPLE_CAT_IMAGE.to_string()]),
            ..Self::of_species(id, "cats", "cat")
        }
    }

    /// A named cat with no photo URLs
    pub fn cat_without_photo(id: i64, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::of_species(id, "cats", "cat")
        }
    }
}

/// Error body returned by the API, e.g. `{"code":1,"type":"error","message":"Pet not found"}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dog_payload_shape() {
        let value = serde_json::to_value(Pet::dog(1_700_000_000_000, "Rex")).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1_700_000_000_000_i64,
                "category": { "id": 0, "name": "dogs" },
                "name": "Rex",
                "photoUrls": [SAMPLE_DOG_IMAGE],
                "tags": [{ "id": 0, "name": "dog" }],
                "status": "available"
            })
        );
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let no_name = serde_json::to_value(Pet::cat_without_name(7)).unwrap();
        assert!(no_name.get("name").is_none());
        assert_eq!(no_name["photoUrls"][0], SAMPLE_CAT_IMAGE);

        let no_photo = serde_json::to_value(Pet::cat_without_photo(8, "Tom")).unwrap();
        assert!(no_photo.get("photoUrls").is_none());
        assert_eq!(no_photo["name"], "Tom");
        assert_eq!(no_photo["category"]["name"], "cats");
    }

    #[test]
    fn test_parse_error_body() {
        let body: ApiErrorBody =
            serde_json::from_value(json!({"code": 1, "type": "error", "message": "Pet not found"}))
                .unwrap();
        assert_eq!(body.kind, "error");
        assert_eq!(body.code, Some(1));
        assert!(body.message.contains("Pet not found"));
    }
}

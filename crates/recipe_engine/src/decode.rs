use recipe_core::Recipe;
use serde::Deserialize;
use url::Url;

use crate::{InvalidDataKind, RecipeError};

#[derive(Debug, Deserialize)]
struct Envelope {
    recipes: Vec<WireRecipe>,
}

#[derive(Debug, Deserialize)]
struct WireRecipe {
    cuisine: String,
    name: String,
    #[serde(default)]
    photo_url_large: Option<Url>,
    #[serde(default)]
    photo_url_small: Option<Url>,
    uuid: String,
    #[serde(default)]
    source_url: Option<Url>,
    #[serde(default)]
    youtube_url: Option<Url>,
}

impl From<WireRecipe> for Recipe {
    fn from(wire: WireRecipe) -> Self {
        Recipe {
            id: wire.uuid,
            name: wire.name,
            cuisine: wire.cuisine,
            photo_url_large: wire.photo_url_large,
            photo_url_small: wire.photo_url_small,
            source_url: wire.source_url,
            youtube_url: wire.youtube_url,
        }
    }
}

/// Decode a `{"recipes": [...]}` document. One malformed record fails the whole document.
pub fn decode_envelope(bytes: &[u8]) -> Result<Vec<Recipe>, RecipeError> {
    let envelope: Envelope = serde_json::from_slice(bytes)
        .map_err(|_| RecipeError::InvalidData(InvalidDataKind::MalformedPayload))?;
    Ok(envelope.recipes.into_iter().map(Recipe::from).collect())
}

#[cfg(test)]
mod tests {
    use super::decode_envelope;
    use crate::{InvalidDataKind, RecipeError};

    const MALFORMED: RecipeError = RecipeError::InvalidData(InvalidDataKind::MalformedPayload);

    #[test]
    fn decodes_records_in_order() {
        let json = br#"{"recipes":[
            {"cuisine":"Malaysian","name":"Apam Balik","uuid":"0c6ca6e7",
             "photo_url_large":"https://img.example.com/large.jpg",
             "photo_url_small":"https://img.example.com/small.jpg",
             "source_url":"https://www.nyonyacooking.com/recipes/apam-balik",
             "youtube_url":"https://www.youtube.com/watch?v=6R8ffRRJcrg"},
            {"cuisine":"British","name":"Apple Frangipan Tart","uuid":"599344f4",
             "photo_url_large":null,"photo_url_small":null,"youtube_url":null}
        ]}"#;

        let recipes = decode_envelope(json).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, "0c6ca6e7");
        assert_eq!(recipes[0].name, "Apam Balik");
        assert_eq!(
            recipes[0].youtube_url.as_ref().map(|u| u.as_str()),
            Some("https://www.youtube.com/watch?v=6R8ffRRJcrg")
        );
        assert_eq!(recipes[1].id, "599344f4");
        assert_eq!(recipes[1].photo_url_large, None);
        assert_eq!(recipes[1].source_url, None);
        assert_eq!(recipes[1].youtube_url, None);
    }

    #[test]
    fn empty_list_decodes() {
        assert!(decode_envelope(br#"{"recipes":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_required_field_fails_whole_document() {
        let json = br#"{"recipes":[
            {"cuisine":"British","name":"Bakewell Tart","uuid":"1"},
            {"cuisine":"British","uuid":"2"}
        ]}"#;
        assert_eq!(decode_envelope(json), Err(MALFORMED));
    }

    #[test]
    fn wrong_value_type_fails() {
        let json = br#"{"recipes":[{"cuisine":"British","name":42,"uuid":"1"}]}"#;
        assert_eq!(decode_envelope(json), Err(MALFORMED));
    }

    #[test]
    fn invalid_url_fails() {
        let json = br#"{"recipes":[{"cuisine":"British","name":"Tart","uuid":"1","source_url":"not a url"}]}"#;
        assert_eq!(decode_envelope(json), Err(MALFORMED));
    }

    #[test]
    fn corrupted_or_wrong_shape_fails() {
        let bodies: [&[u8]; 5] = [b"", b"{", b"[]", b"{\"items\":[]}", b"\xff\xfe"];
        for body in bodies {
            assert_eq!(decode_envelope(body), Err(MALFORMED));
        }
    }
}

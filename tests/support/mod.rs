//! In-process fake of the pet-store API built on wiremock
//!
//! Behaves like the public pet store for the calls the suite makes:
//! POST /pet stores valid pets and rejects ones without name or photos,
//! GET /pet/{id} returns the stored pet or "Pet not found".

#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// How the fake reacts to pets with missing required fields
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Reject with 405 like the documented API
    Strict,
    /// Accept and store anything
    Lenient,
}

#[derive(Clone, Default)]
pub struct Pets(Arc<Mutex<HashMap<i64, Value>>>);

impl Pets {
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.0.lock().unwrap().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

struct CreatePet {
    pets: Pets,
    validation: Validation,
}

impl Respond for CreatePet {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return ResponseTemplate::new(400)
                .set_body_json(json!({"code": 400, "type": "error", "message": "bad input"}));
        };

        let complete = body.get("name").is_some() && body.get("photoUrls").is_some();
        if self.validation == Validation::Strict && !complete {
            return ResponseTemplate::new(405)
                .set_body_json(json!({"code": 405, "type": "error", "message": "Invalid input"}));
        }

        let id = body["id"].as_i64().unwrap_or_default();
        self.pets.0.lock().unwrap().insert(id, body.clone());
        ResponseTemplate::new(200).set_body_json(body)
    }
}

struct FindPet {
    pets: Pets,
}

impl Respond for FindPet {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = request
            .url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .and_then(|segment| segment.parse::<i64>().ok());

        match id.and_then(|id| self.pets.0.lock().unwrap().get(&id).cloned()) {
            Some(pet) => ResponseTemplate::new(200).set_body_json(pet),
            None => ResponseTemplate::new(404)
                .set_body_json(json!({"code": 1, "type": "error", "message": "Pet not found"})),
        }
    }
}

/// Start a fake pet store, returning the server and a view of stored pets
pub async fn fake_pet_store(validation: Validation) -> (MockServer, Pets) {
    let server = MockServer::start().await;
    let pets = Pets::default();

    Mock::given(method("POST"))
        .and(path("/pet"))
        .respond_with(CreatePet {
            pets: pets.clone(),
            validation,
        })
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/pet/-?\d+$"))
        .respond_with(FindPet { pets: pets.clone() })
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/store/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"available": 1})))
        .mount(&server)
        .await;

    (server, pets)
}

pub fn feature_path() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("features")
        .join("petStore.feature")
}

//! Step handlers for the pet-store feature

use async_trait::async_trait;
use tracing::info;

use crate::common::config::ApiConfig;
use crate::common::{Error, Result};
use crate::feature::StepKind;
use crate::steps::{StepBindings, StepPhrase};

use super::client::{ApiResponse, PetStoreClient};
use super::expect;
use super::ids::PetIdGenerator;
use super::model::Pet;
use super::names::NameSource;

/// Every step the pet-store feature may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetStep {
    StoreIsAvailable,
    AddPet,
    AddPetWithoutName,
    AddPetWithoutPhoto,
    FindNewPet,
    CannotFindNewPet,
}

impl StepPhrase for PetStep {
    fn all() -> &'static [Self] {
        &[
            PetStep::StoreIsAvailable,
            PetStep::AddPet,
            PetStep::AddPetWithoutName,
            PetStep::AddPetWithoutPhoto,
            PetStep::FindNewPet,
            PetStep::CannotFindNewPet,
        ]
    }

    fn kind(self) -> StepKind {
        match self {
            PetStep::StoreIsAvailable => StepKind::Given,
            PetStep::AddPet | PetStep::AddPetWithoutName | PetStep::AddPetWithoutPhoto => {
                StepKind::When
            }
            PetStep::FindNewPet | PetStep::CannotFindNewPet => StepKind::Then,
        }
    }

    fn text(self) -> &'static str {
        match self {
            PetStep::StoreIsAvailable => "the pet store is available",
            PetStep::AddPet => "I add a new pet",
            PetStep::AddPetWithoutName => "I add new pet without name",
            PetStep::AddPetWithoutPhoto => "I add new pet without photo",
            PetStep::FindNewPet => "I can find my new pet in the store",
            PetStep::CannotFindNewPet => "I can't find my new pet in the store",
        }
    }
}

/// State carried between the steps of one scenario
#[derive(Debug, Default)]
pub struct PetContext {
    pub pet_id: Option<i64>,
    pub payload: Option<Pet>,
    pub last_response: Option<ApiResponse>,
}

impl PetContext {
    fn pet_id(&self) -> Result<i64> {
        self.pet_id
            .ok_or(Error::MissingState("no pet was added earlier in this scenario"))
    }
}

pub struct PetStoreSteps {
    client: PetStoreClient,
    ids: PetIdGenerator,
    names: NameSource,
}

impl PetStoreSteps {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: PetStoreClient::new(config)?,
            ids: PetIdGenerator::new(),
            names: NameSource::default(),
        })
    }

    pub fn with_names(mut self, names: NameSource) -> Self {
        self.names = names;
        self
    }

    fn new_pet_id(&self, context: &mut PetContext) -> i64 {
        let id = self.ids.next_id();
        info!(pet_id = id, "Generated pet id");
        context.pet_id = Some(id);
        id
    }

    async fn create<'c>(
        &self,
        payload: Pet,
        context: &'c mut PetContext,
    ) -> Result<&'c ApiResponse> {
        let response = self.client.create_pet(&payload).await?;
        context.payload = Some(payload);
        let response = context.last_response.insert(response);
        Ok(&*response)
    }

    async fn add_pet(&self, context: &mut PetContext) -> Result<()> {
        let id = self.new_pet_id(context);
        let name = self.names.name_for(id);
        let response = self.create(Pet::dog(id, &name), context).await?;

        expect::status(response, 200)?;
        expect::body_present(response)?;
        expect::field_i64(response, "id", id)?;
        expect::field_str(response, "name", &name)
    }

    async fn add_rejected_pet(&self, payload: Pet, context: &mut PetContext) -> Result<()> {
        let response = self.create(payload, context).await?;

        expect::status(response, 405)?;
        expect::error_body(response)?;
        Ok(())
    }

    async fn find_new_pet(&self, context: &mut PetContext) -> Result<()> {
        let id = context.pet_id()?;
        let expected_name = context
            .payload
            .as_ref()
            .and_then(|p| p.name.clone())
            .ok_or(Error::MissingState("the added pet has no name"))?;

        let response = self.client.find_pet(id).await?;
        let response = context.last_response.insert(response);

        expect::status(response, 200)?;
        expect::body_present(response)?;
        expect::field_i64(response, "id", id)?;
        expect::field_str(response, "name", &expected_name)
    }

    async fn cannot_find_new_pet(&self, context: &mut PetContext) -> Result<()> {
        let id = context.pet_id()?;

        let response = self.client.find_pet(id).await?;
        let response = context.last_response.insert(response);

        expect::status(response, 404)?;
        expect::error_message_contains(response, "Pet not found")
    }

    async fn store_is_available(&self, context: &mut PetContext) -> Result<()> {
        let response = self.client.inventory().await?;
        let response = context.last_response.insert(response);
        expect::status(response, 200)
    }
}

#[async_trait]
impl StepBindings for PetStoreSteps {
    type Phrase = PetStep;
    type Context = PetContext;

    async fn run(&self, phrase: PetStep, context: &mut PetContext) -> Result<()> {
        match phrase {
            PetStep::StoreIsAvailable => self.store_is_available(context).await,
            PetStep::AddPet => self.add_pet(context).await,
            PetStep::AddPetWithoutName => {
                let id = self.new_pet_id(context);
                self.add_rejected_pet(Pet::cat_without_name(id), context).await
            }
            PetStep::AddPetWithoutPhoto => {
                let id = self.new_pet_id(context);
                let name = self.names.name_for(id);
                self.add_rejected_pet(Pet::cat_without_photo(id, &name), context).await
            }
            PetStep::FindNewPet => self.find_new_pet(context).await,
            PetStep::CannotFindNewPet => self.cannot_find_new_pet(context).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::duplicate_phrases;

    #[test]
    fn test_phrases_are_unique_per_kind() {
        assert!(duplicate_phrases::<PetStep>().is_empty());
    }

    #[test]
    fn test_resolve_source_phrases() {
        assert_eq!(
            PetStep::resolve(StepKind::When, "I add a new pet"),
            Some(PetStep::AddPet)
        );
        assert_eq!(
            PetStep::resolve(StepKind::Then, "I can't find my new pet in the store"),
            Some(PetStep::CannotFindNewPet)
        );
        assert_eq!(PetStep::resolve(StepKind::Then, "I add a new pet"), None);
    }

    #[test]
    fn test_missing_pet_id_is_reported() {
        let err = PetContext::default().pet_id().unwrap_err();
        assert!(matches!(err, Error::MissingState(_)));
    }
}

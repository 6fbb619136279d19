//! Print-product creation wizard.
//!
//! The user picks a blueprint, then a print provider, then a color and one or
//! more variants. Changing an earlier choice invalidates every later one.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    ChooseBlueprint,
    ChooseProvider,
    ChooseVariants,
    Review,
}

/// In-progress product built from a saved image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    blueprint_id: Option<u64>,
    provider_id: Option<u64>,
    color: Option<String>,
    variant_ids: Vec<u64>,
}

/// Body of the product-creation call to the fulfillment service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreationRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub blueprint_id: u64,
    pub print_provider_id: u64,
    pub variant_ids: Vec<u64>,
}

impl ProductDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            ..Self::default()
        }
    }

    pub fn blueprint_id(&self) -> Option<u64> {
        self.blueprint_id
    }

    pub fn provider_id(&self) -> Option<u64> {
        self.provider_id
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn variant_ids(&self) -> &[u64] {
        &self.variant_ids
    }

    pub fn step(&self) -> WizardStep {
        if self.blueprint_id.is_none() {
            WizardStep::ChooseBlueprint
        } else if self.provider_id.is_none() {
            WizardStep::ChooseProvider
        } else if self.variant_ids.is_empty() {
            WizardStep::ChooseVariants
        } else {
            WizardStep::Review
        }
    }

    pub fn select_blueprint(&mut self, blueprint_id: u64) {
        if self.blueprint_id != Some(blueprint_id) {
            self.blueprint_id = Some(blueprint_id);
            self.provider_id = None;
            self.color = None;
            self.variant_ids.clear();
        }
    }

    pub fn select_provider(&mut self, provider_id: u64) {
        if self.provider_id != Some(provider_id) {
            self.provider_id = Some(provider_id);
            self.color = None;
            self.variant_ids.clear();
        }
    }

    pub fn select_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        if self.color.as_deref() != Some(color.as_str()) {
            self.color = Some(color);
            self.variant_ids.clear();
        }
    }

    /// Add the variant if absent, remove it if present.
    pub fn toggle_variant(&mut self, variant_id: u64) {
        match self.variant_ids.iter().position(|id| *id == variant_id) {
            Some(idx) => {
                self.variant_ids.remove(idx);
            }
            None => self.variant_ids.push(variant_id),
        }
    }

    pub fn to_request(&self) -> Result<ProductCreationRequest> {
        let missing = |field: &'static str| PipelineError::IncompleteDraft { missing: field };
        if self.title.trim().is_empty() {
            return Err(missing("title"));
        }
        if self.image_url.trim().is_empty() {
            return Err(missing("image_url"));
        }
        let blueprint_id = self.blueprint_id.ok_or_else(|| missing("blueprint"))?;
        let print_provider_id = self.provider_id.ok_or_else(|| missing("print_provider"))?;
        if self.variant_ids.is_empty() {
            return Err(missing("variants"));
        }
        Ok(ProductCreationRequest {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            blueprint_id,
            print_provider_id,
            variant_ids: self.variant_ids.clone(),
        })
    }
}

//! Service-provider directory.
//!
//! The store also brokers electricians and installers; these entries back
//! the services page and its admin CRUD.

use crate::ids::ServiceProviderId;
use serde::{Deserialize, Serialize};
use volt_store::Document;

/// A service provider listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    /// Unique provider identifier.
    pub id: ServiceProviderId,
    /// Provider name.
    pub name: String,
    /// Area of expertise, e.g. "Wiring & Circuit Setup".
    pub expertise: String,
    /// Longer description of the offering.
    #[serde(default)]
    pub description: String,
    /// Provider location.
    #[serde(default)]
    pub location: String,
    /// Contact email address.
    pub contact_email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// URL of the profile image.
    #[serde(default)]
    pub image_url: String,
    /// Whether the provider currently accepts work.
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Document for ServiceProvider {
    const COLLECTION: &'static str = "service_providers";

    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl ServiceProvider {
    /// Create a new service provider.
    pub fn new(
        name: impl Into<String>,
        expertise: impl Into<String>,
        contact_email: impl Into<String>,
    ) -> Self {
        Self {
            id: ServiceProviderId::generate(),
            name: name.into(),
            expertise: expertise.into(),
            description: String::new(),
            location: String::new(),
            contact_email: contact_email.into(),
            phone: String::new(),
            image_url: String::new(),
            available: true,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the profile image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set availability.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

/// Partial update for a service provider.
///
/// The admin form historically submitted `specialty` and `contact` for what
/// are now `expertise` and `contactEmail`; both spellings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub name: Option<String>,
    #[serde(alias = "specialty")]
    pub expertise: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "contact")]
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub available: Option<bool>,
}

impl ServicePatch {
    /// Apply this patch to a provider.
    pub fn apply(&self, service: &mut ServiceProvider) {
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(expertise) = &self.expertise {
            service.expertise = expertise.clone();
        }
        if let Some(description) = &self.description {
            service.description = description.clone();
        }
        if let Some(location) = &self.location {
            service.location = location.clone();
        }
        if let Some(contact_email) = &self.contact_email {
            service.contact_email = contact_email.clone();
        }
        if let Some(phone) = &self.phone {
            service.phone = phone.clone();
        }
        if let Some(image_url) = &self.image_url {
            service.image_url = image_url.clone();
        }
        if let Some(available) = self.available {
            service.available = available;
        }
    }
}

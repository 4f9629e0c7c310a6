//! # Collection Assembler
//!
//! Drives one conversion: seeds the collection from the boilerplate, rewrites
//! the document base URI, walks every top-level resource into its own folder,
//! flushes the environment and finally validates the result.

use tracing::{info, warn};

use super::context::ConversionContext;
use super::environment::EnvironmentBuilder;
use super::options::ConvertOptions;
use super::services::Services;
use super::uri::rewrite_placeholders;
use super::walker::walk;
use crate::error::AppResult;
use crate::postman::{Boilerplate, Collection, Environment, Folder};
use crate::raml::RamlDocument;
use crate::validation::{CollectionValidator, SchemaValidator, ValidationReport};

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The assembled collection.
    pub collection: Collection,
    /// Structural validation of `collection`.
    pub report: ValidationReport,
}

impl Conversion {
    /// Whether the collection passed validation.
    pub fn is_valid(&self) -> bool {
        self.report.valid
    }

    /// The standalone environment view.
    pub fn environment(&self) -> &Environment {
        &self.collection.environment
    }
}

/// Converts parsed RAML documents into Postman collections.
///
/// Holds no per-document state; a single converter may be reused for any
/// number of documents.
pub struct Converter {
    options: ConvertOptions,
    services: Services,
    template: Boilerplate,
    validator: Box<dyn CollectionValidator>,
}

impl Converter {
    /// A converter using the embedded template and schemas.
    pub fn new(options: ConvertOptions) -> AppResult<Self> {
        Ok(Self {
            options,
            services: Services::for_options(&options),
            template: Boilerplate::embedded()?,
            validator: Box::new(SchemaValidator::new()?),
        })
    }

    /// Replaces the boilerplate template.
    pub fn with_template(mut self, template: Boilerplate) -> Self {
        self.template = template;
        self
    }

    /// Replaces the id and time sources.
    pub fn with_services(mut self, services: Services) -> Self {
        self.services = services;
        self
    }

    /// Replaces the post-conversion validator.
    pub fn with_validator(mut self, validator: impl CollectionValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// The options this converter was built with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Converts one document.
    pub fn convert(&self, document: &RamlDocument) -> Conversion {
        let services = &self.services;

        let mut collection = self.template.collection.clone();
        collection.id = services.id();
        collection.timestamp = services.timestamp();
        collection.requests = Vec::new();
        collection.name = document.title.clone().unwrap_or_default();
        collection.folders = Vec::new();

        collection.environment.name = format!("{}'s Environment", collection.name);
        collection.environment.timestamp = services.timestamp();
        collection.environment.id = services.id();

        let mut environment = EnvironmentBuilder::new();
        let base_uri = rewrite_placeholders(document.base_uri(), document.base_uri_parameters.keys());
        environment.register_params(&document.base_uri_parameters);

        let ctx = ConversionContext {
            base_uri,
            collection_id: collection.id.clone(),
            prototype: &self.template.prototype,
            services,
        };

        for resource in &document.resources {
            let folder_id = services.id();
            let subtree = walk(&ctx, resource, &ctx.base_uri);

            collection.folders.push(Folder {
                id: folder_id,
                name: subtree.relative_uri.clone(),
                description: String::new(),
                order: subtree.request_ids(),
                collection_name: collection.name.clone(),
                collection_id: collection.id.clone(),
            });
            collection.requests.extend(subtree.requests);
            environment.merge(subtree.environment);
        }

        collection
            .environment
            .values
            .extend(environment.into_values());

        if !self.options.group {
            collection.folders.clear();
        }

        let report = self.validator.validate_collection(&collection);
        if report.valid {
            info!(
                collection = %collection.name,
                requests = collection.requests.len(),
                folders = collection.folders.len(),
                variables = collection.environment.values.len(),
                "conversion successful"
            );
        } else {
            for diagnostic in &report.diagnostics {
                warn!(target_kind = %report.target, "{}", diagnostic);
            }
            warn!(collection = %collection.name, "could not validate generated collection");
        }

        Conversion { collection, report }
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

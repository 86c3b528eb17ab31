mod definition_store;
mod manifest_builder;

pub use definition_store::DefinitionStore;
pub use manifest_builder::ManifestBuilder;

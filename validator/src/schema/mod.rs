//! Schema registry: compiled JSON Schemas and SHACL shapes graphs.
//!
//! The registry is filled once, then shared read-only between runs.
//!
//! | Id | Kind | Applied to |
//! |----|------|------------|
//! | [`CATALOG_SCHEMA`] | JSON Schema | JSON-LD catalog entry points |
//! | [`DATASET_SCHEMA`] | JSON Schema | JSON-LD datasets typed `Datová sada` |
//! | [`DATASET_SERIES_SCHEMA`] | JSON Schema | JSON-LD datasets typed `Datová série` |
//! | [`HVD_DATASET_SCHEMA`] | JSON Schema | datasets under the HVD regulation |
//! | [`CATALOG_SHAPES`] | SHACL | catalog entry points of any format |

pub mod json;
pub mod shacl;

use std::collections::HashMap;
use std::fmt;

use dcat_model::Triples;
use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;
use shacl::CompiledShape;

/// SHACL report returned by [`SchemaRegistry::validate_shapes`].
pub type ShaclReport = shacl::ValidationReport;

/// Catalog JSON Schema id.
pub const CATALOG_SCHEMA: &str =
    "https://ofn.gov.cz/rozhrani-katalogu-otevrenych-dat/2021-01-11/schemata/katalog.json";
/// Dataset JSON Schema id.
pub const DATASET_SCHEMA: &str =
    "https://ofn.gov.cz/rozhrani-katalogu-otevrenych-dat/2021-01-11/schemata/datova-sada.json";
/// Dataset series JSON Schema id.
pub const DATASET_SERIES_SCHEMA: &str =
    "https://ofn.gov.cz/rozhrani-katalogu-otevrenych-dat/2021-01-11/schemata/datova-serie.json";
/// High-value dataset JSON Schema id.
pub const HVD_DATASET_SCHEMA: &str =
    "https://ofn.gov.cz/rozhrani-katalogu-otevrenych-dat/2024-05-28/schemata/datova-sada-hvd.json";
/// Catalog shapes graph id.
pub const CATALOG_SHAPES: &str = "catalog";

const BUNDLED_SCHEMAS: [&str; 4] = [
    include_str!("../../schemas/catalog.schema.json"),
    include_str!("../../schemas/dataset.schema.json"),
    include_str!("../../schemas/dataset-series.schema.json"),
    include_str!("../../schemas/hvd-dataset.schema.json"),
];
const BUNDLED_CATALOG_SHAPES: &str = include_str!("../../shapes/catalog.ttl");

/// Compiled schemas and shapes, keyed by id.
#[derive(Default)]
pub struct SchemaRegistry {
    json_schemas: HashMap<String, jsonschema::Validator>,
    shapes: HashMap<String, Vec<CompiledShape>>,
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut json: Vec<&String> = self.json_schemas.keys().collect();
        json.sort();
        let mut shapes: Vec<&String> = self.shapes.keys().collect();
        shapes.sort();
        f.debug_struct("SchemaRegistry")
            .field("json_schemas", &json)
            .field("shapes", &shapes)
            .finish()
    }
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every schema and shapes graph shipped with the crate.
    ///
    /// # Errors
    ///
    /// Fails only if a bundled document is broken.
    pub fn bundled() -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        for source in BUNDLED_SCHEMAS {
            registry.register_json_schema(serde_json::from_str(source)?)?;
        }
        registry.register_shapes(CATALOG_SHAPES, BUNDLED_CATALOG_SHAPES)?;
        Ok(registry)
    }

    /// Compiles and registers a JSON Schema under its `$id`, which is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingId`] without `$id` and
    /// [`SchemaError::InvalidSchema`] when compilation fails.
    pub fn register_json_schema(&mut self, mut schema: Value) -> Result<String, SchemaError> {
        let id = json::schema_id(&schema).ok_or(SchemaError::MissingId)?.to_string();
        json::sanitize_patterns(&mut schema);
        let validator = jsonschema::validator_for(&schema).map_err(|e| SchemaError::InvalidSchema {
            id: id.clone(),
            message: e.to_string(),
        })?;
        debug!(id, "registered JSON Schema");
        self.json_schemas.insert(id.clone(), validator);
        Ok(id)
    }

    /// Validates `document` against a registered JSON Schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownSchema`] for an unregistered id.
    pub fn validate_json(&self, id: &str, document: &Value) -> Result<bool, SchemaError> {
        let validator = self
            .json_schemas
            .get(id)
            .ok_or_else(|| SchemaError::UnknownSchema(id.to_string()))?;
        Ok(validator.is_valid(document))
    }

    /// Compiles and registers a Turtle shapes graph.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Shacl`] when the graph does not compile.
    pub fn register_shapes(&mut self, id: &str, turtle: &str) -> Result<(), SchemaError> {
        let shapes = shacl::compile_shapes(turtle)?;
        debug!(id, shapes = shapes.len(), "registered shapes graph");
        self.shapes.insert(id.to_string(), shapes);
        Ok(())
    }

    /// Validates `triples` against a registered shapes graph.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownSchema`] for an unregistered id and
    /// [`SchemaError::Shacl`] when evaluation fails.
    pub fn validate_shapes(&self, id: &str, triples: &Triples) -> Result<ShaclReport, SchemaError> {
        let shapes = self
            .shapes
            .get(id)
            .ok_or_else(|| SchemaError::UnknownSchema(id.to_string()))?;
        Ok(shacl::validate(shapes, triples)?)
    }
}

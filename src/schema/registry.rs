//! Runtime protobuf schema registry.

use std::path::{Path, PathBuf};

use prost_reflect::{DescriptorPool, MessageDescriptor};
use thiserror::Error;

/// Errors raised while loading a schema or resolving a message type.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file is missing or failed to compile.
    #[error("failed to load schema {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No message with the given fully-qualified name exists in the schema.
    #[error("unknown message type: {0}")]
    UnknownType(String),
}

/// Read-only view of a compiled protobuf schema.
///
/// Maps fully-qualified message names (e.g. `happyday.HappyDayRequest`) to
/// their descriptors. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    pool: DescriptorPool,
}

impl SchemaRegistry {
    /// Compile the `.proto` file at `path`.
    ///
    /// Imports are resolved relative to the file's parent directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let load_error = |source: Box<dyn std::error::Error + Send + Sync>| SchemaError::Load {
            path: path.to_path_buf(),
            source,
        };

        // protox only accepts files that live under one of its include
        // paths, so the file's own directory becomes the include root.
        let absolute = std::path::absolute(path).map_err(|e| load_error(e.into()))?;
        let include_dir = absolute.parent().map(Path::to_path_buf).unwrap_or_default();

        let mut compiler =
            protox::Compiler::new([&include_dir]).map_err(|e| load_error(e.into()))?;
        compiler.include_imports(true);
        compiler
            .open_file(&absolute)
            .map_err(|e| load_error(e.into()))?;

        let registry = Self {
            pool: compiler.descriptor_pool(),
        };

        tracing::debug!(
            path = %path.display(),
            messages = ?registry.message_names(),
            "Schema loaded"
        );

        Ok(registry)
    }

    /// Resolve a message type by its fully-qualified name.
    pub fn lookup(&self, name: &str) -> Result<MessageDescriptor, SchemaError> {
        self.pool
            .get_message_by_name(name)
            .ok_or_else(|| SchemaError::UnknownType(name.to_string()))
    }

    /// Fully-qualified names of every message known to the registry,
    /// including those pulled in through imports.
    pub fn message_names(&self) -> Vec<String> {
        self.pool
            .all_messages()
            .map(|message| message.full_name().to_string())
            .collect()
    }
}

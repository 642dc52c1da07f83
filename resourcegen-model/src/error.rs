//! Errors which can occur while deriving or assembling a resource schema.
//!
//! All variants belong to a single failure category (§7 of the
//! specification): every error raised by this crate family is fatal at the
//! point it is raised — there is no retry logic anywhere in the engine.

use snafu::{Backtrace, Snafu};

use crate::ShapeId;

/// The single error type shared by every crate in the family.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub), context(suffix(Ctx)), module)]
pub enum Error {
    /// `service` or `organization_name` was not set on the configuration.
    #[snafu(display("missing required configuration: {field}"))]
    MissingConfiguration {
        field: &'static str,
        backtrace: Backtrace,
    },

    /// A referenced shape id does not resolve against the model.
    #[snafu(display("shape not found: {id}"))]
    ShapeNotFound { id: ShapeId, backtrace: Backtrace },

    /// A resolved shape is not of the expected kind.
    #[snafu(display("shape {id} is a {actual}, expected a {expected}"))]
    ShapeTypeMismatch {
        id: ShapeId,
        expected: &'static str,
        actual: &'static str,
        backtrace: Backtrace,
    },

    /// A resource produced zero properties after derivation and exclusion.
    #[snafu(display(
        "resource {resource} produced zero properties after derivation and exclusion"
    ))]
    EmptyProperties {
        resource: ShapeId,
        backtrace: Backtrace,
    },

    /// The resource lacks a `documentation` trait.
    #[snafu(display("resource {resource} is missing a documentation trait"))]
    MissingDescription {
        resource: ShapeId,
        backtrace: Backtrace,
    },

    /// A `json_add` key is not a well-formed JSON pointer.
    #[snafu(display("invalid JSON pointer \"{pointer}\": {reason}"))]
    InvalidJsonPointer {
        pointer: String,
        reason: String,
        backtrace: Backtrace,
    },
}

/// Discriminator for the variant of [`Error`] without matching on its
/// (potentially backtrace-carrying) payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingConfiguration,
    ShapeNotFound,
    ShapeTypeMismatch,
    EmptyProperties,
    MissingDescription,
    InvalidJsonPointer,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingConfiguration { .. } => ErrorKind::MissingConfiguration,
            Self::ShapeNotFound { .. } => ErrorKind::ShapeNotFound,
            Self::ShapeTypeMismatch { .. } => ErrorKind::ShapeTypeMismatch,
            Self::EmptyProperties { .. } => ErrorKind::EmptyProperties,
            Self::MissingDescription { .. } => ErrorKind::MissingDescription,
            Self::InvalidJsonPointer { .. } => ErrorKind::InvalidJsonPointer,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

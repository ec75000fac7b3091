//! Single-line text encoding of a grid's live cells for copy and paste.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use life_core::{Grid, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PATTERN_DOMAIN: &str = "life";
const PATTERN_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded pattern payload.
pub(crate) const PATTERN_HEADER: &str = "life:v1";
/// Delimiter used to separate the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';

/// Live cells of a grid together with the grid configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PatternSnapshot {
    /// Number of columns in the grid.
    pub(crate) width: u32,
    /// Number of rows in the grid.
    pub(crate) height: u32,
    /// Whether the grid wraps around its edges.
    pub(crate) wrapped: bool,
    /// Positions of every live cell in row-major order.
    pub(crate) live: Vec<Position>,
}

impl PatternSnapshot {
    /// Captures the live cells of the provided grid.
    #[must_use]
    pub(crate) fn capture(grid: &Grid) -> Self {
        let live = grid
            .positions()
            .zip(grid.cells())
            .filter_map(|(position, alive)| alive.then_some(position))
            .collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            wrapped: grid.is_wrapped(),
            live,
        }
    }

    /// Encodes the snapshot into a single-line string.
    pub(crate) fn encode(&self) -> Result<String, PatternTransferError> {
        let payload = SerializablePattern {
            wrapped: self.wrapped,
            live: self.live.clone(),
        };
        let json = serde_json::to_vec(&payload).map_err(PatternTransferError::InvalidPayload)?;
        let encoded = STANDARD_NO_PAD.encode(json);
        Ok(format!(
            "{PATTERN_HEADER}:{}x{}:{encoded}",
            self.width, self.height
        ))
    }

    /// Decodes a snapshot from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, PatternTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PatternTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(PatternTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(PatternTransferError::MissingVersion)?;
        let dimensions = parts
            .next()
            .ok_or(PatternTransferError::MissingDimensions)?;
        let payload = parts.next().ok_or(PatternTransferError::MissingPayload)?;

        if domain != PATTERN_DOMAIN {
            return Err(PatternTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != PATTERN_VERSION {
            return Err(PatternTransferError::UnsupportedVersion(version.to_owned()));
        }

        let (width, height) = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(PatternTransferError::InvalidEncoding)?;
        let decoded: SerializablePattern =
            serde_json::from_slice(&bytes).map_err(PatternTransferError::InvalidPayload)?;

        Ok(Self {
            width,
            height,
            wrapped: decoded.wrapped,
            live: decoded.live,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializablePattern {
    wrapped: bool,
    live: Vec<Position>,
}

/// Errors that can occur while encoding or decoding pattern strings.
#[derive(Debug, Error)]
pub(crate) enum PatternTransferError {
    /// The provided string was empty or contained only whitespace.
    #[error("pattern string was empty")]
    EmptyPayload,
    /// The prefix segment was missing from the encoded pattern.
    #[error("pattern string is missing the prefix")]
    MissingPrefix,
    /// The encoded pattern did not contain a version segment.
    #[error("pattern string is missing the version")]
    MissingVersion,
    /// The encoded pattern did not include grid dimensions.
    #[error("pattern string is missing the grid dimensions")]
    MissingDimensions,
    /// The encoded pattern did not include the payload segment.
    #[error("pattern string is missing the payload")]
    MissingPayload,
    /// The encoded pattern used an unexpected prefix segment.
    #[error("pattern prefix '{0}' is not supported")]
    InvalidPrefix(String),
    /// The encoded pattern used an unsupported version identifier.
    #[error("pattern version '{0}' is not supported")]
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed from the encoded pattern.
    #[error("could not parse grid dimensions '{0}'")]
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    #[error("could not decode pattern payload: {0}")]
    InvalidEncoding(#[source] base64::DecodeError),
    /// The payload could not be serialised or deserialised.
    #[error("could not parse pattern payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

fn parse_dimensions(dimensions: &str) -> Result<(u32, u32), PatternTransferError> {
    let invalid = || PatternTransferError::InvalidDimensions(dimensions.to_owned());
    let (width, height) = dimensions.split_once(['x', 'X']).ok_or_else(invalid)?;

    let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = height.trim().parse::<u32>().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok((width, height))
}

//! Presentation of a built itinerary.
//!
//! Plain text goes through an askama template; JSON through serde DTOs.

mod dto;
pub mod templates;

use std::fmt;
use std::str::FromStr;

use askama::Template;

use crate::pipeline::Itinerary;

pub use dto::{ItineraryResponse, RouteResult, SegmentResult, StayResult, TripResult};
pub use templates::{ItineraryTemplate, TripView, describe_segment};

/// Errors from rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format of the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format {other:?}, expected text or json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Render trips and diagnostics as text.
pub fn render_text(itinerary: &Itinerary) -> Result<String, RenderError> {
    Ok(ItineraryTemplate::from_itinerary(itinerary).render()?)
}

/// Render trips and diagnostics as pretty-printed JSON.
pub fn render_json(itinerary: &Itinerary) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(&ItineraryResponse::from_itinerary(
        itinerary,
    ))?)
}

/// Render in the requested format.
pub fn render(itinerary: &Itinerary, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => render_text(itinerary),
        OutputFormat::Json => render_json(itinerary),
    }
}

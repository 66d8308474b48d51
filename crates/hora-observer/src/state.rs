//! Shared application state for the observer server.
//!
//! [`AppState`] is immutable once built: the default sunrise and sunset,
//! the label vocabulary, the chart layout and the compiled page template.
//! Every request computes its own partition from these, so handlers never
//! lock anything.

use hora_core::{LabelSet, TimeOfDay};
use hora_render::ChartLayout;
use minijinja::Environment;

use crate::error::ObserverError;

/// Name of the embedded index page template.
pub const INDEX_TEMPLATE: &str = "index.html";

/// Source of the index page, embedded at compile time.
const INDEX_SOURCE: &str = include_str!("../templates/index.html.j2");

/// State shared by all request handlers.
#[derive(Debug)]
pub struct AppState {
    /// Sunrise used when a request does not supply one.
    pub default_sunrise: TimeOfDay,
    /// Sunset used when a request does not supply one.
    pub default_sunset: TimeOfDay,
    /// Label vocabulary for every chart and partition.
    pub labels: LabelSet,
    /// Geometry of served charts.
    pub layout: ChartLayout,
    templates: Environment<'static>,
}

impl AppState {
    /// Build the state and compile the page template.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Template`] if the embedded template does
    /// not compile.
    pub fn new(
        default_sunrise: TimeOfDay,
        default_sunset: TimeOfDay,
        labels: LabelSet,
        layout: ChartLayout,
    ) -> Result<Self, ObserverError> {
        let mut templates = Environment::new();
        templates
            .add_template(INDEX_TEMPLATE, INDEX_SOURCE)
            .map_err(|e| ObserverError::Template(format!("failed to add index template: {e}")))?;

        Ok(Self {
            default_sunrise,
            default_sunset,
            labels,
            layout,
            templates,
        })
    }

    /// Render a named template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Template`] if the template is missing or
    /// fails to render.
    pub fn render_page<S: serde::Serialize>(
        &self,
        name: &str,
        context: S,
    ) -> Result<String, ObserverError> {
        self.templates
            .get_template(name)
            .map_err(|e| ObserverError::Template(format!("missing {name} template: {e}")))?
            .render(context)
            .map_err(|e| ObserverError::Template(format!("{name} render failed: {e}")))
    }
}

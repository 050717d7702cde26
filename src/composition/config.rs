use crate::foundation::{
    core::{Alignment, Orientation, OutputFormat, ResizeMode},
    error::{ConcatError, ConcatResult},
};

/// Output name used when the caller supplies none.
pub const DEFAULT_OUTPUT_NAME: &str = "output.png";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Immutable settings for one composition.
///
/// `fit_max` with neither bound set is a no-op, not an error. The output
/// format is not stored: it is inferred from `output_name`.
pub struct CompositionConfig {
    /// Concatenation direction.
    #[serde(default)]
    pub orientation: Orientation,
    /// Resize policy applied before placement.
    #[serde(default)]
    pub resize_mode: ResizeMode,
    /// Upper width bound for [`ResizeMode::FitMax`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    /// Upper height bound for [`ResizeMode::FitMax`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
    /// Cross-axis alignment.
    #[serde(default)]
    pub alignment: Alignment,
    /// Name of the produced file; only its extension matters here.
    #[serde(default = "default_output_name")]
    pub output_name: String,
}

fn default_output_name() -> String {
    DEFAULT_OUTPUT_NAME.to_string()
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            resize_mode: ResizeMode::default(),
            max_width: None,
            max_height: None,
            alignment: Alignment::default(),
            output_name: default_output_name(),
        }
    }
}

impl CompositionConfig {
    /// Encoding selected by the output name's extension.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_name(&self.output_name)
    }

    /// Build a config from raw form values, with the same leniency as the web form.
    ///
    /// Unknown enum values fall back to their defaults and unparsable bounds are
    /// treated as unset. Negative bounds are rejected.
    pub fn from_form(form: &FormFields<'_>) -> ConcatResult<Self> {
        Ok(Self {
            orientation: form
                .orientation
                .map(Orientation::from_form_value)
                .unwrap_or_default(),
            resize_mode: form
                .resize_mode
                .map(ResizeMode::from_form_value)
                .unwrap_or_default(),
            max_width: parse_dimension("max_width", form.max_width)?,
            max_height: parse_dimension("max_height", form.max_height)?,
            alignment: form
                .alignment
                .map(Alignment::from_form_value)
                .unwrap_or_default(),
            output_name: form
                .output_name
                .map(str::to_string)
                .unwrap_or_else(default_output_name),
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Raw, unvalidated form values as a client sends them.
pub struct FormFields<'a> {
    /// `horizontal` or anything else.
    pub orientation: Option<&'a str>,
    /// `none`, `match_height`, `match_width`, `fit_max`.
    pub resize_mode: Option<&'a str>,
    /// Integer text, possibly empty.
    pub max_width: Option<&'a str>,
    /// Integer text, possibly empty.
    pub max_height: Option<&'a str>,
    /// `start`, `center`, `end`.
    pub alignment: Option<&'a str>,
    /// Already-normalized output file name.
    pub output_name: Option<&'a str>,
}

/// Parse an optional pixel bound.
///
/// Empty or non-integer text means "unset"; a negative integer is an
/// [`ConcatError::InvalidConfig`].
pub fn parse_dimension(field: &str, raw: Option<&str>) -> ConcatResult<Option<u32>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let Ok(value) = raw.parse::<i64>() else {
        return Ok(None);
    };
    if value < 0 {
        return Err(ConcatError::invalid_config(format!(
            "{field} must be >= 0 (got {value})"
        )));
    }
    u32::try_from(value)
        .map(Some)
        .map_err(|_| ConcatError::invalid_config(format!("{field} is too large (got {value})")))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/config.rs"]
mod tests;

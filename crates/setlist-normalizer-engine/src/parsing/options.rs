use serde::{Deserialize, Serialize};

/// Switches that drive which lines become blocks.
///
/// Deserializing fills any missing field from [`ParseOptions::default`] and
/// ignores unknown fields, so partial JSON objects are always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Drop MC, intro and similar lines into `skipped_lines`.
    pub exclude_non_songs: bool,
    /// Emit a `Section` block for each encore marker.
    pub keep_encore_markers: bool,
    /// Lowercase the detection string before keyword comparison.
    pub ignore_case: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            exclude_non_songs: true,
            keep_encore_markers: true,
            ignore_case: true,
        }
    }
}

/// A partially specified [`ParseOptions`]; unset fields take the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialParseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_non_songs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_encore_markers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

impl PartialParseOptions {
    /// Layers `other` on top of `self`: fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            exclude_non_songs: other.exclude_non_songs.or(self.exclude_non_songs),
            keep_encore_markers: other.keep_encore_markers.or(self.keep_encore_markers),
            ignore_case: other.ignore_case.or(self.ignore_case),
        }
    }

    /// Fills every unset field from [`ParseOptions::default`].
    pub fn resolve(self) -> ParseOptions {
        let defaults = ParseOptions::default();
        ParseOptions {
            exclude_non_songs: self.exclude_non_songs.unwrap_or(defaults.exclude_non_songs),
            keep_encore_markers: self
                .keep_encore_markers
                .unwrap_or(defaults.keep_encore_markers),
            ignore_case: self.ignore_case.unwrap_or(defaults.ignore_case),
        }
    }
}

impl From<PartialParseOptions> for ParseOptions {
    fn from(partial: PartialParseOptions) -> Self {
        partial.resolve()
    }
}

impl From<ParseOptions> for PartialParseOptions {
    fn from(options: ParseOptions) -> Self {
        Self {
            exclude_non_songs: Some(options.exclude_non_songs),
            keep_encore_markers: Some(options.keep_encore_markers),
            ignore_case: Some(options.ignore_case),
        }
    }
}

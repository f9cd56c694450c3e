use std::fmt;

/// Image role inside a project gallery.
///
/// Unknown, missing or non-string values deserialize as [`ImageKind::Extra`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum ImageKind {
    /// Project cover; anchors the layout and is always sized `lg`.
    Cover,
    /// Full view of the piece.
    Full,
    /// Profile / vertical view.
    Profilo,
    /// Numbered detail shot.
    Dettaglio,
    /// Anything else.
    #[default]
    Extra,
}

impl ImageKind {
    /// Stable lowercase name used in JSON and alt text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Full => "full",
            Self::Profilo => "profilo",
            Self::Dettaglio => "dettaglio",
            Self::Extra => "extra",
        }
    }

    /// Classify an image by its file name.
    ///
    /// `cover.*`, `profilo.*`, `full.*` map to their kinds, `dettaglio-<n>.*`
    /// maps to a detail with order `n`; everything else is [`ImageKind::Extra`].
    pub fn from_filename(filename: &str) -> (Self, Option<u32>) {
        let name = filename.to_ascii_lowercase();
        if name.starts_with("cover.") {
            return (Self::Cover, None);
        }
        if name.starts_with("profilo.") {
            return (Self::Profilo, None);
        }
        if name.starts_with("full.") {
            return (Self::Full, None);
        }
        if let Some(rest) = name.strip_prefix("dettaglio-") {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            let (digits, tail) = rest.split_at(digits_end);
            if !digits.is_empty()
                && tail.starts_with('.')
                && let Ok(order) = digits.parse::<u32>()
            {
                return (Self::Dettaglio, Some(order));
            }
        }
        (Self::Extra, None)
    }
}

impl From<serde_json::Value> for ImageKind {
    fn from(value: serde_json::Value) -> Self {
        match value.as_str() {
            Some("cover") => Self::Cover,
            Some("full") => Self::Full,
            Some("profilo") => Self::Profilo,
            Some("dettaglio") => Self::Dettaglio,
            _ => Self::Extra,
        }
    }
}

impl From<ImageKind> for String {
    fn from(value: ImageKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image orientation, derived from the width/height ratio.
///
/// Unknown, missing or non-string values deserialize as [`Orientation::Square`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum Orientation {
    /// Ratio `>= 1.15`.
    Landscape,
    /// Ratio `<= 0.85`.
    Portrait,
    /// Everything in between, and unknown ratios.
    #[default]
    Square,
}

impl Orientation {
    /// Ratio at or above which an image is landscape.
    pub const LANDSCAPE_MIN_RATIO: f64 = 1.15;
    /// Ratio at or below which an image is portrait.
    pub const PORTRAIT_MAX_RATIO: f64 = 0.85;

    /// Stable lowercase name used in JSON and classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Square => "square",
        }
    }

    /// Classify a width/height ratio; `None`, zero and non-finite ratios are square.
    pub fn from_ratio(ratio: Option<f64>) -> Self {
        match ratio {
            Some(r) if r.is_finite() && r != 0.0 => {
                if r >= Self::LANDSCAPE_MIN_RATIO {
                    Self::Landscape
                } else if r <= Self::PORTRAIT_MAX_RATIO {
                    Self::Portrait
                } else {
                    Self::Square
                }
            }
            _ => Self::Square,
        }
    }

    /// Classify pixel dimensions; zero dimensions yield square.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self::from_ratio(aspect_ratio(width, height))
    }

    /// Base `(span_x, span_y)` before size and boost adjustments.
    pub fn base_span(self) -> (u32, u32) {
        match self {
            Self::Landscape => (6, 4),
            Self::Portrait => (4, 6),
            Self::Square => (4, 5),
        }
    }
}

impl From<serde_json::Value> for Orientation {
    fn from(value: serde_json::Value) -> Self {
        match value.as_str() {
            Some("landscape") => Self::Landscape,
            Some("portrait") => Self::Portrait,
            _ => Self::Square,
        }
    }
}

impl From<Orientation> for String {
    fn from(value: Orientation) -> Self {
        value.as_str().to_string()
    }
}

pub(crate) fn aspect_ratio(width: u32, height: u32) -> Option<f64> {
    if width == 0 || height == 0 {
        return None;
    }
    Some(f64::from(width) / f64::from(height))
}

/// Tile size class.
///
/// Unknown values, including non-strings, deserialize as [`TileSize::Md`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", from = "serde_json::Value")]
pub enum TileSize {
    /// One cell smaller on both axes.
    Sm,
    /// Base span.
    #[default]
    Md,
    /// One cell larger on both axes.
    Lg,
}

impl TileSize {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Signed adjustment applied to both span axes.
    pub fn delta(self) -> i32 {
        match self {
            Self::Sm => -1,
            Self::Md => 0,
            Self::Lg => 1,
        }
    }
}

impl From<serde_json::Value> for TileSize {
    fn from(value: serde_json::Value) -> Self {
        match value.as_str() {
            Some("sm") => Self::Sm,
            Some("lg") => Self::Lg,
            _ => Self::Md,
        }
    }
}

/// One image in a project gallery, as supplied by the caller.
///
/// Extra JSON fields are ignored; the packer only reads `url`, `filename`,
/// `type` and `orientation`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageDescriptor {
    /// Opaque identifier, expected (not enforced) to be unique.
    #[serde(default)]
    pub url: String,
    /// Original file name, used as an alignment key when `url` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Image role.
    #[serde(default, rename = "type")]
    pub kind: ImageKind,
    /// Orientation class.
    #[serde(default)]
    pub orientation: Orientation,
    /// Detail number; carried through, unused by the packer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Alternative text, when hydrated from a manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageDescriptor {
    /// Descriptor with the given url, kind and orientation.
    pub fn new(url: impl Into<String>, kind: ImageKind, orientation: Orientation) -> Self {
        Self {
            url: url.into(),
            kind,
            orientation,
            ..Self::default()
        }
    }
}

/// Optional prose block placed among the images.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextBlock {
    /// Pre-rendered HTML content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Requested size; defaults to `md`.
    #[serde(default)]
    pub size: TileSize,
}

impl TextBlock {
    /// Plain-text block of default size.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// HTML block of default size.
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Self::default()
        }
    }

    /// Builder-style size override.
    pub fn with_size(mut self, size: TileSize) -> Self {
        self.size = size;
        self
    }

    /// A block without any html or text content is not rendered.
    pub fn has_content(&self) -> bool {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.html) || filled(&self.text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/model.rs"]
mod tests;

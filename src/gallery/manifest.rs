use std::collections::BTreeMap;

use crate::{
    foundation::error::{GridfolioError, GridfolioResult},
    gallery::model::{ImageDescriptor, ImageKind, Orientation, aspect_ratio},
};

/// Build-time images manifest: `category -> project id -> entry`.
///
/// Top-level keys whose value is not an object (for example `_generatedAt`)
/// are metadata and are skipped.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct ImagesManifest {
    /// Projects per category.
    pub categories: BTreeMap<String, BTreeMap<String, ManifestEntry>>,
}

/// Images of one project as listed in the manifest.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    /// Cover URL chosen at build time.
    #[serde(default)]
    pub cover: Option<String>,
    /// Items in manifest order.
    #[serde(default)]
    pub items: Vec<ManifestItem>,
}

/// One image file listed in the manifest.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManifestItem {
    /// Public URL of the image.
    pub url: String,
    /// File name on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Image role; inferred from `filename` when absent.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ImageKind>,
    /// Detail number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Pixel width, when measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixel height, when measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ManifestItem {
    /// `None` when the item has neither a `type` nor a file name.
    fn resolved_kind(&self) -> (Option<ImageKind>, Option<u32>) {
        match (self.kind, &self.filename) {
            (Some(kind), _) => (Some(kind), self.order),
            (None, Some(name)) => {
                let (kind, order) = ImageKind::from_filename(name);
                (Some(kind), self.order.or(order))
            }
            (None, None) => (None, self.order),
        }
    }

    fn ratio(&self) -> Option<f64> {
        aspect_ratio(self.width?, self.height?)
    }
}

/// A project gallery hydrated with orientation and accessibility metadata.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ProjectGallery {
    /// Cover URL: the manifest's cover, else the first item.
    pub cover: Option<String>,
    /// Hydrated items in manifest order.
    pub items: Vec<GalleryItem>,
}

impl ProjectGallery {
    /// Descriptors ready to feed into [`crate::choose_layout`].
    pub fn descriptors(&self) -> Vec<ImageDescriptor> {
        self.items.iter().map(|it| it.image.clone()).collect()
    }
}

/// Manifest item plus derived fields.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct GalleryItem {
    /// Descriptor consumed by the packer (alt text included).
    #[serde(flatten)]
    pub image: ImageDescriptor,
    /// Project title (or id when untitled).
    pub title: String,
    /// Pixel width, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixel height, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Width / height, when both are known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
}

/// Alternative text for an image of a titled project.
///
/// An unknown kind yields the bare title; a detail order of zero is omitted.
pub fn build_alt(title: &str, kind: Option<ImageKind>, order: Option<u32>) -> String {
    match (kind, order.filter(|&n| n != 0)) {
        (Some(ImageKind::Dettaglio), Some(n)) => format!("{title} — dettaglio {n}"),
        (Some(ImageKind::Dettaglio), None) => format!("{title} — dettaglio"),
        (Some(kind), _) => format!("{title} — {kind}"),
        (None, _) => title.to_string(),
    }
}

impl ImagesManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json_str(s: &str) -> GridfolioResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        Self::try_from(value)
    }

    /// Raw entry for a project, if listed.
    pub fn entry(&self, category: &str, project_id: &str) -> Option<&ManifestEntry> {
        self.categories.get(category)?.get(project_id)
    }

    /// Hydrate one project's gallery.
    ///
    /// `title` defaults to the project id. Fails when the category or project
    /// is not present in the manifest.
    #[tracing::instrument(skip(self))]
    pub fn project_gallery(
        &self,
        category: &str,
        project_id: &str,
        title: Option<&str>,
    ) -> GridfolioResult<ProjectGallery> {
        let entry = self.entry(category, project_id).ok_or_else(|| {
            GridfolioError::manifest(format!(
                "project '{project_id}' not found in category '{category}'"
            ))
        })?;

        let title = title.filter(|t| !t.is_empty()).unwrap_or(project_id);
        let items: Vec<GalleryItem> = entry
            .items
            .iter()
            .map(|it| {
                let (kind, order) = it.resolved_kind();
                let ratio = it.ratio();
                GalleryItem {
                    image: ImageDescriptor {
                        url: it.url.clone(),
                        filename: it.filename.clone(),
                        kind: kind.unwrap_or_default(),
                        orientation: Orientation::from_ratio(ratio),
                        order,
                        alt: Some(build_alt(title, kind, order)),
                    },
                    title: title.to_string(),
                    width: it.width,
                    height: it.height,
                    ratio,
                }
            })
            .collect();

        let cover = entry
            .cover
            .clone()
            .filter(|c| !c.is_empty())
            .or_else(|| items.first().map(|it| it.image.url.clone()));
        tracing::debug!(items = items.len(), cover = ?cover, "hydrated project gallery");

        Ok(ProjectGallery { cover, items })
    }
}

impl TryFrom<serde_json::Value> for ImagesManifest {
    type Error = GridfolioError;

    fn try_from(value: serde_json::Value) -> GridfolioResult<Self> {
        let serde_json::Value::Object(top) = value else {
            return Err(GridfolioError::manifest("manifest root must be a JSON object"));
        };

        let mut categories = BTreeMap::new();
        for (name, body) in top {
            if !body.is_object() {
                continue;
            }
            let projects: BTreeMap<String, ManifestEntry> = serde_json::from_value(body)
                .map_err(|e| GridfolioError::manifest(format!("category '{name}': {e}")))?;
            categories.insert(name, projects);
        }
        Ok(Self { categories })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/manifest.rs"]
mod tests;

// SPDX-License-Identifier: MPL-2.0
//! Rendered generation results.

use crate::generation::GeneratedImage;

/// One display unit: a preview, a resolution label, and a download
/// affordance, all pointing at the same resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub resolution_label: String,
    pub url: String,
}

impl GalleryEntry {
    /// Location used by the preview.
    #[must_use]
    pub fn preview_url(&self) -> &str {
        &self.url
    }

    /// Location used by the download action.
    #[must_use]
    pub fn download_url(&self) -> &str {
        &self.url
    }
}

impl From<GeneratedImage> for GalleryEntry {
    fn from(image: GeneratedImage) -> Self {
        Self {
            resolution_label: image.resolution_label,
            url: image.url,
        }
    }
}

/// The results region and its gallery container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
    visible: bool,
    scroll_pending: bool,
}

impl Gallery {
    /// Hides the results region and drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.visible = false;
        self.scroll_pending = false;
    }

    /// Shows the results region, appends one entry per image in input order,
    /// and asks for the region to be brought into view.
    ///
    /// No deduplication, sorting, or URL validation takes place; the server
    /// is trusted to return labels and order matching the request.
    pub fn render(&mut self, images: Vec<GeneratedImage>) {
        self.visible = true;
        self.entries.extend(images.into_iter().map(GalleryEntry::from));
        self.scroll_pending = true;
    }

    #[must_use]
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns whether a scroll-into-view was requested since the last call, and resets it.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

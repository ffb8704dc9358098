//! Decide which tabs show a bare image document the viewer should take over.

use alloc::collections::BTreeSet;

/// Browser tab identifier.
pub type TabId = i64;

/// Extensions of local files that open as bare image documents.
const LOCAL_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// `image/*`, except XML-based images (SVG) which the browser renders as documents.
///
/// Parameters after `;` are ignored; comparison is ASCII case-insensitive.
pub fn is_image_content_type(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = mime.split_once('/') else {
        return false;
    };
    kind.eq_ignore_ascii_case("image")
        && !subtype.is_empty()
        && !ends_with_ignore_case(subtype, "+xml")
}

/// A `file:///` URL naming a raster image by extension.
pub fn is_local_image_url(url: &str) -> bool {
    let Some(path) = url.strip_prefix("file:///") else {
        return false;
    };
    let Some((stem, ext)) = path.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty()
        && LOCAL_IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
}

fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len()
        && s.get(s.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

/// Remembers tabs whose main-frame response was an image until the tab
/// finishes updating, then says whether to inject the viewer.
#[derive(Clone, Debug, Default)]
pub struct TabSniffer {
    pending: BTreeSet<TabId>,
}

impl TabSniffer {
    /// A sniffer with no pending tabs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect main-frame response headers. Returns whether the tab is now pending.
    pub fn on_headers_received<'h, I>(&mut self, tab: TabId, headers: I) -> bool
    where
        I: IntoIterator<Item = (&'h str, &'h str)>,
    {
        if self.pending.contains(&tab) {
            return true;
        }
        let is_image = headers
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .is_some_and(|(_, value)| is_image_content_type(value));
        if is_image {
            tracing::debug!(tab, "image response");
            self.pending.insert(tab);
        }
        is_image
    }

    /// The tab finished navigating to `url`. Returns whether to inject the viewer.
    ///
    /// A pending tab is forgotten once injected.
    pub fn on_tab_updated(&mut self, tab: TabId, url: &str) -> bool {
        let inject = self.pending.remove(&tab) || is_local_image_url(url);
        if inject {
            tracing::debug!(tab, url, "inject viewer");
        }
        inject
    }

    /// Drop any pending state for a closed tab.
    pub fn forget(&mut self, tab: TabId) {
        self.pending.remove(&tab);
    }

    /// Whether an image response was seen for `tab` and not yet injected.
    pub fn is_pending(&self, tab: TabId) -> bool {
        self.pending.contains(&tab)
    }
}

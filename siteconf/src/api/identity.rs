use serde::Serialize;

/// Page level metadata: `<title>` and the meta description tag
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

/// Author and site metadata read by whatever renders the blog
///
/// Every field is always present. `resume` is an empty string when there is
/// no resume link, and it is still serialized in that case.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteIdentity {
    /// Short label shown in the site header
    pub header_title: &'static str,
    /// Display name of the author
    pub user_name: &'static str,
    /// Single emoji glyph
    pub mascot: &'static str,
    pub resume: &'static str,
    pub github: &'static str,
    /// Canonical site URL
    pub domain: &'static str,
    pub meta: PageMeta,
}

impl SiteIdentity {
    /// Resume URL, or `None` when the stored value is empty
    pub fn resume_link(&self) -> Option<&'static str> {
        if self.resume.is_empty() {
            None
        } else {
            Some(self.resume)
        }
    }
}

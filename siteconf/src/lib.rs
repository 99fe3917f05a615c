//! Siteconf - static identity and category icon configuration for the blog

// Private API modules
pub(crate) mod api;

// Public identity module with re-exports
pub mod identity {
    // Re-export types from internal API
    pub use crate::api::identity::{PageMeta, SiteIdentity};
}

// Public icons module with re-exports
pub mod icons {
    // Re-export types from internal API
    pub use crate::api::icons::CategoryIconTable;
}

pub use api::data::{CATEGORY_ICONS, USER_INFORMATIONS};
pub use api::emojis;
pub use api::data::category;

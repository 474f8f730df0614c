//! Localization of display names
//!
//! Display names are resolved once per distinct culture in the supported
//! locale table, never once per locale.

pub mod locale;
pub mod localizer;
pub mod resolver;

pub use locale::{LocaleEntry, LocaleTable};
pub use localizer::{DictionaryLocalizer, Localizer};
pub use resolver::{localized_name, LocalizedName};

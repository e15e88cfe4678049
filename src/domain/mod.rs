pub mod conditions;
pub mod format;
pub mod grid;
pub mod i18n;
pub mod series;
pub mod snapshot;

//! Yew rendering of the `<un-sdg>` widget.
//!
//! ```ignore
//! html! { <UnSdg goal="13" width={128} /> }
//! ```

pub mod components;
pub mod hooks;
pub mod services;

pub use components::un_sdg::{UnSdg, UnSdgProps};
pub use shared::AssetConfig;

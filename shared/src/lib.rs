//! Target independent core of the `<un-sdg>` widget.
//!
//! Holds the table of the 17 Sustainable Development Goals, turns goal
//! selectors into icon locations and alt text, and tracks the display state
//! of each widget instance. Rendering layers consume [`RenderForm`].

pub mod config;
pub mod display;
pub mod goals;
pub mod selector;
pub mod widget;

pub use config::{AssetConfig, ConfigError};
pub use display::{DisplayDescriptor, DisplayState, GoalResolver, RenderForm, DEFAULT_WIDTH};
pub use goals::{goal, goals, host_style, palette, GoalEntry, GOAL_COUNT};
pub use selector::{Selector, SelectorError, Symbol};
pub use widget::{GoalWidget, WidgetAttributes};

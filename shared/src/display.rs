//! Goal resolution and the per-widget display state.
//!
//! A widget holds one [`DisplayState`]. Setting the goal resolves it right
//! away through [`GoalResolver`], so the cached image and label always match
//! the last goal that resolved. Selectors that don't resolve are dropped and
//! the previous image and label stay on screen.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::AssetConfig;
use crate::goals;
use crate::selector::{Selector, SelectorError};

/// Width in pixels used until one is set
pub const DEFAULT_WIDTH: u32 = 254;

/// What a resolved selector should look like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDescriptor {
    pub selector: Selector,
    pub image: String,
    pub label: String,
    /// Swatch color, only for numbered goals
    pub color: Option<String>,
}

/// Maps goal selectors to images and alt text under one asset configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GoalResolver {
    config: AssetConfig,
}

impl GoalResolver {
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    /// Asset location for "all", "circle" or a goal number
    pub fn path(&self, key: &str) -> String {
        self.config.path(key)
    }

    pub fn resolve(&self, selector: &str) -> Result<DisplayDescriptor, SelectorError> {
        let selector: Selector = selector.parse()?;
        Ok(self.describe(selector))
    }

    /// Descriptor for a selector that already parsed
    pub fn describe(&self, selector: Selector) -> DisplayDescriptor {
        let image = self.path(&selector.asset_key());
        match selector {
            Selector::Symbolic(symbol) => DisplayDescriptor {
                selector,
                image,
                label: symbol.label().to_string(),
                color: None,
            },
            Selector::Numeric(number) => {
                let entry = goals::goal(number);
                DisplayDescriptor {
                    selector,
                    image,
                    label: entry.map(|e| e.display_label()).unwrap_or_default(),
                    color: entry.map(|e| e.color.to_string()),
                }
            }
        }
    }
}

/// The two ways a widget can be drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum RenderForm {
    /// Icon drawn `width` pixels wide, height follows the image
    Image { src: String, alt: String, width: u32 },
    /// Solid `size` x `size` square
    Swatch { color: String, size: u32 },
}

impl RenderForm {
    pub fn inline_style(&self) -> String {
        match self {
            RenderForm::Image { width, .. } => format!("width: {}px;", width),
            RenderForm::Swatch { color, size } => {
                format!("background-color: {};width: {}px;height: {}px;", color, size, size)
            }
        }
    }

    pub fn is_swatch(&self) -> bool {
        matches!(self, RenderForm::Swatch { .. })
    }
}

/// Derived display state owned by a single widget instance
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    selector: String,
    resolved_label: String,
    resolved_image: String,
    color_only: bool,
    width: u32,
    resolver: GoalResolver,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(AssetConfig::default())
    }
}

impl DisplayState {
    /// Goal 1 with its bare label, as shown before the first update
    pub fn new(config: AssetConfig) -> Self {
        let resolver = GoalResolver::new(config);
        let first = goals::goal(1).map(|g| g.label).unwrap_or_default();
        Self {
            selector: "1".to_string(),
            resolved_label: first.to_string(),
            resolved_image: resolver.path("1"),
            color_only: false,
            width: DEFAULT_WIDTH,
            resolver,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn resolved_label(&self) -> &str {
        &self.resolved_label
    }

    pub fn resolved_image(&self) -> &str {
        &self.resolved_image
    }

    pub fn color_only(&self) -> bool {
        self.color_only
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Store a new selector and resolve it. Returns false when the selector
    /// did not resolve and the previous image and label were kept.
    pub fn set_goal(&mut self, selector: impl Into<String>) -> bool {
        self.selector = selector.into();
        self.refresh()
    }

    /// Resolve the current selector again
    pub fn refresh(&mut self) -> bool {
        match self.resolver.resolve(&self.selector) {
            Ok(descriptor) => {
                trace!(selector = %descriptor.selector, image = %descriptor.image, "resolved goal");
                self.resolved_image = descriptor.image;
                self.resolved_label = descriptor.label;
                true
            }
            Err(err) => {
                debug!(selector = %self.selector, error = %err, "keeping previous goal");
                false
            }
        }
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_color_only(&mut self, color_only: bool) {
        self.color_only = color_only;
    }

    /// Replace the alt text until the next goal resolves
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.resolved_label = label.into();
    }

    /// Replace the image location until the next goal resolves
    pub fn set_image(&mut self, image: impl Into<String>) {
        self.resolved_image = image.into();
    }

    /// Swatch when color-only is on and the selector is a numbered goal,
    /// the icon otherwise
    pub fn render(&self) -> RenderForm {
        if self.color_only {
            let entry = self
                .selector
                .parse::<Selector>()
                .ok()
                .and_then(|s| s.goal_number())
                .and_then(goals::goal);
            if let Some(entry) = entry {
                return RenderForm::Swatch {
                    color: entry.color.to_string(),
                    size: self.width,
                };
            }
        }

        RenderForm::Image {
            src: self.resolved_image.clone(),
            alt: self.resolved_label.clone(),
            width: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_numbered_goal() {
        let resolver = GoalResolver::default();
        for entry in goals::goals() {
            let descriptor = resolver.resolve(&entry.index.to_string()).unwrap();
            assert!(descriptor.image.ends_with(&format!("/{}", entry.image_path)));
            assert_eq!(descriptor.label, format!("Goal {}: {}", entry.index, entry.label));
            assert_eq!(descriptor.color.as_deref(), Some(entry.color));
        }
    }

    #[test]
    fn test_resolve_symbolic() {
        let resolver = GoalResolver::default();
        let all = resolver.resolve("all").unwrap();
        let circle = resolver.resolve("circle").unwrap();

        assert_eq!(all.label, "All Sustainable Development Goals");
        assert_eq!(circle.label, "Sustainable Development Goals Circle");
        assert_eq!(all.image, "/lib/svgs/all.svg");
        assert_eq!(circle.image, "/lib/svgs/circle.svg");
        assert_ne!(all.image, circle.image);
        assert!(all.color.is_none());
    }

    #[test]
    fn test_defaults_before_first_update() {
        let state = DisplayState::default();
        assert_eq!(state.selector(), "1");
        assert!(state.resolved_image().ends_with("/1.svg"));
        assert_eq!(state.resolved_label(), "No Poverty");
        assert_eq!(state.width(), 254);
        assert!(!state.color_only());
    }

    #[test]
    fn test_goal_change_scenario() {
        let mut state = DisplayState::default();

        assert!(state.set_goal("12"));
        assert_eq!(state.resolved_label(), "Goal 12: Responsible Consumption And Production");
        assert!(state.resolved_image().ends_with("/12.svg"));

        assert!(!state.set_goal("99"));
        assert_eq!(state.selector(), "99");
        assert_eq!(state.resolved_label(), "Goal 12: Responsible Consumption And Production");
        assert!(state.resolved_image().ends_with("/12.svg"));
    }

    #[test]
    fn test_invalid_selectors_keep_previous_state() {
        let mut state = DisplayState::default();
        state.set_goal("circle");

        for bad in ["0", "18", "-1", "foo", ""] {
            assert!(!state.set_goal(bad), "{bad} should not resolve");
            assert_eq!(state.resolved_label(), "Sustainable Development Goals Circle");
            assert_eq!(state.resolved_image(), "/lib/svgs/circle.svg");
        }
    }

    #[test]
    fn test_color_only_swatch() {
        let mut state = DisplayState::default();
        state.set_goal("5");
        state.set_color_only(true);
        state.set_width(100);

        let form = state.render();
        assert_eq!(
            form,
            RenderForm::Swatch { color: "#dd4d35".to_string(), size: 100 }
        );
        assert_eq!(form.inline_style(), "background-color: #dd4d35;width: 100px;height: 100px;");
    }

    #[test]
    fn test_color_only_ignored_for_symbolic_and_invalid() {
        let mut state = DisplayState::default();
        state.set_color_only(true);

        state.set_goal("all");
        match state.render() {
            RenderForm::Image { src, alt, width } => {
                assert_eq!(src, "/lib/svgs/all.svg");
                assert_eq!(alt, "All Sustainable Development Goals");
                assert_eq!(width, 254);
            }
            other => panic!("expected image form, got {other:?}"),
        }

        state.set_goal("42");
        assert!(!state.render().is_swatch());
    }

    #[test]
    fn test_width_change_keeps_resolution() {
        let mut state = DisplayState::default();
        state.set_goal("3");
        let label = state.resolved_label().to_string();
        let image = state.resolved_image().to_string();

        state.set_width(64);
        assert_eq!(state.resolved_label(), label);
        assert_eq!(state.resolved_image(), image);
        assert_eq!(state.render().inline_style(), "width: 64px;");
    }

    #[test]
    fn test_overrides_last_until_next_goal() {
        let mut state = DisplayState::default();
        state.set_goal("4");
        state.set_label("Education for all");
        state.set_image("/custom/4.svg");
        assert_eq!(
            state.render(),
            RenderForm::Image {
                src: "/custom/4.svg".to_string(),
                alt: "Education for all".to_string(),
                width: 254,
            }
        );

        state.set_goal("6");
        assert_eq!(state.resolved_label(), "Goal 6: Clean Water And Sanitation");
    }

    #[test]
    fn test_render_form_serializes_tagged() {
        let form = RenderForm::Swatch { color: "#527742".to_string(), size: 32 };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["form"], "swatch");
        assert_eq!(json["size"], 32);
    }
}

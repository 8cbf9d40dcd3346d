use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AssetConfig;
use crate::display::{DisplayState, RenderForm, DEFAULT_WIDTH};

/// Typed view of the widget's attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WidgetAttributes {
    pub goal: String,
    pub width: u32,
    pub color_only: bool,
    /// Alt text override
    pub label: Option<String>,
    /// Image location override
    pub image: Option<String>,
}

impl Default for WidgetAttributes {
    fn default() -> Self {
        Self {
            goal: "1".to_string(),
            width: DEFAULT_WIDTH,
            color_only: false,
            label: None,
            image: None,
        }
    }
}

/// One widget instance: its display state plus the attributes last applied to it
#[derive(Debug, Clone)]
pub struct GoalWidget {
    state: DisplayState,
    applied: Option<WidgetAttributes>,
}

impl Default for GoalWidget {
    fn default() -> Self {
        Self::new(AssetConfig::default())
    }
}

impl GoalWidget {
    pub fn new(config: AssetConfig) -> Self {
        Self {
            state: DisplayState::new(config),
            applied: None,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Bring the state in line with `attributes`, touching only what changed.
    /// The goal is always resolved on the first call. Returns false when a
    /// changed goal did not resolve.
    pub fn apply(&mut self, attributes: &WidgetAttributes) -> bool {
        let previous = self.applied.take();
        let mut resolved = true;

        match &previous {
            Some(prev) if prev.goal == attributes.goal => {}
            _ => resolved = self.state.set_goal(attributes.goal.clone()),
        }

        if previous.as_ref().map(|p| p.width) != Some(attributes.width) {
            self.state.set_width(attributes.width);
        }
        if previous.as_ref().map(|p| p.color_only) != Some(attributes.color_only) {
            self.state.set_color_only(attributes.color_only);
        }

        // Overrides win over a goal resolved in this same pass
        let goal_changed = previous.as_ref().map(|p| &p.goal) != Some(&attributes.goal);
        if let Some(label) = &attributes.label {
            if goal_changed || previous.as_ref().and_then(|p| p.label.as_ref()) != Some(label) {
                self.state.set_label(label.clone());
            }
        }
        if let Some(image) = &attributes.image {
            if goal_changed || previous.as_ref().and_then(|p| p.image.as_ref()) != Some(image) {
                self.state.set_image(image.clone());
            }
        }

        self.applied = Some(attributes.clone());
        resolved
    }

    /// HTML attribute entry point. `None` means the attribute was removed.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        let mut attributes = self.applied.clone().unwrap_or_default();
        match name {
            "goal" => match value {
                Some(goal) => attributes.goal = goal.to_string(),
                None => {
                    // A missing goal never resolves, so the last good goal stays
                    debug!("goal attribute removed, keeping {}", self.state.selector());
                    return;
                }
            },
            "width" => match value.map(|v| v.trim().parse::<u32>()) {
                Some(Ok(width)) => attributes.width = width,
                None => attributes.width = DEFAULT_WIDTH,
                Some(Err(err)) => {
                    debug!(value = ?value, error = %err, "ignoring width attribute");
                    return;
                }
            },
            "color-only" => attributes.color_only = value.is_some(),
            "label" => attributes.label = value.map(str::to_string),
            "image" => attributes.image = value.map(str::to_string),
            other => {
                debug!(attribute = other, "ignoring unknown attribute");
                return;
            }
        }
        self.apply(&attributes);
    }

    /// Attributes mirrored back onto the host element
    pub fn reflected_attributes(&self) -> Vec<(&'static str, String)> {
        let mut reflected = vec![
            ("goal", self.state.selector().to_string()),
            ("width", self.state.width().to_string()),
        ];
        if self.state.color_only() {
            reflected.push(("color-only", String::new()));
        }
        reflected
    }

    pub fn render(&self) -> RenderForm {
        self.state.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(goal: &str) -> WidgetAttributes {
        WidgetAttributes { goal: goal.to_string(), ..WidgetAttributes::default() }
    }

    #[test]
    fn test_first_apply_resolves_default_goal() {
        let mut widget = GoalWidget::default();
        assert_eq!(widget.state().resolved_label(), "No Poverty");

        assert!(widget.apply(&WidgetAttributes::default()));
        assert_eq!(widget.state().resolved_label(), "Goal 1: No Poverty");
        assert_eq!(widget.state().resolved_image(), "/lib/svgs/1.svg");
    }

    #[test]
    fn test_invalid_first_goal_keeps_constructor_defaults() {
        let mut widget = GoalWidget::default();
        assert!(!widget.apply(&attrs("nope")));
        assert_eq!(widget.state().resolved_label(), "No Poverty");
        assert_eq!(widget.state().resolved_image(), "/lib/svgs/1.svg");
    }

    #[test]
    fn test_width_only_change_does_not_resolve() {
        let mut widget = GoalWidget::default();
        widget.apply(&attrs("12"));
        widget.set_attribute("label", Some("Consumption"));
        widget.set_attribute("width", Some("80"));

        assert_eq!(widget.state().resolved_label(), "Consumption");
        assert_eq!(widget.state().width(), 80);
    }

    #[test]
    fn test_label_override_survives_unchanged_goal() {
        let mut widget = GoalWidget::default();
        let mut attributes = attrs("2");
        attributes.label = Some("Hunger".to_string());
        widget.apply(&attributes);
        assert_eq!(widget.state().resolved_label(), "Hunger");

        attributes.width = 40;
        widget.apply(&attributes);
        assert_eq!(widget.state().resolved_label(), "Hunger");
    }

    #[test]
    fn test_set_attribute_surface() {
        let mut widget = GoalWidget::default();
        widget.set_attribute("goal", Some("5"));
        widget.set_attribute("color-only", Some(""));
        assert_eq!(
            widget.render(),
            RenderForm::Swatch { color: "#dd4d35".to_string(), size: 254 }
        );

        widget.set_attribute("width", Some("wide"));
        assert_eq!(widget.state().width(), 254);

        widget.set_attribute("color-only", None);
        assert!(!widget.render().is_swatch());

        widget.set_attribute("colour", Some("red"));
        assert_eq!(widget.state().selector(), "5");
    }

    #[test]
    fn test_removed_goal_keeps_previous_goal() {
        let mut widget = GoalWidget::default();
        widget.set_attribute("goal", Some("12"));
        widget.set_attribute("goal", None);

        assert_eq!(widget.state().selector(), "12");
        assert_eq!(
            widget.state().resolved_label(),
            "Goal 12: Responsible Consumption And Production"
        );
        assert_eq!(widget.state().resolved_image(), "/lib/svgs/12.svg");
    }

    #[test]
    fn test_image_override_with_symbolic_goal() {
        let mut widget = GoalWidget::default();
        let attributes = WidgetAttributes {
            image: Some("/custom/wheel.svg".to_string()),
            ..attrs("all")
        };
        widget.apply(&attributes);

        assert_eq!(
            widget.render(),
            RenderForm::Image {
                src: "/custom/wheel.svg".to_string(),
                alt: "All Sustainable Development Goals".to_string(),
                width: 254,
            }
        );
    }

    #[test]
    fn test_reflected_attributes() {
        let mut widget = GoalWidget::default();
        widget.set_attribute("goal", Some("all"));
        assert_eq!(
            widget.reflected_attributes(),
            vec![("goal", "all".to_string()), ("width", "254".to_string())]
        );

        widget.set_attribute("color-only", Some("true"));
        assert!(widget.reflected_attributes().contains(&("color-only", String::new())));
    }

    #[test]
    fn test_attributes_from_json() {
        let attributes: WidgetAttributes =
            serde_json::from_str(r#"{ "goal": "circle", "color-only": true }"#).unwrap();
        assert_eq!(attributes.goal, "circle");
        assert!(attributes.color_only);
        assert_eq!(attributes.width, 254);
    }
}

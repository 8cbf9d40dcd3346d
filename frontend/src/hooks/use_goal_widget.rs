use shared::{AssetConfig, GoalWidget, RenderForm, WidgetAttributes};
use yew::prelude::*;

use crate::services::logging::Logger;

pub struct UseGoalWidgetResult {
    pub form: RenderForm,
    /// Attributes mirrored onto the host element
    pub reflected: Vec<(&'static str, String)>,
}

/// Keeps one `GoalWidget` per component instance and applies the incoming
/// attributes during render, so the returned form never lags the props.
///
/// The asset configuration comes from a `ContextProvider<AssetConfig>` when
/// one is mounted above the component and is read once, on first render.
#[hook]
pub fn use_goal_widget(attributes: WidgetAttributes) -> UseGoalWidgetResult {
    let config = use_context::<AssetConfig>().unwrap_or_default();
    let handle = use_mut_ref(move || GoalWidget::new(config));
    let mut widget = handle.borrow_mut();
    let previous_image = widget.state().resolved_image().to_string();

    if !widget.apply(&attributes) {
        Logger::warn_with_component(
            "un-sdg",
            &format!(
                "goal {:?} is not 1-17, \"all\" or \"circle\"; still showing {}",
                attributes.goal,
                widget.state().resolved_label()
            ),
        );
    } else if widget.state().resolved_image() != previous_image {
        Logger::debug_with_component(
            "un-sdg",
            &format!("goal {} -> {}", attributes.goal, widget.state().resolved_image()),
        );
    }

    UseGoalWidgetResult {
        form: widget.render(),
        reflected: widget.reflected_attributes(),
    }
}

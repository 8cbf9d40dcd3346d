use shared::{host_style, RenderForm, WidgetAttributes, DEFAULT_WIDTH};
use yew::prelude::*;
use yew::virtual_dom::VTag;

use crate::hooks::use_goal_widget::use_goal_widget;

#[derive(Properties, PartialEq, Clone)]
pub struct UnSdgProps {
    /// "1".."17", "all" or "circle"
    #[prop_or(AttrValue::Static("1"))]
    pub goal: AttrValue,
    #[prop_or(DEFAULT_WIDTH)]
    pub width: u32,
    #[prop_or_default]
    pub color_only: bool,
    /// Alt text override; normally derived from the goal
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Image override; normally derived from the goal
    #[prop_or_default]
    pub image: Option<AttrValue>,
}

impl From<&UnSdgProps> for WidgetAttributes {
    fn from(props: &UnSdgProps) -> Self {
        Self {
            goal: props.goal.to_string(),
            width: props.width,
            color_only: props.color_only,
            label: props.label.as_ref().map(|l| l.to_string()),
            image: props.image.as_ref().map(|i| i.to_string()),
        }
    }
}

/// A Sustainable Development Goal icon, or its color as a square swatch
#[function_component(UnSdg)]
pub fn un_sdg(props: &UnSdgProps) -> Html {
    let result = use_goal_widget(WidgetAttributes::from(props));
    let style = result.form.inline_style();

    let body = match result.form {
        RenderForm::Image { src, alt, .. } => html! {
            <img src={src} alt={alt} style={style} />
        },
        RenderForm::Swatch { .. } => html! {
            <div class="un-sdg-swatch" style={style}></div>
        },
    };

    let mut host = VTag::new("span");
    host.add_attribute("class", "un-sdg");
    host.add_attribute("style", host_style());
    for (name, value) in result.reflected {
        host.add_attribute(name, value);
    }
    host.add_child(body);
    host.into()
}

use shared::{goals, AssetConfig, DEFAULT_WIDTH};
use un_sdg::services::logging::Logger;
use un_sdg::UnSdg;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const DEMO_CONFIG: &str = include_str!("../un-sdg.config.json");

fn load_config() -> AssetConfig {
    match AssetConfig::from_json(DEMO_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            Logger::error_with_component("demo", &format!("{}, using defaults", e));
            AssetConfig::default()
        }
    }
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let goal = use_state(|| "1".to_string());
    let width = use_state(|| DEFAULT_WIDTH);
    let color_only = use_state(|| false);

    let on_goal_input = {
        let goal = goal.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                goal.set(value);
            }
        })
    };

    let on_width_input = {
        let width = width.clone();
        Callback::from(move |e: InputEvent| {
            // Anything that isn't a whole number leaves the width alone
            if let Some(px) = input_value(&e).and_then(|v| v.parse::<u32>().ok()) {
                width.set(px);
            }
        })
    };

    let on_toggle_color = {
        let color_only = color_only.clone();
        Callback::from(move |_: MouseEvent| color_only.set(!*color_only))
    };

    html! {
        <ContextProvider<AssetConfig> context={(*config).clone()}>
            <main class="container">
                <h1>{"Sustainable Development Goals"}</h1>
                <p class="asset-note">
                    {format!(
                        "Icons load from {}; the SDG artwork is not bundled, so serve it there \
                         or point asset_root in un-sdg.config.json at a host that has it.",
                        config.asset_root
                    )}
                </p>

                <section class="playground">
                    <label>
                        {"Goal (1-17, all, circle): "}
                        <input type="text" value={(*goal).clone()} oninput={on_goal_input} />
                    </label>
                    <label>
                        {"Width: "}
                        <input type="number" value={(*width).to_string()} oninput={on_width_input} />
                    </label>
                    <button onclick={on_toggle_color}>
                        {if *color_only { "Show icon" } else { "Show color" }}
                    </button>
                    <UnSdg goal={(*goal).clone()} width={*width} color_only={*color_only} />
                </section>

                <section class="gallery">
                    <UnSdg goal="all" width={200} />
                    <UnSdg goal="circle" width={200} />
                    {for goals().iter().map(|g| html! {
                        <UnSdg key={g.index.to_string()} goal={g.index.to_string()} width={96} />
                    })}
                </section>

                <section class="palette">
                    {for goals().iter().map(|g| html! {
                        <UnSdg key={g.index.to_string()} goal={g.index.to_string()} width={48} color_only=true />
                    })}
                </section>
            </main>
        </ContextProvider<AssetConfig>>
    }
}

fn main() {
    Logger::info_with_component("demo", "mounting un-sdg demo");
    yew::Renderer::<App>::new().render();
}

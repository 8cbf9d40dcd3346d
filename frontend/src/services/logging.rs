/// Console logger tagging each line with the component that produced it
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(Self::format(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::format(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

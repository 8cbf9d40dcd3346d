use serde::Serialize;

/// Number of numbered Sustainable Development Goals
pub const GOAL_COUNT: u8 = 17;

/// One numbered goal: its label (used as alt text), swatch color and icon file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalEntry {
    pub index: u8,
    pub label: &'static str,
    /// Hex color used for color-only swatches and the palette variables
    pub color: &'static str,
    /// Icon file name relative to the asset root, e.g. "5.svg"
    pub image_path: &'static str,
}

impl GoalEntry {
    /// Name of the CSS custom property carrying this goal's color
    pub fn css_variable(&self) -> String {
        format!("--un-sdg-goal-{}", self.index)
    }

    /// Alt text shown once the goal has been resolved, e.g. "Goal 5: Gender Equality"
    pub fn display_label(&self) -> String {
        format!("Goal {}: {}", self.index, self.label)
    }
}

const fn entry(index: u8, label: &'static str, color: &'static str, image_path: &'static str) -> GoalEntry {
    GoalEntry { index, label, color, image_path }
}

static GOALS: [GoalEntry; GOAL_COUNT as usize] = [
    entry(1, "No Poverty", "#d83534", "1.svg"),
    entry(2, "Zero Hunger", "#cba342", "2.svg"),
    entry(3, "Good Health and Well-being", "#cba342", "3.svg"),
    entry(4, "Quality Education", "#b32e36", "4.svg"),
    entry(5, "Gender Equality", "#dd4d35", "5.svg"),
    entry(6, "Clean Water And Sanitation", "#4eacd5", "6.svg"),
    entry(7, "Affordable And Clean Energy", "#f3bb42", "7.svg"),
    entry(8, "Decent Work And Economic Growth", "#842036", "8.svg"),
    entry(9, "Industry, Innovation And Infrastructure", "#e37537", "9.svg"),
    entry(10, "Reduced Inequalities", "#ce2f82", "10.svg"),
    entry(11, "Sustainable Cities And Communities", "#eca342", "11.svg"),
    entry(12, "Responsible Consumption And Production", "#c7913e", "12.svg"),
    entry(13, "Climate Action", "#527742", "13.svg"),
    entry(14, "Life Below Water", "#367cb7", "14.svg"),
    entry(15, "Life On Land", "#5fae55", "15.svg"),
    entry(16, "Peace, Justice And Strong Institutions", "#225387", "16.svg"),
    entry(17, "Partnerships For The Goals", "#1b3264", "17.svg"),
];

/// All 17 goals in order
pub fn goals() -> &'static [GoalEntry] {
    &GOALS
}

/// Look up a goal by its 1-based number
pub fn goal(index: u8) -> Option<&'static GoalEntry> {
    if index == 0 {
        return None;
    }
    GOALS.get(usize::from(index) - 1)
}

/// Palette as (CSS variable, color) pairs for consumers that only need the colors
pub fn palette() -> Vec<(String, &'static str)> {
    GOALS.iter().map(|g| (g.css_variable(), g.color)).collect()
}

/// Inline style for the widget host: every palette variable plus the box model
pub fn host_style() -> String {
    let mut style: String = GOALS
        .iter()
        .map(|g| format!("{}: {};", g.css_variable(), g.color))
        .collect();
    style.push_str("display: inline-block;");
    style
}

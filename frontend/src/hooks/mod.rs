pub mod use_goal_widget;

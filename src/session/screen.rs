//! Host screens

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every screen the host can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Login,
    Welcome,
    Questionnaire,
    Dashboard,
    Recipes,
    Coach,
    FoodRecognition,
    RecipeBuilder,
    Community,
    Profile,
}

impl Screen {
    /// Screens reachable from the bottom navigation bar
    pub const TABS: [Screen; 7] = [
        Screen::Dashboard,
        Screen::Recipes,
        Screen::Coach,
        Screen::FoodRecognition,
        Screen::RecipeBuilder,
        Screen::Community,
        Screen::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Welcome => "welcome",
            Screen::Questionnaire => "questionnaire",
            Screen::Dashboard => "dashboard",
            Screen::Recipes => "recipes",
            Screen::Coach => "coach",
            Screen::FoodRecognition => "food-recognition",
            Screen::RecipeBuilder => "recipe-builder",
            Screen::Community => "community",
            Screen::Profile => "profile",
        }
    }

    /// Accepts kebab-case, snake_case or spaces, any case
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "login" => Some(Screen::Login),
            "welcome" => Some(Screen::Welcome),
            "questionnaire" | "health-check" => Some(Screen::Questionnaire),
            "dashboard" | "home" => Some(Screen::Dashboard),
            "recipes" => Some(Screen::Recipes),
            "coach" => Some(Screen::Coach),
            "food-recognition" => Some(Screen::FoodRecognition),
            "recipe-builder" => Some(Screen::RecipeBuilder),
            "community" => Some(Screen::Community),
            "profile" => Some(Screen::Profile),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Welcome => "Welcome",
            Screen::Questionnaire => "Health Check",
            Screen::Dashboard => "Dashboard",
            Screen::Recipes => "Recipes",
            Screen::Coach => "AI Coach",
            Screen::FoodRecognition => "Food Recognition",
            Screen::RecipeBuilder => "Recipe Builder",
            Screen::Community => "Community",
            Screen::Profile => "Profile",
        }
    }

    pub fn is_tab(&self) -> bool {
        Self::TABS.contains(self)
    }

    /// Whether the screen renders only once a health profile exists
    pub fn requires_profile(&self) -> bool {
        matches!(
            self,
            Screen::Dashboard | Screen::Recipes | Screen::Coach | Screen::Profile
        )
    }

    /// The bottom navigation bar is hidden before and during onboarding
    pub fn shows_bottom_navigation(&self) -> bool {
        !matches!(self, Screen::Login | Screen::Welcome | Screen::Questionnaire)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_parsing() {
        assert_eq!(Screen::from_str("food-recognition"), Some(Screen::FoodRecognition));
        assert_eq!(Screen::from_str("Recipe_Builder"), Some(Screen::RecipeBuilder));
        assert_eq!(Screen::from_str(" Profile "), Some(Screen::Profile));
        assert_eq!(Screen::from_str("settings"), None);
    }

    #[test]
    fn test_screen_round_trips_through_str() {
        for screen in Screen::TABS {
            assert_eq!(Screen::from_str(screen.as_str()), Some(screen));
        }
    }

    #[test]
    fn test_bottom_navigation_visibility() {
        assert!(!Screen::Login.shows_bottom_navigation());
        assert!(!Screen::Welcome.shows_bottom_navigation());
        assert!(!Screen::Questionnaire.shows_bottom_navigation());
        assert!(Screen::TABS.iter().all(|s| s.shows_bottom_navigation()));
    }

    #[test]
    fn test_profile_requirements() {
        assert!(Screen::Dashboard.requires_profile());
        assert!(Screen::Profile.requires_profile());
        assert!(!Screen::Community.requires_profile());
        assert!(!Screen::FoodRecognition.requires_profile());
    }

    #[test]
    fn test_serializes_kebab_case() {
        let json = serde_json::to_string(&Screen::FoodRecognition).unwrap();
        assert_eq!(json, "\"food-recognition\"");
    }
}

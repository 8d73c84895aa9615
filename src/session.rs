//! The mutable thumbnail configuration edited over one browser session.

use crate::catalog::Category;

/// The full current selection across all categories plus the light intensity.
///
/// Categorical fields hold option ids from [`crate::catalog`]. `select` is
/// deliberately permissive about the id it is handed; catalog membership is
/// enforced where user input enters the system, in the web layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThumbnailConfig {
    /// Selected emotion id.
    pub emotion: String,
    /// Selected lighting theme id.
    pub lighting_theme: String,
    /// Selected pose id.
    pub pose: String,
    /// Selected gender id.
    pub gender: String,
    /// Selected ethnicity id.
    pub ethnicity: String,
    /// Selected age id.
    pub age: String,
    /// Selected background color id.
    pub background_color: String,
    /// Selected lighting direction id.
    pub lighting_direction: String,
    /// Selected light angle id.
    pub light_angle: String,
    /// Selected frame position id.
    pub position: String,
    /// Light intensity, always within 0..=100.
    pub light_intensity: u8,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            emotion: "peaceful".to_string(),
            lighting_theme: "soft-glow".to_string(),
            pose: "hands-clasped-face".to_string(),
            gender: "female".to_string(),
            ethnicity: "caucasian".to_string(),
            age: "young-adult".to_string(),
            background_color: "soft-blue".to_string(),
            lighting_direction: "backlight".to_string(),
            light_angle: "overhead".to_string(),
            position: "right".to_string(),
            light_intensity: 50,
        }
    }
}

impl ThumbnailConfig {
    /// Replaces the stored id for one category, leaving the rest untouched.
    pub fn select(&mut self, category: Category, option_id: &str) {
        let field = match category {
            Category::Emotion => &mut self.emotion,
            Category::LightingTheme => &mut self.lighting_theme,
            Category::Pose => &mut self.pose,
            Category::Gender => &mut self.gender,
            Category::Ethnicity => &mut self.ethnicity,
            Category::Age => &mut self.age,
            Category::BackgroundColor => &mut self.background_color,
            Category::LightingDirection => &mut self.lighting_direction,
            Category::LightAngle => &mut self.light_angle,
            Category::Position => &mut self.position,
        };
        *field = option_id.to_string();
    }

    /// The id currently selected for a category.
    pub fn selected(&self, category: Category) -> &str {
        match category {
            Category::Emotion => &self.emotion,
            Category::LightingTheme => &self.lighting_theme,
            Category::Pose => &self.pose,
            Category::Gender => &self.gender,
            Category::Ethnicity => &self.ethnicity,
            Category::Age => &self.age,
            Category::BackgroundColor => &self.background_color,
            Category::LightingDirection => &self.lighting_direction,
            Category::LightAngle => &self.light_angle,
            Category::Position => &self.position,
        }
    }

    /// Replaces the light intensity, clamping out-of-range values to 0..=100.
    pub fn set_intensity(&mut self, value: i64) {
        self.light_intensity = value.clamp(0, 100) as u8;
    }

    /// A by-value copy of the current configuration.
    pub fn snapshot(&self) -> ThumbnailConfig {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn defaults_are_catalog_members() {
        let config = ThumbnailConfig::default();
        for category in Category::ALL {
            assert!(
                catalog::contains(category, config.selected(category)),
                "Default for {:?} is not in its catalog",
                category
            );
        }
    }

    #[test]
    fn select_changes_exactly_one_field() {
        let mut config = ThumbnailConfig::default();
        let before = config.snapshot();
        config.select(Category::Emotion, "joyful");

        assert_eq!(config.selected(Category::Emotion), "joyful");
        for category in Category::ALL {
            if category == Category::Emotion {
                continue;
            }
            assert_eq!(config.selected(category), before.selected(category));
        }
        assert_eq!(config.light_intensity, before.light_intensity);
    }

    #[test]
    fn intensity_clamps_to_valid_range() {
        let mut config = ThumbnailConfig::default();
        config.set_intensity(250);
        assert_eq!(config.light_intensity, 100);
        config.set_intensity(-5);
        assert_eq!(config.light_intensity, 0);
        config.set_intensity(42);
        assert_eq!(config.light_intensity, 42);
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut config = ThumbnailConfig::default();
        let snapshot = config.snapshot();
        config.select(Category::Pose, "head-bowed");
        config.set_intensity(90);

        assert_eq!(snapshot.pose, "hands-clasped-face");
        assert_eq!(snapshot.light_intensity, 50);
    }
}

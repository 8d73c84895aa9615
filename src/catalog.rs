//! Fixed option catalogs for each configurable attribute.
//!
//! These are leaf data: ordered `(id, label)` pairs defined at compile time
//! and never mutated. Display order is the order in each slice.

use std::str::FromStr;

/// One selectable entry within a category's catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogOption {
    /// Stable identifier, interpolated into prompts.
    pub id: &'static str,
    /// Human-readable label shown in the picker.
    pub label: &'static str,
}

/// The ten configurable attributes. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Facial emotion of the subject
    Emotion,
    /// Overall lighting theme
    LightingTheme,
    /// Prayer pose
    Pose,
    /// Subject gender
    Gender,
    /// Subject ethnicity
    Ethnicity,
    /// Subject age group
    Age,
    /// Background color
    BackgroundColor,
    /// Direction the key light comes from
    LightingDirection,
    /// Angle of the light source
    LightAngle,
    /// Position of the subject in the frame
    Position,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 10] = [
        Category::Emotion,
        Category::Pose,
        Category::Gender,
        Category::Age,
        Category::Ethnicity,
        Category::LightingTheme,
        Category::BackgroundColor,
        Category::LightingDirection,
        Category::LightAngle,
        Category::Position,
    ];

    /// Wire identifier used in form submissions.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Emotion => "emotion",
            Category::LightingTheme => "lightingTheme",
            Category::Pose => "pose",
            Category::Gender => "gender",
            Category::Ethnicity => "ethnicity",
            Category::Age => "age",
            Category::BackgroundColor => "backgroundColor",
            Category::LightingDirection => "lightingDirection",
            Category::LightAngle => "lightAngle",
            Category::Position => "position",
        }
    }

    /// Section title shown in the studio page.
    pub fn title(self) -> &'static str {
        match self {
            Category::Emotion => "Facial Emotion",
            Category::LightingTheme => "Lighting & Theme",
            Category::Pose => "Prayer Pose",
            Category::Gender => "Gender",
            Category::Ethnicity => "Ethnicity",
            Category::Age => "Age",
            Category::BackgroundColor => "Background Color",
            Category::LightingDirection => "Lighting Direction",
            Category::LightAngle => "Light Angle",
            Category::Position => "Position",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "emotion" => Ok(Category::Emotion),
            "lightingTheme" => Ok(Category::LightingTheme),
            "pose" => Ok(Category::Pose),
            "gender" => Ok(Category::Gender),
            "ethnicity" => Ok(Category::Ethnicity),
            "age" => Ok(Category::Age),
            "backgroundColor" => Ok(Category::BackgroundColor),
            "lightingDirection" => Ok(Category::LightingDirection),
            "lightAngle" => Ok(Category::LightAngle),
            "position" => Ok(Category::Position),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

/// Facial emotions.
pub static EMOTIONS: &[CatalogOption] = &[
    CatalogOption { id: "peaceful", label: "Peaceful" },
    CatalogOption { id: "weary", label: "Weary" },
    CatalogOption { id: "broken", label: "Broken" },
    CatalogOption { id: "hopeful", label: "Hopeful" },
    CatalogOption { id: "surrendering", label: "Surrendering" },
    CatalogOption { id: "reflective", label: "Reflective" },
    CatalogOption { id: "seeking-god", label: "Seeking God" },
    CatalogOption { id: "joyful", label: "Joyful" },
];

/// Lighting themes.
pub static LIGHTING_THEMES: &[CatalogOption] = &[
    CatalogOption { id: "sunlight", label: "Sunlight (Morning Glow)" },
    CatalogOption { id: "sunset", label: "Sunset (Golden Hour)" },
    CatalogOption { id: "moonlight", label: "Moonlight (Cool Light)" },
    CatalogOption { id: "soft-glow", label: "Soft Glow (Peaceful)" },
    CatalogOption { id: "backlight", label: "Backlight (Outline)" },
    CatalogOption { id: "radiant-halo", label: "Radiant Halo (Divine)" },
];

/// Prayer poses.
pub static POSES: &[CatalogOption] = &[
    CatalogOption { id: "hands-clasped-face", label: "Hands clasped near face" },
    CatalogOption { id: "hands-clasped-chest", label: "Hands clasped at chest" },
    CatalogOption { id: "one-hand-raised", label: "One hand raised" },
    CatalogOption { id: "hands-surrender", label: "Hands resting in surrender" },
    CatalogOption { id: "head-bowed", label: "Head bowed gently" },
    CatalogOption { id: "head-tilted-up", label: "Head tilted upward" },
];

/// Subject genders.
pub static GENDERS: &[CatalogOption] = &[
    CatalogOption { id: "male", label: "Male" },
    CatalogOption { id: "female", label: "Female" },
];

/// Subject ethnicities.
pub static ETHNICITIES: &[CatalogOption] = &[
    CatalogOption { id: "caucasian", label: "Caucasian" },
    CatalogOption { id: "african-american", label: "African American" },
    CatalogOption { id: "hispanic", label: "Hispanic" },
    CatalogOption { id: "asian", label: "Asian" },
    CatalogOption { id: "middle-eastern", label: "Middle Eastern" },
    CatalogOption { id: "south-asian", label: "South Asian" },
    CatalogOption { id: "pacific-islander", label: "Pacific Islander" },
    CatalogOption { id: "mixed-race", label: "Mixed Race" },
];

/// Subject age groups.
pub static AGES: &[CatalogOption] = &[
    CatalogOption { id: "child", label: "Child" },
    CatalogOption { id: "teenager", label: "Teenager" },
    CatalogOption { id: "young-adult", label: "Young Adult" },
    CatalogOption { id: "adult", label: "Adult" },
    CatalogOption { id: "senior", label: "Senior" },
];

/// Background colors.
pub static BG_COLORS: &[CatalogOption] = &[
    CatalogOption { id: "soft-blue", label: "Soft Blue (Calm)" },
    CatalogOption { id: "golden-yellow", label: "Golden Yellow (Hope)" },
    CatalogOption { id: "warm-orange", label: "Warm Orange (Energizing)" },
    CatalogOption { id: "deep-purple", label: "Deep Purple (Spiritual)" },
    CatalogOption { id: "soft-pink", label: "Soft Pink (Gentle)" },
    CatalogOption { id: "dark-gray", label: "Dark Gray/Black (Serious)" },
    CatalogOption { id: "light-beige", label: "Light Beige (Neutral)" },
    CatalogOption { id: "white", label: "White/Light Gray (Pure)" },
];

/// Key light directions.
pub static LIGHTING_DIRECTIONS: &[CatalogOption] = &[
    CatalogOption { id: "backlight", label: "Backlit (Behind Subject)" },
    CatalogOption { id: "frontlight", label: "Front Lit" },
    CatalogOption { id: "sidelight", label: "Side Lit" },
];

/// Light source angles.
pub static LIGHT_ANGLES: &[CatalogOption] = &[
    CatalogOption { id: "soft-side", label: "Soft Side Angle" },
    CatalogOption { id: "overhead", label: "Overhead Angle" },
    CatalogOption { id: "diagonal", label: "Diagonal Angle" },
    CatalogOption { id: "direct-backlight", label: "Direct Backlight" },
];

/// Frame positions.
pub static POSITIONS: &[CatalogOption] = &[
    CatalogOption { id: "left", label: "Left Position" },
    CatalogOption { id: "right", label: "Right Position" },
    CatalogOption { id: "center", label: "Center Position" },
];

/// The ordered catalog for a category.
pub fn options_for(category: Category) -> &'static [CatalogOption] {
    match category {
        Category::Emotion => EMOTIONS,
        Category::LightingTheme => LIGHTING_THEMES,
        Category::Pose => POSES,
        Category::Gender => GENDERS,
        Category::Ethnicity => ETHNICITIES,
        Category::Age => AGES,
        Category::BackgroundColor => BG_COLORS,
        Category::LightingDirection => LIGHTING_DIRECTIONS,
        Category::LightAngle => LIGHT_ANGLES,
        Category::Position => POSITIONS,
    }
}

/// Returns true when `id` is present in the category's catalog.
pub fn contains(category: Category, id: &str) -> bool {
    options_for(category).iter().any(|option| option.id == id)
}

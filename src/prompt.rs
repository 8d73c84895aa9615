//! Prompt assembly for the image model.

use crate::session::ThumbnailConfig;

/// Maps the 0-100 intensity slider onto one of five lighting phrases.
pub fn intensity_phrase(value: u8) -> &'static str {
    if value < 20 {
        "barely visible, subtle glow"
    } else if value < 40 {
        "very soft, dim illumination"
    } else if value < 60 {
        "gentle, balanced light"
    } else if value < 85 {
        "clear, pronounced backlight"
    } else {
        "vibrant, radiant divine light"
    }
}

/// Renders the full generation prompt for a configuration.
///
/// Deterministic: the same configuration always yields the same string.
pub fn format_prompt(config: &ThumbnailConfig) -> String {
    format!(
        "A professional high-resolution YouTube thumbnail, 16:9 aspect ratio. \
         Character: A {age} {ethnicity} {gender}. \
         Facial Expression: {emotion}. \
         Pose: {pose}. \
         Position: Placed at the {position} of the frame. \
         Background: {background} environment with {theme} lighting. \
         Lighting: Light coming from a {angle} behind the character. \
         Light Intensity: {intensity}. \
         Visual Style: Cinematic, spiritual, high-quality photography, peaceful atmosphere. \
         CRITICAL: The light must be soft and gentle, ensuring the character's face is \
         clearly visible, properly illuminated, and NOT overexposed. \
         NO TEXT, NO TITLES, NO GRAPHICS. Pure character and atmosphere.",
        age = config.age,
        ethnicity = config.ethnicity,
        gender = config.gender,
        emotion = config.emotion,
        pose = config.pose,
        position = config.position,
        background = config.background_color,
        theme = config.lighting_theme,
        angle = config.light_angle,
        intensity = intensity_phrase(config.light_intensity),
    )
}

//! Shared constants for the studio
//!

/// Base URL for the Gemini generative language API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Image model used when no override is supplied.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Aspect ratio requested for every thumbnail.
pub const THUMBNAIL_ASPECT_RATIO: &str = "16:9";

/// The one user-facing message shown for any failed generation.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate thumbnail. Please check your API key and try again.";

/// Filename prefix for downloaded thumbnails.
pub const DOWNLOAD_FILE_PREFIX: &str = "prayer-thumbnail";

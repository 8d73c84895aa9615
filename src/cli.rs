//! CLI parser
use crate::constants::DEFAULT_IMAGE_MODEL;
use clap::Parser;
use std::num::NonZeroU16;

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "DIVINETHUMB_DEBUG")]
    /// Enable debug logging. Env: DIVINETHUMB_DEBUG
    pub debug: bool,
    #[clap(long, short, default_value = "9000", env = "DIVINETHUMB_PORT")]
    /// http listener, defaults to `9000`.
    /// Env: DIVINETHUMB_PORT
    pub port: NonZeroU16,
    #[clap(
        long,
        short,
        default_value = "127.0.0.1",
        env = "DIVINETHUMB_LISTEN_ADDRESS"
    )]
    /// Listen address, defaults to `127.0.0.1`.
    /// Env: DIVINETHUMB_LISTEN_ADDRESS
    pub listen_address: String,

    #[clap(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    /// API key for the Gemini image service.
    /// Env: GEMINI_API_KEY
    pub gemini_api_key: String,

    #[clap(
        long,
        default_value = DEFAULT_IMAGE_MODEL,
        env = "DIVINETHUMB_IMAGE_MODEL"
    )]
    /// Image model identifier.
    /// Env: DIVINETHUMB_IMAGE_MODEL
    pub image_model: String,
}

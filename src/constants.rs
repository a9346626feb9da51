//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key under which the serialized `[{id, likes}]` list is stored
pub const LIKES_KEY: &str = "project_likes";

/// Key under which the theme flag ("light" / "dark") is stored
pub const THEME_KEY: &str = "theme";

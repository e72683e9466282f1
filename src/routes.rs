// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const KEY: &str = "/{key}";
pub const HEALTH: &str = "/health";

use serde::Deserialize;

/// Query parameters for the list-keys endpoint
///
/// `encode` is a presence flag: `?encode` (with or without a value) turns on
/// percent-encoding of the listed keys. Deserializing a bare `?encode` yields
/// `Some("")`, so `is_some()` is the presence test.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ListQuery {
    pub prefix: Option<String>,
    pub encode: Option<String>,
}

impl ListQuery {
    pub fn encode(&self) -> bool {
        self.encode.is_some()
    }

    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }
}

use secrecy::SecretString;

/// Confluence page publishing settings. Only the page id is required for
/// publishing to be attempted; the remaining values are checked when
/// publishing so that gaps surface as publish warnings.
#[derive(Debug, Clone, Default)]
pub struct WikiConfig {
    pub base_url: Option<String>,
    pub page_id: String,
    pub email: Option<String>,
    pub api_token: Option<SecretString>,
}

//! Implements the Wiki trait for Confluence
use async_trait::async_trait;
use log::*;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::{ChangelogError, Result},
    wiki::{
        config::WikiConfig,
        traits::Wiki,
        types::{ConfluencePage, PageBody, PageVersion, StorageValue, UpdatePage},
    },
};

/// Values required to talk to the Confluence REST API.
struct Credentials<'a> {
    base_url: &'a str,
    email: &'a str,
    api_token: &'a SecretString,
}

/// Confluence wiki implementation using reqwest with basic authentication.
pub struct Confluence {
    config: WikiConfig,
    client: Client,
}

impl Confluence {
    pub fn new(config: WikiConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    fn credentials(&self) -> Result<Credentials<'_>> {
        let missing = [
            ("CONFLUENCE_BASE_URL", self.config.base_url.is_none()),
            ("CONFLUENCE_EMAIL", self.config.email.is_none()),
            ("CONFLUENCE_API_TOKEN", self.config.api_token.is_none()),
        ]
        .into_iter()
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| name)
        .collect::<Vec<&str>>();

        match (
            self.config.base_url.as_deref(),
            self.config.email.as_deref(),
            self.config.api_token.as_ref(),
        ) {
            (Some(base_url), Some(email), Some(api_token)) => Ok(Credentials {
                base_url: base_url.trim_end_matches('/'),
                email,
                api_token,
            }),
            _ => Err(ChangelogError::publish(format!(
                "Missing Confluence environment variables: {}",
                missing.join(", ")
            ))),
        }
    }

    fn content_url(&self, creds: &Credentials<'_>, page_id: &str) -> String {
        format!("{}/wiki/rest/api/content/{page_id}", creds.base_url)
    }

    fn check_status(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::UNAUTHORIZED => Err(ChangelogError::publish(
                "Confluence authentication failed. Check CONFLUENCE_EMAIL and CONFLUENCE_API_TOKEN.",
            )),
            StatusCode::NOT_FOUND => Err(ChangelogError::publish(format!(
                "Confluence page not found. Check CONFLUENCE_PAGE_ID: {}",
                self.config.page_id
            ))),
            StatusCode::CONFLICT => Err(ChangelogError::PublishConflict),
            _ => Ok(response.error_for_status()?),
        }
    }

    async fn get_page(&self, creds: &Credentials<'_>) -> Result<ConfluencePage> {
        let url = self.content_url(creds, &self.config.page_id);

        debug!("fetching confluence page: {url}");

        let request = self
            .client
            .get(url)
            .query(&[("expand", "body.storage,version,title")])
            .basic_auth(creds.email, Some(creds.api_token.expose_secret()))
            .build()?;
        let response = self.client.execute(request).await?;
        let result = self.check_status(response)?;
        let page: ConfluencePage = result.json().await?;

        Ok(page)
    }
}

#[async_trait]
impl Wiki for Confluence {
    async fn prepend(&self, html: &str) -> Result<()> {
        let creds = self.credentials()?;
        let page = self.get_page(&creds).await?;

        let next_version = page.version.number + 1;

        debug!(
            "updating confluence page \"{}\" to version {next_version}",
            page.title
        );

        let url = self.content_url(&creds, &page.id);

        let payload = UpdatePage {
            id: page.id,
            page_type: page.page_type,
            title: page.title,
            version: PageVersion {
                number: next_version,
            },
            body: PageBody {
                storage: StorageValue {
                    value: format!("{html}{}", page.body.storage.value),
                    representation: "storage".to_string(),
                },
            },
        };

        let request = self
            .client
            .put(url)
            .basic_auth(creds.email, Some(creds.api_token.expose_secret()))
            .json(&payload)
            .build()?;
        let response = self.client.execute(request).await?;
        self.check_status(response)?;

        Ok(())
    }
}

use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::catalog::WidgetCatalog;
use crate::choice::WidgetChoice;
use crate::config::DyConfig;
use crate::constants::{API_KEY_HEADER, CHOOSE_PATH};
use crate::error::Result;
use crate::metrics::RepositoryMetrics;
use crate::repository::{order_choices, CommonError, DyResult, WidgetRepository, WidgetSelection};

/// Widget repository backed by the remote choose endpoint
pub struct HttpWidgetRepository {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    context: RequestContext,
}

#[derive(Debug, Clone)]
struct RequestContext {
    user_id: String,
    session_id: String,
    page_type: String,
    page_location: String,
    locale: Option<String>,
}

#[derive(Serialize)]
struct ChooseRequest<'a> {
    user: UserRef<'a>,
    session: SessionRef<'a>,
    selector: SelectorRef<'a>,
    context: ContextRef<'a>,
    options: ChooseOptions,
}

#[derive(Serialize)]
struct UserRef<'a> {
    dyid: &'a str,
    dyid_server: &'a str,
}

#[derive(Serialize)]
struct SessionRef<'a> {
    dy: &'a str,
}

#[derive(Serialize)]
struct SelectorRef<'a> {
    names: &'a [&'static str],
}

#[derive(Serialize)]
struct ContextRef<'a> {
    page: PageRef<'a>,
}

#[derive(Serialize)]
struct PageRef<'a> {
    #[serde(rename = "type")]
    page_type: &'a str,
    location: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<&'a str>,
    data: &'a [serde_json::Value],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChooseOptions {
    is_implicit_pageview: bool,
}

#[derive(Deserialize)]
struct ChooseResponse {
    #[serde(default)]
    choices: Vec<WidgetChoice>,
}

impl HttpWidgetRepository {
    pub fn new(config: &DyConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        let endpoint = format!("{}{}", config.base_url.trim_end_matches('/'), CHOOSE_PATH);
        debug!("Choose endpoint: {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            context: RequestContext {
                user_id: config.user_id.clone(),
                session_id: config.session_id.clone(),
                page_type: config.page_type.clone(),
                page_location: config.page_location.clone(),
                locale: config.locale.clone(),
            },
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&'a self, selectors: &'a [&'static str]) -> ChooseRequest<'a> {
        ChooseRequest {
            user: UserRef {
                dyid: &self.context.user_id,
                dyid_server: &self.context.user_id,
            },
            session: SessionRef {
                dy: &self.context.session_id,
            },
            selector: SelectorRef { names: selectors },
            context: ContextRef {
                page: PageRef {
                    page_type: &self.context.page_type,
                    location: &self.context.page_location,
                    locale: self.context.locale.as_deref(),
                    data: &[],
                },
            },
            options: ChooseOptions {
                is_implicit_pageview: false,
            },
        }
    }

    async fn post_choose(&self, selectors: &[&'static str]) -> DyResult<Vec<WidgetChoice>> {
        let body = self.request_body(selectors);

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(CommonError::Server {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: ChooseResponse =
            serde_json::from_str(&text).map_err(|e| CommonError::Parsing(e.to_string()))?;
        Ok(parsed.choices)
    }
}

#[async_trait]
impl<C: WidgetCatalog> WidgetRepository<C> for HttpWidgetRepository {
    #[instrument(skip_all, fields(catalog = %C::VERSION, widgets = selection.widgets().len()))]
    async fn choose_widgets(&self, selection: &WidgetSelection<C>) -> DyResult<Vec<WidgetChoice>> {
        let selectors = selection.selectors();
        let started = Instant::now();

        match self.post_choose(&selectors).await {
            Ok(choices) => {
                let elapsed = started.elapsed().as_secs_f64();
                RepositoryMetrics::record_choose_success(elapsed, choices.len());
                info!(
                    "Received {} choices for {} selectors in {:.3}s",
                    choices.len(),
                    selectors.len(),
                    elapsed
                );
                Ok(order_choices(selection, choices))
            }
            Err(e) => {
                RepositoryMetrics::record_choose_error(e.kind());
                warn!(kind = e.kind(), "Choose request failed: {}", e);
                Err(e)
            }
        }
    }
}

fn map_transport_error(e: reqwest::Error) -> CommonError {
    if e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() {
        CommonError::Network(e.to_string())
    } else {
        CommonError::Unknown(e.to_string())
    }
}

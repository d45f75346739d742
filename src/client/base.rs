use crate::config::DominoConfig;
use crate::disposition::Disposition;
use crate::errors::{check, DominoError};
use crate::models::VersionResponse;
use crate::routes::Routes;
use crate::types::{ApiKey, DeploymentVersion};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Method;
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// _Domino_ client for a single project.
#[derive(Debug)]
pub struct DominoClient {
    client: ClientWithMiddleware,
    /// Same as `client`, but does not follow redirects. Legacy endpoints
    /// report their outcome in the redirect response itself.
    no_redirect: ClientWithMiddleware,
    routes: Routes,
    api_key: ApiKey,
    version: DeploymentVersion,
}

pub struct DominoClientBuilder {
    config: DominoConfig,
    client: reqwest_middleware::ClientBuilder,
    no_redirect: reqwest_middleware::ClientBuilder,
}

impl DominoClientBuilder {
    pub(crate) fn new(config: DominoConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new()
            .default_headers(accept_json())
            .build()?;
        let no_redirect = reqwest::ClientBuilder::new()
            .default_headers(accept_json())
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            config,
            client: reqwest_middleware::ClientBuilder::new(client),
            no_redirect: reqwest_middleware::ClientBuilder::new(no_redirect),
        })
    }

    /// Add middleware to the HTTP client, e.g. for retries or tracing.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        let middleware = Arc::new(middleware);
        Self {
            config: self.config,
            client: self.client.with_arc(middleware.clone()),
            no_redirect: self.no_redirect.with_arc(middleware),
        }
    }

    /// Connect to the Domino API, which fetches the deployment version.
    pub async fn connect(self) -> Result<DominoClient, DominoError> {
        log::info!("Initializing Domino API with host {}", self.config.host);
        let client = self.client.build();
        let routes = Routes::new(self.config.host, self.config.project);
        let res = client
            .get(routes.deployment_version())
            .basic_auth("", Some(self.config.api_key.expose()))
            .send()
            .await?;
        let data: VersionResponse = check(res).await?.json().await?;
        log::info!("Domino deployment is running version {}", data.version);
        Ok(DominoClient {
            client,
            no_redirect: self.no_redirect.build(),
            routes,
            api_key: self.config.api_key,
            version: data.version,
        })
    }
}

fn accept_json() -> HeaderMap {
    HeaderMap::from_iter([(ACCEPT, HeaderValue::from_static("application/json"))])
}

impl DominoClient {
    /// Create a client builder.
    pub fn build(config: DominoConfig) -> Result<DominoClientBuilder, reqwest::Error> {
        DominoClientBuilder::new(config)
    }

    /// Get the routes of this client's project.
    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Version of the deployment, as fetched when connecting.
    pub fn version(&self) -> &DeploymentVersion {
        &self.version
    }

    /// Fetch the deployment's version information.
    pub async fn deployment_version(&self) -> Result<serde_json::Value, DominoError> {
        self.get_json(self.routes.deployment_version()).await
    }

    /// Fail unless the deployment is at least version `minimum`.
    pub fn requires_at_least(&self, minimum: &'static str) -> Result<(), DominoError> {
        if self.version.at_least(minimum) {
            Ok(())
        } else {
            Err(DominoError::VersionGate {
                required: minimum,
                actual: self.version.clone(),
            })
        }
    }

    // ==================================================
    //                 HELPER METHODS
    // ==================================================

    pub(super) fn request(&self, method: Method, url: String) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .basic_auth("", Some(self.api_key.expose()))
    }

    /// Request to a legacy endpoint. Redirects are not followed.
    pub(super) fn legacy_request(&self, method: Method, url: String) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.no_redirect
            .request(method, url)
            .basic_auth("", Some(self.api_key.expose()))
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, DominoError> {
        let res = self.request(Method::GET, url).send().await?;
        Ok(check(res).await?.json().await?)
    }

    pub(super) async fn send_json<B: Serialize>(
        &self,
        method: Method,
        url: String,
        body: &B,
    ) -> Result<reqwest::Response, DominoError> {
        let res = self
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(body)?)
            .send()
            .await?;
        check(res).await
    }

    /// POST a form to a legacy endpoint which answers with a `PLAY_FLASH` cookie.
    pub(super) async fn post_flash_form<F: Serialize>(
        &self,
        url: String,
        form: &F,
    ) -> Result<Disposition, DominoError> {
        let res = self
            .legacy_request(Method::POST, url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(serde_urlencoded::to_string(form)?)
            .send()
            .await?;
        match Disposition::from_cookie_response(&res) {
            Ok(disposition) => disposition.into_result(),
            Err(DominoError::MissingFlashCookie) => {
                check(res).await?;
                Err(DominoError::MissingFlashCookie)
            }
            Err(e) => Err(e),
        }
    }

    /// POST a form to a legacy endpoint which answers only with its status code.
    pub(super) async fn post_status_form<F: Serialize>(
        &self,
        url: String,
        form: &F,
    ) -> Result<Disposition, DominoError> {
        let res = self
            .request(Method::POST, url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(serde_urlencoded::to_string(form)?)
            .send()
            .await?;
        Disposition::from_status_response(res).await?.into_result()
    }
}

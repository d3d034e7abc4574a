//! Client layer: resolves credentials, validates, and drives the transport.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;

use crate::domain::{
    ErrorCode, KnownErrorCode, Login, Password, Request, SendResponse, SenderId, ValidationError,
};

const DEFAULT_SEND_ENDPOINT: &str = "https://smsc.ru/rest/send/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials plus an optional default sender name.
///
/// Filled into every request that carries neither `login` nor `password`.
pub struct Credentials {
    login: Login,
    password: Password,
    sender: Option<SenderId>,
}

impl Credentials {
    /// Validate the login and password; an empty (or blank) `sender` means no default sender.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        sender: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let sender = sender.into();
        let sender = if sender.trim().is_empty() {
            None
        } else {
            Some(SenderId::new(sender)?)
        };
        Ok(Self {
            login: Login::new(login)?,
            password: Password::new(password)?,
            sender,
        })
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn sender(&self) -> Option<&SenderId> {
        self.sender.as_ref()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmscClient`].
///
/// Real credentials never appear in these errors.
pub enum SmscError {
    /// The request failed a field check; `request` is the JSON body with
    /// `login` and `psw` redacted.
    #[error("failed to validate request {request}: {source}")]
    Validation {
        request: String,
        #[source]
        source: ValidationError,
    },

    /// The request could not be encoded as JSON.
    #[error("failed to encode request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, connection reset, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with an empty body.
    #[error("empty response from server")]
    EmptyResponse,

    /// The server answered with a status other than 200.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16 },

    /// Response body is not a valid response envelope.
    #[error("failed to parse response {body:?}: {source}")]
    MalformedResponse {
        body: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// SMSC.RU rejected the whole request.
    ///
    /// Look `code` up with [`ErrorCode::description`].
    #[error("gateway error {}: {message}", code.as_i32())]
    Gateway { message: String, code: ErrorCode },

    /// SMSC.RU rejected one of the recipients.
    #[error("recipient {phone} rejected: {message}")]
    Recipient { phone: String, message: String },

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl SmscError {
    /// Whether the gateway rejected the account login or password.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Gateway { code, .. } => code.known().is_some_and(KnownErrorCode::is_auth_error),
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmscClient`].
///
/// Use this when you need to customize the endpoint or user-agent.
pub struct SmscClientBuilder {
    credentials: Credentials,
    endpoint: String,
    user_agent: Option<String>,
}

impl SmscClientBuilder {
    /// Create a builder with the default endpoint and no user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            user_agent: None,
        }
    }

    /// Override the SMSC.RU endpoint URL for `rest/send`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmscClient`].
    pub fn build(self) -> Result<SmscClient, SmscError> {
        let endpoint = url::Url::parse(&self.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmscError::Transport(Box::new(err)))?;

        Ok(SmscClient {
            credentials: self.credentials,
            endpoint: endpoint.into(),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SMSC.RU client.
///
/// This type orchestrates credential resolution, validation, JSON encoding,
/// and response interpretation. By default it posts to
/// `https://smsc.ru/rest/send/`.
///
/// Each [`SmscClient::send`] call is a single POST; nothing is retried.
///
/// `send` emits `tracing` events at `debug` and `trace` level: the endpoint,
/// the HTTP status and body size of the reply, the gateway error code and the
/// status of a rejected recipient. No subscriber is installed by this crate.
/// Credentials, phone numbers and message text are never part of an event.
pub struct SmscClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl SmscClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`SmscClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmscClientBuilder {
        SmscClientBuilder::new(credentials)
    }

    /// The request exactly as [`SmscClient::send`] would submit it.
    ///
    /// If `request` has neither `login` nor `password`, the client's
    /// credentials are filled in. An empty `sender` takes the client's default
    /// sender, if any. The caller's request is left untouched.
    pub fn resolve(&self, request: &Request) -> Request {
        let mut resolved = request.clone();
        if resolved.lacks_credentials() {
            resolved.login = self.credentials.login.as_str().to_owned();
            resolved.password = self.credentials.password.as_str().to_owned();
        }
        if resolved.sender.is_empty() {
            if let Some(sender) = self.credentials.sender() {
                resolved.sender = sender.as_str().to_owned();
            }
        }
        resolved
    }

    /// Send a message through SMSC.RU.
    ///
    /// Errors:
    /// - [`SmscError::Validation`] when the resolved request fails a field check,
    /// - [`SmscError::EmptyResponse`] / [`SmscError::HttpStatus`] for empty or non-200 replies,
    /// - [`SmscError::MalformedResponse`] when the body is not a response envelope,
    /// - [`SmscError::Gateway`] when SMSC.RU reports a top-level error,
    /// - [`SmscError::Recipient`] when any recipient carries an error.
    pub async fn send(&self, request: &Request) -> Result<SendResponse, SmscError> {
        let request = self.resolve(request);

        if let Err(source) = request.validate() {
            let request = crate::transport::encode_send_json_redacted(&request)
                .map_err(SmscError::Serialization)?;
            return Err(SmscError::Validation { request, source });
        }

        let body =
            crate::transport::encode_send_json(&request).map_err(SmscError::Serialization)?;

        tracing::debug!(endpoint = %self.endpoint, "posting send request");
        let response = self
            .http
            .post_json(&self.endpoint, body)
            .await
            .map_err(SmscError::Transport)?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "gateway replied"
        );

        if response.body.is_empty() {
            return Err(SmscError::EmptyResponse);
        }
        if response.status != 200 {
            return Err(SmscError::HttpStatus {
                status: response.status,
            });
        }

        let parsed = match crate::transport::decode_send_json_response(&response.body) {
            Ok(parsed) => parsed,
            Err(source) => {
                return Err(SmscError::MalformedResponse {
                    body: response.body,
                    source: Box::new(source),
                });
            }
        };

        if parsed.has_error() {
            tracing::debug!(
                error_code = parsed.error_code.as_i32(),
                "gateway rejected request"
            );
            return Err(SmscError::Gateway {
                message: parsed.error,
                code: parsed.error_code,
            });
        }

        if let Some(recipient) = parsed.first_recipient_error() {
            tracing::trace!(status = %recipient.status, "gateway rejected a recipient");
            return Err(SmscError::Recipient {
                phone: recipient.phone.clone(),
                message: recipient.error.clone(),
            });
        }

        Ok(parsed)
    }
}

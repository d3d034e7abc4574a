//! Typed Rust client for the SMSC.RU REST send API.
//!
//! The crate has a domain layer (the [`Request`] record and its validation
//! rules), a transport layer for the JSON wire format, and a small client layer
//! that resolves credentials, validates and posts requests.
//!
//! ```rust,no_run
//! use smsc::{Credentials, Request, SmscClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SmscClient::new(Credentials::new("login", "password", "Sender")?);
//!     let request = Request::to_phones("+79251234567", "hello");
//!     let response = client.send(&request).await?;
//!     println!("id {}, parts {}, balance {}", response.id, response.cnt, response.balance);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, SmscClient, SmscClientBuilder, SmscError};
pub use domain::{
    ErrorCode, KnownErrorCode, Login, Password, PhoneNumber, RecipientResult, Request,
    SendResponse, SenderId, ValidationError,
};

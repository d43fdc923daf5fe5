//! Attach OAuth 2.0 credentials to every outgoing HTTP request: bearer, basic, and signed
//! MAC headers rendered from whatever token a pluggable provider hands out.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod http;
pub mod obs;
pub mod provider;
pub mod transport;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
#[cfg(test)] use {color_eyre as _, httpmock as _};

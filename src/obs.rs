//! Optional observability helpers for authorized sends.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_transport.send` with a `scheme`
//!   field (`bearer`, `basic`, `mac`, `other`, or `none`).
//! - Enable `metrics` to increment the `oauth2_transport_send_total` counter for every
//!   attempt/success/failure, labeled by `scheme` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, auth::TokenType};

/// Scheme label used when a request goes out without credentials.
pub const UNAUTHENTICATED: &str = "none";

/// Returns the span/metric label for an optional token type.
pub fn scheme_label(kind: Option<&TokenType>) -> &'static str {
	kind.map_or(UNAUTHENTICATED, TokenType::label)
}

/// Outcome labels recorded for each send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SendOutcome {
	/// Entry to the transport.
	Attempt,
	/// Response returned by the underlying sender.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl SendOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SendOutcome::Attempt => "attempt",
			SendOutcome::Success => "success",
			SendOutcome::Failure => "failure",
		}
	}
}
impl Display for SendOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scheme_labels_cover_unauthenticated_sends() {
		assert_eq!(scheme_label(None), "none");
		assert_eq!(scheme_label(Some(&TokenType::Mac)), "mac");
		assert_eq!(SendOutcome::Failure.to_string(), "failure");
	}
}

// self
use crate::_prelude::*;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedSend<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedSend<F> = F;

/// Span wrapping one authorized send.
#[derive(Clone, Debug)]
pub struct SendSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SendSpan {
	/// Creates a new span tagged with the scheme label.
	pub fn new(scheme: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("oauth2_transport.send", scheme);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = scheme;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedSend<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event when a request leaves without credentials.
pub(crate) fn note_unauthenticated() {
	#[cfg(feature = "tracing")]
	tracing::debug!("No access token available; sending request without Authorization.");
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = SendSpan::new("bearer");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}

// self
use crate::obs::SendOutcome;

/// Records a send outcome via the global metrics recorder (when enabled).
pub fn record_send_outcome(scheme: &'static str, outcome: SendOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_transport_send_total",
			"scheme" => scheme,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (scheme, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_send_outcome_noop_without_metrics() {
		record_send_outcome("bearer", SendOutcome::Failure);
	}
}

use thiserror::Error;

/// Downstream channels the forwarder delivers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Ntfy,
    Discord,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Ntfy => "ntfy",
            Channel::Discord => "discord",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forwarder error taxonomy
///
/// `MalformedRequest` surfaces to the caller as the generic error response;
/// `DeliveryFailure` is logged and only reflected in the per-channel
/// counters.
#[derive(Debug, Error)]
pub enum ForwarderError {
    #[error("Error processing webhook: {0}")]
    MalformedRequest(String),

    #[error("Error sending to {channel}: {reason}")]
    DeliveryFailure { channel: Channel, reason: String },
}

impl ForwarderError {
    pub fn delivery(channel: Channel, reason: impl Into<String>) -> Self {
        Self::DeliveryFailure {
            channel,
            reason: reason.into(),
        }
    }
}

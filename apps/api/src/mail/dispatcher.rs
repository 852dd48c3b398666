//! Notification Dispatcher — one fixed-content email per recipient.
//!
//! Contract:
//! - an empty recipient list is rejected before any relay call
//! - sends are strictly sequential; each send completes before the next starts
//! - the first relay failure aborts the loop; nothing is retried
//! - duplicates are sent as many times as they appear

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::mail::relay::{MailRelay, OutgoingMail};

/// Outcome when every recipient was handed to the relay.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DispatchReport {
    pub status: &'static str,
    pub sent: Vec<String>,
    pub sent_count: usize,
}

/// Outcome when the relay failed on one recipient and the rest were skipped.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, thiserror::Error)]
#[error("relay failed for recipient {failed_index} ({failed_address}): {reason}; {} not attempted", .not_attempted.len())]
pub struct DispatchFailure {
    pub failed_index: usize,
    pub failed_address: String,
    pub reason: String,
    pub sent: Vec<String>,
    pub not_attempted: Vec<String>,
}

pub async fn send_bulk(
    relay: &dyn MailRelay,
    addresses: &[String],
    subject: &str,
    body: &str,
) -> Result<DispatchReport, AppError> {
    if addresses.is_empty() {
        return Err(AppError::Validation(
            "Select at least one company email to notify".to_string(),
        ));
    }

    info!("Dispatching mail to {} recipient(s)", addresses.len());

    for (index, address) in addresses.iter().enumerate() {
        let mail = OutgoingMail {
            to: address,
            subject,
            body,
        };
        if let Err(e) = relay.send(mail).await {
            warn!("Send to {address} failed, aborting remaining sends: {e}");
            return Err(AppError::Dispatch(DispatchFailure {
                failed_index: index,
                failed_address: address.clone(),
                reason: e.to_string(),
                sent: addresses[..index].to_vec(),
                not_attempted: addresses[index + 1..].to_vec(),
            }));
        }
    }

    info!("All {} mail(s) handed to relay", addresses.len());

    Ok(DispatchReport {
        status: "sent",
        sent: addresses.to_vec(),
        sent_count: addresses.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::relay::recording::RecordingRelay;

    fn addrs(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    fn failure(err: AppError) -> DispatchFailure {
        match err {
            AppError::Dispatch(f) => f,
            other => panic!("expected dispatch failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_list_makes_no_relay_calls() {
        let relay = RecordingRelay::default();
        let result = send_bulk(&relay, &[], "s", "b").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(relay.attempts().await.is_empty());
    }

    #[tokio::test]
    async fn test_all_succeed_in_order() {
        let relay = RecordingRelay::default();
        let list = addrs(&["x@a.com", "y@b.com", "z@c.com"]);
        let report = send_bulk(&relay, &list, "s", "b").await.unwrap();
        assert_eq!(report.status, "sent");
        assert_eq!(report.sent_count, 3);
        assert_eq!(relay.attempts().await, list);
    }

    #[tokio::test]
    async fn test_first_failure_aborts_remaining() {
        let relay = RecordingRelay::failing_for(&["x@a.com"]);
        let list = addrs(&["x@a.com", "y@b.com"]);

        let f = failure(send_bulk(&relay, &list, "s", "b").await.unwrap_err());
        assert_eq!(f.failed_index, 0);
        assert_eq!(f.failed_address, "x@a.com");
        assert!(f.sent.is_empty());
        assert_eq!(f.not_attempted, addrs(&["y@b.com"]));
        assert_eq!(relay.attempts().await, addrs(&["x@a.com"]));
    }

    #[tokio::test]
    async fn test_mid_list_failure_reports_split() {
        let relay = RecordingRelay::failing_for(&["y@b.com"]);
        let list = addrs(&["x@a.com", "y@b.com", "z@c.com", "w@d.com"]);

        let f = failure(send_bulk(&relay, &list, "s", "b").await.unwrap_err());
        assert_eq!(f.failed_index, 1);
        assert_eq!(f.sent, addrs(&["x@a.com"]));
        assert_eq!(f.not_attempted, addrs(&["z@c.com", "w@d.com"]));
        assert!(f.reason.contains("mailbox unavailable"));
        assert_eq!(relay.attempts().await, addrs(&["x@a.com", "y@b.com"]));
    }

    #[tokio::test]
    async fn test_duplicates_are_sent_twice() {
        let relay = RecordingRelay::default();
        let list = addrs(&["x@a.com", "x@a.com"]);
        let report = send_bulk(&relay, &list, "s", "b").await.unwrap();
        assert_eq!(report.sent_count, 2);
        assert_eq!(relay.attempts().await.len(), 2);
    }

    #[test]
    fn test_failure_message_counts_skipped() {
        let f = DispatchFailure {
            failed_index: 0,
            failed_address: "x@a.com".to_string(),
            reason: "boom".to_string(),
            sent: vec![],
            not_attempted: addrs(&["y@b.com", "z@c.com"]),
        };
        assert_eq!(
            f.to_string(),
            "relay failed for recipient 0 (x@a.com): boom; 2 not attempted"
        );
    }
}

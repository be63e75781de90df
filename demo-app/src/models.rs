use serde::Serialize;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

pub const APP_TITLE: &str = "Cloud Native DevSecOps Demo App";
pub const SERVICE_NAME: &str = "demo-app";
pub const SERVICE_VERSION: &str = "1.0.0";

/// Liveness payload for `GET /health`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        HealthStatus { status: "ok" }
    }
}

/// Payload for `GET /metrics`: wall-clock time plus static service identity.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MetricsSnapshot {
    /// Seconds since the Unix epoch, with sub-second precision.
    pub timestamp: f64,
    pub service: &'static str,
    pub version: &'static str,
}

impl MetricsSnapshot {
    pub fn at(timestamp: f64) -> Self {
        MetricsSnapshot {
            timestamp,
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
        }
    }

    pub fn now() -> Result<Self, SystemTimeError> {
        Ok(Self::at(unix_timestamp(SystemTime::now())?))
    }
}

/// JSON body for error responses, e.g. `{"detail":"Not Found"}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorBody {
    pub detail: &'static str,
}

impl ErrorBody {
    pub fn not_found() -> Self {
        ErrorBody {
            detail: "Not Found",
        }
    }

    pub fn method_not_allowed() -> Self {
        ErrorBody {
            detail: "Method Not Allowed",
        }
    }
}

// Fails only when `t` is earlier than the epoch.
fn unix_timestamp(t: SystemTime) -> Result<f64, SystemTimeError> {
    Ok(t.duration_since(UNIX_EPOCH)?.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn health_status_serializes_to_ok() {
        let v = serde_json::to_value(HealthStatus::ok()).expect("serialize");
        assert_eq!(v, json!({ "status": "ok" }));
    }

    #[test]
    fn metrics_snapshot_carries_service_identity() {
        let v = serde_json::to_value(MetricsSnapshot::at(1700000000.25)).expect("serialize");
        assert_eq!(
            v,
            json!({ "timestamp": 1700000000.25, "service": "demo-app", "version": "1.0.0" })
        );
    }

    #[test]
    fn error_bodies_use_detail_field() {
        let v = serde_json::to_value(ErrorBody::method_not_allowed()).expect("serialize");
        assert_eq!(v, json!({ "detail": "Method Not Allowed" }));
    }

    #[test]
    fn unix_timestamp_keeps_sub_second_precision() {
        let t = UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(unix_timestamp(t).unwrap(), 1.5);
    }

    #[test]
    fn unix_timestamp_rejects_pre_epoch_time() {
        let t = UNIX_EPOCH - Duration::from_secs(1);
        assert!(unix_timestamp(t).is_err());
    }
}

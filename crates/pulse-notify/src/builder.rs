//! Notification builders.

use rand::Rng;

use pulse_core::{Notification, NotificationKind, PerfMetric};

/// Fixed catalog of simulated system events.
///
/// Decorative only; selection is uniform. Kept for behavioral parity with
/// the dashboard's ambient activity feed.
const EVENT_CATALOG: &[(NotificationKind, &str, &str)] = &[
    (
        NotificationKind::Info,
        "System Update",
        "Dashboard components were refreshed in the background",
    ),
    (
        NotificationKind::Success,
        "Sync Complete",
        "All data sources are up to date",
    ),
    (
        NotificationKind::Warning,
        "High Traffic",
        "Unusual traffic volume detected in the last interval",
    ),
    (
        NotificationKind::Info,
        "Report Ready",
        "A scheduled report is ready to view",
    ),
    (
        NotificationKind::Error,
        "Source Degraded",
        "A data source responded slower than expected",
    ),
];

/// Build a notification for a significant metric delta.
///
/// Positive deltas are `success`, everything else is `warning`. The
/// message renders the absolute delta with one decimal place followed by
/// the metric unit, e.g. "Revenue rose by 5.2$".
pub fn metric_change(metric: &PerfMetric, delta: f64) -> Notification {
    let (kind, headline, verb) = if delta > 0.0 {
        (NotificationKind::Success, "Increased", "rose")
    } else {
        (NotificationKind::Warning, "Decreased", "fell")
    };

    Notification::new(
        kind,
        format!("{} {}", metric.title, headline),
        format!(
            "{} {} by {:.1}{}",
            metric.title,
            verb,
            delta.abs(),
            metric.unit
        ),
    )
}

/// Build a notification for a completed export.
///
/// Always `success`; the format tag is uppercased for display.
pub fn export_complete(format: &str) -> Notification {
    Notification::new(
        NotificationKind::Success,
        "Export Complete",
        format!(
            "Dashboard data exported as {} successfully",
            format.to_uppercase()
        ),
    )
}

/// Pick a simulated system event uniformly from the fixed catalog.
pub fn random_event<R: Rng + ?Sized>(rng: &mut R) -> Notification {
    let (kind, title, message) = EVENT_CATALOG[rng.gen_range(0..EVENT_CATALOG.len())];
    Notification::new(kind, title, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn revenue() -> PerfMetric {
        PerfMetric::new("revenue", "Revenue", "$", 120.0)
    }

    #[test]
    fn test_metric_increase() {
        let n = metric_change(&revenue(), 5.2);

        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.title, "Revenue Increased");
        assert_eq!(n.message, "Revenue rose by 5.2$");
        assert!(!n.is_read);
    }

    #[test]
    fn test_metric_decrease() {
        let n = metric_change(&revenue(), -3.75);

        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(n.title, "Revenue Decreased");
        assert_eq!(n.message, "Revenue fell by 3.8$");
    }

    #[test]
    fn test_zero_delta_is_warning() {
        let n = metric_change(&revenue(), 0.0);
        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(n.message, "Revenue fell by 0.0$");
    }

    #[test]
    fn test_export_uppercases_format() {
        let n = export_complete("pdf");

        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, "Dashboard data exported as PDF successfully");
    }

    #[test]
    fn test_random_event_draws_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let n = random_event(&mut rng);
            assert!(EVENT_CATALOG
                .iter()
                .any(|(kind, title, message)| *kind == n.kind
                    && *title == n.title
                    && *message == n.message));
        }
    }
}

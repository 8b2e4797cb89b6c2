#[cfg(test)]
mod sni_policy_tests {
    use proptest::prelude::*;
    use crate::admission::admission::strip_port;
    use crate::admission::enums::admission_error::AdmissionError;
    use crate::admission::structs::sni_policy::SniPolicy;
    use crate::config::enums::sni_mode::SniMode;

    const SNI: &str = "lsrc-123.us-east-1.aws.private.confluent.cloud";

    fn tenant_policy() -> SniPolicy {
        SniPolicy::new(SniMode::tenant_prefix, Vec::<String>::new())
    }

    #[test]
    fn test_tenant_prefix_dot_separator() {
        assert!(tenant_policy().check(Some(SNI), Some("lsrc-123.domxyz.us-east-1.aws.glb.confluent.cloud")).is_ok());
    }

    #[test]
    fn test_tenant_prefix_dash_separator() {
        assert!(tenant_policy().check(Some(SNI), Some("lsrc-123-domxyz.us-east-1.aws.glb.confluent.cloud:443")).is_ok());
    }

    #[test]
    fn test_tenant_prefix_other_tenant_rejected() {
        let result = tenant_policy().check(Some(SNI), Some("lsrc-999-domxyz.us-east-1.aws.glb.confluent.cloud"));
        let error = result.unwrap_err();
        assert!(matches!(error, AdmissionError::SniMismatch { .. }));
        assert_eq!(error.status().as_u16(), 421);
    }

    #[test]
    fn test_tenant_prefix_requires_separator() {
        assert!(tenant_policy().check(Some(SNI), Some("lsrc-1234.example.com")).is_err());
    }

    #[test]
    fn test_sni_without_dot_rejected() {
        assert!(matches!(
            tenant_policy().check(Some("localhost"), Some("localhost")),
            Err(AdmissionError::SniWithoutPrefix { .. })
        ));
    }

    #[test]
    fn test_absent_sni_accepted() {
        let policy = SniPolicy::new(SniMode::tenant_prefix, vec!["api.example.com"]);
        assert!(policy.check(None, Some("anything.example.org")).is_ok());
        assert!(policy.check(Some(""), None).is_ok());
        assert!(SniPolicy::new(SniMode::strict, Vec::<String>::new()).check(None, Some("a.example.com")).is_ok());
    }

    #[test]
    fn test_strict_mode() {
        let policy = SniPolicy::new(SniMode::strict, Vec::<String>::new());
        assert!(policy.check(Some("api.example.com"), Some("API.example.com:8443")).is_ok());
        assert!(policy.check(Some("api.example.com"), Some("www.example.com")).is_err());
        assert!(policy.check(Some("api.example.com"), None).is_err());
    }

    #[test]
    fn test_disabled_accepts_everything() {
        assert!(SniPolicy::disabled().check(Some("a.example.com"), Some("b.example.org")).is_ok());
    }

    #[test]
    fn test_strip_port() {
        assert_eq!(strip_port("example.com:8443"), "example.com");
        assert_eq!(strip_port("example.com"), "example.com");
        assert_eq!(strip_port("[::1]:8443"), "::1");
        assert_eq!(strip_port("::1"), "::1");
    }

    proptest! {
        #[test]
        fn prop_tenant_prefix_accepts_own_tenant(
            tenant in "[a-z][a-z0-9-]{0,15}",
            rest in "[a-z]{1,10}(\\.[a-z]{1,10}){0,3}",
            separator in prop::sample::select(vec!['.', '-']),
        ) {
            let sni = format!("{}.{}", tenant, rest);
            let host = format!("{}{}{}", tenant, separator, rest);
            prop_assert!(tenant_policy().check(Some(&sni), Some(&host)).is_ok());
        }

        #[test]
        fn prop_tenant_prefix_rejects_other_tenant(
            tenant in "[a-z]{3,10}",
            other in "[0-9]{3,10}",
            rest in "[a-z]{1,10}",
        ) {
            let sni = format!("{}.{}", tenant, rest);
            let host = format!("{}.{}", other, rest);
            prop_assert!(tenant_policy().check(Some(&sni), Some(&host)).is_err());
        }
    }
}

#[cfg(test)]
mod dos_filter_tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use crate::admission::enums::admission_error::AdmissionError;
    use crate::admission::enums::dos_action::DosAction;
    use crate::admission::enums::dos_decision::DosDecision;
    use crate::admission::structs::admission_request::AdmissionRequest;
    use crate::admission::structs::dos_filter::DosFilter;
    use crate::admission::structs::dos_filter_chain::DosFilterChain;
    use crate::admission::structs::key_extractors::{ConnectionKey, RemoteIpKey, TenantFromHost, TenantFromPath};
    use crate::admission::structs::rate_tracker::RateTracker;
    use crate::admission::structs::tenant_rate_limit_state::TenantRateLimitState;
    use crate::admission::traits::key_extractor::KeyExtractor;
    use crate::config::structs::dos_config::DosConfig;

    fn request(port: u16) -> AdmissionRequest {
        AdmissionRequest::new("/v3/clusters/lkc-1/topics").with_remote_addr(format!("10.0.0.1:{}", port).parse().unwrap())
    }

    #[test]
    fn test_action_from_delay() {
        assert_eq!(DosAction::from_delay_ms(-1), DosAction::Reject);
        assert_eq!(DosAction::from_delay_ms(0), DosAction::Throttle);
        assert_eq!(DosAction::from_delay_ms(250), DosAction::Delay(Duration::from_millis(250)));
    }

    #[test]
    fn test_rate_tracker_ring() {
        let start = Instant::now();
        let tracker = RateTracker::new(3, start);
        assert!(!tracker.is_rate_exceeded(start));
        assert!(!tracker.is_rate_exceeded(start));
        assert!(!tracker.is_rate_exceeded(start));
        assert!(tracker.is_rate_exceeded(start + Duration::from_millis(500)));
        // the slot overwritten next was filled at `start`, more than a second ago
        assert!(!tracker.is_rate_exceeded(start + Duration::from_millis(1500)));
        assert_eq!(tracker.capacity(), 3);
    }

    #[test]
    fn test_state_shards_and_eviction() {
        let start = Instant::now();
        let state = TenantRateLimitState::new(10);
        for tenant in 0..100 {
            state.is_rate_exceeded(&format!("tenant-{}", tenant), start);
        }
        assert_eq!(state.len(), 100);
        state.is_rate_exceeded("tenant-0", start + Duration::from_secs(120));
        let removed = state.evict_idle(start + Duration::from_secs(121), Duration::from_secs(60));
        assert_eq!(removed, 99);
        assert_eq!(state.len(), 1);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_eviction_keeps_trackers_in_use() {
        let start = Instant::now();
        let state = TenantRateLimitState::new(2);
        let held = state.tracker("tenant-busy", start);
        state.is_rate_exceeded("tenant-idle", start);

        let later = start + Duration::from_secs(600);
        assert_eq!(state.evict_idle(later, Duration::from_secs(60)), 1);
        assert_eq!(state.len(), 1);

        assert!(!held.is_rate_exceeded(later));
        assert!(!state.is_rate_exceeded("tenant-busy", later));
        assert!(state.is_rate_exceeded("tenant-busy", later));

        drop(held);
        assert_eq!(state.evict_idle(later + Duration::from_secs(600), Duration::from_secs(60)), 1);
        assert!(state.is_empty());
    }

    #[test]
    fn test_key_extractors() {
        let request = request(40000).with_host("lsrc-42.example.com:443");
        assert_eq!(RemoteIpKey.extract(&request).as_deref(), Some("10.0.0.1"));
        assert_eq!(ConnectionKey.extract(&request).as_deref(), Some("10.0.0.1:40000"));
        assert_eq!(TenantFromHost.extract(&request).as_deref(), Some("lsrc-42"));
        assert_eq!(TenantFromPath::new(Some("clusters")).extract(&request).as_deref(), Some("lkc-1"));
        assert_eq!(TenantFromPath::new(None).extract(&request).as_deref(), Some("v3"));
        assert_eq!(TenantFromPath::new(Some("brokers")).extract(&request), None);
        assert_eq!(RemoteIpKey.extract(&AdmissionRequest::new("/")), None);
    }

    #[test]
    fn test_closure_extractor() {
        let extractor: Arc<dyn KeyExtractor> = Arc::new(|request: &AdmissionRequest| request.sni.clone());
        let filter = DosFilter::per_tenant(1, extractor, DosAction::Reject, None);
        let now = Instant::now();
        let request = AdmissionRequest::new("/").with_sni("a.example.com");
        assert_eq!(filter.check_at(&request, now), DosDecision::Admit);
        assert_eq!(filter.check_at(&request, now), DosDecision::Reject);
        assert_eq!(filter.check_at(&AdmissionRequest::new("/"), now), DosDecision::Admit);
    }

    #[test]
    fn test_actions_over_limit() {
        let now = Instant::now();
        for (action, expected) in [
            (DosAction::Reject, DosDecision::Reject),
            (DosAction::Throttle, DosDecision::Throttle),
            (DosAction::Delay(Duration::from_millis(5)), DosDecision::Delay(Duration::from_millis(5))),
        ] {
            let filter = DosFilter::per_connection(2, action, None);
            assert_eq!(filter.check_at(&request(1), now), DosDecision::Admit);
            assert_eq!(filter.check_at(&request(1), now), DosDecision::Admit);
            assert_eq!(filter.check_at(&request(1), now), expected);
            assert_eq!(filter.check_at(&request(2), now), DosDecision::Admit);
        }
    }

    #[test]
    fn test_chain_from_config() {
        let config = DosConfig {
            enabled: true,
            per_connection_enabled: true,
            per_tenant_enabled: true,
            ..DosConfig::default()
        };
        let chain = DosFilterChain::from_config(&config, None);
        let names: Vec<&str> = chain.filters().iter().map(DosFilter::name).collect();
        assert_eq!(names, vec!["global", "connection", "tenant"]);
        assert!(DosFilterChain::from_config(&DosConfig::default(), None).is_empty());
    }

    #[test]
    fn test_chain_stops_at_rejection() {
        let chain = DosFilterChain::new(1, Duration::from_millis(10), None)
            .with_filter(DosFilter::per_connection(1, DosAction::Reject, None))
            .with_filter(DosFilter::global(100, DosAction::Reject, None));
        let now = Instant::now();
        assert_eq!(chain.check_at(&request(1), now), Ok(DosDecision::Admit));
        assert_eq!(
            chain.check_at(&request(1), now),
            Err(AdmissionError::RateLimited { filter: String::from("connection") })
        );
        assert_eq!(chain.filters()[1].state().len(), 1);
    }

    #[test]
    fn test_connection_expiry() {
        let chain = DosFilterChain::new(1, Duration::from_millis(10), Some(Duration::from_secs(30)));
        let accepted = Instant::now();
        assert!(!chain.connection_expired(accepted, accepted + Duration::from_secs(10)));
        assert!(chain.connection_expired(accepted, accepted + Duration::from_secs(30)));
        assert!(!DosFilterChain::new(1, Duration::ZERO, None).connection_expired(accepted, accepted + Duration::from_secs(3600)));
    }

    #[tokio::test]
    async fn test_throttle_permit_times_out() {
        let chain = DosFilterChain::new(1, Duration::from_millis(20), None);
        let held = chain.acquire_throttle().await;
        assert!(held.is_some());
        assert!(chain.acquire_throttle().await.is_none());
        drop(held);
        assert!(chain.acquire_throttle().await.is_some());
    }
}

#[cfg(test)]
mod dos_metrics_tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use crate::admission::enums::dos_action::DosAction;
    use crate::admission::enums::dos_decision::DosDecision;
    use crate::admission::impls::dos_metrics::{METRIC_GROUP, TAG_STATUS};
    use crate::admission::structs::admission_request::AdmissionRequest;
    use crate::admission::structs::dos_filter::DosFilter;
    use crate::admission::structs::in_memory_metrics_sink::InMemoryMetricsSink;
    use crate::admission::structs::status_meters::StatusMeters;
    use crate::admission::traits::metrics_sink::{MetricsSink, MockMetricsSink};

    fn request() -> AdmissionRequest {
        AdmissionRequest::new("/").with_remote_addr("192.0.2.7:5000".parse().unwrap())
    }

    fn exceed(filter: &DosFilter) -> DosDecision {
        let now = Instant::now();
        filter.check_at(&request(), now);
        filter.check_at(&request(), now)
    }

    #[test]
    fn test_reject_registers_and_records_once() {
        let mut sink = MockMetricsSink::new();
        sink.expect_register()
            .withf(|group, tags, _| group.to_string() == METRIC_GROUP && tags.get(TAG_STATUS).map(String::as_str) == Some("429"))
            .times(1)
            .return_const(());
        let filter = DosFilter::per_connection(1, DosAction::Reject, Some(Arc::new(sink)));

        assert_eq!(exceed(&filter), DosDecision::Reject);
        let meters = filter.metrics().meters(429).unwrap();
        assert_eq!(meters.total(), 1);
        assert_eq!(filter.check_at(&request(), Instant::now()), DosDecision::Reject);
        assert_eq!(meters.total(), 2);
    }

    #[test]
    fn test_throttle_and_delay_do_not_record() {
        for action in [DosAction::Throttle, DosAction::Delay(Duration::from_millis(1))] {
            let mut sink = MockMetricsSink::new();
            sink.expect_register().times(0);
            let filter = DosFilter::per_connection(1, action, Some(Arc::new(sink)));
            assert_ne!(exceed(&filter), DosDecision::Reject);
            assert_eq!(filter.metrics().instantiated(), 0);
        }
    }

    #[test]
    fn test_no_sink_instantiates_nothing() {
        let filter = DosFilter::per_connection(1, DosAction::Reject, None);
        assert_eq!(exceed(&filter), DosDecision::Reject);
        assert!(!filter.metrics().is_enabled());
        assert_eq!(filter.metrics().instantiated(), 0);
        assert!(filter.metrics().meters(429).is_none());
    }

    #[test]
    fn test_in_memory_sink_samples() {
        let sink = Arc::new(InMemoryMetricsSink::new());
        let shared: Arc<dyn MetricsSink> = sink.clone();
        let filter = DosFilter::global(1, DosAction::Reject, Some(shared));
        exceed(&filter);
        assert_eq!(sink.registrations(), 1);
        assert_eq!(sink.total_for_status(429), 1);
        let names: Vec<String> = sink.samples().into_iter().map(|(name, _, _)| name).collect();
        assert_eq!(names, vec!["dos-filter-rejected-rate", "dos-filter-rejected-count", "dos-filter-rejected-total"]);
    }

    #[test]
    fn test_status_meters_windows() {
        let epoch = Instant::now();
        let meters = StatusMeters::new(epoch);
        meters.record_at(epoch);
        meters.record_at(epoch + Duration::from_millis(200));
        assert_eq!(meters.rate_at(epoch + Duration::from_millis(500)), 2.0);
        assert_eq!(meters.windowed_count_at(epoch + Duration::from_secs(30)), 2);
        assert_eq!(meters.windowed_count_at(epoch + Duration::from_secs(61)), 0);
        assert_eq!(meters.rate_at(epoch + Duration::from_secs(5)), 0.0);
        assert_eq!(meters.total(), 2);
    }
}

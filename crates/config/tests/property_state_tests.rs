//! Property-based tests for client state persistence and history references.
//!
//! Test coverage:
//! - Save/load round trip preserves address, username, token and history order
//! - Recording a search then resolving its index yields the same SID
//! - Non-numeric or out-of-range references resolve to themselves

use proptest::prelude::*;

use splunk_config::ClientState;

fn base_url_strategy() -> impl Strategy<Value = String> {
    let localhost_strategy =
        (8080u16..=8090u16).prop_map(|port| format!("https://localhost:{}", port));

    let host_strategy = prop_oneof![
        Just("splunk"),
        Just("splunk-enterprise"),
        Just("search-head"),
    ];
    let domain_strategy = prop_oneof![Just("example.com"), Just("internal.local")];

    let production_strategy = (host_strategy, domain_strategy, 8080u16..=8089u16)
        .prop_map(|(host, domain, port)| format!("https://{}.{}:{}", host, domain, port));

    prop_oneof![localhost_strategy, production_strategy]
}

/// SIDs as Splunk assigns them: `<unix timestamp>.<suffix>`.
fn sid_strategy() -> impl Strategy<Value = String> {
    (1_500_000_000u64..2_000_000_000u64, 0u32..100_000u32)
        .prop_map(|(ts, suffix)| format!("{}.{}", ts, suffix))
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-z=*_ |]{0,40}".prop_map(|rest| format!("search earliest=-1h {}", rest))
}

fn history_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((sid_strategy(), query_strategy()), 0..20)
}

proptest! {
    #[test]
    fn prop_save_load_round_trip(
        address in base_url_strategy(),
        username in "[a-z][a-z0-9_]{3,12}",
        token in "[A-Za-z0-9^_]{16,48}",
        history in history_strategy(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".splunk");

        let mut state = ClientState::new(&address).unwrap();
        state.set_session(username.clone(), token.clone());
        for (sid, query) in &history {
            state.record_search(sid.clone(), query.clone());
        }
        state.save(&path).unwrap();

        let loaded = ClientState::load(&path).unwrap();
        prop_assert_eq!(loaded.address(), address.as_str());
        prop_assert_eq!(loaded.username(), Some(username.as_str()));
        prop_assert_eq!(loaded.session_token(), token.as_str());
        let ids: Vec<&str> = loaded.history().iter().map(|r| r.search_id.as_str()).collect();
        let expected: Vec<&str> = history.iter().map(|(sid, _)| sid.as_str()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn prop_recorded_index_resolves_to_sid(
        history in history_strategy(),
        sid in sid_strategy(),
        query in query_strategy(),
    ) {
        let mut state = ClientState::new("https://localhost:8089").unwrap();
        for (s, q) in &history {
            state.record_search(s.clone(), q.clone());
        }

        let index = state.record_search(sid.clone(), query);
        let reference = index.to_string();
        prop_assert_eq!(state.resolve_reference(&reference), sid.as_str());
    }

    #[test]
    fn prop_non_numeric_reference_is_literal(
        history in history_strategy(),
        reference in "[a-zA-Z_][a-zA-Z0-9_.]{0,30}",
    ) {
        let mut state = ClientState::new("https://localhost:8089").unwrap();
        for (s, q) in &history {
            state.record_search(s.clone(), q.clone());
        }

        prop_assert_eq!(state.resolve_reference(&reference), reference.as_str());
    }

    #[test]
    fn prop_out_of_range_index_is_literal(
        history in history_strategy(),
        offset in 0usize..1000,
    ) {
        let mut state = ClientState::new("https://localhost:8089").unwrap();
        for (s, q) in &history {
            state.record_search(s.clone(), q.clone());
        }

        let reference = (state.history().len() + offset).to_string();
        prop_assert_eq!(state.resolve_reference(&reference), reference.as_str());
    }
}

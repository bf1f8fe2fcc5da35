#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::block_on;

    use crate::core::credential::{CredentialError, RawAuthPayload, normalize_auth_response};
    use crate::core::guard::{NavigationDecision, SessionView, decide};
    use crate::core::routes::{
        APP_NAME, NOT_FOUND, ROUTES, RouteName, route_by_name, route_by_path,
    };
    use crate::core::session::{
        AuthBackend, AuthError, AuthOutcome, Session, TokenVault, UserProfile,
    };

    fn sample_profile(is_admin: bool) -> UserProfile {
        UserProfile {
            id: 7,
            username: "mika".to_owned(),
            is_admin,
            is_active: true,
            created_at: "2025-11-02T09:00:00".to_owned(),
        }
    }

    /// Scriptable auth backend recording every call it receives.
    #[derive(Default)]
    struct MockBackend {
        login_payload: Option<RawAuthPayload>,
        register_payload: Option<RawAuthPayload>,
        profile: RefCell<Option<UserProfile>>,
        login_calls: RefCell<Vec<(String, String)>>,
        register_calls: RefCell<usize>,
        profile_calls: RefCell<usize>,
        // when set, the next login stalls until the sender fires
        login_gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl AuthBackend for Rc<MockBackend> {
        async fn login(
            &self,
            username: &str,
            password: &str,
        ) -> Result<RawAuthPayload, AuthError> {
            let gate = self.login_gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.login_calls
                .borrow_mut()
                .push((username.to_owned(), password.to_owned()));
            self.login_payload
                .clone()
                .ok_or_else(|| AuthError::Rejected("Incorrect username or password".to_owned()))
        }

        async fn register(
            &self,
            _username: &str,
            _password: &str,
            _invitation_code: &str,
        ) -> Result<RawAuthPayload, AuthError> {
            *self.register_calls.borrow_mut() += 1;
            self.register_payload
                .clone()
                .ok_or_else(|| AuthError::Rejected("Invalid invitation code".to_owned()))
        }

        async fn fetch_profile(&self, _token: &str) -> Result<UserProfile, AuthError> {
            *self.profile_calls.borrow_mut() += 1;
            self.profile
                .borrow()
                .clone()
                .ok_or_else(|| AuthError::Network("profile service unreachable".to_owned()))
        }
    }

    #[derive(Clone, Default)]
    struct MockVault(Rc<RefCell<Option<String>>>);

    impl MockVault {
        fn preloaded(token: &str) -> Self {
            MockVault(Rc::new(RefCell::new(Some(token.to_owned()))))
        }

        fn stored(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl TokenVault for MockVault {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn store(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_owned());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    fn session_with(
        backend: MockBackend,
        vault: MockVault,
    ) -> (Session<Rc<MockBackend>, MockVault>, Rc<MockBackend>) {
        let backend = Rc::new(backend);
        (Session::new(backend.clone(), vault), backend)
    }

    /// `is_authenticated` must always equal the token-presence check.
    fn assert_invariant(session: &Session<Rc<MockBackend>, MockVault>) {
        let snapshot = session.snapshot();
        assert_eq!(snapshot.is_authenticated(), !snapshot.token.is_empty());
        assert_eq!(session.is_authenticated(), !session.token().is_empty());
    }

    // ---- session: login ----

    #[test]
    fn login_accepts_access_token_shape() {
        let backend = MockBackend {
            login_payload: Some(RawAuthPayload::with_access_token("T")),
            profile: RefCell::new(Some(sample_profile(false))),
            ..MockBackend::default()
        };
        let vault = MockVault::default();
        let (session, _) = session_with(backend, vault.clone());

        let outcome = block_on(session.login("mika", "pw"));

        assert_eq!(outcome, AuthOutcome::Success);
        assert_eq!(session.token(), "T");
        assert!(session.is_authenticated());
        assert_eq!(vault.stored().as_deref(), Some("T"));
        assert_eq!(session.profile().map(|p| p.username), Some("mika".to_owned()));
        assert!(!session.snapshot().busy);
        assert_invariant(&session);
    }

    #[test]
    fn login_accepts_legacy_token_shape() {
        let backend = MockBackend {
            login_payload: Some(RawAuthPayload::with_token("LEGACY")),
            ..MockBackend::default()
        };
        let (session, _) = session_with(backend, MockVault::default());

        assert!(block_on(session.login("mika", "pw")).is_success());
        assert_eq!(session.token(), "LEGACY");
        assert_invariant(&session);
    }

    #[test]
    fn login_without_token_field_fails_and_stays_anonymous() {
        let backend = MockBackend {
            login_payload: Some(RawAuthPayload::default()),
            ..MockBackend::default()
        };
        let vault = MockVault::default();
        let (session, _) = session_with(backend, vault.clone());

        let outcome = block_on(session.login("mika", "pw"));

        assert_eq!(
            outcome,
            AuthOutcome::Failure("auth response carried no token field".to_owned())
        );
        assert!(!session.is_authenticated());
        assert_eq!(vault.stored(), None);
        assert_invariant(&session);
    }

    #[test]
    fn login_failure_surfaces_server_message() {
        let (session, _) = session_with(MockBackend::default(), MockVault::default());

        let outcome = block_on(session.login("mika", "wrong"));

        assert_eq!(outcome.message(), Some("Incorrect username or password"));
        assert!(!session.is_authenticated());
        assert_invariant(&session);
    }

    #[test]
    fn profile_failure_does_not_roll_back_login() {
        let backend = MockBackend {
            login_payload: Some(RawAuthPayload::with_token("T")),
            // profile stays None -> fetch_profile errors
            ..MockBackend::default()
        };
        let (session, _) = session_with(backend, MockVault::default());

        assert!(block_on(session.login("mika", "pw")).is_success());
        assert!(session.is_authenticated());
        assert_eq!(session.profile(), None);
        assert_invariant(&session);
    }

    #[test]
    fn concurrent_login_is_rejected_and_first_token_wins() {
        let (gate_tx, gate_rx) = oneshot::channel();
        let backend = MockBackend {
            login_payload: Some(RawAuthPayload::with_token("FIRST")),
            login_gate: RefCell::new(Some(gate_rx)),
            ..MockBackend::default()
        };
        let (session, backend) = session_with(backend, MockVault::default());

        let (first, second, ()) = block_on(async {
            futures::join!(
                session.login("mika", "pw"),
                session.login("intruder", "pw2"),
                async {
                    let _ = gate_tx.send(());
                }
            )
        });

        assert!(first.is_success());
        assert_eq!(
            second,
            AuthOutcome::Failure("Another sign-in is already in progress".to_owned())
        );
        assert_eq!(session.token(), "FIRST");
        // only the first attempt ever reached the backend
        assert_eq!(backend.login_calls.borrow().len(), 1);
        assert_invariant(&session);
    }

    // ---- session: register ----

    #[test]
    fn register_with_token_skips_login_round_trip() {
        let backend = MockBackend {
            register_payload: Some(RawAuthPayload::with_token("T2")),
            profile: RefCell::new(Some(sample_profile(false))),
            ..MockBackend::default()
        };
        let (session, backend) = session_with(backend, MockVault::default());

        let outcome = block_on(session.register("mika", "pw", "INV-1"));

        assert!(outcome.is_success());
        assert_eq!(session.token(), "T2");
        assert!(backend.login_calls.borrow().is_empty());
        assert_eq!(*backend.register_calls.borrow(), 1);
        assert_invariant(&session);
    }

    #[test]
    fn register_without_token_falls_back_to_exactly_one_login() {
        let backend = MockBackend {
            register_payload: Some(RawAuthPayload::default()),
            login_payload: Some(RawAuthPayload::with_token("T3")),
            ..MockBackend::default()
        };
        let (session, backend) = session_with(backend, MockVault::default());

        let outcome = block_on(session.register("mika", "pw", "INV-1"));

        assert!(outcome.is_success());
        assert_eq!(session.token(), "T3");
        assert_eq!(
            backend.login_calls.borrow().as_slice(),
            &[("mika".to_owned(), "pw".to_owned())]
        );
        assert_invariant(&session);
    }

    #[test]
    fn register_fallback_login_failure_asks_user_to_sign_in() {
        let backend = MockBackend {
            register_payload: Some(RawAuthPayload::default()),
            // login_payload stays None -> fallback login is rejected
            ..MockBackend::default()
        };
        let (session, _) = session_with(backend, MockVault::default());

        let outcome = block_on(session.register("mika", "pw", "INV-1"));

        assert_eq!(
            outcome,
            AuthOutcome::Failure("Account created, please sign in".to_owned())
        );
        assert!(!session.is_authenticated());
        assert_invariant(&session);
    }

    #[test]
    fn register_rejection_surfaces_server_message() {
        let (session, backend) = session_with(MockBackend::default(), MockVault::default());

        let outcome = block_on(session.register("mika", "pw", "BAD"));

        assert_eq!(outcome.message(), Some("Invalid invitation code"));
        assert!(backend.login_calls.borrow().is_empty());
        assert_invariant(&session);
    }

    // ---- session: lifecycle ----

    #[test]
    fn vault_token_hydrates_session_on_startup() {
        let vault = MockVault::preloaded("SAVED");
        let (session, _) = session_with(MockBackend::default(), vault);

        assert!(session.is_authenticated());
        assert_eq!(session.token(), "SAVED");
        assert_eq!(session.profile(), None);
        assert_invariant(&session);
    }

    #[test]
    fn logout_clears_everything_and_is_idempotent() {
        let backend = MockBackend {
            login_payload: Some(RawAuthPayload::with_token("T")),
            profile: RefCell::new(Some(sample_profile(true))),
            ..MockBackend::default()
        };
        let vault = MockVault::default();
        let (session, _) = session_with(backend, vault.clone());
        assert!(block_on(session.login("mika", "pw")).is_success());

        session.logout();
        let after_once = session.snapshot();
        session.logout();

        assert_eq!(session.snapshot(), after_once);
        assert!(!session.is_authenticated());
        assert_eq!(session.profile(), None);
        assert_eq!(vault.stored(), None);
        assert_invariant(&session);
    }

    #[test]
    fn invalidate_forces_anonymous() {
        let vault = MockVault::preloaded("STALE");
        let (session, _) = session_with(MockBackend::default(), vault.clone());

        session.invalidate();

        assert!(!session.is_authenticated());
        assert_eq!(vault.stored(), None);
        assert_invariant(&session);
    }

    #[test]
    fn refresh_profile_is_noop_without_token() {
        let backend = MockBackend {
            profile: RefCell::new(Some(sample_profile(false))),
            ..MockBackend::default()
        };
        let (session, backend) = session_with(backend, MockVault::default());

        block_on(session.refresh_profile());

        assert_eq!(*backend.profile_calls.borrow(), 0);
        assert_eq!(session.profile(), None);
        assert_invariant(&session);
    }

    #[test]
    fn refresh_profile_replaces_cached_profile() {
        let backend = MockBackend {
            login_payload: Some(RawAuthPayload::with_token("T")),
            profile: RefCell::new(Some(sample_profile(false))),
            ..MockBackend::default()
        };
        let (session, backend) = session_with(backend, MockVault::default());
        assert!(block_on(session.login("mika", "pw")).is_success());
        assert_eq!(session.profile().map(|p| p.is_admin), Some(false));

        *backend.profile.borrow_mut() = Some(sample_profile(true));
        block_on(session.refresh_profile());

        assert_eq!(session.profile().map(|p| p.is_admin), Some(true));
        assert_eq!(session.token(), "T");
        assert_invariant(&session);
    }

    #[test]
    fn refresh_profile_failure_keeps_previous_profile() {
        let backend = MockBackend {
            login_payload: Some(RawAuthPayload::with_token("T")),
            profile: RefCell::new(Some(sample_profile(false))),
            ..MockBackend::default()
        };
        let (session, backend) = session_with(backend, MockVault::default());
        assert!(block_on(session.login("mika", "pw")).is_success());

        *backend.profile.borrow_mut() = None;
        block_on(session.refresh_profile());

        assert_eq!(session.profile().map(|p| p.username), Some("mika".to_owned()));
        assert!(session.is_authenticated());
        assert_invariant(&session);
    }

    // ---- credential normalization ----

    #[test]
    fn normalize_prefers_legacy_token_field() {
        let raw = RawAuthPayload {
            token: Some("OLD".to_owned()),
            access_token: Some("NEW".to_owned()),
        };
        assert_eq!(normalize_auth_response(&raw).unwrap().as_str(), "OLD");
    }

    #[test]
    fn normalize_skips_blank_field_in_favor_of_next_shape() {
        let raw = RawAuthPayload {
            token: Some("   ".to_owned()),
            access_token: Some("NEW".to_owned()),
        };
        assert_eq!(normalize_auth_response(&raw).unwrap().as_str(), "NEW");
    }

    #[test]
    fn normalize_rejects_missing_and_blank_tokens() {
        assert_eq!(
            normalize_auth_response(&RawAuthPayload::default()),
            Err(CredentialError::MissingToken)
        );
        assert_eq!(
            normalize_auth_response(&RawAuthPayload::with_token("")),
            Err(CredentialError::BlankToken)
        );
    }

    // ---- navigation guard ----

    fn anonymous() -> SessionView {
        SessionView::default()
    }

    fn signed_in(is_admin: Option<bool>) -> SessionView {
        SessionView {
            token_present: true,
            is_admin,
        }
    }

    #[test]
    fn guard_sends_anonymous_user_to_login_with_redirect() {
        let records = route_by_name(RouteName::Records);
        let decision = decide(records, "/records", anonymous());

        assert_eq!(
            decision,
            NavigationDecision::Redirect {
                to: RouteName::Login,
                redirect: Some("/records".to_owned()),
            }
        );
        assert_eq!(decision.href().as_deref(), Some("/login?redirect=/records"));
    }

    #[test]
    fn guard_redirect_encodes_query_in_target_path() {
        let records = route_by_name(RouteName::Records);
        let decision = decide(records, "/records?month=2026-08", anonymous());

        assert_eq!(
            decision.href().as_deref(),
            Some("/login?redirect=/records%3Fmonth%3D2026-08")
        );
    }

    #[test]
    fn guard_allows_authenticated_user_on_protected_route() {
        let records = route_by_name(RouteName::Records);
        assert_eq!(
            decide(records, "/records", signed_in(None)),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn guard_sends_signed_in_user_away_from_login_and_register() {
        for name in [RouteName::Login, RouteName::Register] {
            let route = route_by_name(name);
            let decision = decide(route, route.path, signed_in(Some(false)));
            assert_eq!(decision.href().as_deref(), Some("/dashboard"));
        }
    }

    #[test]
    fn guard_allows_anonymous_user_on_public_routes() {
        for name in [RouteName::Login, RouteName::Register, RouteName::Home] {
            let route = route_by_name(name);
            assert_eq!(decide(route, route.path, anonymous()), NavigationDecision::Allow);
        }
    }

    #[test]
    fn guard_fails_closed_on_admin_route() {
        let admin = route_by_name(RouteName::Admin);

        // profile missing (not fetched or lookup failed) counts as not-admin
        for is_admin in [None, Some(false)] {
            assert_eq!(
                decide(admin, "/admin", signed_in(is_admin)).href().as_deref(),
                Some("/dashboard")
            );
        }
        assert_eq!(
            decide(admin, "/admin", signed_in(Some(true))),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn guard_checks_auth_before_admin() {
        let admin = route_by_name(RouteName::Admin);
        let decision = decide(admin, "/admin", anonymous());

        assert_eq!(
            decision,
            NavigationDecision::Redirect {
                to: RouteName::Login,
                redirect: Some("/admin".to_owned()),
            }
        );
    }

    // ---- route table ----

    #[test]
    fn route_table_flags_match_the_app_layout() {
        for route in ROUTES {
            let expect_auth = !matches!(
                route.name,
                RouteName::Home | RouteName::Login | RouteName::Register
            );
            assert_eq!(route.requires_auth, expect_auth, "route {}", route.path);
            assert_eq!(route.requires_admin, route.name == RouteName::Admin);
        }
    }

    #[test]
    fn route_lookup_by_path_ignores_query_and_fragment() {
        assert_eq!(
            route_by_path("/records?month=2026-08").map(|r| r.name),
            Some(RouteName::Records)
        );
        assert_eq!(
            route_by_path("/budget#top").map(|r| r.name),
            Some(RouteName::Budget)
        );
        assert_eq!(route_by_path("/nope"), None);
    }

    #[test]
    fn document_title_falls_back_to_app_name() {
        assert_eq!(route_by_name(RouteName::Records).document_title(), "Records");
        assert_eq!(route_by_name(RouteName::Home).document_title(), APP_NAME);
        assert_eq!(NOT_FOUND.document_title(), APP_NAME);
    }
}

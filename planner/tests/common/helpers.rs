//! Test helpers and builder patterns for planner tests

use planner::core::edit::InputPolicy;
use planner::core::share::parse_base_url;
use planner::*;
use super::fixtures::TestFixtures;

/// Builder for planners wired to mocks with permissive defaults
pub struct PlannerBuilder {
    config: PlannerConfig,
    clipboard: MockClipboard,
    notifier: MockNotifier,
}

#[allow(dead_code)]
impl PlannerBuilder {
    pub fn new() -> Self {
        let mut clipboard = MockClipboard::new();
        let mut notifier = MockNotifier::new();

        clipboard
            .expect_write_text()
            .returning(|_| Ok(()))
            .times(0..);
        clipboard
            .expect_describe()
            .returning(|| "mock".to_string())
            .times(0..);
        notifier
            .expect_notify()
            .returning(|_| ())
            .times(0..);

        let config = PlannerConfig {
            base_url: parse_base_url(TestFixtures::BASE_URL).unwrap(),
            ..PlannerConfig::default()
        };

        Self {
            config,
            clipboard,
            notifier,
        }
    }

    pub fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.config.input_policy = policy;
        self
    }

    pub fn with_recompute_policy(mut self, policy: RecomputePolicy) -> Self {
        self.config.recompute_policy = policy;
        self
    }

    /// Replace the clipboard mock
    pub fn with_clipboard<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockClipboard),
    {
        let mut clipboard = MockClipboard::new();
        setup(&mut clipboard);
        self.clipboard = clipboard;
        self
    }

    /// Replace the notifier mock
    pub fn with_notifier<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockNotifier),
    {
        let mut notifier = MockNotifier::new();
        setup(&mut notifier);
        self.notifier = notifier;
        self
    }

    pub fn build(self) -> Planner<MockClipboard, MockNotifier> {
        Planner::new(&self.config, self.clipboard, self.notifier)
    }
}

/// Assertion and convenience helpers
pub struct TestHelpers;

#[allow(dead_code)]
impl TestHelpers {
    pub fn simple_planner() -> Planner<MockClipboard, MockNotifier> {
        PlannerBuilder::new().build()
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    /// Run session lines and return everything written
    pub fn run_lines<C, N>(session: &mut Session<C, N>, lines: &[&str]) -> String
    where
        C: Clipboard + 'static,
        N: Notifier + 'static,
    {
        let mut out = Vec::new();
        for line in lines {
            if session.handle_line(line, &mut out).unwrap() == Flow::Quit {
                break;
            }
        }
        String::from_utf8(out).unwrap()
    }
}

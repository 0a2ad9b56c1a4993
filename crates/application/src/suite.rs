//! Test case registry.
//!
//! A [`Suite`] collects named cases in registration order. Registering a
//! case does not run it; [`crate::TestRunner::run`] does that later.
//!
//! Case bodies are async functions of a borrowed context, usually the
//! [`crate::Probe`]:
//!
//! ```ignore
//! suite.test("GET /user when user does not exist returns 404", |probe| {
//!     Box::pin(missing_user_returns_404(probe))
//! });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use taskcheck_domain::CaseResult;

/// Future returned by a case body, borrowing the run context for `'a`.
pub type CaseFuture<'a> = Pin<Box<dyn Future<Output = CaseResult> + 'a>>;

type CaseBody<Ctx> = Box<dyn for<'a> Fn(&'a Ctx) -> CaseFuture<'a>>;

/// A named test function.
pub struct TestCase<Ctx> {
    name: String,
    body: CaseBody<Ctx>,
}

impl<Ctx> TestCase<Ctx> {
    /// Creates a test case.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: for<'a> Fn(&'a Ctx) -> CaseFuture<'a> + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Name the case was registered with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starts the case body against `ctx`.
    pub fn execute<'a>(&self, ctx: &'a Ctx) -> CaseFuture<'a> {
        (self.body)(ctx)
    }
}

impl<Ctx> fmt::Debug for TestCase<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish_non_exhaustive()
    }
}

/// An ordered collection of test cases.
pub struct Suite<Ctx> {
    name: String,
    cases: Vec<TestCase<Ctx>>,
    before_each: Option<TestCase<Ctx>>,
}

impl<Ctx> Suite<Ctx> {
    /// Create a new empty suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
            before_each: None,
        }
    }

    /// Registers a case. Cases run in the order they are registered.
    pub fn test<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: for<'a> Fn(&'a Ctx) -> CaseFuture<'a> + 'static,
    {
        self.cases.push(TestCase::new(name, body));
        self
    }

    /// Installs a hook that runs before every case, e.g. to reset server
    /// state. Replaces any previously installed hook.
    ///
    /// A failing hook fails the case it ran for; the case body is skipped.
    pub fn before_each<F>(&mut self, hook: F) -> &mut Self
    where
        F: for<'a> Fn(&'a Ctx) -> CaseFuture<'a> + 'static,
    {
        self.before_each = Some(TestCase::new("before_each", hook));
        self
    }

    /// Suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered cases in registration order.
    #[must_use]
    pub fn cases(&self) -> &[TestCase<Ctx>] {
        &self.cases
    }

    /// The installed per-case hook, if any.
    #[must_use]
    pub const fn before_each_hook(&self) -> Option<&TestCase<Ctx>> {
        self.before_each.as_ref()
    }

    /// Check if the suite is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Get the number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }
}

impl<Ctx> fmt::Debug for Suite<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("name", &self.name)
            .field("cases", &self.cases)
            .field("before_each", &self.before_each.is_some())
            .finish()
    }
}

//! A small chainable assertion host with named extension methods.
//!
//! Assertions start from [`expect`] (or [`Extensions::expect`]), pass through
//! language chains such as `to()` and `be()`, and end in a method registered
//! in an [`Extensions`] table. Methods receive the assertion, which carries the
//! subject, plus the arguments from the call site.

use shelf_core::messages::unknown_method;
use shelf_core::{AssertResult, AssertionError, ModelClass, Operand, OperandRef};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::RelationsPlugin;

/// A registered assertion method.
pub type Method = Box<dyn Fn(&Assertion<'_>, &[Arg<'_>]) -> AssertResult<()> + Send + Sync>;

/// An argument passed to an assertion method.
#[derive(Debug, Clone)]
pub enum Arg<'a> {
    /// Any operand: a model class or a plain value.
    Operand(OperandRef<'a>),
    /// A string, such as a relation accessor name.
    Str(&'a str),
}

impl<'a> Arg<'a> {
    pub fn operand<O: Operand + ?Sized>(operand: &'a O) -> Self {
        Arg::Operand(OperandRef::of(operand))
    }

    pub fn str(value: &'a str) -> Self {
        Arg::Str(value)
    }

    /// The string value, if this argument is one.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Arg::Str(value) => Some(*value),
            Arg::Operand(_) => None,
        }
    }
}

impl Operand for Arg<'_> {
    fn as_model_class(&self) -> Option<&dyn ModelClass> {
        match self {
            Arg::Operand(operand) => operand.model_class(),
            Arg::Str(_) => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Arg::Operand(operand) => operand.describe(),
            Arg::Str(value) => format!("{:?}", value),
        }
    }
}

/// Something that installs assertion methods.
pub trait Plugin {
    fn install(&self, extensions: &mut Extensions);
}

impl<F: Fn(&mut Extensions)> Plugin for F {
    fn install(&self, extensions: &mut Extensions) {
        self(extensions)
    }
}

/// A table of named assertion methods.
#[derive(Default)]
pub struct Extensions {
    methods: HashMap<String, Method>,
}

impl Extensions {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with the relationship methods installed under the default config.
    pub fn with_relations() -> Self {
        let mut extensions = Self::new();
        extensions.use_plugin(&RelationsPlugin::default());
        extensions
    }

    /// Register `handler` under `name`, replacing any method of that name.
    pub fn add_method<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Assertion<'_>, &[Arg<'_>]) -> AssertResult<()> + Send + Sync + 'static,
    {
        let name = name.into();
        let replaced = self.methods.insert(name.clone(), Box::new(handler)).is_some();
        tracing::debug!(method = %name, replaced, "registered assertion method");
        self
    }

    /// Install every method a plugin provides.
    pub fn use_plugin<P: Plugin + ?Sized>(&mut self, plugin: &P) -> &mut Self {
        plugin.install(self);
        self
    }

    /// Check if a method is registered under `name`.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Names of all registered methods, sorted.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Start an assertion about `subject` that dispatches into this table.
    pub fn expect<'a, O: Operand + ?Sized>(&'a self, subject: &'a O) -> Assertion<'a> {
        Assertion {
            subject: OperandRef::of(subject),
            extensions: self,
        }
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extensions")
            .field("methods", &self.method_names())
            .finish()
    }
}

static DEFAULT_EXTENSIONS: LazyLock<Extensions> = LazyLock::new(Extensions::with_relations);

/// Start an assertion about `subject` using the default methods.
pub fn expect<O: Operand + ?Sized>(subject: &O) -> Assertion<'_> {
    DEFAULT_EXTENSIONS.expect(subject)
}

/// An assertion in progress.
#[derive(Debug, Clone)]
pub struct Assertion<'a> {
    subject: OperandRef<'a>,
    extensions: &'a Extensions,
}

impl<'a> Assertion<'a> {
    /// The value under test.
    pub fn subject(&self) -> &OperandRef<'a> {
        &self.subject
    }

    // ========== Language chains ==========

    pub fn to(self) -> Self {
        self
    }

    pub fn be(self) -> Self {
        self
    }

    pub fn and(self) -> Self {
        self
    }

    pub fn that(self) -> Self {
        self
    }

    /// Fail with `message` unless `condition` holds.
    pub fn assert(&self, condition: bool, message: impl Into<String>) -> AssertResult<()> {
        if condition {
            Ok(())
        } else {
            Err(AssertionError::new(message))
        }
    }

    /// Invoke the method registered under `name`.
    pub fn call(&self, name: &str, args: &[Arg<'_>]) -> AssertResult<()> {
        let method = self
            .extensions
            .methods
            .get(name)
            .ok_or_else(|| AssertionError::new(unknown_method(name)))?;

        tracing::trace!(method = name, subject = %self.subject.describe(), "calling assertion method");
        method(self, args)
    }
}

//! Executor - the function or value under test

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// Positional and named arguments handed to an executor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseInputs {
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub kwargs: Map<String, Value>,
}

impl CaseInputs {
    pub fn new(args: Vec<Value>, kwargs: Map<String, Value>) -> Self {
        Self { args, kwargs }
    }

    pub fn from_args<I, V>(args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            kwargs: Map::new(),
        }
    }

    pub fn with_kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }

    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    pub fn kwarg(&self, name: &str) -> Option<&Value> {
        self.kwargs.get(name)
    }

    /// Positional argument as text: strings verbatim, anything else as JSON
    pub fn arg_text(&self, index: usize) -> Option<String> {
        self.arg(index).map(value_text)
    }

    /// Named argument as text: strings verbatim, anything else as JSON
    pub fn kwarg_text(&self, name: &str) -> Option<String> {
        self.kwarg(name).map(value_text)
    }
}

pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

type SyncFn = dyn Fn(&CaseInputs) -> Result<String, DomainError> + Send + Sync;
type AsyncFn = dyn Fn(CaseInputs) -> BoxFuture<'static, Result<String, DomainError>> + Send + Sync;
type SharedOutput = Shared<BoxFuture<'static, Result<String, String>>>;

/// The three accepted executor shapes
///
/// The shape is fixed when the executor is built and dispatched once per
/// call in [`Executor::execute`].
#[derive(Clone)]
pub enum Executor {
    /// Plain function returning text
    Sync(Arc<SyncFn>),
    /// Function returning a future that yields text
    Async(Arc<AsyncFn>),
    /// Future that yields text, awaited without arguments
    Awaitable(SharedOutput),
}

impl Executor {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&CaseInputs) -> String + Send + Sync + 'static,
    {
        Self::Sync(Arc::new(move |inputs: &CaseInputs| {
            Ok::<String, DomainError>(f(inputs))
        }))
    }

    pub fn try_from_fn<F>(f: F) -> Self
    where
        F: Fn(&CaseInputs) -> Result<String, DomainError> + Send + Sync + 'static,
    {
        Self::Sync(Arc::new(f))
    }

    pub fn from_async_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(CaseInputs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = String> + Send + 'static,
    {
        Self::Async(Arc::new(move |inputs: CaseInputs| {
            f(inputs).map(Ok::<String, DomainError>).boxed()
        }))
    }

    pub fn try_from_async_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(CaseInputs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, DomainError>> + Send + 'static,
    {
        Self::Async(Arc::new(move |inputs: CaseInputs| f(inputs).boxed()))
    }

    /// Wrap a future; its output is cached so the case can be run again
    pub fn awaitable<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = String> + Send + 'static,
    {
        Self::Awaitable(future.map(Ok::<String, String>).boxed().shared())
    }

    /// An awaitable that already holds its text
    pub fn ready(output: impl Into<String>) -> Self {
        Self::awaitable(futures::future::ready(output.into()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Executor::Sync(_) => "sync",
            Executor::Async(_) => "async",
            Executor::Awaitable(_) => "awaitable",
        }
    }

    /// Produce the text under test
    pub async fn execute(&self, inputs: &CaseInputs) -> Result<String, DomainError> {
        match self {
            Executor::Sync(f) => f(inputs),
            Executor::Async(f) => f(inputs.clone()).await,
            Executor::Awaitable(future) => future.clone().await.map_err(DomainError::executor),
        }
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Executor").field(&self.kind()).finish()
    }
}

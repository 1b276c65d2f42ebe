//! Async submit callback carried through component props
//!
//! Props are compared for memoization, so the callback is wrapped in an `Rc`
//! and compared by pointer: two handlers are equal only when they are the
//! same allocation.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use formbldr_core::FormValues;

type SubmitFn = dyn Fn(FormValues) -> LocalBoxFuture<'static, Result<(), String>>;

/// Caller-supplied async submit function
///
/// The form stays disabled from the moment this is invoked until its future
/// resolves. `Err` messages surface as a form-level banner.
#[derive(Clone)]
pub struct SubmitHandler(Rc<SubmitFn>);

impl SubmitHandler {
    pub fn new<F, Fut>(callback: F) -> Self
    where
        F: Fn(FormValues) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        Self(Rc::new(move |values| callback(values).boxed_local()))
    }

    pub async fn call(&self, values: FormValues) -> Result<(), String> {
        (self.0)(values).await
    }
}

impl PartialEq for SubmitHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SubmitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubmitHandler")
    }
}

//! Request Context
//!
//! Values scoped to the task serving one HTTP request, for code that has no
//! access to the request itself (such as error rendering).

use std::future::Future;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// Run `future` with `request_id` as the current request id
pub async fn scope<F: Future>(request_id: String, future: F) -> F::Output {
    REQUEST_ID.scope(request_id, future).await
}

/// Id of the request being served, if called inside [`scope`]
#[must_use]
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}

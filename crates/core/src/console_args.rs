//! Helpers for walking a queue of console arguments.

use std::collections::VecDeque;

/// Tests whether the next remaining argument can serve as a value for the
/// console argument just consumed.
///
/// Returns `false` when the queue is empty or when its front starts with `-`
/// (i.e. it is another flag). The queue is never modified.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use console_params_core::console_args::has_param;
///
/// let remaining = VecDeque::from(["a=1", "--verbose"]);
/// assert!(has_param(&remaining));
/// ```
#[must_use]
pub fn has_param<S: AsRef<str>>(remaining: &VecDeque<S>) -> bool {
    remaining
        .front()
        .is_some_and(|next| !next.as_ref().starts_with('-'))
}

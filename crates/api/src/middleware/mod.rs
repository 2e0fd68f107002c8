//! HTTP middleware specific to the catalog.
//!
//! - [`cache::cache_response`] -- per-route response cache for `GET`.
//! - [`rate_limit::rate_limit`] -- tiered fixed-window limiter.
//! - [`sanitize::sanitize`] -- escapes `<` and `>` in JSON bodies and query values.
//! - [`response_time::response_time`] -- reports handling time in a header.

pub mod cache;
pub mod rate_limit;
pub mod response_time;
pub mod sanitize;

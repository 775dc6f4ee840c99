//! # numclass: Number Classification over HTTP
//!
//! numclass answers a single question: what is interesting about this integer?
//! Given a number it reports
//!
//! - whether it is **prime**,
//! - whether it is **perfect** (equal to the sum of its proper divisors),
//! - whether it is an **Armstrong** number (equal to the sum of its digits each
//!   raised to the digit count), together with its **parity**,
//! - the **sum of its decimal digits**,
//! - and a **fun fact**, fetched from an external numbers service or, for
//!   Armstrong numbers, explained locally.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ HTTP API Layer (Axum routes, CORS)      │
//! ├─────────────────────────────────────────┤
//! │ Input Validation (integer-valued text)  │
//! ├─────────────────────────────────────────┤
//! │ Property Evaluators (pure functions)    │
//! ├─────────────────────────────────────────┤
//! │ Fact Provider (best-effort HTTP client) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Requests are independent; the only shared state is the fact client, built
//! once at startup from explicit configuration.
//!
//! ## Usage Examples
//!
//! ```rust
//! # use numclass::{Property, get_properties, is_perfect, is_prime, parse_number};
//! let number = parse_number(Some("153")).unwrap();
//! assert!(!is_prime(number));
//! assert!(!is_perfect(number));
//! assert_eq!(get_properties(number), vec![Property::Armstrong, Property::Odd]);
//! ```
//!
//! Serving the endpoint:
//!
//! ```no_run
//! # use numclass::{ClassifyState, FactServiceConfig, create_router};
//! # async fn serve() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ClassifyState::new(&FactServiceConfig::default())?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, create_router(state)).await?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
mod classify;
mod errors;
mod fun_fact;
mod properties;
mod router;
mod validate;

pub use classify::{
    ClassificationResult, ClassifyState, Evaluation, classify, create_classify_router, evaluate,
};
pub use errors::{ClassifyError, FactError};
pub use fun_fact::{
    DEFAULT_FACT_TIMEOUT, DEFAULT_FACT_URL, FACT_UNAVAILABLE, FactClient, FactServiceConfig,
    fallback_fact,
};
pub use properties::{
    Property, armstrong_explanation, digit_count, digit_sum, digits, get_parity, get_properties,
    is_armstrong, is_perfect, is_prime,
};
pub use router::create_router;
pub use validate::parse_number;

//! Typed, validated bootstrap configuration for the patient dashboard.
//!
//! The dashboard ships a single static configuration object binding it to
//! an environment: the Cognito user pool it authenticates against, the
//! OAuth domain and redirect URLs, the API base URL, and the requested
//! OIDC scopes. This crate is the single construction boundary for that
//! object: arbitrary input goes in, a validated immutable [`ConfigRecord`]
//! or a typed [`Error`] comes out, and no untyped value crosses into
//! application logic.

pub use crate::conf::load;
pub use crate::errors::{Error, Result};
pub use crate::holder::ConfigHandle;
pub use crate::record::{ConfigRecord, Mode, RawConfig};

mod conf;
mod errors;
mod holder;
mod record;

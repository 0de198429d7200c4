pub mod config;
pub use config::Config;

mod diagnostic;
pub use diagnostic::{CollisionOrigin, Diagnostic, Diagnostics};

mod error;
pub use error::Error;

pub mod introspect;
pub use introspect::RawSchema;

pub mod schema;
pub use schema::{Builder, Generated, Schema};

pub mod ty;

/// A Result type alias that uses modelgen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

//! Result type alias for foodsense operations.

use super::foodsense_error::FoodsenseError;

/// Type alias for Results using FoodsenseError.
pub type FoodsenseResult<T> = Result<T, FoodsenseError>;

//! Currency handling: the linear conversion helper, the quote model and the
//! seam through which exchange rates reach the planner.
//!
//! The planner models a single currency pair. Rates are always expressed as
//! MXN → USD (one peso in dollars).

mod convert;
mod provider;
mod quote;

pub use convert::convert_amount;
pub use provider::{FixedRateProvider, RateProvider};
pub use quote::{FxError, FxQuote};

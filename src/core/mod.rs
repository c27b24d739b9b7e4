pub mod add;
pub mod billing;
pub mod calendar;
pub mod del;
pub mod edit;
pub mod log;
pub mod state;

pub use billing::{Amounts, BillingLine, Breakdown, aggregate};
pub use calendar::materialize;
pub use state::{ActivityState, PersistedState};

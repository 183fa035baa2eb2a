pub mod fields;
pub mod state;
pub mod step;


pub use fields::{Field, FieldErrors, PersonalInfo, REQUIRED_MESSAGE};
pub use state::{FormState, SubscriptionSummary};
pub use step::Step;

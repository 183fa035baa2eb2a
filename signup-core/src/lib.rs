pub mod form;
pub mod meta;
pub mod pricing;
pub mod util;

pub use form::{Field, FieldErrors, FormState, PersonalInfo, Step, SubscriptionSummary};
pub use meta::{Addon, AddonId, Catalog, Plan};
pub use pricing::{calculate_total, parse_price_amount, BillingPeriod, PriceTotal};
pub use util::errors::{CatalogError, PriceError};


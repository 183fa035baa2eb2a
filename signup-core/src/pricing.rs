//! Price strings and totals.
//!
//! Catalog prices are display strings (`$9/mo`, `+$1/mo`). Amounts are read by
//! keeping only their digits, so the calculator is only as good as the
//! catalog it is fed; [`Catalog::validate`](crate::meta::Catalog::validate)
//! checks every entry up front.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::meta::{Addon, Plan};
use crate::util::errors::PriceError;

const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn from_yearly(is_yearly: bool) -> Self {
        if is_yearly {
            Self::Yearly
        } else {
            Self::Monthly
        }
    }

    pub fn is_yearly(self) -> bool {
        self == Self::Yearly
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/mo",
            Self::Yearly => "/yr",
        }
    }

    /// "Monthly" / "Yearly", used by the switch and the summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// "month" / "year", used in "Total (per month)".
    pub fn unit(self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// Strips every non-digit character and reads what is left.
pub fn parse_price_amount(price: &str) -> Result<u32, PriceError> {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(PriceError::MissingAmount(price.to_string()));
    }
    digits
        .parse::<u32>()
        .map_err(|_| PriceError::Overflow(price.to_string()))
}

/// The plan's amount for the given period: monthly as quoted, yearly as twelve
/// months.
pub fn plan_amount(plan: &Plan, period: BillingPeriod) -> Result<u32, PriceError> {
    let monthly = plan.monthly_amount()?;
    match period {
        BillingPeriod::Monthly => Ok(monthly),
        BillingPeriod::Yearly => monthly
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or_else(|| PriceError::TotalOverflow(plan.name.clone())),
    }
}

pub fn display_plan_price(plan: &Plan, period: BillingPeriod) -> Result<String, PriceError> {
    Ok(format!("${}{}", plan_amount(plan, period)?, period.suffix()))
}

/// Add-ons are quoted and charged per month whatever the billing period.
pub fn display_addon_price(addon: &Addon) -> &str {
    &addon.price
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTotal {
    pub amount: u32,
    pub period: BillingPeriod,
}

impl PriceTotal {
    pub fn suffix(&self) -> &'static str {
        self.period.suffix()
    }
}

impl fmt::Display for PriceTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}{}", self.amount, self.period.suffix())
    }
}

/// Plan amount (annualized when yearly) plus the add-on amounts as quoted.
/// Add-ons are not multiplied by twelve. A missing plan counts as zero.
pub fn calculate_total<'a, I>(
    plan: Option<&Plan>,
    addons: I,
    period: BillingPeriod,
) -> Result<PriceTotal, PriceError>
where
    I: IntoIterator<Item = &'a Addon>,
{
    let mut amount = match plan {
        Some(plan) => plan_amount(plan, period)?,
        None => 0,
    };

    for addon in addons {
        amount = amount
            .checked_add(addon.monthly_amount()?)
            .ok_or_else(|| PriceError::TotalOverflow(addon.name.clone()))?;
    }

    Ok(PriceTotal { amount, period })
}

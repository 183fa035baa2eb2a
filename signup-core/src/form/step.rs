use serde::{Deserialize, Serialize};

/// The five screens of the signup flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Step {
    #[default]
    PersonalInfo,
    SelectPlan,
    AddOns,
    Summary,
    Confirmation,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::PersonalInfo,
        Step::SelectPlan,
        Step::AddOns,
        Step::Summary,
        Step::Confirmation,
    ];

    pub const FIRST: Step = Step::PersonalInfo;
    pub const LAST: Step = Step::Confirmation;

    /// 1-based position.
    pub fn number(self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::SelectPlan => 2,
            Step::AddOns => 3,
            Step::Summary => 4,
            Step::Confirmation => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Step::PersonalInfo),
            2 => Some(Step::SelectPlan),
            3 => Some(Step::AddOns),
            4 => Some(Step::Summary),
            5 => Some(Step::Confirmation),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal info",
            Step::SelectPlan => "Select your plan",
            Step::AddOns => "Pick add-ons",
            Step::Summary => "Finishing up",
            Step::Confirmation => "Thank you!",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Please provide your name, email address, and phone number.",
            Step::SelectPlan => "You have the option of monthly or yearly billing.",
            Step::AddOns => "Add-ons help enhance your gaming experience.",
            Step::Summary => "Double-check everything looks OK before confirming.",
            Step::Confirmation => {
                "Thanks for confirming your subscription! We hope you have fun using our platform."
            }
        }
    }

    /// Label in the step sidebar. The confirmation screen is not listed.
    pub fn sidebar_label(self) -> Option<&'static str> {
        match self {
            Step::PersonalInfo => Some("Your info"),
            Step::SelectPlan => Some("Select plan"),
            Step::AddOns => Some("Add-ons"),
            Step::Summary => Some("Summary"),
            Step::Confirmation => None,
        }
    }

    pub fn progress_percentage(self) -> u8 {
        self.number() * 20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_round_trips() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(6), None);
    }

    #[test]
    fn chain_ends_have_no_neighbours() {
        assert_eq!(Step::FIRST.previous(), None);
        assert_eq!(Step::LAST.next(), None);
        assert_eq!(Step::AddOns.next(), Some(Step::Summary));
        assert_eq!(Step::AddOns.previous(), Some(Step::SelectPlan));
    }

    #[test]
    fn sidebar_lists_four_steps() {
        let labels: Vec<_> = Step::ALL.iter().filter_map(|s| s.sidebar_label()).collect();
        assert_eq!(labels, ["Your info", "Select plan", "Add-ons", "Summary"]);
    }

    #[test]
    fn progress_grows_by_step() {
        let progress: Vec<_> = Step::ALL.iter().map(|s| s.progress_percentage()).collect();
        assert_eq!(progress, [20, 40, 60, 80, 100]);
    }
}

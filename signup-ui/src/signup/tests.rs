use signup_core::{BillingPeriod, Catalog, Field, Plan, PriceError, Step};

use crate::signup::{SignupAction, SignupManager};

fn fill_personal_info(manager: &mut SignupManager) {
    for (field, value) in [
        (Field::Name, "Stephen King"),
        (Field::Email, "stephenking@lorem.com"),
        (Field::Phone, "+1 234 567 890"),
    ] {
        manager.dispatch(SignupAction::UpdateField {
            field,
            value: value.to_string(),
        });
    }
}

#[test]
fn test_manager_initialization() {
    let manager = SignupManager::new(Catalog::default());
    let state = manager.state();

    assert_eq!(state.current_step(), Step::PersonalInfo);
    assert!(state.selected_plan().is_none());
    assert!(!state.can_go_back());
    assert!(!manager.has_pending_actions());
    assert_eq!(state.progress_percentage(), 20);
}

#[test]
fn test_dispatch_only_queues() {
    let mut manager = SignupManager::new(Catalog::default());
    manager.dispatch(SignupAction::ToggleBillingPeriod);

    assert!(manager.has_pending_actions());
    assert!(!manager.state().is_yearly_billing());

    manager.update();
    assert!(!manager.has_pending_actions());
    assert!(manager.state().is_yearly_billing());
}

#[test]
fn test_actions_apply_in_order() {
    let mut manager = SignupManager::new(Catalog::default());
    fill_personal_info(&mut manager);
    manager.dispatch(SignupAction::AdvanceStep);
    manager.dispatch(SignupAction::AdvanceStep);
    manager.dispatch(SignupAction::GoBackStep);
    manager.update();

    assert_eq!(manager.state().current_step(), Step::SelectPlan);
}

#[test]
fn test_advance_blocked_without_personal_info() {
    let mut manager = SignupManager::new(Catalog::default());
    manager.dispatch(SignupAction::UpdateField {
        field: Field::Name,
        value: "Ada".to_string(),
    });
    manager.dispatch(SignupAction::AdvanceStep);
    manager.update();

    let state = manager.state();
    assert_eq!(state.current_step(), Step::PersonalInfo);
    assert!(!state.field_errors().is_marked(Field::Name));
    assert!(state.field_errors().is_marked(Field::Email));
    assert!(state.field_errors().is_marked(Field::Phone));
}

#[test]
fn test_full_signup_flow() {
    let catalog = Catalog::default();
    let arcade = catalog.plan("Arcade").unwrap().clone();
    let online = catalog.addons[0].clone();
    let mut manager = SignupManager::new(catalog);

    fill_personal_info(&mut manager);
    manager.dispatch(SignupAction::AdvanceStep);
    manager.dispatch(SignupAction::SelectPlan { plan: arcade });
    manager.dispatch(SignupAction::SetBillingPeriod {
        period: BillingPeriod::Yearly,
    });
    manager.dispatch(SignupAction::AdvanceStep);
    manager.dispatch(SignupAction::ToggleAddon { addon: online });
    manager.dispatch(SignupAction::AdvanceStep);
    manager.update();

    let state = manager.state();
    assert_eq!(state.current_step(), Step::Summary);
    assert_eq!(state.total().unwrap().to_string(), "$109/yr");

    manager.dispatch(SignupAction::AdvanceStep);
    manager.update();
    assert_eq!(manager.state().current_step(), Step::Confirmation);
    assert!(manager.state().can_go_back());
}

#[test]
fn test_reset_discards_state_and_queue() {
    let catalog = Catalog::default();
    let pro = catalog.plan("Pro").unwrap().clone();
    let mut manager = SignupManager::new(catalog);

    fill_personal_info(&mut manager);
    manager.dispatch(SignupAction::AdvanceStep);
    manager.dispatch(SignupAction::SelectPlan { plan: pro });
    manager.dispatch(SignupAction::Reset);
    manager.dispatch(SignupAction::ToggleBillingPeriod);
    manager.update();

    let state = manager.state();
    assert_eq!(state.current_step(), Step::PersonalInfo);
    assert!(state.selected_plan().is_none());
    assert!(state.personal_info().name.is_empty());
    // Queued after the reset, so dropped with the queue.
    assert!(!state.is_yearly_billing());
}

#[test]
fn test_clear_pending_actions() {
    let mut manager = SignupManager::new(Catalog::default());
    manager.dispatch(SignupAction::ToggleBillingPeriod);
    manager.clear_pending_actions();
    manager.update();

    assert!(!manager.state().is_yearly_billing());
}

#[test]
fn test_unpriceable_selection_is_kept() {
    // Built by hand, so it skips Catalog::validate.
    let big = Plan::new("Big", "$400000000/mo", None);
    let catalog = Catalog {
        plans: vec![big.clone()],
        addons: Vec::new(),
    };
    let mut manager = SignupManager::new(catalog);

    manager.dispatch(SignupAction::SelectPlan { plan: big });
    manager.dispatch(SignupAction::SetBillingPeriod {
        period: BillingPeriod::Yearly,
    });
    manager.update();

    let state = manager.state();
    assert_eq!(state.selected_plan().map(|p| p.name.as_str()), Some("Big"));
    assert_eq!(
        state.total(),
        Err(PriceError::TotalOverflow("Big".to_string()))
    );

    manager.dispatch(SignupAction::SetBillingPeriod {
        period: BillingPeriod::Monthly,
    });
    manager.update();
    assert_eq!(manager.state().total().unwrap().amount, 400_000_000);
}

#[test]
fn test_action_descriptions() {
    assert_eq!(SignupAction::AdvanceStep.description(), "Advancing to next step");
    assert_eq!(
        SignupAction::SetBillingPeriod {
            period: BillingPeriod::Monthly
        }
        .description(),
        "Setting billing period"
    );
}

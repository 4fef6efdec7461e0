//! Property-based tests for the calculator state machine

use keypad_calculator::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// Generate any keypad action
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => digit_strategy().prop_map(Action::Digit),
        1 => Just(Action::Decimal),
        2 => operation_strategy().prop_map(Action::Operator),
        1 => Just(Action::Equals),
        1 => Just(Action::Percent),
        1 => Just(Action::Delete),
        1 => Just(Action::Clear),
    ]
}

fn session(actions: &[Action]) -> Controller<HeadlessView> {
    let mut controller = Controller::new(HeadlessView::new()).unwrap();
    for action in actions {
        controller.dispatch(*action).unwrap();
    }
    controller
}

fn type_number(controller: &mut Controller<HeadlessView>, n: u32) {
    for c in n.to_string().chars() {
        controller.dispatch(key_to_action(&c.to_string()).unwrap()).unwrap();
    }
}

// ===== State invariants =====

proptest! {
    /// The operand being typed is never empty and never holds two decimal points
    #[test]
    fn prop_current_operand_well_formed(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let controller = session(&actions);
        let current = controller.calculator().current_operand();
        prop_assert!(!current.is_empty());
        prop_assert!(current.matches('.').count() <= 1, "operand {:?}", current);
    }

    /// A pending operation always comes with a captured left operand
    #[test]
    fn prop_pending_operation_has_previous(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let controller = session(&actions);
        let calc = controller.calculator();
        prop_assert_eq!(calc.pending_operation().is_some(), !calc.previous_operand().is_empty());
    }

    /// The view always shows the projection of the state
    #[test]
    fn prop_view_matches_state(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let controller = session(&actions);
        prop_assert_eq!(controller.view().lines.clone(), controller.display());
        prop_assert_eq!(controller.view().renders, actions.len() + 1);
    }

    /// Clear returns to the start-up state from anywhere
    #[test]
    fn prop_clear_resets(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut controller = session(&actions);
        controller.dispatch(Action::Clear).unwrap();
        prop_assert_eq!(controller.calculator().state().clone(), CalculatorState::default());
    }

    /// Equals with nothing pending changes nothing
    #[test]
    fn prop_equals_idempotent(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut controller = session(&actions);
        controller.dispatch(Action::Equals).unwrap();
        let once = controller.calculator().state().clone();
        controller.dispatch(Action::Equals).unwrap();
        prop_assert_eq!(controller.calculator().state().clone(), once);
    }

    /// Alerts only ever carry the division-by-zero message
    #[test]
    fn prop_alerts_only_for_division(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let controller = session(&actions);
        for alert in &controller.view().alerts {
            prop_assert_eq!(alert.as_str(), "Cannot divide by zero!");
        }
    }
}

// ===== Operand entry =====

proptest! {
    /// Digits typed after a non-zero digit concatenate
    #[test]
    fn prop_digits_concatenate(first in 1u8..=9, rest in prop::collection::vec(digit_strategy(), 0..20)) {
        let mut actions = vec![Action::Digit(first)];
        actions.extend(rest.iter().copied().map(Action::Digit));
        let controller = session(&actions);

        let expected: String = std::iter::once(first).chain(rest).map(|d| d.to_string()).collect();
        prop_assert_eq!(controller.display().current, expected);
    }

    /// Repeated decimal points collapse into one
    #[test]
    fn prop_decimal_point_idempotent(d in 1u8..=9, repeats in 1usize..10) {
        let mut actions = vec![Action::Digit(d)];
        actions.extend(std::iter::repeat(Action::Decimal).take(repeats));
        let controller = session(&actions);
        prop_assert_eq!(controller.display().current, format!("{d}."));
    }

    /// Deleting as many times as digits were typed returns to "0"
    #[test]
    fn prop_delete_until_zero(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let mut actions: Vec<Action> = digits.iter().copied().map(Action::Digit).collect();
        actions.extend(std::iter::repeat(Action::Delete).take(digits.len()));
        let controller = session(&actions);
        prop_assert_eq!(controller.display().current, "0");
    }
}

// ===== Arithmetic =====

proptest! {
    /// Integer sums and products are exact
    #[test]
    fn prop_integer_arithmetic(a in 1u32..100_000, b in 0u32..100_000) {
        let mut controller = Controller::new(HeadlessView::new()).unwrap();
        type_number(&mut controller, a);
        controller.dispatch(Action::Operator(Operation::Add)).unwrap();
        type_number(&mut controller, b);
        controller.dispatch(Action::Equals).unwrap();
        prop_assert_eq!(controller.display().current, (a + b).to_string());

        controller.dispatch(Action::Clear).unwrap();
        type_number(&mut controller, a);
        controller.dispatch(Action::Operator(Operation::Multiply)).unwrap();
        type_number(&mut controller, b);
        controller.dispatch(Action::Equals).unwrap();
        prop_assert_eq!(controller.display().current, (u64::from(a) * u64::from(b)).to_string());
    }

    /// Dividing by a typed zero always alerts and resets
    #[test]
    fn prop_divide_by_zero_resets(a in 1u32..1_000_000) {
        let mut controller = Controller::new(HeadlessView::new()).unwrap();
        type_number(&mut controller, a);
        controller.dispatch(Action::Operator(Operation::Divide)).unwrap();
        controller.dispatch(Action::Digit(0)).unwrap();
        controller.dispatch(Action::Equals).unwrap();
        prop_assert_eq!(controller.view().alerts.len(), 1);
        prop_assert_eq!(controller.calculator().state().clone(), CalculatorState::default());
    }

    /// Results never carry more than the configured decimal places
    #[test]
    fn prop_results_rounded(a in 1u32..1000, b in 1u32..1000) {
        let mut controller = Controller::new(HeadlessView::new()).unwrap();
        type_number(&mut controller, a);
        controller.dispatch(Action::Operator(Operation::Divide)).unwrap();
        type_number(&mut controller, b);
        controller.dispatch(Action::Equals).unwrap();
        let current = controller.display().current;
        let places = current.split_once('.').map_or(0, |(_, frac)| frac.len());
        prop_assert!(places <= 8, "{} has {} places", current, places);
        prop_assert!(!current.ends_with('0') || !current.contains('.'));
    }

    /// Percent with a multiplicative operator divides by 100
    #[test]
    fn prop_percent_simple(a in 1u32..1000, b in 1u32..1000) {
        let mut controller = Controller::new(HeadlessView::new()).unwrap();
        type_number(&mut controller, a);
        controller.dispatch(Action::Operator(Operation::Multiply)).unwrap();
        type_number(&mut controller, b);
        controller.dispatch(Action::Percent).unwrap();
        let shown: f64 = controller.display().current.parse().unwrap();
        prop_assert!((shown - f64::from(b) / 100.0).abs() < 1e-9);
    }
}

//! Shadowing analysis over ordered rules using Validation.

use crate::core::{Input, Rule, State};
use crate::validation::violations::RuleViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking a rule set.
pub type RuleCheck = Validation<(), NonEmptyVec<RuleViolation>>;

/// Check every rule, accumulating ALL violations.
///
/// A rule is shadowed when an earlier rule covers both of its matchers.
/// Only the earliest shadowing rule is reported for each shadowed rule.
pub fn check_rules<S: State, I: Input>(rules: &[Rule<S, I>]) -> RuleCheck {
    if rules.is_empty() {
        return Validation::fail(RuleViolation::Empty);
    }

    let checks: Vec<RuleCheck> = rules
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            match rules[..index].iter().position(|earlier| earlier.shadows(rule)) {
                Some(by) => Validation::fail(RuleViolation::Shadowed { index, by }),
                None => Validation::success(()),
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{any, exact, when};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestInput {
        Start,
        Stop,
    }

    impl Input for TestInput {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn disjoint_rules_pass() {
        let rules = vec![
            Rule::to(exact(TestState::Idle), exact(TestInput::Start), TestState::Running),
            Rule::to(exact(TestState::Running), exact(TestInput::Stop), TestState::Idle),
        ];

        assert!(check_rules(&rules).is_success());
    }

    #[test]
    fn empty_rule_set_is_reported() {
        let rules: Vec<Rule<TestState, TestInput>> = Vec::new();

        match check_rules(&rules) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().any(|e| *e == RuleViolation::Empty));
            }
            Validation::Success(_) => panic!("Expected failure for empty rule set"),
        }
    }

    #[test]
    fn accumulates_all_shadowed_rules() {
        let rules = vec![
            Rule::to(any(), exact(TestInput::Stop), TestState::Idle),
            Rule::to(exact(TestState::Running), exact(TestInput::Stop), TestState::Running),
            Rule::to(exact(TestState::Idle), exact(TestInput::Start), TestState::Running),
            Rule::to(exact(TestState::Idle), exact(TestInput::Start), TestState::Idle),
        ];

        match check_rules(&rules) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| *e == RuleViolation::Shadowed { index: 1, by: 0 }));
                assert!(errors
                    .iter()
                    .any(|e| *e == RuleViolation::Shadowed { index: 3, by: 2 }));
            }
            Validation::Success(_) => panic!("Expected shadowed rules"),
        }
    }

    #[test]
    fn predicates_are_never_reported() {
        let rules = vec![
            Rule::to(
                when(|_: &TestState| true),
                exact(TestInput::Start),
                TestState::Running,
            ),
            Rule::to(exact(TestState::Idle), exact(TestInput::Start), TestState::Idle),
        ];

        assert!(check_rules(&rules).is_success());
    }
}

use crate::actions::Action;
use crate::effect::Effect;
use crate::state::CounterState;

/// Reducer - pure function that produces new state from current state + action
///
/// Returns the next state and the effects the store should hand to the
/// effect runner. No I/O happens here.
pub fn reduce(mut state: CounterState, action: &Action) -> (CounterState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        Action::Decrement => {
            state.fact = None;
            state.count = state.count.wrapping_sub(1);
        }
        Action::Increment => {
            state.fact = None;
            state.count = state.count.wrapping_add(1);
        }
        Action::ToggleTimer => {
            state.is_timer_on = !state.is_timer_on;
        }
        Action::RequestFact => {
            state.fact = None;
            state.is_loading = true;
            effects.push(Effect::FetchFact { count: state.count });
        }
        Action::FactReceived(fact) => {
            // Overlapping requests are not cancelled: the last response wins
            state.is_loading = false;
            state.fact = Some(fact.clone());
        }
    }

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(state: CounterState, actions: &[Action]) -> CounterState {
        actions
            .iter()
            .fold(state, |state, action| reduce(state, action).0)
    }

    #[test]
    fn test_default_state() {
        let state = CounterState::default();
        assert_eq!(state.count, 0);
        assert_eq!(state.fact, None);
        assert!(!state.is_loading);
        assert!(!state.is_timer_on);
    }

    #[test]
    fn test_count_is_net_sum_of_steps() {
        // Mixed sequence that dips below zero and back
        let steps: Vec<Action> = (0..40)
            .map(|i| {
                if i % 3 == 0 || i > 30 {
                    Action::Increment
                } else {
                    Action::Decrement
                }
            })
            .collect();
        let expected: i64 = steps
            .iter()
            .map(|a| if *a == Action::Increment { 1 } else { -1 })
            .sum();

        let state = reduce_all(CounterState::default(), &steps);
        assert_eq!(state.count, expected);
    }

    #[test]
    fn test_count_may_go_negative() {
        let state = reduce_all(
            CounterState::default(),
            &[Action::Decrement, Action::Decrement],
        );
        assert_eq!(state.count, -2);
    }

    #[test]
    fn test_increment_and_decrement_clear_fact() {
        let with_fact = CounterState {
            count: 3,
            fact: Some("3 is a prime.".to_string()),
            ..Default::default()
        };

        let (state, effects) = reduce(with_fact.clone(), &Action::Increment);
        assert_eq!(state.count, 4);
        assert_eq!(state.fact, None);
        assert!(effects.is_empty());

        let (state, effects) = reduce(with_fact, &Action::Decrement);
        assert_eq!(state.count, 2);
        assert_eq!(state.fact, None);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_toggle_timer_parity() {
        for n in 0..6 {
            let toggles = vec![Action::ToggleTimer; n];
            let state = reduce_all(CounterState::default(), &toggles);
            assert_eq!(state.is_timer_on, n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn test_toggle_timer_touches_nothing_else() {
        let before = CounterState {
            count: 9,
            fact: Some("nine".to_string()),
            is_loading: true,
            is_timer_on: false,
        };
        let (after, effects) = reduce(before.clone(), &Action::ToggleTimer);
        assert!(effects.is_empty());
        assert_eq!(
            after,
            CounterState {
                is_timer_on: true,
                ..before
            }
        );
    }

    #[test]
    fn test_request_fact_sets_loading_and_schedules_fetch() {
        let before = CounterState {
            count: 5,
            fact: Some("old".to_string()),
            ..Default::default()
        };
        let (state, effects) = reduce(before, &Action::RequestFact);

        assert!(state.is_loading);
        assert_eq!(state.fact, None);
        assert_eq!(state.count, 5);
        assert_eq!(effects, vec![Effect::FetchFact { count: 5 }]);
    }

    #[test]
    fn test_fact_received_ignores_count() {
        let loading = CounterState {
            count: 12,
            is_loading: true,
            ..Default::default()
        };
        let (state, effects) = reduce(loading, &Action::FactReceived("about 1".to_string()));

        assert!(!state.is_loading);
        assert_eq!(state.fact.as_deref(), Some("about 1"));
        assert_eq!(state.count, 12);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_fact_lifecycle_scenario() {
        let state = CounterState::default();

        let (state, _) = reduce(state, &Action::Increment);
        assert_eq!(state.count, 1);
        assert_eq!(state.fact, None);

        let (state, effects) = reduce(state, &Action::RequestFact);
        assert_eq!(state.count, 1);
        assert_eq!(state.fact, None);
        assert!(state.is_loading);
        assert_eq!(effects, vec![Effect::FetchFact { count: 1 }]);

        let fact = "1 is the loneliest number.".to_string();
        let (state, _) = reduce(state, &Action::FactReceived(fact.clone()));
        assert_eq!(
            state,
            CounterState {
                count: 1,
                fact: Some(fact),
                is_loading: false,
                is_timer_on: false,
            }
        );
    }

    #[test]
    fn test_overlapping_requests_last_response_wins() {
        let state = reduce_all(
            CounterState::default(),
            &[
                Action::RequestFact,
                Action::RequestFact,
                Action::FactReceived("A".to_string()),
                Action::FactReceived("B".to_string()),
            ],
        );
        assert_eq!(state.fact.as_deref(), Some("B"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_count_wraps_instead_of_panicking() {
        let max = CounterState {
            count: i64::MAX,
            ..Default::default()
        };
        let (state, _) = reduce(max, &Action::Increment);
        assert_eq!(state.count, i64::MIN);
    }
}

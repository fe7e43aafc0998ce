//! Macros for declaring machine configurations inline.

/// Declare an [`FsmConfig`](crate::builder::FsmConfig) with one line per state.
///
/// State and event names must be valid Rust identifiers; use
/// [`FsmConfigBuilder`](crate::builder::FsmConfigBuilder) for anything else.
///
/// # Example
///
/// ```
/// use waypoint::fsm_config;
///
/// let config = fsm_config! {
///     initial: normal,
///     states: {
///         normal => { study => busy },
///         busy => { get_tired => sleeping, get_hungry => hungry },
///         hungry => { eat => normal },
///         sleeping => {},
///     }
/// };
///
/// assert_eq!(config.initial, "normal");
/// assert_eq!(config.states.len(), 4);
/// assert_eq!(config.states.destination("busy", "get_tired"), Some("sleeping"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => { $($event:ident => $destination:ident),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::StateTable::new();
        $(
            states.insert(
                stringify!($state),
                $crate::core::StateDef::new()
                    $(.on(stringify!($event), stringify!($destination)))*,
            );
        )*
        $crate::builder::FsmConfig::new(stringify!($initial), states)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fsm_config_macro_builds_table() {
        let config = fsm_config! {
            initial: normal,
            states: {
                normal => { study => busy },
                busy => { get_tired => sleeping, get_hungry => hungry, },
            }
        };

        assert_eq!(config.initial, "normal");
        let names: Vec<_> = config.states.names().collect();
        assert_eq!(names, vec!["normal", "busy"]);
        assert_eq!(config.states.destination("busy", "get_hungry"), Some("hungry"));
    }

    #[test]
    fn fsm_config_macro_accepts_empty_states() {
        let config = fsm_config! {
            initial: limbo,
            states: {}
        };

        assert_eq!(config.initial, "limbo");
        assert!(config.states.is_empty());
    }

    #[test]
    fn fsm_config_macro_accepts_terminal_states() {
        let config = fsm_config! {
            initial: start,
            states: {
                start => { finish => done },
                done => {},
            },
        };

        assert!(config.states.get("done").unwrap().transitions.is_empty());
    }
}

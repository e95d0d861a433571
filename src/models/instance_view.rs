/// Lifecycle state of a compute instance. Anything the provider reports
/// beyond running/stopped is carried through verbatim for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstanceState {
    Running,
    Stopped,
    Other(String),
}

impl InstanceState {
    pub fn from_provider(raw: &str) -> InstanceState {
        match raw {
            "running" => InstanceState::Running,
            "stopped" => InstanceState::Stopped,
            other => InstanceState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InstanceState::Running => "running",
            InstanceState::Stopped => "stopped",
            InstanceState::Other(raw) => raw,
        }
    }
}

/// One compute instance row, flattened out of its reservation grouping.
#[derive(Clone, Debug)]
pub struct InstanceView {
    pub id: String,
    pub state: InstanceState,
    pub instance_type: String,
    pub public_ip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states_map_to_variants() {
        assert_eq!(InstanceState::from_provider("running"), InstanceState::Running);
        assert_eq!(InstanceState::from_provider("stopped"), InstanceState::Stopped);
    }

    #[test]
    fn unknown_state_is_preserved_verbatim() {
        let state = InstanceState::from_provider("shutting-down");
        assert_eq!(state, InstanceState::Other("shutting-down".to_string()));
        assert_eq!(state.as_str(), "shutting-down");
    }
}

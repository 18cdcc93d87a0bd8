//! Load-balancer routing state: target groups, listeners, target health.

/// A target group and the load balancers that own it.
///
/// A target group may be shared across listeners or referenced by none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroup {
    pub arn: String,
    pub load_balancer_arns: Vec<String>,
}

/// One weighted entry of a listener's forward action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedTarget {
    pub target_group_arn: String,
    /// Share of traffic routed to this target group. Zero means the group
    /// carries no live traffic and is safe to detach.
    pub weight: u64,
}

/// A default action of a listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerAction {
    /// Forward-type action with its weighted target list.
    Forward { targets: Vec<WeightedTarget> },
    /// Any non-forward action (redirect, fixed-response, auth, ...).
    Other,
}

/// A load balancer listener and its default actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub arn: String,
    pub actions: Vec<ListenerAction>,
}

impl Listener {
    /// The weighted target list, but only when this listener is a pure
    /// single-action forward. Listeners with multiple actions or a
    /// non-forward action are opaque to pruning and must be left untouched.
    pub fn single_forward_targets(&self) -> Option<&[WeightedTarget]> {
        match self.actions.as_slice() {
            [ListenerAction::Forward { targets }] => Some(targets),
            _ => None,
        }
    }
}

/// Health state of one registered target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    Initial,
    Unhealthy,
    Draining,
    Unused,
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(targets: Vec<WeightedTarget>) -> ListenerAction {
        ListenerAction::Forward { targets }
    }

    fn target(arn: &str, weight: u64) -> WeightedTarget {
        WeightedTarget {
            target_group_arn: arn.into(),
            weight,
        }
    }

    #[test]
    fn single_forward_listener_exposes_targets() {
        let listener = Listener {
            arn: "listener-1".into(),
            actions: vec![forward(vec![target("tg-a", 100), target("tg-b", 0)])],
        };
        let targets = listener.single_forward_targets().unwrap();
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn multi_action_listener_is_opaque() {
        let listener = Listener {
            arn: "listener-2".into(),
            actions: vec![ListenerAction::Other, forward(vec![target("tg-a", 0)])],
        };
        assert!(listener.single_forward_targets().is_none());
    }

    #[test]
    fn non_forward_listener_is_opaque() {
        let listener = Listener {
            arn: "listener-3".into(),
            actions: vec![ListenerAction::Other],
        };
        assert!(listener.single_forward_targets().is_none());
    }
}

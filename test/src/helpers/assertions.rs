/// Assert that two test nodes hold exactly the same live actors
#[macro_export]
macro_rules! assert_converged {
    ($left:expr, $right:expr) => {
        assert_eq!(
            $left.snapshot(),
            $right.snapshot(),
            "{} and {} hold different actors",
            $left.name(),
            $right.name()
        );
    };
}

/// Assert that a node holds an actor with the given id
#[macro_export]
macro_rules! assert_has_actor {
    ($node:expr, $actor_id:expr) => {
        assert!(
            $node.scene().actor_exists(&$actor_id),
            "{} should hold actor {}",
            $node.name(),
            $actor_id
        );
    };
}

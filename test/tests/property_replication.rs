/// PROPERTY-BASED TESTS: Replication invariants
///
/// Uses proptest to verify replication properties hold across random inputs.
///
/// Key invariants:
/// 1. Encoding then decoding a diff preserves every entry, in either codec
/// 2. A replica fed every diff in order, with duplicates, matches the master
/// 3. A revision is never newer than itself, and its successor always is

use proptest::prelude::*;
use wireplace_shared::{
    is_revision_newer, ActorId, AnimationAction, BinaryCodec, Diff, DiffCodec, RevisionWindow, SceneConfig,
    TextCodec, Update, Vector3, MAX_REVISION, PROTOCOL_VERSION,
};
use wireplace_test::{exchange_diffs, LinkConditions, LossyLink, TestNode};

fn vector_strategy() -> impl Strategy<Value = Vector3> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0, -1000.0f32..1000.0)
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn update_strategy() -> impl Strategy<Value = Update> {
    (
        (
            proptest::option::of(0..MAX_REVISION),
            proptest::option::of(any::<bool>()),
            proptest::option::of(any::<bool>()),
            proptest::option::of(0.0f32..20.0),
            proptest::option::of(any::<u32>()),
            proptest::option::of(any::<u16>()),
        ),
        (
            proptest::option::of((any::<i32>(), any::<i32>())),
            proptest::option::of(vector_strategy()),
            proptest::option::of(vector_strategy()),
            proptest::option::of(vector_strategy()),
            proptest::option::of(vector_strategy()),
        ),
    )
        .prop_map(
            |(
                (revision, collidable, movable, speed, color, asset_id),
                (action, position, rotation, scale, up),
            )| Update {
                revision,
                deleted: false,
                collidable,
                movable,
                speed,
                color,
                asset_id,
                action: action.map(|(kind, state)| AnimationAction::new(kind, state)),
                position,
                rotation,
                scale,
                up,
            },
        )
}

fn actor_id_strategy() -> impl Strategy<Value = ActorId> {
    prop_oneof![
        (0u64..100_000).prop_map(ActorId::from_index),
        "[a-z0-9_-]{1,12}".prop_map(ActorId::new),
    ]
}

fn diff_strategy() -> impl Strategy<Value = Diff> {
    prop::collection::vec(
        (
            actor_id_strategy(),
            prop_oneof![4 => update_strategy(), 1 => Just(Update::tombstone())],
        ),
        0..12,
    )
    .prop_map(|entries| Diff::with_updates(PROTOCOL_VERSION, entries))
}

#[derive(Clone, Debug)]
enum Operation {
    Spawn(u32),
    Recolor(usize, u32),
    Move(usize, Vector3),
    Remove(usize),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u32>().prop_map(Operation::Spawn),
        (any::<usize>(), any::<u32>()).prop_map(|(index, color)| Operation::Recolor(index, color)),
        (any::<usize>(), vector_strategy()).prop_map(|(index, position)| Operation::Move(index, position)),
        any::<usize>().prop_map(Operation::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_codecs_preserve_diffs(diff in diff_strategy()) {
        let codecs: [Box<dyn DiffCodec>; 2] = [Box::new(BinaryCodec::new()), Box::new(TextCodec::new())];
        for codec in codecs {
            let bytes = codec.encode(&diff).unwrap();
            prop_assert_eq!(codec.decode(&bytes).unwrap(), diff.clone());
        }
    }

    #[test]
    fn prop_in_order_delivery_converges(
        operations in prop::collection::vec(operation_strategy(), 1..40),
        seed in any::<u64>(),
    ) {
        let mut master = TestNode::master(SceneConfig::default());
        let mut replica = TestNode::replica("replica", SceneConfig::default());
        let mut link = LossyLink::new(LinkConditions::duplicating(), seed);
        let mut live: Vec<ActorId> = Vec::new();

        for operation in operations {
            match operation {
                Operation::Spawn(color) => {
                    live.push(master.scene_mut().spawn_actor(Update::new().with_color(color)));
                }
                Operation::Recolor(index, color) if !live.is_empty() => {
                    let actor_id = &live[index % live.len()];
                    master.scene_mut().update_actor(actor_id, Update::new().with_color(color), false);
                }
                Operation::Move(index, position) if !live.is_empty() => {
                    let actor_id = &live[index % live.len()];
                    master.scene_mut().update_actor(actor_id, Update::new().with_position(position), false);
                }
                Operation::Remove(index) if !live.is_empty() => {
                    let actor_id = live.remove(index % live.len());
                    master.scene_mut().remove_actor(&actor_id);
                }
                _ => {}
            }
            exchange_diffs(master.scene_mut(), replica.scene_mut(), &mut link, None);
        }

        prop_assert_eq!(master.snapshot(), replica.snapshot());
    }

    #[test]
    fn prop_successor_is_newer(revision in 0..MAX_REVISION) {
        let window = RevisionWindow::default();
        prop_assert!(!is_revision_newer(revision, revision));
        prop_assert!(is_revision_newer(revision, window.next(revision)));
    }
}

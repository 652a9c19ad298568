/// Integration tests for replication over an unreliable link
/// These tests verify idempotence, monotonic revisions and tombstone safety

use std::collections::HashMap;

use wireplace_shared::{ActorId, CodecKind, SceneConfig, Update};
use wireplace_test::{
    assert_converged, exchange_diffs, init_logging, LinkConditions, LossyLink, TestNode,
};

fn text_config() -> SceneConfig {
    SceneConfig {
        codec: CodecKind::Text,
        ..SceneConfig::default()
    }
}

#[test]
fn duplicated_delivery_converges() {
    init_logging();
    for config in [SceneConfig::default(), text_config()] {
        let mut master = TestNode::master(config.clone());
        let mut replica = TestNode::replica("replica", config);
        let mut link = LossyLink::new(LinkConditions::duplicating(), 7);

        let mut ids = Vec::new();
        for round in 0..30u32 {
            match round % 4 {
                0 => ids.push(master.scene_mut().spawn_actor(Update::new())),
                3 if ids.len() > 1 => {
                    let actor_id = ids.remove(0);
                    master.scene_mut().remove_actor(&actor_id);
                }
                _ => {
                    let actor_id = &ids[round as usize % ids.len()];
                    master.scene_mut().update_actor(
                        actor_id,
                        Update::new().with_color(round).with_speed(round as f32 / 2.0),
                        false,
                    );
                }
            }
            exchange_diffs(master.scene_mut(), replica.scene_mut(), &mut link, None);
        }

        assert_converged!(master, replica);
    }
}

#[test]
fn revisions_never_move_backwards() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    let mut replica = TestNode::replica("replica", SceneConfig::default());
    let mut link = LossyLink::new(LinkConditions::poor(), 42);

    let ids: Vec<ActorId> = (0..4)
        .map(|_| master.scene_mut().spawn_actor(Update::new()))
        .collect();
    let mut highest: HashMap<ActorId, u16> = HashMap::new();

    for round in 0..200u32 {
        let actor_id = &ids[round as usize % ids.len()];
        master
            .scene_mut()
            .update_actor(actor_id, Update::new().with_color(round), false);
        // hold some rounds back so reordering has something to shuffle
        if round % 3 != 0 {
            link.send(master.flush());
            continue;
        }
        exchange_diffs(master.scene_mut(), replica.scene_mut(), &mut link, None);

        for (actor_id, actor) in replica.snapshot() {
            let previous = highest.insert(actor_id, actor.revision).unwrap_or(0);
            assert!(actor.revision >= previous);
        }
    }
    assert!(link.dropped() > 0);

    // replica revisions never pass the master's
    for (actor_id, actor) in replica.snapshot() {
        let authoritative = master.scene().get_actor(&actor_id).unwrap();
        assert!(actor.revision <= authoritative.revision);
    }
}

#[test]
fn delayed_creation_cannot_resurrect_deleted_actor() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    let mut replica = TestNode::replica("replica", SceneConfig::default());

    let actor_id = master.scene_mut().spawn_actor(Update::new().with_color(1));
    let creation = master.flush();
    master
        .scene_mut()
        .update_actor(&actor_id, Update::new().with_color(2), false);
    let update = master.flush();
    master.scene_mut().remove_actor(&actor_id);
    let deletion = master.flush();

    replica.receive(&creation);
    replica.receive(&update);
    replica.receive(&deletion);
    assert_eq!(replica.receive(&creation), 0);
    assert_eq!(replica.receive(&update), 0);

    assert!(!replica.scene().actor_exists(&actor_id));
    assert_converged!(master, replica);
}

#[test]
fn deletion_before_creation_is_ignored() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    let mut replica = TestNode::replica("replica", SceneConfig::default());

    let actor_id = master.scene_mut().spawn_actor(Update::new());
    let creation = master.flush();
    master.scene_mut().remove_actor(&actor_id);
    let deletion = master.flush();

    assert_eq!(replica.receive(&deletion), 0);
    assert_eq!(replica.receive(&creation), 1);

    // the creation arrived last; the replica cannot know it is stale
    assert!(replica.scene().actor_exists(&actor_id));
}

#[test]
fn deletion_overtaking_update_is_final() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    let mut replica = TestNode::replica("replica", SceneConfig::default());

    let actor_id = master.scene_mut().spawn_actor(Update::new());
    replica.receive(&master.flush());

    master
        .scene_mut()
        .update_actor(&actor_id, Update::new().with_color(1), false);
    master.flush();
    master
        .scene_mut()
        .update_actor(&actor_id, Update::new().with_color(2), false);
    let delayed = master.flush();
    master.scene_mut().remove_actor(&actor_id);
    let deletion = master.flush();

    assert_eq!(replica.receive(&deletion), 1);
    assert_eq!(replica.receive(&delayed), 0);

    assert!(!replica.scene().actor_exists(&actor_id));
    assert_converged!(master, replica);
}

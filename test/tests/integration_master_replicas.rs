/// Integration tests for a master scene feeding several replicas
/// These tests verify late joiners, incremental sync and avatar echo suppression

use wireplace_shared::{ReplicatedScene, SceneConfig, Update, Vector3};
use wireplace_test::{
    assert_converged, assert_has_actor, exchange_diffs, full_sync, init_logging, LossyLink,
    TestNode,
};

#[test]
fn late_joiner_receives_full_snapshot() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    for color in 0..5 {
        master.scene_mut().spawn_actor(Update::new().with_color(color));
    }
    // the pending diff belongs to earlier replicas
    master.flush();

    let mut joiner = TestNode::replica("joiner", SceneConfig::default());
    let accepted = full_sync(master.scene_mut(), joiner.scene_mut());

    assert_eq!(accepted, 5);
    assert_converged!(master, joiner);
    assert_eq!(master.scene().pending_diff_len(), 0);
}

#[test]
fn incremental_diffs_follow_snapshot() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    let mut replica = TestNode::replica("replica", SceneConfig::default());
    let door = master.scene_mut().spawn_actor(Update::new());
    master.flush();
    full_sync(master.scene_mut(), replica.scene_mut());

    let mut link = LossyLink::perfect();
    master
        .scene_mut()
        .update_actor(&door, Update::new().with_rotation(Vector3::UP), false);
    let crate_id = master.scene_mut().spawn_actor(Update::new().with_asset_id(4));
    exchange_diffs(master.scene_mut(), replica.scene_mut(), &mut link, None);

    assert_has_actor!(replica, crate_id);
    assert_converged!(master, replica);

    master.scene_mut().remove_actor(&door);
    exchange_diffs(master.scene_mut(), replica.scene_mut(), &mut link, None);

    assert!(!replica.scene().actor_exists(&door));
    assert_converged!(master, replica);
}

#[test]
fn replicas_keep_their_own_avatar() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    let mut alice = TestNode::replica("alice", SceneConfig::default());
    let mut bob = TestNode::replica("bob", SceneConfig::default());

    let alice_avatar = master.spawn_avatar();
    let bob_avatar = master.spawn_avatar();
    alice.set_avatar(alice_avatar.clone());
    bob.set_avatar(bob_avatar.clone());
    let snapshot = master.snapshot_payload();
    master.flush();
    alice.receive(&snapshot);
    bob.receive(&snapshot);
    assert_has_actor!(alice, bob_avatar);
    assert!(!alice.scene().actor_exists(&alice_avatar));

    // alice moves her avatar and reports it to the master
    alice.scene_mut().add_actor(&alice_avatar);
    alice.scene_mut().update_actor(
        &alice_avatar,
        Update::new().with_position(Vector3::new(4.0, 0.0, 2.0)),
        false,
    );
    let report = alice.flush();
    master.receive(&report);

    // the master relays it everywhere, alice included
    let relay = master.flush();
    alice.receive(&relay);
    bob.receive(&relay);

    let seen_by_bob = bob.scene().get_actor(&alice_avatar).unwrap();
    assert_eq!(seen_by_bob.position, Vector3::new(4.0, 0.0, 2.0));
    assert_eq!(
        alice.scene().get_actor(&alice_avatar).unwrap().revision,
        master.scene().get_actor(&alice_avatar).unwrap().revision
    );
}

#[test]
fn echo_of_stale_state_does_not_overwrite_avatar() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    let mut alice = TestNode::replica("alice", SceneConfig::default());
    let avatar = master.spawn_avatar();
    alice.set_avatar(avatar.clone());
    alice.scene_mut().add_actor(&avatar);

    for step in 0..10 {
        alice.scene_mut().update_actor(
            &avatar,
            Update::new().with_position(Vector3::new(step as f32, 0.0, 0.0)),
            false,
        );
    }
    let latest = alice.scene().get_actor(&avatar).unwrap().clone();

    // the master still relays its own far newer view of the avatar
    master.scene_mut().update_actor(
        &avatar,
        Update::new().with_revision(500).with_position(Vector3::ZERO),
        false,
    );
    let relay = master.flush();
    assert_eq!(alice.receive(&relay), 0);

    assert_eq!(alice.scene().get_actor(&avatar), Some(&latest));
}

#[test]
fn roles_share_one_replication_surface() {
    init_logging();
    let mut master = TestNode::master(SceneConfig::default());
    let mut replica = TestNode::replica("replica", SceneConfig::default());

    let scenes: [&mut dyn ReplicatedScene; 2] = [master.scene_mut(), replica.scene_mut()];
    for scene in scenes {
        scene.update_actor(&"a0".into(), Update::new().with_color(3), false);
    }

    assert_converged!(master, replica);
}

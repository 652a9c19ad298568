use log::debug;

use wireplace_shared::{ActorId, ReplicatedScene};

use super::LossyLink;

/// Moves the pending diff of `from` across `link` into `to`.
/// Returns how many entries `to` accepted.
pub fn exchange_diffs(
    from: &mut dyn ReplicatedScene,
    to: &mut dyn ReplicatedScene,
    link: &mut LossyLink,
    skip_id: Option<&ActorId>,
) -> usize {
    let serialized = from
        .retrieve_serialized_diff(false)
        .expect("pending diff should serialize");
    if serialized.count > 0 {
        link.send(serialized.data);
    }

    let mut accepted = 0;
    for payload in link.deliver() {
        accepted += to
            .apply_serialized_diff(&payload, skip_id)
            .expect("payload should decode");
    }
    debug!("exchange_diffs: {} entries accepted", accepted);
    accepted
}

/// Sends a full snapshot of `from` to `to` without loss
pub fn full_sync(from: &mut dyn ReplicatedScene, to: &mut dyn ReplicatedScene) -> usize {
    let snapshot = from.retrieve_diff(true);
    to.apply_diff(snapshot, None)
        .expect("snapshot should carry the local protocol version")
}

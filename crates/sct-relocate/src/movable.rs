//! `Movable` — the unit of relocation — and the host port it moves through.

use sct_core::{ActorId, Destination, GroupId};

// ── ActorPort ─────────────────────────────────────────────────────────────────

/// Host-engine surface the relocation moves flow through.
///
/// The toolkit never touches actors directly: `move_actor` and
/// `notify_relocated` are abstract effectful calls whose transport (engine
/// API, packets, …) is the host's concern.  Neither reports failure — a host
/// that can fail a move handles retry/recovery on its own side; the scheduler
/// attempts every move exactly once regardless.
pub trait ActorPort {
    /// Teleport `actor` to `dest`.
    fn move_actor(&mut self, actor: ActorId, dest: &Destination);

    /// Tell `actor` where it ended up and in what company.  Presentation
    /// (chat message, toast, nothing at all) is up to the host.
    fn notify_relocated(&mut self, actor: ActorId, dest: &Destination, moved_as: MovedAs);

    /// Currently reachable members of `group`, in the host's member order.
    /// Offline/despawned members are simply absent from the result.
    fn group_members(&self, group: GroupId) -> Vec<ActorId>;
}

/// Whether an actor was relocated on its own or as part of a group — lets
/// the presentation layer phrase "by yourself" vs. "with team X" without the
/// core formatting any text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MovedAs {
    Solo,
    WithGroup(GroupId),
}

// ── Movable ───────────────────────────────────────────────────────────────────

/// Something that can be relocated: one actor, or a whole group sharing a
/// single destination.
///
/// Equality and hashing are by underlying identity, so callers can
/// deduplicate (e.g. collect team members into one `Group` entry) before
/// handing the list to the scheduler.  The scheduler itself never
/// deduplicates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movable {
    Single(ActorId),
    Group(GroupId),
}

impl Movable {
    /// Move and notify through `port`.
    ///
    /// A `Group` forwards to every currently reachable member; unreachable
    /// members are silently skipped, never an error.  A fully unreachable
    /// group moves nobody and that is fine — the run's progress counts
    /// pairs, not actors.
    pub fn relocate(&self, port: &mut impl ActorPort, dest: &Destination) {
        match *self {
            Movable::Single(actor) => {
                port.move_actor(actor, dest);
                port.notify_relocated(actor, dest, MovedAs::Solo);
            }
            Movable::Group(group) => {
                for actor in port.group_members(group) {
                    port.move_actor(actor, dest);
                    port.notify_relocated(actor, dest, MovedAs::WithGroup(group));
                }
            }
        }
    }
}

//! An in-memory stand-in for a real game server, just big enough to host a
//! scatter run: actor positions, team membership, region loading, and an
//! eviction sweep that honors the retention guard.

use std::collections::{HashMap, HashSet};

use sct_core::{ActorId, Destination, GroupId, WorldId};
use sct_relocate::{ActorPort, MovedAs};
use sct_world::{RegionCoord, RegionGuard, RegionLoader};

pub struct ArenaWorld {
    pub names:     HashMap<ActorId, String>,
    pub teams:     HashMap<GroupId, Vec<ActorId>>,
    pub positions: HashMap<ActorId, Destination>,
    pub loaded:    HashSet<(WorldId, RegionCoord)>,

    pub loads_issued:   usize,
    pub unloads_done:   usize,
    pub unloads_vetoed: usize,
}

impl ArenaWorld {
    pub fn new() -> Self {
        Self {
            names:          HashMap::new(),
            teams:          HashMap::new(),
            positions:      HashMap::new(),
            loaded:         HashSet::new(),
            loads_issued:   0,
            unloads_done:   0,
            unloads_vetoed: 0,
        }
    }

    pub fn add_actor(&mut self, actor: ActorId, name: &str) {
        self.names.insert(actor, name.to_owned());
    }

    pub fn add_team(&mut self, team: GroupId, members: &[ActorId]) {
        self.teams.insert(team, members.to_vec());
    }

    fn name_of(&self, actor: ActorId) -> &str {
        self.names.get(&actor).map_or("?", String::as_str)
    }

    /// The engine's background eviction sweep: tries to drop every loaded
    /// region, polling the guard per attempt the way a real engine polls its
    /// unload hook.
    pub fn sweep_unloads(&mut self, guard: &RegionGuard) {
        if guard.should_cancel_unload() {
            self.unloads_vetoed += self.loaded.len();
            return;
        }
        self.unloads_done += self.loaded.len();
        self.loaded.clear();
    }
}

impl RegionLoader for ArenaWorld {
    fn load_region(&mut self, world: WorldId, region: RegionCoord) {
        // Loading a loaded region is a no-op.
        if self.loaded.insert((world, region)) {
            self.loads_issued += 1;
        }
    }
}

impl ActorPort for ArenaWorld {
    fn move_actor(&mut self, actor: ActorId, dest: &Destination) {
        self.positions.insert(actor, *dest);
    }

    fn notify_relocated(&mut self, actor: ActorId, dest: &Destination, moved_as: MovedAs) {
        let company = match moved_as {
            MovedAs::Solo => "by yourself".to_owned(),
            MovedAs::WithGroup(team) => format!("with team {}", team.0),
        };
        println!("  [{}] you were scattered to {} {company}", self.name_of(actor), dest.pos);
    }

    fn group_members(&self, group: GroupId) -> Vec<ActorId> {
        self.teams.get(&group).cloned().unwrap_or_default()
    }
}

use super::{Hierarchy, NodeId};
use crate::math::Transform;

impl<T: Transform> Hierarchy<T> {
    /// Logs every node's local and world pose at info level.
    pub fn log_transforms(&mut self) {
        self.refresh();

        log::info!("=== Transform Debug ===");
        for (index, (node, world)) in self.nodes.iter().zip(self.global.iter()).enumerate() {
            let id = NodeId::new(index);
            match node.relation.parent {
                Some(parent) => log::info!("{} (parent {}):", id, parent),
                None => log::info!("{} (root):", id),
            }
            log::info!(
                "    Local T:{:?} R:{:?} S:{:?}",
                node.local.position(),
                node.local.rotation(),
                node.local.scale()
            );
            let pose = T::from_world(world);
            log::info!(
                "    World T:{:?} R:{:?} S:{:?}",
                pose.position(),
                pose.rotation(),
                pose.scale()
            );
        }
        log::info!("=====================");
    }
}

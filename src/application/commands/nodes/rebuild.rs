// src/application/commands/nodes/rebuild.rs
use super::NodeCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        node::Node,
        slug::compute_path,
    },
};

impl NodeCommandService {
    /// Recomputes every stored slug path, root by root.
    ///
    /// Safe to repeat: paths that are already correct are not written again.
    /// Returns the number of nodes whose path was rewritten.
    pub async fn rebuild_paths(&self) -> ApplicationResult<usize> {
        let mut written = 0;
        for mut root in self.read_repo.children(None).await? {
            let path = compute_path::<Node>(&root.slug, &[])?;
            if root.slug_path != path {
                self.write_repo.update_slug_path(root.id, &path).await?;
                root.slug_path = path;
                written += 1;
            }
            written += self.path_maintainer.cascade_descendants(&root).await?;
        }

        tracing::info!(written, "slug paths rebuilt");
        Ok(written)
    }
}

mod support;

use slugtree_core::domain::node::NodeId;
use slugtree_core::domain::slug::{PathChange, SlugPath, compute_path, plan_cascade};

use support::NodeBuilder;

#[test]
fn hidden_ancestors_are_skipped() {
    let chain = [
        NodeBuilder::new(1, "root").build(),
        NodeBuilder::new(2, "child").parent(1).hidden().build(),
    ];
    let leaf = NodeBuilder::new(3, "leaf").build();

    let path = compute_path(&leaf.slug, &chain).unwrap();
    assert_eq!(path.as_str(), "root/leaf");
}

#[test]
fn path_change_states() {
    let current = SlugPath::new("a/b").unwrap();
    assert_eq!(PathChange::between(None, &current), PathChange::Computed);
    assert_eq!(PathChange::between(Some(&current), &current), PathChange::Unchanged);

    let stale = SlugPath::new("x/b").unwrap();
    let change = PathChange::between(Some(&stale), &current);
    assert_eq!(change, PathChange::Recomputed { previous: stale });
    assert!(change.is_changed());
}

#[test]
fn cascade_rewrites_only_stale_descendants_and_settles() {
    let root = NodeBuilder::new(1, "docs").path("manual").build();
    let mut descendants = vec![
        NodeBuilder::new(2, "guide").parent(1).path("docs/guide").build(),
        NodeBuilder::new(3, "intro").parent(2).path("docs/guide/intro").build(),
        NodeBuilder::new(4, "api").parent(1).path("manual/api").build(),
    ];

    let plan = plan_cascade(&root, &SlugPath::new("manual").unwrap(), &descendants).unwrap();
    let ids: Vec<NodeId> = plan.iter().map(|r| r.id).collect();
    assert_eq!(ids, [NodeId::new(2).unwrap(), NodeId::new(3).unwrap()]);
    assert_eq!(plan[1].slug_path.as_str(), "manual/guide/intro");
    assert_eq!(plan[1].previous.as_ref().map(SlugPath::as_str), Some("docs/guide/intro"));

    for rewrite in plan {
        let node = descendants.iter_mut().find(|n| n.id == rewrite.id).unwrap();
        node.slug_path = rewrite.slug_path;
    }
    let again = plan_cascade(&root, &SlugPath::new("manual").unwrap(), &descendants).unwrap();
    assert!(again.is_empty());
}

#[test]
fn cascade_through_hidden_descendant() {
    let root = NodeBuilder::new(1, "shop").build();
    let descendants = [
        NodeBuilder::new(2, "group").parent(1).hidden().path("shop/group").build(),
        NodeBuilder::new(3, "item").parent(2).path("shop/group/item").build(),
    ];

    let plan = plan_cascade(&root, &root.slug_path, &descendants).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].slug_path.as_str(), "shop/item");
}

#[test]
fn cascade_rejects_out_of_order_descendants() {
    let root = NodeBuilder::new(1, "root").build();
    let descendants = [
        NodeBuilder::new(3, "leaf").parent(2).build(),
        NodeBuilder::new(2, "mid").parent(1).build(),
    ];

    assert!(plan_cascade(&root, &root.slug_path, &descendants).is_err());
}

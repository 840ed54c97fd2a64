/*
 * Defines the in-memory scene document model: a read-only tree of named nodes
 * as supplied by the design-authoring host. Documents are deserialized from
 * the host's JSON shape (`id`/`name`/`type`/`children`), and this module also
 * provides the lookups the rest of the engine needs: pages by id, arbitrary
 * nodes by id, and the depth-first flattening of a container's descendants.
 */
use serde::{Deserialize, Serialize};

/*
 * The node kinds the host vocabulary distinguishes. Only two of them carry
 * meaning for extraction: `Page` nodes are selectable roots, and `Frame`
 * nodes directly under a page are the containers that become CSV rows.
 * Everything else is a candidate leaf during flattening.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Page,
    Frame,
    Group,
    Component,
    Instance,
    Text,
    Rectangle,
    Vector,
}

impl NodeKind {
    pub fn is_container(&self) -> bool {
        *self == NodeKind::Frame
    }
}

// Identity is structural position plus the host-assigned id; the engine never
// mutates nodes. `id` and `children` are optional in the input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(id: &str, name: &str, kind: NodeKind) -> Self {
        SceneNode {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            children: Vec::new(),
        }
    }

    /*
     * Flattens every descendant of this node (direct and nested, excluding
     * the node itself) into depth-first pre-order. The order must match the
     * host tree's child ordering exactly: the field collector's collision
     * policy depends on encounter order. Trees built by deserialization are
     * finite and acyclic, so no visited-set guard is needed.
     */
    pub fn descendants(&self) -> Vec<&SceneNode> {
        let mut flattened = Vec::new();
        let mut buffer: Vec<&SceneNode> = Vec::new();

        // Seed with direct children, reversed so pops preserve child order.
        for child in self.children.iter().rev() {
            buffer.push(child);
        }

        while let Some(node) = buffer.pop() {
            flattened.push(node);
            for child in node.children.iter().rev() {
                buffer.push(child);
            }
        }
        flattened
    }
}

/*
 * The root of a host document. Top-level children of kind `Page` are the
 * selectable pages; the extraction orchestrator never descends past a page
 * on its own (nesting search happens only via `SceneNode::descendants`
 * inside each container).
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

impl SceneDocument {
    /// Finds a page by id among the document's direct children.
    pub fn find_page(&self, page_id: &str) -> Option<&SceneNode> {
        self.children
            .iter()
            .find(|node| node.kind == NodeKind::Page && node.id == page_id)
    }

    /// Finds any node by id, searching the whole tree depth-first.
    pub fn find_node(&self, node_id: &str) -> Option<&SceneNode> {
        fn recurse<'a>(nodes: &'a [SceneNode], node_id: &str) -> Option<&'a SceneNode> {
            for node in nodes {
                if node.id == node_id {
                    return Some(node);
                }
                if let Some(found) = recurse(&node.children, node_id) {
                    return Some(found);
                }
            }
            None
        }
        recurse(&self.children, node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeKind, SceneDocument, SceneNode};

    fn node_with_children(
        id: &str,
        name: &str,
        kind: NodeKind,
        children: Vec<SceneNode>,
    ) -> SceneNode {
        SceneNode {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            children,
        }
    }

    #[test]
    fn test_scene_node_deserializes_host_shape() {
        let json = r#"{
            "id": "1:2",
            "name": "001_MX_300x250",
            "type": "FRAME",
            "children": [
                { "name": "background__extract", "type": "RECTANGLE" }
            ]
        }"#;
        let node: SceneNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "1:2");
        assert_eq!(node.kind, NodeKind::Frame);
        assert!(node.kind.is_container());
        assert_eq!(node.children.len(), 1);
        // Absent id and children fall back to defaults.
        assert_eq!(node.children[0].id, "");
        assert!(node.children[0].children.is_empty());
        assert_eq!(node.children[0].kind, NodeKind::Rectangle);
    }

    #[test]
    fn test_descendants_pre_order_excludes_self() {
        let container = node_with_children(
            "c1",
            "container",
            NodeKind::Frame,
            vec![
                node_with_children(
                    "g1",
                    "group_a",
                    NodeKind::Group,
                    vec![
                        SceneNode::new("t1", "first", NodeKind::Text),
                        SceneNode::new("t2", "second", NodeKind::Text),
                    ],
                ),
                SceneNode::new("t3", "third", NodeKind::Text),
            ],
        );

        let names: Vec<&str> = container
            .descendants()
            .iter()
            .map(|node| node.name.as_str())
            .collect();
        assert_eq!(names, vec!["group_a", "first", "second", "third"]);
    }

    #[test]
    fn test_descendants_of_leaf_is_empty() {
        let leaf = SceneNode::new("t1", "alone", NodeKind::Text);
        assert!(leaf.descendants().is_empty());
    }

    #[test]
    fn test_find_page_requires_page_kind() {
        let document = SceneDocument {
            name: "doc".to_string(),
            children: vec![
                SceneNode::new("P1", "Portada", NodeKind::Page),
                // Same id, wrong kind: must not be returned as a page.
                SceneNode::new("P2", "loose frame", NodeKind::Frame),
            ],
        };
        assert_eq!(
            document.find_page("P1").map(|p| p.name.as_str()),
            Some("Portada")
        );
        assert!(document.find_page("P2").is_none());
        assert!(document.find_page("missing").is_none());
    }

    #[test]
    fn test_find_node_searches_nested_children() {
        let document = SceneDocument {
            name: "doc".to_string(),
            children: vec![node_with_children(
                "P1",
                "page",
                NodeKind::Page,
                vec![node_with_children(
                    "c1",
                    "container",
                    NodeKind::Frame,
                    vec![SceneNode::new("deep", "buried", NodeKind::Text)],
                )],
            )],
        };
        assert_eq!(
            document.find_node("deep").map(|n| n.name.as_str()),
            Some("buried")
        );
        assert!(document.find_node("absent").is_none());
    }
}

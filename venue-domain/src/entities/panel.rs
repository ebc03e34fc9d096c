// Detail panel entity
// Panels are tagged by `typeId`; item positions only mean something within one tag.

use serde::{Deserialize, Serialize};

use crate::utils::one_or_many;

pub const PANEL_CLASSIFICATION: i64 = 11;
pub const PANEL_INSTRUCTOR: i64 = 12;
pub const PANEL_INSTRUCTOR_GROUP: i64 = 13;

/// Untyped node of the detail tree, exactly as the source service sends it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<PanelNode>,
}

impl PanelNode {
    pub fn child(&self, index: usize) -> Option<&PanelNode> {
        self.item.get(index)
    }

    pub fn name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PanelNode", into = "PanelNode")]
pub enum Panel {
    /// typeId 11: event type, lecture title, organization.
    Classification(PanelNode),
    /// typeId 12: one flat instructor block.
    Instructor(PanelNode),
    /// typeId 13: instructor blocks nested one level deeper.
    InstructorGroup(PanelNode),
    Other(PanelNode),
}

impl Panel {
    pub fn type_id(&self) -> Option<i64> {
        self.node().type_id
    }

    pub fn node(&self) -> &PanelNode {
        match self {
            Panel::Classification(node)
            | Panel::Instructor(node)
            | Panel::InstructorGroup(node)
            | Panel::Other(node) => node,
        }
    }
}

impl From<PanelNode> for Panel {
    fn from(node: PanelNode) -> Self {
        match node.type_id {
            Some(PANEL_CLASSIFICATION) => Panel::Classification(node),
            Some(PANEL_INSTRUCTOR) => Panel::Instructor(node),
            Some(PANEL_INSTRUCTOR_GROUP) => Panel::InstructorGroup(node),
            _ => Panel::Other(node),
        }
    }
}

impl From<Panel> for PanelNode {
    fn from(panel: Panel) -> Self {
        match panel {
            Panel::Classification(node)
            | Panel::Instructor(node)
            | Panel::InstructorGroup(node)
            | Panel::Other(node) => node,
        }
    }
}

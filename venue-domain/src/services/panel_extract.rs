// Read-only projections over an item's detail panels.
// Missing structure is never an error; every projection may come back empty.

use crate::entities::{Panel, PanelNode};
use crate::value_objects::EventCategory;

/// Organizations whose bookings are always executive-education sessions.
pub const KEC_PROGRAM_ORGANIZATIONS: [&str; 2] =
    ["KSM-Executive Education", "KSM-Executive Education Custom Programs"];
/// Department whose bookings always belong to the conference center.
pub const CMC_DEPARTMENT: &str = "KSM-Conference Management";

/// Session kinds that keep a KEC booking after consolidation.
pub const KEC_SESSION_KINDS: [&str; 2] = ["Academic Session", "Class Session"];

const TITLE_POSITION: usize = 1;
const KIND_POSITION: usize = 2;
const ORGANIZATION_POSITION: usize = 5;

const INSTRUCTOR_PREFIX: &str = "Instructors:";
const INSTRUCTOR_SEPARATOR: &str = "; ";

fn classification_panels(panels: &[Panel]) -> impl Iterator<Item = &PanelNode> {
    panels.iter().filter_map(|panel| match panel {
        Panel::Classification(node) => Some(node),
        _ => None,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn organization_of(node: &PanelNode) -> Option<&str> {
    non_empty(
        node.child(ORGANIZATION_POSITION)
            .and_then(|org| org.child(0))
            .and_then(PanelNode::name),
    )
}

fn kind_of(node: &PanelNode) -> Option<&str> {
    non_empty(node.child(KIND_POSITION).and_then(PanelNode::name))
}

pub fn extract_event_type(panels: &[Panel]) -> Option<EventCategory> {
    for node in classification_panels(panels) {
        if let Some(organization) = organization_of(node) {
            if KEC_PROGRAM_ORGANIZATIONS.contains(&organization) {
                return Some(EventCategory::Kec);
            }
            if organization == CMC_DEPARTMENT {
                return Some(EventCategory::Cmc);
            }
        }
        if let Some(kind) = kind_of(node) {
            return Some(EventCategory::from(kind));
        }
    }
    None
}

pub fn extract_organization(panels: &[Panel]) -> Option<String> {
    classification_panels(panels)
        .find_map(organization_of)
        .map(ToString::to_string)
}

pub fn extract_lecture_title(panels: &[Panel]) -> Option<String> {
    classification_panels(panels)
        .find_map(|node| non_empty(node.child(TITLE_POSITION).and_then(PanelNode::name)))
        .map(ToString::to_string)
}

/// Raw session kind label of the classification panel, e.g. "Class Session".
pub fn extract_session_kind(panels: &[Panel]) -> Option<String> {
    classification_panels(panels)
        .find_map(kind_of)
        .map(ToString::to_string)
}

pub fn extract_instructor_names(panels: &[Panel]) -> Option<Vec<String>> {
    for panel in panels {
        let found = match panel {
            Panel::Instructor(node) => node.item.iter().find_map(instructor_text),
            Panel::InstructorGroup(node) => node
                .item
                .iter()
                .flat_map(|block| block.item.iter())
                .find_map(instructor_text),
            _ => None,
        };
        if let Some(text) = found {
            let names: Vec<String> = text
                .split(INSTRUCTOR_SEPARATOR)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ToString::to_string)
                .collect();
            if !names.is_empty() {
                return Some(names);
            }
        }
    }
    None
}

fn instructor_text(node: &PanelNode) -> Option<&str> {
    let raw = node.name()?;
    let cleaned = raw
        .trim()
        .strip_prefix(INSTRUCTOR_PREFIX)
        .unwrap_or(raw.trim())
        .trim();
    let len = cleaned.chars().count();
    let usable = !cleaned.is_empty()
        && !cleaned.starts_with('<')
        && len > 2
        && len < 100
        && !cleaned.contains(['{', '}']);
    usable.then_some(cleaned)
}

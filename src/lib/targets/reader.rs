//! Turns the XML document of a targets file into build targets

use roxmltree::{Document, Node};

use super::error::{MalformedReason, TargetsError};
use crate::domain::{project::Project, target::BuildTarget};
use crate::utils::constants::{debug_messages, xml};

/// Parses *text* and maps every `target` element under the root to a [`BuildTarget`] of
/// *project*, in document order.
///
/// The outer error is a document that is not well formed XML. The inner ones belong to
/// single elements, so the caller decides whether a bad element aborts the whole load.
/// A document whose root isn't `buildTargets` yields no targets at all.
pub(super) fn read_targets(
    project: &Project,
    text: &str,
) -> Result<Vec<Result<BuildTarget, TargetsError>>, roxmltree::Error> {
    let document = Document::parse(text)?;
    let root = document.root_element();

    if !root.has_tag_name(xml::BUILD_TARGETS_ELEMENT) {
        log::debug!(
            "{} (found <{}>)",
            debug_messages::UNKNOWN_ROOT_ELEMENT,
            root.tag_name().name()
        );
        return Ok(Vec::new());
    }

    Ok(root
        .children()
        .filter(|node| node.is_element() && node.has_tag_name(xml::TARGET_ELEMENT))
        .enumerate()
        .map(|(index, node)| read_target(project, &document, index, node))
        .collect())
}

fn read_target(
    project: &Project,
    document: &Document<'_>,
    index: usize,
    node: Node<'_, '_>,
) -> Result<BuildTarget, TargetsError> {
    let malformed = |reason: MalformedReason| TargetsError::MalformedTarget {
        index,
        position: document.text_pos_at(node.range().start).to_string(),
        reason,
    };

    let target_id = node
        .attribute(xml::TARGET_ID_ATTR)
        .ok_or_else(|| malformed(MalformedReason::MissingAttribute(xml::TARGET_ID_ATTR)))?;
    let name = node
        .attribute(xml::NAME_ATTR)
        .ok_or_else(|| malformed(MalformedReason::MissingAttribute(xml::NAME_ATTR)))?;
    if name.is_empty() {
        return Err(malformed(MalformedReason::EmptyName));
    }

    let mut target = BuildTarget::new(project.container_for(target_id), name);

    if let Some(value) = child_flag(&node, xml::STOP_ON_ERROR) {
        let stop = parse_bool(value)
            .ok_or_else(|| malformed(invalid_boolean(xml::STOP_ON_ERROR, value)))?;
        target.set_stop_on_error(stop);
    }
    if let Some(value) = child_flag(&node, xml::USE_DEFAULT_COMMAND) {
        let use_default = parse_bool(value)
            .ok_or_else(|| malformed(invalid_boolean(xml::USE_DEFAULT_COMMAND, value)))?;
        target.set_use_default_build_command(use_default);
    }
    if let Some(command) = child_text(&node, xml::BUILD_COMMAND) {
        target.set_build_command(Some(command));
    }
    if let Some(arguments) = child_text(&node, xml::BUILD_ARGUMENTS) {
        target.set_build_arguments(Some(arguments));
    }

    Ok(target)
}

/// The text of the first child element named *name*, exactly as written, if it has any
fn child_text<'a>(node: &Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
        .and_then(|n| n.text())
        .filter(|t| !t.is_empty())
}

/// The trimmed text of a boolean child element, if it has any
fn child_flag<'a>(node: &Node<'a, '_>, name: &str) -> Option<&'a str> {
    child_text(node, name)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn invalid_boolean(element: &'static str, value: &str) -> MalformedReason {
    MalformedReason::InvalidBoolean {
        element,
        value: value.to_owned(),
    }
}

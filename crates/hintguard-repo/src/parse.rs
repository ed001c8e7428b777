use hintguard_domain::model::ReferenceDecl;
use hintguard_types::{Location, RepoPath};
use roxmltree::{Document, Node};

pub const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Extract `<Reference>` items, in document order, from MSBuild project XML.
///
/// Only elements in the MSBuild 2003 namespace are considered; SDK-style
/// projects without that namespace yield no references.
pub fn parse_project(
    project_path: &RepoPath,
    text: &str,
) -> Result<Vec<ReferenceDecl>, roxmltree::Error> {
    let doc = Document::parse(text)?;

    let references = doc
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name((MSBUILD_NAMESPACE, "Reference")))
        .map(|n| reference_decl(&doc, n, project_path))
        .collect();

    Ok(references)
}

fn reference_decl(doc: &Document<'_>, node: Node<'_, '_>, project_path: &RepoPath) -> ReferenceDecl {
    // A missing Include is treated as an empty id.
    let id = node.attribute("Include").unwrap_or_default();

    let hint_path = node
        .children()
        .find(|c| c.is_element() && c.has_tag_name((MSBUILD_NAMESPACE, "HintPath")))
        .map(element_text);

    let pos = doc.text_pos_at(node.range().start);

    ReferenceDecl {
        id: id.to_string(),
        hint_path,
        location: Some(Location {
            path: project_path.clone(),
            line: Some(pos.row),
            col: Some(pos.col),
        }),
    }
}

/// Concatenated text of all descendant text nodes, like `XElement.Value`.
fn element_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

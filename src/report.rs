//! HTML report with an interactive view of a tree
use crate::data::dataset::{ClassLabel, Number};
use crate::error::{Result, TreeError};
use crate::trees::node::TreeNode;
use crate::trees::render::to_json_string;
use log::info;
use std::fs;
use std::path::Path;

/// Marker replaced by the JSON node graph.
pub const TREE_PLACEHOLDER: &str = "{{tree}}";

/// Injects the JSON graph of `node` into `template`.
///
/// `<`, `>` and `&` are written as JSON unicode escapes so that feature names can't
/// close the surrounding `<script>` element.
pub fn render_html<XT: Number, YT: ClassLabel>(
    template: &str,
    node: &TreeNode<XT, YT>,
    feature_names: Option<&[String]>,
) -> Result<String> {
    if !template.contains(TREE_PLACEHOLDER) {
        return Err(TreeError::Template("The template".to_string()));
    }
    let json = to_json_string(node, feature_names)?;
    Ok(template.replace(TREE_PLACEHOLDER, &escape_for_script(&json)))
}

fn escape_for_script(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Reads the template at `template_path`, fills it with the tree and writes `output_path`.
///
/// # Errors
///
/// A missing template, a template without `{{tree}}` and an unwritable output file are
/// all reported.
pub fn export_html<XT: Number, YT: ClassLabel, P: AsRef<Path>, Q: AsRef<Path>>(
    node: &TreeNode<XT, YT>,
    feature_names: Option<&[String]>,
    template_path: P,
    output_path: Q,
) -> Result<()> {
    let template_path = template_path.as_ref();
    let template = fs::read_to_string(template_path)?;
    let html = render_html(&template, node, feature_names).map_err(|err| match err {
        TreeError::Template(_) => TreeError::Template(template_path.display().to_string()),
        other => other,
    })?;
    fs::write(output_path.as_ref(), html)?;
    info!("Wrote tree report to {}", output_path.as_ref().display());
    Ok(())
}

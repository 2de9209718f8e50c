//! Text and JSON renderings of a tree
use crate::data::dataset::{ClassLabel, Number};
use crate::error::{Result, TreeError};
use crate::trees::node::TreeNode;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Node of the JSON graph handed to the HTML viewer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeJson {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeJson>,
}

/// One line per node, indented by one space per level, left subtree first.
///
/// ```text
/// [X1 < 6.642]
///  [0]
///  [1]
/// ```
impl<XT: Number, YT: ClassLabel> Display for TreeNode<XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_node<XT: Number, YT: ClassLabel>(
    f: &mut Formatter<'_>,
    node: &TreeNode<XT, YT>,
    depth: usize,
) -> fmt::Result {
    match node {
        TreeNode::Terminal { value } => writeln!(f, "{:depth$}[{:.0}]", "", value, depth = depth),
        TreeNode::Internal {
            feature_index,
            threshold,
            left,
            right,
        } => {
            writeln!(
                f,
                "{:depth$}[X{} < {:.3}]",
                "",
                feature_index + 1,
                threshold,
                depth = depth
            )?;
            write_node(f, left, depth + 1)?;
            write_node(f, right, depth + 1)
        }
    }
}

/// Converts a tree into the `{name, children}` graph.
///
/// Splits are named after `feature_names` when given, `X<i+1>` otherwise.
///
/// # Errors
///
/// Returns [`TreeError::MissingFeatureName`] if a split uses a feature the names don't cover.
pub fn to_node_json<XT: Number, YT: ClassLabel>(
    node: &TreeNode<XT, YT>,
    feature_names: Option<&[String]>,
) -> Result<NodeJson> {
    match node {
        TreeNode::Terminal { value } => Ok(NodeJson {
            name: format!("{:.0}", value),
            children: Vec::new(),
        }),
        TreeNode::Internal {
            feature_index,
            threshold,
            left,
            right,
        } => {
            let feature = match feature_names {
                Some(names) => names
                    .get(*feature_index)
                    .cloned()
                    .ok_or(TreeError::MissingFeatureName(*feature_index))?,
                None => format!("X{}", feature_index + 1),
            };
            Ok(NodeJson {
                name: format!("{} < {:.3}", feature, threshold),
                children: vec![
                    to_node_json(left, feature_names)?,
                    to_node_json(right, feature_names)?,
                ],
            })
        }
    }
}

/// JSON text of [`to_node_json`].
pub fn to_json_string<XT: Number, YT: ClassLabel>(
    node: &TreeNode<XT, YT>,
    feature_names: Option<&[String]>,
) -> Result<String> {
    Ok(serde_json::to_string(&to_node_json(node, feature_names)?)?)
}

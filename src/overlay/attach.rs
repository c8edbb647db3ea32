//! Resolve where an overlay is painted.

use crate::error::OverlayError;
use crate::host::{NodeId, UiTree};

/// Selector that always names the root node.
pub const DEFAULT_HOST_SELECTOR: &str = "body";

/// Logical relocation target, resolved against the live tree on each open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentTarget {
    /// The fixed root node.
    DefaultHost,
    /// A node registered under this selector.
    Selector(String),
}

impl AttachmentTarget {
    pub fn selector(selector: impl Into<String>) -> Self {
        AttachmentTarget::Selector(selector.into())
    }
}

impl From<&str> for AttachmentTarget {
    fn from(selector: &str) -> Self {
        AttachmentTarget::selector(selector)
    }
}

/// Resolve `target` to a concrete node.
///
/// `None` means "paint in place" and resolves to `None`. A selector that
/// matches nothing fails with [`OverlayError::TargetNotFound`].
pub fn resolve(
    tree: &UiTree,
    target: Option<&AttachmentTarget>,
) -> Result<Option<NodeId>, OverlayError> {
    let Some(target) = target else {
        return Ok(None);
    };
    let node = match target {
        AttachmentTarget::DefaultHost => tree.root(),
        AttachmentTarget::Selector(selector) if selector == DEFAULT_HOST_SELECTOR => tree.root(),
        AttachmentTarget::Selector(selector) => tree
            .query(selector)
            .ok_or_else(|| OverlayError::TargetNotFound {
                selector: selector.clone(),
            })?,
    };
    Ok(Some(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn tree() -> UiTree {
        UiTree::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn no_target_means_in_place() {
        assert_eq!(resolve(&tree(), None), Ok(None));
    }

    #[test]
    fn default_host_is_root() {
        let tree = tree();
        let root = Some(tree.root());
        assert_eq!(resolve(&tree, Some(&AttachmentTarget::DefaultHost)), Ok(root));
        assert_eq!(resolve(&tree, Some(&"body".into())), Ok(root));
    }

    #[test]
    fn missing_selector_is_reported() {
        let err = resolve(&tree(), Some(&"#missing".into())).unwrap_err();
        assert_eq!(
            err,
            OverlayError::TargetNotFound {
                selector: "#missing".into()
            }
        );
    }

    #[test]
    fn selector_resolves_late_registered_region() {
        let mut tree = tree();
        let target = AttachmentTarget::selector("#late");
        assert!(resolve(&tree, Some(&target)).is_err());
        let region = tree
            .add_region(tree.root(), "#late", Rect::new(0, 0, 10, 5))
            .unwrap();
        assert_eq!(resolve(&tree, Some(&target)), Ok(Some(region)));
    }
}

//! Conversion of API node objects into the workspace data model.

use std::collections::BTreeMap;

use dfi_common::constants::{EPHEMERAL_STORAGE, UNNAMED_IMAGE};
use dfi_common::types::{Image, Node};
use k8s_openapi::api::core::v1::{ContainerImage, Node as ApiNode};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

use crate::quantity;

/// Builds a [`Node`] from an API node object.
///
/// Capacity and allocatable come from the `ephemeral-storage` resource.
/// Missing or unparsable figures stay `None`.
#[must_use]
pub fn node_from_api(node: ApiNode) -> Node {
    let name = node.metadata.name.unwrap_or_default();
    let status = node.status.unwrap_or_default();

    let capacity_bytes = ephemeral_storage(&name, "capacity", status.capacity.as_ref());
    let allocatable_bytes = ephemeral_storage(&name, "allocatable", status.allocatable.as_ref());
    let images: Vec<Image> = status
        .images
        .unwrap_or_default()
        .into_iter()
        .map(image_from_api)
        .collect();

    tracing::debug!(
        node = %name,
        capacity = ?capacity_bytes,
        allocatable = ?allocatable_bytes,
        images = images.len(),
        "converted node"
    );

    Node {
        name,
        capacity_bytes,
        allocatable_bytes,
        images,
    }
}

/// Builds an [`Image`] from an API image record.
#[must_use]
pub fn image_from_api(image: ContainerImage) -> Image {
    let mut names = image.names.unwrap_or_default();
    if names.is_empty() {
        names.push(UNNAMED_IMAGE.to_string());
    }
    let size_bytes = image
        .size_bytes
        .and_then(|size| u64::try_from(size).ok())
        .unwrap_or(0);
    Image { names, size_bytes }
}

fn ephemeral_storage(
    node: &str,
    field: &str,
    resources: Option<&BTreeMap<String, Quantity>>,
) -> Option<u64> {
    let Quantity(raw) = resources?.get(EPHEMERAL_STORAGE)?;
    match quantity::parse_bytes(raw) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::warn!(node, field, quantity = %raw, error = %e, "ignoring unparsable ephemeral-storage");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1::NodeStatus;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    use super::*;

    fn storage(value: &str) -> Option<BTreeMap<String, Quantity>> {
        Some(BTreeMap::from([(
            EPHEMERAL_STORAGE.to_string(),
            Quantity(value.to_string()),
        )]))
    }

    fn api_node(name: &str, status: NodeStatus) -> ApiNode {
        ApiNode {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..ObjectMeta::default()
            },
            status: Some(status),
            ..ApiNode::default()
        }
    }

    #[test]
    fn reads_storage_figures_and_images() {
        let node = node_from_api(api_node(
            "node1",
            NodeStatus {
                capacity: storage("10G"),
                allocatable: storage("5000000Ki"),
                images: Some(vec![ContainerImage {
                    names: Some(vec!["image1".into(), "image2".into()]),
                    size_bytes: Some(1000),
                }]),
                ..NodeStatus::default()
            },
        ));

        assert_eq!(node.name, "node1");
        assert_eq!(node.capacity_bytes, Some(10_000_000_000));
        assert_eq!(node.allocatable_bytes, Some(5_120_000_000));
        assert_eq!(
            node.images,
            vec![Image::new(vec!["image1".into(), "image2".into()], 1000)]
        );
    }

    #[test]
    fn missing_status_yields_empty_node() {
        let node = node_from_api(ApiNode {
            metadata: ObjectMeta {
                name: Some("bare".into()),
                ..ObjectMeta::default()
            },
            ..ApiNode::default()
        });
        assert_eq!(node, Node::new("bare"));
    }

    #[test]
    fn missing_ephemeral_storage_is_none() {
        let mut capacity = BTreeMap::new();
        let _ = capacity.insert("cpu".to_string(), Quantity("4".into()));
        let node = node_from_api(api_node(
            "legacy",
            NodeStatus {
                capacity: Some(capacity),
                ..NodeStatus::default()
            },
        ));
        assert_eq!(node.capacity_bytes, None);
        assert_eq!(node.allocatable_bytes, None);
    }

    #[test]
    fn unparsable_quantity_is_none() {
        let node = node_from_api(api_node(
            "odd",
            NodeStatus {
                capacity: storage("lots"),
                ..NodeStatus::default()
            },
        ));
        assert_eq!(node.capacity_bytes, None);
    }

    #[test]
    fn image_without_names_gets_placeholder() {
        let image = image_from_api(ContainerImage {
            names: None,
            size_bytes: Some(10),
        });
        assert_eq!(image.names, vec!["<none>".to_string()]);
    }

    #[test]
    fn negative_or_missing_size_is_zero() {
        let negative = image_from_api(ContainerImage {
            names: Some(vec!["a".into()]),
            size_bytes: Some(-5),
        });
        let missing = image_from_api(ContainerImage {
            names: Some(vec!["a".into()]),
            size_bytes: None,
        });
        assert_eq!(negative.size_bytes, 0);
        assert_eq!(missing.size_bytes, 0);
    }
}

use crate::{Element, ElementKind, NodeId, Page};
use domain::FormData;

impl Page {
    // 文档顺序返回所有带指定 class 的节点。
    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(NodeId)
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).attrs.get(name).map(String::as_str)
    }

    // 仅表单节点有字段集。
    pub fn fields(&self, node: NodeId) -> Option<&FormData> {
        match &self.element(node).kind {
            ElementKind::Form { fields } => Some(fields),
            _ => None,
        }
    }

    // 模拟用户在表单控件里输入。
    pub fn set_field(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let ElementKind::Form { fields } = &mut self.element_mut(node).kind {
            fields.set(name, value);
        } else {
            tracing::warn!("set_field on non-form node {:?}", node);
        }
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.element(node).visible
    }

    pub fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.element_mut(node).visible = visible;
    }

    fn element(&self, node: NodeId) -> &Element {
        &self.elements[node.0]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.elements[node.0]
    }
}

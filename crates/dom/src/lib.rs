use std::collections::HashMap;

mod models;
mod page;

pub use models::{Element, ElementKind, NodeId};

// 注册在某个节点上的事件回调。派发时收到只读页面与触发节点。
pub type EventHandler = Box<dyn Fn(&Page, NodeId) + Send + Sync>;

// 内存中的页面模型: 元素树(扁平存储)、cookie 串、事件监听表。
// 只提供组件契约需要的最小表面。
#[derive(Default)]
pub struct Page {
    pub(crate) elements: Vec<Element>,
    pub(crate) cookie: String,
    pub(crate) submit_handlers: HashMap<NodeId, Vec<EventHandler>>,
    pub(crate) click_handlers: HashMap<NodeId, Vec<EventHandler>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(element);
        id
    }
}

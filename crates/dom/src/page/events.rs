use crate::{EventHandler, NodeId, Page};

impl Page {
    pub fn on_submit(&mut self, node: NodeId, handler: EventHandler) {
        self.submit_handlers.entry(node).or_default().push(handler);
    }

    pub fn on_click(&mut self, node: NodeId, handler: EventHandler) {
        self.click_handlers.entry(node).or_default().push(handler);
    }

    // 按注册顺序派发。模型里没有"默认动作"，监听器就是事件的全部处理。
    pub fn submit(&self, node: NodeId) {
        match self.submit_handlers.get(&node) {
            Some(handlers) => {
                for handler in handlers {
                    handler(self, node);
                }
            }
            None => tracing::debug!("submit on node {:?} with no listener", node),
        }
    }

    pub fn click(&self, node: NodeId) {
        match self.click_handlers.get(&node) {
            Some(handlers) => {
                for handler in handlers {
                    handler(self, node);
                }
            }
            None => tracing::debug!("click on node {:?} with no listener", node),
        }
    }
}

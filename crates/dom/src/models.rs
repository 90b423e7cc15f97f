use domain::FormData;
use std::collections::HashMap;

// 元素句柄，由 Page::insert 发放。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub enum ElementKind {
    Form { fields: FormData },
    Button,
    Block,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    pub visible: bool,
    pub kind: ElementKind,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            id: None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            visible: true,
            kind,
        }
    }

    pub fn form(fields: FormData) -> Self {
        Self::new(ElementKind::Form { fields })
    }

    pub fn button() -> Self {
        Self::new(ElementKind::Button)
    }

    pub fn block() -> Self {
        Self::new(ElementKind::Block)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

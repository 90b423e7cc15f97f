use dom::{Element, NodeId, Page};
use domain::{FormData, FIELD_ARTICLE_ID, FIELD_COMMENT_ID};

use crate::config::Settings;

pub struct PageFixture {
    pub page: Page,
    pub create_form: NodeId,
    pub edit_form: NodeId,
    pub delete_button: NodeId,
}

// 按模板的标记约定拼一个最小页面:
// 新建评论表单 + 一条已渲染的评论(正文块、隐藏的内联编辑表单、删除按钮)。
pub fn build_page(settings: &Settings, cookie: &str) -> PageFixture {
    let comment_id = settings.demo.comment_id.as_str();
    let mut page = Page::new();
    page.set_cookie(cookie);

    let create_form = page.insert(
        Element::form(FormData::from_pairs([
            ("name", "Ferris"),
            ("email", "ferris@example.org"),
            ("comment_content", "Submitted from the demo harness"),
            (FIELD_ARTICLE_ID, settings.demo.article_id.as_str()),
        ]))
        .with_class(widget::FEEDBACK_FORM_CLASS),
    );

    page.insert(
        Element::block()
            .with_id(format!("{}{}", widget::COMMENT_CONTENT_ID_PREFIX, comment_id)),
    );

    let edit_form = page.insert(
        Element::form(FormData::from_pairs([
            (FIELD_COMMENT_ID, comment_id),
            ("comment_content", "Updated from the demo harness"),
        ]))
        .with_class(widget::FEEDBACK_FORM_CLASS)
        .with_id(format!("{}{}", widget::EDIT_FORM_ID_PREFIX, comment_id))
        .hidden(),
    );

    let delete_button = page.insert(
        Element::button()
            .with_class(widget::DELETE_BUTTON_CLASS)
            .with_attr(widget::ATTR_COMMENT_ID, comment_id),
    );

    PageFixture {
        page,
        create_form,
        edit_form,
        delete_button,
    }
}

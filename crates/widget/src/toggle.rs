use dom::Page;

pub const EDIT_FORM_ID_PREFIX: &str = "edit-form-";
pub const COMMENT_CONTENT_ID_PREFIX: &str = "comment-content-";

// 两个互补的可见性切换。约定 edit-form-<id> 与 comment-content-<id>
// 都已渲染在页面上，缺失即契约违规，直接 panic。

pub fn show_edit_form(page: &mut Page, comment_id: &str) {
    swap_visibility(page, comment_id, true);
}

pub fn hide_edit_form(page: &mut Page, comment_id: &str) {
    swap_visibility(page, comment_id, false);
}

fn swap_visibility(page: &mut Page, comment_id: &str, editing: bool) {
    let form_id = format!("{}{}", EDIT_FORM_ID_PREFIX, comment_id);
    let content_id = format!("{}{}", COMMENT_CONTENT_ID_PREFIX, comment_id);

    let form = page
        .by_id(&form_id)
        .unwrap_or_else(|| panic!("no element with id {}", form_id));
    let content = page
        .by_id(&content_id)
        .unwrap_or_else(|| panic!("no element with id {}", content_id));

    page.set_visible(form, editing);
    page.set_visible(content, !editing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Element;
    use domain::FormData;

    fn page_with_comment(id: &str) -> Page {
        let mut page = Page::new();
        page.insert(Element::block().with_id(format!("{}{}", COMMENT_CONTENT_ID_PREFIX, id)));
        page.insert(
            Element::form(FormData::from_pairs([("comment_id", id)]))
                .with_id(format!("{}{}", EDIT_FORM_ID_PREFIX, id))
                .hidden(),
        );
        page
    }

    #[test]
    fn show_then_hide_restores_the_original_state() {
        let mut page = page_with_comment("3");
        let content = page.by_id("comment-content-3").unwrap();
        let form = page.by_id("edit-form-3").unwrap();

        show_edit_form(&mut page, "3");
        assert!(page.is_visible(form));
        assert!(!page.is_visible(content));

        hide_edit_form(&mut page, "3");
        assert!(!page.is_visible(form));
        assert!(page.is_visible(content));
    }

    #[test]
    fn toggles_for_different_comments_are_independent() {
        let mut page = Page::new();
        for id in ["1", "2"] {
            page.insert(Element::block().with_id(format!("{}{}", COMMENT_CONTENT_ID_PREFIX, id)));
            page.insert(
                Element::form(FormData::new())
                    .with_id(format!("{}{}", EDIT_FORM_ID_PREFIX, id))
                    .hidden(),
            );
        }

        show_edit_form(&mut page, "2");

        let form_1 = page.by_id("edit-form-1").unwrap();
        let form_2 = page.by_id("edit-form-2").unwrap();
        assert!(!page.is_visible(form_1));
        assert!(page.is_visible(form_2));
    }

    #[test]
    #[should_panic(expected = "no element with id edit-form-404")]
    fn missing_elements_violate_the_contract() {
        let mut page = Page::new();
        show_edit_form(&mut page, "404");
    }
}

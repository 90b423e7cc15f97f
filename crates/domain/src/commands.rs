use crate::models::FormData;

pub const FIELD_COMMENT_ID: &str = "comment_id";
pub const FIELD_ARTICLE_ID: &str = "article_id";

// 一次交互对应的用户意图，决定请求落到哪个端点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackAction {
    EditComment { comment_id: String },
    AddComment { article_id: Option<String> },
    DeleteComment { comment_id: String },
}

impl FeedbackAction {
    // 字段缺失或为空字符串都按"不存在"处理。
    // 优先级: comment_id > article_id > 裸新增。
    pub fn from_form(form: &FormData) -> Self {
        let comment_id = form.get(FIELD_COMMENT_ID).filter(|v| !v.is_empty());
        let article_id = form.get(FIELD_ARTICLE_ID).filter(|v| !v.is_empty());

        match (comment_id, article_id) {
            (Some(id), _) => Self::EditComment {
                comment_id: id.to_string(),
            },
            (None, Some(id)) => Self::AddComment {
                article_id: Some(id.to_string()),
            },
            (None, None) => Self::AddComment { article_id: None },
        }
    }

    // id 原样内插，不做任何归一化。
    pub fn url(&self) -> String {
        match self {
            Self::EditComment { comment_id } => {
                format!("/comments/edit_comment/{}/", comment_id)
            }
            Self::AddComment {
                article_id: Some(id),
            } => format!("/comments/add_comment/{}/", id),
            Self::AddComment { article_id: None } => "/comments/add_comment/".to_string(),
            Self::DeleteComment { comment_id } => {
                format!("/comments/delete_comment/{}/", comment_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_id_wins_over_article_id() {
        let form = FormData::from_pairs([("comment_id", "42"), ("article_id", "7")]);
        let action = FeedbackAction::from_form(&form);
        assert_eq!(
            action,
            FeedbackAction::EditComment {
                comment_id: "42".to_string()
            }
        );
        assert_eq!(action.url(), "/comments/edit_comment/42/");
    }

    #[test]
    fn empty_comment_id_falls_back_to_article_id() {
        let form = FormData::from_pairs([("comment_id", ""), ("article_id", "7")]);
        let action = FeedbackAction::from_form(&form);
        assert_eq!(action.url(), "/comments/add_comment/7/");
    }

    #[test]
    fn no_ids_selects_bare_add_endpoint() {
        let form = FormData::from_pairs([("name", "Ferris"), ("comment_content", "hi")]);
        let action = FeedbackAction::from_form(&form);
        assert_eq!(action, FeedbackAction::AddComment { article_id: None });
        assert_eq!(action.url(), "/comments/add_comment/");
    }

    #[test]
    fn delete_url_carries_the_exact_id() {
        let action = FeedbackAction::DeleteComment {
            comment_id: "a b".to_string(),
        };
        assert_eq!(action.url(), "/comments/delete_comment/a b/");
    }
}

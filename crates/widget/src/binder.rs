use dom::{NodeId, Page};
use domain::{FeedbackAction, FormData};
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::sender::SendJob;

pub const FEEDBACK_FORM_CLASS: &str = "user-feedback";
pub const DELETE_BUTTON_CLASS: &str = "delete-comment-btn";
pub const ATTR_COMMENT_ID: &str = "data-comment-id";

// 页面构建完成后由宿主调用一次。重复调用会重复注册，不在此设防。
pub fn bind(page: &mut Page, tx: &mpsc::Sender<SendJob>) {
    for node in page.query_class(FEEDBACK_FORM_CLASS) {
        let tx = tx.clone();
        page.on_submit(
            node,
            Box::new(move |page: &Page, node: NodeId| on_feedback_submit(page, node, &tx)),
        );
    }

    for node in page.query_class(DELETE_BUTTON_CLASS) {
        let tx = tx.clone();
        page.on_click(
            node,
            Box::new(move |page: &Page, node: NodeId| on_delete_click(page, node, &tx)),
        );
    }
}

fn on_feedback_submit(page: &Page, node: NodeId, tx: &mpsc::Sender<SendJob>) {
    let fields = match page.fields(node) {
        Some(f) => f,
        None => {
            warn!("Feedback listener fired on non-form node {:?}", node);
            return;
        }
    };

    let action = FeedbackAction::from_form(fields);
    enqueue(
        tx,
        SendJob {
            url: action.url(),
            payload: Some(fields.clone()),
        },
    );
}

fn on_delete_click(page: &Page, node: NodeId, tx: &mpsc::Sender<SendJob>) {
    // data-comment-id 必须存在，点击时读取，没有就无从构造 URL
    let comment_id = match page.attr(node, ATTR_COMMENT_ID) {
        Some(id) => id.to_string(),
        None => {
            error!("Delete button {:?} has no {} attribute", node, ATTR_COMMENT_ID);
            return;
        }
    };

    let action = FeedbackAction::DeleteComment { comment_id };
    enqueue(
        tx,
        SendJob {
            url: action.url(),
            // 与空 FormData 提交一致，而非完全无载荷
            payload: Some(FormData::new()),
        },
    );
}

fn enqueue(tx: &mpsc::Sender<SendJob>, job: SendJob) {
    // 单次尽力投递，队列满即放弃本次交互
    if let Err(e) = tx.try_send(job) {
        warn!("Interaction dropped: {}", e);
    }
}

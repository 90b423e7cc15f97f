use async_trait::async_trait;
use domain::Notice;

// 组件通向宿主环境的唯一出口。
#[async_trait]
pub trait UiHost: Send + Sync {
    // document.cookie 的等价物，每次请求时重新读取
    fn cookies(&self) -> String;

    // alert 的重构形态，呈现方式由宿主决定
    fn notify(&self, notice: Notice);

    // 成功后的整页刷新，丢弃所有客户端状态
    async fn reload(&self);
}

//! 服务器实现
//!
//! HTTP 服务器的启动与关闭

use std::future::Future;

use tokio::net::TcpListener;

use crate::api;
use crate::core::{Config, Result, ServerState};

/// HTTP 服务器
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// 使用已初始化的状态创建服务器
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// 绑定配置的地址，运行直到收到 Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Employee directory listening on http://{}", listener.local_addr()?);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        serve(listener, state, shutdown).await
    }
}

/// 在已绑定的监听器上提供服务，`shutdown` 完成后关闭数据库
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = api::build_app(state.clone());

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    state.shutdown().await;
    result?;
    Ok(())
}

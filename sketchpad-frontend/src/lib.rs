pub mod canvas_view;
pub mod cli;
pub mod errors;
pub mod loader;
pub mod text_view;

use std::path::Path;

use errors::FrontendError;
use sketchpad_config::AppConfig;
use tracing::info;

/// 启动 CLI 演示前端。`document_path` 为命令行显式指定的文档。
pub fn run_cli_demo(
    config: &AppConfig,
    document_path: Option<&Path>,
) -> Result<(), FrontendError> {
    info!("启动 CLI 演示前端");
    cli::run_demo(config, document_path)
}

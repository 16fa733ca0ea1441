use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("文档读写失败: {0}")]
    Io(#[from] sketchpad_io::IoError),
}

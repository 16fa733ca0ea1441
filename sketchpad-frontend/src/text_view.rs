use std::cell::RefCell;

use sketchpad_core::document::{Document, DocumentObserver};
use sketchpad_io::IoError;
use tracing::error;

/// 文本视图：每次通知后重新序列化文档，缓存可编辑的文本表示。
pub struct TextView {
    content: RefCell<String>,
}

impl TextView {
    pub fn new() -> Self {
        Self {
            content: RefCell::new(String::new()),
        }
    }

    /// 当前缓存的文本表示。
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentObserver for TextView {
    fn notify(&self, document: &Document) {
        match sketchpad_io::document_to_text(document) {
            Ok(text) => *self.content.borrow_mut() = text,
            Err(err) => error!(error = %err, "刷新文本视图失败"),
        }
    }
}

/// 文本视图的控制器入口：把编辑后的文本经结构重建写回文档。
/// 空文本清空文档；解析或重建失败时文档原样保留，由调用方决定重试。
pub fn apply_text_edit(document: &mut Document, text: &str) -> Result<(), IoError> {
    if let Err(err) = sketchpad_io::apply_text(document, text) {
        error!(error = %err, "文本表示解析失败，文档未变更");
        return Err(err);
    }
    Ok(())
}

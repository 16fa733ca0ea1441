use std::env;
use std::path::{Path, PathBuf};

use sketchpad_config::AppConfig;
use sketchpad_core::document::Document;
use sketchpad_core::factory;
use sketchpad_io::{DocumentReader, JsonFacade};
use tracing::{info, warn};

/// 文档来源，便于前端呈现加载信息。
#[derive(Debug, Clone)]
pub enum DocumentSource {
    File(PathBuf),
    Demo,
}

/// 统一封装加载结果与元信息。
#[derive(Debug)]
pub struct LoadedDocument {
    pub document: Document,
    pub source: DocumentSource,
}

/// 按优先级选择文档：命令行显式指定 > 环境变量
/// `SKETCHPAD_SAMPLE_JSON` > 配置中的 autoload > 内置示例。
/// 某一来源加载失败时记录警告并尝试下一个。
pub fn load_document_or_demo(config: &AppConfig, explicit: Option<&Path>) -> LoadedDocument {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
    }
    if let Some(path) = env::var_os("SKETCHPAD_SAMPLE_JSON") {
        candidates.push(PathBuf::from(path));
    }
    if let Some(path) = &config.document.autoload {
        candidates.push(path.clone());
    }

    let facade = JsonFacade::new();
    for path in candidates {
        match facade.load(&path) {
            Ok(document) => {
                info!(path = %path.display(), "从 JSON 文档加载成功");
                return LoadedDocument {
                    document,
                    source: DocumentSource::File(path),
                };
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "加载文档失败，尝试下一个来源");
            }
        }
    }

    LoadedDocument {
        document: demo_document(),
        source: DocumentSource::Demo,
    }
}

/// 内置示例文档：一矩形、一圆、一三角形。
pub fn demo_document() -> Document {
    let mut document = Document::new();
    document.add_shape(factory::rectangle(60.0, 60.0));
    document.add_shape(factory::circle(170.0, 60.0));
    document.add_shape(factory::triangle(240.0, 90.0, 300.0, 90.0, 270.0, 20.0));
    document
}

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use sketchpad_core::document::Document;
use sketchpad_core::factory;
use sketchpad_core::shape::{Circle, Rectangle, Shape, ShapeKind, Triangle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("读取文件 {path:?} 失败: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("写入文件 {path:?} 失败: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("解析文本表示失败: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
    #[error("序列化文档失败: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("无效的文档文本: {0}")]
    InvalidDocument(String),
    #[error("第 {index} 条记录无法重建: {source}")]
    Reconstruct {
        index: usize,
        #[source]
        source: ReconstructError,
    },
}

/// 结构化重建失败的原因，附带出错的记录内容，便于调用方检查。
#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error("字段集合不匹配任何图元签名: {record}")]
    UnknownSignature { record: String },
    #[error("字段 {name} 缺失或不是数值")]
    InvalidField { name: &'static str },
}

pub trait DocumentReader {
    fn load(&self, path: &Path) -> Result<Document, IoError>;
}

pub trait DocumentWriter {
    fn save(&self, document: &Document, path: &Path) -> Result<(), IoError>;
}

/// JSON 文本格式的读写门面。
pub struct JsonFacade;

impl JsonFacade {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for JsonFacade {
    fn load(&self, path: &Path) -> Result<Document, IoError> {
        let text = fs::read_to_string(path).map_err(|source| IoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let shapes = parse_shapes(&text)?;
        let mut document = Document::new();
        document.replace_all(shapes);
        Ok(document)
    }
}

impl DocumentWriter for JsonFacade {
    fn save(&self, document: &Document, path: &Path) -> Result<(), IoError> {
        let text = document_to_text(document)?;
        fs::write(path, text).map_err(|source| IoError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// 分类签名，字段名已按字典序排好。优先级固定：矩形 → 圆 → 三角形。
const RECTANGLE_SIGNATURE: &[&str] = &["height", "width", "x", "y"];
const CIRCLE_SIGNATURE: &[&str] = &["cx", "cy", "radius"];
const TRIANGLE_SIGNATURE: &[&str] = &["x1", "x2", "x3", "y1", "y2", "y3"];

/// 对记录的字段名集合做结构分类。`color` 是可选字段，不参与比较。
/// 比较方式沿用排序拼接后的子串包含测试，带多余字段的记录不保证被识别。
fn classify(record: &Map<String, Value>) -> Option<ShapeKind> {
    let mut names: Vec<&str> = record
        .keys()
        .map(String::as_str)
        .filter(|name| *name != "color")
        .collect();
    names.sort_unstable();
    let joined = names.join(",");

    for (signature, kind) in [
        (RECTANGLE_SIGNATURE, ShapeKind::Rectangle),
        (CIRCLE_SIGNATURE, ShapeKind::Circle),
        (TRIANGLE_SIGNATURE, ShapeKind::Triangle),
    ] {
        if joined.contains(&signature.join(",")) {
            return Some(kind);
        }
    }
    None
}

/// 把一条无类型字段包重建为具体图元。
/// 记录来自文本解析，类型信息已丢失，只能按字段集合推断。
pub fn reconstruct(record: &Map<String, Value>) -> Result<Shape, ReconstructError> {
    match classify(record) {
        Some(ShapeKind::Rectangle) => {
            let x = field_f64(record, "x")?;
            let y = field_f64(record, "y")?;
            let width = field_f64(record, "width")?;
            let height = field_f64(record, "height")?;
            // 字段包存的是角点形式，先换算回中心再交给工厂。
            let cx = x + width / 2.0;
            let cy = y + height / 2.0;
            Ok(factory::rectangle_with(
                cx,
                cy,
                width,
                height,
                field_color(record, Rectangle::DEFAULT_COLOR),
            ))
        }
        Some(ShapeKind::Circle) => {
            let cx = field_f64(record, "cx")?;
            let cy = field_f64(record, "cy")?;
            let radius = field_f64(record, "radius")?;
            Ok(factory::circle_with(
                cx,
                cy,
                radius,
                field_color(record, Circle::DEFAULT_COLOR),
            ))
        }
        Some(ShapeKind::Triangle) => Ok(factory::triangle_with(
            field_f64(record, "x1")?,
            field_f64(record, "y1")?,
            field_f64(record, "x2")?,
            field_f64(record, "y2")?,
            field_f64(record, "x3")?,
            field_f64(record, "y3")?,
            field_color(record, Triangle::DEFAULT_COLOR),
        )),
        None => Err(ReconstructError::UnknownSignature {
            record: Value::Object(record.clone()).to_string(),
        }),
    }
}

/// 把文本表示解析为图元列表。空白文本是合法的空文档。
/// 任何一条记录失败都会使整批失败，不产生部分结果。
pub fn parse_shapes(text: &str) -> Result<Vec<Shape>, IoError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(text).map_err(|source| IoError::Parse { source })?;
    let records = value
        .as_array()
        .ok_or_else(|| IoError::InvalidDocument("文档文本应为记录数组".to_string()))?;

    let mut shapes = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let record = record
            .as_object()
            .ok_or_else(|| IoError::InvalidDocument(format!("第 {index} 条记录不是对象")))?;
        let shape =
            reconstruct(record).map_err(|source| IoError::Reconstruct { index, source })?;
        shapes.push(shape);
    }
    Ok(shapes)
}

/// 解析成功后整体替换文档内容（只触发一次通知）。
/// 解析或重建失败时文档保持原样，也不发出任何通知。
pub fn apply_text(document: &mut Document, text: &str) -> Result<(), IoError> {
    let shapes = parse_shapes(text)?;
    document.replace_all(shapes);
    Ok(())
}

/// 把文档序列化为可编辑的 JSON 文本：记录数组，顺序即 z 顺序。
pub fn document_to_text(document: &Document) -> Result<String, IoError> {
    let shapes: Vec<&Shape> = document.shapes().map(|(_, shape)| shape).collect();
    serde_json::to_string_pretty(&shapes).map_err(|source| IoError::Serialize { source })
}

fn field_f64(record: &Map<String, Value>, name: &'static str) -> Result<f64, ReconstructError> {
    record
        .get(name)
        .and_then(Value::as_f64)
        .ok_or(ReconstructError::InvalidField { name })
}

fn field_color(record: &Map<String, Value>, default: &str) -> String {
    record
        .get("color")
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

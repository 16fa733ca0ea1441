use std::cell::RefCell;

use sketchpad_core::document::{Document, DocumentObserver};
use sketchpad_core::geometry::Point2;

/// 字符画布视图：把文档栅格化成 `width × height` 的字符帧。
/// 栅格覆盖文档的包围盒；每个单元以其采样点做命中测试，
/// 最上层图元的颜色首字母即为该单元的字符，空白处为 `.`。
pub struct CanvasView {
    width: usize,
    height: usize,
    frame: RefCell<String>,
}

impl CanvasView {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            frame: RefCell::new(String::new()),
        }
    }

    /// 最近一次通知渲染出的字符帧。
    pub fn frame(&self) -> String {
        self.frame.borrow().clone()
    }

    fn render(&self, document: &Document) -> String {
        let mut frame = String::with_capacity((self.width + 1) * self.height);
        let bounds = document.bounds();

        let step = |span: f64, cells: usize| {
            if cells > 1 { span / (cells - 1) as f64 } else { 0.0 }
        };

        for row in 0..self.height {
            for col in 0..self.width {
                let glyph = match &bounds {
                    Some(bounds) => {
                        let x = bounds.min().x() + step(bounds.width(), self.width) * col as f64;
                        let y = bounds.min().y() + step(bounds.height(), self.height) * row as f64;
                        document
                            .shape_at(Point2::new(x, y))
                            .and_then(|(_, shape)| shape.color().chars().next())
                            .unwrap_or('.')
                    }
                    None => '.',
                };
                frame.push(glyph);
            }
            frame.push('\n');
        }
        frame
    }
}

impl DocumentObserver for CanvasView {
    fn notify(&self, document: &Document) {
        *self.frame.borrow_mut() = self.render(document);
    }
}

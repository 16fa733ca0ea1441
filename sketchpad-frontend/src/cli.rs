use std::path::Path;
use std::rc::Rc;

use sketchpad_config::AppConfig;
use sketchpad_core::document::{Document, DocumentObserver, ObserverRegistry};
use sketchpad_core::geometry::Point2;
use sketchpad_core::shape::Shape;
use sketchpad_engine::editor::{Editor, Tool};
use tracing::info;

use crate::canvas_view::CanvasView;
use crate::errors::FrontendError;
use crate::loader::{DocumentSource, load_document_or_demo};
use crate::text_view::{TextView, apply_text_edit};

/// 简易 CLI 演示：加载文档（或内置示例），挂上文本视图与字符
/// 画布视图，走一轮指针交互和文本往返编辑，打印各视图的结果。
pub fn run_demo(config: &AppConfig, document_path: Option<&Path>) -> Result<(), FrontendError> {
    let loaded = load_document_or_demo(config, document_path);
    let mut editor = Editor::with_document(loaded.document);

    let text_view = Rc::new(TextView::new());
    let canvas_view = Rc::new(CanvasView::new(config.preview.width, config.preview.height));
    let text_observer: Rc<dyn DocumentObserver> = text_view.clone();
    let canvas_observer: Rc<dyn DocumentObserver> = canvas_view.clone();
    editor.document_mut().register_observer(&text_observer);
    editor.document_mut().register_observer(&canvas_observer);
    // 注册发生在加载之后，先补一轮通知让视图同步
    editor.document_mut().notify_all();

    println!("Sketchpad CLI 演示");
    match &loaded.source {
        DocumentSource::File(path) => println!("已从文件加载文档：{}", path.display()),
        DocumentSource::Demo => println!("使用内置示例文档。"),
    }
    print_document_summary(editor.document());

    // 一轮指针交互：补一个圆，再把它拖到新位置
    editor.set_tool(Tool::Circle);
    if let Some(id) = editor.pointer_down(Point2::new(120.0, 160.0)) {
        println!("新增圆，ID = {}", id.get());
    }
    editor.set_tool(Tool::Move);
    editor.pointer_down(Point2::new(120.0, 160.0));
    editor.pointer_move(Point2::new(40.0, 40.0));
    editor.pointer_up();
    println!("拖拽完成，图元总数 = {}", editor.document().shapes().count());

    println!(
        "画布视图（{} x {}）：",
        config.preview.width, config.preview.height
    );
    print!("{}", canvas_view.frame());

    println!("文本视图：");
    println!("{}", text_view.content());

    // 把文本视图的内容原样写回，等价于一次整体重建
    let round_trip = text_view.content();
    apply_text_edit(editor.document_mut(), &round_trip)?;
    println!(
        "文本往返后图元数：{}（观察者 {} 个）",
        editor.document().shapes().count(),
        editor.document().observer_count()
    );

    info!(
        shape_count = editor.document().shapes().count(),
        observer_count = editor.document().observer_count(),
        "CLI 演示结束"
    );
    Ok(())
}

fn print_document_summary(document: &Document) {
    println!("当前文档图元：");
    for (id, shape) in document.shapes() {
        match shape {
            Shape::Rectangle(rectangle) => println!(
                "  - 矩形 #{}, 颜色={}, 角点=({:.2}, {:.2}), 尺寸={:.2} x {:.2}",
                id.get(),
                rectangle.color,
                rectangle.x,
                rectangle.y,
                rectangle.width,
                rectangle.height
            ),
            Shape::Circle(circle) => println!(
                "  - 圆 #{}, 颜色={}, 圆心=({:.2}, {:.2}), 半径={:.2}",
                id.get(),
                circle.color,
                circle.cx,
                circle.cy,
                circle.radius
            ),
            Shape::Triangle(triangle) => println!(
                "  - 三角形 #{}, 颜色={}, 顶点=({:.2}, {:.2}) ({:.2}, {:.2}) ({:.2}, {:.2})",
                id.get(),
                triangle.color,
                triangle.x1,
                triangle.y1,
                triangle.x2,
                triangle.y2,
                triangle.x3,
                triangle.y3
            ),
        }
    }
}

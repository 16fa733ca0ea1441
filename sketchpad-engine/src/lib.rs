pub mod editor {
    use sketchpad_core::document::{Document, ShapeId};
    use sketchpad_core::factory;
    use sketchpad_core::geometry::Point2;
    use tracing::debug;

    /// 当前激活的编辑意图。
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Tool {
        Rectangle,
        Circle,
        Triangle,
        Move,
        Delete,
    }

    impl Default for Tool {
        fn default() -> Self {
            Tool::Rectangle
        }
    }

    /// 编辑器：持有文档与指针交互的运行时状态
    /// （当前工具、三角形顶点累积、拖拽中的图元）。
    #[derive(Debug)]
    pub struct Editor {
        document: Document,
        tool: Tool,
        pending_vertices: Vec<Point2>,
        dragging: Option<ShapeId>,
    }

    impl Editor {
        pub fn new() -> Self {
            Self {
                document: Document::new(),
                tool: Tool::default(),
                pending_vertices: Vec::new(),
                dragging: None,
            }
        }

        /// 使用现有文档初始化编辑器。
        pub fn with_document(document: Document) -> Self {
            let mut editor = Self::new();
            editor.load_document(document);
            editor
        }

        /// 清空文档与全部交互状态。
        pub fn reset(&mut self) {
            self.document = Document::new();
            self.tool = Tool::default();
            self.pending_vertices.clear();
            self.dragging = None;
        }

        /// 替换当前文档并清空交互状态。
        pub fn load_document(&mut self, document: Document) {
            self.document = document;
            self.pending_vertices.clear();
            self.dragging = None;
        }

        #[inline]
        pub fn tool(&self) -> Tool {
            self.tool
        }

        /// 切换工具。未完成的三角形顶点与拖拽状态一并丢弃。
        pub fn set_tool(&mut self, tool: Tool) {
            if tool != self.tool {
                debug!(?tool, "切换工具");
            }
            self.tool = tool;
            self.pending_vertices.clear();
            self.dragging = None;
        }

        /// 已累积的三角形顶点（供界面做反馈显示）。
        #[inline]
        pub fn pending_vertices(&self) -> &[Point2] {
            &self.pending_vertices
        }

        #[inline]
        pub fn is_dragging(&self) -> bool {
            self.dragging.is_some()
        }

        #[inline]
        pub fn document(&self) -> &Document {
            &self.document
        }

        #[inline]
        pub fn document_mut(&mut self) -> &mut Document {
            &mut self.document
        }

        /// 指针按下。创建类工具立即（三角形在聚满三点后）建形并
        /// 返回新图元标识；移动工具开始拖拽命中图元；删除工具移除
        /// 命中图元。空白处的移动/删除是空操作。
        pub fn pointer_down(&mut self, point: Point2) -> Option<ShapeId> {
            match self.tool {
                Tool::Rectangle => {
                    let id = self.document.add_shape(factory::rectangle(point.x(), point.y()));
                    debug!(id = id.get(), "创建矩形");
                    Some(id)
                }
                Tool::Circle => {
                    let id = self.document.add_shape(factory::circle(point.x(), point.y()));
                    debug!(id = id.get(), "创建圆");
                    Some(id)
                }
                Tool::Triangle => {
                    self.pending_vertices.push(point);
                    if self.pending_vertices.len() < 3 {
                        return None;
                    }
                    let [a, b, c] = [
                        self.pending_vertices[0],
                        self.pending_vertices[1],
                        self.pending_vertices[2],
                    ];
                    self.pending_vertices.clear();
                    let id = self.document.add_shape(factory::triangle(
                        a.x(),
                        a.y(),
                        b.x(),
                        b.y(),
                        c.x(),
                        c.y(),
                    ));
                    debug!(id = id.get(), "三点聚满，创建三角形");
                    Some(id)
                }
                Tool::Move => {
                    self.dragging = self.document.shape_at(point).map(|(id, _)| id);
                    None
                }
                Tool::Delete => {
                    let hit = self.document.shape_at(point).map(|(id, _)| id);
                    if let Some(id) = hit {
                        debug!(id = id.get(), "删除图元");
                        self.document.remove_shape(id);
                    }
                    None
                }
            }
        }

        /// 拖拽中：把被拖拽图元的锚点移动到新的指针位置。
        /// 原位替换，z 顺序保持不变。
        pub fn pointer_move(&mut self, point: Point2) {
            let Some(id) = self.dragging else {
                return;
            };
            let moved = self.document.shape(id).map(|shape| shape.moved_to(point));
            if let Some(shape) = moved {
                self.document.update_shape(id, shape);
            }
        }

        /// 指针抬起，结束拖拽。
        pub fn pointer_up(&mut self) {
            self.dragging = None;
        }
    }

    impl Default for Editor {
        fn default() -> Self {
            Self::new()
        }
    }

    #[cfg(test)]
    mod tests {
        use sketchpad_core::shape::{Shape, ShapeKind};

        use super::*;

        #[test]
        fn single_click_tools_create_default_shapes() {
            let mut editor = Editor::new();

            let rectangle = editor
                .pointer_down(Point2::new(30.0, 30.0))
                .expect("rectangle tool creates on first click");
            match editor.document().shape(rectangle) {
                Some(Shape::Rectangle(rectangle)) => {
                    assert!((rectangle.width - 60.0).abs() < f64::EPSILON);
                    // click point becomes the center
                    assert!((rectangle.x - 0.0).abs() < f64::EPSILON);
                }
                other => panic!("unexpected shape: {other:?}"),
            }

            editor.set_tool(Tool::Circle);
            let circle = editor
                .pointer_down(Point2::new(10.0, 20.0))
                .expect("circle tool creates on first click");
            match editor.document().shape(circle) {
                Some(Shape::Circle(circle)) => {
                    assert!((circle.cx - 10.0).abs() < f64::EPSILON);
                    assert!((circle.cy - 20.0).abs() < f64::EPSILON);
                }
                other => panic!("unexpected shape: {other:?}"),
            }
        }

        #[test]
        fn triangle_tool_needs_three_clicks() {
            let mut editor = Editor::new();
            editor.set_tool(Tool::Triangle);

            assert!(editor.pointer_down(Point2::new(0.0, 0.0)).is_none());
            assert!(editor.pointer_down(Point2::new(30.0, 0.0)).is_none());
            assert_eq!(editor.pending_vertices().len(), 2);

            let id = editor
                .pointer_down(Point2::new(0.0, 30.0))
                .expect("third click completes the triangle");
            assert!(editor.pending_vertices().is_empty());

            match editor.document().shape(id) {
                Some(Shape::Triangle(triangle)) => {
                    assert!((triangle.x2 - 30.0).abs() < f64::EPSILON);
                    assert!((triangle.y3 - 30.0).abs() < f64::EPSILON);
                    assert_eq!(triangle.color, "green");
                }
                other => panic!("unexpected shape: {other:?}"),
            }
        }

        #[test]
        fn switching_tools_discards_pending_vertices() {
            let mut editor = Editor::new();
            editor.set_tool(Tool::Triangle);
            editor.pointer_down(Point2::new(0.0, 0.0));
            editor.pointer_down(Point2::new(10.0, 0.0));

            editor.set_tool(Tool::Circle);
            editor.set_tool(Tool::Triangle);

            // the previous two clicks no longer count
            assert!(editor.pointer_down(Point2::new(0.0, 10.0)).is_none());
            assert_eq!(editor.pending_vertices().len(), 1);
        }

        #[test]
        fn drag_moves_the_topmost_shape_and_keeps_z_order() {
            let mut editor = Editor::new();
            let below = editor.pointer_down(Point2::new(50.0, 50.0)).unwrap();
            editor.set_tool(Tool::Circle);
            let above = editor.pointer_down(Point2::new(50.0, 50.0)).unwrap();

            editor.set_tool(Tool::Move);
            editor.pointer_down(Point2::new(50.0, 50.0));
            assert!(editor.is_dragging());
            editor.pointer_move(Point2::new(200.0, 200.0));
            editor.pointer_up();
            assert!(!editor.is_dragging());

            // the topmost circle followed the pointer
            match editor.document().shape(above) {
                Some(Shape::Circle(circle)) => {
                    assert!((circle.cx - 200.0).abs() < f64::EPSILON);
                    assert!((circle.cy - 200.0).abs() < f64::EPSILON);
                }
                other => panic!("unexpected shape: {other:?}"),
            }

            // order unchanged: rectangle below, circle above
            let ids: Vec<ShapeId> = editor.document().shapes().map(|(id, _)| *id).collect();
            assert_eq!(ids, [below, above]);
        }

        #[test]
        fn move_and_delete_on_blank_canvas_are_no_ops() {
            let mut editor = Editor::new();
            let id = editor.pointer_down(Point2::new(0.0, 0.0)).unwrap();

            editor.set_tool(Tool::Move);
            editor.pointer_down(Point2::new(500.0, 500.0));
            assert!(!editor.is_dragging());
            editor.pointer_move(Point2::new(600.0, 600.0));

            editor.set_tool(Tool::Delete);
            editor.pointer_down(Point2::new(500.0, 500.0));

            assert_eq!(editor.document().shapes().count(), 1);
            assert!(editor.document().shape(id).is_some());
        }

        #[test]
        fn delete_tool_removes_the_topmost_hit() {
            let mut editor = Editor::new();
            let below = editor.pointer_down(Point2::new(50.0, 50.0)).unwrap();
            editor.set_tool(Tool::Circle);
            let above = editor.pointer_down(Point2::new(50.0, 50.0)).unwrap();

            editor.set_tool(Tool::Delete);
            editor.pointer_down(Point2::new(50.0, 50.0));

            assert!(editor.document().shape(above).is_none());
            assert!(editor.document().shape(below).is_some());
            assert_eq!(editor.document().shapes().count(), 1);
        }

        #[test]
        fn load_document_resets_interaction_state() {
            let mut editor = Editor::new();
            editor.set_tool(Tool::Triangle);
            editor.pointer_down(Point2::new(0.0, 0.0));

            let mut document = Document::new();
            document.add_shape(factory::circle(5.0, 5.0));
            editor.load_document(document);

            assert!(editor.pending_vertices().is_empty());
            assert!(!editor.is_dragging());
            assert_eq!(editor.document().shapes().count(), 1);
            assert_eq!(
                editor
                    .document()
                    .shapes()
                    .map(|(_, shape)| shape.kind())
                    .next(),
                Some(ShapeKind::Circle)
            );
        }
    }
}

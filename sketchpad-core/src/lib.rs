pub mod geometry {
    use glam::DVec2;
    use serde::{Deserialize, Serialize};

    /// 二维点，内部以 `glam::DVec2` 表示，坐标为双精度。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Point2(pub DVec2);

    impl Point2 {
        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Self(DVec2::new(x, y))
        }

        #[inline]
        pub fn from_vec(vec: DVec2) -> Self {
            Self(vec)
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn translate(self, offset: Vector2) -> Self {
            Self(self.0 + offset.0)
        }

        #[inline]
        pub fn vector_to(self, other: Point2) -> Vector2 {
            Vector2(other.0 - self.0)
        }

        #[inline]
        pub fn as_vec2(self) -> DVec2 {
            self.0
        }
    }

    impl From<DVec2> for Point2 {
        fn from(value: DVec2) -> Self {
            Self::from_vec(value)
        }
    }

    /// 二维位移向量。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Vector2(pub DVec2);

    impl Vector2 {
        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Self(DVec2::new(x, y))
        }

        #[inline]
        pub fn from_points(start: Point2, end: Point2) -> Self {
            Self(end.0 - start.0)
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn as_vec2(self) -> DVec2 {
            self.0
        }
    }

    impl From<DVec2> for Vector2 {
        fn from(value: DVec2) -> Self {
            Self(value)
        }
    }

    /// 轴对齐边界框，用于估算文档/图元范围。
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Bounds2D {
        min: Point2,
        max: Point2,
    }

    impl Bounds2D {
        #[inline]
        pub fn new(min: Point2, max: Point2) -> Self {
            Self { min, max }
        }

        #[inline]
        pub fn empty() -> Self {
            Self {
                min: Point2::new(f64::INFINITY, f64::INFINITY),
                max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            }
        }

        #[inline]
        pub fn is_empty(&self) -> bool {
            self.min.x() > self.max.x() || self.min.y() > self.max.y()
        }

        #[inline]
        pub fn min(&self) -> Point2 {
            self.min
        }

        #[inline]
        pub fn max(&self) -> Point2 {
            self.max
        }

        #[inline]
        pub fn width(&self) -> f64 {
            self.max.x() - self.min.x()
        }

        #[inline]
        pub fn height(&self) -> f64 {
            self.max.y() - self.min.y()
        }

        pub fn include_point(&mut self, point: Point2) {
            if self.is_empty() {
                self.min = point;
                self.max = point;
                return;
            }
            let min_vec = self.min.as_vec2().min(point.as_vec2());
            let max_vec = self.max.as_vec2().max(point.as_vec2());
            self.min = Point2::from_vec(min_vec);
            self.max = Point2::from_vec(max_vec);
        }

        pub fn include_bounds(&mut self, other: &Bounds2D) {
            if other.is_empty() {
                return;
            }
            self.include_point(other.min);
            self.include_point(other.max);
        }

        #[inline]
        pub fn center(&self) -> Point2 {
            debug_assert!(!self.is_empty());
            let min_vec = self.min.as_vec2();
            let max_vec = self.max.as_vec2();
            let center = (min_vec + max_vec) * 0.5;
            Point2::from_vec(center)
        }
    }
}

pub mod shape {
    use serde::{Deserialize, Serialize};

    use crate::geometry::{Bounds2D, Point2};

    /// 矩形图元。字段保存左上角坐标与尺寸，构造入口以中心点给出。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Rectangle {
        pub x: f64,
        pub y: f64,
        pub width: f64,
        pub height: f64,
        #[serde(default = "Rectangle::default_color_string")]
        pub color: String,
    }

    impl Rectangle {
        pub const DEFAULT_COLOR: &'static str = "red";

        fn default_color_string() -> String {
            Self::DEFAULT_COLOR.to_string()
        }

        /// `cx`/`cy` 为矩形中心，内部换算出左上角。
        pub fn from_center(
            cx: f64,
            cy: f64,
            width: f64,
            height: f64,
            color: impl Into<String>,
        ) -> Self {
            Self {
                x: cx - width / 2.0,
                y: cy - height / 2.0,
                width,
                height,
                color: color.into(),
            }
        }

        #[inline]
        pub fn center(&self) -> Point2 {
            Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
        }

        /// 含边界的轴对齐包含测试。
        pub fn contains(&self, point: Point2) -> bool {
            let x = point.x();
            let y = point.y();
            x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
        }

        /// 返回中心移动到 `point` 的新矩形。
        pub fn moved_to(&self, point: Point2) -> Self {
            let mut moved = self.clone();
            moved.x = point.x() - self.width / 2.0;
            moved.y = point.y() - self.height / 2.0;
            moved
        }

        pub fn bounds(&self) -> Bounds2D {
            let mut bounds = Bounds2D::empty();
            bounds.include_point(Point2::new(self.x, self.y));
            bounds.include_point(Point2::new(self.x + self.width, self.y + self.height));
            bounds
        }
    }

    /// 圆形图元，圆心与半径。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Circle {
        pub cx: f64,
        pub cy: f64,
        pub radius: f64,
        #[serde(default = "Circle::default_color_string")]
        pub color: String,
    }

    impl Circle {
        pub const DEFAULT_COLOR: &'static str = "blue";

        fn default_color_string() -> String {
            Self::DEFAULT_COLOR.to_string()
        }

        pub fn new(cx: f64, cy: f64, radius: f64, color: impl Into<String>) -> Self {
            Self {
                cx,
                cy,
                radius,
                color: color.into(),
            }
        }

        #[inline]
        pub fn center(&self) -> Point2 {
            Point2::new(self.cx, self.cy)
        }

        /// 到圆心的欧氏距离不超过半径即视为包含（边界计入）。
        pub fn contains(&self, point: Point2) -> bool {
            self.center().as_vec2().distance(point.as_vec2()) <= self.radius
        }

        pub fn moved_to(&self, point: Point2) -> Self {
            let mut moved = self.clone();
            moved.cx = point.x();
            moved.cy = point.y();
            moved
        }

        pub fn bounds(&self) -> Bounds2D {
            let mut bounds = Bounds2D::empty();
            bounds.include_point(Point2::new(self.cx - self.radius, self.cy - self.radius));
            bounds.include_point(Point2::new(self.cx + self.radius, self.cy + self.radius));
            bounds
        }
    }

    /// 三角形图元，三个顶点，无绕向要求。
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Triangle {
        pub x1: f64,
        pub y1: f64,
        pub x2: f64,
        pub y2: f64,
        pub x3: f64,
        pub y3: f64,
        #[serde(default = "Triangle::default_color_string")]
        pub color: String,
    }

    impl Triangle {
        pub const DEFAULT_COLOR: &'static str = "green";

        fn default_color_string() -> String {
            Self::DEFAULT_COLOR.to_string()
        }

        #[allow(clippy::too_many_arguments)]
        pub fn new(
            x1: f64,
            y1: f64,
            x2: f64,
            y2: f64,
            x3: f64,
            y3: f64,
            color: impl Into<String>,
        ) -> Self {
            Self {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
                color: color.into(),
            }
        }

        /// 质心坐标按原始模型向下取整。
        pub fn centroid(&self) -> Point2 {
            Point2::new(
                ((self.x1 + self.x2 + self.x3) / 3.0).floor(),
                ((self.y1 + self.y2 + self.y3) / 3.0).floor(),
            )
        }

        fn area(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> f64 {
            ((x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)) / 2.0).abs()
        }

        /// 重心分解：三个子三角形面积之和与总面积严格相等才算包含。
        /// 精确相等而非容差比较，浮点舍入会把部分边界点判为外部。
        pub fn contains(&self, point: Point2) -> bool {
            let x = point.x();
            let y = point.y();
            let a = Self::area(self.x1, self.y1, self.x2, self.y2, self.x3, self.y3);
            let a1 = Self::area(x, y, self.x2, self.y2, self.x3, self.y3);
            let a2 = Self::area(self.x1, self.y1, x, y, self.x3, self.y3);
            let a3 = Self::area(self.x1, self.y1, self.x2, self.y2, x, y);
            (a - (a1 + a2 + a3)).abs() == 0.0
        }

        /// 平移三角形使质心落在 `point`，三边形状保持不变。
        pub fn moved_to(&self, point: Point2) -> Self {
            let offset = self.centroid().vector_to(point);
            let mut moved = self.clone();
            moved.x1 += offset.x();
            moved.x2 += offset.x();
            moved.x3 += offset.x();
            moved.y1 += offset.y();
            moved.y2 += offset.y();
            moved.y3 += offset.y();
            moved
        }

        pub fn bounds(&self) -> Bounds2D {
            let mut bounds = Bounds2D::empty();
            bounds.include_point(Point2::new(self.x1, self.y1));
            bounds.include_point(Point2::new(self.x2, self.y2));
            bounds.include_point(Point2::new(self.x3, self.y3));
            bounds
        }
    }

    /// 图元种类标签，用于显示与分发。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ShapeKind {
        Rectangle,
        Circle,
        Triangle,
    }

    impl ShapeKind {
        pub fn name(self) -> &'static str {
            match self {
                ShapeKind::Rectangle => "rectangle",
                ShapeKind::Circle => "circle",
                ShapeKind::Triangle => "triangle",
            }
        }
    }

    /// 封闭的图元变体。序列化为不带类型标签的扁平字段包；
    /// 反序列化不走 serde，由 IO 层的结构分类器负责。
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(untagged)]
    pub enum Shape {
        Rectangle(Rectangle),
        Circle(Circle),
        Triangle(Triangle),
    }

    impl Shape {
        #[inline]
        pub fn kind(&self) -> ShapeKind {
            match self {
                Shape::Rectangle(_) => ShapeKind::Rectangle,
                Shape::Circle(_) => ShapeKind::Circle,
                Shape::Triangle(_) => ShapeKind::Triangle,
            }
        }

        #[inline]
        pub fn color(&self) -> &str {
            match self {
                Shape::Rectangle(rectangle) => &rectangle.color,
                Shape::Circle(circle) => &circle.color,
                Shape::Triangle(triangle) => &triangle.color,
            }
        }

        pub fn contains(&self, point: Point2) -> bool {
            match self {
                Shape::Rectangle(rectangle) => rectangle.contains(point),
                Shape::Circle(circle) => circle.contains(point),
                Shape::Triangle(triangle) => triangle.contains(point),
            }
        }

        /// 返回锚点（矩形/圆为中心，三角形为质心）移动到 `point` 的新图元。
        pub fn moved_to(&self, point: Point2) -> Shape {
            match self {
                Shape::Rectangle(rectangle) => Shape::Rectangle(rectangle.moved_to(point)),
                Shape::Circle(circle) => Shape::Circle(circle.moved_to(point)),
                Shape::Triangle(triangle) => Shape::Triangle(triangle.moved_to(point)),
            }
        }

        pub fn bounds(&self) -> Bounds2D {
            match self {
                Shape::Rectangle(rectangle) => rectangle.bounds(),
                Shape::Circle(circle) => circle.bounds(),
                Shape::Triangle(triangle) => triangle.bounds(),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn rectangle_constructed_from_center_stores_corner() {
            let rectangle = Rectangle::from_center(50.0, 40.0, 20.0, 10.0, "red");
            assert!((rectangle.x - 40.0).abs() < f64::EPSILON);
            assert!((rectangle.y - 35.0).abs() < f64::EPSILON);
            let center = rectangle.center();
            assert!((center.x() - 50.0).abs() < f64::EPSILON);
            assert!((center.y() - 40.0).abs() < f64::EPSILON);
        }

        #[test]
        fn rectangle_containment_includes_edges() {
            let rectangle = Rectangle::from_center(10.0, 10.0, 20.0, 20.0, "red");
            // strictly inside
            assert!(rectangle.contains(Point2::new(10.0, 10.0)));
            // all four inclusive edges
            assert!(rectangle.contains(Point2::new(0.0, 10.0)));
            assert!(rectangle.contains(Point2::new(20.0, 10.0)));
            assert!(rectangle.contains(Point2::new(10.0, 0.0)));
            assert!(rectangle.contains(Point2::new(10.0, 20.0)));
            // corner is on two edges at once
            assert!(rectangle.contains(Point2::new(0.0, 0.0)));
            // strictly outside
            assert!(!rectangle.contains(Point2::new(20.01, 10.0)));
            assert!(!rectangle.contains(Point2::new(-0.01, 10.0)));
        }

        #[test]
        fn circle_containment_includes_boundary() {
            let circle = Circle::new(0.0, 0.0, 5.0, "blue");
            assert!(circle.contains(Point2::new(0.0, 0.0)));
            // distance exactly equal to the radius
            assert!(circle.contains(Point2::new(5.0, 0.0)));
            assert!(circle.contains(Point2::new(0.0, -5.0)));
            assert!(circle.contains(Point2::new(3.0, 4.0)));
            assert!(!circle.contains(Point2::new(5.0, 0.1)));
        }

        #[test]
        fn triangle_contains_vertex_and_interior_point() {
            let triangle = Triangle::new(0.0, 0.0, 10.0, 0.0, 0.0, 10.0, "green");
            // a vertex reconstructs the area exactly with integer coordinates
            assert!(triangle.contains(Point2::new(0.0, 0.0)));
            assert!(triangle.contains(Point2::new(10.0, 0.0)));
            assert!(triangle.contains(Point2::new(2.0, 2.0)));
            // far outside the bounding box
            assert!(!triangle.contains(Point2::new(100.0, 100.0)));
            assert!(!triangle.contains(Point2::new(-50.0, 3.0)));
        }

        #[test]
        fn triangle_containment_is_exact_not_tolerant() {
            let triangle = Triangle::new(0.0, 0.0, 10.0, 0.0, 0.0, 10.0, "green");
            // just outside the hypotenuse fails the exact equality
            assert!(!triangle.contains(Point2::new(5.1, 5.1)));
            // integer point on the hypotenuse lands on exact equality here
            assert!(triangle.contains(Point2::new(5.0, 5.0)));
        }

        #[test]
        fn triangle_centroid_uses_floor_division() {
            let triangle = Triangle::new(0.0, 0.0, 5.0, 0.0, 0.0, 5.0, "green");
            let centroid = triangle.centroid();
            // (0 + 5 + 0) / 3 = 1.666… floors to 1
            assert!((centroid.x() - 1.0).abs() < f64::EPSILON);
            assert!((centroid.y() - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn moved_to_relocates_anchor() {
            let rectangle = Shape::Rectangle(Rectangle::from_center(0.0, 0.0, 10.0, 10.0, "red"));
            let moved = rectangle.moved_to(Point2::new(30.0, 30.0));
            match &moved {
                Shape::Rectangle(rectangle) => {
                    assert!((rectangle.x - 25.0).abs() < f64::EPSILON);
                    assert!((rectangle.y - 25.0).abs() < f64::EPSILON);
                }
                other => panic!("unexpected shape: {other:?}"),
            }

            let triangle = Shape::Triangle(Triangle::new(0.0, 0.0, 6.0, 0.0, 0.0, 6.0, "green"));
            let moved = triangle.moved_to(Point2::new(12.0, 12.0));
            match &moved {
                Shape::Triangle(triangle) => {
                    // centroid was (2, 2), displacement (10, 10)
                    assert!((triangle.x1 - 10.0).abs() < f64::EPSILON);
                    assert!((triangle.y1 - 10.0).abs() < f64::EPSILON);
                    assert!((triangle.x2 - 16.0).abs() < f64::EPSILON);
                    assert!((triangle.y3 - 16.0).abs() < f64::EPSILON);
                    // side lengths unchanged
                    assert!((triangle.x2 - triangle.x1 - 6.0).abs() < f64::EPSILON);
                }
                other => panic!("unexpected shape: {other:?}"),
            }
        }

        #[test]
        fn clone_is_an_independent_value() {
            let original = Shape::Circle(Circle::new(1.0, 2.0, 3.0, "blue"));
            let copy = original.clone();
            let moved = copy.moved_to(Point2::new(9.0, 9.0));
            assert_eq!(original, Shape::Circle(Circle::new(1.0, 2.0, 3.0, "blue")));
            assert_ne!(original, moved);
        }

        #[test]
        fn shapes_serialize_to_flat_field_bags() {
            let rectangle = Shape::Rectangle(Rectangle::from_center(30.0, 30.0, 60.0, 60.0, "red"));
            let value = serde_json::to_value(&rectangle).expect("serialize rectangle");
            let record = value.as_object().expect("rectangle record");
            let mut names: Vec<_> = record.keys().map(String::as_str).collect();
            names.sort_unstable();
            assert_eq!(names, ["color", "height", "width", "x", "y"]);

            let circle = Shape::Circle(Circle::new(5.0, 6.0, 7.0, "blue"));
            let value = serde_json::to_value(&circle).expect("serialize circle");
            let record = value.as_object().expect("circle record");
            assert_eq!(record.len(), 4);
            assert!(record.contains_key("cx"));
            assert!(record.contains_key("cy"));
            assert!(record.contains_key("radius"));

            let triangle = Shape::Triangle(Triangle::new(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, "green"));
            let value = serde_json::to_value(&triangle).expect("serialize triangle");
            let record = value.as_object().expect("triangle record");
            assert_eq!(record.len(), 7);
            for name in ["x1", "y1", "x2", "y2", "x3", "y3", "color"] {
                assert!(record.contains_key(name), "missing field {name}");
            }
        }
    }
}

pub mod factory {
    use crate::shape::{Circle, Rectangle, Shape, Triangle};

    /// 默认边长/半径。
    pub const BASE_SIZE: f64 = 60.0;

    /// 以默认尺寸与颜色在 `(cx, cy)` 处构造矩形。
    pub fn rectangle(cx: f64, cy: f64) -> Shape {
        rectangle_with(cx, cy, BASE_SIZE, BASE_SIZE, Rectangle::DEFAULT_COLOR)
    }

    pub fn rectangle_with(
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        color: impl Into<String>,
    ) -> Shape {
        Shape::Rectangle(Rectangle::from_center(cx, cy, width, height, color))
    }

    /// 以默认半径与颜色在 `(cx, cy)` 处构造圆。
    pub fn circle(cx: f64, cy: f64) -> Shape {
        circle_with(cx, cy, BASE_SIZE, Circle::DEFAULT_COLOR)
    }

    pub fn circle_with(cx: f64, cy: f64, radius: f64, color: impl Into<String>) -> Shape {
        Shape::Circle(Circle::new(cx, cy, radius, color))
    }

    /// 以默认颜色构造三角形。
    pub fn triangle(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Shape {
        triangle_with(x1, y1, x2, y2, x3, y3, Triangle::DEFAULT_COLOR)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn triangle_with(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        color: impl Into<String>,
    ) -> Shape {
        Shape::Triangle(Triangle::new(x1, y1, x2, y2, x3, y3, color))
    }

}

pub mod document {
    use std::fmt;
    use std::rc::{Rc, Weak};

    use serde::{Deserialize, Serialize};

    use crate::geometry::{Bounds2D, Point2};
    use crate::shape::Shape;

    /// 图元的稳定标识。文档生命周期内单调递增，不复用。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ShapeId(u64);

    impl ShapeId {
        #[inline]
        pub fn new(raw: u64) -> Self {
            Self(raw)
        }

        /// 提供原始数值，便于日志输出。
        #[inline]
        pub fn get(self) -> u64 {
            self.0
        }
    }

    /// 观察者契约：文档每完成一次变更入口调用，便同步回调一次。
    /// 回调拿到文档的共享引用，观察期间无法改写文档。
    pub trait DocumentObserver {
        fn notify(&self, document: &Document);
    }

    /// 订阅/退订/广播的注册表契约，由 [`Document`] 实现，
    /// 供外部视图协作方使用。
    pub trait ObserverRegistry {
        fn register_observer(&mut self, observer: &Rc<dyn DocumentObserver>);
        fn remove_observer(&mut self, observer: &Rc<dyn DocumentObserver>);
        fn notify_all(&self);
    }

    /// 绘图文档：按插入顺序持有图元（末尾为最上层），并维护观察者注册表。
    /// 注册表存弱引用，观察者与文档互不拥有对方的生命周期。
    pub struct Document {
        shapes: Vec<(ShapeId, Shape)>,
        observers: Vec<Weak<dyn DocumentObserver>>,
        next_shape_id: u64,
    }

    impl Document {
        pub fn new() -> Self {
            Self {
                shapes: Vec::new(),
                observers: Vec::new(),
                next_shape_id: 0,
            }
        }

        #[inline]
        pub fn shapes(&self) -> impl Iterator<Item = &(ShapeId, Shape)> {
            self.shapes.iter()
        }

        #[inline]
        pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
            self.shapes
                .iter()
                .find_map(|(shape_id, shape)| if *shape_id == id { Some(shape) } else { None })
        }

        /// 命中测试：从最上层（最近加入）往下扫描，返回第一个包含该点的图元。
        pub fn shape_at(&self, point: Point2) -> Option<(ShapeId, &Shape)> {
            self.shapes
                .iter()
                .rev()
                .find(|(_, shape)| shape.contains(point))
                .map(|(id, shape)| (*id, shape))
        }

        /// 追加图元到最上层并广播通知。
        pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
            let id = self.next_id();
            self.shapes.push((id, shape));
            self.notify_all();
            id
        }

        /// 原位替换图元，z 顺序保持不变。标识未命中时静默忽略；
        /// 每次调用都广播一次通知。
        pub fn update_shape(&mut self, id: ShapeId, shape: Shape) {
            if let Some(entry) = self.shapes.iter_mut().find(|(shape_id, _)| *shape_id == id) {
                entry.1 = shape;
            }
            self.notify_all();
        }

        /// 移除图元。标识未命中时静默忽略；每次调用都广播一次通知。
        pub fn remove_shape(&mut self, id: ShapeId) {
            if let Some(index) = self.shapes.iter().position(|(shape_id, _)| *shape_id == id) {
                self.shapes.remove(index);
            }
            self.notify_all();
        }

        /// 整体替换图元序列（文本重建的落点），整批只广播一次。
        pub fn replace_all(&mut self, shapes: Vec<Shape>) {
            self.shapes.clear();
            for shape in shapes {
                let id = self.next_id();
                self.shapes.push((id, shape));
            }
            self.notify_all();
        }

        #[inline]
        pub fn observer_count(&self) -> usize {
            self.observers.len()
        }

        pub fn bounds(&self) -> Option<Bounds2D> {
            let mut bounds = Bounds2D::empty();
            let mut has = false;
            for (_, shape) in &self.shapes {
                bounds.include_bounds(&shape.bounds());
                has = true;
            }
            if has { Some(bounds) } else { None }
        }

        #[inline]
        fn next_id(&mut self) -> ShapeId {
            let id = self.next_shape_id;
            self.next_shape_id += 1;
            ShapeId(id)
        }
    }

    impl ObserverRegistry for Document {
        fn register_observer(&mut self, observer: &Rc<dyn DocumentObserver>) {
            self.observers.push(Rc::downgrade(observer));
        }

        /// 注销观察者；未注册时为空操作。
        fn remove_observer(&mut self, observer: &Rc<dyn DocumentObserver>) {
            let target = Rc::downgrade(observer);
            if let Some(index) = self
                .observers
                .iter()
                .position(|existing| existing.ptr_eq(&target))
            {
                self.observers.remove(index);
            }
        }

        /// 按注册顺序同步回调全部存活观察者，已释放的弱引用直接跳过。
        fn notify_all(&self) {
            for observer in &self.observers {
                if let Some(observer) = observer.upgrade() {
                    observer.notify(self);
                }
            }
        }
    }

    impl Default for Document {
        fn default() -> Self {
            Self::new()
        }
    }

    impl fmt::Debug for Document {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Document")
                .field("shapes", &self.shapes)
                .field("observer_count", &self.observers.len())
                .field("next_shape_id", &self.next_shape_id)
                .finish()
        }
    }

}

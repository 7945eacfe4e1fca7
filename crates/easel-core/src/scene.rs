// File: crates/easel-core/src/scene.rs
// Summary: Ordered collection of labelled rectangles with per-object transforms.
// Notes:
// - Vec order is paint order: the last element is drawn last and is topmost.
// - Objects are addressed by index; indices shift when an object is moved to the front.

use tracing::debug;

use crate::affine::Affine;
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::surface::{DrawSurface, FontSpec};

#[derive(Clone, Debug, PartialEq)]
pub struct GraphicObject {
    /// Rectangle in object space, centred on the origin.
    pub rect: Rect,
    /// Object space to canvas space; translation and rotation only.
    pub transform: Affine,
    pub color: Color,
    pub label: String,
}

impl GraphicObject {
    pub fn new(width: f64, height: f64, center: Point, angle: f64, color: Color, label: impl Into<String>) -> Self {
        let mut transform = Affine::IDENTITY;
        transform.translate(center.x, center.y).rotate(angle);
        Self { rect: Rect::centered(width, height), transform, color, label: label.into() }
    }

    /// Canvas-space position of the object's centre.
    pub fn center(&self) -> Point {
        self.transform.transform_point(self.rect.center())
    }

    /// Whether canvas-space `p` lies inside the rotated rectangle.
    pub fn contains(&self, p: Point) -> bool {
        match self.transform.inverse() {
            Ok(inv) => self.rect.contains(inv.transform_point(p)),
            Err(_) => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Added,
    Removed,
}

/// Sent to the hosting container when the object list changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasNotification {
    pub kind: NotificationKind,
    pub label: String,
}

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    objects: Vec<GraphicObject>,
    pending: Vec<CanvasNotification>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[GraphicObject] {
        &self.objects
    }

    pub fn get(&self, index: usize) -> Option<&GraphicObject> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut GraphicObject> {
        self.objects.get_mut(index)
    }

    /// Append a `width` x `height` rectangle centred at `(center_x, center_y)` and rotated
    /// by `angle` radians about its centre. It becomes the topmost object.
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &mut self,
        width: f64,
        height: f64,
        center_x: f64,
        center_y: f64,
        angle: f64,
        color: Color,
        label: impl Into<String>,
    ) {
        let obj = GraphicObject::new(width, height, Point::new(center_x, center_y), angle, color, label);
        debug!(label = %obj.label, width, height, center_x, center_y, angle, "object added");
        self.notify(NotificationKind::Added, obj.label.clone());
        self.objects.push(obj);
    }

    /// Drop the topmost object. Returns it, or `None` when the scene is empty.
    pub fn remove_topmost(&mut self) -> Option<GraphicObject> {
        let obj = self.objects.pop()?;
        debug!(label = %obj.label, "object removed");
        self.notify(NotificationKind::Removed, obj.label.clone());
        Some(obj)
    }

    /// Index of the topmost object containing `p`.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.objects.iter().rposition(|o| o.contains(p))
    }

    /// Move the object at `index` to the top of the paint order; returns its new index.
    pub fn bring_to_front(&mut self, index: usize) -> usize {
        let last = self.objects.len().saturating_sub(1);
        if index < last {
            let obj = self.objects.remove(index);
            debug!(label = %obj.label, from = index, "bring to front");
            self.objects.push(obj);
        }
        last
    }

    /// Hand queued notifications to the host, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<CanvasNotification> {
        std::mem::take(&mut self.pending)
    }

    /// Paint back to front: fill each rectangle and centre its label, in object space.
    pub fn paint<S: DrawSurface + ?Sized>(&self, surface: &mut S, font: FontSpec, label_color: Color) {
        let saved = surface.transform();
        for obj in &self.objects {
            surface.set_transform(saved * obj.transform);
            surface.set_brush(obj.color);
            surface.fill_rect(obj.rect);

            surface.set_font(font, label_color);
            let (tw, th) = surface.text_extent(&obj.label);
            let c = obj.rect.center();
            surface.draw_text(&obj.label, c.x - tw / 2.0, c.y - th / 2.0);
        }
        surface.set_transform(saved);
    }

    fn notify(&mut self, kind: NotificationKind, label: String) {
        self.pending.push(CanvasNotification { kind, label });
    }
}

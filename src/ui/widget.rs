//! egui map surface.
//!
//! Draws a Web Mercator graticule with the landmark pins and any markers,
//! animates fly-tos and marker glides frame by frame, and turns primary
//! clicks into [`MapEvent::Click`]. Tiles are not fetched; the configured
//! tile source is credited in the attribution line.

use crate::{
    animation::transitions::{FlyToAnimation, MarkerGlide},
    backend::{MapBackend, MapWidgetHandle, MarkerHandle},
    core::{
        config::{FlyTo, MapOptions, MarkerSpeed},
        geo::{LatLng, Point},
        viewport::Viewport,
    },
    input::events::{MapEvent, MapEventKind},
    landmarks,
    ui::style::MapStyle,
    MapError, Result,
};
use egui::{Align2, Color32, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use fxhash::FxHashSet;
use instant::Instant;
use std::{cell::RefCell, rc::Rc};

/// Longest frame step fed to animations, so a stalled frame does not skip a flight.
const MAX_FRAME_DELTA_SECS: f64 = 0.1;

/// Preferred distance between graticule lines.
const GRATICULE_SPACING_PX: f64 = 120.0;

const GRATICULE_STEPS: [f64; 15] = [
    0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 45.0,
];

/// Backend producing egui-drawn widgets
#[derive(Debug, Default)]
pub struct EguiBackend {
    api_key: Option<String>,
    style: MapStyle,
}

impl EguiBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The key handed over at mount, if it was non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl MapBackend for EguiBackend {
    type Widget = MapView;
    type Marker = EguiMarker;

    fn set_api_key(&mut self, api_key: &str) {
        self.api_key = (!api_key.is_empty()).then(|| api_key.to_string());
    }

    fn create_widget(&mut self, options: &MapOptions) -> Result<MapView> {
        if options.container.is_empty() {
            return Err(MapError::WidgetCreation("empty container id".into()));
        }
        Ok(MapView::new(options.clone(), self.style.clone()))
    }

    fn create_marker(&mut self, position: LatLng, widget: &mut MapView) -> Result<EguiMarker> {
        if !position.is_valid() {
            return Err(MapError::MarkerCreation(format!(
                "position {position} out of range"
            )));
        }

        let sprite = Rc::new(RefCell::new(MarkerSprite {
            position,
            glide: None,
        }));
        widget.state.get_mut().markers.push(Rc::clone(&sprite));
        Ok(EguiMarker { sprite })
    }
}

struct MarkerSprite {
    position: LatLng,
    glide: Option<MarkerGlide>,
}

impl MarkerSprite {
    /// Returns true while still moving
    fn step(&mut self, delta_time: f64) -> bool {
        let Some(glide) = self.glide.as_mut() else {
            return false;
        };

        self.position = glide.update(delta_time);
        if glide.is_finished() {
            self.glide = None;
            false
        } else {
            true
        }
    }
}

/// Marker drawn on a [`MapView`]
pub struct EguiMarker {
    sprite: Rc<RefCell<MarkerSprite>>,
}

impl EguiMarker {
    /// Where the marker is currently drawn
    pub fn displayed_position(&self) -> LatLng {
        self.sprite.borrow().position
    }
}

impl MarkerHandle for EguiMarker {
    fn move_to(&mut self, position: LatLng, speed: MarkerSpeed) {
        let mut sprite = self.sprite.borrow_mut();
        let from = sprite.position;
        sprite.glide = Some(MarkerGlide::new(from, position, speed));
    }

    fn position(&self) -> LatLng {
        let sprite = self.sprite.borrow();
        sprite
            .glide
            .as_ref()
            .map(|glide| glide.target())
            .unwrap_or(sprite.position)
    }
}

struct ViewState {
    options: MapOptions,
    viewport: Viewport,
    flight: Option<FlyToAnimation>,
    markers: Vec<Rc<RefCell<MarkerSprite>>>,
    listening: FxHashSet<MapEventKind>,
    last_frame: Option<Instant>,
    style: MapStyle,
}

/// The map surface. Painting happens through `&self` so the host can draw
/// it while the adapter keeps ownership.
pub struct MapView {
    state: RefCell<ViewState>,
}

impl MapView {
    fn new(options: MapOptions, style: MapStyle) -> Self {
        let viewport = Viewport::new(options.center, options.zoom, Point::default());
        Self {
            state: RefCell::new(ViewState {
                options,
                viewport,
                flight: None,
                markers: Vec::new(),
                listening: FxHashSet::default(),
                last_frame: None,
                style,
            }),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport.clone()
    }

    pub fn set_size(&self, size: Point) {
        self.state.borrow_mut().viewport.set_size(size);
    }

    pub fn is_animating(&self) -> bool {
        let state = self.state.borrow();
        state.flight.is_some() || state.markers.iter().any(|m| m.borrow().glide.is_some())
    }

    /// Step camera and marker animations. Returns true while anything moves.
    pub fn advance(&self, delta_time: f64) -> bool {
        let state = &mut *self.state.borrow_mut();
        let mut animating = false;

        if let Some(flight) = state.flight.as_mut() {
            let (center, zoom) = flight.update(delta_time);
            state.viewport.set_center(center);
            state.viewport.set_zoom(zoom);
            if flight.is_finished() {
                state.flight = None;
            } else {
                animating = true;
            }
        }

        for sprite in &state.markers {
            animating |= sprite.borrow_mut().step(delta_time);
        }

        animating
    }

    /// Click event for a container pixel, if a click listener is registered
    pub fn click_at(&self, pixel: Point) -> Option<MapEvent> {
        let state = self.state.borrow();
        if !state.listening.contains(&MapEventKind::Click) {
            return None;
        }

        let lat_lng = state.viewport.pixel_to_lat_lng(&pixel).wrapped();
        Some(MapEvent::Click { lat_lng, pixel })
    }

    /// Draw the map into the remaining space of `ui` and collect its events
    pub fn show(&self, ui: &mut Ui) -> Vec<MapEvent> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());

        let delta_time = {
            let mut state = self.state.borrow_mut();
            let now = Instant::now();
            let delta_time = state
                .last_frame
                .map(|last| now.duration_since(last).as_secs_f64())
                .unwrap_or(0.0)
                .min(MAX_FRAME_DELTA_SECS);
            state.last_frame = Some(now);
            delta_time
        };
        self.set_size(Point::new(rect.width() as f64, rect.height() as f64));
        let animating = self.advance(delta_time);

        self.paint(&ui.painter_at(rect), rect);

        let mut events = Vec::new();
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let pixel = Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
                events.extend(self.click_at(pixel));
            }
        }

        if animating {
            ui.ctx().request_repaint();
        }
        events
    }

    fn paint(&self, painter: &Painter, rect: Rect) {
        let state = self.state.borrow();
        painter.rect_filled(rect, 0.0, state.style.background_color);

        paint_graticule(&state, painter, rect);
        paint_landmarks(&state, painter, rect);
        for sprite in &state.markers {
            paint_marker(&state, painter, rect, sprite.borrow().position);
        }

        let center = state.viewport.center;
        paint_label(
            &state.style,
            painter,
            rect.left_bottom(),
            false,
            format!(
                "{:.5}, {:.5} · z{:.1}",
                center.lat, center.lng, state.viewport.zoom
            ),
        );
        paint_label(
            &state.style,
            painter,
            rect.right_bottom(),
            true,
            format!("© NextBillion.ai · {}", state.options.vector_tiles_source_url),
        );
    }
}

impl MapWidgetHandle for MapView {
    fn fly_to(&mut self, fly_to: &FlyTo) {
        let state = self.state.get_mut();
        state.flight = Some(FlyToAnimation::new(&state.viewport, fly_to));
    }

    fn listen(&mut self, kind: MapEventKind) {
        self.state.get_mut().listening.insert(kind);
    }

    fn is_listening(&self, kind: MapEventKind) -> bool {
        self.state.borrow().listening.contains(&kind)
    }
}

/// The copy of `lng` (mod 360) nearest to `center_lng`
fn nearest_copy(lng: f64, center_lng: f64) -> f64 {
    lng + 360.0 * ((center_lng - lng) / 360.0).round()
}

fn to_screen(viewport: &Viewport, rect: Rect, lat_lng: LatLng) -> Pos2 {
    let lng = nearest_copy(lat_lng.lng, viewport.center.lng);
    let pixel = viewport.lat_lng_to_pixel(&LatLng::new(lat_lng.lat, lng));
    rect.min + Vec2::new(pixel.x as f32, pixel.y as f32)
}

fn graticule_step(zoom: f64) -> f64 {
    let px_per_degree = Viewport::world_size(zoom) / 360.0;
    let wanted = GRATICULE_SPACING_PX / px_per_degree;
    GRATICULE_STEPS
        .iter()
        .copied()
        .find(|step| *step >= wanted)
        .unwrap_or(90.0)
}

fn step_decimals(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil() as usize
    }
}

fn paint_graticule(state: &ViewState, painter: &Painter, rect: Rect) {
    let viewport = &state.viewport;
    let stroke = state.style.graticule_stroke;
    let label_color = state.style.graticule_label_color;
    let font = state.style.landmarks.font_id.clone();
    let step = graticule_step(viewport.zoom);
    let decimals = step_decimals(step);
    let bounds = viewport.bounds();

    let mut lng = (bounds.south_west.lng / step).floor() * step;
    while lng <= bounds.north_east.lng {
        let x = viewport
            .lat_lng_to_pixel(&LatLng::new(viewport.center.lat, lng))
            .x as f32
            + rect.min.x;
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        painter.text(
            Pos2::new(x + 3.0, rect.top() + 3.0),
            Align2::LEFT_TOP,
            format!("{:.*}°", decimals, LatLng::wrap_lng(lng)),
            font.clone(),
            label_color,
        );
        lng += step;
    }

    let mut lat = (bounds.south_west.lat / step).floor() * step;
    while lat <= bounds.north_east.lat {
        if lat.abs() <= crate::constants::MAX_MERCATOR_LATITUDE {
            let y = viewport
                .lat_lng_to_pixel(&LatLng::new(lat, viewport.center.lng))
                .y as f32
                + rect.min.y;
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
            painter.text(
                Pos2::new(rect.left() + 3.0, y - 3.0),
                Align2::LEFT_BOTTOM,
                format!("{:.*}°", decimals, lat),
                font.clone(),
                label_color,
            );
        }
        lat += step;
    }
}

fn paint_landmarks(state: &ViewState, painter: &Painter, rect: Rect) {
    let style = &state.style.landmarks;
    let visible = rect.expand(40.0);

    for landmark in landmarks::all() {
        let pos = to_screen(&state.viewport, rect, landmark.coordinate);
        if !visible.contains(pos) {
            continue;
        }
        painter.circle(
            pos,
            style.radius,
            style.color,
            Stroke::new(1.0, style.label_color),
        );
        painter.text(
            pos + Vec2::new(style.radius + 4.0, 0.0),
            Align2::LEFT_CENTER,
            landmark.display_name,
            style.font_id.clone(),
            style.label_color,
        );
    }
}

fn paint_marker(state: &ViewState, painter: &Painter, rect: Rect, position: LatLng) {
    let style = &state.style.markers;
    let (width, height) = style.size;
    let tip = to_screen(&state.viewport, rect, position);
    let head = tip - Vec2::new(0.0, height - width / 2.0);
    let half = width / 2.0;

    painter.add(Shape::convex_polygon(
        vec![
            tip,
            head + Vec2::new(-half * 0.8, half * 0.4),
            head + Vec2::new(half * 0.8, half * 0.4),
        ],
        style.fill_color,
        Stroke::NONE,
    ));
    painter.circle(head, half, style.fill_color, style.border_stroke);
    painter.circle_filled(head, half / 3.0, Color32::WHITE);
}

fn paint_label(style: &MapStyle, painter: &Painter, corner: Pos2, right: bool, text: String) {
    let style = &style.attribution;
    let galley = painter.layout_no_wrap(text, style.font_id.clone(), style.text_color);
    let size = galley.size() + Vec2::splat(style.padding * 2.0);
    let min = if right {
        corner - size
    } else {
        corner - Vec2::new(0.0, size.y)
    };

    painter.rect_filled(
        Rect::from_min_size(min, size),
        0.0,
        style.background_color,
    );
    painter.galley(min + Vec2::splat(style.padding), galley, style.text_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, CameraOptions};

    fn view_with_marker() -> (EguiBackend, MapView, EguiMarker) {
        let mut backend = EguiBackend::new();
        let options = AppConfig::default().map_options(landmarks::DEFAULT_COORDINATE);
        let mut view = backend.create_widget(&options).unwrap();
        view.set_size(Point::new(800.0, 600.0));
        let marker = backend
            .create_marker(landmarks::DEFAULT_COORDINATE, &mut view)
            .unwrap();
        (backend, view, marker)
    }

    fn settle(view: &MapView) {
        let mut frames = 0;
        while view.advance(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 10_000, "animation never settled");
        }
    }

    #[test]
    fn test_fly_to_lands_on_target() {
        let (_, mut view, _) = view_with_marker();
        let colosseum = LatLng::new(41.8902141, 12.4877462);

        view.fly_to(&CameraOptions::default().fly_to(colosseum));
        assert!(view.is_animating());
        settle(&view);

        let viewport = view.viewport();
        assert_eq!(viewport.center, colosseum);
        assert_eq!(viewport.zoom, 14.0);
    }

    #[test]
    fn test_marker_glides_to_target() {
        let (_, view, mut marker) = view_with_marker();
        let petra = LatLng::new(26.9965639, 33.5115078);

        marker.move_to(petra, MarkerSpeed::MAX);
        assert_eq!(marker.position(), petra);
        assert_eq!(marker.displayed_position(), landmarks::DEFAULT_COORDINATE);

        settle(&view);
        assert_eq!(marker.displayed_position(), petra);
    }

    #[test]
    fn test_clicks_need_a_listener() {
        let (_, mut view, _) = view_with_marker();
        let middle = Point::new(400.0, 300.0);
        assert_eq!(view.click_at(middle), None);

        view.listen(MapEventKind::Click);
        assert!(view.is_listening(MapEventKind::Click));
        let Some(MapEvent::Click { lat_lng, pixel }) = view.click_at(middle) else {
            panic!("expected a click");
        };
        assert_eq!(pixel, middle);
        assert!((lat_lng.lat - landmarks::DEFAULT_COORDINATE.lat).abs() < 1e-9);
        assert!((lat_lng.lng - landmarks::DEFAULT_COORDINATE.lng).abs() < 1e-9);
    }

    #[test]
    fn test_marker_creation_rejects_invalid_position() {
        let (mut backend, mut view, _) = view_with_marker();
        assert!(matches!(
            backend.create_marker(LatLng::new(120.0, 0.0), &mut view),
            Err(MapError::MarkerCreation(_))
        ));
    }

    #[test]
    fn test_graticule_step_shrinks_with_zoom() {
        assert!(graticule_step(14.0) < graticule_step(4.0));
        assert_eq!(graticule_step(0.0), 90.0);
        assert_eq!(step_decimals(0.005), 3);
        assert_eq!(step_decimals(10.0), 0);
    }

    #[test]
    fn test_empty_api_key_is_not_stored() {
        let mut backend = EguiBackend::new();
        backend.set_api_key("");
        assert_eq!(backend.api_key(), None);
        backend.set_api_key("secret");
        assert_eq!(backend.api_key(), Some("secret"));
    }

    #[test]
    fn test_nearest_copy() {
        assert_eq!(nearest_copy(-179.0, 179.0), 181.0);
        assert_eq!(nearest_copy(12.5, 10.0), 12.5);
    }

    #[test]
    fn test_show_renders_a_frame() {
        let (_, view, _) = view_with_marker();
        let ctx = egui::Context::default();
        let mut events = None;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = Some(view.show(ui));
            });
        });

        assert_eq!(events, Some(Vec::new()));
        assert!(view.viewport().size.x > 0.0);
    }
}

use egui::{Color32, FontId, Stroke};

/// Style configuration for the map surface
#[derive(Debug, Clone)]
pub struct MapStyle {
    /// Background color behind the graticule
    pub background_color: Color32,
    pub graticule_stroke: Stroke,
    /// Color of graticule coordinate labels
    pub graticule_label_color: Color32,
    pub landmarks: LandmarkStyle,
    pub markers: MarkerStyle,
    pub attribution: AttributionStyle,
}

/// Style for the fixed landmark pins
#[derive(Debug, Clone)]
pub struct LandmarkStyle {
    pub color: Color32,
    pub radius: f32,
    pub label_color: Color32,
    pub font_id: FontId,
}

/// Style for map markers
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub fill_color: Color32,
    pub border_stroke: Stroke,
    /// Pin size (width, height)
    pub size: (f32, f32),
}

/// Style for attribution text
#[derive(Debug, Clone)]
pub struct AttributionStyle {
    pub text_color: Color32,
    pub background_color: Color32,
    pub font_id: FontId,
    pub padding: f32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            background_color: Color32::from_rgb(170, 211, 223),
            graticule_stroke: Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, 140)),
            graticule_label_color: Color32::from_gray(70),
            landmarks: LandmarkStyle {
                color: Color32::from_rgb(242, 239, 233),
                radius: 4.0,
                label_color: Color32::from_gray(40),
                font_id: FontId::proportional(12.0),
            },
            markers: MarkerStyle {
                fill_color: Color32::from_rgb(220, 50, 47),
                border_stroke: Stroke::new(1.5, Color32::WHITE),
                size: crate::constants::MARKER_ICON_SIZE,
            },
            attribution: AttributionStyle {
                text_color: Color32::from_gray(60),
                background_color: Color32::from_rgba_unmultiplied(255, 255, 255, 180),
                font_id: FontId::proportional(11.0),
                padding: 4.0,
            },
        }
    }
}

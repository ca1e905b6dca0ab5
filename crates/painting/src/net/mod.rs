//! Paper-craft net layout
//!
//! Lays out the six faces in a cross, plus trapezoidal glue tabs, on a single
//! printable canvas:
//!
//! ```text
//!          [top]
//! [left] [front] [right] [back]
//!        [bottom]
//! ```
//!
//! The engine produces placements, tab polygons and cut-line paths; drawing
//! them (and encoding to PNG/PDF) is left to the presentation layer, which
//! can consume [`NetLayout::draw_commands`] directly.
//!
//! All sizes are whole pixels derived from one face size, so faces and tabs
//! line up exactly.

mod atlas;
mod raster;
mod tabs;

pub use atlas::{ATLAS_HEIGHT, ATLAS_WIDTH, compose_atlas};
pub use raster::{ScaledFace, scale_face};
pub use tabs::{
    CUBE_EDGES, EdgeKind, FaceSide, TabDirection, TabPolygon, edge_kind, has_tab, tab_directions,
    tab_polygon, validate_tab_table,
};

use glam::{UVec2, Vec2};
use pixelcube_config::{DEFAULT_CUT_LINE_WIDTH, NetConfig};
use thiserror::Error;
use tracing::debug;

use crate::color::Color;
use crate::constants::{MAX_NET_CANVAS_SIZE, NET_COLUMNS, NET_ROWS};
use crate::face::CubeFaces;
use crate::surface::{RenderSurface, RgbCanvas};
use crate::types::FaceName;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetError {
    #[error("Face size must be at least 1px, got {0}")]
    InvalidFaceSize(f32),
    #[error("Invalid tab ratios: tab={tab}, taper={taper}")]
    InvalidTabRatio { tab: f32, taper: f32 },
    #[error("Net canvas {width}x{height}px exceeds the {max}px limit")]
    CanvasTooLarge { width: u64, height: u64, max: u32 },
    #[error("Tab table gives {tabs} tabs on edge {a}:{a_side:?} / {b}:{b_side:?}")]
    TabTable {
        a: FaceName,
        a_side: TabDirection,
        b: FaceName,
        b_side: TabDirection,
        tabs: usize,
    },
}

/// Grid cell of a face in the cross, as (column, row)
pub const fn grid_position(face: FaceName) -> UVec2 {
    match face {
        FaceName::Top => UVec2::new(1, 0),
        FaceName::Left => UVec2::new(0, 1),
        FaceName::Front => UVec2::new(1, 1),
        FaceName::Right => UVec2::new(2, 1),
        FaceName::Back => UVec2::new(3, 1),
        FaceName::Bottom => UVec2::new(1, 2),
    }
}

/// Placement order on the net
pub const FACE_LAYOUT: [FaceName; 6] = [
    FaceName::Top,
    FaceName::Left,
    FaceName::Front,
    FaceName::Right,
    FaceName::Back,
    FaceName::Bottom,
];

/// Whole-pixel sizes shared by every face and tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetMetrics {
    /// Face edge length S
    pub face_px: u32,
    /// Tab depth T
    pub tab_px: u32,
    /// Tab taper T'
    pub taper_px: u32,
}

impl NetMetrics {
    /// Derive pixel sizes from a face size already in pixels.
    ///
    /// T = round(S * tab_ratio), T' = round(S * taper_ratio).
    pub fn from_face_px(face_px: u32, tab_ratio: f32, taper_ratio: f32) -> Result<Self, NetError> {
        if face_px == 0 {
            return Err(NetError::InvalidFaceSize(0.0));
        }
        let face = face_px as f32;
        Self::checked(
            face_px,
            (face * tab_ratio).round(),
            (face * taper_ratio).round(),
            tab_ratio,
            taper_ratio,
        )
    }

    /// Derive pixel sizes from a millimetre config.
    ///
    /// Face, tab and taper are each converted from millimetres and rounded
    /// independently.
    pub fn from_config(config: &NetConfig) -> Result<Self, NetError> {
        let face = (config.face_size_mm * config.mm_to_px).round();
        if !face.is_finite() || face < 1.0 {
            return Err(NetError::InvalidFaceSize(face));
        }
        let tab = (config.tab_size_mm() * config.mm_to_px).round();
        let taper = (config.taper_size_mm() * config.mm_to_px).round();
        Self::checked(face as u32, tab, taper, config.tab_ratio, config.taper_ratio)
    }

    fn checked(
        face_px: u32,
        tab: f32,
        taper: f32,
        tab_ratio: f32,
        taper_ratio: f32,
    ) -> Result<Self, NetError> {
        let invalid = || NetError::InvalidTabRatio {
            tab: tab_ratio,
            taper: taper_ratio,
        };
        if !tab.is_finite() || !taper.is_finite() || tab < 0.0 || taper < 0.0 {
            return Err(invalid());
        }
        // The outer edge of a tab must not be inverted
        if 2.0 * taper > face_px as f32 {
            return Err(invalid());
        }
        // Float to int casts saturate, so oversize tabs still fail the bounds check
        let metrics = Self {
            face_px,
            tab_px: tab as u32,
            taper_px: taper as u32,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Check that the whole canvas fits within [`MAX_NET_CANVAS_SIZE`]
    pub fn validate(&self) -> Result<(), NetError> {
        let face = u64::from(self.face_px);
        let tab = u64::from(self.tab_px);
        let width = u64::from(NET_COLUMNS) * face + tab;
        let height = u64::from(NET_ROWS) * face + 2 * tab;
        let max = u64::from(MAX_NET_CANVAS_SIZE);
        if width > max || height > max {
            return Err(NetError::CanvasTooLarge {
                width,
                height,
                max: MAX_NET_CANVAS_SIZE,
            });
        }
        Ok(())
    }

    /// Canvas width: four faces plus the back face's east tab
    pub fn canvas_width(&self) -> u32 {
        NET_COLUMNS
            .saturating_mul(self.face_px)
            .saturating_add(self.tab_px)
    }

    /// Canvas height: three faces plus the top's north and bottom's south tabs
    pub fn canvas_height(&self) -> u32 {
        NET_ROWS
            .saturating_mul(self.face_px)
            .saturating_add(self.tab_px.saturating_mul(2))
    }

    /// Pixel origin of a grid cell.
    ///
    /// Every row is pushed down by one tab depth to leave room for the
    /// north tab above row 0.
    pub fn face_origin(&self, grid: UVec2) -> UVec2 {
        UVec2::new(
            grid.x.saturating_mul(self.face_px),
            grid.y.saturating_mul(self.face_px).saturating_add(self.tab_px),
        )
    }
}

/// One face positioned on the net
#[derive(Debug, Clone, PartialEq)]
pub struct FacePlacement {
    pub face: FaceName,
    pub grid: UVec2,
    pub origin: UVec2,
    pub image: ScaledFace,
}

/// Open polyline along a tab outline (the face edge itself is not included)
#[derive(Debug, Clone, PartialEq)]
pub struct CutLine {
    pub face: FaceName,
    pub direction: TabDirection,
    pub points: [Vec2; 4],
}

/// A drawing instruction for the presentation layer, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<'a> {
    /// Fill the whole canvas
    Background { width: u32, height: u32, color: Color },
    /// Copy a scaled face image to `origin`
    Blit { origin: UVec2, image: &'a ScaledFace },
    /// Fill a closed polygon
    FillPolygon { points: &'a [Vec2], color: Color },
    /// Stroke an open path
    StrokePath {
        points: &'a [Vec2],
        width: f32,
        color: Color,
    },
}

/// Complete layout of a printable net
#[derive(Debug, Clone, PartialEq)]
pub struct NetLayout {
    pub metrics: NetMetrics,
    pub width: u32,
    pub height: u32,
    pub placements: Vec<FacePlacement>,
    pub tabs: Vec<TabPolygon>,
    pub cut_lines: Vec<CutLine>,
    /// Stroke width for cut lines, in pixels
    pub cut_line_width: f32,
}

impl NetLayout {
    /// Lay out all six faces with their tabs.
    ///
    /// Metrics built by hand are checked against the canvas limit before
    /// any face is scaled.
    pub fn build(faces: &CubeFaces, metrics: NetMetrics) -> Result<Self, NetError> {
        validate_tab_table()?;
        metrics.validate()?;

        let s = metrics.face_px as f32;
        let t = metrics.tab_px as f32;
        let p = metrics.taper_px as f32;

        let mut placements = Vec::with_capacity(FACE_LAYOUT.len());
        let mut tabs = Vec::new();
        let mut cut_lines = Vec::new();

        for face in FACE_LAYOUT {
            let grid = grid_position(face);
            let origin = metrics.face_origin(grid);
            placements.push(FacePlacement {
                face,
                grid,
                origin,
                image: scale_face(faces.face(face), metrics.face_px),
            });

            for &direction in tab_directions(face) {
                let points = tab_polygon(origin.as_vec2(), direction, s, t, p);
                tabs.push(TabPolygon {
                    face,
                    direction,
                    points,
                });
                cut_lines.push(CutLine {
                    face,
                    direction,
                    points,
                });
            }
        }

        let layout = Self {
            metrics,
            width: metrics.canvas_width(),
            height: metrics.canvas_height(),
            placements,
            tabs,
            cut_lines,
            cut_line_width: DEFAULT_CUT_LINE_WIDTH,
        };
        debug!(
            "Net layout: face={}px tab={}px taper={}px canvas={}x{} ({} tabs)",
            metrics.face_px,
            metrics.tab_px,
            metrics.taper_px,
            layout.width,
            layout.height,
            layout.tabs.len()
        );
        Ok(layout)
    }

    /// Lay out a net using a millimetre config.
    pub fn from_config(faces: &CubeFaces, config: &NetConfig) -> Result<Self, NetError> {
        Ok(Self::build(faces, NetMetrics::from_config(config)?)?
            .with_cut_line_width(config.cut_line_width))
    }

    /// Override the cut line stroke width
    pub fn with_cut_line_width(mut self, width: f32) -> Self {
        self.cut_line_width = width;
        self
    }

    pub fn placement(&self, face: FaceName) -> Option<&FacePlacement> {
        self.placements.iter().find(|p| p.face == face)
    }

    /// Drawing instructions: white background, faces, white tab fills, black cut lines.
    pub fn draw_commands(&self) -> Vec<DrawCommand<'_>> {
        let mut commands = Vec::with_capacity(1 + self.placements.len() + 2 * self.tabs.len());
        commands.push(DrawCommand::Background {
            width: self.width,
            height: self.height,
            color: Color::WHITE,
        });
        commands.extend(self.placements.iter().map(|p| DrawCommand::Blit {
            origin: p.origin,
            image: &p.image,
        }));
        commands.extend(self.tabs.iter().map(|tab| DrawCommand::FillPolygon {
            points: &tab.points,
            color: Color::WHITE,
        }));
        commands.extend(self.cut_lines.iter().map(|line| DrawCommand::StrokePath {
            points: &line.points,
            width: self.cut_line_width,
            color: Color::BLACK,
        }));
        commands
    }

    /// Paint the background and faces onto a surface.
    ///
    /// Tabs are white on white, so hosts without a vector renderer only need
    /// to add cut lines.
    pub fn render_faces(&self, surface: &mut impl RenderSurface) {
        surface.fill_rect(0, 0, self.width, self.height, Color::WHITE);
        for placement in &self.placements {
            placement.image.blit(surface, placement.origin);
        }
    }

    /// Render faces into a new canvas of the net's size.
    pub fn to_canvas(&self) -> RgbCanvas {
        let mut canvas = RgbCanvas::new(self.width, self.height, Color::WHITE);
        self.render_faces(&mut canvas);
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_150() -> NetMetrics {
        NetMetrics::from_face_px(150, 0.25, 0.125).unwrap()
    }

    #[test]
    fn test_metrics_from_face_px() {
        let metrics = metrics_150();
        // 37.5 rounds half away from zero
        assert_eq!(metrics.tab_px, 38);
        assert_eq!(metrics.taper_px, 19);
        assert_eq!(metrics.canvas_width(), 4 * 150 + 38);
        assert_eq!(metrics.canvas_height(), 3 * 150 + 2 * 38);
    }

    #[test]
    fn test_metrics_from_default_config() {
        let metrics = NetMetrics::from_config(&NetConfig::default()).unwrap();
        // 40mm * 3.78 = 151.2, 10mm * 3.78 = 37.8, 5mm * 3.78 = 18.9
        assert_eq!(metrics.face_px, 151);
        assert_eq!(metrics.tab_px, 38);
        assert_eq!(metrics.taper_px, 19);
    }

    #[test]
    fn test_metrics_reject_bad_input() {
        assert!(NetMetrics::from_face_px(0, 0.25, 0.125).is_err());
        assert!(NetMetrics::from_face_px(100, -0.25, 0.125).is_err());
        assert!(NetMetrics::from_face_px(100, 0.25, 0.75).is_err());

        let config = NetConfig {
            face_size_mm: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            NetMetrics::from_config(&config),
            Err(NetError::InvalidFaceSize(_))
        ));
    }

    #[test]
    fn test_oversize_face_is_rejected() {
        let config = NetConfig {
            face_size_mm: 1.0e9,
            ..Default::default()
        };
        assert!(matches!(
            NetMetrics::from_config(&config),
            Err(NetError::CanvasTooLarge { .. })
        ));
        assert!(matches!(
            NetMetrics::from_face_px(u32::MAX, 0.25, 0.125),
            Err(NetError::CanvasTooLarge { .. })
        ));

        // 4 * 3855 + 964 = 16384 fits, 4 * 3856 + 964 does not
        assert!(NetMetrics::from_face_px(3855, 0.25, 0.125).is_ok());
        assert!(NetMetrics::from_face_px(3856, 0.25, 0.125).is_err());
    }

    #[test]
    fn test_build_rejects_hand_built_oversize_metrics() {
        let metrics = NetMetrics {
            face_px: u32::MAX / 2,
            tab_px: 10,
            taper_px: 5,
        };
        assert_eq!(metrics.canvas_width(), u32::MAX);
        assert!(matches!(
            NetLayout::build(&CubeFaces::default(), metrics),
            Err(NetError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn test_from_config_keeps_cut_line_width() {
        let config = NetConfig {
            cut_line_width: 3.0,
            ..Default::default()
        };
        let layout = NetLayout::from_config(&CubeFaces::default(), &config).unwrap();
        assert_eq!(layout.cut_line_width, 3.0);
        assert!(layout.draw_commands().iter().any(|c| matches!(
            c,
            DrawCommand::StrokePath { width, .. } if *width == 3.0
        )));

        let plain = NetLayout::build(&CubeFaces::default(), metrics_150()).unwrap();
        assert_eq!(plain.cut_line_width, DEFAULT_CUT_LINE_WIDTH);
    }

    #[test]
    fn test_face_origins() {
        let layout = NetLayout::build(&CubeFaces::default(), metrics_150()).unwrap();
        let origin = |face| layout.placement(face).map(|p| p.origin);

        assert_eq!(origin(FaceName::Top), Some(UVec2::new(150, 38)));
        assert_eq!(origin(FaceName::Left), Some(UVec2::new(0, 188)));
        assert_eq!(origin(FaceName::Front), Some(UVec2::new(150, 188)));
        assert_eq!(origin(FaceName::Right), Some(UVec2::new(300, 188)));
        assert_eq!(origin(FaceName::Back), Some(UVec2::new(450, 188)));
        assert_eq!(origin(FaceName::Bottom), Some(UVec2::new(150, 338)));
    }

    #[test]
    fn test_adjacent_faces_share_edges_without_gaps() {
        let layout = NetLayout::build(&CubeFaces::default(), metrics_150()).unwrap();
        let s = layout.metrics.face_px;
        for (a, b) in CUBE_EDGES {
            if edge_kind(a, b) != EdgeKind::Fold {
                continue;
            }
            let pa = layout.placement(a.face).map(|p| p.origin).unwrap();
            let pb = layout.placement(b.face).map(|p| p.origin).unwrap();
            match a.side {
                TabDirection::East => assert_eq!(pa.x + s, pb.x),
                TabDirection::South => assert_eq!(pa.y + s, pb.y),
                TabDirection::West => assert_eq!(pb.x + s, pa.x),
                TabDirection::North => assert_eq!(pb.y + s, pa.y),
            }
        }
    }

    #[test]
    fn test_tabs_stay_on_canvas() {
        let layout = NetLayout::build(&CubeFaces::default(), metrics_150()).unwrap();
        assert_eq!(layout.tabs.len(), 7);
        assert_eq!(layout.cut_lines.len(), 7);
        let (w, h) = (layout.width as f32, layout.height as f32);
        for tab in &layout.tabs {
            for point in tab.points {
                assert!(point.x >= 0.0 && point.x <= w, "{:?}", tab);
                assert!(point.y >= 0.0 && point.y <= h, "{:?}", tab);
            }
        }
    }

    #[test]
    fn test_tab_extents_touch_canvas_edges() {
        let layout = NetLayout::build(&CubeFaces::default(), metrics_150()).unwrap();
        let min_y = layout
            .tabs
            .iter()
            .flat_map(|t| t.points)
            .map(|p| p.y)
            .fold(f32::MAX, f32::min);
        let max_y = layout
            .tabs
            .iter()
            .flat_map(|t| t.points)
            .map(|p| p.y)
            .fold(f32::MIN, f32::max);
        let max_x = layout
            .tabs
            .iter()
            .flat_map(|t| t.points)
            .map(|p| p.x)
            .fold(f32::MIN, f32::max);

        assert_eq!(min_y, 0.0);
        assert_eq!(max_y, layout.height as f32);
        assert_eq!(max_x, layout.width as f32);
    }

    #[test]
    fn test_draw_commands_order() {
        let layout = NetLayout::build(&CubeFaces::default(), metrics_150()).unwrap();
        let layout = layout.with_cut_line_width(1.5);
        let commands = layout.draw_commands();
        assert_eq!(commands.len(), 1 + 6 + 7 + 7);
        assert!(matches!(commands[0], DrawCommand::Background { .. }));
        assert!(matches!(commands[1], DrawCommand::Blit { .. }));
        assert!(matches!(commands[7], DrawCommand::FillPolygon { .. }));
        assert!(matches!(
            commands[20],
            DrawCommand::StrokePath { width, .. } if width == 1.5
        ));
    }

    #[test]
    fn test_render_places_face_pixels() {
        let mut faces = CubeFaces::default();
        faces.back.set(0, 0, Color::BLACK);
        let metrics = NetMetrics::from_face_px(32, 0.25, 0.125).unwrap();
        let layout = NetLayout::build(&faces, metrics).unwrap();
        let canvas = layout.to_canvas();

        // back sits at column 3, row 1: (96, 32 + 8)
        assert_eq!(canvas.get_pixel(96, 40), Some(Color::BLACK));
        assert_eq!(canvas.get_pixel(97, 41), Some(Color::BLACK));
        assert_eq!(canvas.get_pixel(98, 40), Some(Color::WHITE));
        assert_eq!(canvas.width, 4 * 32 + 8);
    }
}

//! Chart capture and export artifact generation.
//!
//! The capture step rasterizes the chart (background, grid, axes, series
//! line, markers, and note bubbles) into an [`RgbaImage`] at a fixed 2x
//! upscale over the on-screen container's logical size, on an opaque white
//! background. The writers then materialize that raster either as a PNG
//! file or as a single-page PDF whose page size in CSS-pixel units equals
//! the logical capture size, with the raster embedded full-bleed.
//!
//! Everything in here is a pure function of the record snapshot and the
//! capture size; the UI boundary lives in `ui/export.rs`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::NaiveDate;
use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage};
use printpdf::{image_crate, ImageTransform, Mm, PdfDocument, Px};
use thiserror::Error;

use crate::annotation::{self, BubbleGeometry};
use crate::state::{
    format_value, Record, ANNOTATED_MARKER_COLOR, ANNOTATED_MARKER_RADIUS, AXIS_TEXT_COLOR,
    BUBBLE_BORDER_COLOR, BUBBLE_FILL_COLOR, BUBBLE_TEXT_COLOR, GRID_COLOR, GUIDE_LINE_COLOR,
    LINE_COLOR, LINE_WIDTH, MARKER_COLOR, MARKER_RADIUS, MARKER_RING_COLOR, MARKER_RING_WIDTH,
};

/// Upscale factor applied to the logical container size when rasterizing
pub const EXPORT_SCALE: u32 = 2;

/// CSS pixel density used to size PDF pages (1 px = 1/96 inch)
pub const PDF_DPI: f64 = 96.0;

// Logical chart margins, sized so top/bottom bubbles and axis labels fit
const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 50.0;
const MARGIN_TOP: f32 = 90.0;
const MARGIN_BOTTOM: f32 = 90.0;

/// Number of divisions on the value axis
const Y_DIVISIONS: usize = 4;

const AXIS_FONT_SIZE: f32 = 12.0;
const BUBBLE_FONT_SIZE: f32 = 11.0;
const GRID_DASH: f32 = 3.0;
const BUBBLE_CORNER_RADIUS: f32 = 6.0;
const BUBBLE_BORDER_WIDTH: f32 = 1.5;

/// Errors raised while capturing or writing an export artifact.
///
/// These are caught at the export boundary, logged, and surfaced as an
/// error toast; they never escape further and never leave a partial file
/// behind (both writers go through a fresh target file).
#[derive(Debug, Error)]
pub enum ExportError {
    /// The chart container has not been painted yet, or has no area
    #[error("chart is not visible yet")]
    ChartNotVisible,
    /// There are no records to draw
    #[error("no data points to export")]
    EmptyChart,
    /// PNG encoding failed
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    /// PDF assembly or serialization failed
    #[error("PDF generation failed: {0}")]
    Pdf(String),
    /// Writing the output file failed
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Requested export artifact format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Raster image, dimensions = container size x [`EXPORT_SCALE`]
    Png,
    /// Single-page document, page size = container size in px units
    Pdf,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Filter label for the save dialog
    pub fn filter_name(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG Image",
            ExportFormat::Pdf => "PDF Document",
        }
    }
}

/// Page orientation, derived from the captured aspect ratio
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        }
    }
}

/// Logical (pre-upscale) size of the chart container being captured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureSize {
    pub width: u32,
    pub height: u32,
}

impl CaptureSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Raster dimensions after upscaling
    pub fn scaled(&self) -> (u32, u32) {
        (self.width * EXPORT_SCALE, self.height * EXPORT_SCALE)
    }

    /// Landscape iff wider than tall
    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// PDF page dimensions: the logical pixel size converted at 96 dpi
    pub fn page_size_mm(&self) -> (Mm, Mm) {
        (
            Mm::from(Px(self.width as usize).into_pt(PDF_DPI as f32)),
            Mm::from(Px(self.height as usize).into_pt(PDF_DPI as f32)),
        )
    }
}

/// File name for an export performed on `date`: `chart-YYYY-MM-DD.<ext>`
pub fn export_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!("chart-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// File name for an export performed right now (local date)
pub fn export_file_name_today(format: ExportFormat) -> String {
    export_file_name(chrono::Local::now().date_naive(), format)
}

// ============================================================================
// Capture
// ============================================================================

/// Rasterize the chart for `records` (already sorted by date) into an image
/// of `size * EXPORT_SCALE` pixels on an opaque white background.
pub fn capture_chart(
    records: &[Record],
    show_notes: bool,
    size: CaptureSize,
) -> Result<RgbaImage, ExportError> {
    if size.width == 0 || size.height == 0 {
        return Err(ExportError::ChartNotVisible);
    }
    if records.is_empty() {
        return Err(ExportError::EmptyChart);
    }

    let scale = EXPORT_SCALE as f32;
    let (raster_w, raster_h) = size.scaled();
    let mut img = RgbaImage::from_pixel(raster_w, raster_h, Rgba([255, 255, 255, 255]));

    // Plot frame in logical coordinates
    let plot_left = MARGIN_LEFT;
    let plot_right = (size.width as f32 - MARGIN_RIGHT).max(plot_left + 1.0);
    let plot_top = MARGIN_TOP;
    let plot_bottom = (size.height as f32 - MARGIN_BOTTOM).max(plot_top + 1.0);

    // Value range with 10% headroom; degenerate ranges get a unit pad so a
    // flat series still draws mid-plot
    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for record in records {
        y_min = y_min.min(record.value);
        y_max = y_max.max(record.value);
    }
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let pad = (y_max - y_min) * 0.1;
    y_min -= pad;
    y_max += pad;

    let count = records.len();
    let x_pos = |index: usize| -> f32 {
        if count == 1 {
            (plot_left + plot_right) / 2.0
        } else {
            plot_left + index as f32 / (count - 1) as f32 * (plot_right - plot_left)
        }
    };
    let y_pos = |value: f64| -> f32 {
        let ratio = ((value - y_min) / (y_max - y_min)) as f32;
        plot_bottom - ratio * (plot_bottom - plot_top)
    };

    let font = export_font();

    // Horizontal grid lines and value labels
    for division in 0..=Y_DIVISIONS {
        let t = division as f64 / Y_DIVISIONS as f64;
        let value = y_min + (y_max - y_min) * t;
        let y = y_pos(value);
        dashed_segment(
            &mut img,
            [plot_left * scale, y * scale],
            [plot_right * scale, y * scale],
            GRID_DASH * scale,
            GRID_DASH * scale,
            scale,
            rgba(GRID_COLOR),
        );
        if let Some(font) = font {
            draw_text(
                &mut img,
                font,
                &format_value(value),
                [(plot_left - 8.0) * scale, y * scale],
                AXIS_FONT_SIZE * scale,
                AXIS_TEXT_COLOR,
                TextAnchor::Right,
            );
        }
    }

    // Vertical grid lines and date labels, one per record
    for (index, record) in records.iter().enumerate() {
        let x = x_pos(index);
        dashed_segment(
            &mut img,
            [x * scale, plot_top * scale],
            [x * scale, plot_bottom * scale],
            GRID_DASH * scale,
            GRID_DASH * scale,
            scale,
            rgba(GRID_COLOR),
        );
        if let Some(font) = font {
            draw_text(
                &mut img,
                font,
                &record.date,
                [x * scale, (plot_bottom + 18.0) * scale],
                AXIS_FONT_SIZE * scale,
                AXIS_TEXT_COLOR,
                TextAnchor::Center,
            );
        }
    }

    // Axis baselines
    draw_segment(
        &mut img,
        [plot_left * scale, plot_bottom * scale],
        [plot_right * scale, plot_bottom * scale],
        scale,
        rgba(GRID_COLOR),
    );
    draw_segment(
        &mut img,
        [plot_left * scale, plot_top * scale],
        [plot_left * scale, plot_bottom * scale],
        scale,
        rgba(GRID_COLOR),
    );

    // Series line
    for (index, window) in records.windows(2).enumerate() {
        let a = [x_pos(index) * scale, y_pos(window[0].value) * scale];
        let b = [x_pos(index + 1) * scale, y_pos(window[1].value) * scale];
        draw_segment(&mut img, a, b, LINE_WIDTH * scale, rgba(LINE_COLOR));
    }

    // Markers: white ring behind a filled disc
    for (index, record) in records.iter().enumerate() {
        let annotated = show_notes && record.has_note();
        let radius = if annotated {
            ANNOTATED_MARKER_RADIUS
        } else {
            MARKER_RADIUS
        };
        let fill = if annotated {
            ANNOTATED_MARKER_COLOR
        } else {
            MARKER_COLOR
        };
        let center = [x_pos(index) * scale, y_pos(record.value) * scale];
        fill_circle(
            &mut img,
            center,
            (radius + MARKER_RING_WIDTH) * scale,
            rgba(MARKER_RING_COLOR),
        );
        fill_circle(&mut img, center, radius * scale, rgba(fill));
    }

    // Note bubbles over the annotated subsequence
    for (index, placement) in annotation::placements(records, show_notes) {
        let record = &records[index];
        let geometry = annotation::bubble_geometry(
            x_pos(index),
            y_pos(record.value),
            &record.note,
            placement,
        );
        paint_bubble(&mut img, &geometry, &record.note, scale, font);
    }

    Ok(img)
}

/// Paint one bubble: dashed guide, tail, bordered rounded rectangle, text
fn paint_bubble(
    img: &mut RgbaImage,
    geometry: &BubbleGeometry,
    note: &str,
    scale: f32,
    font: Option<&Font>,
) {
    let scaled = |point: [f32; 2]| [point[0] * scale, point[1] * scale];

    dashed_segment(
        img,
        scaled(geometry.guide[0]),
        scaled(geometry.guide[1]),
        GRID_DASH * scale,
        GRID_DASH * scale,
        BUBBLE_BORDER_WIDTH * scale,
        rgba(GUIDE_LINE_COLOR),
    );

    let tail = [
        scaled(geometry.tail[0]),
        scaled(geometry.tail[1]),
        scaled(geometry.tail[2]),
    ];
    fill_triangle(img, tail, rgba(BUBBLE_FILL_COLOR));
    // The two exposed tail edges; the base is covered by the rectangle
    draw_segment(
        img,
        tail[0],
        tail[2],
        BUBBLE_BORDER_WIDTH * scale,
        rgba(BUBBLE_BORDER_COLOR),
    );
    draw_segment(
        img,
        tail[1],
        tail[2],
        BUBBLE_BORDER_WIDTH * scale,
        rgba(BUBBLE_BORDER_COLOR),
    );

    let border = BUBBLE_BORDER_WIDTH * scale;
    fill_rounded_rect(
        img,
        geometry.x * scale,
        geometry.y * scale,
        geometry.width * scale,
        geometry.height * scale,
        BUBBLE_CORNER_RADIUS * scale,
        rgba(BUBBLE_BORDER_COLOR),
    );
    fill_rounded_rect(
        img,
        geometry.x * scale + border,
        geometry.y * scale + border,
        geometry.width * scale - 2.0 * border,
        geometry.height * scale - 2.0 * border,
        (BUBBLE_CORNER_RADIUS * scale - border).max(0.0),
        rgba(BUBBLE_FILL_COLOR),
    );

    if let Some(font) = font {
        let center = geometry.center();
        draw_text(
            img,
            font,
            &annotation::display_text(note),
            [center[0] * scale, center[1] * scale],
            BUBBLE_FONT_SIZE * scale,
            BUBBLE_TEXT_COLOR,
            TextAnchor::Center,
        );
    }
}

// ============================================================================
// Writers
// ============================================================================

/// Encode the captured raster as a PNG file
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Build a single-page PDF sized to the logical capture in CSS-pixel units
/// and embed the raster full-bleed. The raster is 2x the page's pixel size,
/// so it is placed at `PDF_DPI * EXPORT_SCALE` to span the page exactly.
pub fn write_pdf(image: &RgbaImage, size: CaptureSize, path: &Path) -> Result<(), ExportError> {
    let (page_width, page_height) = size.page_size_mm();
    let title = format!("Chart Export ({})", size.orientation().name());
    let (doc, page, layer) = PdfDocument::new(title, page_width, page_height, "Chart");
    let current_layer = doc.get_page(page).get_layer(layer);

    // Re-wrap the pixels through printpdf's image types, dropping alpha;
    // the capture is already composited on opaque white
    let (raster_w, raster_h) = image.dimensions();
    let rgb_data: Vec<u8> = image
        .pixels()
        .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
        .collect();
    let rgb = image_crate::RgbImage::from_raw(raster_w, raster_h, rgb_data)
        .ok_or_else(|| ExportError::Pdf("raster buffer size mismatch".to_string()))?;
    let pdf_image = printpdf::Image::from_dynamic_image(&image_crate::DynamicImage::ImageRgb8(rgb));

    pdf_image.add_to_layer(
        current_layer,
        ImageTransform {
            dpi: Some((PDF_DPI * EXPORT_SCALE as f64) as f32),
            ..Default::default()
        },
    );

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    Ok(())
}

// ============================================================================
// Raster text
// ============================================================================

static EXPORT_FONT: OnceLock<Option<Font>> = OnceLock::new();

/// The font used for text in exported charts, resolved once per process.
/// `None` when no usable system font exists; text is then omitted from the
/// raster while all geometry stays exact.
pub fn export_font() -> Option<&'static Font> {
    EXPORT_FONT.get_or_init(load_font).as_ref()
}

fn load_font() -> Option<Font> {
    for path in system_font_paths() {
        let Ok(data) = std::fs::read(&path) else {
            continue;
        };
        match Font::from_bytes(data, FontSettings::default()) {
            Ok(font) => {
                tracing::debug!(font = %path.display(), "loaded export font");
                return Some(font);
            }
            Err(e) => {
                tracing::debug!(font = %path.display(), error = e, "failed to parse font");
            }
        }
    }
    tracing::warn!("no usable system font found; exported charts will omit text");
    None
}

/// Candidate system fonts, most common sans-serif faces per platform
fn system_font_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = [
        // Linux
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        // macOS
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    if let Ok(windir) = std::env::var("WINDIR") {
        paths.push(PathBuf::from(format!("{}\\Fonts\\segoeui.ttf", windir)));
        paths.push(PathBuf::from(format!("{}\\Fonts\\arial.ttf", windir)));
    }

    paths
}

/// Horizontal anchoring for [`draw_text`]; text is vertically centered on
/// the anchor in all cases
enum TextAnchor {
    Center,
    Right,
}

fn draw_text(
    img: &mut RgbaImage,
    font: &Font,
    text: &str,
    anchor: [f32; 2],
    size_px: f32,
    color: [u8; 3],
    align: TextAnchor,
) {
    let total_width: f32 = text
        .chars()
        .map(|ch| font.metrics(ch, size_px).advance_width)
        .sum();
    let mut pen_x = match align {
        TextAnchor::Center => anchor[0] - total_width / 2.0,
        TextAnchor::Right => anchor[0] - total_width,
    };
    // Baseline placed so the cap height straddles the anchor
    let baseline_y = anchor[1] + size_px * 0.35;

    let (img_w, img_h) = img.dimensions();
    for ch in text.chars() {
        let (metrics, bitmap) = font.rasterize(ch, size_px);
        let origin_x = pen_x + metrics.xmin as f32;
        let origin_y = baseline_y - metrics.ymin as f32 - metrics.height as f32;

        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let coverage = bitmap[row * metrics.width + col];
                if coverage == 0 {
                    continue;
                }
                let px = (origin_x + col as f32).round();
                let py = (origin_y + row as f32).round();
                if px < 0.0 || py < 0.0 || px >= img_w as f32 || py >= img_h as f32 {
                    continue;
                }
                blend_pixel(img.get_pixel_mut(px as u32, py as u32), color, coverage);
            }
        }

        pen_x += metrics.advance_width;
    }
}

fn blend_pixel(dst: &mut Rgba<u8>, color: [u8; 3], coverage: u8) {
    let alpha = coverage as f32 / 255.0;
    for channel in 0..3 {
        let blended = color[channel] as f32 * alpha + dst[channel] as f32 * (1.0 - alpha);
        dst[channel] = blended.round() as u8;
    }
    dst[3] = 255;
}

// ============================================================================
// Raster primitives
// ============================================================================

fn rgba(color: [u8; 3]) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], 255])
}

/// Distance from point `p` to the segment `a`-`b`
fn dist_to_segment(p: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
    let abx = b[0] - a[0];
    let aby = b[1] - a[1];
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        (((p[0] - a[0]) * abx + (p[1] - a[1]) * aby) / len_sq).clamp(0.0, 1.0)
    };
    let cx = a[0] + t * abx;
    let cy = a[1] + t * aby;
    ((p[0] - cx).powi(2) + (p[1] - cy).powi(2)).sqrt()
}

/// Clamped pixel bounding box helper; `None` when fully outside the image
fn clip_box(
    img: &RgbaImage,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = img.dimensions();
    if max_x < 0.0 || max_y < 0.0 || min_x >= w as f32 || min_y >= h as f32 {
        return None;
    }
    let x0 = min_x.floor().max(0.0) as u32;
    let y0 = min_y.floor().max(0.0) as u32;
    let x1 = (max_x.ceil() as u32).min(w.saturating_sub(1));
    let y1 = (max_y.ceil() as u32).min(h.saturating_sub(1));
    Some((x0, y0, x1, y1))
}

/// Draw a solid line segment of the given stroke width
fn draw_segment(img: &mut RgbaImage, a: [f32; 2], b: [f32; 2], width: f32, color: Rgba<u8>) {
    let half = width / 2.0;
    let Some((x0, y0, x1, y1)) = clip_box(
        img,
        a[0].min(b[0]) - half - 1.0,
        a[1].min(b[1]) - half - 1.0,
        a[0].max(b[0]) + half + 1.0,
        a[1].max(b[1]) + half + 1.0,
    ) else {
        return;
    };

    for py in y0..=y1 {
        for px in x0..=x1 {
            let p = [px as f32 + 0.5, py as f32 + 0.5];
            if dist_to_segment(p, a, b) <= half {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Draw a dashed line segment (`dash` on, `gap` off)
fn dashed_segment(
    img: &mut RgbaImage,
    a: [f32; 2],
    b: [f32; 2],
    dash: f32,
    gap: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON {
        return;
    }
    let dir = [dx / length, dy / length];

    let mut offset = 0.0;
    while offset < length {
        let end = (offset + dash).min(length);
        draw_segment(
            img,
            [a[0] + dir[0] * offset, a[1] + dir[1] * offset],
            [a[0] + dir[0] * end, a[1] + dir[1] * end],
            width,
            color,
        );
        offset += dash + gap;
    }
}

/// Fill a disc
fn fill_circle(img: &mut RgbaImage, center: [f32; 2], radius: f32, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = clip_box(
        img,
        center[0] - radius - 1.0,
        center[1] - radius - 1.0,
        center[0] + radius + 1.0,
        center[1] + radius + 1.0,
    ) else {
        return;
    };

    for py in y0..=y1 {
        for px in x0..=x1 {
            let dx = px as f32 + 0.5 - center[0];
            let dy = py as f32 + 0.5 - center[1];
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Fill a triangle using edge-sign tests
fn fill_triangle(img: &mut RgbaImage, points: [[f32; 2]; 3], color: Rgba<u8>) {
    let min_x = points.iter().map(|p| p[0]).fold(f32::MAX, f32::min);
    let max_x = points.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
    let min_y = points.iter().map(|p| p[1]).fold(f32::MAX, f32::min);
    let max_y = points.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
    let Some((x0, y0, x1, y1)) = clip_box(img, min_x, min_y, max_x, max_y) else {
        return;
    };

    let edge = |a: [f32; 2], b: [f32; 2], p: [f32; 2]| -> f32 {
        (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
    };

    for py in y0..=y1 {
        for px in x0..=x1 {
            let p = [px as f32 + 0.5, py as f32 + 0.5];
            let d0 = edge(points[0], points[1], p);
            let d1 = edge(points[1], points[2], p);
            let d2 = edge(points[2], points[0], p);
            let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
            let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
            if !(has_neg && has_pos) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Fill a rounded rectangle. The corner test is the usual rounded-rect
/// distance check: clamp the pixel into the deflated core and compare the
/// distance to the corner radius.
fn fill_rounded_rect(
    img: &mut RgbaImage,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    radius: f32,
    color: Rgba<u8>,
) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let r = radius.clamp(0.0, width.min(height) / 2.0);
    let Some((x0, y0, x1, y1)) = clip_box(img, x, y, x + width, y + height) else {
        return;
    };

    for py in y0..=y1 {
        for px in x0..=x1 {
            let p = [px as f32 + 0.5, py as f32 + 0.5];
            if p[0] < x || p[0] > x + width || p[1] < y || p[1] > y + height {
                continue;
            }
            let cx = p[0].clamp(x + r, x + width - r);
            let cy = p[1].clamp(y + r, y + height - r);
            let dx = p[0] - cx;
            let dy = p[1] - cy;
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(px, py, color);
            }
        }
    }
}

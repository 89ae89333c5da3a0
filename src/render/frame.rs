use crate::core::CanvasSize;
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Primitives for one viewport draw pass, each list kept in paint order.
///
/// `surface` covers the plot area plus the price and time label margins.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: CanvasSize,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: CanvasSize) -> Self {
        Self {
            surface,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Appends an axis edge, gridline or candle wick.
    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    /// Appends an axis label.
    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Appends a candle body.
    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    /// Checks the surface against canvas rules, then every primitive.
    pub fn validate(&self) -> ChartResult<()> {
        CanvasSize::validated(self.surface.width, self.surface.height)?;
        self.lines.iter().try_for_each(|line| line.validate())?;
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use crate::render::{Color, TextHAlign};

    #[test]
    fn builder_keeps_paint_order_per_layer() {
        let frame = RenderFrame::new(CanvasSize::new(200.0, 100.0))
            .with_line(LinePrimitive::new(0.0, 0.0, 10.0, 0.0, 1.0, Color::WHITE))
            .with_rect(RectPrimitive::new(1.0, 1.0, 4.0, 4.0, Color::WHITE))
            .with_line(LinePrimitive::new(0.0, 5.0, 10.0, 5.0, 2.0, Color::WHITE))
            .with_text(TextPrimitive::new(
                "1.00".to_owned(),
                12.0,
                5.0,
                10.0,
                Color::WHITE,
                TextHAlign::Left,
            ));

        assert_eq!(frame.primitive_count(), 4);
        assert_eq!(frame.lines[0].stroke_width, 1.0);
        assert_eq!(frame.lines[1].stroke_width, 2.0);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn negative_surface_fails_validation() {
        let frame = RenderFrame::new(CanvasSize::new(-1.0, 100.0));
        assert!(frame.is_empty());
        assert!(matches!(
            frame.validate(),
            Err(ChartError::InvalidCanvas { .. })
        ));
    }
}

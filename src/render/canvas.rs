use std::convert::Infallible;

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::{Baseline, Text},
};
use image::{Rgb, RgbImage};

/// Lets embedded-graphics draw into an `RgbImage`, dropping pixels outside the image.
struct Canvas<'a>(&'a mut RgbImage);

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for Canvas<'_> {
    type Color = Rgb888;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.0.dimensions();
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && (point.x as u32) < width
                && point.y >= 0
                && (point.y as u32) < height
            {
                self.0.put_pixel(
                    point.x as u32,
                    point.y as u32,
                    Rgb([color.r(), color.g(), color.b()]),
                );
            }
        }

        Ok(())
    }
}

fn rgb888(color: Rgb<u8>) -> Rgb888 {
    let [r, g, b] = color.0;
    Rgb888::new(r, g, b)
}

fn draw<D>(image: &mut RgbImage, drawable: &D)
where
    D: Drawable<Color = Rgb888>,
{
    match drawable.draw(&mut Canvas(image)) {
        Ok(_) => {}
        Err(infallible) => match infallible {},
    }
}

/// Clip the segment `start`-`end` to the image grown by `margin` on every side
/// (Liang-Barsky). Returns `None` if no part of it is left.
pub fn clip_segment(
    start: (i32, i32),
    end: (i32, i32),
    width: u32,
    height: u32,
    margin: u32,
) -> Option<((i32, i32), (i32, i32))> {
    let margin = margin as f64;
    let (x_min, y_min) = (-margin, -margin);
    let (x_max, y_max) = (width as f64 - 1.0 + margin, height as f64 - 1.0 + margin);

    let (x0, y0) = (start.0 as f64, start.1 as f64);
    let (dx, dy) = (end.0 as f64 - x0, end.1 as f64 - y0);

    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-dx, x0 - x_min),
        (dx, x_max - x0),
        (-dy, y0 - y_min),
        (dy, y_max - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| ((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
    Some((at(t0), at(t1)))
}

/// Draw a line `stroke_width` pixels wide, measured perpendicular to the line.
///
/// Endpoints may lie anywhere; the segment is clipped to the image before rasterizing.
pub fn draw_line(
    image: &mut RgbImage,
    start: (i32, i32),
    end: (i32, i32),
    stroke_width: u32,
    color: Rgb<u8>,
) {
    let stroke_width = stroke_width.max(1);
    let (width, height) = image.dimensions();
    let margin = stroke_width.saturating_add(1);
    let Some((start, end)) = clip_segment(start, end, width, height, margin) else {
        return;
    };

    let line = Line::new(Point::new(start.0, start.1), Point::new(end.0, end.1))
        .into_styled(PrimitiveStyle::with_stroke(rgb888(color), stroke_width));
    draw(image, &line);
}

/// Draw a filled disc of `radius` around `center`. Discs entirely off the image are skipped.
pub fn draw_filled_circle(image: &mut RgbImage, center: (i32, i32), radius: u32, color: Rgb<u8>) {
    let (width, height) = image.dimensions();
    let reach = radius as i64;
    let (x, y) = (center.0 as i64, center.1 as i64);
    if x < -reach || y < -reach || x > width as i64 + reach || y > height as i64 + reach {
        return;
    }

    let circle = Circle::with_center(
        Point::new(center.0, center.1),
        radius.saturating_mul(2).saturating_add(1),
    )
    .into_styled(PrimitiveStyle::with_fill(rgb888(color)));
    draw(image, &circle);
}

/// Draw `text` with its baseline starting at `origin`.
pub fn draw_text(image: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>) {
    let style = MonoTextStyle::new(&FONT_10X20, rgb888(color));
    let text = Text::with_baseline(
        text,
        Point::new(origin.0, origin.1),
        style,
        Baseline::Alphabetic,
    );
    draw(image, &text);
}

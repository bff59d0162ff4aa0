/*
 * Renderer Module
 *
 * This module draws the flock. Domain coordinates have their origin at the
 * top-left corner with y pointing down; nannou's window space is centered
 * with y pointing up, so every position is mapped before drawing. Each boid
 * is a small dot whose color is derived from where it is.
 */

use nannou::prelude::*;
use tracing::error;

use crate::app::Model;
use crate::domain::Domain;
use crate::BOID_RADIUS;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let domain = model.params.domain();
    let scale = domain_scale(&domain, window_rect);

    for position in model.flock.positions() {
        let screen_pos = domain_to_screen(position, &domain, window_rect);
        draw.ellipse()
            .xy(screen_pos)
            .radius(BOID_RADIUS * scale)
            .color(boid_color(position));
    }

    if model.params.show_debug {
        draw_debug_overlay(&draw, model, window_rect, &domain, scale);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(?err, "failed to render flock");
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(?err, "failed to render control panel");
    }
}

// Color derived from position, so neighbors share similar hues
pub fn boid_color(position: Point2) -> Rgb<u8> {
    let x = position.x / 100.0;
    let y = position.y / 100.0;

    let r = (x.sin().abs() * 255.0) as u8;
    let g = (y.sin().abs() * 255.0) as u8;
    let b = ((x.cos().abs() + y.cos().abs()) / 2.0 * 255.0) as u8;

    rgb(r, g, b)
}

// Window pixels per domain unit, keeping the whole domain visible
pub fn domain_scale(domain: &Domain, window_rect: Rect) -> f32 {
    let sx = window_rect.w() / domain.half_width;
    let sy = window_rect.h() / domain.half_height;
    sx.min(sy)
}

// Map a domain position (origin top-left, y down) into window space
pub fn domain_to_screen(position: Point2, domain: &Domain, window_rect: Rect) -> Point2 {
    let scale = domain_scale(domain, window_rect);
    pt2(
        window_rect.left() + position.x * scale,
        window_rect.top() - position.y * scale,
    )
}

fn draw_debug_overlay(draw: &Draw, model: &Model, window_rect: Rect, domain: &Domain, scale: f32) {
    // Perception radius and heading of the first boid
    if let Some(first_boid) = model.flock.boids().first() {
        let screen_pos = domain_to_screen(first_boid.position, domain, window_rect);

        draw.ellipse()
            .xy(screen_pos)
            .radius(model.params.perception_radius * scale)
            .no_fill()
            .stroke(GREEN)
            .stroke_weight(1.0);

        // Velocity is in domain space, so flip y for the window
        let heading = vec2(first_boid.velocity.x, -first_boid.velocity.y) * 5.0 * scale;
        draw.arrow()
            .start(screen_pos)
            .end(screen_pos + heading)
            .color(YELLOW)
            .stroke_weight(2.0);
    }

    let margin = 20.0;
    let line_height = 20.0;
    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in model.debug_info.lines().iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(WHITE)
            .font_size(14);
    }
}

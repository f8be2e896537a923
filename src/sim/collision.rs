//! Collision detection and response for axis-aligned boxes
//!
//! One overlap predicate is shared by every check. Response never looks at
//! penetration or contact normals: each check owns a fixed reflection rule.

use super::entity::{Aabb, Entity};
use super::vector::Vector2D;

/// True when the half-open boxes `[x, x + w) x [y, y + h)` overlap on both axes
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

/// Side walls. Points `direction.x` back into the field, so a ball still
/// overlapping a wall on the following tick keeps heading inward.
pub fn ball_wall_collision(ball: &Aabb, direction: &mut Vector2D, field_width: f32) -> bool {
    if ball.right() >= field_width {
        direction.set_x(-direction.x().abs());
        true
    } else if ball.left() < 0.0 {
        direction.set_x(direction.x().abs());
        true
    } else {
        false
    }
}

/// Ceiling. Points `direction.y` downward.
pub fn ball_ceiling_collision(ball: &Aabb, direction: &mut Vector2D) -> bool {
    if ball.top() < 0.0 {
        direction.set_y(direction.y().abs());
        true
    } else {
        false
    }
}

/// Ball has fallen past the floor by more than `margin`
pub fn ball_floor_collision(ball: &Aabb, field_height: f32, margin: f32) -> bool {
    ball.top() > field_height + margin
}

/// Paddle. Sends the ball upward; `direction.x` is never touched.
pub fn ball_paddle_collision(ball: &Aabb, paddle: &Entity, direction: &mut Vector2D) -> bool {
    if aabb_overlap(ball, &paddle.aabb()) {
        direction.set_y(-direction.y().abs());
        true
    } else {
        false
    }
}

/// Blocks, scanned in index order
///
/// The first visible block overlapping the ball is hidden, `direction.y` is
/// negated and the direction renormalised. Scanning stops there, so at most
/// one block is destroyed per tick.
pub fn ball_block_collision(
    ball: &Aabb,
    blocks: &mut [Entity],
    direction: &mut Vector2D,
) -> Option<usize> {
    let (index, block) = blocks
        .iter_mut()
        .enumerate()
        .find(|(_, block)| block.visible && aabb_overlap(ball, &block.aabb()))?;

    direction.set_y(-direction.y());
    direction.normalise();
    block.visible = false;
    Some(index)
}

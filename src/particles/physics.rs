use eframe::epaint::Vec2;

use super::Particle;

/// Advances every particle by one frame.
///
/// Particles are handled in index order. Each one is moved by its velocity,
/// bounced off the walls, and then tested against every other particle before
/// the next one moves. Every unordered pair is therefore visited twice per
/// frame, once from each side.
pub fn update_particles(particles: &mut [Particle], bounds: Vec2) {
    let n = particles.len();
    for i in 0..n {
        integrate(&mut particles[i], bounds);

        for j in 0..n {
            if j == i {
                continue;
            }
            let (p, other) = pair_mut(particles, i, j);
            collide(p, other);
        }
    }
}

/// Explicit Euler step with a unit time step, followed by wall reflection.
///
/// The velocity component is flipped whenever the disc overlaps a wall, even
/// if it already flipped on the previous frame, so a disc resting against a
/// wall can jitter.
fn integrate(p: &mut Particle, bounds: Vec2) {
    p.position += p.velocity;

    if p.position.x - p.radius < 0.0 || p.position.x + p.radius > bounds.x {
        p.velocity.x = -p.velocity.x;
    }
    if p.position.y - p.radius < 0.0 || p.position.y + p.radius > bounds.y {
        p.velocity.y = -p.velocity.y;
    }
}

/// Applies the approximate collision response between `p1` and `p2`.
///
/// If the discs overlap, a target position for `p2` is projected at exactly
/// touching distance from `p1` along the line between centers. Half of the
/// displacement from `p2` to that target is subtracted from `p1`'s velocity and
/// added to `p2`'s. Returns the delta added to `p2` (and subtracted from `p1`),
/// or `None` when the discs do not touch.
pub fn collide(p1: &mut Particle, p2: &mut Particle) -> Option<Vec2> {
    let d = p2.position - p1.position;
    let distance = d.length();
    let reach = p1.radius + p2.radius;

    if distance >= reach {
        return None;
    }

    let angle = d.y.atan2(d.x);
    let target = p1.position + Vec2::new(angle.cos(), angle.sin()) * reach;
    let delta = (target - p2.position) * 0.5;

    p1.velocity -= delta;
    p2.velocity += delta;
    Some(delta)
}

/// Two distinct mutable references into the same slice.
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

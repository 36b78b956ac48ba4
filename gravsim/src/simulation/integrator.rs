//! Per-tick integration passes for the 2D universe
//!
//! Two passes are available:
//! - `sequential_pass`: the reference overwrite-then-accumulate pass. Every
//!   ordered pair is evaluated against live state, in sequence order
//! - `symmetric_pass`: a snapshot-based half pass over unordered pairs that
//!   sums real force vectors and applies equal and opposite accelerations
//!
//! `Sequential` is the default. `Symmetric` changes simulation output and must
//! be selected explicitly.

use crate::simulation::states::{Body, NVec2, Vector2};

/// Which pass `Universe::integrate` runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorKind {
    #[default]
    Sequential,
    Symmetric,
}

/// Advance every body by one tick using the reference pass
///
/// For each body `i` in order, and each other body `j` in order, the pull of
/// `j` is applied to `i` immediately. Body `j` is read as it is at that
/// moment, so bodies visited earlier in the tick have already moved.
/// The self-skip compares slots, not values.
pub fn sequential_pass(bodies: &mut [Body], g: f64) {
    let n = bodies.len();
    if n < 2 { // nothing to pull on
        return;
    }

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (obj, tar) = pair_mut(bodies, i, j);
            let f = obj.gravitational_force(tar, g);
            obj.apply_force(f, tar);
        }
    }
}

/// Advance every body by one tick from a frozen snapshot
///
/// Forces are gathered over each unordered pair (i, j) with i < j:
///   a_i += F_ij / m_i
///   a_j -= F_ij / m_j
/// Touching pairs contribute no force and zero both bodies' incoming speed.
/// Velocity is then v + a, and position is x + v.
pub fn symmetric_pass(bodies: &mut [Body], g: f64) {
    let n = bodies.len();
    if n == 0 { // No bodies, return
        return;
    }

    let mut accel = vec![NVec2::zeros(); n];
    let mut contact = vec![false; n];

    for i in 0..n {
        let bi = &bodies[i];

        for j in (i + 1)..n {
            let bj = &bodies[j];

            if bi.distance_to(bj) <= bi.radius + bj.radius {
                contact[i] = true;
                contact[j] = true;
                continue;
            }

            // force on i, pointing at j
            let f = bi.gravitational_force(bj, g).to_nvec();

            accel[i] += f / bi.mass;
            accel[j] -= f / bj.mass;
        }
    }

    for ((b, a), touching) in bodies.iter_mut().zip(accel).zip(contact) {
        let v_old = if touching { NVec2::zeros() } else { b.velocity.to_nvec() };
        let v_new = v_old + a;

        b.acceleration = a.norm();
        b.velocity = Vector2::from_nvec(v_new);
        b.position += v_new;
    }
}

/// Mutable handle on slot `i` alongside a shared handle on slot `j`, i != j
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &Body) {
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        (&mut right[0], &left[j])
    }
}

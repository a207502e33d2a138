//! Wall reflection, pairwise contact physics, and overlap correction.
//!
//! All functions mutate subjects in place.  `Sim::tick` calls them in a
//! fixed order (walls, then every pair); they are public so the geometry can
//! be exercised on its own.

use std::f64::consts::FRAC_PI_2;

use cs_subject::Subject;

/// Outcome of a pair that was found overlapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    /// Subjects that went from susceptible to infected because of this contact.
    pub new_infections: u8,
}

/// Distance between the centres of two subjects.
#[inline]
pub fn distance(a: &Subject, b: &Subject) -> f64 {
    a.position().distance(b.position())
}

#[inline]
fn radii(a: &Subject, b: &Subject) -> f64 {
    f64::from(a.radius()) + f64::from(b.radius())
}

/// Keep `subject` inside a `width × height` arena.
///
/// Each axis whose next step (position ± radius + velocity) would cross a
/// wall has its velocity reversed.  A subject already sticking out of the
/// arena is then placed flush against that wall.
///
/// Precondition: the arena is at least `2 × radius` on both axes.
pub fn wall_collision(subject: &mut Subject, width: f64, height: f64) {
    let r = f64::from(subject.radius());

    if subject.x() - r + subject.dx() < 0.0 || subject.x() + r + subject.dx() > width {
        subject.set_dx(-subject.dx());
    }
    if subject.y() - r + subject.dy() < 0.0 || subject.y() + r + subject.dy() > height {
        subject.set_dy(-subject.dy());
    }

    if subject.y() + r > height {
        subject.set_y(height - r);
    }
    if subject.y() - r < 0.0 {
        subject.set_y(r);
    }
    if subject.x() + r > width {
        subject.set_x(width - r);
    }
    if subject.x() - r < 0.0 {
        subject.set_x(r);
    }
}

/// Test one pair and, if their disks overlap, spread infection, exchange
/// velocities, and push them apart.
///
/// Returns `None` when the disks do not overlap (nothing is changed).
pub fn subject_collision(first: &mut Subject, second: &mut Subject) -> Option<Contact> {
    if distance(first, second) >= radii(first, second) {
        return None;
    }

    let mut new_infections = 0;
    if first.is_infected() || second.is_infected() {
        new_infections += u8::from(first.infect());
        new_infections += u8::from(second.infect());
    }

    elastic_collision(first, second);
    static_collision(first, second, false);

    Some(Contact { new_infections })
}

/// Exchange velocities as an elastic collision between equal-mass disks.
///
/// Each velocity is decomposed along the axis at angle
/// `phi = atan2(x1 - x2, y1 - y2)` and its perpendicular.  The components
/// along `phi` are swapped between the two subjects and the perpendicular
/// components are kept.  Both components are expressed in an orthonormal
/// basis, so the sum of squared speeds is unchanged.
pub fn elastic_collision(first: &mut Subject, second: &mut Subject) {
    let (v1, v2) = (first.speed(), second.speed());
    let (theta1, theta2) = (first.angle(), second.angle());
    let phi = (first.x() - second.x()).atan2(first.y() - second.y());
    let perp = phi + FRAC_PI_2;

    let along1 = v1 * (theta1 - phi).cos();
    let along2 = v2 * (theta2 - phi).cos();
    let across1 = v1 * (theta1 - phi).sin();
    let across2 = v2 * (theta2 - phi).sin();

    first.set_dx(along2 * phi.cos() + across1 * perp.cos());
    first.set_dy(along2 * phi.sin() + across1 * perp.sin());
    second.set_dx(along1 * phi.cos() + across2 * perp.cos());
    second.set_dy(along1 * phi.sin() + across2 * perp.sin());
}

/// Push overlapping disks apart along the line joining their centres.
///
/// The smaller subject is moved away from the larger one by exactly the
/// overlap; with equal radii `second` is the one moved.  If rounding leaves
/// them still overlapping, a single retry moves the other subject instead
/// (`emergency`).  There is no further retry.
pub fn static_collision(first: &mut Subject, second: &mut Subject, emergency: bool) {
    let overlap = radii(first, second) - distance(first, second);

    let move_first = (first.radius() < second.radius()) != emergency;
    let (pushed, anchor): (&mut Subject, &Subject) = if move_first {
        (&mut *first, &*second)
    } else {
        (&mut *second, &*first)
    };

    let theta = (anchor.y() - pushed.y()).atan2(anchor.x() - pushed.x());
    pushed.set_x(pushed.x() - overlap * theta.cos());
    pushed.set_y(pushed.y() - overlap * theta.sin());

    if !emergency && distance(first, second) < radii(first, second) {
        static_collision(first, second, true);
    }
}

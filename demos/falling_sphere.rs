/// Falling Sphere Example
///
/// Drops a sphere through a humid mid-latitude atmosphere and steps it with
/// a simple explicit Euler loop, showing the drag force growing until the
/// sphere reaches terminal velocity. The crate only supplies the forces;
/// the integration below is what a host physics engine would normally do.

use std::f64::consts::PI;

use nalgebra::Vector3;

use aerodrag::{apply_drag_sphere, Atmosphere, RigidBody};

/// Toy body: enough engine to integrate one particle.
struct Sphere {
    velocity: Vector3<f64>,
    force: Vector3<f64>,
    mass: f64,
}

impl RigidBody for Sphere {
    fn linear_velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn add_force(&mut self, force: Vector3<f64>) {
        self.force += force;
    }
}

fn main() {
    println!("=== Falling Sphere with Quadratic Drag ===\n");

    // 15°C, 50% humidity, standard sea-level pressure, 45° latitude
    let atmo = Atmosphere::new(288.15, 0.5, 101325.0, 45.0);
    println!("Atmosphere:");
    println!("  Gravity:           {:.5} m/s²", atmo.gravity());
    println!("  Sea-level density: {:.5} kg/m³", atmo.reference_density());
    println!("  Density at 2000 m: {:.5} kg/m³", atmo.density_at(2000.0));
    println!();

    let radius = 0.11; // football-sized
    let mass = 0.43; // kg
    let start_altitude = 2000.0;

    let mut sphere = Sphere {
        velocity: Vector3::zeros(),
        force: Vector3::zeros(),
        mass,
    };
    let mut altitude = start_altitude;

    let dt = 0.01;
    let mut t = 0.0;

    println!("Drop from {start_altitude} m (radius {radius} m, mass {mass} kg):");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  t (s) | altitude (m) | speed (m/s) | drag (N)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut next_report = 0.0;
    while altitude > 0.0 && t < 60.0 {
        sphere.force = Vector3::zeros();
        apply_drag_sphere(&mut sphere, radius, atmo.density_at(altitude));
        let drag = sphere.force.norm();

        if t >= next_report {
            println!(
                "  {t:5.1} | {altitude:12.1} | {:11.2} | {drag:8.3}",
                sphere.velocity.norm()
            );
            next_report += 2.0;
        }

        // gravity plus accumulated drag, explicit Euler
        let accel = Vector3::new(0.0, -atmo.gravity(), 0.0) + sphere.force / sphere.mass;
        sphere.velocity += accel * dt;
        altitude += sphere.velocity.y * dt;
        t += dt;
    }

    let rho = atmo.density_at(0.0);
    let terminal = (2.0 * mass * atmo.gravity() / (rho * 0.47 * PI * radius * radius)).sqrt();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("\nImpact after {t:.1} s at {:.2} m/s", sphere.velocity.norm());
    println!("Analytic sea-level terminal velocity: {terminal:.2} m/s");
}

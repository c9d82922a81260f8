//! Decorative particle background.

use rand::Rng;

use crate::config::ParticleConfig;
use crate::dom::{Dom, NodeId};

pub const PARTICLES_ID: &str = "particles";
pub const PARTICLE_CLASS: &str = "particle";

/// Fills the particle container with randomly placed elements.
///
/// Generation is wholesale: every call clears the container first, so the
/// child count always equals the configured count afterwards.
#[derive(Debug, Clone)]
pub struct ParticleField {
    container: Option<NodeId>,
    config: ParticleConfig,
}

impl ParticleField {
    pub fn new(dom: &impl Dom, config: &ParticleConfig) -> Self {
        let container = dom.element_by_id(PARTICLES_ID);
        if container.is_none() {
            tracing::warn!("Particle container not found");
        }
        Self {
            container,
            config: config.clone(),
        }
    }

    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Replace all particles. Returns how many were created.
    pub fn generate<R: Rng>(&self, dom: &mut impl Dom, rng: &mut R) -> usize {
        let Some(container) = self.container else {
            return 0;
        };
        dom.clear_children(container);

        let c = &self.config;
        for _ in 0..c.count {
            let particle = dom.create_element("div");
            dom.add_class(particle, PARTICLE_CLASS);

            let left = rng.random_range(0.0..100.0);
            let top = rng.random_range(0.0..100.0);
            let size = uniform(rng, c.min_size, c.max_size);
            let delay = uniform(rng, 0.0, c.max_delay_secs);
            let duration = uniform(rng, c.min_duration_secs, c.max_duration_secs);

            dom.set_style(particle, "left", &format!("{}%", left));
            dom.set_style(particle, "top", &format!("{}%", top));
            dom.set_style(particle, "width", &format!("{}px", size));
            dom.set_style(particle, "height", &format!("{}px", size));
            dom.set_style(particle, "animation-delay", &format!("{}s", delay));
            dom.set_style(particle, "animation-duration", &format!("{}s", duration));

            dom.append_child(container, particle);
        }

        tracing::debug!("Particles created: {}", c.count);
        c.count
    }
}

/// Uniform sample in `[low, high)`, tolerating an empty range
fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn page() -> MemoryDom {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let container = dom.append_new(body, "div");
        dom.set_attribute(container, "id", PARTICLES_ID);
        dom
    }

    fn parse(value: Option<String>, unit: &str) -> f64 {
        value.unwrap().trim_end_matches(unit).parse().unwrap()
    }

    #[test]
    fn generates_configured_count_within_ranges() {
        let mut dom = page();
        let config = ParticleConfig::default();
        let field = ParticleField::new(&dom, &config);
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(field.generate(&mut dom, &mut rng), 50);

        let particles = dom.children(field.container().unwrap());
        assert_eq!(particles.len(), 50);
        for p in particles {
            assert!(dom.has_class(p, PARTICLE_CLASS));
            let left = parse(dom.style(p, "left"), "%");
            assert!((0.0..100.0).contains(&left));
            let size = parse(dom.style(p, "width"), "px");
            assert!((2.0..6.0).contains(&size));
            assert_eq!(dom.style(p, "width"), dom.style(p, "height"));
            let delay = parse(dom.style(p, "animation-delay"), "s");
            assert!((0.0..6.0).contains(&delay));
            let duration = parse(dom.style(p, "animation-duration"), "s");
            assert!((4.0..8.0).contains(&duration));
        }
    }

    #[test]
    fn regeneration_replaces_previous_particles() {
        let mut dom = page();
        let field = ParticleField::new(&dom, &ParticleConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        field.generate(&mut dom, &mut rng);
        let first = dom.children(field.container().unwrap());
        field.generate(&mut dom, &mut rng);
        let second = dom.children(field.container().unwrap());

        assert_eq!(second.len(), 50);
        assert!(first.iter().all(|p| !dom.exists(*p)));
    }

    #[test]
    fn missing_container_generates_nothing() {
        let mut dom = MemoryDom::default();
        let field = ParticleField::new(&dom, &ParticleConfig::default());
        assert_eq!(field.generate(&mut dom, &mut StdRng::seed_from_u64(0)), 0);
    }

    #[test]
    fn degenerate_range_uses_lower_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(uniform(&mut rng, 4.0, 4.0), 4.0);
    }
}

pub const EASTER_EGG_CLICKS: u32 = 7;

pub const CODE_SNIPPETS: [&str; 15] = [
    "const app = express();",
    "SELECT * FROM users",
    "git push origin main",
    "docker compose up -d",
    "npm run build",
    "async/await",
    "REST API",
    "<Component />",
    "useEffect(() => {})",
    "deploy: production",
    ".env.local",
    "middleware()",
    "GraphQL",
    "CI/CD Pipeline",
    "kubectl apply",
];

/// Deterministic value in `[0, 1)` so floating snippets land in the same
/// place on every render.
pub fn seeded_random(seed: u32) -> f64 {
    let x = (f64::from(seed) + 1.0).sin() * 10_000.0;
    x - x.floor()
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingSnippet {
    pub text: &'static str,
    pub left_percent: f64,
    pub top_percent: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub font_px: f64,
}

impl FloatingSnippet {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; font-size: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_percent, self.top_percent, self.font_px, self.duration_s, self.delay_s
        )
    }
}

pub fn floating_snippets() -> Vec<FloatingSnippet> {
    CODE_SNIPPETS
        .into_iter()
        .zip(0u32..)
        .map(|(text, i)| FloatingSnippet {
            text,
            left_percent: seeded_random(i * 3) * 100.0,
            top_percent: seeded_random(i * 7 + 1) * 100.0,
            duration_s: 15.0 + seeded_random(i * 11 + 2) * 25.0,
            delay_s: f64::from(i) * 0.8,
            font_px: 10.0 + seeded_random(i * 13 + 3) * 3.0,
        })
        .collect()
}

pub const PARTICLE_COLORS: [&str; 5] = ["#818cf8", "#a78bfa", "#c084fc", "#67e8f9", "#34d399"];

pub const PARTICLE_BURST_MS: u32 = 700;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub dx: f64,
    pub dy: f64,
    pub size: f64,
    pub color: &'static str,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "--dx: {:.1}px; --dy: {:.1}px; width: {:.1}px; height: {:.1}px; background: {};",
            self.dx, self.dy, self.size, self.size, self.color
        )
    }
}

/// One click's worth of particles, removed [`PARTICLE_BURST_MS`] after it spawns.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBurst {
    pub id: u32,
    pub spawned_at_ms: f64,
    pub particles: Vec<Particle>,
}

impl ParticleBurst {
    pub fn new(id: u32, spawned_at_ms: f64) -> Self {
        let mut seed = id.wrapping_mul(97);
        let mut next = move || {
            seed = seed.wrapping_add(1);
            seeded_random(seed)
        };
        let count = 8 + (next() * 6.0) as usize;
        let particles = (0..count)
            .map(|_| {
                let angle = next() * std::f64::consts::TAU;
                let distance = 40.0 + next() * 80.0;
                let size = 3.0 + next() * 5.0;
                let color = PARTICLE_COLORS[(next() * PARTICLE_COLORS.len() as f64) as usize];
                Particle {
                    dx: angle.cos() * distance,
                    dy: angle.sin() * distance,
                    size,
                    color,
                }
            })
            .collect();
        Self {
            id,
            spawned_at_ms,
            particles,
        }
    }

    pub fn expires_at_ms(&self) -> f64 {
        self.spawned_at_ms + f64::from(PARTICLE_BURST_MS)
    }
}

pub fn prune_bursts(bursts: &mut Vec<ParticleBurst>, now_ms: f64) {
    bursts.retain(|burst| burst.expires_at_ms() > now_ms);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EasterEgg {
    clicks: u32,
    active: bool,
}

impl EasterEgg {
    /// Records one click and returns `true` only on the click that activates it.
    pub fn register_click(&mut self) -> bool {
        self.clicks = self.clicks.saturating_add(1);
        if !self.active && self.clicks >= EASTER_EGG_CLICKS {
            self.active = true;
            return true;
        }
        false
    }

    pub fn is_active(self) -> bool {
        self.active
    }

    pub fn progress_dots(self) -> Option<Vec<bool>> {
        if self.active || self.clicks == 0 {
            return None;
        }
        Some((0..EASTER_EGG_CLICKS).map(|i| i < self.clicks).collect())
    }

    pub fn roles<'a>(self, language_roles: &'a [String], override_roles: &'a [String]) -> &'a [String] {
        if self.active && !override_roles.is_empty() {
            override_roles
        } else {
            language_roles
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_random_is_deterministic_and_in_unit_range() {
        for seed in 0..200 {
            let value = seeded_random(seed);
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, seeded_random(seed));
        }
    }

    #[test]
    fn floating_snippets_cover_every_snippet_in_bounds() {
        let snippets = floating_snippets();

        assert_eq!(snippets.len(), CODE_SNIPPETS.len());
        for snippet in &snippets {
            assert!((0.0..100.0).contains(&snippet.left_percent));
            assert!((0.0..100.0).contains(&snippet.top_percent));
            assert!((15.0..40.0).contains(&snippet.duration_s));
            assert!((10.0..13.0).contains(&snippet.font_px));
        }
        assert_eq!(snippets[2].delay_s, 1.6);
    }

    #[test]
    fn easter_egg_activates_on_seventh_click_only() {
        let mut egg = EasterEgg::default();

        for _ in 0..6 {
            assert!(!egg.register_click());
        }
        assert!(!egg.is_active());
        assert!(egg.register_click());
        assert!(egg.is_active());
        assert!(!egg.register_click());
        assert!(egg.is_active());
    }

    #[test]
    fn progress_dots_track_clicks_until_activation() {
        let mut egg = EasterEgg::default();
        assert_eq!(egg.progress_dots(), None);

        egg.register_click();
        egg.register_click();
        let dots = egg.progress_dots().expect("dots visible");
        assert_eq!(dots.len(), EASTER_EGG_CLICKS as usize);
        assert_eq!(dots.iter().filter(|filled| **filled).count(), 2);

        for _ in 0..5 {
            egg.register_click();
        }
        assert_eq!(egg.progress_dots(), None);
    }

    #[test]
    fn override_roles_apply_only_when_active_and_non_empty() {
        let language = vec!["Developer".to_string()];
        let special = vec!["Bug Whisperer".to_string()];
        let mut egg = EasterEgg::default();

        assert_eq!(egg.roles(&language, &special), language.as_slice());
        for _ in 0..EASTER_EGG_CLICKS {
            egg.register_click();
        }
        assert_eq!(egg.roles(&language, &special), special.as_slice());
        assert_eq!(egg.roles(&language, &[]), language.as_slice());
    }

    #[test]
    fn particle_bursts_stay_within_size_distance_and_palette() {
        for id in 0..50 {
            let burst = ParticleBurst::new(id, 0.0);
            assert!((8..=13).contains(&burst.particles.len()));
            for particle in &burst.particles {
                let distance = particle.dx.hypot(particle.dy);
                assert!((40.0 - 1e-9..120.0 + 1e-9).contains(&distance));
                assert!((3.0..8.0).contains(&particle.size));
                assert!(PARTICLE_COLORS.contains(&particle.color));
            }
        }
        assert_eq!(ParticleBurst::new(3, 0.0), ParticleBurst::new(3, 0.0));
    }

    #[test]
    fn bursts_are_pruned_once_their_lifetime_elapses() {
        let mut bursts = vec![ParticleBurst::new(1, 1_000.0), ParticleBurst::new(2, 1_500.0)];

        prune_bursts(&mut bursts, 1_699.0);
        assert_eq!(bursts.len(), 2);
        prune_bursts(&mut bursts, 1_700.0);
        assert_eq!(bursts.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2]);
        prune_bursts(&mut bursts, 2_200.0);
        assert!(bursts.is_empty());
    }

    #[test]
    fn particle_style_sets_travel_and_colour() {
        let particle = Particle {
            dx: 12.0,
            dy: -4.5,
            size: 5.0,
            color: PARTICLE_COLORS[0],
        };
        assert_eq!(
            particle.style(),
            "--dx: 12.0px; --dy: -4.5px; width: 5.0px; height: 5.0px; background: #818cf8;"
        );
    }
}

use crate::scene::object::sphere::Sphere;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection<'a> {
    time: f64,
    sphere: &'a Sphere,
}

impl<'a> Intersection<'a> {
    pub fn new(time: f64, sphere: &'a Sphere) -> Self {
        Self { time, sphere }
    }

    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn sphere(&self) -> &'a Sphere {
        self.sphere
    }
}

/// Keeps only the nearest intersection time found inside the open range `(min_t, max_t)`.
/// Candidates equal to the current nearest are rejected, so the first one added wins ties.
#[derive(Clone, Debug)]
pub struct IntersectionCollector<'a> {
    min_t: f64,
    max_t: f64,
    hit: Option<Intersection<'a>>,
}

impl<'a> IntersectionCollector<'a> {
    pub fn new(min_t: f64, max_t: f64) -> Self {
        Self {
            min_t,
            max_t,
            hit: None,
        }
    }

    fn nearest_time(&self) -> f64 {
        self.hit.map_or(self.max_t, |hit| hit.time())
    }

    pub fn add(&mut self, time: f64, sphere: &'a Sphere) {
        let in_range = self.min_t < time && time < self.max_t;
        if in_range && time < self.nearest_time() {
            self.hit = Some(Intersection::new(time, sphere));
        }
    }

    pub fn hit(&self) -> Option<Intersection<'a>> {
        self.hit
    }
}
